use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tiny_scanner::{
    display_error, errors::errors::collect_diagnostics, lexer::lexer::tokenize,
    output::write_tokens,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Scans a TINY source file and writes its token listing.
#[derive(Parser, Debug)]
#[command(name = "tiny-scanner")]
#[command(version, about = "Lexical scanner for the TINY language", long_about = None)]
struct Cli {
    /// The TINY source file to scan
    input: PathBuf,

    /// Where to write the token listing
    #[arg(default_value = "output.txt")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "TINY_SCANNER_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "TINY_SCANNER_NO_COLOR")]
    no_color: bool,

    /// Exit with a failure status if the source contains illegal tokens
    #[arg(long, env = "TINY_SCANNER_STRICT")]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Returns `Ok(false)` when strict mode found illegal tokens.
fn run(cli: &Cli) -> Result<bool> {
    println!("TINY Scanner Project");

    let source = read_to_string(&cli.input)
        .with_context(|| format!("Error reading file '{}'", cli.input.display()))?;

    println!("Scanning file: {}", cli.input.display());

    let start = Instant::now();
    let tokens = tokenize(&source);
    tracing::debug!("Tokenized in {:?}", start.elapsed());

    for token in &tokens {
        tracing::trace!("{}", token);
    }

    write_tokens(&tokens, &cli.output).with_context(|| {
        format!("Error writing output file '{}'", cli.output.display())
    })?;

    println!("Successfully scanned {} tokens.", tokens.len());
    println!("Output written to: {}", cli.output.display());

    let diagnostics = collect_diagnostics(&tokens);
    if !diagnostics.is_empty() {
        tracing::warn!("{} illegal token(s) found", diagnostics.len());
    }

    if cli.strict && !diagnostics.is_empty() {
        for error in &diagnostics {
            display_error(error, &source, &cli.input);
        }
        return Ok(false);
    }

    Ok(true)
}
