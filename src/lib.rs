#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod output;

/// Returns the text of the 1-based `line` of `source`, without its line ending.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}


/// Formats a diagnostic with the offending source line.
///
/// ```text
/// Error: IllegalCharacter
/// -> prog.tiny
///   |
/// 2 | y := @;
/// ```
pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;
    let line_text = get_source_line(source, error.get_line()).unwrap_or("");

    let mut result = String::new();

    if let ErrorTip::None = error.get_tip() {
        result.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        result.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    result.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));
    result.push_str(&format!("{:>padding$}\n", "|"));
    result.push_str(&format!("{} | {}\n", line_string, line_text.trim()));

    result
}

pub fn display_error(error: &Error, source: &str, file: &Path) {
    eprint!("{}", render_error(error, source, file));
}
