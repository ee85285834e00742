//! Rendering of scanned tokens to the `value, KIND` listing format.

use std::{fs, io, path::Path};

use crate::lexer::tokens::{Token, TokenKind};

/// Renders one `value, KIND` line per token, stopping at the EOF token.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut result = String::new();

    for token in tokens {
        if token.kind == TokenKind::EOF {
            break;
        }

        // Scanned tokens never span lines; kept for the listing format's `newline` entries.
        let value = if token.value.contains('\n') {
            "newline"
        } else {
            token.value.as_str()
        };

        result.push_str(&format!("{}, {}\n", value, token.kind));
    }

    result
}

pub fn write_tokens(tokens: &[Token], path: &Path) -> io::Result<()> {
    fs::write(path, render_tokens(tokens))
}
