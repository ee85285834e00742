//! Lexical analysis for TINY source text.
//!
//! This module contains the scanner that converts source code into a
//! stream of tokens. It handles:
//!
//! - Single and two-character operators (`:=`)
//! - Keywords, identifiers and integer literals
//! - Line tracking, including newlines inside `/* */` comments
//! - Unrecognised input, reported in-band as `Illegal` tokens

pub mod lexer;
pub mod tokens;
