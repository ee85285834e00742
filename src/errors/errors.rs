use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::MalformedAssign => "MalformedAssign",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedAssign => {
                ErrorTip::Suggestion(String::from("Lone `:`, did you mean `:=`?"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character: {token:?}")]
    IllegalCharacter { token: String },
    #[error("expected `=` after `:`")]
    MalformedAssign,
}

/// Builds one diagnostic per `Illegal` token, in source order.
///
/// The scanner never fails on its own; callers that want to treat illegal
/// input as an error derive it from the token stream here.
pub fn collect_diagnostics(tokens: &[Token]) -> Vec<Error> {
    tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Illegal)
        .map(|token| {
            let error_impl = if token.value == ":" {
                ErrorImpl::MalformedAssign
            } else {
                ErrorImpl::IllegalCharacter {
                    token: token.value.clone(),
                }
            };

            Error::new(error_impl, token.line)
        })
        .collect()
}
