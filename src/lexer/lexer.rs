use unicode_general_category::{get_general_category, GeneralCategory};

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// A single scan session over one source string.
///
/// `start` and `current` are byte offsets and always sit on char boundaries.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    start: usize,
    current: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source and returns the tokens, terminated by a single EOF token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.at_eof() {
            self.start = self.current;
            self.scan_token();
        }

        self.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.line));
        self.tokens
    }

    fn scan_token(&mut self) {
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return,
        };

        match ch {
            '(' => self.add_token(TokenKind::OpenParen),
            ')' => self.add_token(TokenKind::CloseParen),
            ';' => self.add_token(TokenKind::Semicolon),
            '+' => self.add_token(TokenKind::Plus),
            '-' => self.add_token(TokenKind::Minus),
            '*' => self.add_token(TokenKind::Multiply),
            '<' => self.add_token(TokenKind::LessThan),
            '=' => self.add_token(TokenKind::Equal),
            ':' => {
                if self.matches('=') {
                    self.add_token(TokenKind::Assign);
                } else {
                    self.add_token(TokenKind::Illegal);
                }
            }
            '/' => {
                if self.matches('*') {
                    self.comment();
                } else {
                    self.add_token(TokenKind::Divide);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            _ if is_digit(ch) => self.number(),
            _ if is_alpha(ch) => self.identifier(),
            _ => self.add_token(TokenKind::Illegal),
        }
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.current..]
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn add_token(&mut self, kind: TokenKind) {
        let value = String::from(&self.source[self.start..self.current]);
        self.push(MK_TOKEN!(kind, value, self.line));
    }

    /// Skips a `/* ... */` block. An unterminated comment runs to the end of input.
    fn comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '*' && self.peek_next() == Some('/') {
                self.current += 2;
                return;
            }

            if ch == '\n' {
                self.line += 1;
            }

            self.current += ch.len_utf8();
        }
    }

    fn number(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.advance();
        }

        self.add_token(TokenKind::Number);
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];

        if let Some(kind) = RESERVED_LOOKUP.get(text) {
            self.add_token(*kind);
        } else {
            self.add_token(TokenKind::Identifier);
        }
    }
}

/// Decimal digits (Nd) only; `²`, `½` and `Ⅻ` are not digits.
fn is_digit(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::DecimalNumber
}

/// Letters (L*) only; combining marks and letter numbers are excluded.
fn is_alpha(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_alphanumeric(ch: char) -> bool {
    is_alpha(ch) || is_digit(ch)
}

pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens = Lexer::new(source).scan_tokens();

    tracing::debug!(
        tokens = tokens.len(),
        keywords = tokens.iter().filter(|t| t.kind.is_keyword()).count(),
        lines = tokens.last().map(|t| t.line).unwrap_or(1),
        "scanned source"
    );

    tokens
}
