//! Lexer/Scanner implementation for the BL language
//!
//! Whitespace and `//` comments are dropped; every other run of letters,
//! digits and `-` becomes one token. The output always ends with the
//! end-of-input sentinel.

use super::token::Token;
use super::vocabulary::is_word_char;
use crate::error::{BlError, BlResult, SourceLocation};

/// Lexer for BL source code
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    start_column: usize,
    filename: Option<String>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str, filename: Option<&str>) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_column: 1,
            filename: filename.map(|s| s.to_string()),
        }
    }

    /// Tokenize the source code
    pub fn tokenize(&mut self) -> BlResult<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_column = self.column;
            self.scan_token()?;
        }

        self.tokens
            .push(Token::end_of_input(Some(self.current_location())));

        tracing::debug!(
            filename = self.filename.as_deref().unwrap_or("<input>"),
            count = self.tokens.len(),
            "tokenized source"
        );

        Ok(std::mem::take(&mut self.tokens))
    }

    fn scan_token(&mut self) -> BlResult<()> {
        let c = self.advance();

        match c {
            ' ' | '\r' | '\t' => Ok(()),

            '\n' => {
                self.line += 1;
                self.column = 1;
                Ok(())
            }

            '/' => {
                if self.match_char('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                    Ok(())
                } else {
                    Err(self.error("Unexpected character '/'. Did you mean '//'?"))
                }
            }

            c if is_word_char(c) => self.scan_word(),

            _ => Err(self.error(&format!("Unexpected character '{}'", c))),
        }
    }

    fn scan_word(&mut self) -> BlResult<()> {
        while is_word_char(self.peek()) {
            self.advance();
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let location = SourceLocation::new(self.line, self.start_column, self.filename.clone());
        self.tokens.push(Token::from_word(lexeme, Some(location)));
        Ok(())
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            self.column += 1;
            true
        }
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.filename.clone())
    }

    /// Error pointing at the character that started the current token
    fn error(&self, message: &str) -> BlError {
        BlError::lexer_error(
            message,
            SourceLocation::new(self.line, self.start_column, self.filename.clone()),
        )
    }
}
