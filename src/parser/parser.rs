//! Parser implementation
//!
//! `Parser` owns the token queue shared by the program-level and
//! statement-level grammars (see `program.rs` and `statement.rs`). Tokens are
//! only ever taken from the front; nothing is pushed back.

use std::collections::VecDeque;

use crate::error::{BlError, BlResult, ParseErrorKind};
use crate::lexer::{Keyword, Token};

/// How many `IF`/`WHILE` statements may enclose one another. Deeper input is
/// rejected with `ParseErrorKind::NestingTooDeep` before the recursion can
/// exhaust the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parser for BL token streams
pub struct Parser {
    tokens: VecDeque<Token>,
    depth: usize,
}

impl Parser {
    /// Create a new parser from tokens, normally ending with the
    /// end-of-input sentinel produced by the lexer
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
            depth: 0,
        }
    }

    /// Create a parser from bare words, appending the end-of-input sentinel
    /// when the words do not already end with it
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<Token> = words
            .into_iter()
            .map(|word| Token::from_word(word, None))
            .collect();

        if !tokens.last().is_some_and(Token::is_end_of_input) {
            tokens.push(Token::end_of_input(None));
        }

        Self::new(tokens)
    }

    /// Tokens not consumed yet
    pub fn remaining(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    // ===== Helper Methods =====

    pub(super) fn front(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub(super) fn front_is(&self, keyword: Keyword) -> bool {
        matches!(self.front(), Some(t) if t.lexeme == keyword.as_str())
    }

    pub(super) fn front_is_end_of_input(&self) -> bool {
        self.front().is_some_and(Token::is_end_of_input)
    }

    /// Require that only the end-of-input sentinel is left
    pub fn expect_end_of_input(&self) -> BlResult<()> {
        match self.front() {
            Some(front) if front.is_end_of_input() => Ok(()),
            Some(extra) => Err(Self::error(
                ParseErrorKind::TrailingTokens,
                format!("terms still remain, starting at {}", extra.lexeme),
                extra,
            )),
            None => Err(Self::end_of_input_error()),
        }
    }

    /// Enter one more level of `IF`/`WHILE` nesting
    pub(super) fn nest(&mut self) -> BlResult<()> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(match self.front() {
                Some(front) => Self::error(
                    ParseErrorKind::NestingTooDeep,
                    format!("statements nested more than {} deep", MAX_NESTING_DEPTH),
                    front,
                ),
                None => Self::end_of_input_error(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn unnest(&mut self) {
        self.depth -= 1;
    }

    pub(super) fn dequeue(&mut self) -> BlResult<Token> {
        self.tokens.pop_front().ok_or_else(Self::end_of_input_error)
    }

    pub(super) fn end_of_input_error() -> BlError {
        BlError::parse_error(
            ParseErrorKind::UnexpectedEndOfInput,
            "token stream ended before the end-of-input marker",
            None,
        )
    }

    /// Dequeue a token that must be exactly `keyword`
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> BlResult<Token> {
        self.expect_lexeme(keyword.as_str())
    }

    /// Dequeue a token that must be exactly `expected`
    pub(super) fn expect_lexeme(&mut self, expected: &str) -> BlResult<Token> {
        let token = self.dequeue()?;
        if token.lexeme == expected {
            Ok(token)
        } else {
            Err(Self::error(
                ParseErrorKind::UnexpectedToken,
                format!("expected {} instead of {}", expected, token.lexeme),
                &token,
            )
            .with_expected(expected))
        }
    }

    /// Parse error pointing at `token`
    pub(super) fn error(
        kind: ParseErrorKind,
        message: impl Into<String>,
        token: &Token,
    ) -> BlError {
        BlError::parse_error(kind, message, token.location.clone())
            .with_found(token.lexeme.as_str())
    }
}
