//! Error handling and diagnostics for the BL parser
//!
//! Every failure is fatal: the lexer and parsers return the first error they
//! find and never try to recover.

use std::fmt;

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for BL operations
pub type BlResult<T> = Result<T, BlError>;

/// Position of the first character of a token, 1-based
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    pub filename: Option<String>,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(filename) = &self.filename {
            write!(f, "{}:", filename)?;
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The rule a parse error violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token differs from the single literal the grammar expects
    UnexpectedToken,
    /// A program or instruction name is not a valid identifier
    InvalidIdentifier,
    /// A condition position holds a non-condition, or a call position holds a condition
    InvalidCondition,
    /// An instruction name is duplicated or shadows a primitive
    NamespaceViolation,
    /// Tokens remain after `END <program-name>`
    TrailingTokens,
    /// The token stream ran out before the end-of-input sentinel
    UnexpectedEndOfInput,
    /// `IF`/`WHILE` statements nested deeper than the parser allows
    NestingTooDeep,
}

impl ParseErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnexpectedToken => "unexpected token",
            Self::InvalidIdentifier => "invalid identifier",
            Self::InvalidCondition => "invalid condition",
            Self::NamespaceViolation => "namespace violation",
            Self::TrailingTokens => "trailing tokens",
            Self::UnexpectedEndOfInput => "unexpected end of input",
            Self::NestingTooDeep => "nesting too deep",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the BL parser
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlError {
    /// Lexical analysis error
    #[error("Lexer Error: {message} at {location}")]
    LexerError {
        message: String,
        location: SourceLocation,
    },

    /// Parsing error
    #[error("Parse Error: {message}{}", fmt_location(.location))]
    ParseError {
        kind: ParseErrorKind,
        message: String,
        location: Option<SourceLocation>,
        /// Lexeme of the offending token
        found: Option<String>,
        /// The literal the grammar wanted instead, for `UnexpectedToken`
        expected: Option<String>,
    },
}

fn fmt_location(location: &Option<SourceLocation>) -> String {
    match location {
        Some(location) => format!(" at {}", location),
        None => String::new(),
    }
}

impl BlError {
    /// Create a new lexer error
    pub fn lexer_error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::LexerError {
            message: message.into(),
            location,
        }
    }

    /// Create a new parse error not tied to a particular token
    pub fn parse_error(
        kind: ParseErrorKind,
        message: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Self {
        Self::ParseError {
            kind,
            message: message.into(),
            location,
            found: None,
            expected: None,
        }
    }

    /// Record the lexeme of the offending token
    pub fn with_found(mut self, lexeme: impl Into<String>) -> Self {
        if let Self::ParseError { found, .. } = &mut self {
            *found = Some(lexeme.into());
        }
        self
    }

    /// Record the literal that was expected in place of the offending token
    pub fn with_expected(mut self, literal: impl Into<String>) -> Self {
        if let Self::ParseError { expected, .. } = &mut self {
            *expected = Some(literal.into());
        }
        self
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::LexerError { .. } => "Lexer Error",
            Self::ParseError { .. } => "Parse Error",
        }
    }

    /// Get the violated parse rule, if this is a parse error
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            Self::ParseError { kind, .. } => Some(*kind),
            Self::LexerError { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::LexerError { message, .. } | Self::ParseError { message, .. } => message,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::LexerError { location, .. } => Some(location),
            Self::ParseError { location, .. } => location.as_ref(),
        }
    }

    pub fn found(&self) -> Option<&str> {
        match self {
            Self::ParseError { found, .. } => found.as_deref(),
            Self::LexerError { .. } => None,
        }
    }

    pub fn expected(&self) -> Option<&str> {
        match self {
            Self::ParseError { expected, .. } => expected.as_deref(),
            Self::LexerError { .. } => None,
        }
    }
}
