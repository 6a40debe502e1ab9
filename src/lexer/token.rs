//! Token definitions for the BL language

use super::vocabulary::{self, Condition, Keyword, END_OF_INPUT};
use crate::error::SourceLocation;
use std::fmt;

/// A token in the BL language
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    /// Absent for tokens built from bare words
    pub location: Option<SourceLocation>,
}

impl Token {
    /// Create a new token
    pub fn new(token_type: TokenType, lexeme: String, location: Option<SourceLocation>) -> Self {
        Self {
            token_type,
            lexeme,
            location,
        }
    }

    /// Classify a word and wrap it as a token
    pub fn from_word(word: impl Into<String>, location: Option<SourceLocation>) -> Self {
        let lexeme = word.into();
        Self::new(TokenType::classify(&lexeme), lexeme, location)
    }

    /// The end-of-input sentinel
    pub fn end_of_input(location: Option<SourceLocation>) -> Self {
        Self::new(TokenType::EndOfInput, END_OF_INPUT.to_string(), location)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.lexeme == END_OF_INPUT
    }
}

/// Token types in the BL language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Keyword(Keyword),
    Condition(Condition),
    Identifier,
    /// A word that is neither keyword, condition nor identifier, e.g. `3x`
    Unknown,
    EndOfInput,
}

impl TokenType {
    pub fn classify(word: &str) -> Self {
        if word == END_OF_INPUT {
            Self::EndOfInput
        } else if let Some(keyword) = Keyword::from_str(word) {
            Self::Keyword(keyword)
        } else if vocabulary::is_condition(word) {
            // is_condition guarantees the lookup succeeds
            Condition::from_token(word).map_or(Self::Unknown, Self::Condition)
        } else if vocabulary::is_identifier(word) {
            Self::Identifier
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(kw) => write!(f, "keyword '{}'", kw),
            Self::Condition(c) => write!(f, "condition '{}'", c),
            Self::Identifier => write!(f, "identifier"),
            Self::Unknown => write!(f, "unknown"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(TokenType::classify("BEGIN"), TokenType::Keyword(Keyword::Begin));
        assert_eq!(
            TokenType::classify("next-is-wall"),
            TokenType::Condition(Condition::NextIsWall)
        );
        assert_eq!(TokenType::classify("turnleft"), TokenType::Identifier);
        assert_eq!(TokenType::classify("9lives"), TokenType::Unknown);
        assert_eq!(TokenType::classify(END_OF_INPUT), TokenType::EndOfInput);
    }

    #[test]
    fn test_end_of_input_token() {
        let token = Token::end_of_input(None);
        assert!(token.is_end_of_input());
        assert_eq!(token.lexeme, END_OF_INPUT);
    }

    #[test]
    fn test_token_type_display() {
        assert_eq!(TokenType::Keyword(Keyword::If).to_string(), "keyword 'IF'");
        assert_eq!(
            TokenType::Condition(Condition::Random).to_string(),
            "condition 'random'"
        );
    }
}
