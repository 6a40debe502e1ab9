//! The fixed BL vocabulary
//!
//! Keywords, condition spellings and primitive instruction names are closed
//! sets shared by the lexer and both parsers. None of them change at runtime.

use std::fmt;

/// Token marking the end of the token stream
pub const END_OF_INPUT: &str = "### END OF INPUT ###";

/// Instructions built into the target machine; callable, never definable
pub const PRIMITIVE_INSTRUCTIONS: [&str; 5] = ["move", "turnleft", "turnright", "infect", "skip"];

/// Keywords in the BL language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Program,
    Is,
    Instruction,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
}

impl Keyword {
    /// Get keyword from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PROGRAM" => Some(Self::Program),
            "IS" => Some(Self::Is),
            "INSTRUCTION" => Some(Self::Instruction),
            "BEGIN" => Some(Self::Begin),
            "END" => Some(Self::End),
            "IF" => Some(Self::If),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "WHILE" => Some(Self::While),
            "DO" => Some(Self::Do),
            _ => None,
        }
    }

    /// Get string representation of keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Program => "PROGRAM",
            Self::Is => "IS",
            Self::Instruction => "INSTRUCTION",
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Do => "DO",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Guards usable in `IF` and `WHILE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Condition {
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsEnemy,
    NextIsNotEnemy,
    NextIsFriend,
    NextIsNotFriend,
    NextIsWall,
    NextIsNotWall,
    Random,
    True,
}

impl Condition {
    pub const ALL: [Condition; 10] = [
        Self::NextIsEmpty,
        Self::NextIsNotEmpty,
        Self::NextIsEnemy,
        Self::NextIsNotEnemy,
        Self::NextIsFriend,
        Self::NextIsNotFriend,
        Self::NextIsWall,
        Self::NextIsNotWall,
        Self::Random,
        Self::True,
    ];

    /// Look a condition up by its upper-snake name, e.g. `NEXT_IS_EMPTY`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NEXT_IS_EMPTY" => Some(Self::NextIsEmpty),
            "NEXT_IS_NOT_EMPTY" => Some(Self::NextIsNotEmpty),
            "NEXT_IS_ENEMY" => Some(Self::NextIsEnemy),
            "NEXT_IS_NOT_ENEMY" => Some(Self::NextIsNotEnemy),
            "NEXT_IS_FRIEND" => Some(Self::NextIsFriend),
            "NEXT_IS_NOT_FRIEND" => Some(Self::NextIsNotFriend),
            "NEXT_IS_WALL" => Some(Self::NextIsWall),
            "NEXT_IS_NOT_WALL" => Some(Self::NextIsNotWall),
            "RANDOM" => Some(Self::Random),
            "TRUE" => Some(Self::True),
            _ => None,
        }
    }

    /// Translate a condition token: `-` becomes `_`, then uppercase, then
    /// exact lookup.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::from_name(&token.replace('-', "_").to_uppercase())
    }

    /// The spelling used in BL source
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NextIsEmpty => "next-is-empty",
            Self::NextIsNotEmpty => "next-is-not-empty",
            Self::NextIsEnemy => "next-is-enemy",
            Self::NextIsNotEnemy => "next-is-not-enemy",
            Self::NextIsFriend => "next-is-friend",
            Self::NextIsNotFriend => "next-is-not-friend",
            Self::NextIsWall => "next-is-wall",
            Self::NextIsNotWall => "next-is-not-wall",
            Self::Random => "random",
            Self::True => "true",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn is_keyword(token: &str) -> bool {
    Keyword::from_str(token).is_some()
}

/// Whether `token` is exactly one of the condition spellings
pub fn is_condition(token: &str) -> bool {
    Condition::ALL.iter().any(|c| c.as_str() == token)
}

pub fn is_primitive(token: &str) -> bool {
    PRIMITIVE_INSTRUCTIONS.contains(&token)
}

/// Whether `token` can name a program, an instruction or a call: a letter
/// followed by letters, digits or `-`, and neither a keyword nor a condition.
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    let starts_with_letter = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic());

    starts_with_letter
        && chars.all(is_word_char)
        && !is_keyword(token)
        && !is_condition(token)
}

/// Characters that may continue a word
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
