//! Lexical analysis module
//!
//! This module handles tokenization of BL source code and owns the fixed
//! BL vocabulary.

pub mod scanner;
pub mod token;
pub mod vocabulary;

pub use scanner::Lexer;
pub use token::{Token, TokenType};
pub use vocabulary::{
    is_condition, is_identifier, is_primitive, Condition, Keyword, END_OF_INPUT,
    PRIMITIVE_INSTRUCTIONS,
};
