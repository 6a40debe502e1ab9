//! Parser module
//!
//! This module handles parsing BL tokens into a `Program` AST. The
//! program-level grammar lives in `program.rs`, the statement-level grammar
//! in `statement.rs`; both are methods on the one `Parser` that owns the
//! token queue.

pub mod ast;
pub mod parser;
mod program;
mod statement;

pub use ast::{Program, Statement, StatementKind};
pub use parser::Parser;

use crate::error::BlResult;
use crate::lexer::Token;

/// Parse a full token stream into a program
pub fn parse_program(tokens: Vec<Token>) -> BlResult<Program> {
    Parser::new(tokens).parse_program()
}
