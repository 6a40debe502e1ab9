//! Abstract Syntax Tree definitions
//!
//! This module defines the AST node types for BL programs.

use std::collections::BTreeMap;

use crate::lexer::Condition;

/// Root AST node representing a complete program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub name: String,
    /// User-defined instructions by name; every body is a `Statement::Block`
    pub context: BTreeMap<String, Statement>,
    /// Main body, always a `Statement::Block`
    pub body: Statement,
}

impl Program {
    pub fn new(
        name: impl Into<String>,
        context: BTreeMap<String, Statement>,
        body: Statement,
    ) -> Self {
        Self {
            name: name.into(),
            context,
            body,
        }
    }

    /// Body of the user-defined instruction `name`
    pub fn instruction(&self, name: &str) -> Option<&Statement> {
        self.context.get(name)
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new("Unnamed", BTreeMap::new(), Statement::empty_block())
    }
}

/// Statement node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Sequence of statements
    Block(Vec<Statement>),

    /// IF c THEN body END IF
    If {
        condition: Condition,
        body: Box<Statement>,
    },

    /// IF c THEN then_body ELSE else_body END IF
    IfElse {
        condition: Condition,
        then_body: Box<Statement>,
        else_body: Box<Statement>,
    },

    /// WHILE c DO body END WHILE
    While {
        condition: Condition,
        body: Box<Statement>,
    },

    /// Call of a primitive or user-defined instruction
    Call(String),
}

/// Discriminant of a `Statement`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Block,
    If,
    IfElse,
    While,
    Call,
}

impl Statement {
    pub fn empty_block() -> Self {
        Self::Block(Vec::new())
    }

    pub fn kind(&self) -> StatementKind {
        match self {
            Self::Block(_) => StatementKind::Block,
            Self::If { .. } => StatementKind::If,
            Self::IfElse { .. } => StatementKind::IfElse,
            Self::While { .. } => StatementKind::While,
            Self::Call(_) => StatementKind::Call,
        }
    }

    /// Children of a block, or `None` for any other kind
    pub fn block(&self) -> Option<&[Statement]> {
        match self {
            Self::Block(statements) => Some(statements),
            _ => None,
        }
    }
}
