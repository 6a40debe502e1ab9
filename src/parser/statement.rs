//! Statement-level grammar
//!
//! ```text
//! block     := statement*            (stops before END, ELSE or end of input)
//! statement := IF cond THEN block [ELSE block] END IF
//!            | WHILE cond DO block END WHILE
//!            | identifier
//! ```

use super::ast::Statement;
use super::parser::Parser;
use crate::error::{BlResult, ParseErrorKind};
use crate::lexer::{is_condition, is_identifier, Condition, Keyword};

impl Parser {
    /// Parse a single statement from the front of the token queue
    pub fn parse_statement(&mut self) -> BlResult<Statement> {
        if self.front_is(Keyword::If) || self.front_is(Keyword::While) {
            self.nest()?;
            let statement = if self.front_is(Keyword::If) {
                self.parse_if()
            } else {
                self.parse_while()
            };
            self.unnest();
            return statement;
        }

        let Some(front) = self.front() else {
            return Err(Self::end_of_input_error());
        };

        if is_condition(&front.lexeme) {
            return Err(Self::error(
                ParseErrorKind::InvalidCondition,
                format!("{} is a condition", front.lexeme),
                front,
            ));
        }
        if !is_identifier(&front.lexeme) {
            return Err(Self::error(
                ParseErrorKind::InvalidIdentifier,
                format!("{} is not a call", front.lexeme),
                front,
            ));
        }

        self.parse_call()
    }

    /// Parse statements up to, but not including, `END`, `ELSE` or the
    /// end-of-input sentinel. An empty block is legal.
    pub fn parse_block(&mut self) -> BlResult<Statement> {
        let mut statements = Vec::new();

        while !self.at_block_end() {
            statements.push(self.parse_statement()?);
        }

        tracing::trace!(statements = statements.len(), "parsed block");
        Ok(Statement::Block(statements))
    }

    fn at_block_end(&self) -> bool {
        self.front().is_none()
            || self.front_is(Keyword::End)
            || self.front_is(Keyword::Else)
            || self.front_is_end_of_input()
    }

    fn parse_if(&mut self) -> BlResult<Statement> {
        let opening = self.expect_keyword(Keyword::If)?;
        let condition = self.parse_condition()?;
        self.expect_keyword(Keyword::Then)?;
        let then_body = Box::new(self.parse_block()?);

        let statement = if self.front_is(Keyword::Else) {
            self.expect_keyword(Keyword::Else)?;
            let else_body = Box::new(self.parse_block()?);
            Statement::IfElse {
                condition,
                then_body,
                else_body,
            }
        } else {
            Statement::If {
                condition,
                body: then_body,
            }
        };

        self.expect_keyword(Keyword::End)?;
        // The closing word echoes the opening keyword as written
        self.expect_lexeme(&opening.lexeme)?;

        tracing::trace!(%condition, kind = ?statement.kind(), "parsed conditional");
        Ok(statement)
    }

    fn parse_while(&mut self) -> BlResult<Statement> {
        self.expect_keyword(Keyword::While)?;
        let condition = self.parse_condition()?;
        self.expect_keyword(Keyword::Do)?;
        let body = Box::new(self.parse_block()?);
        self.expect_keyword(Keyword::End)?;
        self.expect_keyword(Keyword::While)?;

        tracing::trace!(%condition, "parsed loop");
        Ok(Statement::While { condition, body })
    }

    /// Wrap the front token as a call. The caller has already checked that
    /// it is an identifier and not a condition.
    fn parse_call(&mut self) -> BlResult<Statement> {
        let token = self.dequeue()?;
        Ok(Statement::Call(token.lexeme))
    }

    /// Dequeue a condition token and translate it
    fn parse_condition(&mut self) -> BlResult<Condition> {
        let token = self.dequeue()?;

        match Condition::from_token(&token.lexeme) {
            Some(condition) if is_condition(&token.lexeme) => Ok(condition),
            _ => Err(Self::error(
                ParseErrorKind::InvalidCondition,
                format!("{} is not a condition", token.lexeme),
                &token,
            )),
        }
    }
}
