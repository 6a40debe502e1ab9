//! Program-level grammar
//!
//! ```text
//! program     := PROGRAM name IS instruction* BEGIN block END name
//! instruction := INSTRUCTION name IS block END name
//! ```
//!
//! Instruction names share one namespace per program: no duplicates and no
//! primitive names. The program name may not be a primitive either.

use std::collections::BTreeMap;

use super::ast::{Program, Statement};
use super::parser::Parser;
use crate::error::{BlResult, ParseErrorKind};
use crate::lexer::{is_identifier, is_primitive, Keyword, Token};

impl Parser {
    /// Parse a complete program. The end-of-input sentinel must directly
    /// follow `END <name>`.
    pub fn parse_program(&mut self) -> BlResult<Program> {
        self.expect_keyword(Keyword::Program)?;

        let name = self.parse_name()?;
        if is_primitive(&name.lexeme) {
            return Err(Self::error(
                ParseErrorKind::NamespaceViolation,
                format!("{} is the name of a primitive instruction", name.lexeme),
                &name,
            ));
        }

        self.expect_keyword(Keyword::Is)?;

        let mut context = BTreeMap::new();
        while self.front_is(Keyword::Instruction) {
            let (instruction, body) = self.parse_instruction()?;

            if context.contains_key(&instruction.lexeme) {
                return Err(Self::error(
                    ParseErrorKind::NamespaceViolation,
                    format!(
                        "{} appears as an instruction name more than once",
                        instruction.lexeme
                    ),
                    &instruction,
                ));
            }
            if is_primitive(&instruction.lexeme) {
                return Err(Self::error(
                    ParseErrorKind::NamespaceViolation,
                    format!("{} is the name of a primitive instruction", instruction.lexeme),
                    &instruction,
                ));
            }

            tracing::debug!(instruction = %instruction.lexeme, "parsed instruction");
            context.insert(instruction.lexeme, body);
        }

        self.expect_keyword(Keyword::Begin)?;
        let body = self.parse_block()?;
        self.expect_keyword(Keyword::End)?;
        self.expect_closing_name(&name.lexeme, "program")?;

        self.expect_end_of_input()?;

        tracing::debug!(
            program = %name.lexeme,
            instructions = context.len(),
            "parsed program"
        );
        Ok(Program::new(name.lexeme, context, body))
    }

    /// Parse one `INSTRUCTION name IS block END name` definition, returning
    /// the name token and the body. Namespace rules are left to the caller.
    fn parse_instruction(&mut self) -> BlResult<(Token, Statement)> {
        self.expect_keyword(Keyword::Instruction)?;
        let name = self.parse_name()?;
        self.expect_keyword(Keyword::Is)?;
        let body = self.parse_block()?;
        self.expect_keyword(Keyword::End)?;
        self.expect_closing_name(&name.lexeme, "instruction")?;

        Ok((name, body))
    }

    /// Dequeue a token that must be an identifier
    fn parse_name(&mut self) -> BlResult<Token> {
        let token = self.dequeue()?;
        if is_identifier(&token.lexeme) {
            Ok(token)
        } else {
            Err(Self::error(
                ParseErrorKind::InvalidIdentifier,
                format!("{} isn't a valid identifier", token.lexeme),
                &token,
            ))
        }
    }

    fn expect_closing_name(&mut self, name: &str, what: &str) -> BlResult<Token> {
        let token = self.dequeue()?;
        if token.lexeme == name {
            Ok(token)
        } else {
            Err(Self::error(
                ParseErrorKind::UnexpectedToken,
                format!(
                    "expected {} instead of {} (the name after END must match the {} name)",
                    name, token.lexeme, what
                ),
                &token,
            ))
        }
    }
}
