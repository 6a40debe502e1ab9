//! Rendering of the AST back to BL source
//!
//! Output is canonical: one statement per line, two spaces per nesting
//! level, instructions in name order. Parsing the output yields an equal AST.

use std::fmt::{self, Write};

use crate::parser::{Program, Statement};

const INDENT: usize = 2;

fn write_indent(out: &mut impl Write, offset: usize) -> fmt::Result {
    write!(out, "{:offset$}", "", offset = offset)
}

impl Statement {
    /// Write this statement with every line indented by `offset` spaces
    pub fn pretty_print(&self, out: &mut impl Write, offset: usize) -> fmt::Result {
        match self {
            Statement::Block(statements) => {
                for statement in statements {
                    statement.pretty_print(out, offset)?;
                }
                Ok(())
            }
            Statement::If { condition, body } => {
                write_indent(out, offset)?;
                writeln!(out, "IF {} THEN", condition)?;
                body.pretty_print(out, offset + INDENT)?;
                write_indent(out, offset)?;
                writeln!(out, "END IF")
            }
            Statement::IfElse {
                condition,
                then_body,
                else_body,
            } => {
                write_indent(out, offset)?;
                writeln!(out, "IF {} THEN", condition)?;
                then_body.pretty_print(out, offset + INDENT)?;
                write_indent(out, offset)?;
                writeln!(out, "ELSE")?;
                else_body.pretty_print(out, offset + INDENT)?;
                write_indent(out, offset)?;
                writeln!(out, "END IF")
            }
            Statement::While { condition, body } => {
                write_indent(out, offset)?;
                writeln!(out, "WHILE {} DO", condition)?;
                body.pretty_print(out, offset + INDENT)?;
                write_indent(out, offset)?;
                writeln!(out, "END WHILE")
            }
            Statement::Call(name) => {
                write_indent(out, offset)?;
                writeln!(out, "{}", name)
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty_print(f, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PROGRAM {} IS", self.name)?;
        writeln!(f)?;

        for (name, body) in &self.context {
            write_indent(f, INDENT)?;
            writeln!(f, "INSTRUCTION {} IS", name)?;
            body.pretty_print(f, 2 * INDENT)?;
            write_indent(f, INDENT)?;
            writeln!(f, "END {}", name)?;
            writeln!(f)?;
        }

        writeln!(f, "BEGIN")?;
        self.body.pretty_print(f, INDENT)?;
        writeln!(f, "END {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Condition;
    use crate::parse;
    use pretty_assertions::assert_eq;

    const WALKER: &str = "\
PROGRAM walker IS

  INSTRUCTION step IS
    IF next-is-empty THEN
      move
    ELSE
      turn-around
    END IF
  END step

  INSTRUCTION turn-around IS
    turnleft
    turnleft
  END turn-around

BEGIN
  WHILE true DO
    step
    IF next-is-enemy THEN
      infect
    END IF
  END WHILE
END walker
";

    #[test]
    fn test_print_statement() {
        let statement = Statement::While {
            condition: Condition::NextIsNotWall,
            body: Box::new(Statement::Block(vec![Statement::Call("move".to_string())])),
        };
        assert_eq!(
            statement.to_string(),
            "WHILE next-is-not-wall DO\n  move\nEND WHILE\n"
        );
    }

    #[test]
    fn test_print_empty_program() {
        assert_eq!(
            Program::default().to_string(),
            "PROGRAM Unnamed IS\n\nBEGIN\nEND Unnamed\n"
        );
    }

    #[test]
    fn test_print_is_canonical() {
        let program = parse(WALKER, None).unwrap();
        assert_eq!(program.to_string(), WALKER);
    }

    #[test]
    fn test_round_trip() {
        let source = "PROGRAM zigzag IS INSTRUCTION hop IS move move END hop \
                      INSTRUCTION dodge IS \
                      IF random THEN turnright ELSE IF true THEN END IF END IF \
                      END dodge \
                      BEGIN hop // comment\n \
                      WHILE next-is-not-friend DO dodge hop skip END WHILE \
                      END zigzag";
        let first = parse(source, None).unwrap();
        let printed = first.to_string();
        let second = parse(&printed, None).unwrap();

        assert_eq!(second, first);
        assert_eq!(second.to_string(), printed);
    }
}
