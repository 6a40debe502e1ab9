//! # BL Parser
//!
//! Parser for BL, a small imperative language in which a program defines
//! named instructions built from `IF`/`IF ... ELSE`/`WHILE` statements and
//! calls, followed by a main body.
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source code and the fixed BL vocabulary
//! - `parser`: Program- and statement-level parsing into an AST
//! - `printer`: Rendering an AST back to canonical BL source
//! - `error`: Error handling and diagnostics
//!
//! Parsing is fail-fast: the first malformed construct aborts the whole
//! parse with a `BlError`.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;

// Re-export commonly used types
pub use error::{BlError, BlResult, Diagnostic, ParseErrorKind, SourceLocation};
pub use lexer::{Condition, Keyword, Lexer, Token, TokenType};
pub use parser::{parse_program, Parser, Program, Statement, StatementKind};

/// Version of the BL parser
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize and parse a BL program from source code
///
/// # Arguments
///
/// * `source` - The source code to parse
/// * `filename` - Optional filename for error reporting
pub fn parse(source: &str, filename: Option<&str>) -> BlResult<Program> {
    let tokens = Lexer::new(source, filename).tokenize()?;
    parse_program(tokens)
}

/// Tokenize and parse a bare sequence of statements, as found inside an
/// instruction body, without the surrounding `PROGRAM` header
pub fn parse_statements(source: &str, filename: Option<&str>) -> BlResult<Statement> {
    let mut parser = Parser::new(Lexer::new(source, filename).tokenize()?);
    let block = parser.parse_block()?;
    parser.expect_end_of_input()?;
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_parse_counts() {
        let source = "
            PROGRAM sentry IS
              INSTRUCTION guard IS
                IF next-is-enemy THEN infect END IF
              END guard
              INSTRUCTION patrol IS
                WHILE next-is-empty DO move END WHILE
                turnright
              END patrol
            BEGIN
              guard
              patrol
              skip
            END sentry
        ";
        let program = parse(source, Some("sentry.bl")).unwrap();

        assert_eq!(program.name, "sentry");
        assert_eq!(program.context.len(), 2);
        assert_eq!(program.body.kind(), StatementKind::Block);
        assert_eq!(program.body.block().map(<[Statement]>::len), Some(3));
    }

    #[test]
    fn test_parse_reports_lexer_errors() {
        let err = parse("PROGRAM p IS BEGIN move; END p", None).unwrap_err();
        assert_eq!(err.kind(), "Lexer Error");
    }

    #[test]
    fn test_parse_reports_trailing_tokens() {
        let err = parse("PROGRAM p IS BEGIN END p\nPROGRAM q IS BEGIN END q", None).unwrap_err();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::TrailingTokens));
        assert_eq!(err.location().map(|l| l.line), Some(2));
    }

    #[test]
    fn test_parse_comments_only_program() {
        let source = "// nothing here\nPROGRAM p IS // header\nBEGIN\nEND p\n";
        let program = parse(source, None).unwrap();
        assert_eq!(program, Program::new("p", Default::default(), Statement::empty_block()));
    }

    #[test]
    fn test_parse_statements() {
        let block = parse_statements("move\nIF random THEN infect END IF\n", None).unwrap();
        assert_eq!(block.kind(), StatementKind::Block);
        assert_eq!(block.block().map(<[Statement]>::len), Some(2));
        assert_eq!(block.to_string(), "move\nIF random THEN\n  infect\nEND IF\n");
    }

    #[test]
    fn test_parse_statements_rejects_stray_end() {
        let err = parse_statements("move\nEND", Some("body.bl")).unwrap_err();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::TrailingTokens));
        assert_eq!(err.found(), Some("END"));
        assert_eq!(err.location().map(ToString::to_string), Some("body.bl:2:1".to_string()));
    }

    #[test]
    fn test_deeply_nested_source_is_rejected() {
        let depth = parser::parser::MAX_NESTING_DEPTH + 1;
        let source = format!(
            "{}move{}",
            "IF true THEN ".repeat(depth),
            " END IF".repeat(depth)
        );
        let err = parse_statements(&source, None).unwrap_err();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::NestingTooDeep));
    }
}
