//! Terminal rendering of parse failures
//!
//! ```text
//! error[unexpected token]: expected IF instead of WHILE
//!  --> walk.bl:3:25
//!   |
//! 3 |   IF true THEN move END WHILE
//!   |                         ^^^^^ expected IF, found WHILE
//! ```
//!
//! The underline spans the whole offending lexeme when the error records it.

use super::{BlError, SourceLocation};
use crate::lexer::END_OF_INPUT;
use colored::Colorize;

/// An error ready to be shown to a user, optionally with the source it came from
pub struct Diagnostic {
    error: BlError,
    source: Option<String>,
}

impl Diagnostic {
    pub fn new(error: BlError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Attach the source text so the offending line can be shown
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn format(&self) -> String {
        let rule = match self.error.parse_kind() {
            Some(kind) => kind.as_str(),
            None => "lexer",
        };

        let mut output = format!(
            "{}: {}\n",
            format!("error[{}]", rule).red().bold(),
            self.error.message()
        );

        let Some(location) = self.error.location() else {
            return output;
        };

        let source_line = self
            .source
            .as_deref()
            .and_then(|source| source.lines().nth(location.line.checked_sub(1)?));
        let gutter = " ".repeat(location.line.to_string().len());

        output.push_str(&format!("{} {} {}\n", gutter, "-->".blue().bold(), location));

        if let Some(line) = source_line {
            let bar = "|".blue().bold();
            output.push_str(&format!("{} {}\n", gutter, bar));
            output.push_str(&format!(
                "{} {} {}\n",
                location.line.to_string().blue().bold(),
                bar,
                line
            ));
            output.push_str(&format!("{} {} {}\n", gutter, bar, self.underline(line, location)));
        }

        output
    }

    /// Caret run under the offending token, followed by the label if any
    fn underline(&self, line: &str, location: &SourceLocation) -> String {
        let offset = location.column.saturating_sub(1);
        let rest = line.chars().count().saturating_sub(offset);
        let width = self
            .error
            .found()
            .filter(|lexeme| *lexeme != END_OF_INPUT)
            .map_or(1, |lexeme| lexeme.chars().count())
            .clamp(1, rest.max(1));

        let mut underline = format!("{}{}", " ".repeat(offset), "^".repeat(width).red().bold());
        if let Some(label) = self.label() {
            underline.push(' ');
            underline.push_str(&label.red().to_string());
        }
        underline
    }

    fn label(&self) -> Option<String> {
        let expected = self.error.expected()?;
        let found = match self.error.found() {
            Some(END_OF_INPUT) | None => "end of input",
            Some(lexeme) => lexeme,
        };
        Some(format!("expected {}, found {}", expected, found))
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use crate::parse;
    use pretty_assertions::assert_eq;

    fn render(source: &str) -> String {
        colored::control::set_override(false);
        let error = parse(source, Some("walk.bl")).unwrap_err();
        Diagnostic::new(error).with_source(source).format()
    }

    #[test]
    fn test_unexpected_token_underlines_lexeme() {
        let formatted = render("PROGRAM walk IS\nBEGIN\n  IF true THEN move END WHILE\nEND walk\n");

        assert_eq!(
            formatted.lines().collect::<Vec<_>>(),
            vec![
                "error[unexpected token]: expected IF instead of WHILE",
                "  --> walk.bl:3:25",
                "  |",
                "3 |   IF true THEN move END WHILE",
                "  |                         ^^^^^ expected IF, found WHILE",
            ]
        );
    }

    #[test]
    fn test_end_of_input_label() {
        let formatted = render("PROGRAM walk IS\nBEGIN\n  move");

        assert!(formatted.contains("error[unexpected token]"));
        assert!(formatted.contains("^ expected END, found end of input"));
    }

    #[test]
    fn test_namespace_violation_has_no_label() {
        let source = "PROGRAM walk IS\n  INSTRUCTION skip IS move END skip\nBEGIN\nEND walk";
        let formatted = render(source);

        assert!(formatted
            .starts_with("error[namespace violation]: skip is the name of a primitive"));
        assert!(formatted.ends_with("  |               ^^^^\n"));
    }

    #[test]
    fn test_lexer_error() {
        let formatted = render("PROGRAM walk IS\nBEGIN move; END walk");

        assert!(formatted.starts_with("error[lexer]: Unexpected character ';'"));
        assert!(formatted.contains("2 | BEGIN move; END walk"));
        assert!(formatted.ends_with("  |           ^\n"));
    }

    #[test]
    fn test_without_source_or_location() {
        colored::control::set_override(false);
        let error =
            BlError::parse_error(ParseErrorKind::TrailingTokens, "terms still remain", None);

        let formatted = Diagnostic::new(error).format();
        assert_eq!(formatted, "error[trailing tokens]: terms still remain\n");
    }
}
