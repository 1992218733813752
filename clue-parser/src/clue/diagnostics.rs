//! Compiler-style error reports
//!
//!     Renders a [ClueError] against its source text:
//!
//!     ```text
//!     error[E_PARSE]: empty match block
//!      --> main.clue:1:11
//!       |
//!     1 | match 1 { }
//!       |           ^
//!       = help: a match needs at least one case, e.g. `default => {}`
//!     ```
//!
//!     The report is returned as a string so the caller decides where it goes. No colors are
//!     emitted.

use super::ast::position::SourceLocation;
use super::error::ClueError;

/// Render `error` as a multi-line report. `file_name` is only used for display.
pub fn render(source: &str, file_name: &str, error: &ClueError) -> String {
    let locations = SourceLocation::new(source);
    let position = error.position();
    let line_text = locations.line_text(position.line).unwrap_or("");

    let gutter = position.line.to_string().len();
    let blank = " ".repeat(gutter);

    let mut out = String::new();
    out.push_str(&format!("error[{}]: {}\n", error.code(), error.message()));
    out.push_str(&format!(
        "{}--> {}:{}:{}\n",
        blank, file_name, position.line, position.column
    ));
    out.push_str(&format!("{} |\n", blank));
    out.push_str(&format!("{} | {}\n", position.line, line_text));
    out.push_str(&format!(
        "{} | {}{}\n",
        blank,
        " ".repeat(position.column.saturating_sub(1)),
        "^".repeat(caret_width(source, error))
    ));

    if let Some(help) = error.help() {
        out.push_str(&format!("{} = help: {}\n", blank, help));
    }
    out
}

/// Characters covered by the error span, clipped to the end of its line, at least one
fn caret_width(source: &str, error: &ClueError) -> usize {
    let span = error.span();
    let line_end = source
        .get(span.start..)
        .and_then(|rest| rest.find('\n'))
        .map_or(source.len(), |i| span.start + i);

    source
        .get(span.start..span.end.min(line_end))
        .map(|covered| covered.chars().count())
        .unwrap_or(0)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::parsing::parse;

    fn report(source: &str) -> String {
        let err = parse(source).unwrap_err();
        render(source, "main.clue", &err)
    }

    #[test]
    fn test_parse_error_with_help() {
        assert_eq!(
            report("match 1 { }"),
            "error[E_PARSE]: empty match block\n \
             --> main.clue:1:11\n  \
             |\n\
             1 | match 1 { }\n  \
             |           ^\n  \
             = help: a match needs at least one case, e.g. `default => {}`\n"
        );
    }

    #[test]
    fn test_lex_error_on_later_line() {
        let out = report("{\n  1 # 2\n}");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "error[E_LEX]: unexpected character '#'");
        assert_eq!(lines[1], " --> main.clue:2:5");
        assert_eq!(lines[3], "2 |   1 # 2");
        assert_eq!(lines[4], "  |     ^");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_caret_covers_whole_token() {
        let out = report("local 12 = 3");
        assert!(out.contains("1 | local 12 = 3\n  |       ^^\n"));
    }

    #[test]
    fn test_error_at_end_of_input() {
        let out = report("{1 2");
        assert!(out.starts_with("error[E_PARSE]: unterminated block\n"));
        assert!(out.contains(" --> main.clue:1:5\n"));
        assert!(out.contains("1 | {1 2\n  |     ^\n"));
    }

    #[test]
    fn test_wide_gutter() {
        let source = format!("{}{{", "\n".repeat(11));
        let out = report(&source);
        assert!(out.contains("  --> main.clue:12:2\n"));
        assert!(out.contains("12 | {\n"));
        assert!(out.contains("   |  ^\n"));
    }
}
