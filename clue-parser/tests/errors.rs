//! Failure modes of the lexer and parser
//!
//! Every malformed input must fail with a positioned error; none may panic or produce a tree.

use clue_parser::clue::diagnostics;
use clue_parser::{parse, ClueError};
use rstest::rstest;

fn parse_err(source: &str) -> ClueError {
    match parse(source) {
        Ok(program) => panic!("expected {:?} to fail, parsed {:?}", source, program),
        Err(err) => err,
    }
}

#[test]
fn test_empty_match_block_fails_at_close_brace() {
    let err = parse_err("match 1 { }");
    assert!(err.is_parse());
    assert_eq!(err.message(), "empty match block");
    assert_eq!(err.position().offset, 10);
    assert_eq!(err.position().column, 11);
}

#[test]
fn test_unknown_character_is_lex_error() {
    let err = parse_err("#");
    assert!(err.is_lex());
    assert_eq!(err.position().offset, 0);
    assert_eq!(err.to_string(), "lex error: unexpected character '#' at 1:1");
}

#[test]
fn test_lex_error_inside_block() {
    let err = parse_err("{ 1\n  2 $ }");
    assert!(err.is_lex());
    assert_eq!(err.position().line, 2);
    assert_eq!(err.position().column, 5);
}

#[test]
fn test_unterminated_block_fails_at_end_of_input() {
    let source = "{1 2";
    let err = parse_err(source);
    assert_eq!(err.message(), "unterminated block");
    assert_eq!(err.position().offset, source.len());
    assert_eq!(
        err.help(),
        Some("the block opened at 1:1 is never closed; add a `}`")
    );
}

#[rstest]
#[case("}", "empty expression list")]
#[case("=>", "empty expression list")]
#[case("1 }", "unexpected token: `}`, expected an expression or end of input")]
#[case("local = 1", "expected identifier after local")]
#[case("local 1 = 1", "expected identifier after local")]
#[case("local x 1", "unexpected token: number `1`, expected `=`")]
#[case("local x =", "unexpected token: end of input, expected an expression")]
#[case("if {}", "unexpected token: end of input, expected `{`")]
#[case("if 1 2", "unexpected token: number `2`, expected `{`")]
#[case("if 1 {} else 2", "unexpected token: number `2`, expected `{`")]
#[case("elseif 1 {}", "empty expression list")]
#[case("match 1 2", "unexpected token: number `2`, expected `{`")]
#[case("match 1 { 1 {} }", "unexpected token: `{`, expected `=>`")]
#[case("match 1 { => {} }", "unexpected token: `=>`, expected `default` or an expression")]
#[case("match 1 { default => 2 }", "unexpected token: number `2`, expected `{`")]
#[case("try {}", "unexpected token: end of input, expected `{`")]
#[case("try 1 {} catch", "unexpected token: end of input, expected `{`")]
#[case("try 1 {} catch a b {}", "unexpected token: identifier `b`, expected `{`")]
#[case("catch e {}", "empty expression list")]
fn test_parse_error_messages(#[case] source: &str, #[case] message: &str) {
    let err = parse_err(source);
    assert!(err.is_parse(), "{:?} should be a parse error", source);
    assert_eq!(err.message(), message, "source: {:?}", source);
}

#[rstest]
#[case("local if = 1", "`if` is a keyword and cannot be used as a variable name")]
#[case("try 1 {} catch match {}", "use a plain identifier, e.g. `catch err { ... }`")]
#[case("match 1 { default = {} }", "did you mean `=>`?")]
#[case("struct", "`struct` is reserved in Clue and cannot be used yet")]
#[case("{ return }", "`return` is reserved in Clue and cannot be used yet")]
#[case("match 1 {}", "a match needs at least one case, e.g. `default => {}`")]
fn test_help_notes(#[case] source: &str, #[case] help: &str) {
    assert_eq!(parse_err(source).help(), Some(help), "source: {:?}", source);
}

#[test]
fn test_plain_identifier_has_no_help() {
    let err = parse_err("{ x }");
    assert_eq!(err.help(), None);
}

#[test]
fn test_keyword_catch_binding_rejected() {
    let err = parse_err("try 1 {} catch default {}");
    assert_eq!(
        err.message(),
        "keyword `default` cannot be used as a catch binding"
    );
}

#[test]
fn test_first_error_wins() {
    // Both the `#` and the unterminated block are errors; the lexer reaches `#` first
    let err = parse_err("{ # {");
    assert!(err.is_lex());
    assert_eq!(err.position().offset, 2);
}

#[test]
fn test_rendered_report() {
    let source = "local x = 1\nmatch x { }";
    let err = parse_err(source);
    // `x` is not an expression, so the scrutinee fails before the empty block is seen
    assert_eq!(err.position().line, 2);
    let report = diagnostics::render(source, "demo.clue", &err);
    assert!(report.starts_with("error[E_PARSE]: unexpected token: identifier `x`"));
    assert!(report.contains(" --> demo.clue:2:7\n"));
    assert!(report.contains("2 | match x { }\n"));
}
