use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("clue-parser")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn write_source(dir: &TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, source).unwrap();
    path
}

#[test]
fn default_format_is_treeviz() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "main.clue", "local x = 5");

    cargo_bin_cmd!("clue")
        .arg(&path)
        .assert()
        .success()
        .stdout("└─ local_decl: x\n  └─ number: 5\n");
}

#[test]
fn renders_fixture_as_tags() {
    let mut cmd = cargo_bin_cmd!("clue");
    cmd.arg(fixture_path("control_flow.clue"))
        .arg("--format")
        .arg("ast-tag");

    let output_pred = predicate::str::starts_with("<program>3 expressions<children>")
        .and(predicate::str::contains("<match_expr>default</match_expr>"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn reads_stdin() {
    cargo_bin_cmd!("clue")
        .arg("-")
        .arg("-f")
        .arg("source")
        .write_stdin("try 1{}catch e{2}")
        .assert()
        .success()
        .stdout("try 1 {} catch e {\n    2\n}\n");
}

#[test]
fn output_always_ends_with_newline() {
    cargo_bin_cmd!("clue")
        .arg("-")
        .arg("--format")
        .arg("token-simple")
        .write_stdin("{ 1 }")
        .assert()
        .success()
        .stdout("{ 1 }\n");
}

#[test]
fn parse_error_prints_diagnostic_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "bad.clue", "match 1 { }");

    cargo_bin_cmd!("clue")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("error[E_PARSE]: empty match block")
                .and(predicate::str::contains("bad.clue:1:11"))
                .and(predicate::str::contains("help: a match needs at least one case")),
        );
}

#[test]
fn lex_error_from_stdin_names_stdin() {
    cargo_bin_cmd!("clue")
        .arg("-")
        .write_stdin("{ @ }")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("error[E_LEX]: unexpected character '@'")
                .and(predicate::str::contains("--> <stdin>:1:3")),
        );
}

#[test]
fn missing_file_fails() {
    cargo_bin_cmd!("clue")
        .arg("does-not-exist.clue")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading does-not-exist.clue"));
}

#[test]
fn unknown_format_fails() {
    cargo_bin_cmd!("clue")
        .arg("-")
        .arg("--format")
        .arg("ast-xml")
        .write_stdin("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format 'ast-xml'"));
}

#[test]
fn max_depth_flag_limits_nesting() {
    cargo_bin_cmd!("clue")
        .arg("-")
        .arg("--max-depth")
        .arg("2")
        .write_stdin("{{{}}}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum nesting depth 2 exceeded"));
}

#[test]
fn deep_input_at_depth_cap_reports_error() {
    let source = format!("{}{}", "{".repeat(2000), "}".repeat(2000));
    cargo_bin_cmd!("clue")
        .arg("-")
        .arg("--max-depth")
        .arg("1024")
        .write_stdin(source)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("maximum nesting depth 1024 exceeded"));
}

#[test]
fn max_depth_flag_rejects_huge_values() {
    cargo_bin_cmd!("clue")
        .arg("-")
        .arg("--max-depth")
        .arg("1000000")
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-depth"));
}

#[test]
fn trace_flag_prints_productions() {
    cargo_bin_cmd!("clue")
        .arg("-")
        .arg("--trace")
        .write_stdin("{1}")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("program @ 1:1")
                .and(predicate::str::contains("    number @ 1:2")),
        );
}

#[test]
fn config_file_sets_format() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_source(&dir, "clue.toml", "[output]\nformat = \"ast-json\"\n");
    let path = write_source(&dir, "main.clue", "1");

    cargo_bin_cmd!("clue")
        .arg(&path)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"number\""));
}

#[test]
fn format_flag_beats_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_source(&dir, "clue.toml", "[output]\nformat = \"ast-json\"\n");
    let path = write_source(&dir, "main.clue", "1");

    cargo_bin_cmd!("clue")
        .arg(&path)
        .arg("-c")
        .arg(&config)
        .arg("-f")
        .arg("ast-treeviz")
        .assert()
        .success()
        .stdout("└─ number: 1\n");
}

#[test]
fn missing_config_file_fails() {
    cargo_bin_cmd!("clue")
        .arg("-")
        .arg("--config")
        .arg("nowhere.toml")
        .write_stdin("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("clue");
    cmd.arg("--list-formats");

    let mut pred = predicate::str::contains("Available output formats").boxed();
    for name in [
        "ast-tag",
        "ast-treeviz",
        "ast-json",
        "ast-yaml",
        "source",
        "token-json",
        "token-simple",
    ] {
        pred = pred.and(predicate::str::contains(name)).boxed();
    }
    cmd.assert().success().stdout(pred);
}
