use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_cli_marks_wrong_article_in_positional_text() {
    let mut cmd = cargo_bin_cmd!("articulo");
    cmd.arg("It took a hour.");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("It took a [an] hour."));
}

#[test]
fn test_cli_reads_from_stdin() {
    let mut cmd = cargo_bin_cmd!("articulo");
    cmd.write_stdin("an unicorn\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("an [a] unicorn"));
}

#[test]
fn test_cli_json_format_lists_diagnostics() {
    let mut cmd = cargo_bin_cmd!("articulo");
    cmd.args(["--format", "json", "a elephant"]);

    let output_pred = predicate::str::contains("\"actual\": \"a\"")
        .and(predicate::str::contains("\"expected\": [\n      \"an\"\n    ]"))
        .and(predicate::str::contains("en_indefinite_article"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn test_cli_input_and_output_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "Station A equals 10. A elephant came.").unwrap();

    let mut cmd = cargo_bin_cmd!("articulo");
    cmd.arg("--input").arg(&input).arg("--output").arg(&output);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "Station A equals 10. A [An] elephant came.");
}

#[test]
fn test_cli_missing_input_file_fails() {
    let mut cmd = cargo_bin_cmd!("articulo");
    cmd.args(["--input", "no-existe.txt"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error leyendo archivo 'no-existe.txt'"));
}

#[test]
fn test_cli_unknown_rule_fails() {
    let mut cmd = cargo_bin_cmd!("articulo");
    cmd.args(["--disable-rule", "es_art_noun_gender", "a hour"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("regla desconocida: es_art_noun_gender"));
}

#[test]
fn test_cli_custom_grammar_separator() {
    let mut cmd = cargo_bin_cmd!("articulo");
    cmd.args(["-g", "<<>>", "an dog"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("an <<a>> dog"));
}
