//! CLI integration tests
use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("textgauge")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn lexicon_args() -> Vec<String> {
    vec![
        "--stop-words".to_string(),
        get_fixture_path("lexicon/StopWords"),
        "--positive".to_string(),
        get_fixture_path("lexicon/MasterDictionary/positive-words.txt"),
        "--negative".to_string(),
        get_fixture_path("lexicon/MasterDictionary/negative-words.txt"),
    ]
}

#[test]
fn test_cli_analyze_text() {
    cmd()
        .arg("analyze")
        .arg(get_fixture_path("sample.txt"))
        .args(lexicon_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Positive Score:"))
        .stdout(predicate::str::contains("Avg Number of Words Per Sentence:"))
        .stdout(predicate::str::is_match(r"Word Count:\s+2\n").unwrap())
        .stdout(predicate::str::is_match(r"Personal Pronouns:\s+2\n").unwrap());
}

#[test]
fn test_cli_analyze_json() {
    let output = cmd()
        .args(["analyze", "-f", "json", &get_fixture_path("sample.txt")])
        .args(lexicon_args())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["Positive Score"], 1);
    assert_eq!(value["Negative Score"], 1);
    assert_eq!(value["Word Count"], 2);
    assert_eq!(value["Avg Sentence Length"], 1.0);
}

#[test]
fn test_cli_analyze_stdin() {
    cmd()
        .args(["analyze", "-"])
        .args(lexicon_args())
        .write_stdin("I love this. We hate that.")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Negative Score:\s+1\n").unwrap());
}

#[test]
fn test_cli_analyze_empty_input() {
    cmd()
        .args(["analyze", "-"])
        .args(lexicon_args())
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to analyze"));
}

#[test]
fn test_cli_analyze_invalid_format() {
    cmd()
        .args(["analyze", "-f", "yaml", &get_fixture_path("sample.txt")])
        .args(lexicon_args())
        .assert()
        .failure();
}

#[test]
fn test_cli_missing_lexicon() {
    cmd()
        .args(["analyze", &get_fixture_path("sample.txt"), "--stop-words", "no/such/dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lexicon"));
}

#[test]
fn test_cli_invalid_file() {
    cmd()
        .args(["analyze", "nonexistent.txt"])
        .args(lexicon_args())
        .assert()
        .failure();
}

#[test]
fn test_cli_run_batch() {
    let tmp = TempDir::new().unwrap();
    let article = fs::canonicalize(get_fixture_path("article.html")).unwrap();
    let empty = fs::canonicalize(get_fixture_path("empty_content.html")).unwrap();
    let missing = tmp.path().join("missing.html");

    let input = tmp.path().join("Input.csv");
    fs::write(
        &input,
        format!(
            "URL_ID,URL\nenergy,{}\nblank,{}\ngone,{}\n",
            article.display(),
            empty.display(),
            missing.display()
        ),
    )
    .unwrap();

    let output = tmp.path().join("Output.csv");
    let articles = tmp.path().join("articles");

    cmd()
        .arg("run")
        .args(["--input", input.to_str().unwrap()])
        .args(["--output", output.to_str().unwrap()])
        .args(["--articles-dir", articles.to_str().unwrap()])
        .args(lexicon_args())
        .assert()
        .success()
        .stderr(predicate::str::contains("2 of 3 articles skipped"))
        .stderr(predicate::str::contains("1 rows written"));

    let report = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("URL_ID,URL,Positive Score,Negative Score"));
    assert!(lines[0].contains("Avg Sentence Length"));
    assert!(lines[0].ends_with("Personal Pronouns,Avg Word Length"));
    assert!(lines[1].starts_with("energy,"));

    let saved = fs::read_to_string(articles.join("energy.txt")).unwrap();
    assert!(saved.starts_with("Rising Demand for Renewable Energy\n"));
    assert!(!articles.join("blank.txt").exists());
}

#[test]
fn test_cli_run_no_articles() {
    let tmp = TempDir::new().unwrap();
    let article = fs::canonicalize(get_fixture_path("article.html")).unwrap();
    let input = tmp.path().join("Input.csv");
    fs::write(&input, format!("URL_ID,URL\n1,{}\n", article.display())).unwrap();

    let output = tmp.path().join("Output.csv");
    let articles = tmp.path().join("articles");

    cmd()
        .arg("run")
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .args(["--articles-dir", articles.to_str().unwrap(), "--no-articles"])
        .args(lexicon_args())
        .assert()
        .success();

    assert!(output.exists());
    assert!(!articles.exists());
}

#[test]
fn test_cli_run_missing_input() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .arg("run")
        .args(lexicon_args().iter().map(|arg| {
            if arg.starts_with("../") { fs::canonicalize(arg).unwrap().display().to_string() } else { arg.clone() }
        }))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input.xlsx"));
}

#[test]
fn test_cli_extract_file() {
    cmd()
        .args(["extract", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Rising Demand for Renewable Energy\n"))
        .stdout(predicate::str::contains("Copyright").not());
}

#[test]
fn test_cli_extract_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("article.txt");

    cmd()
        .args(["extract", "-o", output.to_str().unwrap(), &get_fixture_path("article.html")])
        .assert()
        .success();

    assert!(fs::read_to_string(output).unwrap().contains("Solar installations"));
}

#[test]
fn test_cli_extract_empty_content() {
    cmd()
        .args(["extract", &get_fixture_path("empty_content.html")])
        .assert()
        .failure();
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", "analyze", &get_fixture_path("sample.txt")])
        .args(lexicon_args())
        .assert()
        .success()
        .stderr(predicate::str::contains("Textgauge"));
}
