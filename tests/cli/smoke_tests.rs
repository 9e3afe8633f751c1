use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_textfolio"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("textfolio"));
}

#[test]
fn analyze_missing_folder_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    Command::new(env!("CARGO_BIN_EXE_textfolio"))
        .arg("analyze")
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read folder"));
}

#[test]
fn analyze_folder_without_txt_files_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("notes.md"), "markdown only").unwrap();

    Command::new(env!("CARGO_BIN_EXE_textfolio"))
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .txt files found"));
}

#[test]
fn unlock_rejects_invalid_base64() {
    Command::new(env!("CARGO_BIN_EXE_textfolio"))
        .args(["unlock", "not base64!!", "--key", "K"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid base64"));
}
