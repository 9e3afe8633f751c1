use assert_cmd::Command;
use tempfile::TempDir;

fn textfolio() -> Command {
    Command::new(env!("CARGO_BIN_EXE_textfolio"))
}

fn sample_folder() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("alpha.txt"), "Cat. cat, CAT!\n").unwrap();
    std::fs::write(dir.path().join("beta.txt"), "ab cd efg").unwrap();
    dir
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn json_output_carries_folder_files_and_summary() {
    let dir = sample_folder();
    let assert = textfolio()
        .arg("analyze")
        .arg(dir.path())
        .args(["--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&stdout_of(assert)).unwrap();
    assert_eq!(value["folder"], dir.path().display().to_string());

    let files = value["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["filename"], "alpha.txt");
    assert_eq!(files[0]["words"], 3);
    assert_eq!(files[0]["unique_words"], 1);
    assert_eq!(files[1]["avg_word_length"], 2.33);

    assert_eq!(value["summary"]["files"], 2);
    assert_eq!(value["summary"]["words"], 6);
}

#[test]
fn csv_output_has_one_row_per_file() {
    let dir = sample_folder();
    let assert = textfolio()
        .arg("analyze")
        .arg(dir.path())
        .args(["--format", "csv"])
        .assert()
        .success();

    let stdout = stdout_of(assert);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "filename,words,lines,chars,unique_words,avg_word_length");
    assert_eq!(lines[1], "alpha.txt,3,2,15,1,3");
    assert_eq!(lines[2], "beta.txt,3,1,9,3,2.33");
}

#[test]
fn tsv_output_uses_tab_separators() {
    let dir = sample_folder();
    let assert = textfolio()
        .arg("analyze")
        .arg(dir.path())
        .args(["--format", "tsv"])
        .assert()
        .success();

    assert!(stdout_of(assert).contains("beta.txt\t3\t1\t9\t3\t2.33"));
}

#[test]
fn sort_by_words_descending_changes_row_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("short.txt"), "one").unwrap();
    std::fs::write(dir.path().join("long.txt"), "one two three four").unwrap();

    let assert = textfolio()
        .arg("analyze")
        .arg(dir.path())
        .args(["--format", "csv", "--sort", "words", "--desc"])
        .assert()
        .success();

    let stdout = stdout_of(assert);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[1].starts_with("long.txt,4,"));
    assert!(lines[2].starts_with("short.txt,1,"));
}
