use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn textfolio() -> Command {
    Command::new(env!("CARGO_BIN_EXE_textfolio"))
}

fn sample_folder() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("alpha.txt"), "Cat. cat, CAT!\n").unwrap();
    std::fs::write(dir.path().join("beta.txt"), "ab cd efg").unwrap();
    std::fs::write(dir.path().join("readme.md"), "not part of the batch").unwrap();
    dir
}

#[test]
fn analyze_table_lists_files_and_summary() {
    let dir = sample_folder();
    textfolio()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("alpha.txt")
                .and(predicate::str::contains("beta.txt"))
                .and(predicate::str::contains("2 files"))
                .and(predicate::str::contains("readme.md").not()),
        );
}

#[test]
fn report_prints_enriched_csv() {
    let dir = sample_folder();
    let assert = textfolio().arg("report").arg(dir.path()).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.trim_end().split('\n').collect();
    assert_eq!(
        lines[0],
        "Filename,Word Count,Line Count,Unique Words,Avg Word Length,Sentiment,Complexity"
    );
    assert_eq!(lines[1], "alpha.txt,3,2,1,3,neutral,moderate");
    assert_eq!(lines[2], "beta.txt,3,1,3,2.33,neutral,moderate");
}

#[test]
fn report_output_flag_writes_the_csv_file() {
    let dir = sample_folder();
    let out = dir.path().join("report.csv");

    textfolio()
        .arg("report")
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).expect("report file exists");
    assert!(csv.starts_with("Filename,Word Count,"));
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn lock_emits_known_base64_vector() {
    // 'A' ^ 'K' = 14, 'B' ^ 'K' = 13; [14, 13] armors to "Dg0=".
    textfolio()
        .args(["lock", "AB", "--key", "K"])
        .assert()
        .success()
        .stdout("Dg0=\n");
}

#[test]
fn lock_then_unlock_round_trips_via_stdout() {
    let assert = textfolio()
        .args(["lock", "hello world", "--key", "secret"])
        .assert()
        .success();
    let locked = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    textfolio()
        .args(["unlock", locked.trim_end(), "--key", "secret"])
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn lock_to_file_then_unlock_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let plain = dir.path().join("plain.txt");
    let locked = dir.path().join("locked.bin");
    std::fs::write(&plain, "héllo from the vault").unwrap();

    textfolio()
        .args(["lock", "--key", "orchard"])
        .arg("--input")
        .arg(&plain)
        .arg("--output")
        .arg(&locked)
        .assert()
        .success();

    // Raw file output is the transformed bytes, same length as the input.
    let plain_len = std::fs::metadata(&plain).unwrap().len();
    assert_eq!(std::fs::metadata(&locked).unwrap().len(), plain_len);

    textfolio()
        .args(["unlock", "--key", "orchard"])
        .arg("--input")
        .arg(&locked)
        .assert()
        .success()
        .stdout("héllo from the vault\n");
}

#[test]
fn unlock_with_wrong_key_reports_undecodable_output() {
    // "AAAA" ^ 'a' = four spaces; undoing with "á" (bytes C3 A1) yields the
    // byte sequence E3 81 E3 81, which is not valid UTF-8.
    let assert = textfolio().args(["lock", "AAAA", "--key", "a"]).assert().success();
    let locked = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    textfolio()
        .args(["unlock", locked.trim_end(), "--key", "á"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong key"));
}
