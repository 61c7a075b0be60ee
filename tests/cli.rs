//! End-to-end checks of the CLI driver against real paths.
//!
//! None of these pass `--open`, so nothing is ever launched.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("clapgrep-nautilus").unwrap()
}

#[test]
fn directory_selection_prints_the_search_item() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ClapgrepMenuProvider::Search::File"))
        .stdout(predicate::str::contains("Open in Clapgrep"))
        .stdout(predicate::str::contains("search-symbolic"));
}

#[test]
fn file_selection_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "hello").unwrap();

    cmd().arg(&file).assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn multi_selection_prints_nothing() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();

    cmd()
        .arg(a.path())
        .arg(b.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn background_query_names_the_background_item() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg("--background")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ClapgrepMenuProvider::Search::Background",
        ));
}

#[test]
fn background_query_on_a_file_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.img");
    std::fs::write(&file, [0u8; 4]).unwrap();

    cmd()
        .arg("--background")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("does-not-exist");

    cmd().arg(&gone).assert().failure();
}
