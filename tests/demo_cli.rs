#![cfg(feature = "cli")]

use std::process::Command;

use leveled_logging::LINE_ENDING;

fn demo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_logging-demo"))
}

#[test]
fn test_writes_one_line_into_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.log");

    let output = demo().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("[DEBUG] The name of this program is: "));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, format!("[INFO] Hello world from logging.h! {}", LINE_ENDING));
}

#[test]
fn test_missing_filename_prints_usage() {
    let output = demo().output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[ERROR] Usage: "));
    assert!(stdout.contains(" [filename] "));
}

#[test]
fn test_unopenable_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.log");

    let output = demo().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Couldn't open "));
}

#[test]
fn test_extra_arguments_are_ignored() {
    let dir = tempfile::tempdir().unwrap();

    let output = demo()
        .current_dir(dir.path())
        .args(["-dashed.log", "extra", "--help"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let contents = std::fs::read_to_string(dir.path().join("-dashed.log")).unwrap();
    assert_eq!(contents, format!("[INFO] Hello world from logging.h! {}", LINE_ENDING));
    assert!(!dir.path().join("extra").exists());
}
