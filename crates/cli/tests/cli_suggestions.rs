//! End-to-end tests against the compiled binary.
//!
//! These exercise the argument surface the way a shell user would:
//! queries, output modes, style filtering, and failure exit codes.
//!
//! Run with: cargo test -p dstamp-cli --test cli_suggestions

use std::io::Write;
use std::process::{Command, Stdio};

fn dstamp() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dstamp"))
}

fn stdout_of(args: &[&str]) -> String {
    let output = dstamp().args(args).output().expect("binary should run");
    assert!(
        output.status.success(),
        "dstamp {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

#[test]
fn test_raw_mode_prints_seven_markup_lines() {
    let stdout = stdout_of(&["-r", "in 5 minutes"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7, "expected seven markup lines, got: {stdout}");

    let codes = ['R', 't', 'T', 'd', 'D', 'f', 'F'];
    for (line, code) in lines.iter().zip(codes) {
        assert!(
            line.starts_with("<t:") && line.ends_with(&format!(":{code}>")),
            "line {line:?} should be markup with code {code}"
        );
    }
}

#[test]
fn test_style_filter_narrows_to_one() {
    let stdout = stdout_of(&["-r", "-s", "R", "tomorrow noon"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(":R>"));

    // Style names work too
    let stdout = stdout_of(&["-r", "-s", "short date", "tomorrow noon"]);
    assert!(stdout.trim().ends_with(":d>"));
}

#[test]
fn test_json_output_is_an_array_of_seven() {
    let stdout = stdout_of(&["--json", "5:45am"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let entries = parsed.as_array().expect("JSON array");
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["label"], "Relative");
    assert!(entries[0]["markup"]
        .as_str()
        .unwrap()
        .starts_with("<t:"));
}

#[test]
fn test_unquoted_multi_word_query() {
    let stdout = stdout_of(&["-r", "tomorrow", "noon"]);
    assert_eq!(stdout.lines().count(), 7);
}

#[test]
fn test_piped_query() {
    let mut child = dstamp()
        .arg("-r")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should spawn");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(b"next friday 8pm\n")
        .expect("write to stdin");
    let output = child.wait_with_output().expect("binary should finish");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 7);
}

#[test]
fn test_gibberish_exits_nonzero() {
    let output = dstamp()
        .args(["certainly", "not", "a", "time"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not interpret"));
}

#[test]
fn test_gibberish_in_raw_mode_is_silent() {
    let output = dstamp()
        .args(["-r", "gibberish"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_style_is_an_error() {
    let output = dstamp()
        .args(["-s", "bogus", "tomorrow"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown style"));
}

#[test]
fn test_invalid_precision_is_an_error() {
    let output = dstamp()
        .args(["-p", "1.5", "tomorrow"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("precision"));
}

#[test]
fn test_styles_listing() {
    let stdout = stdout_of(&["--styles"]);
    for label in [
        "Relative",
        "Short time",
        "Long time",
        "Short date",
        "Long date",
        "Long date with short time",
        "Long date with day of the week",
    ] {
        assert!(stdout.contains(label), "--styles should list {label:?}");
    }
}
