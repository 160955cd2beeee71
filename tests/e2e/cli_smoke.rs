//! CLI E2E smoke tests.

use std::io;
use std::process::{Command, Output};

fn run_orx(args: &[&str]) -> io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_orx"))
        .args(args)
        .env_remove("ORX_LOG")
        .output()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn hello_prints_both_words() -> io::Result<()> {
    let output = run_orx(&["hello"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "hello\nworld\n");
    Ok(())
}

#[test]
fn collect_sums_valid_values() -> io::Result<()> {
    let output = run_orx(&["collect", "1", "2", "3"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "values: 1, 2, 3\nsum: 6\n");
    Ok(())
}

#[test]
fn collect_rejects_the_first_invalid_value() -> io::Result<()> {
    let output = run_orx(&["collect", "1", "x", "y"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("error: invalid input: `x`"), "stderr: {stderr}");
    assert!(!stderr.contains("`y`"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn divide_reports_the_quotient() -> io::Result<()> {
    let output = run_orx(&["divide", "7", "2"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "quotient: 3\n");
    assert!(stderr_of(&output).contains("remainder 1 discarded"));
    Ok(())
}

#[test]
fn divide_by_zero_is_captured_as_an_error() -> io::Result<()> {
    let output = run_orx(&["divide", "1", "0"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("error: computation panicked: attempt to divide by zero"),
        "stderr: {stderr}"
    );
    assert!(!stderr.contains("thread 'main' panicked"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn json_output_is_machine_readable() -> io::Result<()> {
    let output = run_orx(&["--output", "json", "collect", "4", "-5"])?;

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["values"], serde_json::json!([4, -5]));
    assert_eq!(payload["sum"], -1);
    assert_eq!(payload["result"], serde_json::json!({ "Ok": [4, -5] }));
    Ok(())
}

#[test]
fn json_hello_exposes_the_tagged_sources() -> io::Result<()> {
    let output = run_orx(&["hello", "--output", "json"])?;

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["greeting"], serde_json::json!(["hello", "world"]));
    assert_eq!(
        payload["sources"],
        serde_json::json!([{ "Ok": "hello" }, { "Some": "world" }])
    );
    Ok(())
}

#[test]
fn info_names_the_library() -> io::Result<()> {
    let output = run_orx(&["info"])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("status: ok"));
    assert!(stdout.contains("option-result-core: "));
    Ok(())
}
