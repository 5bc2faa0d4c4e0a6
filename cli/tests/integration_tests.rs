use std::process::{Command, Output};

fn run_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argbind-demo"))
        .args(args)
        .env_remove("ARGBIND_LOG")
        .output()
        .expect("failed to run argbind-demo")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Success
// ---------------------------------------------------------------------------

#[test]
fn demo_greets_named_caller() {
    let output = run_demo(&["--name=Ferris", "1.25", "2"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hello Ferris.\nResult: 3.25000\n");
}

#[test]
fn demo_without_name_uses_placeholder() {
    let output = run_demo(&["0.5", "-3"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hello (whoever you are).\nResult: -2.50000\n");
}

#[test]
fn demo_accepts_name_as_separate_token() {
    let output = run_demo(&["-name", "Ada", "--", "1", "1"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("Hello Ada.\n"));
}

// ---------------------------------------------------------------------------
// Help
// ---------------------------------------------------------------------------

#[test]
fn demo_help_exits_zero_on_stderr() {
    let output = run_demo(&["--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    let help = stderr(&output);
    assert!(help.starts_with("Adds a float and an integer, then says hello.\n\nUsage:\n"));
    assert!(help.contains("[-name NAME] FLOAT INT"));
    assert!(help.contains("\t-h,--help\tPrint usage and exit.\n"));
    assert!(help.contains("\t-name\t\tYour name. Optional.\n"));
}

#[test]
fn demo_help_ignores_later_tokens() {
    let output = run_demo(&["-h", "--bogus", "not-a-number"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("Options:"));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn demo_bad_float_exits_one_with_help() {
    let output = run_demo(&["abc", "2"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.starts_with("error: token parse failed for float"), "stderr: {err}");
    assert!(err.contains("Usage:"));
}

#[test]
fn demo_missing_argument_reports_count() {
    let output = run_demo(&["1.0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("expected 2, found 1"));
}

#[test]
fn demo_unknown_option_fails() {
    let output = run_demo(&["--nickname=Ferris", "1", "2"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: "));
}

#[test]
fn demo_name_too_long_fails() {
    let output = run_demo(&["--name=abcdefghijklmnopqrstuvwxyz", "1", "2"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("buf too small"));
}
