//! End-to-end tests for the review-gate binary
//!
//! Each test runs the binary in an empty temp dir with an isolated config
//! home, so no stray config file changes the keywords.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const READY: &str = "REVIEW_GATE_AWAITING_INPUT:";

fn gate(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("review-gate").expect("binary should build");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_scenario_hello_blank_quit() {
    let temp = TempDir::new().unwrap();

    let output = gate(&temp).write_stdin("hello\n  \nquit\n").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected_tail = "REVIEW_GATE_AWAITING_INPUT:USER_REVIEW_SUB_PROMPT: hello\n\
        REVIEW_GATE_AWAITING_INPUT:\
        REVIEW_GATE_AWAITING_INPUT:--- REVIEW GATE: USER SIGNALED COMPLETION WITH 'QUIT' ---\n\
        --- FINAL REVIEW GATE SCRIPT EXITED ---\n";
    assert!(stdout.ends_with(expected_tail), "unexpected stdout:\n{stdout}");
}

#[test]
fn test_immediate_eof() {
    let temp = TempDir::new().unwrap();

    gate(&temp)
        .write_stdin("")
        .assert()
        .success()
        .stdout(
            "--- FINAL REVIEW GATE ACTIVE ---\n\
             AI has completed its primary actions. Awaiting your review or further sub-prompts.\n\
             Type your sub-prompt, or one of: 'TASK_COMPLETE', 'Done', 'Quit', 'q' to signal completion.\n\
             REVIEW_GATE_AWAITING_INPUT:--- REVIEW GATE: STDIN CLOSED (EOF), EXITING SCRIPT ---\n\
             --- FINAL REVIEW GATE SCRIPT EXITED ---\n",
        );
}

#[test]
fn test_each_keyword_completes() {
    let temp = TempDir::new().unwrap();

    for (input, echoed) in [("TASK_COMPLETE", "TASK_COMPLETE"), ("done", "DONE"), ("Quit", "QUIT"), ("q", "Q")] {
        let output = gate(&temp)
            .write_stdin(format!("  {input}  \nafter\n"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains(&format!("USER SIGNALED COMPLETION WITH '{echoed}'")));
        assert_eq!(stdout.matches(READY).count(), 1, "no ready-signal after completion");
        assert!(!stdout.contains("after"));
    }
}

#[test]
fn test_invalid_utf8_exits_zero() {
    let temp = TempDir::new().unwrap();

    gate(&temp)
        .write_stdin(&b"\xff\xff\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- REVIEW GATE SCRIPT ERROR: "))
        .stdout(predicate::str::ends_with("--- FINAL REVIEW GATE SCRIPT EXITED ---\n"));
}

#[test]
fn test_config_keywords() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("gate.yml");
    std::fs::write(&config, "keywords: [Approve]\n").unwrap();

    gate(&temp)
        .arg("--config")
        .arg(&config)
        .write_stdin("done\napprove\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("or one of: 'Approve' to signal completion."))
        .stdout(predicate::str::contains("USER_REVIEW_SUB_PROMPT: done\n"))
        .stdout(predicate::str::contains("COMPLETION WITH 'APPROVE'"));
}

#[test]
fn test_project_local_config_is_picked_up() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".review-gate.yml"), "keywords: [merge]\n").unwrap();

    gate(&temp)
        .write_stdin("MERGE\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("COMPLETION WITH 'MERGE'"));
}

#[test]
fn test_bad_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();

    gate(&temp)
        .arg("--config")
        .arg(temp.path().join("missing.yml"))
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'TASK_COMPLETE', 'Done', 'Quit', 'q'"))
        .stdout(predicate::str::contains("COMPLETION WITH 'Q'"))
        .stderr(predicate::str::contains("using defaults"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let temp = TempDir::new().unwrap();

    let output = gate(&temp)
        .args(["--log-level", "debug"])
        .write_stdin("look at this\nq\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("review-gate starting"));
    assert!(!stdout.contains("review-gate starting"));
    assert!(stdout.contains("USER_REVIEW_SUB_PROMPT: look at this\n"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let temp = TempDir::new().unwrap();

    gate(&temp).arg("--no-such-flag").assert().failure().code(2);
}
