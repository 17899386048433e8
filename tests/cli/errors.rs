//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("confgen") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_positional_is_usage_error() {
    let t = Test::new();

    let output = t.cmd().args(["secure", BUCKET]).output().unwrap();
    assert_exit_code(&output, 2);
}

#[test]
fn test_print_overrides_local_root() {
    let t = Test::new();
    t.write("line.template", "<key>");

    let output = t
        .local_cmd()
        .args(["--print", "secure", BUCKET, "secure.conf", "line.template"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).len(), 30);
    assert!(!t.object_path("secure.conf").exists());
}

#[test]
fn test_print_with_local_root_env() {
    let t = Test::new();
    t.write("line.template", "<key>");

    let output = t
        .cmd()
        .env("CONFGEN_LOCAL_ROOT", t.out.path())
        .args(["--print", "secure", BUCKET, "secure.conf", "line.template"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_client_id(&stdout(&output));
    assert_eq!(stdout(&output).len(), 30);
    assert!(!t.object_path("secure.conf").exists());
}

#[test]
fn test_local_root_from_env() {
    let t = Test::new();
    t.write("line.template", "<key>");

    let output = t
        .cmd()
        .env("CONFGEN_LOCAL_ROOT", t.out.path())
        .args(["secure", BUCKET, "secure.conf", "line.template"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.object("secure.conf").len(), 30);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("confgen"));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_confgen") || out.contains("complete"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("#compdef confgen"));
}

#[test]
fn test_missing_credentials_file_exit_status() {
    let t = Test::new();

    t.local_cmd()
        .args(["apiserver", "true", BUCKET, "apiserver.conf", "absent.yaml", "example.com"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File absent.yaml not found."))
        .stdout(predicate::str::is_empty());
}
