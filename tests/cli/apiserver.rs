//! Tests for the apiserver command.

use crate::support::*;

#[test]
fn test_apiserver_plain_passwords() {
    let t = Test::new();
    t.write("users.yaml", USERS_YAML);

    let output = t.apiserver("false", "apiserver.conf", "users.yaml", "example.com");
    assert_success(&output);
    assert_stderr_contains(&output, "tfstate/apiserver.conf");

    let conf = t.object("apiserver.conf");
    assert!(conf.contains("domain: \".clearml.example.com\""));
    assert!(conf.contains("pass_hashed: false"));
    assert_eq!(quoted_values(&conf, "username"), ["alice", "bob"]);
    assert_eq!(quoted_values(&conf, "password"), ["alice-pw", "bob-pw"]);
    assert_eq!(quoted_values(&conf, "name"), ["Alice Admin", "Bob Builder"]);
}

#[test]
fn test_apiserver_hashed_passwords() {
    let t = Test::new();
    t.write("users.yaml", USERS_YAML);

    let output = t.apiserver("true", "apiserver.conf", "users.yaml", "example.com");
    assert_success(&output);

    let conf = t.object("apiserver.conf");
    assert!(conf.contains("pass_hashed: true"));

    let hashes = quoted_values(&conf, "password");
    assert_eq!(hashes.len(), 2);
    assert!(confgen::core::password::verify_password("alice-pw", &hashes[0]).unwrap());
    assert!(confgen::core::password::verify_password("bob-pw", &hashes[1]).unwrap());
    assert!(!conf.contains("alice-pw"));
}

#[test]
fn test_apiserver_nested_key() {
    let t = Test::new();
    t.write("users.yaml", USERS_YAML);

    let output = t.apiserver("false", "clearml/config/apiserver.conf", "users.yaml", "example.com");
    assert_success(&output);
    assert!(t.object_path("clearml/config/apiserver.conf").exists());
}

#[test]
fn test_apiserver_missing_credentials_file() {
    let t = Test::new();

    let output = t.apiserver("true", "apiserver.conf", "missing-users.yaml", "example.com");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "missing-users.yaml");
    assert_stderr_contains(&output, "not found");
    assert!(!t.object_path("apiserver.conf").exists());
}

#[test]
fn test_apiserver_missing_field() {
    let t = Test::new();
    t.write("users.yaml", USERS_MISSING_NAME);

    let output = t.apiserver("false", "apiserver.conf", "users.yaml", "example.com");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "users.yaml");
    assert_stderr_contains(&output, "name");
    assert!(!t.object_path("apiserver.conf").exists());
}

#[test]
fn test_apiserver_rejects_bad_hash_flag() {
    let t = Test::new();
    t.write("users.yaml", USERS_YAML);

    let output = t.apiserver("yes", "apiserver.conf", "users.yaml", "example.com");
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "'true' or 'false'");
}

#[test]
fn test_apiserver_rejects_bad_domain() {
    let t = Test::new();
    t.write("users.yaml", USERS_YAML);

    let output = t.apiserver("false", "apiserver.conf", "users.yaml", ".example.com");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid domain");
}

#[test]
fn test_apiserver_print() {
    let t = Test::new();
    t.write("users.yaml", USERS_YAML);

    let output = t
        .cmd()
        .args([
            "--print",
            "apiserver",
            "false",
            BUCKET,
            "apiserver.conf",
            "users.yaml",
            "example.com",
        ])
        .output()
        .unwrap();
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.starts_with("auth {"));
    assert!(out.contains("username: \"alice\""));
    assert!(!out.contains('✓'));
}
