//! Tests for the token command.

use crate::support::*;

#[test]
fn test_token_secret_default() {
    let t = Test::new();

    let output = t.token(&["secret"]);
    assert_success(&output);
    let token = stdout(&output).trim_end().to_string();
    assert_eq!(token.len(), 67);
    assert_urlsafe(&token);
}

#[test]
fn test_token_secret_length() {
    let t = Test::new();

    let output = t.token(&["secret", "--length", "12"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end().len(), 16);
}

#[test]
fn test_token_client_id_default() {
    let t = Test::new();

    let output = t.token(&["client-id"]);
    assert_success(&output);
    let token = stdout(&output).trim_end().to_string();
    assert_eq!(token.len(), 30);
    assert_client_id(&token);
}

#[test]
fn test_token_client_id_length() {
    let t = Test::new();

    let output = t.token(&["client-id", "-l", "8"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end().len(), 8);
}
