//! Input validation for generator arguments.
//!
//! Validates bucket names, object keys, domains and the hash flag before
//! any file is read or any token is generated.

use crate::core::constants::MAX_OBJECT_KEY_LEN;
use crate::core::types::PasswordMode;
use crate::error::{Result, ValidationError};

/// Parse the literal `true`/`false` hash flag.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPasswordMode` for anything else.
pub fn parse_password_mode(value: &str) -> Result<PasswordMode> {
    match value {
        "true" => Ok(PasswordMode::Hashed),
        "false" => Ok(PasswordMode::Plain),
        other => Err(ValidationError::InvalidPasswordMode(other.to_string()).into()),
    }
}

/// Validate an S3 bucket name.
///
/// Bucket names must be:
/// - 3 to 63 characters long
/// - lowercase letters, digits, dots and hyphens only
/// - start and end with a letter or digit
///
/// # Errors
///
/// Returns `ValidationError` if the bucket name is invalid.
pub fn validate_bucket(bucket: &str) -> Result<()> {
    if bucket.is_empty() {
        return Err(ValidationError::EmptyBucket.into());
    }

    let invalid = |reason: String| ValidationError::InvalidBucket {
        bucket: bucket.to_string(),
        reason,
    };

    if !(3..=63).contains(&bucket.len()) {
        return Err(invalid(format!("must be 3-63 characters, got {}", bucket.len())).into());
    }

    for (i, ch) in bucket.chars().enumerate() {
        if !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '.' || ch == '-') {
            return Err(invalid(format!(
                "invalid character '{}' at position {}. Only a-z, 0-9, '.' and '-' are allowed",
                ch,
                i + 1
            ))
            .into());
        }
    }

    let edge_ok = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
    if !edge_ok(bucket.chars().next()) || !edge_ok(bucket.chars().last()) {
        return Err(invalid("must start and end with a letter or digit".to_string()).into());
    }

    Ok(())
}

/// Validate an object key.
///
/// # Errors
///
/// Returns `ValidationError` if the key is empty or longer than 1024 bytes.
pub fn validate_object_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyObjectKey.into());
    }
    if key.len() > MAX_OBJECT_KEY_LEN {
        return Err(ValidationError::ObjectKeyTooLong(key.len()).into());
    }
    Ok(())
}

/// Validate the ClearML domain used for the cookie domain.
///
/// # Errors
///
/// Returns `ValidationError::InvalidDomain` if the domain is empty,
/// contains whitespace or quotes, or starts with a dot.
pub fn validate_domain(domain: &str) -> Result<()> {
    let invalid = |reason: &str| ValidationError::InvalidDomain {
        domain: domain.to_string(),
        reason: reason.to_string(),
    };

    if domain.is_empty() {
        return Err(invalid("cannot be empty").into());
    }
    if domain.chars().any(|c| c.is_whitespace() || c == '"') {
        return Err(invalid("cannot contain whitespace or quotes").into());
    }
    if domain.starts_with('.') {
        return Err(invalid("cannot start with '.', the '.clearml.' prefix is added").into());
    }
    Ok(())
}
