//! `apiserver.conf` generation.
//!
//! Reads the fixed-user list and renders the `auth` block that restricts
//! ClearML logins to exactly those accounts.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::core::constants::{COOKIE_DOMAIN_PREFIX, COOKIE_MAX_AGE};
use crate::core::password;
use crate::core::types::PasswordMode;
use crate::error::{InputError, Result};

/// A single fixed-user account.
///
/// Cleared from memory on drop since `password` is usually plaintext.
#[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct UserCredential {
    pub username: String,
    pub password: String,
    pub name: String,
}

impl fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Top-level shape of the credentials file.
///
/// ```yaml
/// users:
///   - username: alice
///     password: s3cret
///     name: Alice
/// ```
#[derive(Debug, Deserialize)]
pub struct UserList {
    pub users: Vec<UserCredential>,
}

/// Load the user list from a YAML file.
///
/// # Errors
///
/// Returns `InputError::CredentialsNotFound` if the file does not exist and
/// `InputError::Parse` if it is not a valid user list.
pub fn load_users(path: &Path) -> Result<UserList> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => Zeroizing::new(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(InputError::CredentialsNotFound(path.to_path_buf()).into());
        }
        Err(source) => {
            return Err(InputError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into());
        }
    };

    let list: UserList = serde_yaml::from_str(&contents).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(users = list.users.len(), path = %path.display(), "loaded user list");
    if list.users.is_empty() {
        warn!("user list is empty, nobody will be able to log in");
    }
    Ok(list)
}

/// Render the `auth` block for `apiserver.conf`.
///
/// In [`PasswordMode::Hashed`] each password is replaced by its bcrypt hash.
pub fn render_apiserver(
    domain: &str,
    mode: PasswordMode,
    users: &[UserCredential],
) -> Result<String> {
    render_apiserver_with_cost(domain, mode, users, password::BCRYPT_COST)
}

/// [`render_apiserver`] with an explicit bcrypt cost.
pub fn render_apiserver_with_cost(
    domain: &str,
    mode: PasswordMode,
    users: &[UserCredential],
    cost: u32,
) -> Result<String> {
    let mut out = format!(
        "auth {{
    cookies {{
        httponly: true
        secure: true
        domain: \"{prefix}{domain}\"
        max_age: {max_age}
    }}
    # Fixed users login credentials
    # No other user will be able to login
    fixed_users {{
        enabled: true
        pass_hashed: {hashed}
        users: [
",
        prefix = COOKIE_DOMAIN_PREFIX,
        domain = escape(domain),
        max_age = COOKIE_MAX_AGE,
        hashed = mode.is_hashed(),
    );

    for user in users {
        let password = match mode {
            PasswordMode::Hashed => password::hash_password_with_cost(&user.password, cost)?,
            PasswordMode::Plain => user.password.clone(),
        };
        let password = Zeroizing::new(password);

        out.push_str(&format!(
            "            {{
                username: \"{}\"
                password: \"{}\"
                name: \"{}\"
            }},
",
            escape(&user.username),
            escape(&password),
            escape(&user.name),
        ));
    }

    out.push_str(
        "        ]
    }
}
",
    );

    debug!(users = users.len(), hashed = mode.is_hashed(), "rendered apiserver config");
    Ok(out)
}

/// Escape a value for a HOCON quoted string.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}
