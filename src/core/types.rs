//! Small domain types shared between the generators and the stores.

use std::fmt;

/// Where a rendered configuration is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

/// How passwords are embedded in `apiserver.conf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMode {
    /// Embed the password as given.
    Plain,
    /// Embed base64(bcrypt(password)).
    Hashed,
}

impl PasswordMode {
    /// Value written to `pass_hashed:`.
    pub fn is_hashed(self) -> bool {
        matches!(self, PasswordMode::Hashed)
    }
}
