//! Error types for confgen.
//!
//! Every fallible operation returns [`Result`]. Each concern has its own
//! enum so callers can match on exactly the failure they care about, in
//! particular upload authentication problems, which must never be
//! mistaken for success.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Upload authentication failures get their own status so that
    /// provisioning pipelines can tell "nothing was written" apart from bad
    /// input.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Upload(e) if e.is_auth() => 3,
            _ => 1,
        }
    }
}

/// Errors reading operator-supplied input files.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("File {} not found.", .0.display())]
    CredentialsNotFound(PathBuf),

    #[error("template {} not found", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed user list in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors validating command-line arguments.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid hash flag '{0}': expected 'true' or 'false'")]
    InvalidPasswordMode(String),

    #[error("bucket name cannot be empty")]
    EmptyBucket,

    #[error("invalid bucket name '{bucket}': {reason}")]
    InvalidBucket { bucket: String, reason: String },

    #[error("object key cannot be empty")]
    EmptyObjectKey,

    #[error("object key is {0} bytes, the limit is 1024")]
    ObjectKeyTooLong(usize),

    #[error("invalid domain '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: String },
}

/// Errors hashing or verifying passwords.
#[derive(Error, Debug)]
pub enum HashError {
    #[error("bcrypt failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("password hash is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("decoded password hash is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors writing the rendered configuration to object storage.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("credentials not available for {location}")]
    NoCredentials { location: String },

    #[error("incomplete credentials provided for {location}: {reason}")]
    PartialCredentials { location: String, reason: String },

    #[error("upload to {location} failed: {reason}")]
    Request { location: String, reason: String },

    #[error("failed to start async runtime: {0}")]
    Runtime(String),

    #[error("invalid object key '{key}' for local storage: {reason}")]
    InvalidLocalKey { key: String, reason: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} support not compiled in (rebuild with --features {0})")]
    Unsupported(&'static str),
}

impl UploadError {
    /// Whether this error means the store rejected or lacked credentials.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            UploadError::NoCredentials { .. } | UploadError::PartialCredentials { .. }
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
