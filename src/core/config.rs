//! Generator job definitions.
//!
//! The CLI turns raw arguments into one of these jobs through a validating
//! constructor. Nothing downstream looks at argv again.

use std::path::PathBuf;

use tracing::debug;

use crate::core::types::{ObjectLocation, PasswordMode};
use crate::core::validation;
use crate::error::Result;

/// Build and upload `apiserver.conf`.
#[derive(Debug, Clone)]
pub struct ApiServerJob {
    pub mode: PasswordMode,
    pub location: ObjectLocation,
    pub users_file: PathBuf,
    pub domain: String,
    pub bcrypt_cost: u32,
}

impl ApiServerJob {
    /// Validate raw arguments and build the job.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the hash flag, bucket, key or domain is
    /// invalid.
    pub fn new(
        hash: &str,
        bucket: String,
        key: String,
        users_file: PathBuf,
        domain: String,
        bcrypt_cost: u32,
    ) -> Result<Self> {
        let mode = validation::parse_password_mode(hash)?;
        validation::validate_bucket(&bucket)?;
        validation::validate_object_key(&key)?;
        validation::validate_domain(&domain)?;

        let job = Self {
            mode,
            location: ObjectLocation::new(bucket, key),
            users_file,
            domain,
            bcrypt_cost,
        };
        debug!(?job, "apiserver job");
        Ok(job)
    }
}

/// Fill and upload a `secure.conf` template.
#[derive(Debug, Clone)]
pub struct SecureJob {
    pub location: ObjectLocation,
    pub template: PathBuf,
}

impl SecureJob {
    /// Validate raw arguments and build the job.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the bucket or key is invalid.
    pub fn new(bucket: String, key: String, template: PathBuf) -> Result<Self> {
        validation::validate_bucket(&bucket)?;
        validation::validate_object_key(&key)?;

        let job = Self {
            location: ObjectLocation::new(bucket, key),
            template,
        };
        debug!(?job, "secure job");
        Ok(job)
    }
}
