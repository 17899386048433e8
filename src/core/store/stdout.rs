//! Stdout "store" for previewing rendered configuration.

use std::io::{self, Write};

use super::ObjectStore;
use crate::core::types::ObjectLocation;
use crate::error::{Result, UploadError};

/// Writes the object body to stdout instead of storing it.
pub struct Stdout;

impl ObjectStore for Stdout {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn put(&self, location: &ObjectLocation, body: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(body.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|source| UploadError::Write {
                path: location.key.clone().into(),
                source,
            })?;
        Ok(())
    }
}
