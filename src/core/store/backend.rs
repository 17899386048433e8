//! Backend selection logic for configuration uploads
//!
//! Picks where rendered configuration goes: stdout, a local directory, or
//! S3, based on the global CLI options.

use std::path::PathBuf;

use tracing::info;

use super::{LocalDir, ObjectStore, Stdout};

/// Options that decide which backend is used.
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Print the rendered configuration instead of uploading it.
    pub print: bool,
    /// Write under this directory instead of S3.
    pub local_root: Option<PathBuf>,
    /// AWS region override for S3.
    pub region: Option<String>,
}

/// Select the storage backend.
///
/// Precedence: `print`, then `local_root`, then S3.
pub fn select(options: &StoreOptions) -> Box<dyn ObjectStore> {
    if options.print {
        info!("Using stdout backend");
        return Box::new(Stdout);
    }

    if let Some(root) = &options.local_root {
        info!("Using local directory backend at {}", root.display());
        return Box::new(LocalDir::new(root.clone()));
    }

    info!("Using S3 backend");
    s3_backend(options.region.clone())
}

#[cfg(feature = "s3")]
fn s3_backend(region: Option<String>) -> Box<dyn ObjectStore> {
    Box::new(super::s3::S3::new(region))
}

#[cfg(not(feature = "s3"))]
fn s3_backend(_region: Option<String>) -> Box<dyn ObjectStore> {
    Box::new(Unavailable)
}

/// Stand-in when the binary was built without the `s3` feature.
#[cfg(not(feature = "s3"))]
struct Unavailable;

#[cfg(not(feature = "s3"))]
impl ObjectStore for Unavailable {
    fn name(&self) -> &'static str {
        "s3"
    }

    fn put(
        &self,
        _location: &crate::core::types::ObjectLocation,
        _body: &str,
    ) -> crate::error::Result<()> {
        Err(crate::error::UploadError::Unsupported("s3").into())
    }
}
