//! Local directory object storage.
//!
//! Mirrors the bucket/key layout under a root directory
//! (`<root>/<bucket>/<key>`). Used for dry runs and tests.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::ObjectStore;
use crate::core::types::ObjectLocation;
use crate::error::{Result, UploadError};

/// Directory-backed object storage.
pub struct LocalDir {
    root: PathBuf,
}

impl LocalDir {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Filesystem path for an object.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::InvalidLocalKey` if the bucket or key would
    /// escape the root directory.
    pub fn object_path(&self, location: &ObjectLocation) -> Result<PathBuf> {
        let mut path = self.root.clone();
        for part in [location.bucket.as_str(), location.key.as_str()] {
            let relative = Path::new(part);
            for component in relative.components() {
                match component {
                    Component::Normal(c) => path.push(c),
                    Component::CurDir => {}
                    _ => {
                        return Err(UploadError::InvalidLocalKey {
                            key: location.to_string(),
                            reason: "must not contain '..' or absolute components".to_string(),
                        }
                        .into());
                    }
                }
            }
        }
        Ok(path)
    }
}

impl ObjectStore for LocalDir {
    fn name(&self) -> &'static str {
        "local"
    }

    fn put(&self, location: &ObjectLocation, body: &str) -> Result<()> {
        let path = self.object_path(location)?;
        let write_err = |source: std::io::Error| UploadError::Write {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&path, body).map_err(write_err)?;

        // Restrict permissions on the written config (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).map_err(write_err)?;
        }

        debug!(path = %path.display(), "wrote object");
        Ok(())
    }
}
