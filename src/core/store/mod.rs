//! Object storage for rendered configuration.
//!
//! Provides an upload abstraction with implementations for the different
//! places a configuration can be written.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `ObjectStore` trait
//! 2. Add the implementation in a new file (e.g., `gcs.rs`)
//! 3. Feature-gate if it pulls in a cloud SDK
//! 4. Wire it into `backend::select`
//!
//! ## Example
//!
//! ```ignore
//! struct Gcs { /* ... */ }
//!
//! impl ObjectStore for Gcs {
//!     fn name(&self) -> &'static str {
//!         "gcs"
//!     }
//!     fn put(&self, location: &ObjectLocation, body: &str) -> Result<()> {
//!         // Write to Google Cloud Storage
//!     }
//! }
//! ```

use tracing::info;

use crate::core::types::ObjectLocation;
use crate::error::Result;

mod backend;
mod local;
mod stdout;

#[cfg(feature = "s3")]
pub mod s3;

pub use backend::{select, StoreOptions};
pub use local::LocalDir;
pub use stdout::Stdout;

/// Object storage trait.
///
/// A successful `put` means the object was written. Implementations must
/// report missing or rejected credentials as an error, never as success.
pub trait ObjectStore {
    /// Backend name for display.
    fn name(&self) -> &'static str;

    /// Write `body` as the object at `location`, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `UploadError` if the object could not be written.
    fn put(&self, location: &ObjectLocation, body: &str) -> Result<()>;
}

/// Upload `content` to `location` through `store`.
///
/// Single attempt, no retry. Concurrent uploads to the same location are
/// last-write-wins.
///
/// # Errors
///
/// Propagates the store's `UploadError`. Authentication failures can be
/// recognised with `UploadError::is_auth`.
pub fn upload(store: &dyn ObjectStore, content: &str, location: &ObjectLocation) -> Result<()> {
    info!(
        backend = store.name(),
        bytes = content.len(),
        "uploading contents to {}",
        location
    );
    store.put(location, content)?;
    info!(backend = store.name(), "contents uploaded to {}", location);
    Ok(())
}
