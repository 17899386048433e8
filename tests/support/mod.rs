//! Test support utilities for confgen integration tests.
//!
//! Provides an isolated working directory, an output root for the local
//! store, and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Bucket used by every local-store test.
pub const BUCKET: &str = "tfstate";

/// Test environment with isolated temp directories.
///
/// `dir` holds input files, `out` is passed as `--local-root` so uploads
/// land at `out/<bucket>/<key>`. No process-global state is mutated, so
/// tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for input files
    pub dir: TempDir,
    /// Temporary local-store root
    pub out: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let out = TempDir::new().expect("failed to create temp out dir");

        Self { dir, out }
    }

    /// Write an input file and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write input file");
        path
    }

    /// Path an object would be written to by the local store.
    pub fn object_path(&self, key: &str) -> PathBuf {
        self.out.path().join(BUCKET).join(key)
    }

    /// Read an uploaded object.
    pub fn object(&self, key: &str) -> String {
        fs::read_to_string(self.object_path(key))
            .unwrap_or_else(|e| panic!("object {} not written: {}", key, e))
    }
}
