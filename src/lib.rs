//! confgen - deployment-time configuration generator for ClearML servers.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── apiserver     # Render + upload apiserver.conf
//! │   ├── secure        # Render + upload secure.conf
//! │   ├── token         # Print a single generated token
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Validated generator jobs
//!     ├── validation    # Argument validation
//!     ├── token         # Secret and client id generation
//!     ├── template      # <secret>/<key> substitution
//!     ├── password      # bcrypt hashing
//!     ├── apiserver     # User list loading and auth block rendering
//!     └── store/        # Upload backends
//!         ├── mod       # ObjectStore trait + upload
//!         ├── s3        # AWS S3 (feature `s3`)
//!         ├── local     # Local directory
//!         └── stdout    # Preview
//! ```
//!
//! # Features
//!
//! - Cryptographically secure secrets and client ids
//! - Positional placeholder substitution, one fresh value per occurrence
//! - Salted bcrypt password hashing for ClearML fixed users
//! - Upload failures, including missing credentials, are always reported

pub mod cli;
pub mod core;
pub mod error;
