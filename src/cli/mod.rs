//! Command-line interface.

pub mod apiserver;
pub mod completions;
pub mod output;
pub mod secure;
pub mod token;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::{DEFAULT_CLIENT_ID_LENGTH, DEFAULT_SECRET_LENGTH};
use crate::core::password::BCRYPT_COST;
use crate::core::store::StoreOptions;

/// confgen - ClearML configuration generator.
#[derive(Parser)]
#[command(
    name = "confgen",
    about = "Generate ClearML server configuration and upload it to object storage",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the rendered configuration instead of uploading it (overrides --local-root)
    #[arg(long, global = true)]
    pub print: bool,

    /// Write to <DIR>/<BUCKET>/<KEY> instead of uploading to S3
    #[arg(long, global = true, value_name = "DIR", env = "CONFGEN_LOCAL_ROOT")]
    pub local_root: Option<PathBuf>,

    /// AWS region for S3 uploads (defaults to the SDK provider chain)
    #[arg(long, global = true)]
    pub region: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Storage options derived from the global flags.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            print: self.print,
            local_root: self.local_root.clone(),
            region: self.region.clone(),
        }
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Render apiserver.conf from a user list and upload it
    Apiserver {
        /// Hash passwords with bcrypt: 'true' or 'false'
        hash: String,
        /// Destination bucket
        bucket: String,
        /// Destination object key
        key: String,
        /// YAML file with a `users:` list of username/password/name
        users_file: PathBuf,
        /// Domain used for the `.clearml.<domain>` cookie domain
        domain: String,
        /// bcrypt cost factor
        #[arg(long, default_value_t = BCRYPT_COST, value_parser = clap::value_parser!(u32).range(4..=31))]
        cost: u32,
    },

    /// Fill <secret> and <key> placeholders in a template and upload it
    Secure {
        /// Destination bucket
        bucket: String,
        /// Destination object key
        key: String,
        /// secure.conf template file
        template: PathBuf,
    },

    /// Print a freshly generated token
    Token {
        #[command(subcommand)]
        kind: TokenKind,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Token kinds for `confgen token`.
#[derive(Subcommand)]
pub enum TokenKind {
    /// URL-safe secret, as used for <secret>
    Secret {
        /// Random bytes to draw
        #[arg(short, long, default_value_t = DEFAULT_SECRET_LENGTH)]
        length: usize,
    },

    /// Uppercase alphanumeric client id, as used for <key>
    ClientId {
        /// Number of characters
        #[arg(short, long, default_value_t = DEFAULT_CLIENT_ID_LENGTH)]
        length: usize,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, store: &StoreOptions) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Apiserver {
            hash,
            bucket,
            key,
            users_file,
            domain,
            cost,
        } => apiserver::execute(&hash, bucket, key, users_file, domain, cost, store),
        Secure {
            bucket,
            key,
            template,
        } => secure::execute(bucket, key, template, store),
        Token { kind } => match kind {
            TokenKind::Secret { length } => token::secret(length),
            TokenKind::ClientId { length } => token::client_id(length),
        },
        Completions { shell } => completions::execute(shell),
    }
}
