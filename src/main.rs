//! confgen - deployment-time configuration generator for ClearML servers.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use confgen::cli::output;
use confgen::cli::{execute, Cli};
use confgen::error::{Error, InputError, UploadError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("CONFGEN_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("confgen=debug")
        } else {
            EnvFilter::new("confgen=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let store = cli.store_options();
    if let Err(e) = execute(cli.command, &store) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Input(InputError::CredentialsNotFound(_)) => {
                Some("pass the path to a YAML file with a `users:` list")
            }
            Error::Upload(UploadError::NoCredentials { .. }) => {
                Some("configure AWS credentials (AWS_PROFILE or AWS_ACCESS_KEY_ID)")
            }
            Error::Upload(UploadError::PartialCredentials { .. }) => {
                Some("set both AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
