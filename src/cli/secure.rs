//! Secure command - fill and upload a secure.conf template.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::SecureJob;
use crate::core::store::{self, StoreOptions};
use crate::core::template;
use crate::error::{InputError, Result};

/// Replace placeholders in the template and upload the result once.
pub fn execute(
    bucket: String,
    key: String,
    template_path: PathBuf,
    store_options: &StoreOptions,
) -> Result<()> {
    let job = SecureJob::new(bucket, key, template_path)?;

    let raw = fs::read_to_string(&job.template).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            InputError::TemplateNotFound(job.template.clone())
        } else {
            InputError::Read {
                path: job.template.clone(),
                source,
            }
        }
    })?;

    let rendered = template::render_secure(&raw);
    let content = Zeroizing::new(rendered.content);
    info!(
        secrets = rendered.secrets,
        keys = rendered.keys,
        "Rendered secure.conf"
    );

    if rendered.secrets == 0 && rendered.keys == 0 {
        output::warn("template has no <secret> or <key> placeholders");
    }

    let backend = store::select(store_options);
    store::upload(backend.as_ref(), &content, &job.location)?;

    output::success(&format!(
        "uploaded secure config ({} secrets, {} keys) to {}",
        rendered.secrets,
        rendered.keys,
        output::path(&job.location.to_string())
    ));
    Ok(())
}
