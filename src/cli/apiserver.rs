//! Apiserver command - render and upload apiserver.conf.

use std::path::PathBuf;

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::apiserver::{load_users, render_apiserver_with_cost};
use crate::core::config::ApiServerJob;
use crate::core::store::{self, StoreOptions};
use crate::error::Result;

/// Render the fixed-users auth block and upload it.
pub fn execute(
    hash: &str,
    bucket: String,
    key: String,
    users_file: PathBuf,
    domain: String,
    cost: u32,
    store_options: &StoreOptions,
) -> Result<()> {
    let job = ApiServerJob::new(hash, bucket, key, users_file, domain, cost)?;

    let list = load_users(&job.users_file)?;
    info!(users = list.users.len(), "Rendering apiserver.conf");

    let content = Zeroizing::new(render_apiserver_with_cost(
        &job.domain,
        job.mode,
        &list.users,
        job.bcrypt_cost,
    )?);

    let backend = store::select(store_options);
    store::upload(backend.as_ref(), &content, &job.location)?;

    output::success(&format!(
        "uploaded apiserver config ({} users) to {}",
        list.users.len(),
        output::path(&job.location.to_string())
    ));
    Ok(())
}
