//! AWS S3 object storage.
//!
//! Uploads rendered configuration with `PutObject`.
//! Enable with `--features s3` (on by default).
//!
//! Credentials come from the environment (AWS_ACCESS_KEY_ID, etc.) or the
//! default credential provider chain. They are resolved before the request
//! is sent so that missing and incomplete credentials are reported as such
//! instead of as a generic request failure.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::error::CredentialsError;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{debug, trace};

use super::ObjectStore;
use crate::core::constants::CONTENT_TYPE;
use crate::core::types::ObjectLocation;
use crate::error::{Error, Result, UploadError};

/// S3 backend using the AWS SDK.
pub struct S3 {
    region: Option<String>,
}

impl S3 {
    /// Create a new S3 store, optionally pinned to a region.
    pub fn new(region: Option<String>) -> Self {
        Self { region }
    }

    async fn load_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        loader.load().await
    }
}

impl ObjectStore for S3 {
    fn name(&self) -> &'static str {
        "s3"
    }

    fn put(&self, location: &ObjectLocation, body: &str) -> Result<()> {
        trace!(location = %location, body_len = body.len(), "putting object to S3");

        // Create a tokio runtime for the async AWS SDK
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| UploadError::Runtime(e.to_string()))?;

        rt.block_on(async {
            let config = self.load_config().await;
            ensure_credentials(&config, location).await?;

            let client = aws_sdk_s3::Client::new(&config);
            let output = client
                .put_object()
                .bucket(&location.bucket)
                .key(&location.key)
                .content_type(CONTENT_TYPE)
                .body(ByteStream::from(body.as_bytes().to_vec()))
                .send()
                .await
                .map_err(|e| UploadError::Request {
                    location: location.to_string(),
                    reason: DisplayErrorContext(&e).to_string(),
                })?;

            debug!(etag = output.e_tag().unwrap_or("-"), "S3 accepted object");
            Ok::<(), Error>(())
        })
    }
}

/// Name the missing half of a static key pair in the environment.
///
/// Returns `None` when both or neither of the access key id and secret key
/// are set. Blank values count as unset.
fn missing_env_half(
    access_key_id: Option<&str>,
    secret_access_key: Option<&str>,
) -> Option<&'static str> {
    let set = |v: Option<&str>| v.is_some_and(|v| !v.trim().is_empty());
    match (set(access_key_id), set(secret_access_key)) {
        (true, false) => Some("AWS_SECRET_ACCESS_KEY"),
        (false, true) => Some("AWS_ACCESS_KEY_ID"),
        _ => None,
    }
}

/// Resolve credentials and classify any failure.
///
/// A half-configured key pair in the environment is reported before the
/// provider chain runs, since the chain would skip it and report nothing.
async fn ensure_credentials(config: &SdkConfig, location: &ObjectLocation) -> Result<()> {
    let access_key_id = std::env::var("AWS_ACCESS_KEY_ID").ok();
    let secret_access_key = std::env::var("AWS_SECRET_ACCESS_KEY").ok();
    if let Some(missing) =
        missing_env_half(access_key_id.as_deref(), secret_access_key.as_deref())
    {
        return Err(UploadError::PartialCredentials {
            location: location.to_string(),
            reason: format!("{} is not set", missing),
        }
        .into());
    }

    let Some(provider) = config.credentials_provider() else {
        return Err(UploadError::NoCredentials {
            location: location.to_string(),
        }
        .into());
    };

    match provider.provide_credentials().await {
        Ok(_) => Ok(()),
        Err(CredentialsError::CredentialsNotLoaded(_)) => Err(UploadError::NoCredentials {
            location: location.to_string(),
        }
        .into()),
        Err(e @ CredentialsError::InvalidConfiguration(_)) => {
            Err(UploadError::PartialCredentials {
                location: location.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            }
            .into())
        }
        Err(e) => Err(UploadError::Request {
            location: location.to_string(),
            reason: format!(
                "failed to resolve credentials: {}",
                DisplayErrorContext(&e)
            ),
        }
        .into()),
    }
}
