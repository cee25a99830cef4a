//! S3 storage provider.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use campusbuzz_core::error::CoreError;

use crate::provider::ObjectStorage;

/// Objects stored in an S3 (or S3-compatible) bucket.
pub struct S3Storage {
    client: Client,
    bucket: String,
    region: String,
    /// Overrides the derived `https://{bucket}.s3.{region}.amazonaws.com`
    /// base, e.g. for a CDN or an S3-compatible endpoint.
    public_base_url: Option<String>,
}

impl S3Storage {
    /// Build a provider from the ambient AWS environment
    /// (credentials chain, `AWS_REGION`, etc.).
    pub async fn from_env(bucket: String, public_base_url: Option<String>) -> Self {
        let config = aws_config::load_from_env().await;
        let region = config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "us-east-1".to_string());
        Self {
            client: Client::new(&config),
            bucket,
            region,
            public_base_url,
        }
    }

    pub fn new(
        client: Client,
        bucket: String,
        region: String,
        public_base_url: Option<String>,
    ) -> Self {
        Self {
            client,
            bucket,
            region,
            public_base_url,
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), CoreError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|err| CoreError::Transport(format!("S3 put failed for '{key}': {err}")))?;

        tracing::debug!(%key, size, content_type, "Stored object in S3");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{key}", base.trim_end_matches('/')),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{key}",
                self.bucket, self.region
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(public_base_url: Option<String>) -> S3Storage {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .build();
        S3Storage::new(
            Client::from_conf(config),
            "campusbuzz-posters".into(),
            "ap-south-1".into(),
            public_base_url,
        )
    }

    #[test]
    fn derived_public_url() {
        let s3 = storage(None);
        assert_eq!(
            s3.public_url("event-posters/abc.png"),
            "https://campusbuzz-posters.s3.ap-south-1.amazonaws.com/event-posters/abc.png"
        );
    }

    #[test]
    fn overridden_public_url_trims_trailing_slash() {
        let s3 = storage(Some("https://cdn.example.edu/".into()));
        assert_eq!(
            s3.public_url("event-posters/abc.png"),
            "https://cdn.example.edu/event-posters/abc.png"
        );
    }
}
