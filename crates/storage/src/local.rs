//! Local-filesystem storage provider, used for development and tests.

use std::path::PathBuf;

use async_trait::async_trait;

use campusbuzz_core::error::CoreError;

use crate::provider::ObjectStorage;

/// Objects written under a base directory and served from a base URL.
pub struct LocalStorage {
    base_path: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), CoreError> {
        let path = self.base_path.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|err| {
                CoreError::Transport(format!("Cannot create storage dir: {err}"))
            })?;
        }
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|err| CoreError::Transport(format!("Cannot write '{key}': {err}")))?;

        tracing::debug!(%key, size = bytes.len(), content_type, "Stored object locally");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url.trim_end_matches('/'))
    }
}
