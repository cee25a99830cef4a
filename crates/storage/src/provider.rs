//! The storage provider trait.

use async_trait::async_trait;

use campusbuzz_core::error::CoreError;

/// Durable, publicly addressable object storage.
///
/// Keys are flat strings (a `/` is only a naming convention). A stored
/// object must be fetchable at [`ObjectStorage::public_url`] immediately
/// after [`ObjectStorage::put`] resolves.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` under `key` with the given content type.
    ///
    /// Failures surface as [`CoreError::Transport`]; nothing is retried here.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), CoreError>;

    /// Stable public URL for a stored key.
    fn public_url(&self, key: &str) -> String;
}
