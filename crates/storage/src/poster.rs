//! The poster upload pipeline.
//!
//! Turns the image a user picked into a durable public URL before any event
//! row is written. Re-submitting an event whose poster is already remote
//! never re-uploads, and an upload failure aborts the enclosing operation
//! so no event is ever persisted with a dangling poster reference.

use std::sync::Arc;

use image::ImageFormat;
use uuid::Uuid;

use campusbuzz_core::error::CoreError;

use crate::provider::ObjectStorage;

/// Key prefix for poster objects.
const POSTER_PREFIX: &str = "event-posters";

/// Where the poster image for a submission comes from.
#[derive(Debug, Clone)]
pub enum PosterSource {
    /// Raw image bytes read from the device.
    Local(Vec<u8>),
    /// An already-committed public URL (unchanged poster on edit).
    Remote(String),
}

impl PosterSource {
    /// Read a local image file into a [`PosterSource::Local`].
    pub async fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let bytes = tokio::fs::read(path.as_ref())
            .await
            .map_err(|err| CoreError::Transport(format!("Cannot read poster image: {err}")))?;
        Ok(Self::Local(bytes))
    }
}

/// Uploads poster images and resolves their public URLs.
#[derive(Clone)]
pub struct PosterUploader {
    store: Arc<dyn ObjectStorage>,
}

impl PosterUploader {
    pub fn new(store: Arc<dyn ObjectStorage>) -> Self {
        Self { store }
    }

    /// Resolve a poster source to a public URL.
    ///
    /// - `None`: posterless event, resolves to `None`.
    /// - `Remote(url)`: returned as-is; no upload happens.
    /// - `Local(bytes)`: format is sniffed from the bytes, the image is
    ///   stored under a fresh unique key, and its public URL is returned.
    pub async fn resolve(&self, source: Option<PosterSource>) -> Result<Option<String>, CoreError> {
        match source {
            None => Ok(None),
            Some(PosterSource::Remote(url)) => Ok(Some(url)),
            Some(PosterSource::Local(bytes)) => self.upload(bytes).await.map(Some),
        }
    }

    async fn upload(&self, bytes: Vec<u8>) -> Result<String, CoreError> {
        let (ext, content_type) = sniff_format(&bytes)?;
        // Uuid v4 keys: concurrent uploads by different organizers never collide.
        let key = format!("{POSTER_PREFIX}/{}.{ext}", Uuid::new_v4());

        self.store.put(&key, bytes, content_type).await?;
        let url = self.store.public_url(&key);
        tracing::info!(%key, "Poster uploaded");
        Ok(url)
    }
}

/// Determine `(extension, content type)` from the image header bytes.
fn sniff_format(bytes: &[u8]) -> Result<(&'static str, &'static str), CoreError> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => Ok(("png", "image/png")),
        Ok(ImageFormat::Jpeg) => Ok(("jpg", "image/jpeg")),
        Ok(ImageFormat::WebP) => Ok(("webp", "image/webp")),
        Ok(other) => Err(CoreError::Validation(format!(
            "Unsupported poster image format: {other:?}"
        ))),
        Err(_) => Err(CoreError::Validation(
            "Poster is not a recognizable image".into(),
        )),
    }
}
