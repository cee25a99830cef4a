//! Object storage for CampusBuzz.
//!
//! The [`provider::ObjectStorage`] trait is the narrow contract the rest of
//! the workspace sees: `put` bytes under a key, resolve a key to a public
//! URL. Two providers ship here (S3 and local filesystem), plus the poster
//! upload pipeline that turns a picked image into a durable public URL.

pub mod local;
pub mod poster;
pub mod provider;
pub mod s3;

pub use poster::{PosterSource, PosterUploader};
pub use provider::ObjectStorage;
