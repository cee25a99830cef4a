//! Tracing initialization for the embedding application.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to debug-level output for the workspace
/// crates. Call once at startup, before any service is constructed.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campusbuzz=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
