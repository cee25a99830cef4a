//! The profile resolver.

use std::sync::Arc;

use campusbuzz_core::error::CoreError;
use campusbuzz_core::profile::Profile;
use campusbuzz_core::store::ProfileStore;
use campusbuzz_core::types::Id;

/// Resolves an authenticated identity to its profile, if one exists.
#[derive(Clone)]
pub struct ProfileResolver {
    profiles: Arc<dyn ProfileStore>,
}

impl ProfileResolver {
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Look up the profile for an identity.
    ///
    /// `Ok(None)` is the legitimate first-run state (no role picked yet).
    /// Infrastructure errors propagate verbatim -- nothing is swallowed
    /// here. No side effects.
    pub async fn resolve(&self, identity: Id) -> Result<Option<Profile>, CoreError> {
        self.profiles.find(identity).await
    }
}
