//! The session router.
//!
//! Drives the [`RouterState`] machine: every launch re-derives the state
//! from the persisted token and a fresh profile lookup, so a role change on
//! another device is picked up and a cached role is never trusted.

use std::sync::Arc;

use campusbuzz_core::error::CoreError;
use campusbuzz_core::profile::ProfileUpsert;
use campusbuzz_core::session::RouterState;
use campusbuzz_core::store::ProfileStore;
use campusbuzz_core::types::Id;

use crate::auth::{AuthService, Session};
use crate::profile::ProfileResolver;

/// Outcome of an authentication step: the session to persist on the device
/// plus the area to land in.
#[derive(Debug, Clone)]
pub struct Login {
    pub session: Session,
    pub state: RouterState,
}

/// Routes the user to the right top-level area.
#[derive(Clone)]
pub struct SessionRouter {
    auth: AuthService,
    resolver: ProfileResolver,
    profiles: Arc<dyn ProfileStore>,
}

impl SessionRouter {
    pub fn new(auth: AuthService, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            auth,
            resolver: ProfileResolver::new(Arc::clone(&profiles)),
            profiles,
        }
    }

    /// Derive the launch state from a persisted session token.
    ///
    /// No token, or a token that no longer maps to an active session,
    /// lands in `Unauthenticated`.
    pub async fn launch(&self, token: Option<&str>) -> Result<RouterState, CoreError> {
        let Some(token) = token else {
            return Ok(RouterState::Unauthenticated);
        };
        match self.auth.get_session(token).await? {
            None => Ok(RouterState::Unauthenticated),
            Some(identity) => self.route_identity(identity).await,
        }
    }

    /// Sign in and derive the post-login state.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Login, CoreError> {
        let session = self.auth.sign_in_with_password(email, password).await?;
        let state = self.route_identity(session.account_id).await?;
        Ok(Login { session, state })
    }

    /// Sign up; a fresh account always lands in the role gate.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Login, CoreError> {
        let session = self.auth.sign_up(email, password).await?;
        let state = self.route_identity(session.account_id).await?;
        Ok(Login { session, state })
    }

    /// Complete the profile from the role gate and enter the chosen area.
    pub async fn choose_role(
        &self,
        identity: Id,
        choice: ProfileUpsert,
    ) -> Result<RouterState, CoreError> {
        choice.validate()?;
        let profile = self
            .profiles
            .upsert(identity, choice.full_name.trim(), choice.year, choice.role)
            .await?;
        tracing::info!(%identity, role = choice.role.as_str(), "Profile completed");
        Ok(RouterState::from_profile(Some(&profile)))
    }

    /// Explicit logout: revoke the session and return to `Unauthenticated`.
    pub async fn logout(&self, token: &str) -> Result<RouterState, CoreError> {
        self.auth.sign_out(token).await?;
        Ok(RouterState::Unauthenticated)
    }

    async fn route_identity(&self, identity: Id) -> Result<RouterState, CoreError> {
        let profile = self.resolver.resolve(identity).await?;
        Ok(RouterState::from_profile(profile.as_ref()))
    }
}
