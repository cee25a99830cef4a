//! Wires configuration to concrete backends and hands out the services.

use std::sync::Arc;

use campusbuzz_core::error::CoreError;
use campusbuzz_db::stores::{
    PgAccountStore, PgEventStore, PgProfileStore, PgRegistrationStore, PgSessionStore,
};
use campusbuzz_db::{create_pool, run_migrations, DbPool};
use campusbuzz_storage::local::LocalStorage;
use campusbuzz_storage::s3::S3Storage;
use campusbuzz_storage::{ObjectStorage, PosterUploader};

use crate::auth::AuthService;
use crate::config::{AppConfig, StorageConfig};
use crate::events::EventService;
use crate::registrations::RegistrationManager;
use crate::router::SessionRouter;

/// The fully wired service set a screen layer drives.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub router: SessionRouter,
    pub events: EventService,
    pub registrations: RegistrationManager,
}

impl Services {
    /// Connect to PostgreSQL, apply migrations, select the storage provider,
    /// and construct every service over the shared pool.
    pub async fn from_config(config: &AppConfig) -> Result<Self, CoreError> {
        let pool = create_pool(&config.database_url, config.max_connections)
            .await
            .map_err(|err| CoreError::Transport(format!("Cannot connect to database: {err}")))?;
        run_migrations(&pool)
            .await
            .map_err(|err| CoreError::Internal(format!("Migration failed: {err}")))?;
        tracing::info!("Database ready");

        let storage = build_storage(&config.storage).await;
        Ok(Self::over(pool, storage, config))
    }

    /// Wire the services over an existing pool and storage provider.
    pub fn over(pool: DbPool, storage: Arc<dyn ObjectStorage>, config: &AppConfig) -> Self {
        let accounts = Arc::new(PgAccountStore::new(pool.clone()));
        let sessions = Arc::new(PgSessionStore::new(pool.clone()));
        let profiles = Arc::new(PgProfileStore::new(pool.clone()));
        let events = Arc::new(PgEventStore::new(pool.clone()));
        let registrations = Arc::new(PgRegistrationStore::new(pool));

        let auth = AuthService::new(
            accounts,
            sessions,
            config.session_ttl_days,
            config.min_password_len,
        );
        let router = SessionRouter::new(auth.clone(), profiles.clone());

        Self {
            auth,
            router,
            events: EventService::new(
                events,
                registrations.clone(),
                PosterUploader::new(storage),
            ),
            registrations: RegistrationManager::new(registrations, profiles),
        }
    }
}

async fn build_storage(config: &StorageConfig) -> Arc<dyn ObjectStorage> {
    match config {
        StorageConfig::S3 {
            bucket,
            public_base_url,
        } => {
            tracing::info!(%bucket, "Using S3 poster storage");
            Arc::new(S3Storage::from_env(bucket.clone(), public_base_url.clone()).await)
        }
        StorageConfig::Local {
            base_path,
            public_base_url,
        } => {
            tracing::info!(%base_path, "Using local poster storage");
            Arc::new(LocalStorage::new(base_path.clone(), public_base_url.clone()))
        }
    }
}
