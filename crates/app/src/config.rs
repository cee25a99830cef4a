//! Application configuration loaded from environment variables.

/// Which object storage provider to wire up.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    S3 {
        bucket: String,
        /// Optional CDN/base-URL override for public poster URLs.
        public_base_url: Option<String>,
    },
    Local {
        base_path: String,
        public_base_url: String,
    },
}

/// Top-level configuration.
///
/// All fields have sensible defaults for local development except
/// `DATABASE_URL`, which must be set.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Connection pool size (default: `5`).
    pub max_connections: u32,
    pub storage: StorageConfig,
    /// Login session lifetime in days (default: `30`).
    pub session_ttl_days: i64,
    /// Minimum password length accepted at sign-up (default: `8`).
    pub min_password_len: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Required       | Default             |
    /// |---------------------------|----------------|---------------------|
    /// | `DATABASE_URL`            | **yes**        | --                  |
    /// | `DB_MAX_CONNECTIONS`      | no             | `5`                 |
    /// | `STORAGE_BACKEND`         | no             | `local`             |
    /// | `STORAGE_S3_BUCKET`       | when `s3`      | --                  |
    /// | `STORAGE_PUBLIC_BASE_URL` | when `local`   | see below           |
    /// | `STORAGE_LOCAL_PATH`      | no             | `./data/posters`    |
    /// | `SESSION_TTL_DAYS`        | no             | `30`                |
    /// | `MIN_PASSWORD_LEN`        | no             | `8`                 |
    ///
    /// # Panics
    ///
    /// Panics on a missing `DATABASE_URL`, an unparseable numeric value, or
    /// `STORAGE_BACKEND=s3` without a bucket. Misconfiguration should fail
    /// fast at startup.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in the environment");

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());
        let storage = match backend.as_str() {
            "s3" => StorageConfig::S3 {
                bucket: std::env::var("STORAGE_S3_BUCKET")
                    .expect("STORAGE_S3_BUCKET must be set when STORAGE_BACKEND=s3"),
                public_base_url: std::env::var("STORAGE_PUBLIC_BASE_URL").ok(),
            },
            "local" => StorageConfig::Local {
                base_path: std::env::var("STORAGE_LOCAL_PATH")
                    .unwrap_or_else(|_| "./data/posters".into()),
                public_base_url: std::env::var("STORAGE_PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:9000/posters".into()),
            },
            other => panic!("Unknown STORAGE_BACKEND '{other}'. Must be one of: s3, local"),
        };

        let session_ttl_days: i64 = std::env::var("SESSION_TTL_DAYS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SESSION_TTL_DAYS must be a valid i64");

        let min_password_len: usize = std::env::var("MIN_PASSWORD_LEN")
            .unwrap_or_else(|_| "8".into())
            .parse()
            .expect("MIN_PASSWORD_LEN must be a valid usize");

        Self {
            database_url,
            max_connections,
            storage,
            session_ttl_days,
            min_password_len,
        }
    }
}
