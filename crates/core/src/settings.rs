//! Deployment settings resolved from the environment

use std::collections::HashMap;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const STORAGE_BUCKET: &str = "STORAGE_BUCKET";
pub const APP_ENV: &str = "APP_ENV";

/// Environment name under which the database probe is skipped
pub const DEV_ENVIRONMENT: &str = "dev";

/// Source of environment variables.
///
/// The server reads the process environment; tests hand in a map so they
/// never have to mutate the real one.
pub trait EnvSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Deployment settings for a single request
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_host: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub storage_bucket: String,
    pub environment: String,
}

impl Settings {
    /// Resolve every setting, falling back to its default when the variable
    /// is unset or empty
    pub fn load(env: &dyn EnvSource) -> Self {
        let var = |key: &str, default: &str| {
            env.get(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            db_host: var(DB_HOST, "localhost"),
            db_name: var(DB_NAME, "php_app"),
            db_user: var(DB_USER, "php_app_user"),
            db_password: var(DB_PASSWORD, "password"),
            storage_bucket: var(STORAGE_BUCKET, "demo-bucket"),
            environment: var(APP_ENV, DEV_ENVIRONMENT),
        }
    }

    /// Whether the database probe should be skipped
    pub fn is_dev(&self) -> bool {
        self.environment == DEV_ENVIRONMENT
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("db_host", &self.db_host)
            .field("db_name", &self.db_name)
            .field("db_user", &self.db_user)
            .field("db_password", &"***")
            .field("storage_bucket", &self.storage_bucket)
            .field("environment", &self.environment)
            .finish()
    }
}
