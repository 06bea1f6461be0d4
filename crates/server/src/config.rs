//! Server configuration

use appstatus_core::{EnvSource, ProcessEnv};

/// Server configuration loaded from environment variables
pub struct Config {
    pub bind_address: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::load(&ProcessEnv)
    }

    /// `BIND_ADDRESS` takes precedence; otherwise the server listens on all
    /// interfaces at `PORT` (set by Cloud Run), defaulting to 8080. Empty
    /// values count as unset.
    pub fn load(env: &dyn EnvSource) -> Self {
        let var = |key: &str| env.get(key).filter(|v| !v.is_empty());

        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| {
            let port = var("PORT").unwrap_or_else(|| "8080".into());
            format!("0.0.0.0:{}", port)
        });
        Self { bind_address }
    }
}
