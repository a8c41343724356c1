//! Credential configuration loading from environment variables.
//!
//! The three credential values are opaque to this crate; they are issued by
//! the cloud console and consumed only by the transport's token grant.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `FACE_API_APP_ID`: application id
//! - `FACE_API_KEY`: API key (OAuth client id)
//! - `FACE_API_SECRET_KEY`: secret key (OAuth client secret)
//!
//! ## Optional Variables
//! - `FACE_API_ENDPOINT`: service base URL (default: "https://aip.baidubce.com")

use serde::Deserialize;

/// Credentials and endpoint for the remote face-recognition service.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app_id: String,
    pub api_key: String,
    pub secret_key: String,
    pub endpoint: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required environment variable is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            app_id: env_required("FACE_API_APP_ID")?,
            api_key: env_required("FACE_API_KEY")?,
            secret_key: env_required("FACE_API_SECRET_KEY")?,
            endpoint: env_or("FACE_API_ENDPOINT", "https://aip.baidubce.com".to_string())?,
        })
    }
}

/// Load a required environment variable.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
