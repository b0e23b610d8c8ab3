/**
 * Server Configuration
 *
 * Settings are read from the environment (after `dotenv` has loaded `.env`).
 *
 * | key                | default           |
 * |--------------------|-------------------|
 * | `PORT`             | `6001`            |
 * | `DATABASE_URL`     | unset (in-memory) |
 * | `JWT_SECRET`       | required          |
 * | `TOKEN_TTL_SECS`   | `2592000`         |
 * | `UPLOAD_DIR`       | `public/assets`   |
 * | `BODY_LIMIT_BYTES` | `31457280`        |
 * | `BCRYPT_COST`      | `12`              |
 *
 * # Error Handling
 *
 * A missing `JWT_SECRET` or an unparsable value is a `ConfigError` and stops
 * startup.
 */

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 6001;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;
pub const DEFAULT_UPLOAD_DIR: &str = "public/assets";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 30 * 1024 * 1024;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Postgres URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Token signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: u64,
    /// Upload destination, also served at `/assets`
    pub upload_dir: PathBuf,
    /// Maximum request body size
    pub body_limit_bytes: usize,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut builder = Self::builder();
        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = get("PORT") {
            builder = builder.port(parse("PORT", &port)?);
        }
        if let Some(ttl) = get("TOKEN_TTL_SECS") {
            builder = builder.token_ttl_secs(parse("TOKEN_TTL_SECS", &ttl)?);
        }
        if let Some(dir) = get("UPLOAD_DIR") {
            builder = builder.upload_dir(dir);
        }
        if let Some(limit) = get("BODY_LIMIT_BYTES") {
            builder = builder.body_limit_bytes(parse("BODY_LIMIT_BYTES", &limit)?);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse("BCRYPT_COST", &cost)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_secs: Option<u64>,
    upload_dir: Option<PathBuf>,
    body_limit_bytes: Option<usize>,
    bcrypt_cost: Option<u32>,
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_secs(mut self, secs: u64) -> Self {
        self.token_ttl_secs = Some(secs);
        self
    }

    pub fn upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = Some(dir.into());
        self
    }

    pub fn body_limit_bytes(mut self, bytes: usize) -> Self {
        self.body_limit_bytes = Some(bytes);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl_secs: self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            upload_dir: self
                .upload_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            body_limit_bytes: self.body_limit_bytes.unwrap_or(DEFAULT_BODY_LIMIT_BYTES),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}
