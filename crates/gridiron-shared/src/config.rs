//! Configuration management
//!
//! Values come from, in increasing priority: built-in defaults,
//! `config/default.*`, `config/<APP_ENV>.*`, then the process environment
//! (flat upper-case names such as `SECRET_KEY` and `DATABASE_URI`).
//! The configuration is read once at startup and never mutated afterwards.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_ACCESS_TOKEN_EXPIRY, DEFAULT_APP_ENV, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_HOST,
    DEFAULT_PORT,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app_env: String,
    pub host: String,
    pub port: u16,

    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub jwt_secret_key: Option<String>,
    pub jwt_access_token_expires: i64,

    #[serde(default)]
    pub database_uri: Option<String>,
    /// SQL statement logging; off unless asked for.
    pub database_log_statements: bool,
    pub database_max_connections: u32,

    #[serde(default)]
    pub instance_path: Option<PathBuf>,

    pub log_format: LogFormat,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load from config files and the process environment.
    ///
    /// `.env` is not read here; callers run `dotenvy::dotenv()` first.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());
        Self::build(&env, None)
    }

    /// Load with `vars` standing in for the process environment.
    pub fn from_env_map(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let env = vars
            .get("APP_ENV")
            .cloned()
            .unwrap_or_else(|| DEFAULT_APP_ENV.into());
        Self::build(&env, Some(vars))
    }

    fn build(env: &str, vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        // No try_parsing: secrets must keep leading zeros; numeric fields
        // are parsed from strings during deserialization.
        let config = Config::builder()
            .set_default("app_env", DEFAULT_APP_ENV)?
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("jwt_access_token_expires", DEFAULT_ACCESS_TOKEN_EXPIRY)?
            .set_default("database_log_statements", false)?
            .set_default(
                "database_max_connections",
                i64::from(DEFAULT_DATABASE_MAX_CONNECTIONS),
            )?
            .set_default("log_format", "json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().source(vars))
            .build()?;
        config.try_deserialize()
    }

    /// Raw `DATABASE_URI`; an empty value counts as unset.
    pub fn database_uri(&self) -> Option<&str> {
        non_empty(self.database_uri.as_deref())
    }

    pub fn secret_key(&self) -> Option<&str> {
        non_empty(self.secret_key.as_deref())
    }

    /// `JWT_SECRET_KEY`, falling back to `SECRET_KEY`.
    pub fn jwt_secret(&self) -> Option<&str> {
        non_empty(self.jwt_secret_key.as_deref()).or_else(|| self.secret_key())
    }

    /// Absolute instance folder: `INSTANCE_PATH` if set, otherwise `default`.
    ///
    /// The folder ends up inside a `sqlite:///` URI, so it must be UTF-8.
    pub fn resolve_instance_path(&self, default: &Path) -> Result<PathBuf, AppError> {
        let path = self.instance_path.as_deref().unwrap_or(default);
        let absolute = std::path::absolute(path).map_err(|source| AppError::InstancePath {
            path: path.to_path_buf(),
            source,
        })?;
        if absolute.to_str().is_none() {
            return Err(AppError::NonUtf8Path(absolute));
        }
        Ok(absolute)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
