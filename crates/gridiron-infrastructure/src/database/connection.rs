//! Database handle and connection pool
//!
//! The pool connects lazily, so an app can be built before the database file
//! exists. A handle built without a URI stays unbound and every repository
//! call on it fails with `DomainError::DatabaseNotConfigured`; one built from
//! another database scheme fails with `DomainError::DatabaseUnavailable`.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use thiserror::Error;
use tracing::{info, warn};

use gridiron_core::error::DomainError;
use gridiron_shared::database_uri::SQLITE_RELATIVE_PREFIX;

const IN_MEMORY_URIS: [&str; 2] = ["sqlite://", "sqlite::memory:"];

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Unsupported database scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Malformed SQLite URI: {0}")]
    MalformedUri(String),

    #[error("Failed to create database directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub log_statements: bool,
}

#[derive(Debug, Clone)]
enum Binding {
    Unbound,
    /// A URI was given but this build cannot open it.
    Unavailable(String),
    Pool(SqlitePool),
}

#[derive(Debug, Clone)]
pub struct Database {
    binding: Binding,
    uri: Option<String>,
}

impl Database {
    pub fn unbound() -> Self {
        Self {
            binding: Binding::Unbound,
            uri: None,
        }
    }

    /// Bind to `uri` (already normalized). `None` yields an unbound handle.
    ///
    /// Nothing is opened here. A URI for another database scheme still
    /// yields a handle whose repositories fail on first use; a malformed
    /// `sqlite:` URI is an error. Must be called from within a Tokio runtime.
    pub fn bind(uri: Option<&str>, settings: PoolSettings) -> Result<Self, DatabaseError> {
        let Some(uri) = uri else {
            info!("No database URI configured; database access is disabled");
            return Ok(Self::unbound());
        };

        let binding = match connect_options(uri) {
            Ok(options) => {
                info!("Database bound: {}", uri);
                Binding::Pool(lazy_pool(uri, options, settings))
            }
            Err(e @ DatabaseError::UnsupportedScheme(_)) => {
                warn!("Database URI cannot be opened: {}", e);
                Binding::Unavailable(e.to_string())
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            binding,
            uri: Some(uri.to_string()),
        })
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.binding, Binding::Pool(_))
    }

    /// Configured URI, kept even when it cannot be opened.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn pool(&self) -> Result<&SqlitePool, DomainError> {
        match &self.binding {
            Binding::Pool(pool) => Ok(pool),
            Binding::Unbound => Err(DomainError::DatabaseNotConfigured),
            Binding::Unavailable(reason) => Err(DomainError::DatabaseUnavailable(reason.clone())),
        }
    }

    /// Create the database file's directory and apply pending migrations.
    /// A no-op unless a pool is bound.
    pub async fn initialize(&self) -> Result<(), DatabaseError> {
        let (Binding::Pool(pool), Some(uri)) = (&self.binding, &self.uri) else {
            return Ok(());
        };

        if let Some(dir) = database_file(uri).and_then(Path::parent) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| DatabaseError::Directory {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        sqlx::migrate!("./migrations").run(pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    pub async fn close(&self) {
        if let Binding::Pool(pool) = &self.binding {
            pool.close().await;
        }
    }
}

fn lazy_pool(uri: &str, options: SqliteConnectOptions, settings: PoolSettings) -> SqlitePool {
    let options = if settings.log_statements {
        options
    } else {
        options.disable_statement_logging()
    };

    if is_in_memory(uri) {
        // One connection that never recycles, or the data goes with it.
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_lazy_with(options)
    } else {
        SqlitePoolOptions::new()
            .max_connections(settings.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(3))
            .connect_lazy_with(options)
    }
}

fn is_in_memory(uri: &str) -> bool {
    IN_MEMORY_URIS.contains(&uri)
}

fn database_file(uri: &str) -> Option<&Path> {
    uri.strip_prefix(SQLITE_RELATIVE_PREFIX)
        .filter(|path| !path.is_empty())
        .map(Path::new)
}

/// Connection options for a SQLite URI. `sqlite://` is an in-memory
/// database; `sqlite:///<path>` opens (and creates) a file.
pub fn connect_options(uri: &str) -> Result<SqliteConnectOptions, DatabaseError> {
    if is_in_memory(uri) {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        return Ok(options.foreign_keys(true));
    }

    if let Some(path) = database_file(uri) {
        return Ok(SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true));
    }

    if uri.starts_with("sqlite:") {
        return Err(DatabaseError::MalformedUri(uri.to_string()));
    }
    let scheme = uri.split(':').next().unwrap_or(uri);
    Err(DatabaseError::UnsupportedScheme(scheme.to_string()))
}
