//! SQLite connection string normalization
//!
//! `DATABASE_URI` uses SQLAlchemy-style SQLite URIs: three slashes mean a path
//! relative to wherever the process happens to start, four slashes mean an
//! absolute path. Relative paths are anchored on the instance folder so the
//! same config value works from any working directory.

use std::path::Path;

/// Prefix of a relative SQLite URI (`sqlite:///relative/path.db`).
pub const SQLITE_RELATIVE_PREFIX: &str = "sqlite:///";
/// Prefix of an absolute SQLite URI (`sqlite:////absolute/path.db`).
pub const SQLITE_ABSOLUTE_PREFIX: &str = "sqlite:////";
/// Leading directory segment dropped before joining onto the instance folder.
pub const INSTANCE_SEGMENT: &str = "instance/";

/// Rewrite a relative SQLite URI into an absolute one rooted at
/// `instance_path`. Absolute SQLite URIs and other schemes pass through.
///
/// `instance_path` should be UTF-8 (`AppConfig::resolve_instance_path`
/// guarantees it); other bytes are replaced in the output.
pub fn normalize_database_uri(uri: &str, instance_path: &Path) -> String {
    if uri.starts_with(SQLITE_ABSOLUTE_PREFIX) {
        return uri.to_string();
    }
    let Some(relative) = uri.strip_prefix(SQLITE_RELATIVE_PREFIX) else {
        return uri.to_string();
    };

    let relative = relative.strip_prefix(INSTANCE_SEGMENT).unwrap_or(relative);
    let absolute = instance_path.join(relative);
    format!("{}{}", SQLITE_RELATIVE_PREFIX, absolute.display())
}

/// Normalize an optional URI; unset or empty values stay unset.
pub fn resolve_database_uri(uri: Option<&str>, instance_path: &Path) -> Option<String> {
    uri.filter(|u| !u.is_empty())
        .map(|u| normalize_database_uri(u, instance_path))
}
