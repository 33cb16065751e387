//! Application-wide constants

pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 80;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Regular season weeks
pub const MIN_WEEK: i32 = 1;
pub const MAX_WEEK: i32 = 18;

pub const DEFAULT_LEADERS_LIMIT: u32 = 10;
pub const MAX_LEADERS_LIMIT: u32 = 50;
