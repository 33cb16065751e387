//! # Gridiron Security
//!
//! Access tokens (JWT, HS256) and password hashing (Argon2).

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtError, JwtService};
pub use password::{PasswordError, PasswordService};
