//! # Gridiron API
//!
//! HTTP handlers, extractors, DTOs, and the route groups mounted by the server.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod state;

pub use error::ApiError;
pub use middleware::AuthUser;
pub use state::{AnalyticsState, ApiState, AuthState};
