//! Route groups
//!
//! Each group exposes `router(state) -> Router` and is mounted by the server
//! under its prefix (`/auth`, `/api`, `/analytics`).

pub mod analytics;
pub mod api;
pub mod auth;
pub mod health;
