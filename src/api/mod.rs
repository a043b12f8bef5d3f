//! HTTP API
//!
//! REST endpoints for users and exercise logs, plus the landing page and
//! static assets.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
