//! BullyGuard web front-end
//!
//! A minimal axum application over immutable, startup-loaded artifacts.

pub mod cli;
pub mod server;
pub mod state;
