//! BullyGuard Core
//!
//! Core types and error handling shared across BullyGuard components:
//! - Classification labels and outcomes
//! - Artifact/health status types
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ArtifactStatus, Classification, HealthReport, Label};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ArtifactStatus, Classification, HealthReport, Label};
}
