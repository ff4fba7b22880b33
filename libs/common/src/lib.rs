//! Calculator basic library
//!
//! Provides basic functions shared by the service and the CLI, including:
//! - logging functions
//! - service bootstrap (banner, `.env`, logging setup)
//! - shared API response types
//! - graceful shutdown

// Common modules
pub mod api_types;
pub mod bootstrap_args;
pub mod logging;
pub mod serde_helpers;
pub mod service_bootstrap;
pub mod shutdown;

// Re-export commonly used API types
pub use api_types::{ErrorResponse, SuccessResponse};

// Re-export AppError when axum feature is enabled
#[cfg(feature = "axum")]
pub use api_types::AppError;

pub use bootstrap_args::ServiceArgs;
pub use service_bootstrap::ServiceInfo;
