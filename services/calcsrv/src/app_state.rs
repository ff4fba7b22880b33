//! Application State Management
//!
//! Shared by all handlers behind an `Arc`; the calculator is immutable, so no locking.

use calc_core::Calculator;

use crate::config::ServerConfig;

pub struct AppState {
    /// Built once at startup
    pub calculator: Calculator,

    pub config: ServerConfig,
}

impl AppState {
    pub fn new(calculator: Calculator, config: ServerConfig) -> Self {
        Self { calculator, config }
    }
}
