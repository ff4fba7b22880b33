//! Calculator HTTP service
//!
//! Exposes `calc_core::Calculator` over JSON (`POST /calculate`) together with
//! a static calculator page, a health check and the operator list.

pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

pub use app_state::AppState;
pub use config::ServerConfig;
pub use error::{CalcSrvError, Result};
pub use routes::create_routes;
