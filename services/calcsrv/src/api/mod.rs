//! HTTP handlers

pub mod calculate_handlers;
pub mod health_handlers;
pub mod page_handlers;
