//! Service Bootstrap and Initialization
//!
//! Handles configuration loading, logging, state construction and the
//! HTTP listener lifecycle.

use calc_core::Calculator;
use common::bootstrap_args::ServiceArgs;
use common::service_bootstrap::{self, ServiceInfo};
use std::sync::Arc;
use tracing::{debug, info, Level};

use crate::app_state::AppState;
use crate::config::{ServerConfig, DEFAULT_PORT};
use crate::error::{CalcSrvError, Result};
use crate::routes::create_routes;

/// Initialize service info for unified bootstrap
pub fn create_service_info() -> ServiceInfo {
    ServiceInfo::new(
        "calcsrv",
        "Calculator Service - Basic Arithmetic API",
        DEFAULT_PORT,
    )
    .with_version(env!("CARGO_PKG_VERSION"))
}

/// Resolve configuration: environment first, then command-line overrides
pub fn load_configuration(args: &ServiceArgs) -> Result<ServerConfig> {
    let config = ServerConfig::load()?.with_args(args);
    config.validate().map_err(CalcSrvError::Config)?;
    Ok(config)
}

/// Console level for the run: debug mode never logs below DEBUG
pub fn console_level(args: &ServiceArgs, config: &ServerConfig) -> Level {
    let requested = args.parse_log_level();
    if config.debug {
        requested.max(Level::DEBUG)
    } else {
        requested
    }
}

/// Initialize logging and print the startup banner
pub fn init_environment(
    service_info: &ServiceInfo,
    args: &ServiceArgs,
    config: &ServerConfig,
) -> Result<()> {
    service_bootstrap::init_logging(service_info, console_level(args, config), !args.no_color)
        .map_err(|e| CalcSrvError::Config(format!("Failed to initialize logging: {}", e)))?;

    service_bootstrap::print_startup_banner(service_info);
    info!("CalcSrv starting ({})", config);

    Ok(())
}

/// Build the shared state; the calculator is constructed exactly once here
pub fn create_app_state(config: ServerConfig) -> Result<Arc<AppState>> {
    let calculator = Calculator::new()?;
    debug!(
        "Calculator ready: {}",
        calculator.available_operations().join(" ")
    );
    Ok(Arc::new(AppState::new(calculator, config)))
}

/// Bind and serve until Ctrl+C or SIGTERM
pub async fn start_server(state: Arc<AppState>) -> Result<()> {
    let addr = state.config.bind_address();
    let app = create_routes(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CalcSrvError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("API server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);
    #[cfg(feature = "swagger-ui")]
    info!("Swagger UI: http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(common::shutdown::shutdown_signal())
        .await
        .map_err(|e| CalcSrvError::internal(format!("Server error: {}", e)))?;

    info!("CalcSrv stopped");
    Ok(())
}
