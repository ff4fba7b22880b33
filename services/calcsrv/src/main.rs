//! CalcSrv - calculator HTTP service

use anyhow::Context;
use calcsrv::bootstrap;
use clap::Parser;
use common::ServiceArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServiceArgs::parse();

    // .env must be read before the environment-backed config
    common::service_bootstrap::load_development_env();

    let config = bootstrap::load_configuration(&args).context("Failed to load configuration")?;

    if args.validate {
        println!("Configuration valid: {}", config);
        return Ok(());
    }

    let service_info = bootstrap::create_service_info();
    bootstrap::init_environment(&service_info, &args, &config)?;

    let state = bootstrap::create_app_state(config).context("Failed to build calculator")?;
    bootstrap::start_server(state).await?;

    Ok(())
}
