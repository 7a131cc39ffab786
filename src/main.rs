use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pulse_check::adapters::ai::completion_mode_from_config;
use pulse_check::adapters::forms::GoogleFormsSubmitter;
use pulse_check::adapters::http::{build_router, AppState};
use pulse_check::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let mode = completion_mode_from_config(&config.ai)?;
    let mode_name = mode.name();
    let forms = GoogleFormsSubmitter::from_config(&config.forms)?;
    let state = AppState::new(mode, Arc::new(forms));
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, mode = mode_name, "Pulse check listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    if config.is_production() {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
