use std::process::ExitCode;

use earnings_analyzer::api::{AppState, create_router};
use earnings_analyzer::config::ConfigLoader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ConfigLoader::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let addr = config.config().server.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Earnings Analyzer v{} listening on http://{addr}",
        env!("CARGO_PKG_VERSION")
    );

    let app = create_router(AppState::new(config));
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "Server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
