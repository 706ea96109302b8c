pub mod api;
pub mod banner;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

#[cfg(test)]
mod testing;

use std::net::SocketAddr;

pub use api::handlers::ApiDoc;
pub use config::{Config, ConfigError};
pub use error::{AppError, AppResult};
pub use router::create_router;
pub use state::AppState;

pub async fn run_server(addr: SocketAddr, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    banner::print_banner();

    tracing::info!("Using yt-dlp at {}", config.ytdlp_path.display());
    let state = AppState::new(config);
    let app = create_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
