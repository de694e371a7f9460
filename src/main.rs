mod config;
mod routes;
mod state;

use config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("{0}")]
    Leptos(String),

    #[error("listener failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env file is the normal case outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let port = config.port;
    tracing::info!(backend = %config.backend_url, timeout_secs = config.upstream_timeout_secs, "proxying /api/v1");

    let state = state::AppState::new(config)?;
    let app = routes::app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "enquiry listening");
    axum::serve(listener, app).await?;
    Ok(())
}
