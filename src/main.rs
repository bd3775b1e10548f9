//! Server binary: reads configuration, seeds the store and serves the API plus static files.

use cadastro_api::{app, AppState, ServerConfig, Store};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cadastro_api=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let seed = config.seed().await?;
    let state = AppState::new(Store::new(seed));

    let listener = TcpListener::bind(SocketAddr::new(config.host, config.port)).await?;
    let port = listener.local_addr()?.port();
    tracing::info!("Servidor rodando em http://localhost:{}", port);
    axum::serve(listener, app(state, &config.static_dir)).await?;
    Ok(())
}
