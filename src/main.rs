mod config;
mod error;
mod handlers;
mod inference;
mod server;
mod store;
mod summary;
mod types;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("journal_insights=info".parse()?)
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::from_env()?;
    let store = Arc::new(store::Store::init(&config.db_path)?);
    let inference = Arc::new(inference::OllamaClient::new(&config.inference));
    info!(
        endpoint = %config.inference.base_url,
        model = %config.inference.model,
        "inference client configured"
    );

    let app = server::router(server::AppState::new(store, inference));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "journal-insights listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))?;
    Ok(())
}
