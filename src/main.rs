mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,rust_spanner_todo=debug")),
        )
        .init();

    tracing::info!("rust-spanner-todo starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = store::connect(&config.store).await?;
    let app = app::router(AppState::new(store));

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
