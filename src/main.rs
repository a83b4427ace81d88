use std::net::TcpListener;

use anyhow::Context;
use news_api::{init_db, make_router, run_app, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> news_api::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("news_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = init_db(&config).await?;
    let listener = TcpListener::bind(config.address)
        .with_context(|| format!("Could not bind {}", config.address))?;
    tracing::info!("Server started on {}", config.address);
    if let Err(error) = run_app(make_router(pool), listener).await {
        tracing::error!("Error: {}", error);
        return Err(error);
    }
    Ok(())
}
