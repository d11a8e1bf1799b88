#[cfg(test)]
mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod routes;
mod server;

use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    tracing::info!("greeting-server starting");

    let config = Config::from_env()?;
    config.log_startup();

    server::serve(&config).await?;

    Ok(())
}
