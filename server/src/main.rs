use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_server::{router, run, MemoryStore, ServerConfig, SqliteStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let listener = TcpListener::bind(config.bind_addr).await?;

    let app = match &config.database_url {
        Some(url) => router(SqliteStore::connect(url).await?),
        None => {
            tracing::warn!("no database configured, todos will not survive a restart");
            router(MemoryStore::default())
        }
    };

    tracing::info!(addr = %config.bind_addr, "listening");
    run(listener, app).await?;
    Ok(())
}
