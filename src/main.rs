use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use melo_api::config::{AppConfig, StoreBackend};
use melo_api::database::DatabaseManager;
use melo_api::{app, AppState};

/// Melo API server
#[derive(Parser, Debug)]
#[command(name = "melo-api", version, about)]
struct Args {
    /// Address to bind (overrides MELO_API_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides MELO_API_PORT / PORT)
    #[arg(long, short)]
    port: Option<u16>,

    /// Store backend: mongo or memory (overrides STORE_BACKEND)
    #[arg(long)]
    store: Option<StoreBackend>,

    /// MongoDB connection string (overrides MONGODB_URI)
    #[arg(long)]
    database_url: Option<String>,

    /// MongoDB database name (overrides MONGODB_DATABASE)
    #[arg(long)]
    database_name: Option<String>,
}

impl Args {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(store) = self.store {
            config.database.backend = store;
        }
        if let Some(uri) = self.database_url {
            config.database.uri = Some(uri);
        }
        if let Some(name) = self.database_name {
            config.database.name = name;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up MONGODB_URI, STORE_BACKEND, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("melo_api=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.apply(melo_api::config::config().clone());
    tracing::info!("Starting Melo API in {:?} mode", config.environment);

    let database = DatabaseManager::connect(&config.database)
        .await
        .context("failed to initialise database store")?;

    let router = app(AppState::new(database.store()), &config);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Melo API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    database.shutdown().await;
    tracing::info!("Melo API shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
