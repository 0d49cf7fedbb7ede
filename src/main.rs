//! Summit server binary

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use summit::api::{create_router, AppState};
use summit::config::{AppConfig, DatabaseBackendKind, LogFormat};
use summit::store::create_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let store_config = config.store_config().context("invalid database configuration")?;

    let backend = match config.database.backend {
        DatabaseBackendKind::Postgres => "postgres",
        DatabaseBackendKind::Sqlite => "sqlite",
    };
    tracing::info!(%backend, "Starting Summit");

    let store = create_store(store_config)
        .await
        .context("failed to connect to database")?;

    store.migrate().await.context("failed to run migration")?;

    if config.database.reset_and_seed {
        tracing::warn!("reset_and_seed enabled; dropping existing peaks");
        store
            .reset_and_seed()
            .await
            .context("failed to seed reference peaks")?;
    }

    let router = create_router(AppState::new(store));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("summit=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
