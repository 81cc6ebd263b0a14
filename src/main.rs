use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tandem_api::{
    config::Config,
    routes::{create_router, AppState},
    services::InMemoryProfileStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let state = AppState {
        config,
        profiles: Arc::new(InMemoryProfileStore::new()),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Taste comparison service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
