use anyhow::Context;

use orderitems_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    orderitems_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    tracing::info!(upstream = ?config.upstream, "configuration loaded");

    let services = app::services::build_services(&config.upstream)
        .context("failed to build upstream client")?;
    let router = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
