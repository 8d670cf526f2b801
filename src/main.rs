//! sku-lookup: serves the SKU price lookup API.

use std::sync::Arc;

use anyhow::Context;
use sku_lookup::{logging, server, LookupConfig, SkuLookupService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = LookupConfig::from_env().context("invalid configuration")?;
    config.warn_if_incomplete();

    let service = SkuLookupService::new(&config).context("failed to build upstream client")?;
    if let Some(endpoint) = service.endpoint_url() {
        tracing::info!(%endpoint, timeout = ?config.timeout(), "upstream configured");
    }

    let app = server::router(&config, Arc::new(service));
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    server::serve(listener, app, server::shutdown_signal()).await?;
    Ok(())
}
