//! HTTP server exposing the lookup to the browser frontend.
//!
//! # Routes
//!
//! - `GET /api/variant_by_sku?sku=<value>` → [`VariantResult`](crate::lookup::VariantResult) JSON
//! - `GET /` → `<web root>/templates/index.html` (when a web root is configured)
//! - `GET /static/*` → files under `<web root>/static` (when a web root is configured)
//!
//! Errors are rendered as `{"detail": "<message>"}`; see [`ApiError`].

mod cors;
mod error;
mod handlers;

pub use cors::build_cors_layer;
pub use error::ApiError;
pub use handlers::{variant_by_sku, VariantBySkuParams};

use std::future::Future;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::LookupConfig;
use crate::lookup::SkuLookupService;

/// Path of the lookup route.
pub const VARIANT_BY_SKU_PATH: &str = "/api/variant_by_sku";

/// Builds the application router.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use sku_lookup::{server, LookupConfig, SkuLookupService};
///
/// let config = LookupConfig::builder().build().unwrap();
/// let service = Arc::new(SkuLookupService::new(&config).unwrap());
/// let app = server::router(&config, service);
/// ```
pub fn router(config: &LookupConfig, service: Arc<SkuLookupService>) -> Router {
    let mut app = Router::new()
        .route(VARIANT_BY_SKU_PATH, get(handlers::variant_by_sku))
        .with_state(service);

    if let Some(root) = config.web_root() {
        app = app
            .route_service("/", ServeFile::new(root.join("templates").join("index.html")))
            .nest_service("/static", ServeDir::new(root.join("static")));
    }

    if let Some(cors) = build_cors_layer(config.allowed_origins()) {
        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http())
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns any I/O error from the accept loop.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
