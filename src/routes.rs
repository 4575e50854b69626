//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront UI is server-rendered by Leptos and hydrated in the
//! browser; product data never passes through this host. Besides the SSR
//! pages the router serves the WASM/CSS bundle under `/pkg`, static images
//! under `/assets`, and a health probe.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use storefront::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Full host router: Leptos SSR routes merged with static and health routes.
///
/// Paths the app does not define render the shell with a 404 status, so the
/// client-side "Page not found." fallback shows.
pub fn app(config: &ServerConfig) -> Router {
    let leptos_options = config.leptos.clone();
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(file_and_error_handler(shell))
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    static_routes(&site_root, &config.assets_dir)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Bundle, asset, and health routes that do not depend on the Leptos runtime.
fn static_routes(site_root: &Path, assets_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/assets", ServeDir::new(assets_dir))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
