//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio page is server-rendered by Leptos at `/` and hydrated by the
//! WASM bundle served from `/pkg`. Images and other static assets fall back
//! to the assets directory.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

/// Health check plus static assets, without the Leptos app.
pub fn static_routes(config: &SiteConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(&config.assets_dir))
}

/// Full site: Leptos SSR page, `/pkg` bundle, static assets.
pub fn app(config: &SiteConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS emitted by cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    static_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
