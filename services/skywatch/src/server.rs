//! Host router: health probe, compiled bundle and the history-mode fallback

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use skywatch_app::RouteTable;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::document;

/// Host application state
#[derive(Clone)]
pub struct HostState {
    pub document: Arc<str>,
    pub routes: Arc<RouteTable>,
}

impl HostState {
    pub fn new(config: &Config, routes: RouteTable) -> Self {
        Self {
            document: Arc::from(document::render(config)),
            routes: Arc::new(routes),
        }
    }
}

/// Build the host axum router
pub fn build_router(state: HostState, site_root: &Path) -> Router {
    let pkg_dir = site_root.join("pkg");
    tracing::debug!("Serving bundle from {:?}", pkg_dir);

    Router::new()
        .route("/health", get(health_handler))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(shell_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn shell_handler(State(host): State<HostState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let status = match host.routes.resolve(uri.path()) {
        Some(matched) => {
            tracing::debug!("{} -> {}", uri.path(), matched.name);
            StatusCode::OK
        }
        None => {
            tracing::debug!("{} matches no route", uri.path());
            StatusCode::NOT_FOUND
        }
    };

    (status, Html(host.document.to_string())).into_response()
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
