pub mod config;
pub mod handlers;
pub mod server;
pub mod templates;

use std::sync::Arc;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{country, health, home, AppState};

/// Routes of service A: home page, country proxy and health check.
pub fn service_a_router(state: Arc<AppState>) -> Router {
    let base_path = state.base_path.clone();
    let router = Router::new()
        .route("/", get(home::index))
        .route("/home", get(home::index))
        .route("/home/index", get(home::index))
        .route("/home/getcountry", get(home::get_country))
        .route("/health", get(health::health))
        .with_state(state);
    mount(router, &base_path).layer(TraceLayer::new_for_http())
}

/// Routes of service B: random country and health check.
pub fn service_b_router(base_path: &str) -> Router {
    let router = Router::new()
        .route("/country", get(country::country))
        .route("/health", get(health::health));
    mount(router, base_path).layer(TraceLayer::new_for_http())
}

fn mount(router: Router, base_path: &str) -> Router {
    if base_path.is_empty() || base_path == "/" {
        router
    } else {
        Router::new().nest(base_path, router)
    }
}
