use crate::handlers::{endpoint1_handler, endpoint2_handler, endpoint3_handler, health_handler};
use crate::routes;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Build the route table
///
/// The table is fixed once built. Known paths answer GET (and HEAD);
/// other methods on them get 405 with an `Allow` header, and every
/// other path gets axum's default empty 404.
pub fn router() -> Router {
    Router::new()
        .route(routes::ENDPOINT1, get(endpoint1_handler))
        .route(routes::ENDPOINT2, get(endpoint2_handler))
        .route(routes::ENDPOINT3, get(endpoint3_handler))
        .route(routes::HEALTH, get(health_handler))
        .layer(TraceLayer::new_for_http())
}
