use crate::routes;
use axum::http::StatusCode;

/// GET /health handler - Liveness check
///
/// Returns 200 OK with an empty body whenever the process is serving requests.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is alive")
    ),
    tag = "health"
)]
pub async fn health_handler() -> StatusCode {
    StatusCode::OK
}
