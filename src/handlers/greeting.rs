use crate::routes;

pub const ENDPOINT1_GREETING: &str = "Hello from endpoint 1";
pub const ENDPOINT2_GREETING: &str = "Hello from endpoint 2";
pub const ENDPOINT3_GREETING: &str = "Hello from endpoint 3";

/// GET /endpoint1 handler - Fixed plain-text greeting
#[utoipa::path(
    get,
    path = routes::ENDPOINT1,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "greeting"
)]
pub async fn endpoint1_handler() -> &'static str {
    ENDPOINT1_GREETING
}

/// GET /endpoint2 handler - Fixed plain-text greeting
#[utoipa::path(
    get,
    path = routes::ENDPOINT2,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "greeting"
)]
pub async fn endpoint2_handler() -> &'static str {
    ENDPOINT2_GREETING
}

/// GET /endpoint3 handler - Fixed plain-text greeting
#[utoipa::path(
    get,
    path = routes::ENDPOINT3,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "greeting"
)]
pub async fn endpoint3_handler() -> &'static str {
    ENDPOINT3_GREETING
}
