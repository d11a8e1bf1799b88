use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "greeting-server API",
        version = "0.1.0",
        description = "Fixed plain-text greetings and a liveness check"
    ),
    paths(
        handlers::greeting::endpoint1_handler,
        handlers::greeting::endpoint2_handler,
        handlers::greeting::endpoint3_handler,
        handlers::health::health_handler
    ),
    tags(
        (name = "greeting", description = "Static greeting endpoints"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;

    #[test]
    fn test_documents_exactly_the_route_table() {
        let doc = ApiDoc::openapi();

        let mut paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        paths.sort_unstable();

        let mut expected = routes::ALL.to_vec();
        expected.sort_unstable();

        assert_eq!(paths, expected);
    }

    #[test]
    fn test_routes_are_get_only() {
        let doc = ApiDoc::openapi();

        for item in doc.paths.paths.values() {
            assert!(item.get.is_some());
            assert!(item.post.is_none());
            assert!(item.put.is_none());
            assert!(item.delete.is_none());
        }
    }
}
