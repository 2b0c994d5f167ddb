use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog browsing: free-text search with category and tag filters"
    ),
    servers(
        (url = "/api", description = "API base path")
    )
)]
struct BaseApiDoc;

/// Combined API documentation for the catalog service
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseApiDoc::openapi();
        doc.merge(domain_catalog::handlers::ApiDoc::openapi());
        doc
    }
}
