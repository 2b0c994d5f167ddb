use axum::{Json, Router, extract::State, routing::get};
use axum_extra::extract::Query;
use axum_helpers::errors::responses::InternalServerErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{ActiveFilters, Category, ListingParams, Product, ProductListing, Tag};
use crate::repository::CatalogRepository;
use crate::service::ListingService;

const TAG: &str = "catalog";

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(browse_products, list_categories, list_tags),
    components(
        schemas(Product, Category, Tag, ProductListing, ActiveFilters, ListingParams),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Product catalog browsing endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: CatalogRepository + 'static>(service: ListingService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(browse_products))
        .route("/categories", get(list_categories))
        .route("/tags", get(list_tags))
        .with_state(shared_service)
}

/// Browse products with optional search, category, and tag filters
///
/// Malformed `category` or `tags` values never fail the request; the
/// affected filter is skipped and omitted from `active_filters`.
#[utoipa::path(
    get,
    path = "/products",
    tag = TAG,
    params(ListingParams),
    responses(
        (status = 200, description = "Product listing with filter metadata", body = ProductListing),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn browse_products<R: CatalogRepository>(
    State(service): State<Arc<ListingService<R>>>,
    Query(params): Query<ListingParams>,
) -> CatalogResult<Json<ProductListing>> {
    let listing = service.browse(params).await?;
    Ok(Json(listing))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = TAG,
    responses(
        (status = 200, description = "All categories, ordered by name", body = Vec<Category>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: CatalogRepository>(
    State(service): State<Arc<ListingService<R>>>,
) -> CatalogResult<Json<Vec<Category>>> {
    let categories = service.categories().await?;
    Ok(Json(categories))
}

/// List all tags
#[utoipa::path(
    get,
    path = "/tags",
    tag = TAG,
    responses(
        (status = 200, description = "All tags, ordered by name", body = Vec<Tag>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tags<R: CatalogRepository>(
    State(service): State<Arc<ListingService<R>>>,
) -> CatalogResult<Json<Vec<Tag>>> {
    let tags = service.tags().await?;
    Ok(Json(tags))
}
