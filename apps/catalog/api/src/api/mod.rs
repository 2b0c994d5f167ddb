use axum::Router;
use axum::routing::get;
use domain_catalog::{ListingService, PgCatalogRepository};

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
pub fn routes(state: &crate::state::AppState) -> Router {
    let repository = PgCatalogRepository::new(state.db.clone());
    let service = ListingService::new(repository);

    domain_catalog::handlers::router(service)
}

/// Creates a router with the /ready endpoint that performs an actual
/// database health check.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// Prometheus scrape endpoint
pub fn metrics_router() -> Router {
    Router::new().route("/metrics", get(observability::metrics_handler))
}
