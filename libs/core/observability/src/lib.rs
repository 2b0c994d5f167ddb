//! Observability utilities for the product catalog service.
//!
//! This crate provides:
//! - Prometheus metrics recording and export
//! - Custom metrics for catalog browsing operations
//! - Axum middleware for automatic request metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, CatalogMetrics};
//!
//! // Initialize metrics recorder
//! init_metrics();
//!
//! // Record a product listing operation
//! CatalogMetrics::record_listing(12, 3, 8);
//!
//! // Add metrics endpoint to router
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler));
//! ```

pub mod catalog;
pub mod middleware;

pub use catalog::CatalogMetrics;
pub use middleware::metrics_middleware;

// Re-export metrics macros for convenience
pub use metrics::{counter, gauge, histogram};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize the Prometheus metrics recorder.
///
/// Should be called once at application startup. Returns the
/// PrometheusHandle for rendering metrics.
pub fn init_metrics() -> &'static PrometheusHandle {
    METRICS_HANDLE.get_or_init(|| {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("Failed to install Prometheus recorder");

        info!("Prometheus metrics recorder initialized");

        register_metric_descriptions();

        handle
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

/// Register metric descriptions for documentation
fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_histogram};

    // HTTP metrics
    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    // Catalog metrics
    describe_counter!(
        "catalog_listings_total",
        "Total product listing requests by active filter combination"
    );
    describe_histogram!(
        "catalog_listing_result_size",
        "Number of products returned per listing request"
    );
    describe_histogram!(
        "catalog_listing_duration_seconds",
        "End-to-end duration of a listing request in seconds"
    );
    describe_counter!(
        "catalog_filters_skipped_total",
        "Filter inputs silently skipped because they were malformed or unresolvable"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_metrics_handler_before_init() {
        // Rendering before initialization must not panic
        let body = metrics_handler().await;
        assert!(body.starts_with('#') || body.contains("catalog"));
    }
}
