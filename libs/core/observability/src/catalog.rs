//! Catalog-specific metrics for the product browsing path.

use metrics::{counter, histogram};

/// Catalog metrics recorder
pub struct CatalogMetrics;

impl CatalogMetrics {
    /// Record a product listing operation.
    ///
    /// `active_filters` is the number of filters that actually restricted
    /// the result (0-3: search, category, tags).
    pub fn record_listing(result_count: usize, active_filters: usize, duration_ms: u64) {
        counter!(
            "catalog_listings_total",
            "active_filters" => active_filters.to_string()
        )
        .increment(1);

        histogram!("catalog_listing_result_size").record(result_count as f64);
        histogram!("catalog_listing_duration_seconds").record(duration_ms as f64 / 1000.0);

        tracing::debug!(
            result_count = result_count,
            active_filters = active_filters,
            duration_ms = duration_ms,
            "Listed products"
        );
    }

    /// Record a filter input that was silently skipped (malformed or
    /// unresolvable identifier).
    pub fn record_filter_skipped(filter: &'static str) {
        counter!(
            "catalog_filters_skipped_total",
            "filter" => filter
        )
        .increment(1);
    }
}
