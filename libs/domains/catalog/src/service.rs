use observability::CatalogMetrics;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{
    ActiveFilters, Category, ListingParams, Product, ProductFilter, ProductListing, Tag,
};
use crate::repository::CatalogRepository;

/// Outcome of interpreting one raw filter input
///
/// Malformed or unresolvable input is modeled as a skipped filter, never as
/// an error; the browse operation has no failure mode for bad query input.
enum Filter<T> {
    Applied(T),
    Skipped,
}

/// Service layer for the catalog browsing view
#[derive(Clone)]
pub struct ListingService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> ListingService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Browse the catalog with optional search, category, and tag filters.
    ///
    /// Pure read. Filters combine conjunctively; each one degrades silently
    /// to "not applied" when its input is malformed or unresolvable. The
    /// result is deduplicated by product id and ordered newest first.
    #[tracing::instrument(skip(self))]
    pub async fn browse(&self, params: ListingParams) -> CatalogResult<ProductListing> {
        let started = Instant::now();

        let search = parse_search(params.search.as_deref());

        let category = match params.category.as_deref() {
            Some(raw) => self.resolve_category(raw).await?,
            None => Filter::Skipped,
        };
        let (category_id, category_name) = match category {
            Filter::Applied(category) => (Some(category.id), Some(category.name)),
            Filter::Skipped => (None, None),
        };

        let tag_ids = parse_tag_ids(&params.tags);
        let tag_names = self.resolve_tag_names(&tag_ids).await?;

        let filter = ProductFilter {
            search: search.clone(),
            category_id,
            tag_ids,
        };
        let products = dedup_by_id(self.repository.find_products(filter).await?);

        let categories = self.repository.list_categories().await?;
        let tags = self.repository.list_tags().await?;

        let active_filters = ActiveFilters {
            search: search.clone(),
            category: category_name,
            tags: tag_names,
        };

        let product_count = products.len();
        CatalogMetrics::record_listing(
            product_count,
            active_filters.count(),
            started.elapsed().as_millis() as u64,
        );

        Ok(ProductListing {
            products,
            categories,
            tags,
            search_query: search,
            selected_category: params.category,
            selected_tags: params.tags,
            active_filters,
            product_count,
        })
    }

    /// All categories, for the standalone selector endpoint
    pub async fn categories(&self) -> CatalogResult<Vec<Category>> {
        self.repository.list_categories().await
    }

    /// All tags, for the standalone selector endpoint
    pub async fn tags(&self) -> CatalogResult<Vec<Tag>> {
        self.repository.list_tags().await
    }

    /// Resolve a raw category parameter to an existing category.
    ///
    /// Malformed ids and ids of no known category both skip the filter.
    async fn resolve_category(&self, raw: &str) -> CatalogResult<Filter<Category>> {
        let Ok(id) = raw.parse::<Uuid>() else {
            tracing::debug!(category = raw, "Skipping malformed category filter");
            CatalogMetrics::record_filter_skipped("category");
            return Ok(Filter::Skipped);
        };

        match self.repository.find_category(id).await? {
            Some(category) => Ok(Filter::Applied(category)),
            None => {
                tracing::debug!(category = %id, "Skipping unknown category filter");
                CatalogMetrics::record_filter_skipped("category");
                Ok(Filter::Skipped)
            }
        }
    }

    /// Resolve valid tag ids to names for the active-filters record.
    ///
    /// Ids that do not resolve are dropped; if nothing resolves the record
    /// stays absent. The filter itself still applies to every valid id.
    async fn resolve_tag_names(&self, tag_ids: &[Uuid]) -> CatalogResult<Option<Vec<String>>> {
        if tag_ids.is_empty() {
            return Ok(None);
        }

        let found = self.repository.find_tags(tag_ids).await?;
        let names: Vec<String> = tag_ids
            .iter()
            .filter_map(|id| found.iter().find(|t| t.id == *id))
            .map(|t| t.name.clone())
            .collect();

        Ok((!names.is_empty()).then_some(names))
    }
}

/// Trim the search input; empty-after-trim counts as absent
fn parse_search(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Keep the parseable tag ids, deduplicated, in first-seen order
fn parse_tag_ids(raw: &[String]) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    raw.iter()
        .filter_map(|value| match value.parse::<Uuid>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::debug!(tag = value.as_str(), "Skipping malformed tag filter");
                CatalogMetrics::record_filter_skipped("tags");
                None
            }
        })
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Contractual dedup by product id, preserving order.
///
/// The SQL path already returns distinct rows; this guards the contract
/// against future join-producing query strategies.
fn dedup_by_id(products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::new();
    products
        .into_iter()
        .filter(|p| seen.insert(p.id))
        .collect()
}
