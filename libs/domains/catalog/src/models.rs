use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Product category (filter selector, one per product)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier
    pub id: Uuid,
    /// Category name (unique)
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
}

/// Product tag (filter selector, any number per product)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Tag {
    /// Unique identifier
    pub id: Uuid,
    /// Tag name (unique)
    pub name: String,
}

/// Catalog product with its resolved tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price, two fractional digits
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    /// Owning category
    pub category_id: Uuid,
    /// Tags attached to this product
    pub tags: Vec<Tag>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Raw browsing parameters as supplied in the query string
///
/// Every field is optional and arrives unvalidated. Interpretation
/// (trimming, UUID parsing, resolution) happens in the service layer;
/// values that fail to parse degrade to "filter not applied".
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ListingParams {
    /// Free-text search over product name and description
    pub search: Option<String>,
    /// Category id to filter by
    pub category: Option<String>,
    /// Tag ids to filter by; repeatable, products must carry ALL of them
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Parsed, validated filter inputs handed to the repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Trimmed non-empty search text
    pub search: Option<String>,
    /// Resolved category id
    pub category_id: Option<Uuid>,
    /// Deduplicated valid tag ids; products must match all of them
    pub tag_ids: Vec<Uuid>,
}

/// Which filters actually restricted the listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActiveFilters {
    /// The applied search text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Name of the applied category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Names of the applied tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ActiveFilters {
    /// Number of filters that restricted the result
    pub fn count(&self) -> usize {
        self.search.is_some() as usize
            + self.category.is_some() as usize
            + self.tags.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Full response of the browsing operation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductListing {
    /// Matching products, deduplicated, newest first
    pub products: Vec<Product>,
    /// All categories, for filter selection
    pub categories: Vec<Category>,
    /// All tags, for filter selection
    pub tags: Vec<Tag>,
    /// Trimmed search text, if any was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    /// The category parameter exactly as supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,
    /// The tag parameters exactly as supplied
    pub selected_tags: Vec<String>,
    /// The filters that actually restricted the result
    pub active_filters: ActiveFilters,
    /// Number of products in the listing
    pub product_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_filters_count() {
        let none = ActiveFilters::default();
        assert_eq!(none.count(), 0);
        assert!(none.is_empty());

        let all = ActiveFilters {
            search: Some("mug".to_string()),
            category: Some("Kitchen".to_string()),
            tags: Some(vec!["ceramic".to_string()]),
        };
        assert_eq!(all.count(), 3);
    }

    #[test]
    fn test_active_filters_serializes_without_absent_fields() {
        let filters = ActiveFilters {
            search: Some("mug".to_string()),
            category: None,
            tags: None,
        };
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json, serde_json::json!({ "search": "mug" }));
    }

    #[test]
    fn test_listing_params_deserializes_missing_fields() {
        let params: ListingParams = serde_json::from_str("{}").unwrap();
        assert!(params.search.is_none());
        assert!(params.category.is_none());
        assert!(params.tags.is_empty());
    }
}
