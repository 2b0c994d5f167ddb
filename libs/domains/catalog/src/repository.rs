use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{Category, Product, ProductFilter, Tag};

/// Read-only repository for the catalog
///
/// The catalog is populated administratively (seed migrations); the service
/// only ever reads from it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Find products matching the parsed filter, newest first, no duplicates
    async fn find_products(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>>;

    /// Look up a single category by id
    async fn find_category(&self, id: Uuid) -> CatalogResult<Option<Category>>;

    /// Look up tags by id; unknown ids are simply absent from the result
    async fn find_tags(&self, ids: &[Uuid]) -> CatalogResult<Vec<Tag>>;

    /// All categories, ordered by name
    async fn list_categories(&self) -> CatalogResult<Vec<Category>>;

    /// All tags, ordered by name
    async fn list_tags(&self) -> CatalogResult<Vec<Tag>>;
}

#[derive(Debug, Default)]
struct Store {
    categories: Vec<Category>,
    tags: Vec<Tag>,
    products: Vec<Product>,
}

/// In-memory implementation of CatalogRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalogRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_category(&self, category: Category) {
        self.store.write().await.categories.push(category);
    }

    pub async fn insert_tag(&self, tag: Tag) {
        self.store.write().await.tags.push(tag);
    }

    pub async fn insert_product(&self, product: Product) {
        self.store.write().await.products.push(product);
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn find_products(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        let store = self.store.read().await;

        let mut result: Vec<Product> = store
            .products
            .iter()
            .filter(|p| {
                if let Some(ref search) = filter.search {
                    let needle = search.to_lowercase();
                    if !p.name.to_lowercase().contains(&needle)
                        && !p.description.to_lowercase().contains(&needle)
                    {
                        return false;
                    }
                }
                if let Some(category_id) = filter.category_id {
                    if p.category_id != category_id {
                        return false;
                    }
                }
                filter
                    .tag_ids
                    .iter()
                    .all(|tag_id| p.tags.iter().any(|t| t.id == *tag_id))
            })
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn find_category(&self, id: Uuid) -> CatalogResult<Option<Category>> {
        let store = self.store.read().await;
        Ok(store.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_tags(&self, ids: &[Uuid]) -> CatalogResult<Vec<Tag>> {
        let store = self.store.read().await;
        Ok(store
            .tags
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let store = self.store.read().await;
        let mut categories = store.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn list_tags(&self) -> CatalogResult<Vec<Tag>> {
        let store = self.store.read().await;
        let mut tags = store.tags.clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    fn product(name: &str, description: &str, category_id: Uuid, tags: Vec<Tag>, age_days: i64) -> Product {
        let created = Utc::now() - Duration::days(age_days);
        Product {
            id: Uuid::now_v7(),
            name: name.to_string(),
            description: description.to_string(),
            price: Decimal::new(1999, 2),
            category_id,
            tags,
            created_at: created,
            updated_at: created,
        }
    }

    #[tokio::test]
    async fn test_search_matches_name_or_description_case_insensitively() {
        let repo = InMemoryCatalogRepository::new();
        let category_id = Uuid::now_v7();
        repo.insert_product(product("Ceramic Mug", "hand glazed", category_id, vec![], 1))
            .await;
        repo.insert_product(product("Plate", "a MUG-adjacent item", category_id, vec![], 2))
            .await;
        repo.insert_product(product("Spoon", "stainless", category_id, vec![], 3))
            .await;

        let found = repo
            .find_products(ProductFilter {
                search: Some("mug".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_products_ordered_newest_first() {
        let repo = InMemoryCatalogRepository::new();
        let category_id = Uuid::now_v7();
        repo.insert_product(product("old", "", category_id, vec![], 10))
            .await;
        repo.insert_product(product("new", "", category_id, vec![], 1))
            .await;
        repo.insert_product(product("middle", "", category_id, vec![], 5))
            .await;

        let found = repo.find_products(ProductFilter::default()).await.unwrap();
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["new", "middle", "old"]);
    }

    #[tokio::test]
    async fn test_tag_filter_requires_all_tags() {
        let repo = InMemoryCatalogRepository::new();
        let category_id = Uuid::now_v7();
        let ceramic = Tag {
            id: Uuid::now_v7(),
            name: "ceramic".to_string(),
        };
        let blue = Tag {
            id: Uuid::now_v7(),
            name: "blue".to_string(),
        };

        repo.insert_product(product(
            "both",
            "",
            category_id,
            vec![ceramic.clone(), blue.clone()],
            1,
        ))
        .await;
        repo.insert_product(product("only ceramic", "", category_id, vec![ceramic.clone()], 2))
            .await;

        let found = repo
            .find_products(ProductFilter {
                tag_ids: vec![ceramic.id, blue.id],
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "both");
    }

    #[tokio::test]
    async fn test_list_categories_sorted_by_name() {
        let repo = InMemoryCatalogRepository::new();
        for name in ["Zulu", "Alpha", "Mike"] {
            repo.insert_category(Category {
                id: Uuid::now_v7(),
                name: name.to_string(),
                description: None,
            })
            .await;
        }

        let categories = repo.list_categories().await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mike", "Zulu"]);
    }
}
