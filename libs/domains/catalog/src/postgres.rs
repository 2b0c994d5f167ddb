use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, Query as SeaQuery};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, ExprTrait, LoaderTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::entity::{category, product, product_tag, tag};
use crate::error::CatalogResult;
use crate::models::{Category, Product, ProductFilter, Tag};
use crate::repository::CatalogRepository;

pub struct PgCatalogRepository {
    db: DatabaseConnection,
}

impl PgCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Escape LIKE wildcards so search text matches literally
fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Case-insensitive substring predicate over name OR description
fn search_condition(search: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(&search.to_lowercase()));

    Condition::any()
        .add(
            Expr::expr(Func::lower(Expr::col((
                product::Entity,
                product::Column::Name,
            ))))
            .like(pattern.clone()),
        )
        .add(
            Expr::expr(Func::lower(Expr::col((
                product::Entity,
                product::Column::Description,
            ))))
            .like(pattern),
        )
}

/// `id IN (SELECT product_id FROM product_tags WHERE tag_id = $1)`
///
/// One such predicate per requested tag gives ALL-match semantics.
fn has_tag_condition(tag_id: Uuid) -> sea_orm::sea_query::SimpleExpr {
    product::Column::Id.in_subquery(
        SeaQuery::select()
            .column(product_tag::Column::ProductId)
            .from(product_tag::Entity)
            .and_where(product_tag::Column::TagId.eq(tag_id))
            .to_owned(),
    )
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn find_products(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        let mut query = product::Entity::find();

        if let Some(ref search) = filter.search {
            query = query.filter(search_condition(search));
        }

        if let Some(category_id) = filter.category_id {
            query = query.filter(product::Column::CategoryId.eq(category_id));
        }

        for tag_id in &filter.tag_ids {
            query = query.filter(has_tag_condition(*tag_id));
        }

        let models = query
            .distinct()
            .order_by_desc(product::Column::CreatedAt)
            .all(&self.db)
            .await?;

        // Separate loader pass keeps the newest-first ordering of the base
        // query, which find_with_related would clobber.
        let tag_models = models
            .load_many_to_many(tag::Entity, product_tag::Entity, &self.db)
            .await?;

        let products = models
            .into_iter()
            .zip(tag_models)
            .map(|(model, tags)| {
                let mut tags: Vec<Tag> = tags.into_iter().map(Into::into).collect();
                tags.sort_by(|a, b| a.name.cmp(&b.name));

                Product {
                    id: model.id,
                    name: model.name,
                    description: model.description,
                    price: model.price,
                    category_id: model.category_id,
                    tags,
                    created_at: model.created_at.into(),
                    updated_at: model.updated_at.into(),
                }
            })
            .collect();

        Ok(products)
    }

    async fn find_category(&self, id: Uuid) -> CatalogResult<Option<Category>> {
        let model = category::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_tags(&self, ids: &[Uuid]) -> CatalogResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = tag::Entity::find()
            .filter(tag::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_tags(&self) -> CatalogResult<Vec<Tag>> {
        let models = tag::Entity::find()
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%_pure"), "100\\%\\_pure");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
