//! Behavioral properties of the browsing operation, checked against the
//! in-memory repository:
//!
//! - results never contain duplicate products
//! - filters combine conjunctively
//! - adding a tag filter never grows the result
//! - malformed input behaves exactly like absent input
//! - repeated calls against unchanged storage are identical

use chrono::{Duration, Utc};
use domain_catalog::*;
use rust_decimal::Decimal;
use uuid::Uuid;

struct Catalog {
    service: ListingService<InMemoryCatalogRepository>,
    shoes: Category,
    hats: Category,
    sale: Tag,
    new: Tag,
    red_shoes: Product,
    blue_hat: Product,
    green_shoes: Product,
}

fn make_product(name: &str, category_id: Uuid, tags: Vec<Tag>, age_days: i64) -> Product {
    let created = Utc::now() - Duration::days(age_days);
    Product {
        id: Uuid::now_v7(),
        name: name.to_string(),
        description: format!("{} description", name),
        price: Decimal::new(2500, 2),
        category_id,
        tags,
        created_at: created,
        updated_at: created,
    }
}

/// The storage described by the browsing scenarios: P1 Red Shoes
/// (Shoes, [Sale, New]), P2 Blue Hat (Hats, []), P3 Green Shoes
/// (Shoes, [Sale]).
async fn scenario_catalog() -> Catalog {
    let repo = InMemoryCatalogRepository::new();

    let shoes = Category {
        id: Uuid::now_v7(),
        name: "Shoes".to_string(),
        description: None,
    };
    let hats = Category {
        id: Uuid::now_v7(),
        name: "Hats".to_string(),
        description: None,
    };
    let sale = Tag {
        id: Uuid::now_v7(),
        name: "Sale".to_string(),
    };
    let new = Tag {
        id: Uuid::now_v7(),
        name: "New".to_string(),
    };

    repo.insert_category(shoes.clone()).await;
    repo.insert_category(hats.clone()).await;
    repo.insert_tag(sale.clone()).await;
    repo.insert_tag(new.clone()).await;

    let red_shoes = make_product("Red Shoes", shoes.id, vec![sale.clone(), new.clone()], 3);
    let blue_hat = make_product("Blue Hat", hats.id, vec![], 2);
    let green_shoes = make_product("Green Shoes", shoes.id, vec![sale.clone()], 1);

    repo.insert_product(red_shoes.clone()).await;
    repo.insert_product(blue_hat.clone()).await;
    repo.insert_product(green_shoes.clone()).await;

    Catalog {
        service: ListingService::new(repo),
        shoes,
        hats,
        sale,
        new,
        red_shoes,
        blue_hat,
        green_shoes,
    }
}

fn ids(listing: &ProductListing) -> Vec<Uuid> {
    listing.products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn scenario_search_matches_name_substring() {
    let catalog = scenario_catalog().await;
    let listing = catalog
        .service
        .browse(ListingParams {
            search: Some("red shoes".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(ids(&listing), vec![catalog.red_shoes.id]);
}

#[tokio::test]
async fn scenario_category_filter_reports_resolved_name() {
    let catalog = scenario_catalog().await;
    let listing = catalog
        .service
        .browse(ListingParams {
            category: Some(catalog.hats.id.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(ids(&listing), vec![catalog.blue_hat.id]);
    assert_eq!(listing.active_filters.category.as_deref(), Some("Hats"));
}

#[tokio::test]
async fn scenario_multiple_tags_require_all_of_them() {
    let catalog = scenario_catalog().await;
    let listing = catalog
        .service
        .browse(ListingParams {
            tags: vec![catalog.sale.id.to_string(), catalog.new.id.to_string()],
            ..Default::default()
        })
        .await
        .unwrap();

    // Green Shoes carries Sale but not New, so only Red Shoes survives
    assert_eq!(ids(&listing), vec![catalog.red_shoes.id]);
}

#[tokio::test]
async fn scenario_malformed_category_leaves_collection_unfiltered() {
    let catalog = scenario_catalog().await;
    let listing = catalog
        .service
        .browse(ListingParams {
            category: Some("abc".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(listing.product_count, 3);
    assert!(listing.active_filters.category.is_none());
}

#[tokio::test]
async fn scenario_no_parameters_returns_everything_newest_first() {
    let catalog = scenario_catalog().await;
    let listing = catalog.service.browse(ListingParams::default()).await.unwrap();

    assert_eq!(
        ids(&listing),
        vec![
            catalog.green_shoes.id,
            catalog.blue_hat.id,
            catalog.red_shoes.id
        ]
    );
    assert!(listing.active_filters.is_empty());
}

#[tokio::test]
async fn property_results_never_contain_duplicates() {
    let catalog = scenario_catalog().await;
    let inputs = [
        ListingParams::default(),
        ListingParams {
            search: Some("shoes".to_string()),
            ..Default::default()
        },
        ListingParams {
            tags: vec![
                catalog.sale.id.to_string(),
                catalog.sale.id.to_string(),
                catalog.new.id.to_string(),
            ],
            ..Default::default()
        },
    ];

    for params in inputs {
        let listing = catalog.service.browse(params).await.unwrap();
        let mut seen = std::collections::HashSet::new();
        for product in &listing.products {
            assert!(seen.insert(product.id), "duplicate product {}", product.id);
        }
        assert_eq!(listing.product_count, listing.products.len());
    }
}

#[tokio::test]
async fn property_every_result_satisfies_all_active_filters() {
    let catalog = scenario_catalog().await;
    let listing = catalog
        .service
        .browse(ListingParams {
            search: Some("shoes".to_string()),
            category: Some(catalog.shoes.id.to_string()),
            tags: vec![catalog.sale.id.to_string()],
        })
        .await
        .unwrap();

    assert!(!listing.products.is_empty());
    for product in &listing.products {
        let text = format!("{} {}", product.name, product.description).to_lowercase();
        assert!(text.contains("shoes"));
        assert_eq!(product.category_id, catalog.shoes.id);
        assert!(product.tags.iter().any(|t| t.id == catalog.sale.id));
    }
}

#[tokio::test]
async fn property_adding_a_tag_never_grows_the_result() {
    let catalog = scenario_catalog().await;

    let with_one = catalog
        .service
        .browse(ListingParams {
            tags: vec![catalog.sale.id.to_string()],
            ..Default::default()
        })
        .await
        .unwrap();
    let with_two = catalog
        .service
        .browse(ListingParams {
            tags: vec![catalog.sale.id.to_string(), catalog.new.id.to_string()],
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(with_two.product_count <= with_one.product_count);
}

#[tokio::test]
async fn property_malformed_entries_behave_like_absent_ones() {
    let catalog = scenario_catalog().await;

    let clean = catalog
        .service
        .browse(ListingParams {
            tags: vec![catalog.sale.id.to_string()],
            ..Default::default()
        })
        .await
        .unwrap();
    let with_junk = catalog
        .service
        .browse(ListingParams {
            category: Some("not-a-uuid".to_string()),
            tags: vec![catalog.sale.id.to_string(), "###".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(ids(&clean), ids(&with_junk));
    assert_eq!(clean.active_filters.tags, with_junk.active_filters.tags);
    assert!(with_junk.active_filters.category.is_none());
}

#[tokio::test]
async fn property_browse_is_idempotent() {
    let catalog = scenario_catalog().await;
    let params = ListingParams {
        search: Some("shoes".to_string()),
        tags: vec![catalog.sale.id.to_string()],
        ..Default::default()
    };

    let first = catalog.service.browse(params.clone()).await.unwrap();
    let second = catalog.service.browse(params).await.unwrap();

    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.product_count, second.product_count);
    assert_eq!(first.active_filters, second.active_filters);
}
