//! Sea-ORM entities for the catalog tables.
//!
//! Four tables: `categories`, `tags`, `products`, and the `product_tags`
//! join table carrying the many-to-many relation between products and tags.

pub mod category;
pub mod product;
pub mod product_tag;
pub mod tag;
