//! Shared test utilities
//!
//! - `TestDatabase`: PostgreSQL container with the catalog migrations applied
//! - `TestDataBuilder`: deterministic test data generation
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let name = builder.name("category", "main");
//! # }
//! ```

use uuid::Uuid;

mod postgres;

pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Seeded from the test name so reruns produce identical data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    pub fn from_test_name(test_name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        test_name.hash(&mut hasher);
        Self {
            seed: hasher.finish(),
        }
    }

    /// Deterministic UUID for this builder and salt
    pub fn id(&self, salt: u64) -> Uuid {
        Uuid::from_u64_pair(self.seed, salt)
    }

    /// Unique-per-test name, e.g. `test-category-12345-main`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}
