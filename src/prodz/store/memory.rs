use super::CatalogStore;
use crate::error::Result;
use crate::model::Product;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.products = products.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_products(mut self, count: usize) -> Self {
            let products: Vec<Product> = (1..=count as u64)
                .map(|i| Product {
                    id: i,
                    title: format!("Test Product {}", i),
                    description: format!("Description for product {}", i),
                    price: 10.0 * i as f64,
                    thumbnail: "placeholder.png".to_string(),
                    code: format!("sku-{}", i),
                    stock: 5,
                })
                .collect();
            self.store.save(&products).unwrap();
            self
        }
    }
}
