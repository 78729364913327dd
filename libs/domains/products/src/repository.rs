use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return it with its assigned id
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Page of products ordered by id ascending
    async fn list(&self, offset: u64, limit: u64) -> ProductResult<Vec<Product>>;

    async fn count(&self) -> ProductResult<u64>;

    /// Overwrite name, description, price and updated_at of an existing product
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Returns false when nothing was deleted
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug)]
struct Catalog {
    products: BTreeMap<i32, Product>,
    next_id: i32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the three sample products.
    pub fn seeded() -> Self {
        let seeded_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap_or_else(Utc::now);
        let samples = [
            (1, "Sample Product 1", "A sample product", Decimal::new(1999, 2)),
            (2, "Sample Product 2", "Another sample product", Decimal::new(2999, 2)),
            (3, "Sample Product 3", "Yet another sample product", Decimal::new(3999, 2)),
        ];

        let products = samples
            .into_iter()
            .map(|(id, name, description, price)| {
                let product = Product {
                    id,
                    name: name.to_string(),
                    description: description.to_string(),
                    price,
                    created_at: seeded_at,
                    updated_at: seeded_at,
                };
                (id, product)
            })
            .collect();

        Self {
            catalog: Arc::new(RwLock::new(Catalog {
                products,
                next_id: 4,
            })),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let mut catalog = self.catalog.write().await;

        let id = catalog.next_id;
        catalog.next_id += 1;

        let product = Product {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            created_at: input.created_at,
            updated_at: input.created_at,
        };
        catalog.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.get(&id).cloned())
    }

    async fn list(&self, offset: u64, limit: u64) -> ProductResult<Vec<Product>> {
        let catalog = self.catalog.read().await;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(catalog
            .products
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn count(&self) -> ProductResult<u64> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.len() as u64)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut catalog = self.catalog.write().await;

        let existing = catalog
            .products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;

        existing.name = product.name;
        existing.description = product.description;
        existing.price = product.price;
        existing.updated_at = product.updated_at;

        tracing::info!(product_id = existing.id, "Updated product");
        Ok(existing.clone())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut catalog = self.catalog.write().await;
        let removed = catalog.products.remove(&id).is_some();

        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }
}
