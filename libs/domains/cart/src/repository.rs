use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CartResult;
use crate::models::Cart;

/// Repository trait for Cart persistence
///
/// A cart and its items are loaded and saved as one unit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Load a cart with its items, ordered by when they were added
    async fn find(&self, user_id: &str) -> CartResult<Option<Cart>>;

    /// Insert or replace a cart together with its full item list
    async fn save(&self, cart: &Cart) -> CartResult<()>;
}

/// In-memory implementation of CartRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCartRepository {
    carts: Arc<RwLock<HashMap<String, Cart>>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn find(&self, user_id: &str) -> CartResult<Option<Cart>> {
        let carts = self.carts.read().await;
        Ok(carts.get(user_id).cloned())
    }

    async fn save(&self, cart: &Cart) -> CartResult<()> {
        let mut carts = self.carts.write().await;
        carts.insert(cart.user_id.clone(), cart.clone());

        tracing::debug!(user_id = %cart.user_id, items = cart.items.len(), "Saved cart");
        Ok(())
    }
}
