//! Cart use cases

use async_trait::async_trait;
use chrono::Utc;
use domain_products::GetProductById;
use mediator::{Handler, Mediator, Outcome};
use std::sync::Arc;
use tracing::instrument;

use crate::error::CartError;
use crate::models::{
    AddItemToCart, Cart, CartItem, CartView, ClearCart, GetCart, RemoveItemFromCart,
};
use crate::repository::CartRepository;

/// Handles cart requests. `P` answers product lookups, normally the
/// product service behind its own mediator.
pub struct CartService<C: CartRepository, P> {
    carts: Arc<C>,
    products: Mediator<P>,
}

/// Mediator dispatching cart requests to a [`CartService`]
pub type CartMediator<C, P> = Mediator<CartService<C, P>>;

impl<C, P> CartService<C, P>
where
    C: CartRepository,
    P: Handler<GetProductById> + 'static,
{
    pub fn new(carts: C, products: Mediator<P>) -> Self {
        Self::from_arc(Arc::new(carts), products)
    }

    pub fn from_arc(carts: Arc<C>, products: Mediator<P>) -> Self {
        Self { carts, products }
    }

    async fn existing_cart(&self, user_id: &str) -> Outcome<Cart> {
        let cart = self
            .carts
            .find(user_id)
            .await?
            .ok_or_else(|| CartError::NotFound(user_id.to_string()))?;
        Ok(cart)
    }
}

/// Adds a line or merges the quantity into an existing one.
///
/// The cart is read and then saved in a separate transaction, so two
/// concurrent adds for the same user can race and the later save wins.
#[async_trait]
impl<C, P> Handler<AddItemToCart> for CartService<C, P>
where
    C: CartRepository,
    P: Handler<GetProductById> + 'static,
{
    #[instrument(skip(self, request), fields(user_id = %request.user_id, product_id = request.product_id))]
    async fn handle(&self, request: AddItemToCart) -> Outcome<CartView> {
        let product = self
            .products
            .send(GetProductById {
                id: request.product_id,
            })
            .await?;

        let now = Utc::now();
        let mut cart = match self.carts.find(&request.user_id).await? {
            Some(cart) => cart,
            None => Cart::new(request.user_id.clone(), now),
        };

        match cart.item_mut(product.id) {
            Some(item) => {
                item.quantity = item
                    .quantity
                    .checked_add(request.quantity)
                    .ok_or(CartError::InvalidQuantity)?;
            }
            None => cart.items.push(CartItem {
                user_id: request.user_id.clone(),
                product_id: product.id,
                product_name: product.name,
                unit_price: product.price,
                quantity: request.quantity,
                added_at: now,
            }),
        }
        cart.updated_at = now;

        self.carts.save(&cart).await?;
        Ok(cart.into())
    }
}

#[async_trait]
impl<C, P> Handler<GetCart> for CartService<C, P>
where
    C: CartRepository,
    P: Handler<GetProductById> + 'static,
{
    #[instrument(skip(self))]
    async fn handle(&self, request: GetCart) -> Outcome<CartView> {
        Ok(self.existing_cart(&request.user_id).await?.into())
    }
}

#[async_trait]
impl<C, P> Handler<RemoveItemFromCart> for CartService<C, P>
where
    C: CartRepository,
    P: Handler<GetProductById> + 'static,
{
    #[instrument(skip(self))]
    async fn handle(&self, request: RemoveItemFromCart) -> Outcome<CartView> {
        let mut cart = self.existing_cart(&request.user_id).await?;

        if !cart.remove_item(request.product_id) {
            return Err(CartError::ItemNotFound {
                user_id: request.user_id,
                product_id: request.product_id,
            }
            .into());
        }
        cart.updated_at = Utc::now();

        self.carts.save(&cart).await?;
        Ok(cart.into())
    }
}

#[async_trait]
impl<C, P> Handler<ClearCart> for CartService<C, P>
where
    C: CartRepository,
    P: Handler<GetProductById> + 'static,
{
    #[instrument(skip(self))]
    async fn handle(&self, request: ClearCart) -> Outcome<()> {
        let mut cart = self.existing_cart(&request.user_id).await?;

        cart.items.clear();
        cart.updated_at = Utc::now();

        self.carts.save(&cart).await?;
        Ok(())
    }
}
