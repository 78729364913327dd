use axum::Router;
use domain_cart::{CartRepository, CartService, InMemoryCartRepository, PgCartRepository};
use domain_products::{
    InMemoryProductRepository, PgProductRepository, ProductRepository, ProductService,
};
use mediator::Mediator;

use crate::state::AppState;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
pub fn routes(state: &AppState) -> Router {
    match &state.db {
        Some(db) => compose(
            PgProductRepository::new(db.clone()),
            PgCartRepository::new(db.clone()),
        ),
        None => compose(
            InMemoryProductRepository::seeded(),
            InMemoryCartRepository::new(),
        ),
    }
}

/// Wires both slices over one pair of stores. The cart service resolves
/// products through the same mediator the product routes use.
fn compose<P, C>(products: P, carts: C) -> Router
where
    P: ProductRepository + 'static,
    C: CartRepository + 'static,
{
    let products = Mediator::new(ProductService::new(products));
    let carts = Mediator::new(CartService::new(carts, products.clone()));

    Router::new()
        .nest("/products", domain_products::handlers::router(products))
        .nest("/cart", domain_cart::handlers::router(carts))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
