//! Shopping Cart Domain
//!
//! Per-user carts holding snapshots of catalog products. Products are
//! resolved by sending `GetProductById` through the product mediator, so a
//! missing product surfaces with its own `Product.NotFound` code.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_cart::{handlers, CartService, InMemoryCartRepository};
//! use domain_products::{InMemoryProductRepository, ProductService};
//! use mediator::Mediator;
//!
//! let products = Mediator::new(ProductService::new(InMemoryProductRepository::seeded()));
//! let service = CartService::new(InMemoryCartRepository::new(), products);
//! let router = handlers::router(Mediator::new(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CartError, CartResult};
pub use handlers::ApiDoc;
pub use models::{
    AddItemBody, AddItemToCart, Cart, CartItem, CartItemView, CartView, ClearCart, GetCart,
    RemoveItemFromCart,
};
pub use postgres::PgCartRepository;
pub use repository::{CartRepository, InMemoryCartRepository};
pub use service::{CartMediator, CartService};
