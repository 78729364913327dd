//! Products Domain
//!
//! Product catalog use cases, each a mediated request answered by
//! [`ProductService`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, mediator.send(request)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Mediator   │  ← validation pipeline
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← one Handler impl per request
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← in-memory or PostgreSQL
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//! use mediator::Mediator;
//!
//! let service = ProductService::new(InMemoryProductRepository::seeded());
//! let router = handlers::router(Mediator::new(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, DeleteProduct, GetProductById, GetProducts, NewProduct, Product, ProductPage,
    UpdateProduct, UpdateProductBody,
};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::{ProductMediator, ProductService};
