//! # Axum Helpers
//!
//! Shared HTTP plumbing for the storefront services.
//!
//! - **[`errors`]**: the single place where classified request errors become
//!   HTTP responses (`{title, status, detail, errors?}` bodies)
//! - **[`extractors`]**: JSON/path/query extractors whose rejections flow
//!   through the same error mapper
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router(app_info!()));
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{ApiResult, AppError, ErrorResponse};
pub use extractors::{JsonBody, PathParams, QueryParams};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
