//! # Brewery API
//!
//! A REST backend for beers and customers built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Core business entities
//! - **Application Layer** ([`application`]) - Service traits and their stub implementations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, middleware and the OpenAPI document
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"   # Optional
//! cargo run
//! curl http://127.0.0.1:8080/api/v1/beer/0b6f6a2e-7d4f-4b36-9a8a-6f1f0f2b1c11
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::{BeerDto, CustomerDto};
    pub use crate::application::services::{BeerService, CustomerService};
    pub use crate::domain::entities::{Beer, Customer};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
