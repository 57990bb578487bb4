//! Application layer services and DTO ↔ entity mapping.
//!
//! Handlers depend only on the service traits defined here, so the
//! implementation behind them can be swapped without touching the HTTP layer.
//!
//! # Available Services
//!
//! - [`services::beer_service::BeerService`] - Beer CRUD operations
//! - [`services::customer_service::CustomerService`] - Customer CRUD operations
//!
//! Services speak DTOs at their boundary; [`mappers`] converts them to and
//! from domain entities.

pub mod mappers;
pub mod services;
