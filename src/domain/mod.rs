//! Domain layer containing the internal business entities.
//!
//! Entities mirror the API DTOs but are owned by the application layer.
//! Conversion between the two lives in [`crate::application::mappers`].
//!
//! - [`entities`] - Core business data structures

pub mod entities;
