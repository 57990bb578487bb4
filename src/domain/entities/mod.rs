//! Core domain entities.
//!
//! Entities are plain data structures without business logic. An entity whose
//! `id` is `None` has not been assigned an identity yet.
//!
//! - [`Beer`] - A beer in the catalogue
//! - [`Customer`] - A brewery customer

pub mod beer;
pub mod customer;

pub use beer::Beer;
pub use customer::Customer;
