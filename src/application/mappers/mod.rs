//! Conversion between API DTOs and domain entities.
//!
//! Every mapper copies all fields one-to-one. The `Option`-taking
//! functions map `None` to `None`; owned conversions are plain `From` impls.

pub mod beer_mapper;
pub mod customer_mapper;
pub mod date_mapper;

pub use beer_mapper::BeerMapper;
pub use customer_mapper::CustomerMapper;
