//! Service traits and their stub implementations.

pub mod beer_service;
pub mod customer_service;

pub use beer_service::{BeerService, StubBeerService};
pub use customer_service::{CustomerService, StubCustomerService};

#[cfg(test)]
pub use beer_service::MockBeerService;
#[cfg(test)]
pub use customer_service::MockCustomerService;
