//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    BeerService, CustomerService, StubBeerService, StubCustomerService,
};

#[derive(Clone)]
pub struct AppState {
    pub beer_service: Arc<dyn BeerService>,
    pub customer_service: Arc<dyn CustomerService>,
}

impl AppState {
    pub fn new(
        beer_service: Arc<dyn BeerService>,
        customer_service: Arc<dyn CustomerService>,
    ) -> Self {
        Self {
            beer_service,
            customer_service,
        }
    }

    /// State backed by the stub services.
    pub fn with_stub_services() -> Self {
        Self::new(
            Arc::new(StubBeerService::new()),
            Arc::new(StubCustomerService::new()),
        )
    }
}
