#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use brewery_api::AppError;
use brewery_api::api::dto::{BeerDto, CustomerDto};
use brewery_api::application::services::{BeerService, CustomerService};
use brewery_api::routes::api_router;
use brewery_api::state::AppState;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// A service call captured by a fake.
#[derive(Debug, Clone, PartialEq)]
pub enum Call<T> {
    Get(Uuid),
    Save(T),
    Update(Uuid, T),
    Delete(Uuid),
}

/// Canned answers plus a log of every call received.
pub struct Fake<T> {
    found: Option<T>,
    saved: T,
    calls: Mutex<Vec<Call<T>>>,
}

impl<T: Clone> Fake<T> {
    /// `found` is returned by every lookup, `saved` by every save.
    pub fn new(found: Option<T>, saved: T) -> Arc<Self> {
        Arc::new(Self {
            found,
            saved,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call<T>> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call<T>) {
        self.calls.lock().unwrap().push(call);
    }
}

pub type FakeBeerService = Fake<BeerDto>;
pub type FakeCustomerService = Fake<CustomerDto>;

#[async_trait]
impl BeerService for Fake<BeerDto> {
    async fn get_beer_by_id(&self, beer_id: Uuid) -> Result<Option<BeerDto>, AppError> {
        self.record(Call::Get(beer_id));
        Ok(self.found.clone())
    }

    async fn save_new_beer(&self, beer: BeerDto) -> Result<BeerDto, AppError> {
        self.record(Call::Save(beer));
        Ok(self.saved.clone())
    }

    async fn update_beer(&self, beer_id: Uuid, beer: BeerDto) -> Result<(), AppError> {
        self.record(Call::Update(beer_id, beer));
        Ok(())
    }

    async fn delete_by_id(&self, beer_id: Uuid) -> Result<(), AppError> {
        self.record(Call::Delete(beer_id));
        Ok(())
    }
}

#[async_trait]
impl CustomerService for Fake<CustomerDto> {
    async fn get_customer_by_id(
        &self,
        customer_id: Uuid,
    ) -> Result<Option<CustomerDto>, AppError> {
        self.record(Call::Get(customer_id));
        Ok(self.found.clone())
    }

    async fn save_new_customer(&self, customer: CustomerDto) -> Result<CustomerDto, AppError> {
        self.record(Call::Save(customer));
        Ok(self.saved.clone())
    }

    async fn update_customer(
        &self,
        customer_id: Uuid,
        customer: CustomerDto,
    ) -> Result<(), AppError> {
        self.record(Call::Update(customer_id, customer));
        Ok(())
    }

    async fn delete_by_id(&self, customer_id: Uuid) -> Result<(), AppError> {
        self.record(Call::Delete(customer_id));
        Ok(())
    }
}

/// A valid beer as a client would submit it.
pub fn sample_beer() -> BeerDto {
    BeerDto::new("Beer1", "PALE_ALE", 123456789012)
}

pub fn saved_beer() -> BeerDto {
    BeerDto {
        id: Some(Uuid::new_v4()),
        ..BeerDto::new("New Beer", "PALE_ALE", 123456789012)
    }
}

pub fn saved_customer() -> CustomerDto {
    CustomerDto {
        id: Some(Uuid::new_v4()),
        name: "Alice".to_string(),
    }
}

pub fn beer_fake(found: Option<BeerDto>) -> Arc<FakeBeerService> {
    Fake::new(found, saved_beer())
}

pub fn customer_fake(found: Option<CustomerDto>) -> Arc<FakeCustomerService> {
    Fake::new(found, saved_customer())
}

pub fn make_server(beers: Arc<FakeBeerService>, customers: Arc<FakeCustomerService>) -> TestServer {
    let state = AppState::new(beers, customers);
    TestServer::new(api_router(state)).unwrap()
}
