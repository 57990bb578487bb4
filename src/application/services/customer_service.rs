//! Customer service.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::api::dto::CustomerDto;
use crate::application::mappers::CustomerMapper;
use crate::domain::entities::Customer;
use crate::error::AppError;

/// Operations on brewery customers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Looks up a customer by id. Returns `Ok(None)` when unknown.
    async fn get_customer_by_id(
        &self,
        customer_id: Uuid,
    ) -> Result<Option<CustomerDto>, AppError>;

    async fn save_new_customer(&self, customer: CustomerDto) -> Result<CustomerDto, AppError>;

    async fn update_customer(
        &self,
        customer_id: Uuid,
        customer: CustomerDto,
    ) -> Result<(), AppError>;

    async fn delete_by_id(&self, customer_id: Uuid) -> Result<(), AppError>;
}

/// Customer service without a backing store.
#[derive(Debug, Default, Clone)]
pub struct StubCustomerService;

impl StubCustomerService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CustomerService for StubCustomerService {
    async fn get_customer_by_id(
        &self,
        customer_id: Uuid,
    ) -> Result<Option<CustomerDto>, AppError> {
        let customer = Customer::new(Some(customer_id), "Joe Buck");
        Ok(CustomerMapper::to_dto(Some(customer)))
    }

    async fn save_new_customer(&self, customer: CustomerDto) -> Result<CustomerDto, AppError> {
        let customer_id = Uuid::new_v4();
        let saved = Customer::new(Some(customer_id), customer.name);

        info!(%customer_id, "Saved new customer");

        Ok(CustomerMapper::entity_to_dto(saved))
    }

    async fn update_customer(
        &self,
        customer_id: Uuid,
        customer: CustomerDto,
    ) -> Result<(), AppError> {
        info!(%customer_id, name = %customer.name, "Updating customer");
        Ok(())
    }

    async fn delete_by_id(&self, customer_id: Uuid) -> Result<(), AppError> {
        info!(%customer_id, "Deleting customer");
        Ok(())
    }
}
