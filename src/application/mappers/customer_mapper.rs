//! Mapping between [`CustomerDto`] and [`Customer`].

use crate::api::dto::CustomerDto;
use crate::domain::entities::Customer;

pub struct CustomerMapper;

impl CustomerMapper {
    pub fn dto_to_entity(dto: CustomerDto) -> Customer {
        Customer::from(dto)
    }

    pub fn entity_to_dto(customer: Customer) -> CustomerDto {
        CustomerDto::from(customer)
    }

    pub fn to_entity(dto: Option<CustomerDto>) -> Option<Customer> {
        dto.map(Self::dto_to_entity)
    }

    pub fn to_dto(customer: Option<Customer>) -> Option<CustomerDto> {
        customer.map(Self::entity_to_dto)
    }
}

impl From<CustomerDto> for Customer {
    fn from(dto: CustomerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
        }
    }
}
