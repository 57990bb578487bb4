//! Handlers for customer endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::CustomerDto;
use crate::api::extract::ApiJson;
use crate::api::handlers::location_header;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a single customer.
///
/// `GET /api/v1/customer/{customerId}`
#[utoipa::path(
    get,
    path = "/api/v1/customer/{customerId}",
    tag = "customer",
    params(("customerId" = Uuid, Path, description = "UUID of desired customer to get")),
    responses(
        (status = 200, description = "Customer found", body = CustomerDto),
        (status = 404, description = "Customer not found"),
    )
)]
pub async fn get_customer_handler(
    Path(customer_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<CustomerDto>, AppError> {
    let customer = state
        .customer_service
        .get_customer_by_id(customer_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found("Customer not found", json!({ "customerId": customer_id }))
        })?;

    Ok(Json(customer))
}

/// Creates a new customer.
///
/// `POST /api/v1/customer`
#[utoipa::path(
    post,
    path = "/api/v1/customer",
    tag = "customer",
    request_body = CustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto,
            headers(("Location" = String, description = "URI of the new customer"))),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn save_new_customer_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CustomerDto>,
) -> Result<(StatusCode, HeaderMap, Json<CustomerDto>), AppError> {
    payload.validate()?;

    let customer = CustomerDto {
        id: None,
        ..payload
    };

    let saved = state.customer_service.save_new_customer(customer).await?;

    let headers = location_header("customer", saved.id)?;

    Ok((StatusCode::CREATED, headers, Json(saved)))
}

/// Replaces an existing customer.
///
/// `PUT /api/v1/customer/{customerId}`
#[utoipa::path(
    put,
    path = "/api/v1/customer/{customerId}",
    tag = "customer",
    params(("customerId" = Uuid, Path, description = "UUID of the customer to update")),
    request_body = CustomerDto,
    responses(
        (status = 204, description = "Customer updated"),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn update_customer_handler(
    Path(customer_id): Path<Uuid>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CustomerDto>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    let customer = CustomerDto {
        id: Some(customer_id),
        ..payload
    };

    state
        .customer_service
        .update_customer(customer_id, customer)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a customer.
///
/// `DELETE /api/v1/customer/{customerId}`
#[utoipa::path(
    delete,
    path = "/api/v1/customer/{customerId}",
    tag = "customer",
    params(("customerId" = Uuid, Path, description = "UUID of the customer to delete")),
    responses((status = 204, description = "Customer deleted"))
)]
pub async fn delete_customer_handler(
    Path(customer_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.customer_service.delete_by_id(customer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{MockBeerService, MockCustomerService};
    use std::sync::Arc;

    fn state_with(customer_service: MockCustomerService) -> AppState {
        AppState::new(Arc::new(MockBeerService::new()), Arc::new(customer_service))
    }

    #[tokio::test]
    async fn test_short_name_rejected_before_service() {
        let mut mock = MockCustomerService::new();
        mock.expect_save_new_customer().never();

        let result =
            save_new_customer_handler(State(state_with(mock)), ApiJson(CustomerDto::new("Al"))).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_error_info().details.get("name").is_some());
    }

    #[tokio::test]
    async fn test_service_without_id_is_internal_error() {
        let mut mock = MockCustomerService::new();
        mock.expect_save_new_customer()
            .times(1)
            .returning(Ok);

        let result =
            save_new_customer_handler(State(state_with(mock)), ApiJson(CustomerDto::new("Alice")))
                .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let path_id = Uuid::new_v4();
        let mut mock = MockCustomerService::new();
        mock.expect_update_customer()
            .withf(move |id, customer| *id == path_id && customer.id == Some(path_id))
            .times(1)
            .returning(|_, _| Ok(()));

        let status = update_customer_handler(
            Path(path_id),
            State(state_with(mock)),
            ApiJson(CustomerDto::new("Alice")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
