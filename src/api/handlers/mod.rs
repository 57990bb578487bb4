//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod beer;
pub mod customer;
pub mod docs;
pub mod health;

pub use beer::{
    delete_beer_handler, get_beer_handler, save_new_beer_handler, update_beer_handler,
};
pub use customer::{
    delete_customer_handler, get_customer_handler, save_new_customer_handler,
    update_customer_handler,
};
pub use docs::openapi_handler;
pub use health::health_handler;

use axum::http::{HeaderMap, HeaderValue, header};
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// Builds the `Location` header for a newly created `/api/v1/{resource}/{id}`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the service handed back a record without
/// an id.
pub(crate) fn location_header(
    resource: &'static str,
    id: Option<Uuid>,
) -> Result<HeaderMap, AppError> {
    let id = id.ok_or_else(|| {
        AppError::internal(
            "Service returned a record without an id",
            json!({ "resource": resource }),
        )
    })?;

    let value = HeaderValue::try_from(format!("/api/v1/{resource}/{id}")).map_err(|_| {
        AppError::internal("Invalid Location header", json!({ "resource": resource }))
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, value);
    Ok(headers)
}
