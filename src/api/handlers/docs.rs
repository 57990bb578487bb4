//! OpenAPI document describing the REST API.
//!
//! The document is generated from the DTO schemas and the `#[utoipa::path]`
//! annotations on each handler, so it cannot drift from the code.

use axum::Json;
use utoipa::OpenApi;

use crate::api::dto::{BeerDto, CustomerDto, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::beer::get_beer_handler,
        crate::api::handlers::beer::save_new_beer_handler,
        crate::api::handlers::beer::update_beer_handler,
        crate::api::handlers::beer::delete_beer_handler,
        crate::api::handlers::customer::get_customer_handler,
        crate::api::handlers::customer::save_new_customer_handler,
        crate::api::handlers::customer::update_customer_handler,
        crate::api::handlers::customer::delete_customer_handler,
        crate::api::handlers::health::health_handler,
    ),
    components(schemas(BeerDto, CustomerDto, HealthResponse)),
    tags(
        (name = "beer", description = "Beer catalogue"),
        (name = "customer", description = "Brewery customers"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document.
///
/// # Endpoint
///
/// `GET /api-docs/openapi.json`
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
