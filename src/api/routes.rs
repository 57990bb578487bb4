//! API route configuration.

use crate::api::handlers::{
    delete_beer_handler, delete_customer_handler, get_beer_handler, get_customer_handler,
    save_new_beer_handler, save_new_customer_handler, update_beer_handler,
    update_customer_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Version 1 of the REST API, nested under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /beer`                  - Create a beer
/// - `GET    /beer/{beerId}`         - Fetch a beer
/// - `PUT    /beer/{beerId}`         - Replace a beer
/// - `DELETE /beer/{beerId}`         - Delete a beer
/// - `POST   /customer`              - Create a customer
/// - `GET    /customer/{customerId}` - Fetch a customer
/// - `PUT    /customer/{customerId}` - Replace a customer
/// - `DELETE /customer/{customerId}` - Delete a customer
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/beer", post(save_new_beer_handler))
        .route(
            "/beer/{beerId}",
            get(get_beer_handler)
                .put(update_beer_handler)
                .delete(delete_beer_handler),
        )
        .route("/customer", post(save_new_customer_handler))
        .route(
            "/customer/{customerId}",
            get(get_customer_handler)
                .put(update_customer_handler)
                .delete(delete_customer_handler),
        )
}
