//! DTOs for the beer endpoints.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{not_blank, null_as_default};

/// Beer as exchanged over the API.
///
/// `id`, `createdDate` and `lastUpdatedDate` are assigned by the server.
/// They are accepted on input but ignored when creating a beer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    /// Id of Beer
    pub id: Option<Uuid>,

    /// Beer Name
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(
        custom(function = "not_blank"),
        length(min = 3, max = 100, message = "length must be between 3 and 100")
    )]
    #[schema(min_length = 3, max_length = 100)]
    pub beer_name: String,

    /// Beer Style
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub beer_style: String,

    /// UPC of Beer
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(range(min = 1, message = "must be greater than 0"))]
    #[schema(minimum = 1)]
    pub upc: i64,

    /// Date Created
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_date: Option<DateTime<FixedOffset>>,

    /// Date Updated
    #[schema(value_type = Option<String>, format = DateTime)]
    pub last_updated_date: Option<DateTime<FixedOffset>>,
}

impl BeerDto {
    /// Builds a client-side DTO without any server-assigned fields.
    pub fn new(beer_name: impl Into<String>, beer_style: impl Into<String>, upc: i64) -> Self {
        Self {
            id: None,
            beer_name: beer_name.into(),
            beer_style: beer_style.into(),
            upc,
            created_date: None,
            last_updated_date: None,
        }
    }

    /// Drops the fields the server owns (id and timestamps).
    pub fn without_server_fields(self) -> Self {
        Self {
            id: None,
            created_date: None,
            last_updated_date: None,
            ..self
        }
    }
}

/// Optional query parameters on `GET /api/v1/beer/{beerId}`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetBeerQuery {
    /// Serving temperature hint (e.g. `yes`)
    pub is_cold: Option<String>,
}
