//! DTOs for the customer endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{not_blank, null_as_default};

/// Customer as exchanged over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    /// Id of Customer
    pub id: Option<Uuid>,

    /// Customer Name
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(
        custom(function = "not_blank"),
        length(min = 3, max = 100, message = "length must be between 3 and 100")
    )]
    #[schema(min_length = 3, max_length = 100)]
    pub name: String,
}

impl CustomerDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}
