//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization, validator
//! for input validation and utoipa for their OpenAPI schema.

pub mod beer;
pub mod customer;
pub mod health;

pub use beer::{BeerDto, GetBeerQuery};
pub use customer::CustomerDto;
pub use health::HealthResponse;

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

/// Rejects strings that are empty or contain only whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Treats an explicit JSON `null` like an absent field.
///
/// Used together with `#[serde(default)]` on required fields so that both end
/// up at the type's default and are reported by validation.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
