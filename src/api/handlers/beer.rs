//! Handlers for beer endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{BeerDto, GetBeerQuery};
use crate::api::extract::ApiJson;
use crate::api::handlers::location_header;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a single beer.
///
/// # Endpoint
///
/// `GET /api/v1/beer/{beerId}`
///
/// # Errors
///
/// Returns 404 Not Found if no beer has this id.
#[utoipa::path(
    get,
    path = "/api/v1/beer/{beerId}",
    tag = "beer",
    params(
        ("beerId" = Uuid, Path, description = "UUID of desired beer to get"),
        GetBeerQuery,
    ),
    responses(
        (status = 200, description = "Beer found", body = BeerDto),
        (status = 404, description = "Beer not found"),
    )
)]
pub async fn get_beer_handler(
    Path(beer_id): Path<Uuid>,
    Query(query): Query<GetBeerQuery>,
    State(state): State<AppState>,
) -> Result<Json<BeerDto>, AppError> {
    if let Some(is_cold) = query.is_cold.as_deref() {
        tracing::debug!(%beer_id, is_cold, "Beer requested with serving hint");
    }

    let beer = state
        .beer_service
        .get_beer_by_id(beer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Beer not found", json!({ "beerId": beer_id })))?;

    Ok(Json(beer))
}

/// Creates a new beer.
///
/// # Endpoint
///
/// `POST /api/v1/beer`
///
/// `id`, `createdDate` and `lastUpdatedDate` in the body are ignored.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
#[utoipa::path(
    post,
    path = "/api/v1/beer",
    tag = "beer",
    request_body = BeerDto,
    responses(
        (status = 201, description = "Beer created", body = BeerDto,
            headers(("Location" = String, description = "URI of the new beer"))),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn save_new_beer_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BeerDto>,
) -> Result<(StatusCode, HeaderMap, Json<BeerDto>), AppError> {
    payload.validate()?;

    let saved = state
        .beer_service
        .save_new_beer(payload.without_server_fields())
        .await?;

    let headers = location_header("beer", saved.id)?;

    Ok((StatusCode::CREATED, headers, Json(saved)))
}

/// Replaces an existing beer.
///
/// # Endpoint
///
/// `PUT /api/v1/beer/{beerId}`
///
/// The path id wins over any `id` in the body.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
#[utoipa::path(
    put,
    path = "/api/v1/beer/{beerId}",
    tag = "beer",
    params(("beerId" = Uuid, Path, description = "UUID of the beer to update")),
    request_body = BeerDto,
    responses(
        (status = 204, description = "Beer updated"),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn update_beer_handler(
    Path(beer_id): Path<Uuid>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BeerDto>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    let beer = BeerDto {
        id: Some(beer_id),
        ..payload
    };

    state.beer_service.update_beer(beer_id, beer).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a beer.
///
/// # Endpoint
///
/// `DELETE /api/v1/beer/{beerId}`
#[utoipa::path(
    delete,
    path = "/api/v1/beer/{beerId}",
    tag = "beer",
    params(("beerId" = Uuid, Path, description = "UUID of the beer to delete")),
    responses((status = 204, description = "Beer deleted"))
)]
pub async fn delete_beer_handler(
    Path(beer_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.beer_service.delete_by_id(beer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{MockBeerService, MockCustomerService};
    use axum::http::header;
    use std::sync::Arc;

    fn state_with(beer_service: MockBeerService) -> AppState {
        AppState::new(Arc::new(beer_service), Arc::new(MockCustomerService::new()))
    }

    #[tokio::test]
    async fn test_get_beer_not_found() {
        let mut mock = MockBeerService::new();
        mock.expect_get_beer_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_beer_handler(
            Path(Uuid::new_v4()),
            Query(GetBeerQuery::default()),
            State(state_with(mock)),
        )
        .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_save_ignores_client_supplied_server_fields() {
        let saved_id = Uuid::new_v4();
        let mut mock = MockBeerService::new();
        mock.expect_save_new_beer()
            .withf(|beer| beer.id.is_none() && beer.created_date.is_none())
            .times(1)
            .returning(move |beer| {
                Ok(BeerDto {
                    id: Some(saved_id),
                    ..beer
                })
            });

        let mut payload = BeerDto::new("Beer1", "PALE_ALE", 123456789012);
        payload.id = Some(Uuid::new_v4());
        payload.created_date = Some(chrono::Utc::now().fixed_offset());

        let (status, headers, Json(body)) =
            save_new_beer_handler(State(state_with(mock)), ApiJson(payload))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.id, Some(saved_id));
        assert_eq!(
            headers.get(header::LOCATION).unwrap(),
            format!("/api/v1/beer/{saved_id}").as_str()
        );
    }

    #[tokio::test]
    async fn test_save_invalid_never_reaches_service() {
        let mut mock = MockBeerService::new();
        mock.expect_save_new_beer().never();

        let result = save_new_beer_handler(
            State(state_with(mock)),
            ApiJson(BeerDto::new("Beer1", "PALE_ALE", -5)),
        )
        .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let path_id = Uuid::new_v4();
        let mut mock = MockBeerService::new();
        mock.expect_update_beer()
            .withf(move |id, beer| *id == path_id && beer.id == Some(path_id))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut payload = BeerDto::new("Beer1", "PALE_ALE", 1);
        payload.id = Some(Uuid::new_v4());

        let status = update_beer_handler(Path(path_id), State(state_with(mock)), ApiJson(payload))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_delegates_to_service() {
        let beer_id = Uuid::new_v4();
        let mut mock = MockBeerService::new();
        mock.expect_delete_by_id()
            .withf(move |id| *id == beer_id)
            .times(1)
            .returning(|_| Ok(()));

        let status = delete_beer_handler(Path(beer_id), State(state_with(mock)))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
