//! Beer service.

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::api::dto::BeerDto;
use crate::application::mappers::BeerMapper;
use crate::domain::entities::Beer;
use crate::error::AppError;

/// Operations on the beer catalogue.
///
/// # Implementations
///
/// - [`StubBeerService`] - In-process stub without persistence
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerService: Send + Sync {
    /// Looks up a beer by id.
    ///
    /// Returns `Ok(None)` when no beer has this id.
    async fn get_beer_by_id(&self, beer_id: Uuid) -> Result<Option<BeerDto>, AppError>;

    /// Stores a new beer and returns it with its server-assigned fields.
    async fn save_new_beer(&self, beer: BeerDto) -> Result<BeerDto, AppError>;

    /// Replaces the beer stored under `beer_id`.
    async fn update_beer(&self, beer_id: Uuid, beer: BeerDto) -> Result<(), AppError>;

    /// Removes the beer stored under `beer_id`.
    async fn delete_by_id(&self, beer_id: Uuid) -> Result<(), AppError>;
}

/// Beer service without a backing store.
///
/// Lookups always succeed with a canned beer carrying the requested id. Saves
/// assign a fresh id and timestamps. Updates and deletes are only logged.
#[derive(Debug, Default, Clone)]
pub struct StubBeerService;

impl StubBeerService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BeerService for StubBeerService {
    async fn get_beer_by_id(&self, beer_id: Uuid) -> Result<Option<BeerDto>, AppError> {
        let beer = Beer::new("Galaxy Cat", "PALE_ALE", 123456789012)
            .assign_identity(beer_id, Utc::now());

        Ok(BeerMapper::to_dto(Some(beer)))
    }

    async fn save_new_beer(&self, beer: BeerDto) -> Result<BeerDto, AppError> {
        let beer_id = Uuid::new_v4();
        let saved = BeerMapper::dto_to_entity(beer.without_server_fields())
            .assign_identity(beer_id, Utc::now());

        info!(%beer_id, beer_name = %saved.beer_name, "Saved new beer");

        Ok(BeerMapper::entity_to_dto(saved))
    }

    async fn update_beer(&self, beer_id: Uuid, beer: BeerDto) -> Result<(), AppError> {
        info!(%beer_id, beer_name = %beer.beer_name, "Updating beer");
        Ok(())
    }

    async fn delete_by_id(&self, beer_id: Uuid) -> Result<(), AppError> {
        info!(%beer_id, "Deleting beer");
        Ok(())
    }
}
