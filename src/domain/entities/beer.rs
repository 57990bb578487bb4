//! Beer entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A beer in the catalogue.
///
/// Timestamps are stored in UTC. They are assigned by the service on save and
/// never taken from client input.
#[derive(Debug, Clone, PartialEq)]
pub struct Beer {
    pub id: Option<Uuid>,
    pub beer_name: String,
    pub beer_style: String,
    pub upc: i64,
    pub created_date: Option<DateTime<Utc>>,
    pub last_updated_date: Option<DateTime<Utc>>,
}

impl Beer {
    /// Creates an unsaved beer without identity or timestamps.
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

    /// Assigns an identity and stamps both timestamps with `now`.
    pub fn assign_identity(mut self, id: Uuid, now: DateTime<Utc>) -> Self {
        self.id = Some(id);
        self.created_date = Some(now);
        self.last_updated_date = Some(now);
        self
    }
}
