//! Customer entity.

use uuid::Uuid;

/// A brewery customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<Uuid>,
    pub name: String,
}

impl Customer {
    pub fn new(id: Option<Uuid>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
