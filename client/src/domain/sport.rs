//! Sports offered by the catalogue.

use serde::{Deserialize, Serialize};

use super::ids::entity_id;

entity_id!(
    /// Identifier of a sport.
    SportId,
    "sport"
);

/// A sport facilities and activities are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    sport_id: SportId,
    name: String,
}

impl Sport {
    pub fn new(sport_id: SportId, name: impl Into<String>) -> Self {
        Self {
            sport_id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> SportId {
        self.sport_id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
