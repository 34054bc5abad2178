//! Bookable sports facilities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SportId;
use super::ids::entity_id;

entity_id!(
    /// Identifier of a facility.
    FacilityId,
    "facility"
);

/// Validation errors for facility drafts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacilityValidationError {
    #[error("facility name must not be empty")]
    EmptyName,
}

/// A venue that can be reserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    facility_id: FacilityId,
    name: String,
    sport_id: SportId,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    contact_info: Option<String>,
}

impl Facility {
    pub fn id(&self) -> FacilityId {
        self.facility_id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn sport_id(&self) -> SportId {
        self.sport_id
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn contact_info(&self) -> Option<&str> {
        self.contact_info.as_deref()
    }
}

/// Body sent when creating or editing a facility.
///
/// Blank optional fields are sent as `null` rather than as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityDraft {
    name: String,
    sport_id: SportId,
    address: Option<String>,
    contact_info: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

impl FacilityDraft {
    /// Validate a facility form.
    pub fn try_new(
        name: &str,
        sport_id: SportId,
        address: Option<&str>,
        contact_info: Option<&str>,
    ) -> Result<Self, FacilityValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FacilityValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_owned(),
            sport_id,
            address: non_blank(address),
            contact_info: non_blank(contact_info),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn sport_id(&self) -> SportId {
        self.sport_id
    }
}
