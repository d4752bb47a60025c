use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a geocoded place, assigned by the mapping
/// provider. Route overrides are keyed by these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A journey endpoint or waypoint as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub place_id: PlaceId,
    pub address: String,
    /// Present for UK addresses; required for pickup-zone resolution
    pub postcode: Option<String>,
}

impl Place {
    pub fn new(place_id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            place_id: PlaceId::new(place_id),
            address: address.into(),
            postcode: None,
        }
    }

    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }
}
