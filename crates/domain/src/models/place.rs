//! Place domain model.
//!
//! A place is a named circular geofence. Its name doubles as its identifier.

use serde::{Deserialize, Serialize};
use shared::lenient::LenientNumber;
use validator::Validate;

use crate::error::{require, RequestError};

/// Category assigned when the client does not send one.
pub const DEFAULT_PLACE_TYPE: &str = "custom";

/// Represents a registered place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Geofence radius in meters.
    pub geofence_radius: i32,
    #[serde(rename = "type")]
    pub place_type: String,
}

/// Request payload for registering a place.
///
/// Every field is optional at the serde level so that a missing one is
/// reported by name instead of as a generic decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlaceRequest {
    pub name: Option<String>,
    pub lat: Option<LenientNumber>,
    pub lon: Option<LenientNumber>,
    pub geofence_radius: Option<LenientNumber>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
}

/// A validated place ready to be stored.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewPlace {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub lon: f64,

    #[validate(range(min = 0, message = "Geofence radius must be non-negative"))]
    pub geofence_radius: i32,

    pub place_type: String,
}

impl NewPlace {
    /// Places are keyed by their name.
    pub fn id(&self) -> &str {
        &self.name
    }
}

impl CreatePlaceRequest {
    /// Checks field presence (in declaration order) and coerces numeric fields.
    ///
    /// Range checks are left to [`Validate`] on the returned value.
    pub fn into_new_place(self) -> Result<NewPlace, RequestError> {
        let name = require(self.name, "name")?;
        let lat = require(self.lat, "lat")?;
        let lon = require(self.lon, "lon")?;
        let radius = require(self.geofence_radius, "geofence_radius")?;

        Ok(NewPlace {
            name,
            lat: lat
                .to_f64()
                .map_err(|source| RequestError::InvalidNumber { field: "lat", source })?,
            lon: lon
                .to_f64()
                .map_err(|source| RequestError::InvalidNumber { field: "lon", source })?,
            geofence_radius: radius.to_i32().map_err(|source| RequestError::InvalidNumber {
                field: "geofence_radius",
                source,
            })?,
            place_type: self
                .place_type
                .unwrap_or_else(|| DEFAULT_PLACE_TYPE.to_string()),
        })
    }
}

/// Response for listing places.
#[derive(Debug, Clone, Serialize)]
pub struct ListPlacesResponse {
    pub success: bool,
    pub places: Vec<Place>,
}

/// Response for a newly registered place.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceCreatedResponse {
    pub success: bool,
    pub message: String,
    pub place: Place,
}
