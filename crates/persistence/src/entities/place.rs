//! Place entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Place;

/// Database row mapping for the places table.
#[derive(Debug, Clone, FromRow)]
pub struct PlaceEntity {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub geofence_radius: i32,
    #[sqlx(rename = "type")]
    pub place_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<PlaceEntity> for Place {
    fn from(entity: PlaceEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            lat: entity.lat,
            lon: entity.lon,
            geofence_radius: entity.geofence_radius,
            place_type: entity.place_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_entity_to_domain() {
        let entity = PlaceEntity {
            id: "office".to_string(),
            name: "office".to_string(),
            lat: 12.9716,
            lon: 77.5946,
            geofence_radius: 150,
            place_type: "work".to_string(),
            created_at: Utc::now(),
        };
        let place: Place = entity.clone().into();

        assert_eq!(place.id, entity.id);
        assert_eq!(place.name, entity.name);
        assert_eq!(place.lat, entity.lat);
        assert_eq!(place.lon, entity.lon);
        assert_eq!(place.geofence_radius, 150);
        assert_eq!(place.place_type, "work");
    }
}
