//! Place repository for database operations.

use sqlx::PgPool;

use domain::models::NewPlace;

use crate::entities::PlaceEntity;
use crate::metrics::QueryTimer;

/// Repository for place-related database operations.
#[derive(Clone)]
pub struct PlaceRepository {
    pool: PgPool,
}

impl PlaceRepository {
    /// Creates a new PlaceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All places ordered by name.
    pub async fn find_all(&self) -> Result<Vec<PlaceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_places");
        let result = sqlx::query_as::<_, PlaceEntity>(
            r#"
            SELECT * FROM places ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All places in the order they were added. The geofence resolver scans
    /// in this order so that the earliest enclosing place wins.
    pub async fn find_all_in_scan_order(&self) -> Result<Vec<PlaceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_places_scan_order");
        let result = sqlx::query_as::<_, PlaceEntity>(
            r#"
            SELECT * FROM places ORDER BY created_at, name
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Whether a place with this name already exists.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("place_exists_by_name");
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM places WHERE name = $1)
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a place. The id is the place's name.
    pub async fn create(&self, place: &NewPlace) -> Result<PlaceEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_place");
        let result = sqlx::query_as::<_, PlaceEntity>(
            r#"
            INSERT INTO places (id, name, lat, lon, geofence_radius, type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(place.id())
        .bind(&place.name)
        .bind(place.lat)
        .bind(place.lon)
        .bind(place.geofence_radius)
        .bind(&place.place_type)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a place by id. Log entries that referenced it lose their place.
    /// Returns the number of rows removed.
    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_place");
        let result = sqlx::query(
            r#"
            DELETE FROM places WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
