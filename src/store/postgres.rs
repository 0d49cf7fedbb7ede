//! PostgreSQL peak store backend

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::types::{BoundingBox, NewPeak, Peak, PeakId, SEED_PEAKS};
use crate::{Error, Result};

use super::PeakStore;

const MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL-backed peak store
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect to the database at `url` and return a store over a pool.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(url)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PeakStore for PostgresStore {
    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS peaks (
                peak_id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                alt BIGINT NOT NULL,
                lat DOUBLE PRECISION NOT NULL,
                lon DOUBLE PRECISION NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn reset_and_seed(&self) -> Result<()> {
        sqlx::query("DELETE FROM peaks").execute(&self.pool).await?;

        for (name, alt, lat, lon) in SEED_PEAKS {
            sqlx::query("INSERT INTO peaks (name, alt, lat, lon) VALUES ($1, $2, $3, $4)")
                .bind(name)
                .bind(alt)
                .bind(lat)
                .bind(lon)
                .execute(&self.pool)
                .await?;
        }

        tracing::info!(count = SEED_PEAKS.len(), "Seeded reference peaks");
        Ok(())
    }

    async fn create(&self, peak: NewPeak) -> Result<Peak> {
        let created = sqlx::query_as::<_, Peak>(
            "INSERT INTO peaks (name, alt, lat, lon) VALUES ($1, $2, $3, $4)
             RETURNING peak_id, name, alt, lat, lon",
        )
        .bind(&peak.name)
        .bind(peak.alt)
        .bind(peak.lat)
        .bind(peak.lon)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get(&self, id: PeakId) -> Result<Peak> {
        sqlx::query_as::<_, Peak>(
            "SELECT peak_id, name, alt, lat, lon FROM peaks WHERE peak_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(Error::PeakNotFound(id))
    }

    async fn list(&self) -> Result<Vec<Peak>> {
        let peaks =
            sqlx::query_as::<_, Peak>("SELECT peak_id, name, alt, lat, lon FROM peaks")
                .fetch_all(&self.pool)
                .await?;

        Ok(peaks)
    }

    async fn update(&self, id: PeakId, peak: NewPeak) -> Result<()> {
        let result = sqlx::query(
            "UPDATE peaks SET name = $1, alt = $2, lat = $3, lon = $4 WHERE peak_id = $5",
        )
        .bind(&peak.name)
        .bind(peak.alt)
        .bind(peak.lat)
        .bind(peak.lon)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::PeakNotFound(id));
        }

        Ok(())
    }

    async fn delete(&self, id: PeakId) -> Result<()> {
        let result = sqlx::query("DELETE FROM peaks WHERE peak_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::PeakNotFound(id));
        }

        Ok(())
    }

    async fn find_in_box(&self, bbox: &BoundingBox) -> Result<Vec<Peak>> {
        // Applied literally; an inverted box yields an empty set.
        let peaks = sqlx::query_as::<_, Peak>(
            "SELECT peak_id, name, alt, lat, lon FROM peaks
             WHERE lat <= $1 AND lon >= $2 AND lat >= $3 AND lon <= $4",
        )
        .bind(bbox.lat_max)
        .bind(bbox.lon_min)
        .bind(bbox.lat_min)
        .bind(bbox.lon_max)
        .fetch_all(&self.pool)
        .await?;

        Ok(peaks)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM peaks")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
