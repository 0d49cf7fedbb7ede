//! SQLite peak store backend
//!
//! Used for local runs and tests; the production backend is PostgreSQL.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::types::{BoundingBox, NewPeak, Peak, PeakId, SEED_PEAKS};
use crate::{Error, Result};

use super::PeakStore;

/// SQLite-backed peak store
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Open (creating if missing) the database file at `path`.
    pub async fn open(path: impl AsRef<str>) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.as_ref()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            // Prevent transient "database is locked" errors under concurrent access.
            .busy_timeout(Duration::from_secs(5));

        // SQLite permits limited write concurrency; a single connection avoids
        // "database is locked" failures under axum concurrency.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl PeakStore for SqliteStore {
    async fn migrate(&self) -> Result<()> {
        // AUTOINCREMENT keeps ids from being reused after deletion.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS peaks (
                peak_id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                alt INTEGER NOT NULL,
                lat REAL NOT NULL,
                lon REAL NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn reset_and_seed(&self) -> Result<()> {
        sqlx::query("DELETE FROM peaks").execute(&self.pool).await?;

        for (name, alt, lat, lon) in SEED_PEAKS {
            sqlx::query("INSERT INTO peaks (name, alt, lat, lon) VALUES (?, ?, ?, ?)")
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
            "INSERT INTO peaks (name, alt, lat, lon) VALUES (?, ?, ?, ?)
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
            "SELECT peak_id, name, alt, lat, lon FROM peaks WHERE peak_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(Error::PeakNotFound(id))
    }

    async fn list(&self) -> Result<Vec<Peak>> {
        let peaks = sqlx::query_as::<_, Peak>("SELECT peak_id, name, alt, lat, lon FROM peaks")
            .fetch_all(&self.pool)
            .await?;

        Ok(peaks)
    }

    async fn update(&self, id: PeakId, peak: NewPeak) -> Result<()> {
        let result =
            sqlx::query("UPDATE peaks SET name = ?, alt = ?, lat = ?, lon = ? WHERE peak_id = ?")
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
        let result = sqlx::query("DELETE FROM peaks WHERE peak_id = ?")
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
             WHERE lat <= ? AND lon >= ? AND lat >= ? AND lon <= ?",
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
