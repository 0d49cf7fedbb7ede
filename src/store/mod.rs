//! Peak store abstraction layer
//!
//! Provides a unified interface over PostgreSQL and SQLite backends

use async_trait::async_trait;
use std::sync::Arc;

use crate::types::{BoundingBox, NewPeak, Peak, PeakId};
use crate::Result;

pub mod postgres;
pub mod sqlite;

/// Peak store trait
#[async_trait]
pub trait PeakStore: Send + Sync {
    /// Create the peaks table if it does not exist
    async fn migrate(&self) -> Result<()>;

    /// Delete every peak and insert the nine reference records
    async fn reset_and_seed(&self) -> Result<()>;

    /// Insert a new peak; the store assigns the id
    async fn create(&self, peak: NewPeak) -> Result<Peak>;

    /// Fetch the peak with the given id
    async fn get(&self, id: PeakId) -> Result<Peak>;

    /// Fetch every peak, in store-defined order
    async fn list(&self) -> Result<Vec<Peak>>;

    /// Overwrite all non-id fields of the peak with the given id
    async fn update(&self, id: PeakId, peak: NewPeak) -> Result<()>;

    /// Remove the peak with the given id
    async fn delete(&self, id: PeakId) -> Result<()>;

    /// Fetch every peak inside the box, under the literal predicate
    async fn find_in_box(&self, bbox: &BoundingBox) -> Result<Vec<Peak>>;

    /// Number of stored peaks
    async fn count(&self) -> Result<i64>;
}

/// Store configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Postgres { url: String },
    Sqlite { path: String },
}

/// Create a store backend from config
pub async fn create_store(config: StoreConfig) -> Result<Arc<dyn PeakStore>> {
    match config {
        StoreConfig::Postgres { url } => {
            let store = postgres::PostgresStore::connect(&url).await?;
            Ok(Arc::new(store))
        }
        StoreConfig::Sqlite { path } => {
            let store = sqlite::SqliteStore::open(path).await?;
            Ok(Arc::new(store))
        }
    }
}
