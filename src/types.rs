//! Core types for summit

use serde::{Deserialize, Serialize};

/// Peak ID type (surrogate key assigned by the store)
pub type PeakId = i64;

/// A named geographic point with an altitude
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Peak {
    #[sqlx(rename = "peak_id")]
    pub id: PeakId,
    pub name: String,
    /// Altitude in meters
    pub alt: i64,
    /// Latitude in degrees; no range validation is applied
    pub lat: f64,
    /// Longitude in degrees; no range validation is applied
    pub lon: f64,
}

/// Payload for creating or overwriting a peak. All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPeak {
    pub name: String,
    pub alt: i64,
    pub lat: f64,
    pub lon: f64,
}

/// A rectangular latitude/longitude region.
///
/// The matching predicate is applied literally, with no normalization:
/// `lat <= lat_max AND lon >= lon_min AND lat >= lat_min AND lon <= lon_max`.
/// A box with `lat_max < lat_min` therefore matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_max: f64,
    pub lon_min: f64,
    pub lat_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// True when `peak` lies inside the box under the literal predicate.
    pub fn contains(&self, peak: &Peak) -> bool {
        peak.lat <= self.lat_max
            && peak.lon >= self.lon_min
            && peak.lat >= self.lat_min
            && peak.lon <= self.lon_max
    }
}

/// The nine reference peaks inserted by `reset_and_seed`.
pub const SEED_PEAKS: [(&str, i64, f64, f64); 9] = [
    ("Everest", 8848, 27.9860, 86.9226),
    ("Aconcagua", 6959, -32.6531, -70.0108),
    ("Denali", 6190, 63.0695, -151.0074),
    ("Kilimandjaro", 5892, -3.0656, 37.3520),
    ("Elbrouz", 5642, 43.3212, 42.4374),
    ("Massif Vinson", 4892, -78.5338, -85.5341),
    ("Puncak Jaya", 4884, -4.1218, 137.1602),
    ("Mont Blanc", 4809, 45.803, 6.8651),
    ("Mont Kosciuszko", 2228, -36.4909, 148.2632),
];
