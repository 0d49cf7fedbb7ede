//! Summit - a small REST service for named geographic peaks
//!
//! Summit exposes CRUD plus a bounding-box query over a table of peaks
//! (name, altitude, latitude, longitude) backed by a relational database:
//! - PostgreSQL for deployments, SQLite for local runs and tests
//! - Simple HTTP API with JSON bodies
//! - Static map page and a machine-readable API description

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
