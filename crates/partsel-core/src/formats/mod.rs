//! # Formats
//!
//! On-disk representations owned by the core. File I/O stays in the app.

pub mod persistence;

pub use persistence::{SnapshotHeader, catalog_from_bytes, catalog_to_bytes};
