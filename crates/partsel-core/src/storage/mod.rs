//! # Persistent Storage
//!
//! Disk-backed implementations of [`crate::catalog::CatalogStore`].

pub mod redb_catalog;

pub use redb_catalog::RedbCatalog;
