//! # partsel-core
//!
//! The criteria-matching engine for picking commercial off-the-shelf
//! mechanical components: bearings, motors, gears, seals and fasteners.
//!
//! Given a family tag and a set of engineering requirements, the engine
//! compares each cataloged component's specification record against a
//! declarative per-family rule table, produces a pass/fail verdict per
//! criterion, reduces the verdicts to an integer match score, and ranks.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no network dependencies, no logging
//! - Deterministic: `BTreeMap` ordering, stable sorts, no clock reads
//! - Rule tables are data; one evaluator interprets them
//! - Catalog, history and carts sit behind the `CatalogStore` trait with
//!   an in-memory and a redb implementation

// =============================================================================
// MODULES
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod evaluator;
pub mod formats;
pub mod history;
pub mod pricing;
pub mod primitives;
pub mod ranking;
pub mod report;
pub mod rules;
pub mod score;
pub mod storage;
pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Alternative, Component, ComponentId, ComponentSpec, CriterionResult, EvaluationOutcome,
    Family, MetricResult, NewComponent, PartselError, RequirementSet, RequirementValue,
    SpecAttribute, Weight, format_quantity,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use evaluator::{evaluate, evaluate_family, family_metrics, performance_metrics};
pub use ranking::{Ranking, Recommendation, SpecificationSource, rank, rank_family};
pub use score::MatchScore;

// =============================================================================
// RE-EXPORTS: Collaborators
// =============================================================================

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, CatalogStore, ComponentFilter, SortOrder};
pub use history::SelectionRecord;
pub use storage::RedbCatalog;
pub use store::{StorageBackend, Store, StoreStats};

// =============================================================================
// RE-EXPORTS: Formats
// =============================================================================

pub use formats::{SnapshotHeader, catalog_from_bytes, catalog_to_bytes};
