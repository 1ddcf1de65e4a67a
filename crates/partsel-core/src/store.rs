//! # Store Module
//!
//! The façade the CLI and HTTP server drive: catalog, ranking, history and
//! carts behind one type.
//!
//! ## Storage Backends
//!
//! - `InMemory`: in-memory `Catalog` (fast, volatile unless saved as a snapshot)
//! - `Persistent`: `RedbCatalog` for disk-backed ACID storage

use std::collections::BTreeMap;
use std::path::Path;

use crate::cart::{Cart, CartItem};
use crate::catalog::{Catalog, CatalogStore, ComponentFilter, family_components};
use crate::history::SelectionRecord;
use crate::ranking::{Ranking, SpecificationSource, rank};
use crate::storage::RedbCatalog;
use crate::{Component, ComponentId, Family, NewComponent, PartselError, RequirementSet};

/// Storage backend for a Store.
#[derive(Debug)]
pub enum StorageBackend {
    /// In-memory catalog (fast, volatile).
    InMemory(Catalog),
    /// Disk-backed catalog using redb (ACID, persistent).
    Persistent(RedbCatalog),
}

impl Default for StorageBackend {
    fn default() -> Self {
        Self::InMemory(Catalog::new())
    }
}

/// Per-family component counts plus history length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub components_by_family: BTreeMap<Family, usize>,
    pub total_components: usize,
    pub history_records: usize,
}

/// Catalog, ranking, history and carts over one storage backend.
#[derive(Debug, Default)]
pub struct Store {
    backend: StorageBackend,
}

impl Store {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing in-memory catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            backend: StorageBackend::InMemory(catalog),
        }
    }

    /// Open or create a redb database at the given path.
    pub fn with_redb(path: impl AsRef<Path>) -> Result<Self, PartselError> {
        Ok(Self {
            backend: StorageBackend::Persistent(RedbCatalog::open(path)?),
        })
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        matches!(self.backend, StorageBackend::Persistent(_))
    }

    /// The in-memory catalog, or `None` for persistent backends.
    #[must_use]
    pub fn catalog_opt(&self) -> Option<&Catalog> {
        match &self.backend {
            StorageBackend::InMemory(catalog) => Some(catalog),
            StorageBackend::Persistent(_) => None,
        }
    }

    fn catalog(&self) -> &dyn CatalogStore {
        match &self.backend {
            StorageBackend::InMemory(catalog) => catalog,
            StorageBackend::Persistent(redb) => redb,
        }
    }

    fn catalog_mut(&mut self) -> &mut dyn CatalogStore {
        match &mut self.backend {
            StorageBackend::InMemory(catalog) => catalog,
            StorageBackend::Persistent(redb) => redb,
        }
    }

    // =========================================================================
    // CATALOG
    // =========================================================================

    pub fn insert_component(&mut self, component: NewComponent) -> Result<ComponentId, PartselError> {
        self.catalog_mut().insert_component(component)
    }

    /// Insert many components, stopping at the first failure.
    ///
    /// Components inserted before the failure stay inserted.
    pub fn import_components(
        &mut self,
        components: Vec<NewComponent>,
    ) -> Result<Vec<ComponentId>, PartselError> {
        let mut ids = Vec::with_capacity(components.len());
        for component in components {
            ids.push(self.insert_component(component)?);
        }
        Ok(ids)
    }

    pub fn get_component(&self, id: ComponentId) -> Result<Option<Component>, PartselError> {
        self.catalog().get_component(id)
    }

    /// Look up a component, treating absence as `NotFound`.
    pub fn require_component(&self, id: ComponentId) -> Result<Component, PartselError> {
        self.get_component(id)?
            .ok_or_else(|| PartselError::NotFound(format!("component {id}")))
    }

    pub fn list_components(&self, filter: &ComponentFilter) -> Result<Vec<Component>, PartselError> {
        filter.apply(self.catalog())
    }

    pub fn component_count(&self) -> Result<usize, PartselError> {
        self.catalog().component_count()
    }

    pub fn stats(&self) -> Result<StoreStats, PartselError> {
        let mut stats = StoreStats {
            components_by_family: Family::ALL.iter().map(|f| (*f, 0)).collect(),
            ..StoreStats::default()
        };
        for component in self.catalog().all_components()? {
            *stats
                .components_by_family
                .entry(component.family)
                .or_insert(0) += 1;
            stats.total_components += 1;
        }
        stats.history_records = self.catalog().history_len()?;
        Ok(stats)
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Rank the components of a family tag against `requirements`.
    pub fn rank(
        &self,
        family_tag: &str,
        requirements: &RequirementSet,
    ) -> Result<Ranking, PartselError> {
        rank(family_tag, requirements, self)
    }

    pub fn record_selection(&mut self, record: SelectionRecord) -> Result<u64, PartselError> {
        self.catalog_mut().record_selection(record)
    }

    pub fn history(&self, limit: usize) -> Result<Vec<SelectionRecord>, PartselError> {
        self.catalog().history(limit)
    }

    pub fn history_len(&self) -> Result<usize, PartselError> {
        self.catalog().history_len()
    }

    // =========================================================================
    // CARTS
    // =========================================================================

    /// The cart for `session_id`, created and saved if it does not exist yet.
    pub fn cart(&mut self, session_id: &str) -> Result<Cart, PartselError> {
        if let Some(cart) = self.catalog().load_cart(session_id)? {
            return Ok(cart);
        }
        let cart = Cart::new(session_id);
        self.catalog_mut().save_cart(&cart)?;
        Ok(cart)
    }

    /// Add an item to a session's cart, creating the cart if needed.
    pub fn add_to_cart(&mut self, session_id: &str, item: CartItem) -> Result<Cart, PartselError> {
        let mut cart = self.cart(session_id)?;
        cart.add(item)?;
        self.catalog_mut().save_cart(&cart)?;
        Ok(cart)
    }

    /// Remove a component from an existing cart.
    ///
    /// A missing cart is `NotFound`; a component not in the cart is a no-op.
    pub fn remove_from_cart(
        &mut self,
        session_id: &str,
        component_id: ComponentId,
    ) -> Result<Cart, PartselError> {
        let mut cart = self
            .catalog()
            .load_cart(session_id)?
            .ok_or_else(|| PartselError::NotFound(format!("cart '{session_id}'")))?;
        if cart.remove(component_id) {
            self.catalog_mut().save_cart(&cart)?;
        }
        Ok(cart)
    }
}

impl SpecificationSource for Store {
    fn components_of(&self, family: Family) -> Result<Vec<Component>, PartselError> {
        family_components(self.catalog(), family)
    }
}

// =============================================================================
// TESTS
// =============================================================================
