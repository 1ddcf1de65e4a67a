//! # Catalog
//!
//! Component storage for the selection engine.
//!
//! This module defines the `CatalogStore` trait and its in-memory
//! implementation. All maps are `BTreeMap` for deterministic ordering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cart::Cart;
use crate::history::SelectionRecord;
use crate::primitives::MAX_HISTORY_LIMIT;
use crate::ranking::SpecificationSource;
use crate::types::{Component, ComponentId, Family, NewComponent, PartselError};

// =============================================================================
// CATALOGSTORE TRAIT
// =============================================================================

/// Storage operations shared by the in-memory and redb backends.
///
/// All fallible operations return `Result<T, PartselError>` so both
/// backends can be driven uniformly.
pub trait CatalogStore {
    /// Validate and insert a component. Part numbers must be unique.
    fn insert_component(&mut self, component: NewComponent) -> Result<ComponentId, PartselError>;

    /// Look up one component.
    fn get_component(&self, id: ComponentId) -> Result<Option<Component>, PartselError>;

    /// Every component, in id order.
    fn all_components(&self) -> Result<Vec<Component>, PartselError>;

    fn component_count(&self) -> Result<usize, PartselError>;

    /// Append a selection record. Returns the id the store assigned.
    fn record_selection(&mut self, record: SelectionRecord) -> Result<u64, PartselError>;

    /// Most recent selection records first, at most `limit`.
    fn history(&self, limit: usize) -> Result<Vec<SelectionRecord>, PartselError>;

    fn history_len(&self) -> Result<usize, PartselError>;

    fn load_cart(&self, session_id: &str) -> Result<Option<Cart>, PartselError>;

    /// Insert or replace the cart for `cart.session_id`.
    fn save_cart(&mut self, cart: &Cart) -> Result<(), PartselError>;
}

/// Components of one family in catalog order.
pub fn family_components<S: CatalogStore + ?Sized>(
    store: &S,
    family: Family,
) -> Result<Vec<Component>, PartselError> {
    let mut components: Vec<_> = store
        .all_components()?
        .into_iter()
        .filter(|component| component.family == family)
        .collect();
    sort_catalog(&mut components, SortOrder::RatingDesc);
    Ok(components)
}

// =============================================================================
// LISTING
// =============================================================================

/// Listing order. The default (rating descending, then id) is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    RatingDesc,
    RatingAsc,
    IdAsc,
    IdDesc,
}

impl SortOrder {
    /// Parse an ordering query value: `rating`, `-rating`, `id`, `-id`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "-rating" => Some(SortOrder::RatingDesc),
            "rating" => Some(SortOrder::RatingAsc),
            "id" => Some(SortOrder::IdAsc),
            "-id" => Some(SortOrder::IdDesc),
            _ => None,
        }
    }
}

/// Sort components; ties always fall back to ascending id.
pub fn sort_catalog(components: &mut [Component], order: SortOrder) {
    match order {
        SortOrder::RatingDesc => components.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| a.id.cmp(&b.id))
        }),
        SortOrder::RatingAsc => components.sort_by(|a, b| {
            a.rating
                .total_cmp(&b.rating)
                .then_with(|| a.id.cmp(&b.id))
        }),
        SortOrder::IdAsc => components.sort_by_key(|c| c.id),
        SortOrder::IdDesc => components.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

/// Filter for catalog listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentFilter {
    pub family: Option<Family>,
    /// Exact manufacturer match, ignoring case.
    pub manufacturer: Option<String>,
    /// Substring of name, part number or manufacturer, ignoring case.
    pub search: Option<String>,
    pub order: SortOrder,
}

impl ComponentFilter {
    #[must_use]
    pub fn matches(&self, component: &Component) -> bool {
        if self.family.is_some_and(|family| family != component.family) {
            return false;
        }
        if self
            .manufacturer
            .as_ref()
            .is_some_and(|m| !component.manufacturer.eq_ignore_ascii_case(m.trim()))
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty()
                && ![&component.name, &component.part_number, &component.manufacturer]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        true
    }

    /// Apply the filter and ordering to a store's components.
    pub fn apply<S: CatalogStore + ?Sized>(&self, store: &S) -> Result<Vec<Component>, PartselError> {
        let mut components: Vec<_> = store
            .all_components()?
            .into_iter()
            .filter(|component| self.matches(component))
            .collect();
        sort_catalog(&mut components, self.order);
        Ok(components)
    }
}

// =============================================================================
// IN-MEMORY CATALOG
// =============================================================================

/// In-memory catalog.
///
/// Uses `BTreeMap` exclusively for deterministic ordering.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    components: BTreeMap<ComponentId, Component>,
    /// part number -> id
    part_numbers: BTreeMap<String, ComponentId>,
    history: BTreeMap<u64, SelectionRecord>,
    carts: BTreeMap<String, Cart>,
    next_component_id: u64,
    next_history_id: u64,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for Catalog {
    fn insert_component(&mut self, component: NewComponent) -> Result<ComponentId, PartselError> {
        component.validate()?;
        if self.part_numbers.contains_key(&component.part_number) {
            return Err(PartselError::DuplicatePartNumber(component.part_number));
        }

        self.next_component_id = self.next_component_id.saturating_add(1);
        let id = ComponentId(self.next_component_id);
        self.part_numbers.insert(component.part_number.clone(), id);
        self.components.insert(id, component.into_component(id));
        Ok(id)
    }

    fn get_component(&self, id: ComponentId) -> Result<Option<Component>, PartselError> {
        Ok(self.components.get(&id).cloned())
    }

    fn all_components(&self) -> Result<Vec<Component>, PartselError> {
        Ok(self.components.values().cloned().collect())
    }

    fn component_count(&self) -> Result<usize, PartselError> {
        Ok(self.components.len())
    }

    fn record_selection(&mut self, mut record: SelectionRecord) -> Result<u64, PartselError> {
        self.next_history_id = self.next_history_id.saturating_add(1);
        record.id = self.next_history_id;
        self.history.insert(record.id, record);
        Ok(self.next_history_id)
    }

    fn history(&self, limit: usize) -> Result<Vec<SelectionRecord>, PartselError> {
        Ok(self
            .history
            .values()
            .rev()
            .take(limit.min(MAX_HISTORY_LIMIT))
            .cloned()
            .collect())
    }

    fn history_len(&self) -> Result<usize, PartselError> {
        Ok(self.history.len())
    }

    fn load_cart(&self, session_id: &str) -> Result<Option<Cart>, PartselError> {
        Ok(self.carts.get(session_id).cloned())
    }

    fn save_cart(&mut self, cart: &Cart) -> Result<(), PartselError> {
        self.carts.insert(cart.session_id.clone(), cart.clone());
        Ok(())
    }
}

impl SpecificationSource for Catalog {
    fn components_of(&self, family: Family) -> Result<Vec<Component>, PartselError> {
        family_components(self, family)
    }
}

// =============================================================================
// SERIALIZATION
// =============================================================================

/// Serializable form of a [`Catalog`], used by the snapshot file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub components: Vec<Component>,
    pub history: Vec<SelectionRecord>,
    pub carts: Vec<Cart>,
    pub next_component_id: u64,
    pub next_history_id: u64,
}

impl From<&Catalog> for CatalogSnapshot {
    fn from(catalog: &Catalog) -> Self {
        Self {
            components: catalog.components.values().cloned().collect(),
            history: catalog.history.values().cloned().collect(),
            carts: catalog.carts.values().cloned().collect(),
            next_component_id: catalog.next_component_id,
            next_history_id: catalog.next_history_id,
        }
    }
}

impl From<CatalogSnapshot> for Catalog {
    fn from(snapshot: CatalogSnapshot) -> Self {
        let mut catalog = Catalog {
            next_component_id: snapshot.next_component_id,
            next_history_id: snapshot.next_history_id,
            ..Catalog::default()
        };
        for component in snapshot.components {
            catalog.next_component_id = catalog.next_component_id.max(component.id.0);
            catalog
                .part_numbers
                .insert(component.part_number.clone(), component.id);
            catalog.components.insert(component.id, component);
        }
        for record in snapshot.history {
            catalog.next_history_id = catalog.next_history_id.max(record.id);
            catalog.history.insert(record.id, record);
        }
        for cart in snapshot.carts {
            catalog.carts.insert(cart.session_id.clone(), cart);
        }
        catalog
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::RequirementSet;

    fn part(family: Family, name: &str, maker: &str, pn: &str, rating: f64) -> NewComponent {
        let mut new = NewComponent::new(family, name, maker, pn);
        new.rating = rating;
        new
    }

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .insert_component(part(Family::Bearing, "Ball Bearing 6008", "SKF", "6008-2RS", 4.8))
            .unwrap();
        catalog
            .insert_component(part(Family::Bearing, "Tapered Roller 30208", "Timken", "30208", 4.6))
            .unwrap();
        catalog
            .insert_component(part(Family::Motor, "IE3 1.5kW", "Siemens", "1LE1001", 4.9))
            .unwrap();
        catalog
            .insert_component(part(Family::Bearing, "Ball Bearing 6208", "SKF", "6208-ZZ", 4.8))
            .unwrap();
        catalog
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let catalog = seeded();
        assert_eq!(catalog.component_count().unwrap(), 4);
        let first = catalog.get_component(ComponentId(1)).unwrap().unwrap();
        assert_eq!(first.part_number, "6008-2RS");
        assert!(catalog.get_component(ComponentId(99)).unwrap().is_none());
    }

    #[test]
    fn duplicate_part_number_rejected() {
        let mut catalog = seeded();
        let err = catalog
            .insert_component(part(Family::Bearing, "Copy", "SKF", "6008-2RS", 4.0))
            .unwrap_err();
        assert!(matches!(err, PartselError::DuplicatePartNumber(pn) if pn == "6008-2RS"));
        assert_eq!(catalog.component_count().unwrap(), 4);
    }

    #[test]
    fn family_components_in_catalog_order() {
        let catalog = seeded();
        let ids: Vec<_> = catalog
            .components_of(Family::Bearing)
            .unwrap()
            .iter()
            .map(|c| c.id.0)
            .collect();
        // 4.8 (id 1), 4.8 (id 4), 4.6 (id 2)
        assert_eq!(ids, vec![1, 4, 2]);
    }

    #[test]
    fn filter_by_manufacturer_and_search() {
        let catalog = seeded();
        let filter = ComponentFilter {
            manufacturer: Some("skf".to_string()),
            ..ComponentFilter::default()
        };
        assert_eq!(filter.apply(&catalog).unwrap().len(), 2);

        let filter = ComponentFilter {
            search: Some("roller".to_string()),
            ..ComponentFilter::default()
        };
        let found = filter.apply(&catalog).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].manufacturer, "Timken");

        let filter = ComponentFilter {
            family: Some(Family::Motor),
            order: SortOrder::IdDesc,
            ..ComponentFilter::default()
        };
        assert_eq!(filter.apply(&catalog).unwrap()[0].id, ComponentId(3));
    }

    #[test]
    fn sort_order_parse() {
        assert_eq!(SortOrder::parse("-rating"), Some(SortOrder::RatingDesc));
        assert_eq!(SortOrder::parse("id"), Some(SortOrder::IdAsc));
        assert_eq!(SortOrder::parse("price"), None);
    }

    #[test]
    fn history_newest_first_with_limit() {
        let mut catalog = Catalog::new();
        for i in 0..5u8 {
            let record = SelectionRecord {
                id: 0,
                family: Family::Gear,
                requirements: RequirementSet::new(),
                component_id: ComponentId(1),
                component_name: "Spur Gear".to_string(),
                match_score: i,
                criteria: Vec::new(),
                recorded_at: format!("t{i}"),
            };
            catalog.record_selection(record).unwrap();
        }
        let recent = catalog.history(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, 5);
        assert_eq!(recent[0].match_score, 4);
        assert_eq!(catalog.history_len().unwrap(), 5);
    }

    #[test]
    fn snapshot_roundtrip_keeps_counters() {
        let mut catalog = seeded();
        let mut cart = Cart::new("bench");
        cart.items.push(crate::cart::CartItem {
            component_id: ComponentId(1),
            name: "Ball Bearing 6008".to_string(),
            quantity: 2,
            price: Some("$25-35".to_string()),
            manufacturer: Some("SKF".to_string()),
        });
        catalog.save_cart(&cart).unwrap();

        let restored = Catalog::from(CatalogSnapshot::from(&catalog));
        assert_eq!(restored.component_count().unwrap(), 4);
        assert_eq!(restored.load_cart("bench").unwrap(), Some(cart));

        let mut restored = restored;
        let id = restored
            .insert_component(part(Family::Gear, "Spur", "KHK", "SS2-20", 4.0))
            .unwrap();
        assert_eq!(id, ComponentId(5));
        assert!(
            restored
                .insert_component(part(Family::Gear, "Dup", "SKF", "30208", 4.0))
                .is_err()
        );
    }
}
