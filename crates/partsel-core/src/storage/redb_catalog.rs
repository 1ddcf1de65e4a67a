//! # redb-backed Catalog Storage
//!
//! A disk-backed catalog using the redb embedded database:
//! - ACID transactions (component + part-number index written together)
//! - Crash safety (copy-on-write B-trees)
//! - MVCC (concurrent readers, single writer)
//!
//! Values are postcard-encoded; keys are ids, part numbers and session ids.

use crate::cart::Cart;
use crate::catalog::{CatalogStore, family_components};
use crate::history::SelectionRecord;
use crate::primitives::MAX_HISTORY_LIMIT;
use crate::ranking::SpecificationSource;
use crate::{Component, ComponentId, Family, NewComponent, PartselError};
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;

/// Table for components: ComponentId(u64) -> serialized Component bytes
const COMPONENTS: TableDefinition<u64, &[u8]> = TableDefinition::new("components");

/// Table for the part number index: part number -> ComponentId(u64)
const PART_NUMBERS: TableDefinition<&str, u64> = TableDefinition::new("part_numbers");

/// Table for selection history: record id -> serialized SelectionRecord bytes
const HISTORY: TableDefinition<u64, &[u8]> = TableDefinition::new("history");

/// Table for carts: session id -> serialized Cart bytes
const CARTS: TableDefinition<&str, &[u8]> = TableDefinition::new("carts");

/// Table for metadata: key string -> value u64
const METADATA: TableDefinition<&str, u64> = TableDefinition::new("metadata");

const NEXT_COMPONENT_ID: &str = "next_component_id";
const NEXT_HISTORY_ID: &str = "next_history_id";

/// A disk-backed catalog store using redb.
pub struct RedbCatalog {
    db: Database,
    next_component_id: u64,
    next_history_id: u64,
}

impl std::fmt::Debug for RedbCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbCatalog")
            .field("next_component_id", &self.next_component_id)
            .field("next_history_id", &self.next_history_id)
            .finish_non_exhaustive()
    }
}

impl RedbCatalog {
    /// Open or create a catalog database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PartselError> {
        let db =
            Database::create(path.as_ref()).map_err(|e| PartselError::IoError(e.to_string()))?;

        // Initialize tables if they don't exist
        {
            let write_txn = db
                .begin_write()
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            let _ = write_txn
                .open_table(COMPONENTS)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            let _ = write_txn
                .open_table(PART_NUMBERS)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            let _ = write_txn
                .open_table(HISTORY)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            let _ = write_txn
                .open_table(CARTS)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            let _ = write_txn
                .open_table(METADATA)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            write_txn
                .commit()
                .map_err(|e| PartselError::IoError(e.to_string()))?;
        }

        let (next_component_id, next_history_id) = {
            let read_txn = db
                .begin_read()
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            let table = read_txn
                .open_table(METADATA)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            let component = table
                .get(NEXT_COMPONENT_ID)
                .map_err(|e| PartselError::IoError(e.to_string()))?
                .map(|v| v.value())
                .unwrap_or(0);
            let history = table
                .get(NEXT_HISTORY_ID)
                .map_err(|e| PartselError::IoError(e.to_string()))?
                .map(|v| v.value())
                .unwrap_or(0);
            (component, history)
        };

        Ok(Self {
            db,
            next_component_id,
            next_history_id,
        })
    }

    /// Compact the database file.
    pub fn compact(&mut self) -> Result<(), PartselError> {
        self.db
            .compact()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        Ok(())
    }
}

// =============================================================================
// CATALOGSTORE TRAIT IMPLEMENTATION
// =============================================================================

impl CatalogStore for RedbCatalog {
    fn insert_component(&mut self, component: NewComponent) -> Result<ComponentId, PartselError> {
        component.validate()?;

        let id = ComponentId(self.next_component_id.saturating_add(1));
        let part_number = component.part_number.clone();
        let stored = component.into_component(id);
        let bytes = postcard::to_allocvec(&stored)
            .map_err(|e| PartselError::SerializationError(e.to_string()))?;

        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        {
            let mut index = write_txn
                .open_table(PART_NUMBERS)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            let taken = index
                .get(part_number.as_str())
                .map_err(|e| PartselError::IoError(e.to_string()))?
                .is_some();
            if taken {
                // dropping the transaction without commit aborts it
                return Err(PartselError::DuplicatePartNumber(part_number));
            }
            index
                .insert(part_number.as_str(), id.0)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
        }
        {
            let mut components = write_txn
                .open_table(COMPONENTS)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            components
                .insert(id.0, bytes.as_slice())
                .map_err(|e| PartselError::IoError(e.to_string()))?;
        }
        {
            let mut meta = write_txn
                .open_table(METADATA)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            meta.insert(NEXT_COMPONENT_ID, id.0)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| PartselError::IoError(e.to_string()))?;

        // Update in-memory state only after successful commit.
        self.next_component_id = id.0;
        Ok(id)
    }

    fn get_component(&self, id: ComponentId) -> Result<Option<Component>, PartselError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        let table = read_txn
            .open_table(COMPONENTS)
            .map_err(|e| PartselError::IoError(e.to_string()))?;

        match table
            .get(id.0)
            .map_err(|e| PartselError::IoError(e.to_string()))?
        {
            Some(value) => {
                let component: Component = postcard::from_bytes(value.value())
                    .map_err(|e| PartselError::DeserializationError(e.to_string()))?;
                Ok(Some(component))
            }
            None => Ok(None),
        }
    }

    fn all_components(&self) -> Result<Vec<Component>, PartselError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        let table = read_txn
            .open_table(COMPONENTS)
            .map_err(|e| PartselError::IoError(e.to_string()))?;

        let mut components = Vec::new();
        for entry in table
            .iter()
            .map_err(|e| PartselError::IoError(e.to_string()))?
        {
            let (_, value) = entry.map_err(|e| PartselError::IoError(e.to_string()))?;
            let component: Component = postcard::from_bytes(value.value())
                .map_err(|e| PartselError::DeserializationError(e.to_string()))?;
            components.push(component);
        }
        Ok(components)
    }

    fn component_count(&self) -> Result<usize, PartselError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        let table = read_txn
            .open_table(COMPONENTS)
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        let count = table
            .len()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        Ok(count as usize)
    }

    fn record_selection(&mut self, mut record: SelectionRecord) -> Result<u64, PartselError> {
        let id = self.next_history_id.saturating_add(1);
        record.id = id;
        let bytes = postcard::to_allocvec(&record)
            .map_err(|e| PartselError::SerializationError(e.to_string()))?;

        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        {
            let mut history = write_txn
                .open_table(HISTORY)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            history
                .insert(id, bytes.as_slice())
                .map_err(|e| PartselError::IoError(e.to_string()))?;
        }
        {
            let mut meta = write_txn
                .open_table(METADATA)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            meta.insert(NEXT_HISTORY_ID, id)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| PartselError::IoError(e.to_string()))?;

        self.next_history_id = id;
        Ok(id)
    }

    fn history(&self, limit: usize) -> Result<Vec<SelectionRecord>, PartselError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        let table = read_txn
            .open_table(HISTORY)
            .map_err(|e| PartselError::IoError(e.to_string()))?;

        let mut records = Vec::new();
        for entry in table
            .iter()
            .map_err(|e| PartselError::IoError(e.to_string()))?
            .rev()
            .take(limit.min(MAX_HISTORY_LIMIT))
        {
            let (_, value) = entry.map_err(|e| PartselError::IoError(e.to_string()))?;
            let record: SelectionRecord = postcard::from_bytes(value.value())
                .map_err(|e| PartselError::DeserializationError(e.to_string()))?;
            records.push(record);
        }
        Ok(records)
    }

    fn history_len(&self) -> Result<usize, PartselError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        let table = read_txn
            .open_table(HISTORY)
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        let count = table
            .len()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        Ok(count as usize)
    }

    fn load_cart(&self, session_id: &str) -> Result<Option<Cart>, PartselError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        let table = read_txn
            .open_table(CARTS)
            .map_err(|e| PartselError::IoError(e.to_string()))?;

        match table
            .get(session_id)
            .map_err(|e| PartselError::IoError(e.to_string()))?
        {
            Some(value) => {
                let cart: Cart = postcard::from_bytes(value.value())
                    .map_err(|e| PartselError::DeserializationError(e.to_string()))?;
                Ok(Some(cart))
            }
            None => Ok(None),
        }
    }

    fn save_cart(&mut self, cart: &Cart) -> Result<(), PartselError> {
        let bytes = postcard::to_allocvec(cart)
            .map_err(|e| PartselError::SerializationError(e.to_string()))?;

        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        {
            let mut carts = write_txn
                .open_table(CARTS)
                .map_err(|e| PartselError::IoError(e.to_string()))?;
            carts
                .insert(cart.session_id.as_str(), bytes.as_slice())
                .map_err(|e| PartselError::IoError(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| PartselError::IoError(e.to_string()))?;
        Ok(())
    }
}

impl SpecificationSource for RedbCatalog {
    fn components_of(&self, family: Family) -> Result<Vec<Component>, PartselError> {
        family_components(self, family)
    }
}
