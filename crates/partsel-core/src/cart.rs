//! # Carts
//!
//! Per-session shopping carts. Adding a component that is already in the
//! cart raises its quantity instead of adding a second line.

use serde::{Deserialize, Serialize};

use crate::pricing::line_total;
use crate::primitives::MAX_CART_ITEMS;
use crate::types::{ComponentId, PartselError};

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub component_id: ComponentId,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub session_id: String,
    #[serde(rename = "components")]
    pub items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            items: Vec::new(),
        }
    }

    /// Add an item, merging quantities with an existing line for the same component.
    pub fn add(&mut self, item: CartItem) -> Result<(), PartselError> {
        if item.quantity == 0 {
            return Err(PartselError::InvalidComponent(
                "quantity must be at least 1".to_string(),
            ));
        }
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.component_id == item.component_id)
        {
            line.quantity = line.quantity.saturating_add(item.quantity);
            return Ok(());
        }
        if self.items.len() >= MAX_CART_ITEMS {
            return Err(PartselError::InvalidComponent(format!(
                "cart holds at most {MAX_CART_ITEMS} lines"
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the line for `component_id`. Returns whether a line was removed.
    pub fn remove(&mut self, component_id: ComponentId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.component_id != component_id);
        self.items.len() != before
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of line totals; lines whose price does not parse are skipped.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .filter_map(|line| {
                line.price
                    .as_deref()
                    .and_then(|price| line_total(price, line.quantity))
            })
            .sum()
    }
}
