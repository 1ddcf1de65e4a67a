//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use super::error::ApiError;
use partsel_core::{
    Cart, ComponentFilter, Family, PartselError, Recommendation, RequirementSet, RequirementValue,
    SortOrder, StoreStats, primitives::MAX_REQUIREMENT_FIELDS,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STATUS RESPONSE
// =============================================================================

/// Catalog status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub total_components: usize,
    pub components_by_family: BTreeMap<Family, usize>,
    pub history_records: usize,
    pub persistent: bool,
}

impl StatusResponse {
    pub fn new(stats: StoreStats, persistent: bool) -> Self {
        Self {
            total_components: stats.total_components,
            components_by_family: stats.components_by_family,
            history_records: stats.history_records,
            persistent,
        }
    }
}

// =============================================================================
// COMPONENT LISTING
// =============================================================================

/// Query string for `GET /components`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentListQuery {
    pub component_type: Option<String>,
    pub manufacturer: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl ComponentListQuery {
    /// Build a catalog filter. Unknown orderings fall back to `-rating`.
    pub fn to_filter(&self) -> Result<ComponentFilter, PartselError> {
        let family = match self.component_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(tag) => Some(tag.parse::<Family>()?),
        };
        Ok(ComponentFilter {
            family,
            manufacturer: self.manufacturer.clone().filter(|m| !m.trim().is_empty()),
            search: self.search.clone(),
            order: self
                .ordering
                .as_deref()
                .and_then(SortOrder::parse)
                .unwrap_or_default(),
        })
    }
}

// =============================================================================
// SELECT PARTS
// =============================================================================

/// A selection request: `{componentType, ...requirements}` flattened in one object.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectPartsRequest {
    pub component_type: String,
    pub requirements: RequirementSet,
}

impl SelectPartsRequest {
    /// Split a request body into the family tag and the requirement set.
    pub fn from_body(mut body: Map<String, Value>) -> Result<Self, ApiError> {
        let component_type = match body.remove("componentType") {
            Some(Value::String(tag)) if !tag.trim().is_empty() => tag,
            _ => return Err(ApiError::bad_request("componentType is required")),
        };
        Ok(Self {
            component_type,
            requirements: requirements_from_json(body)?,
        })
    }
}

/// Convert a JSON object of requirement fields into a `RequirementSet`.
///
/// `null` values are treated as absent. Booleans, arrays and objects are
/// kept as their JSON text, so numeric fields holding them fail to parse.
pub fn requirements_from_json(fields: Map<String, Value>) -> Result<RequirementSet, PartselError> {
    if fields.len() > MAX_REQUIREMENT_FIELDS {
        return Err(PartselError::InvalidRequirement {
            field: "requirements".to_string(),
            value: format!("{} fields (maximum {})", fields.len(), MAX_REQUIREMENT_FIELDS),
        });
    }
    Ok(fields
        .into_iter()
        .filter_map(|(field, value)| requirement_value(value).map(|v| (field, v)))
        .collect())
}

fn requirement_value(value: Value) -> Option<RequirementValue> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) => RequirementValue::number_as_written(f, n.to_string()),
            None => RequirementValue::Text(n.to_string()),
        }),
        Value::String(s) => Some(RequirementValue::Text(s)),
        other => Some(RequirementValue::Text(other.to_string())),
    }
}

/// Ranked recommendations for a selection request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectPartsResponse {
    pub recommendations: Vec<Recommendation>,
    pub total_matches: usize,
    pub timestamp: String,
}

// =============================================================================
// HISTORY
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

// =============================================================================
// CART
// =============================================================================

/// Query string for the cart endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartQuery {
    pub session_id: Option<String>,
    pub component_id: Option<u64>,
}

impl CartQuery {
    /// The session id, `"default"` when absent or blank.
    pub fn session(&self) -> &str {
        self.session_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("default")
    }
}

/// A cart with its derived totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    #[serde(flatten)]
    pub cart: Cart,
    pub item_count: u64,
    pub total_price: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            item_count: cart.item_count(),
            total_price: cart.total_price(),
            cart,
        }
    }
}
