//! # Core Type Definitions
//!
//! This module contains the shared vocabulary of the selection engine:
//! - Component families and criterion weights (`Family`, `Weight`)
//! - Caller input (`RequirementSet`, `RequirementValue`)
//! - Catalog records (`Component`, `NewComponent`, `ComponentSpec`)
//! - Engine output (`CriterionResult`, `EvaluationOutcome`, `MetricResult`)
//! - Error types (`PartselError`)
//!
//! ## Determinism Guarantees
//!
//! - Requirement sets are backed by `BTreeMap`, so iteration order is stable
//! - Results are plain values; nothing here reads a clock or global state

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::primitives::{MAX_FIELD_LENGTH, MAX_LIST_ENTRIES};
use crate::score::MatchScore;

// =============================================================================
// FAMILIES & WEIGHTS
// =============================================================================

/// The component families the engine has rule tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Bearing,
    Motor,
    Gear,
    Seal,
    Fastener,
}

impl Family {
    /// Every family, in catalog display order.
    pub const ALL: [Family; 5] = [
        Family::Bearing,
        Family::Motor,
        Family::Gear,
        Family::Seal,
        Family::Fastener,
    ];

    /// Parse a family tag, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not one of the five tags.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.as_str().eq_ignore_ascii_case(tag))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Family::Bearing => "bearing",
            Family::Motor => "motor",
            Family::Gear => "gear",
            Family::Seal => "seal",
            Family::Fastener => "fastener",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = PartselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PartselError::UnknownFamily(s.to_string()))
    }
}

/// Importance label attached to a criterion.
///
/// Weights are advisory. Every criterion counts once toward the match score
/// regardless of its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Critical,
    High,
    Medium,
}

impl Weight {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Weight::Critical => "critical",
            Weight::High => "high",
            Weight::Medium => "medium",
        }
    }

    /// Upper-case label used in report rows (`CRITICAL`, `HIGH`, `MEDIUM`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Weight::Critical => "CRITICAL",
            Weight::High => "HIGH",
            Weight::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Catalog identifier, assigned by the store in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub u64);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// REQUIREMENTS
// =============================================================================

/// Render a number the way reports show quantities.
///
/// Integral values keep one decimal (`25.0`); everything else uses the
/// shortest representation that round-trips (`28.9`).
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// A single caller-supplied requirement value.
///
/// Numbers keep the text they arrived as; comparisons use `value`, display
/// uses `raw` (`25` stays `25`, not `25.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequirementValue {
    Number { value: f64, raw: String },
    Text(String),
}

impl RequirementValue {
    /// A number together with the text the caller wrote.
    #[must_use]
    pub fn number_as_written(value: f64, raw: impl Into<String>) -> Self {
        RequirementValue::Number {
            value,
            raw: raw.into(),
        }
    }
}

impl fmt::Display for RequirementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementValue::Number { raw, .. } => f.write_str(raw),
            RequirementValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RequirementValue {
    fn from(value: f64) -> Self {
        RequirementValue::number_as_written(value, format_quantity(value))
    }
}

impl From<&str> for RequirementValue {
    fn from(value: &str) -> Self {
        RequirementValue::Text(value.to_string())
    }
}

impl From<String> for RequirementValue {
    fn from(value: String) -> Self {
        RequirementValue::Text(value)
    }
}

/// Named requirement fields for one selection request.
///
/// Fields the caller leaves out fall back to the default named by each rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementSet {
    fields: BTreeMap<String, RequirementValue>,
}

impl RequirementSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<RequirementValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<RequirementValue>) {
        self.fields.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&RequirementValue> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Read a numeric requirement.
    ///
    /// Absent fields yield `default`. Text values are trimmed and parsed; a
    /// value that does not parse is an error, never silently defaulted.
    pub fn number(&self, field: &str, default: f64) -> Result<f64, PartselError> {
        match self.fields.get(field) {
            None => Ok(default),
            Some(RequirementValue::Number { value, .. }) => Ok(*value),
            Some(RequirementValue::Text(raw)) => {
                raw.trim()
                    .parse::<f64>()
                    .map_err(|_| PartselError::InvalidRequirement {
                        field: field.to_string(),
                        value: raw.clone(),
                    })
            }
        }
    }

    /// Read a categorical requirement, falling back to `default` when absent.
    #[must_use]
    pub fn text(&self, field: &str, default: &str) -> String {
        self.fields
            .get(field)
            .map_or_else(|| default.to_string(), ToString::to_string)
    }
}

impl<K, V> FromIterator<(K, V)> for RequirementSet
where
    K: Into<String>,
    V: Into<RequirementValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = RequirementSet::new();
        for (field, value) in iter {
            set.insert(field, value);
        }
        set
    }
}

// =============================================================================
// SPECIFICATION RECORDS
// =============================================================================

/// Addressable attributes of a [`ComponentSpec`].
///
/// Rule tables name attributes through this enum rather than by string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecAttribute {
    // bearing
    BoreDiameter,
    OuterDiameter,
    Width,
    DynamicLoadRating,
    StaticLoadRating,
    SpeedRating,
    L10Life,
    // motor
    Power,
    Voltage,
    Speed,
    Efficiency,
    InsulationClass,
    FrameSize,
    // gear
    Module,
    PressureAngle,
    FaceWidth,
    GearMaterial,
    PrecisionGrade,
    PowerTransmission,
    // seal
    SealDiameter,
    PressureRating,
    TempMin,
    TempMax,
    ElastomerType,
    // fastener
    FastenerDiameter,
    ClampLoadCapacity,
    TensileStrength,
    MaterialGrade,
}

/// Technical attributes of one catalog component. Every attribute is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSpec {
    pub bore_diameter: Option<f64>,
    pub outer_diameter: Option<f64>,
    pub width: Option<f64>,
    pub dynamic_load_rating: Option<f64>,
    pub static_load_rating: Option<f64>,
    pub speed_rating: Option<f64>,
    pub l10_life: Option<f64>,

    pub power: Option<f64>,
    pub voltage: Option<String>,
    pub speed: Option<f64>,
    pub efficiency: Option<f64>,
    pub insulation_class: Option<String>,
    pub frame_size: Option<String>,

    pub module: Option<f64>,
    pub pressure_angle: Option<f64>,
    pub face_width: Option<f64>,
    pub gear_material: Option<String>,
    pub precision_grade: Option<String>,
    pub power_transmission: Option<f64>,

    pub seal_diameter: Option<f64>,
    pub pressure_rating: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub elastomer_type: Option<String>,

    pub fastener_diameter: Option<String>,
    pub clamp_load_capacity: Option<f64>,
    pub tensile_strength: Option<f64>,
    pub material_grade: Option<String>,
}

impl ComponentSpec {
    /// Numeric value of an attribute. Categorical attributes yield `None`.
    #[must_use]
    pub fn number(&self, attribute: SpecAttribute) -> Option<f64> {
        match attribute {
            SpecAttribute::BoreDiameter => self.bore_diameter,
            SpecAttribute::OuterDiameter => self.outer_diameter,
            SpecAttribute::Width => self.width,
            SpecAttribute::DynamicLoadRating => self.dynamic_load_rating,
            SpecAttribute::StaticLoadRating => self.static_load_rating,
            SpecAttribute::SpeedRating => self.speed_rating,
            SpecAttribute::L10Life => self.l10_life,
            SpecAttribute::Power => self.power,
            SpecAttribute::Speed => self.speed,
            SpecAttribute::Efficiency => self.efficiency,
            SpecAttribute::Module => self.module,
            SpecAttribute::PressureAngle => self.pressure_angle,
            SpecAttribute::FaceWidth => self.face_width,
            SpecAttribute::PowerTransmission => self.power_transmission,
            SpecAttribute::SealDiameter => self.seal_diameter,
            SpecAttribute::PressureRating => self.pressure_rating,
            SpecAttribute::TempMin => self.temp_min,
            SpecAttribute::TempMax => self.temp_max,
            SpecAttribute::ClampLoadCapacity => self.clamp_load_capacity,
            SpecAttribute::TensileStrength => self.tensile_strength,
            SpecAttribute::Voltage
            | SpecAttribute::InsulationClass
            | SpecAttribute::FrameSize
            | SpecAttribute::GearMaterial
            | SpecAttribute::PrecisionGrade
            | SpecAttribute::ElastomerType
            | SpecAttribute::FastenerDiameter
            | SpecAttribute::MaterialGrade => None,
        }
    }

    /// Display form of an attribute; numeric attributes use [`format_quantity`].
    #[must_use]
    pub fn text(&self, attribute: SpecAttribute) -> Option<String> {
        match attribute {
            SpecAttribute::Voltage => self.voltage.clone(),
            SpecAttribute::InsulationClass => self.insulation_class.clone(),
            SpecAttribute::FrameSize => self.frame_size.clone(),
            SpecAttribute::GearMaterial => self.gear_material.clone(),
            SpecAttribute::PrecisionGrade => self.precision_grade.clone(),
            SpecAttribute::ElastomerType => self.elastomer_type.clone(),
            SpecAttribute::FastenerDiameter => self.fastener_diameter.clone(),
            SpecAttribute::MaterialGrade => self.material_grade.clone(),
            numeric => self.number(numeric).map(format_quantity),
        }
    }
}

// =============================================================================
// CATALOG RECORDS
// =============================================================================

/// A substitute part listed next to a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub manufacturer: String,
}

/// A cataloged component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: ComponentId,
    #[serde(rename = "componentType")]
    pub family: Family,
    pub name: String,
    pub manufacturer: String,
    pub part_number: String,
    pub price: String,
    pub availability: String,
    pub lead_time: String,
    pub rating: f64,
    pub specifications: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub alternatives: Vec<Alternative>,
    pub vendor_url: String,
    pub specification: Option<ComponentSpec>,
}

fn default_availability() -> String {
    "In Stock".to_string()
}

fn default_lead_time() -> String {
    "2-3 weeks".to_string()
}

fn default_rating() -> f64 {
    4.5
}

/// A component as submitted for insertion, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComponent {
    #[serde(rename = "componentType")]
    pub family: Family,
    pub name: String,
    pub manufacturer: String,
    pub part_number: String,
    #[serde(default)]
    pub price: String,
    #[serde(default = "default_availability")]
    pub availability: String,
    #[serde(default = "default_lead_time")]
    pub lead_time: String,
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default)]
    pub specifications: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub vendor_url: String,
    #[serde(default)]
    pub specification: Option<ComponentSpec>,
}

impl NewComponent {
    /// Minimal component with catalog defaults for everything optional.
    #[must_use]
    pub fn new(
        family: Family,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        part_number: impl Into<String>,
    ) -> Self {
        Self {
            family,
            name: name.into(),
            manufacturer: manufacturer.into(),
            part_number: part_number.into(),
            price: String::new(),
            availability: default_availability(),
            lead_time: default_lead_time(),
            rating: default_rating(),
            specifications: Vec::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            alternatives: Vec::new(),
            vendor_url: String::new(),
            specification: None,
        }
    }

    /// Check required fields, rating range and length limits.
    ///
    /// Part-number uniqueness is the store's concern.
    pub fn validate(&self) -> Result<(), PartselError> {
        for (field, value) in [
            ("name", &self.name),
            ("manufacturer", &self.manufacturer),
            ("partNumber", &self.part_number),
        ] {
            if value.trim().is_empty() {
                return Err(PartselError::InvalidComponent(format!(
                    "{field} must not be empty"
                )));
            }
        }

        for (field, value) in [
            ("name", &self.name),
            ("manufacturer", &self.manufacturer),
            ("partNumber", &self.part_number),
            ("price", &self.price),
            ("availability", &self.availability),
            ("leadTime", &self.lead_time),
            ("vendorUrl", &self.vendor_url),
        ] {
            if value.len() > MAX_FIELD_LENGTH {
                return Err(PartselError::InvalidComponent(format!(
                    "{field} exceeds {MAX_FIELD_LENGTH} bytes"
                )));
            }
        }

        if !(0.0..=5.0).contains(&self.rating) {
            return Err(PartselError::InvalidComponent(format!(
                "rating {} outside 0.0..=5.0",
                self.rating
            )));
        }

        for (field, list) in [
            ("specifications", &self.specifications),
            ("pros", &self.pros),
            ("cons", &self.cons),
        ] {
            if list.len() > MAX_LIST_ENTRIES {
                return Err(PartselError::InvalidComponent(format!(
                    "{field} has more than {MAX_LIST_ENTRIES} entries"
                )));
            }
            if list.iter().any(|entry| entry.len() > MAX_FIELD_LENGTH) {
                return Err(PartselError::InvalidComponent(format!(
                    "{field} entry exceeds {MAX_FIELD_LENGTH} bytes"
                )));
            }
        }

        if self.alternatives.len() > MAX_LIST_ENTRIES {
            return Err(PartselError::InvalidComponent(format!(
                "alternatives has more than {MAX_LIST_ENTRIES} entries"
            )));
        }

        Ok(())
    }

    /// Attach the store-assigned id.
    #[must_use]
    pub fn into_component(self, id: ComponentId) -> Component {
        Component {
            id,
            family: self.family,
            name: self.name,
            manufacturer: self.manufacturer,
            part_number: self.part_number,
            price: self.price,
            availability: self.availability,
            lead_time: self.lead_time,
            rating: self.rating,
            specifications: self.specifications,
            pros: self.pros,
            cons: self.cons,
            alternatives: self.alternatives,
            vendor_url: self.vendor_url,
            specification: self.specification,
        }
    }
}

// =============================================================================
// ENGINE OUTPUT
// =============================================================================

/// Verdict for one criterion of one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub name: String,
    #[serde(rename = "value")]
    pub observed: String,
    pub requirement: String,
    #[serde(rename = "met")]
    pub satisfied: bool,
    pub weight: Weight,
}

/// Criterion verdicts for one component plus the derived score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub criteria: Vec<CriterionResult>,
    pub match_score: u8,
    pub matched_count: usize,
}

impl EvaluationOutcome {
    /// Outcome for a family with no applicable rules.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            criteria: Vec::new(),
            match_score: 0,
            matched_count: 0,
        }
    }

    /// Build an outcome, deriving `matched_count` and `match_score` from the verdicts.
    #[must_use]
    pub fn from_criteria(criteria: Vec<CriterionResult>) -> Self {
        let matched = criteria.iter().filter(|c| c.satisfied).count();
        let score = MatchScore::from_counts(matched, criteria.len());
        Self {
            criteria,
            match_score: score.score,
            matched_count: score.matched,
        }
    }
}

/// A "target vs actual" line shown next to the criteria in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricResult {
    pub label: String,
    #[serde(rename = "value")]
    pub observed: String,
    pub target: String,
    pub met: bool,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the selection engine and its stores.
///
/// - No silent failures
/// - The engine never panics; all errors are recoverable
#[derive(Debug, Error)]
pub enum PartselError {
    /// A numeric requirement field held a value that does not parse.
    #[error("Invalid value for requirement '{field}': {value}")]
    InvalidRequirement { field: String, value: String },

    /// A family tag was required but is not one of the known families.
    #[error("Unknown component type: {0}")]
    UnknownFamily(String),

    /// Nothing matched the lookup (family, component or cart).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A component failed validation on insert.
    #[error("Invalid component: {0}")]
    InvalidComponent(String),

    /// The part number is already cataloged.
    #[error("Duplicate part number: {0}")]
    DuplicatePartNumber(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn family_parse_is_case_insensitive() {
        assert_eq!(Family::parse("Bearing"), Some(Family::Bearing));
        assert_eq!(Family::parse(" MOTOR "), Some(Family::Motor));
        assert_eq!(Family::parse("fastener"), Some(Family::Fastener));
        assert_eq!(Family::parse("pulley"), None);
        assert!("gearbox".parse::<Family>().is_err());
    }

    #[test]
    fn quantity_display() {
        assert_eq!(format_quantity(25.0), "25.0");
        assert_eq!(format_quantity(28.9), "28.9");
        assert_eq!(format_quantity(0.0), "0.0");
        assert_eq!(format_quantity(1500.0), "1500.0");
        assert_eq!(format_quantity(85.3), "85.3");
    }

    #[test]
    fn requirement_number_defaults_and_parses() {
        let reqs = RequirementSet::new()
            .with("speed", "  1500 ")
            .with("power", 7.5)
            .with("boreSize", "forty");

        assert_eq!(reqs.number("speed", 0.0).ok(), Some(1500.0));
        assert_eq!(reqs.number("power", 0.0).ok(), Some(7.5));
        assert_eq!(reqs.number("dynamicLoad", 3.0).ok(), Some(3.0));

        match reqs.number("boreSize", 0.0) {
            Err(PartselError::InvalidRequirement { field, value }) => {
                assert_eq!(field, "boreSize");
                assert_eq!(value, "forty");
            }
            other => panic!("expected InvalidRequirement, got {other:?}"),
        }
    }

    #[test]
    fn requirement_text_defaults() {
        let reqs = RequirementSet::new().with("lubrication", "Oil Bath").with("speed", 40.0);
        assert_eq!(reqs.text("lubrication", "Grease"), "Oil Bath");
        assert_eq!(reqs.text("bearingMaterial", "Steel"), "Steel");
        assert_eq!(reqs.text("speed", "0"), "40.0");
    }

    #[test]
    fn requirement_number_keeps_written_form() {
        let reqs = RequirementSet::new()
            .with("dynamicLoad", RequirementValue::number_as_written(25.0, "25"))
            .with("module", 2.5);

        assert_eq!(reqs.number("dynamicLoad", 0.0).ok(), Some(25.0));
        assert_eq!(reqs.text("dynamicLoad", "0"), "25");
        assert_eq!(reqs.text("module", "0"), "2.5");
    }

    #[test]
    fn spec_attribute_lookup() {
        let spec = ComponentSpec {
            module: Some(2.5),
            gear_material: Some("Cast Iron".to_string()),
            ..ComponentSpec::default()
        };
        assert_eq!(spec.number(SpecAttribute::Module), Some(2.5));
        assert_eq!(spec.number(SpecAttribute::GearMaterial), None);
        assert_eq!(spec.text(SpecAttribute::Module).as_deref(), Some("2.5"));
        assert_eq!(
            spec.text(SpecAttribute::GearMaterial).as_deref(),
            Some("Cast Iron")
        );
        assert_eq!(spec.text(SpecAttribute::FaceWidth), None);
    }

    #[test]
    fn new_component_validation() {
        let ok = NewComponent::new(Family::Seal, "Radial Shaft Seal", "SKF", "CR-30x47");
        assert!(ok.validate().is_ok());

        let mut blank = ok.clone();
        blank.part_number = "  ".to_string();
        assert!(matches!(
            blank.validate(),
            Err(PartselError::InvalidComponent(_))
        ));

        let mut rated = ok.clone();
        rated.rating = 5.5;
        assert!(rated.validate().is_err());

        let mut long = ok;
        long.name = "x".repeat(MAX_FIELD_LENGTH + 1);
        assert!(long.validate().is_err());
    }

    #[test]
    fn outcome_from_criteria_counts_matches() {
        let verdict = |satisfied| CriterionResult {
            name: "c".to_string(),
            observed: String::new(),
            requirement: String::new(),
            satisfied,
            weight: Weight::High,
        };
        let outcome = EvaluationOutcome::from_criteria(vec![verdict(true), verdict(false), verdict(true)]);
        assert_eq!(outcome.matched_count, 2);
        assert_eq!(outcome.match_score, 67);
        assert_eq!(outcome.criteria.len(), 3);

        let empty = EvaluationOutcome::from_criteria(Vec::new());
        assert_eq!(empty, EvaluationOutcome::empty());
    }
}
