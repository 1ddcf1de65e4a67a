//! # Criteria Rule Tables
//!
//! Declarative per-family criterion and metric definitions.
//!
//! Each rule names where its operands come from (a requirement field or a
//! specification attribute, each with a fallback), how they are compared,
//! and how the two sides are rendered for reports. The tables are plain
//! data; [`crate::evaluator`] is the only code that interprets them.
//!
//! ## Display templates
//!
//! A [`Template`] is a pattern with `{}` placeholders filled in order from
//! its [`Slot`]s. `Slot::Subject` and `Slot::Target` refer to the operands
//! the comparator resolved (spec side and requirement side respectively).

use crate::types::{Family, SpecAttribute, Weight};

// =============================================================================
// OPERAND SOURCES
// =============================================================================

/// A numeric requirement field with its fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberInput {
    pub field: &'static str,
    pub default: f64,
}

/// A categorical requirement field with its fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextInput {
    pub field: &'static str,
    pub default: &'static str,
}

/// A numeric specification attribute with its placeholder value.
///
/// The placeholder only applies when the attribute is absent, and then
/// displays as `written` (`15`, not `15.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecNumber {
    pub attribute: SpecAttribute,
    pub default: f64,
    pub written: &'static str,
}

/// How `Excludes` tests the requirement string against its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionMode {
    Equals,
    Contains,
}

// =============================================================================
// COMPARATORS
// =============================================================================

/// The test a criterion applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparator {
    /// spec >= requirement
    AtLeast {
        subject: SpecNumber,
        target: NumberInput,
    },
    /// spec == requirement, or |spec - requirement| <= band
    Within {
        subject: SpecNumber,
        target: NumberInput,
        band: f64,
    },
    /// requirement * lower <= spec <= requirement * upper
    Proportional {
        subject: SpecNumber,
        target: NumberInput,
        lower: f64,
        upper: f64,
    },
    /// requirement value is one of `allowed`
    OneOf {
        target: TextInput,
        allowed: &'static [&'static str],
    },
    /// requirement value does not equal / contain `token`
    Excludes {
        target: TextInput,
        token: &'static str,
        mode: ExclusionMode,
    },
    /// informational; always satisfied
    Always,
}

// =============================================================================
// TEMPLATES
// =============================================================================

/// Value source for one `{}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// Spec-side operand resolved by the comparator.
    Subject,
    /// Requirement-side operand resolved by the comparator.
    Target,
    /// A requirement field as the caller supplied it.
    Requirement(TextInput),
    /// A specification attribute's display form, or fallback text.
    Spec(SpecAttribute, &'static str),
    /// A numeric specification attribute, or its placeholder number.
    SpecNumber(SpecNumber),
    /// A specification attribute, or else a requirement field.
    SpecOr(SpecAttribute, TextInput),
}

/// A display pattern with ordered slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    pub pattern: &'static str,
    pub slots: &'static [Slot],
}

impl Template {
    /// A template with no placeholders.
    #[must_use]
    pub const fn fixed(pattern: &'static str) -> Self {
        Self { pattern, slots: &[] }
    }
}

// =============================================================================
// RULES
// =============================================================================

/// One scored criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionRule {
    pub name: &'static str,
    pub weight: Weight,
    pub comparator: Comparator,
    pub observed: Template,
    pub requirement: Template,
}

/// One informational performance metric. Never feeds the score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRule {
    pub label: &'static str,
    pub comparator: Comparator,
    pub observed: Template,
    pub target: Template,
}

/// The ordered criterion table for a family.
#[must_use]
pub fn criteria_for(family: Family) -> &'static [CriterionRule] {
    match family {
        Family::Bearing => BEARING_CRITERIA,
        Family::Motor => MOTOR_CRITERIA,
        Family::Gear => GEAR_CRITERIA,
        Family::Seal => SEAL_CRITERIA,
        Family::Fastener => FASTENER_CRITERIA,
    }
}

/// The ordered metric table for a family.
#[must_use]
pub fn metrics_for(family: Family) -> &'static [MetricRule] {
    match family {
        Family::Bearing => BEARING_METRICS,
        Family::Motor => MOTOR_METRICS,
        Family::Gear => GEAR_METRICS,
        Family::Seal => SEAL_METRICS,
        Family::Fastener => FASTENER_METRICS,
    }
}

// =============================================================================
// SHARED OPERANDS
// =============================================================================

const fn req(field: &'static str, default: f64) -> NumberInput {
    NumberInput { field, default }
}

const fn text(field: &'static str, default: &'static str) -> TextInput {
    TextInput { field, default }
}

const fn spec(attribute: SpecAttribute, default: f64, written: &'static str) -> SpecNumber {
    SpecNumber {
        attribute,
        default,
        written,
    }
}

const SUBJECT: &[Slot] = &[Slot::Subject];
const TARGET: &[Slot] = &[Slot::Target];

const BEARING_DYNAMIC_LOAD: Comparator = Comparator::AtLeast {
    subject: spec(SpecAttribute::DynamicLoadRating, 0.0, "0"),
    target: req("dynamicLoad", 0.0),
};
const BEARING_SPEED: Comparator = Comparator::AtLeast {
    subject: spec(SpecAttribute::SpeedRating, 0.0, "0"),
    target: req("speed", 0.0),
};
const BEARING_L10: Comparator = Comparator::AtLeast {
    subject: spec(SpecAttribute::L10Life, 0.0, "0"),
    target: req("targetL10Life", 0.0),
};
const GEAR_POWER: Comparator = Comparator::AtLeast {
    subject: spec(SpecAttribute::PowerTransmission, 15.0, "15"),
    target: req("power", 0.0),
};
const SEAL_PRESSURE: Comparator = Comparator::AtLeast {
    subject: spec(SpecAttribute::PressureRating, 50.0, "50"),
    target: req("pressure", 0.0),
};
const FASTENER_CLAMP_LOAD: Comparator = Comparator::AtLeast {
    subject: spec(SpecAttribute::ClampLoadCapacity, 12000.0, "12000"),
    target: req("clampLoad", 0.0),
};

// =============================================================================
// BEARING
// =============================================================================

static BEARING_CRITERIA: &[CriterionRule] = &[
    CriterionRule {
        name: "Dynamic Load Capacity",
        weight: Weight::Critical,
        comparator: BEARING_DYNAMIC_LOAD,
        observed: Template { pattern: "{} kN", slots: SUBJECT },
        requirement: Template { pattern: "≥ {} kN", slots: TARGET },
    },
    CriterionRule {
        name: "Speed Rating",
        weight: Weight::Critical,
        comparator: BEARING_SPEED,
        observed: Template { pattern: "{} RPM", slots: SUBJECT },
        requirement: Template { pattern: "≥ {} RPM", slots: TARGET },
    },
    CriterionRule {
        name: "L10 Life (Bearing Life)",
        weight: Weight::Critical,
        comparator: BEARING_L10,
        observed: Template { pattern: "{} hours", slots: SUBJECT },
        requirement: Template { pattern: "≥ {} hours", slots: TARGET },
    },
    CriterionRule {
        name: "Bore Size",
        weight: Weight::High,
        comparator: Comparator::Within {
            subject: spec(SpecAttribute::BoreDiameter, 0.0, "0"),
            target: req("boreSize", 0.0),
            band: 2.0,
        },
        observed: Template { pattern: "{} mm", slots: SUBJECT },
        requirement: Template { pattern: "≈ {} mm", slots: TARGET },
    },
    CriterionRule {
        name: "Environmental Compatibility",
        weight: Weight::High,
        comparator: Comparator::Excludes {
            target: text("bearingEnvironment", "Clean"),
            token: "Highly Corrosive",
            mode: ExclusionMode::Equals,
        },
        observed: Template { pattern: "Sealed bearing suitable for {}", slots: TARGET },
        requirement: Template { pattern: "Environment: {}", slots: TARGET },
    },
    CriterionRule {
        name: "Lubrication Type",
        weight: Weight::Medium,
        comparator: Comparator::OneOf {
            target: text("lubrication", "Grease"),
            allowed: &["Oil Bath", "Grease"],
        },
        observed: Template { pattern: "Standard {} suitable", slots: TARGET },
        requirement: Template { pattern: "Lubrication: {}", slots: TARGET },
    },
    CriterionRule {
        name: "Material Availability",
        weight: Weight::Medium,
        comparator: Comparator::OneOf {
            target: text("bearingMaterial", "Steel"),
            allowed: &["Steel", "Stainless Steel (440C)"],
        },
        observed: Template { pattern: "{} available", slots: TARGET },
        requirement: Template { pattern: "Material: {}", slots: TARGET },
    },
];

static BEARING_METRICS: &[MetricRule] = &[
    MetricRule {
        label: "Dynamic Load Capacity vs Requirement",
        comparator: BEARING_DYNAMIC_LOAD,
        observed: Template { pattern: "{} kN", slots: SUBJECT },
        target: Template {
            pattern: "{} kN",
            slots: &[Slot::Requirement(text("dynamicLoad", "0"))],
        },
    },
    MetricRule {
        label: "Speed Rating",
        comparator: BEARING_SPEED,
        observed: Template { pattern: "{} RPM", slots: SUBJECT },
        target: Template { pattern: "{} RPM", slots: &[Slot::Requirement(text("speed", "0"))] },
    },
    MetricRule {
        label: "L10 Life",
        comparator: BEARING_L10,
        observed: Template { pattern: "{} hours", slots: SUBJECT },
        target: Template {
            pattern: "{} hours",
            slots: &[Slot::Requirement(text("targetL10Life", "0"))],
        },
    },
];

// =============================================================================
// MOTOR
// =============================================================================

static MOTOR_CRITERIA: &[CriterionRule] = &[
    CriterionRule {
        name: "Power Output",
        weight: Weight::Critical,
        comparator: Comparator::Proportional {
            subject: spec(SpecAttribute::Power, 0.0, "0"),
            target: req("power", 0.0),
            lower: 0.8,
            upper: 1.2,
        },
        observed: Template { pattern: "{} kW", slots: SUBJECT },
        requirement: Template { pattern: "≈ {} kW (±20%)", slots: TARGET },
    },
    CriterionRule {
        name: "Speed Rating",
        weight: Weight::Critical,
        comparator: Comparator::Within {
            subject: spec(SpecAttribute::Speed, 0.0, "0"),
            target: req("speed", 0.0),
            band: 100.0,
        },
        observed: Template { pattern: "{} RPM", slots: SUBJECT },
        requirement: Template { pattern: "≈ {} RPM", slots: TARGET },
    },
    CriterionRule {
        name: "Duty Class Support",
        weight: Weight::High,
        comparator: Comparator::Always,
        observed: Template::fixed("S3, S4, S5 compatible"),
        requirement: Template {
            pattern: "Duty Class: {}",
            slots: &[Slot::Requirement(text("dutyClass", "S3"))],
        },
    },
    CriterionRule {
        name: "Insulation Class",
        weight: Weight::High,
        comparator: Comparator::OneOf {
            target: text("insulationClass", "F"),
            allowed: &["F", "H", "N"],
        },
        observed: Template { pattern: "Class {} available", slots: TARGET },
        requirement: Template { pattern: "Insulation: {}", slots: TARGET },
    },
    CriterionRule {
        name: "Environmental Tolerance",
        weight: Weight::High,
        comparator: Comparator::Excludes {
            target: text("motorEnvironment", "Indoor Dry"),
            token: "Explosive",
            mode: ExclusionMode::Contains,
        },
        observed: Template::fixed("Indoor/Outdoor rated"),
        requirement: Template { pattern: "Environment: {}", slots: TARGET },
    },
    CriterionRule {
        name: "Energy Efficiency (IE3)",
        weight: Weight::Medium,
        comparator: Comparator::Always,
        observed: Template {
            pattern: "{}% efficiency",
            slots: &[Slot::SpecNumber(spec(SpecAttribute::Efficiency, 85.3, "85.3"))],
        },
        requirement: Template::fixed("High efficiency required"),
    },
];

static MOTOR_METRICS: &[MetricRule] = &[
    MetricRule {
        label: "Power Output Efficiency",
        comparator: Comparator::Always,
        observed: Template {
            pattern: "{}%",
            slots: &[Slot::SpecNumber(spec(SpecAttribute::Efficiency, 85.3, "85.3"))],
        },
        target: Template::fixed("≥80%"),
    },
    MetricRule {
        label: "Speed Match",
        comparator: Comparator::Within {
            subject: spec(SpecAttribute::Speed, 0.0, "0"),
            target: req("speed", 0.0),
            band: 0.0,
        },
        observed: Template { pattern: "{} RPM", slots: SUBJECT },
        target: Template { pattern: "{} RPM", slots: &[Slot::Requirement(text("speed", "0"))] },
    },
    MetricRule {
        label: "Thermal Capability",
        comparator: Comparator::Always,
        observed: Template {
            pattern: "{} class insulation",
            slots: &[Slot::Spec(SpecAttribute::InsulationClass, "F")],
        },
        target: Template::fixed("Class F insulation"),
    },
];

// =============================================================================
// GEAR
// =============================================================================

static GEAR_CRITERIA: &[CriterionRule] = &[
    CriterionRule {
        name: "Power Transmission",
        weight: Weight::Critical,
        comparator: GEAR_POWER,
        observed: Template { pattern: "{} kW rated", slots: SUBJECT },
        requirement: Template { pattern: "≥ {} kW", slots: TARGET },
    },
    CriterionRule {
        name: "Module Size",
        weight: Weight::Critical,
        comparator: Comparator::Within {
            subject: spec(SpecAttribute::Module, 2.0, "2.0"),
            target: req("moduleSize", 2.0),
            band: 0.5,
        },
        observed: Template { pattern: "{} mm", slots: SUBJECT },
        requirement: Template { pattern: "≈ {} mm", slots: TARGET },
    },
    CriterionRule {
        name: "Material Compatibility",
        weight: Weight::High,
        comparator: Comparator::OneOf {
            target: text("gearMaterial", "Steel"),
            allowed: &["Steel", "Cast Iron"],
        },
        observed: Template {
            pattern: "{}",
            slots: &[Slot::Spec(SpecAttribute::GearMaterial, "Steel")],
        },
        requirement: Template { pattern: "Material: {}", slots: TARGET },
    },
    CriterionRule {
        name: "Precision Grade",
        weight: Weight::High,
        comparator: Comparator::Always,
        observed: Template {
            pattern: "{} precision",
            slots: &[Slot::Spec(SpecAttribute::PrecisionGrade, "ISO 7")],
        },
        requirement: Template::fixed("High precision required"),
    },
    CriterionRule {
        name: "Lubrication Compatibility",
        weight: Weight::Medium,
        comparator: Comparator::OneOf {
            target: text("oilType", "ISO VG 46"),
            allowed: &["ISO VG 46", "ISO VG 68", "ISO VG 100"],
        },
        observed: Template::fixed("Compatible with standard oils"),
        requirement: Template { pattern: "Oil Type: {}", slots: TARGET },
    },
];

static GEAR_METRICS: &[MetricRule] = &[
    MetricRule {
        label: "Power Transmission",
        comparator: GEAR_POWER,
        observed: Template { pattern: "{} kW", slots: SUBJECT },
        target: Template { pattern: "{} kW", slots: &[Slot::Requirement(text("power", "0"))] },
    },
    MetricRule {
        label: "Module Precision",
        comparator: Comparator::Always,
        observed: Template {
            pattern: "{} grade",
            slots: &[Slot::Spec(SpecAttribute::PrecisionGrade, "ISO 7")],
        },
        target: Template::fixed("High precision"),
    },
    MetricRule {
        label: "Material Quality",
        comparator: Comparator::Always,
        observed: Template {
            pattern: "{}",
            slots: &[Slot::Spec(SpecAttribute::GearMaterial, "Steel")],
        },
        target: Template::fixed("High-strength material"),
    },
];

// =============================================================================
// SEAL
// =============================================================================

static SEAL_CRITERIA: &[CriterionRule] = &[
    CriterionRule {
        name: "Seal Diameter",
        weight: Weight::Critical,
        comparator: Comparator::Within {
            subject: spec(SpecAttribute::SealDiameter, 30.0, "30"),
            target: req("sealDiameter", 30.0),
            band: 2.0,
        },
        observed: Template { pattern: "{} mm", slots: SUBJECT },
        requirement: Template { pattern: "≈ {} mm", slots: TARGET },
    },
    CriterionRule {
        name: "Pressure Rating",
        weight: Weight::Critical,
        comparator: SEAL_PRESSURE,
        observed: Template { pattern: "{} bar", slots: SUBJECT },
        requirement: Template { pattern: "≥ {} bar", slots: TARGET },
    },
    CriterionRule {
        name: "Sealing Medium Compatibility",
        weight: Weight::Critical,
        comparator: Comparator::OneOf {
            target: text("sealEnvironment", "Oil"),
            allowed: &["Oil", "Water", "Hydraulic Fluid"],
        },
        observed: Template { pattern: "Suitable for {}", slots: TARGET },
        requirement: Template { pattern: "Medium: {}", slots: TARGET },
    },
    CriterionRule {
        name: "Elastomer Type",
        weight: Weight::High,
        comparator: Comparator::OneOf {
            target: text("elastomerMaterial", "NBR"),
            allowed: &["NBR", "FKM"],
        },
        observed: Template {
            pattern: "{} available",
            slots: &[Slot::SpecOr(
                SpecAttribute::ElastomerType,
                text("elastomerMaterial", "NBR"),
            )],
        },
        requirement: Template { pattern: "Material: {}", slots: TARGET },
    },
    CriterionRule {
        name: "Temperature Range",
        weight: Weight::High,
        comparator: Comparator::Always,
        observed: Template {
            pattern: "{} to {}°C",
            slots: &[
                Slot::Spec(SpecAttribute::TempMin, "n/a"),
                Slot::Spec(SpecAttribute::TempMax, "n/a"),
            ],
        },
        requirement: Template {
            pattern: "Operating: {}°C",
            slots: &[Slot::Requirement(text("sealTemperature", "20-60"))],
        },
    },
];

static SEAL_METRICS: &[MetricRule] = &[
    MetricRule {
        label: "Pressure Rating",
        comparator: SEAL_PRESSURE,
        observed: Template { pattern: "{} bar", slots: SUBJECT },
        target: Template { pattern: "{} bar", slots: &[Slot::Requirement(text("pressure", "0"))] },
    },
    MetricRule {
        label: "Leakage Rate",
        comparator: Comparator::Always,
        observed: Template::fixed("<0.1 cc/hour"),
        target: Template::fixed("Zero leak"),
    },
    MetricRule {
        label: "Elastomer Durability",
        comparator: Comparator::Always,
        observed: Template::fixed("5 years min"),
        target: Template::fixed("Long-term reliability"),
    },
];

// =============================================================================
// FASTENER
// =============================================================================

static FASTENER_CRITERIA: &[CriterionRule] = &[
    CriterionRule {
        name: "Fastener Diameter",
        weight: Weight::Critical,
        comparator: Comparator::Always,
        observed: Template {
            pattern: "{} available",
            slots: &[Slot::Spec(SpecAttribute::FastenerDiameter, "Standard sizes")],
        },
        requirement: Template {
            pattern: "Size: {}",
            slots: &[Slot::Requirement(text("diameter", "M10"))],
        },
    },
    CriterionRule {
        name: "Clamp Load Capacity",
        weight: Weight::Critical,
        comparator: FASTENER_CLAMP_LOAD,
        observed: Template { pattern: "{} N", slots: SUBJECT },
        requirement: Template { pattern: "≥ {} N", slots: TARGET },
    },
    CriterionRule {
        name: "Material Grade",
        weight: Weight::Critical,
        comparator: Comparator::OneOf {
            target: text("fastenerMaterial", "Steel Grade 8.8"),
            allowed: &["Steel Grade 8.8", "Steel Grade 10.9", "Stainless Steel A4-70"],
        },
        observed: Template {
            pattern: "{} (High-strength)",
            slots: &[Slot::Spec(SpecAttribute::MaterialGrade, "Grade 8.8")],
        },
        requirement: Template { pattern: "Grade: {}", slots: TARGET },
    },
    CriterionRule {
        name: "Environmental Suitability",
        weight: Weight::High,
        comparator: Comparator::Excludes {
            target: text("fastenerEnvironment", "Dry Indoor"),
            token: "Corrosive",
            mode: ExclusionMode::Contains,
        },
        observed: Template::fixed("Zinc-plated for mild environments"),
        requirement: Template { pattern: "Environment: {}", slots: TARGET },
    },
    CriterionRule {
        name: "Temperature Tolerance",
        weight: Weight::High,
        comparator: Comparator::Always,
        observed: Template::fixed("-20 to +150 °C"),
        requirement: Template {
            pattern: "Operating: {} °C",
            slots: &[Slot::Requirement(text("fastenerTemperature", "0-80"))],
        },
    },
];

static FASTENER_METRICS: &[MetricRule] = &[
    MetricRule {
        label: "Tensile Strength",
        comparator: Comparator::Always,
        observed: Template {
            pattern: "{} MPa",
            slots: &[Slot::SpecNumber(spec(SpecAttribute::TensileStrength, 800.0, "800"))],
        },
        target: Template::fixed("High-strength required"),
    },
    MetricRule {
        label: "Clamp Load Capacity",
        comparator: FASTENER_CLAMP_LOAD,
        observed: Template { pattern: "{} N", slots: SUBJECT },
        target: Template { pattern: "{} N", slots: &[Slot::Requirement(text("clampLoad", "0"))] },
    },
    MetricRule {
        label: "Corrosion Resistance",
        comparator: Comparator::Always,
        observed: Template::fixed("Zinc-plated"),
        target: Template {
            pattern: "{}",
            slots: &[Slot::Requirement(text("fastenerEnvironment", "Dry"))],
        },
    },
];

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn templates_consistent(comparator: &Comparator, templates: [&Template; 2]) -> bool {
        let has_subject = matches!(
            comparator,
            Comparator::AtLeast { .. } | Comparator::Within { .. } | Comparator::Proportional { .. }
        );
        let has_target = !matches!(comparator, Comparator::Always);
        templates.iter().all(|template| {
            template.pattern.matches("{}").count() == template.slots.len()
                && template.slots.iter().all(|slot| match slot {
                    Slot::Subject => has_subject,
                    Slot::Target => has_target,
                    _ => true,
                })
        })
    }

    #[test]
    fn criterion_counts_per_family() {
        assert_eq!(criteria_for(Family::Bearing).len(), 7);
        assert_eq!(criteria_for(Family::Motor).len(), 6);
        assert_eq!(criteria_for(Family::Gear).len(), 5);
        assert_eq!(criteria_for(Family::Seal).len(), 5);
        assert_eq!(criteria_for(Family::Fastener).len(), 5);
    }

    #[test]
    fn three_metrics_per_family() {
        for family in Family::ALL {
            assert_eq!(metrics_for(family).len(), 3, "{family}");
        }
    }

    #[test]
    fn every_template_slot_is_backed() {
        for family in Family::ALL {
            for rule in criteria_for(family) {
                assert!(
                    templates_consistent(&rule.comparator, [&rule.observed, &rule.requirement]),
                    "{family}: {}",
                    rule.name
                );
            }
            for rule in metrics_for(family) {
                assert!(
                    templates_consistent(&rule.comparator, [&rule.observed, &rule.target]),
                    "{family}: {}",
                    rule.label
                );
            }
        }
    }

    #[test]
    fn criterion_names_unique_within_family() {
        for family in Family::ALL {
            let rules = criteria_for(family);
            for (i, rule) in rules.iter().enumerate() {
                assert!(
                    rules[i + 1..].iter().all(|other| other.name != rule.name),
                    "{family}: duplicate {}",
                    rule.name
                );
            }
        }
    }

    #[test]
    fn bearing_table_order() {
        let names: Vec<_> = criteria_for(Family::Bearing).iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "Dynamic Load Capacity",
                "Speed Rating",
                "L10 Life (Bearing Life)",
                "Bore Size",
                "Environmental Compatibility",
                "Lubrication Type",
                "Material Availability",
            ]
        );
    }
}
