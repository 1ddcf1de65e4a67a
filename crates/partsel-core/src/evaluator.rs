//! # Criteria Evaluator
//!
//! Interprets the rule tables in [`crate::rules`] against one
//! (requirement set, specification) pair.
//!
//! - Pure: no clock, no I/O, no shared state
//! - Unknown family tags evaluate to an empty outcome, not an error
//! - A numeric requirement that does not parse aborts the evaluation

use crate::rules::{
    Comparator, CriterionRule, ExclusionMode, MetricRule, Slot, SpecNumber, Template,
    criteria_for, metrics_for,
};
use crate::types::{
    ComponentSpec, CriterionResult, EvaluationOutcome, Family, MetricResult, PartselError,
    RequirementSet, format_quantity,
};

/// Operands a comparator resolved, rendered for display, plus its verdict.
#[derive(Debug, Clone, PartialEq)]
struct Resolved {
    satisfied: bool,
    subject: Option<String>,
    target: Option<String>,
}

/// Evaluate a family tag's criteria. Unknown tags yield an empty outcome.
pub fn evaluate(
    family_tag: &str,
    requirements: &RequirementSet,
    spec: &ComponentSpec,
) -> Result<EvaluationOutcome, PartselError> {
    match Family::parse(family_tag) {
        Some(family) => evaluate_family(family, requirements, spec),
        None => Ok(EvaluationOutcome::empty()),
    }
}

/// Evaluate every criterion of `family`, in table order.
pub fn evaluate_family(
    family: Family,
    requirements: &RequirementSet,
    spec: &ComponentSpec,
) -> Result<EvaluationOutcome, PartselError> {
    let criteria = criteria_for(family)
        .iter()
        .map(|rule| apply_criterion(rule, requirements, spec))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(EvaluationOutcome::from_criteria(criteria))
}

/// Performance metrics for a family tag. Unknown tags yield no metrics.
pub fn performance_metrics(
    family_tag: &str,
    requirements: &RequirementSet,
    spec: &ComponentSpec,
) -> Result<Vec<MetricResult>, PartselError> {
    match Family::parse(family_tag) {
        Some(family) => family_metrics(family, requirements, spec),
        None => Ok(Vec::new()),
    }
}

/// Performance metrics for `family`, in table order.
pub fn family_metrics(
    family: Family,
    requirements: &RequirementSet,
    spec: &ComponentSpec,
) -> Result<Vec<MetricResult>, PartselError> {
    metrics_for(family)
        .iter()
        .map(|rule| apply_metric(rule, requirements, spec))
        .collect()
}

fn apply_criterion(
    rule: &CriterionRule,
    requirements: &RequirementSet,
    spec: &ComponentSpec,
) -> Result<CriterionResult, PartselError> {
    let resolved = resolve(&rule.comparator, requirements, spec)?;
    Ok(CriterionResult {
        name: rule.name.to_string(),
        observed: render(&rule.observed, &resolved, requirements, spec),
        requirement: render(&rule.requirement, &resolved, requirements, spec),
        satisfied: resolved.satisfied,
        weight: rule.weight,
    })
}

fn apply_metric(
    rule: &MetricRule,
    requirements: &RequirementSet,
    spec: &ComponentSpec,
) -> Result<MetricResult, PartselError> {
    let resolved = resolve(&rule.comparator, requirements, spec)?;
    Ok(MetricResult {
        label: rule.label.to_string(),
        observed: render(&rule.observed, &resolved, requirements, spec),
        target: render(&rule.target, &resolved, requirements, spec),
        met: resolved.satisfied,
    })
}

// =============================================================================
// COMPARISON
// =============================================================================

/// The attribute's value and display form, or the placeholder's.
fn spec_number(source: SpecNumber, spec: &ComponentSpec) -> (f64, String) {
    match spec.number(source.attribute) {
        Some(value) => (value, format_quantity(value)),
        None => (source.default, source.written.to_string()),
    }
}

fn resolve(
    comparator: &Comparator,
    requirements: &RequirementSet,
    spec: &ComponentSpec,
) -> Result<Resolved, PartselError> {
    let numeric = |satisfied: bool, subject: String, target: f64| Resolved {
        satisfied,
        subject: Some(subject),
        target: Some(format_quantity(target)),
    };

    let resolved = match *comparator {
        Comparator::AtLeast { subject, target } => {
            let (have, shown) = spec_number(subject, spec);
            let want = requirements.number(target.field, target.default)?;
            numeric(have >= want, shown, want)
        }
        Comparator::Within {
            subject,
            target,
            band,
        } => {
            let (have, shown) = spec_number(subject, spec);
            let want = requirements.number(target.field, target.default)?;
            numeric(have == want || (have - want).abs() <= band, shown, want)
        }
        Comparator::Proportional {
            subject,
            target,
            lower,
            upper,
        } => {
            let (have, shown) = spec_number(subject, spec);
            let want = requirements.number(target.field, target.default)?;
            numeric(want * lower <= have && have <= want * upper, shown, want)
        }
        Comparator::OneOf { target, allowed } => {
            let value = requirements.text(target.field, target.default);
            Resolved {
                satisfied: allowed.contains(&value.as_str()),
                subject: None,
                target: Some(value),
            }
        }
        Comparator::Excludes {
            target,
            token,
            mode,
        } => {
            let value = requirements.text(target.field, target.default);
            let hit = match mode {
                ExclusionMode::Equals => value == token,
                ExclusionMode::Contains => value.contains(token),
            };
            Resolved {
                satisfied: !hit,
                subject: None,
                target: Some(value),
            }
        }
        Comparator::Always => Resolved {
            satisfied: true,
            subject: None,
            target: None,
        },
    };
    Ok(resolved)
}

// =============================================================================
// DISPLAY
// =============================================================================

fn fill(
    slot: &Slot,
    resolved: &Resolved,
    requirements: &RequirementSet,
    spec: &ComponentSpec,
) -> String {
    match *slot {
        Slot::Subject => resolved.subject.clone().unwrap_or_default(),
        Slot::Target => resolved.target.clone().unwrap_or_default(),
        Slot::Requirement(input) => requirements.text(input.field, input.default),
        Slot::Spec(attribute, fallback) => spec
            .text(attribute)
            .unwrap_or_else(|| fallback.to_string()),
        Slot::SpecNumber(source) => spec_number(source, spec).1,
        Slot::SpecOr(attribute, input) => spec
            .text(attribute)
            .unwrap_or_else(|| requirements.text(input.field, input.default)),
    }
}

fn render(
    template: &Template,
    resolved: &Resolved,
    requirements: &RequirementSet,
    spec: &ComponentSpec,
) -> String {
    let mut out = String::with_capacity(template.pattern.len() + 16);
    let mut slots = template.slots.iter();
    let mut rest = template.pattern;

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        if let Some(slot) = slots.next() {
            out.push_str(&fill(slot, resolved, requirements, spec));
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Weight;

    fn strong_bearing() -> ComponentSpec {
        ComponentSpec {
            dynamic_load_rating: Some(32.0),
            speed_rating: Some(12000.0),
            l10_life: Some(50000.0),
            bore_diameter: Some(40.0),
            ..ComponentSpec::default()
        }
    }

    fn bearing_requirements() -> RequirementSet {
        RequirementSet::new()
            .with("dynamicLoad", 25.0)
            .with("speed", 3000.0)
            .with("targetL10Life", 20000.0)
            .with("boreSize", 40.0)
    }

    #[test]
    fn bearing_all_satisfied() {
        let outcome = evaluate("bearing", &bearing_requirements(), &strong_bearing()).unwrap();
        assert_eq!(outcome.criteria.len(), 7);
        assert_eq!(outcome.matched_count, 7);
        assert_eq!(outcome.match_score, 100);

        let first = &outcome.criteria[0];
        assert_eq!(first.name, "Dynamic Load Capacity");
        assert_eq!(first.observed, "32.0 kN");
        assert_eq!(first.requirement, "≥ 25.0 kN");
        assert_eq!(first.weight, Weight::Critical);
    }

    #[test]
    fn bearing_categorical_defaults_render() {
        let outcome = evaluate("bearing", &RequirementSet::new(), &strong_bearing()).unwrap();
        let env = &outcome.criteria[4];
        assert_eq!(env.observed, "Sealed bearing suitable for Clean");
        assert_eq!(env.requirement, "Environment: Clean");
        assert!(env.satisfied);

        let lube = &outcome.criteria[5];
        assert_eq!(lube.observed, "Standard Grease suitable");
        assert_eq!(lube.requirement, "Lubrication: Grease");
    }

    #[test]
    fn bearing_highly_corrosive_rejected_exactly() {
        let spec = strong_bearing();
        let corrosive = RequirementSet::new().with("bearingEnvironment", "Highly Corrosive");
        let outcome = evaluate("bearing", &corrosive, &spec).unwrap();
        assert!(!outcome.criteria[4].satisfied);

        let mild = RequirementSet::new().with("bearingEnvironment", "Mildly Corrosive");
        let outcome = evaluate("bearing", &mild, &spec).unwrap();
        assert!(outcome.criteria[4].satisfied);
    }

    #[test]
    fn motor_power_band_and_speed() {
        let spec = ComponentSpec {
            power: Some(7.0),
            speed: Some(1500.0),
            ..ComponentSpec::default()
        };
        let reqs = RequirementSet::new().with("power", 10.0).with("speed", 1500.0);
        let outcome = evaluate("motor", &reqs, &spec).unwrap();

        assert_eq!(outcome.criteria.len(), 6);
        assert!(!outcome.criteria[0].satisfied);
        assert_eq!(outcome.criteria[0].requirement, "≈ 10.0 kW (±20%)");
        assert!(outcome.criteria[1].satisfied);
        assert_eq!(outcome.matched_count, 5);
        assert_eq!(outcome.match_score, 83);
        assert_eq!(outcome.criteria[5].observed, "85.3% efficiency");
    }

    #[test]
    fn motor_explosive_environment() {
        let reqs = RequirementSet::new().with("motorEnvironment", "Explosive Atmosphere (ATEX)");
        let outcome = evaluate("Motor", &reqs, &ComponentSpec::default()).unwrap();
        let env = outcome
            .criteria
            .iter()
            .find(|c| c.name == "Environmental Tolerance")
            .unwrap();
        assert!(!env.satisfied);
    }

    #[test]
    fn gear_placeholders_apply_only_when_absent() {
        let outcome = evaluate("gear", &RequirementSet::new(), &ComponentSpec::default()).unwrap();
        assert_eq!(outcome.criteria[0].observed, "15 kW rated");
        assert_eq!(outcome.criteria[1].observed, "2.0 mm");
        assert_eq!(outcome.criteria[2].observed, "Steel");
        assert_eq!(outcome.criteria[3].observed, "ISO 7 precision");
        assert_eq!(outcome.match_score, 100);

        let zero = ComponentSpec {
            power_transmission: Some(0.0),
            ..ComponentSpec::default()
        };
        let reqs = RequirementSet::new().with("power", 5.0);
        let outcome = evaluate("gear", &reqs, &zero).unwrap();
        assert_eq!(outcome.criteria[0].observed, "0.0 kW rated");
        assert!(!outcome.criteria[0].satisfied);
    }

    #[test]
    fn placeholders_display_as_written() {
        let empty = ComponentSpec::default();
        let reqs = RequirementSet::new();

        let bearing = evaluate("bearing", &reqs, &empty).unwrap();
        assert_eq!(bearing.criteria[0].observed, "0 kN");
        assert_eq!(bearing.criteria[0].requirement, "≥ 0.0 kN");

        let seal = evaluate("seal", &reqs, &empty).unwrap();
        assert_eq!(seal.criteria[0].observed, "30 mm");

        let fastener = evaluate("fastener", &reqs, &empty).unwrap();
        let clamp = fastener
            .criteria
            .iter()
            .find(|c| c.name == "Clamp Load Capacity")
            .unwrap();
        assert_eq!(clamp.observed, "12000 N");

        let motor = evaluate("motor", &reqs, &empty).unwrap();
        assert_eq!(motor.criteria[5].observed, "85.3% efficiency");
    }

    #[test]
    fn seal_temperature_and_elastomer_display() {
        let spec = ComponentSpec {
            seal_diameter: Some(30.0),
            temp_min: Some(-30.0),
            temp_max: Some(120.0),
            ..ComponentSpec::default()
        };
        let reqs = RequirementSet::new().with("elastomerMaterial", "FKM");
        let outcome = evaluate("seal", &reqs, &spec).unwrap();
        assert_eq!(outcome.criteria[3].observed, "FKM available");
        assert_eq!(outcome.criteria[4].observed, "-30.0 to 120.0°C");
        assert_eq!(outcome.criteria[4].requirement, "Operating: 20-60°C");

        let typed = ComponentSpec {
            elastomer_type: Some("NBR".to_string()),
            ..spec
        };
        let outcome = evaluate("seal", &reqs, &typed).unwrap();
        assert_eq!(outcome.criteria[3].observed, "NBR available");
    }

    #[test]
    fn fastener_material_outside_set() {
        let reqs = RequirementSet::new().with("fastenerMaterial", "Brass");
        let outcome = evaluate("fastener", &reqs, &ComponentSpec::default()).unwrap();
        assert_eq!(outcome.criteria.len(), 5);
        assert!(!outcome.criteria[2].satisfied);
        assert_eq!(outcome.criteria[2].observed, "Grade 8.8 (High-strength)");
        assert_eq!(outcome.criteria[0].observed, "Standard sizes available");
        assert_eq!(outcome.matched_count, 4);
        assert_eq!(outcome.match_score, 80);
    }

    #[test]
    fn unknown_family_is_empty() {
        let outcome = evaluate("pulley", &RequirementSet::new(), &strong_bearing()).unwrap();
        assert_eq!(outcome, EvaluationOutcome::empty());
        let metrics = performance_metrics("pulley", &RequirementSet::new(), &strong_bearing()).unwrap();
        assert!(metrics.is_empty());
    }

    #[test]
    fn malformed_numeric_requirement_propagates() {
        let reqs = RequirementSet::new().with("dynamicLoad", "heavy");
        let result = evaluate("bearing", &reqs, &strong_bearing());
        assert!(matches!(
            result,
            Err(PartselError::InvalidRequirement { ref field, .. }) if field == "dynamicLoad"
        ));
        assert!(performance_metrics("bearing", &reqs, &strong_bearing()).is_err());
    }

    #[test]
    fn metrics_show_raw_requirement() {
        let reqs = RequirementSet::new().with("speed", "1450");
        let spec = ComponentSpec {
            speed: Some(1450.0),
            ..ComponentSpec::default()
        };
        let metrics = performance_metrics("motor", &reqs, &spec).unwrap();
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics[0].target, "≥80%");
        assert_eq!(metrics[1].label, "Speed Match");
        assert_eq!(metrics[1].observed, "1450.0 RPM");
        assert_eq!(metrics[1].target, "1450 RPM");
        assert!(metrics[1].met);

        let off = RequirementSet::new().with("speed", 1460.0);
        let metrics = performance_metrics("motor", &off, &spec).unwrap();
        assert!(!metrics[1].met);
    }

    #[test]
    fn metrics_never_change_score() {
        let reqs = RequirementSet::new().with("clampLoad", 20000.0);
        let spec = ComponentSpec::default();
        let outcome = evaluate("fastener", &reqs, &spec).unwrap();
        let metrics = performance_metrics("fastener", &reqs, &spec).unwrap();
        assert!(!metrics[1].met);
        assert_eq!(metrics[0].observed, "800 MPa");
        assert_eq!(metrics[2].target, "Dry");
        assert_eq!(outcome.matched_count, 4);
    }
}
