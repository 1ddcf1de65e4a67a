//! # Ranking
//!
//! Scores every cataloged component of a family and keeps the best few.
//!
//! - Components are read in catalog order through [`SpecificationSource`]
//! - Components without a specification record are skipped
//! - The sort is stable: equal scores keep catalog order
//! - Only the first [`TOP_N`] survive; `total_matches` counts all evaluated

use serde::{Deserialize, Serialize};

use crate::evaluator::{evaluate_family, family_metrics};
use crate::primitives::TOP_N;
use crate::types::{
    Alternative, Component, ComponentId, CriterionResult, EvaluationOutcome, Family,
    MetricResult, PartselError, RequirementSet,
};

/// Read access to the components of one family, in catalog order.
pub trait SpecificationSource {
    fn components_of(&self, family: Family) -> Result<Vec<Component>, PartselError>;
}

/// A slice is already in catalog order; only the family filter applies.
impl SpecificationSource for [Component] {
    fn components_of(&self, family: Family) -> Result<Vec<Component>, PartselError> {
        Ok(self
            .iter()
            .filter(|component| component.family == family)
            .cloned()
            .collect())
    }
}

/// One scored component with its full criterion breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: ComponentId,
    pub name: String,
    pub manufacturer: String,
    pub part_number: String,
    pub price: String,
    pub availability: String,
    pub lead_time: String,
    pub rating: f64,
    pub vendor_url: String,
    pub specifications: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub alternatives: Vec<Alternative>,
    pub match_score: u8,
    pub criteria_matches: Vec<CriterionResult>,
    pub performance_metrics: Vec<MetricResult>,
}

impl Recommendation {
    #[must_use]
    pub fn new(
        component: Component,
        outcome: EvaluationOutcome,
        performance_metrics: Vec<MetricResult>,
    ) -> Self {
        Self {
            id: component.id,
            name: component.name,
            manufacturer: component.manufacturer,
            part_number: component.part_number,
            price: component.price,
            availability: component.availability,
            lead_time: component.lead_time,
            rating: component.rating,
            vendor_url: component.vendor_url,
            specifications: component.specifications,
            pros: component.pros,
            cons: component.cons,
            alternatives: component.alternatives,
            match_score: outcome.match_score,
            criteria_matches: outcome.criteria,
            performance_metrics,
        }
    }
}

/// The result of one ranking request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    pub recommendations: Vec<Recommendation>,
    pub total_matches: usize,
}

impl Ranking {
    /// The best-scoring recommendation, if any component was evaluated.
    #[must_use]
    pub fn top(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }
}

/// Rank a family tag against `source`.
///
/// An unknown tag is reported the same way as an empty family: `NotFound`.
pub fn rank<S: SpecificationSource + ?Sized>(
    family_tag: &str,
    requirements: &RequirementSet,
    source: &S,
) -> Result<Ranking, PartselError> {
    let family = Family::parse(family_tag).ok_or_else(|| {
        PartselError::NotFound(format!("no components found for type '{family_tag}'"))
    })?;
    rank_family(family, requirements, source)
}

/// Rank every component of `family` held by `source`.
pub fn rank_family<S: SpecificationSource + ?Sized>(
    family: Family,
    requirements: &RequirementSet,
    source: &S,
) -> Result<Ranking, PartselError> {
    let components = source.components_of(family)?;
    if components.is_empty() {
        return Err(PartselError::NotFound(format!(
            "no components found for type '{family}'"
        )));
    }
    rank_components(family, requirements, components)
}

/// Score already-fetched components (assumed to be in catalog order).
pub fn rank_components(
    family: Family,
    requirements: &RequirementSet,
    components: Vec<Component>,
) -> Result<Ranking, PartselError> {
    let mut scored = Vec::with_capacity(components.len());
    for component in components {
        let Some(spec) = component.specification.as_ref() else {
            continue;
        };
        let outcome = evaluate_family(family, requirements, spec)?;
        let metrics = family_metrics(family, requirements, spec)?;
        scored.push(Recommendation::new(component, outcome, metrics));
    }

    let total_matches = scored.len();
    // Vec::sort_by is stable
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(TOP_N);

    Ok(Ranking {
        recommendations: scored,
        total_matches,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{ComponentSpec, NewComponent};

    fn seal(id: u64, name: &str, diameter: Option<f64>) -> Component {
        let mut new = NewComponent::new(Family::Seal, name, "Freudenberg", format!("S-{id}"));
        new.specification = diameter.map(|d| ComponentSpec {
            seal_diameter: Some(d),
            ..ComponentSpec::default()
        });
        new.into_component(ComponentId(id))
    }

    #[test]
    fn rank_orders_by_score_stably() {
        // 30 mm requested; 40 mm fails one criterion, the others pass all five
        let catalog = vec![
            seal(1, "A", Some(40.0)),
            seal(2, "B", Some(30.0)),
            seal(3, "C", Some(31.0)),
        ];
        let reqs = RequirementSet::new().with("sealDiameter", 30.0);
        let ranking = rank("seal", &reqs, catalog.as_slice()).unwrap();

        let names: Vec<_> = ranking.recommendations.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(ranking.recommendations[2].match_score, 80);
        assert_eq!(ranking.total_matches, 3);
        assert_eq!(ranking.top().unwrap().id, ComponentId(2));
    }

    #[test]
    fn rank_truncates_to_top_n() {
        let catalog: Vec<_> = (1..=5).map(|i| seal(i, "S", Some(30.0))).collect();
        let ranking = rank("seal", &RequirementSet::new(), catalog.as_slice()).unwrap();
        assert_eq!(ranking.recommendations.len(), TOP_N);
        assert_eq!(ranking.total_matches, 5);
        let ids: Vec<_> = ranking.recommendations.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn rank_skips_components_without_spec() {
        let catalog = vec![seal(1, "bare", None), seal(2, "full", Some(30.0))];
        let ranking = rank("seal", &RequirementSet::new(), catalog.as_slice()).unwrap();
        assert_eq!(ranking.total_matches, 1);
        assert_eq!(ranking.recommendations[0].name, "full");
        assert_eq!(ranking.recommendations[0].performance_metrics.len(), 3);
    }

    #[test]
    fn rank_all_unspecified_is_empty_not_error() {
        let catalog = vec![seal(1, "bare", None)];
        let ranking = rank("seal", &RequirementSet::new(), catalog.as_slice()).unwrap();
        assert!(ranking.recommendations.is_empty());
        assert_eq!(ranking.total_matches, 0);
        assert!(ranking.top().is_none());
    }

    #[test]
    fn rank_empty_family_not_found() {
        let catalog = vec![seal(1, "S", Some(30.0))];
        assert!(matches!(
            rank("gear", &RequirementSet::new(), catalog.as_slice()),
            Err(PartselError::NotFound(_))
        ));
        assert!(matches!(
            rank("sprocket", &RequirementSet::new(), catalog.as_slice()),
            Err(PartselError::NotFound(_))
        ));
    }

    #[test]
    fn rank_propagates_malformed_requirement() {
        let catalog = vec![seal(1, "S", Some(30.0))];
        let reqs = RequirementSet::new().with("pressure", "high");
        assert!(matches!(
            rank("seal", &reqs, catalog.as_slice()),
            Err(PartselError::InvalidRequirement { .. })
        ));
    }
}
