//! # Selection History
//!
//! A record of the top recommendation handed back for a selection request.
//! Stores assign ids; callers stamp `recorded_at`.

use serde::{Deserialize, Serialize};

use crate::ranking::Ranking;
use crate::types::{ComponentId, CriterionResult, Family, RequirementSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRecord {
    /// Assigned by the store on insert; 0 until then.
    pub id: u64,
    #[serde(rename = "componentType")]
    pub family: Family,
    pub requirements: RequirementSet,
    pub component_id: ComponentId,
    pub component_name: String,
    pub match_score: u8,
    pub criteria: Vec<CriterionResult>,
    pub recorded_at: String,
}

impl SelectionRecord {
    /// Capture the top recommendation of `ranking`, if there is one.
    #[must_use]
    pub fn from_ranking(
        family: Family,
        requirements: &RequirementSet,
        ranking: &Ranking,
        recorded_at: impl Into<String>,
    ) -> Option<Self> {
        let top = ranking.top()?;
        Some(Self {
            id: 0,
            family,
            requirements: requirements.clone(),
            component_id: top.id,
            component_name: top.name.clone(),
            match_score: top.match_score,
            criteria: top.criteria_matches.clone(),
            recorded_at: recorded_at.into(),
        })
    }
}
