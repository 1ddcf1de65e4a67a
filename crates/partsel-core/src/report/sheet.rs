//! Specification sheet (CSV) and technical datasheet (text).

use serde::{Deserialize, Serialize};

use super::{escaped, quoted};
use crate::ranking::Recommendation;
use crate::types::{CriterionResult, Family, MetricResult};

const RULE_WIDTH: usize = 55;

fn default_component_name() -> String {
    "Component".to_string()
}

fn default_manufacturer() -> String {
    "Unknown".to_string()
}

fn default_component_type() -> String {
    "unknown".to_string()
}

/// Everything a specification sheet or datasheet shows about one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecSheet {
    #[serde(default = "default_component_name")]
    pub component_name: String,
    #[serde(default = "default_manufacturer")]
    pub manufacturer: String,
    #[serde(default = "default_component_type")]
    pub component_type: String,
    #[serde(default)]
    pub specifications: Vec<String>,
    #[serde(default)]
    pub criteria_matches: Vec<CriterionResult>,
    #[serde(default)]
    pub performance_metrics: Vec<MetricResult>,
}

impl SpecSheet {
    #[must_use]
    pub fn from_recommendation(recommendation: &Recommendation, family: Family) -> Self {
        Self {
            component_name: recommendation.name.clone(),
            manufacturer: recommendation.manufacturer.clone(),
            component_type: family.as_str().to_string(),
            specifications: recommendation.specifications.clone(),
            criteria_matches: recommendation.criteria_matches.clone(),
            performance_metrics: recommendation.performance_metrics.clone(),
        }
    }
}

/// Render the specification sheet CSV. `generated_at` is printed verbatim.
#[must_use]
pub fn specs_csv(sheet: &SpecSheet, generated_at: &str) -> String {
    let mut lines = vec![
        "COMPONENT SPECIFICATION SHEET".to_string(),
        format!("Date Generated,{}", escaped(generated_at)),
        String::new(),
        "COMPONENT INFORMATION".to_string(),
        format!("Component Name,{}", escaped(&sheet.component_name)),
        format!("Manufacturer,{}", escaped(&sheet.manufacturer)),
        format!("Component Type,{}", escaped(&sheet.component_type)),
        String::new(),
        "SPECIFICATIONS".to_string(),
    ];
    lines.extend(sheet.specifications.iter().map(|spec| escaped(spec)));

    lines.push(String::new());
    lines.push("CRITERIA MATCHING RESULTS".to_string());
    lines.push("Criteria Name,Status,Your Value,Requirement,Weight".to_string());
    for criterion in &sheet.criteria_matches {
        let status = if criterion.satisfied { "MET" } else { "NOT MET" };
        lines.push(format!(
            "{},{},{},{},{}",
            quoted(&criterion.name),
            status,
            quoted(&criterion.observed),
            quoted(&criterion.requirement),
            criterion.weight.label()
        ));
    }

    lines.push(String::new());
    lines.push("PERFORMANCE METRICS".to_string());
    lines.push("Metric,Actual Value,Target Value,Status".to_string());
    for metric in &sheet.performance_metrics {
        let status = if metric.met { "MET" } else { "CLOSE" };
        lines.push(format!(
            "{},{},{},{}",
            quoted(&metric.label),
            quoted(&metric.observed),
            quoted(&metric.target),
            status
        ));
    }

    lines.join("\n")
}

/// Render the plain-text datasheet. `generated_on` is printed verbatim.
#[must_use]
pub fn datasheet_text(sheet: &SpecSheet, generated_on: &str) -> String {
    let heavy = "═".repeat(RULE_WIDTH);
    let light = "─".repeat(RULE_WIDTH);

    let mut lines = vec![
        heavy.clone(),
        "           COMPONENT TECHNICAL DATASHEET".to_string(),
        heavy.clone(),
        String::new(),
        format!("Component:        {}", sheet.component_name),
        format!("Manufacturer:     {}", sheet.manufacturer),
        format!("Type:             {}", sheet.component_type),
        format!("Generated:        {generated_on}"),
        String::new(),
        light.clone(),
        "TECHNICAL SPECIFICATIONS".to_string(),
        light.clone(),
    ];
    lines.extend(sheet.specifications.iter().map(|spec| format!("• {spec}")));

    lines.extend([
        String::new(),
        light.clone(),
        "REQUIREMENTS COMPLIANCE".to_string(),
        light.clone(),
    ]);
    for criterion in &sheet.criteria_matches {
        let mark = if criterion.satisfied { "✓" } else { "✗" };
        lines.extend([
            format!("{mark} {} ({})", criterion.name, criterion.weight.label()),
            format!("    Requirement: {}", criterion.requirement),
            format!("    Your Input:  {}", criterion.observed),
            String::new(),
        ]);
    }

    lines.extend([
        light.clone(),
        "PERFORMANCE ANALYSIS".to_string(),
        light,
    ]);
    for metric in &sheet.performance_metrics {
        let status = if metric.met { "PASS" } else { "MARGINAL" };
        lines.push(format!(
            "• {}: {} (Target: {}) - {status}",
            metric.label, metric.observed, metric.target
        ));
    }

    lines.extend([String::new(), heavy]);
    lines.join("\n")
}
