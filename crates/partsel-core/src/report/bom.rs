//! Bill of materials CSV.

use serde::{Deserialize, Serialize};

use super::{escaped, quoted};
use crate::pricing::{format_money, line_total};
use crate::primitives::MAX_CART_ITEMS;
use crate::types::PartselError;

fn default_project_name() -> String {
    "Project".to_string()
}

fn not_available() -> String {
    "N/A".to_string()
}

fn check_vendor() -> String {
    "Check Vendor".to_string()
}

fn one() -> u32 {
    1
}

/// One BOM line as the caller submits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomLine {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default = "not_available")]
    pub part_number: String,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default = "not_available")]
    pub price: String,
    #[serde(default = "check_vendor")]
    pub availability: String,
    #[serde(default = "not_available")]
    pub lead_time: String,
    #[serde(default = "not_available")]
    pub vendor_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomRequest {
    #[serde(default = "default_project_name")]
    pub project_name: String,
    #[serde(default)]
    pub components: Vec<BomLine>,
}

impl BomRequest {
    pub fn validate(&self) -> Result<(), PartselError> {
        if self.components.len() > MAX_CART_ITEMS {
            return Err(PartselError::InvalidComponent(format!(
                "bill of materials holds at most {MAX_CART_ITEMS} lines"
            )));
        }
        Ok(())
    }

    /// Sum of line totals; lines whose price does not parse are skipped.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.components
            .iter()
            .filter_map(|line| line_total(&line.price, line.quantity))
            .sum()
    }
}

/// Render the BOM CSV. `generated_at` is printed verbatim.
#[must_use]
pub fn bom_csv(request: &BomRequest, generated_at: &str) -> String {
    let mut lines = vec![
        "BILL OF MATERIALS (BOM)".to_string(),
        format!("Project,{}", escaped(&request.project_name)),
        format!("Date Generated,{}", escaped(generated_at)),
        format!("Total Components,{}", request.components.len()),
        String::new(),
        "Item #,Component Name,Manufacturer,Part Number,Qty,Unit Price,Total Price,Availability,Lead Time,Vendor URL".to_string(),
    ];

    for (index, line) in request.components.iter().enumerate() {
        let total = line_total(&line.price, line.quantity)
            .map_or_else(|| "N/A".to_string(), format_money);
        lines.push(format!(
            "{},{},{},{},{},{},{},{},{},{}",
            index + 1,
            quoted(&line.name),
            quoted(&line.manufacturer),
            quoted(&line.part_number),
            line.quantity,
            quoted(&line.price),
            quoted(&total),
            quoted(&line.availability),
            quoted(&line.lead_time),
            quoted(&line.vendor_url),
        ));
    }

    lines.push(format!(
        ",\"Total Estimated Cost\",,,,,{}",
        format_money(request.total_cost())
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: &str, quantity: u32) -> BomLine {
        BomLine {
            name: name.to_string(),
            manufacturer: "SKF".to_string(),
            part_number: not_available(),
            quantity,
            price: price.to_string(),
            availability: check_vendor(),
            lead_time: not_available(),
            vendor_url: not_available(),
        }
    }

    #[test]
    fn bom_layout_and_totals() {
        let request = BomRequest {
            project_name: "Conveyor".to_string(),
            components: vec![
                line("Ball Bearing 6008", "$25-35", 4),
                line("Custom Bracket", "Quote", 2),
                line("Hex Bolt M10", "$0.85", 20),
            ],
        };
        let csv = bom_csv(&request, "2026-03-01T10:00:00+00:00");
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "BILL OF MATERIALS (BOM)");
        assert_eq!(lines[1], "Project,Conveyor");
        assert_eq!(lines[3], "Total Components,3");
        assert!(lines[5].starts_with("Item #,Component Name"));
        assert_eq!(
            lines[6],
            "1,\"Ball Bearing 6008\",\"SKF\",\"N/A\",4,\"$25-35\",\"100.00\",\"Check Vendor\",\"N/A\",\"N/A\""
        );
        assert!(lines[7].contains(",\"Quote\",\"N/A\","));
        assert_eq!(lines[9], ",\"Total Estimated Cost\",,,,,117.00");
        assert!((request.total_cost() - 117.0).abs() < 1e-9);
    }

    #[test]
    fn oversized_bom_rejected() {
        let request = BomRequest {
            project_name: default_project_name(),
            components: vec![line("x", "$1", 1); MAX_CART_ITEMS + 1],
        };
        assert!(request.validate().is_err());
    }
}
