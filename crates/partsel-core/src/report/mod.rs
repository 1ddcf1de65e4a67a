//! # Report Rendering
//!
//! Pure text renderers for selection results:
//! - `specs_csv`: specification sheet as CSV
//! - `datasheet_text`: the same content as a boxed plain-text datasheet
//! - `bom_csv`: bill of materials with line and grand totals
//!
//! Renderers never read the clock; callers pass the timestamp to print.

pub mod bom;
pub mod sheet;

pub use bom::{BomLine, BomRequest, bom_csv};
pub use sheet::{SpecSheet, datasheet_text, specs_csv};

/// Quote a CSV field unconditionally, doubling embedded quotes.
#[must_use]
pub fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Quote a CSV field only when it holds a separator, quote or line break.
#[must_use]
pub fn escaped(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quoted(field)
    } else {
        field.to_string()
    }
}

/// Reduce a display name to something safe inside a download filename.
#[must_use]
pub fn filename_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "component".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quoting() {
        assert_eq!(quoted("Bore Size"), "\"Bore Size\"");
        assert_eq!(quoted("6\" flange"), "\"6\"\" flange\"");
        assert_eq!(escaped("SKF"), "SKF");
        assert_eq!(escaped("SKF, Inc."), "\"SKF, Inc.\"");
    }

    #[test]
    fn filename_stems() {
        assert_eq!(filename_stem("Deep Groove 6008"), "Deep Groove 6008");
        assert_eq!(filename_stem("a/b\"c"), "a_b_c");
        assert_eq!(filename_stem("  "), "component");
    }
}
