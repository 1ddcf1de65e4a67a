//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::{Backend, ReportFormat};
use crate::api;
use crate::config::AppConfig;
use chrono::Utc;
use partsel_core::{
    Component, ComponentFilter, ComponentId, Family, NewComponent, PartselError, Ranking,
    RequirementSet, SelectionRecord, Store, catalog_from_bytes, catalog_to_bytes,
    primitives::MAX_CART_ITEMS,
    ranking::rank_components,
    report::{BomRequest, SpecSheet, bom_csv, datasheet_text, specs_csv},
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size of a catalog file accepted by `import` (50 MB).
const MAX_IMPORT_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Maximum size of a requirements or BOM file (1 MB).
const MAX_INPUT_FILE_SIZE: u64 = 1024 * 1024;

fn validate_file_size(path: &Path, max_size: u64) -> Result<(), PartselError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| PartselError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(PartselError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve an input path to an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, PartselError> {
    let canonical = path.canonicalize().map_err(|e| {
        PartselError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(PartselError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Resolve an output path against its (existing) parent directory.
fn validate_output_path(path: &Path) -> Result<PathBuf, PartselError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        PartselError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(PartselError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| PartselError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

/// Read and size-check an input file.
fn read_input(path: &Path, max_size: u64) -> Result<Vec<u8>, PartselError> {
    let validated = validate_file_path(path)?;
    validate_file_size(&validated, max_size)?;
    std::fs::read(&validated)
        .map_err(|e| PartselError::IoError(format!("Read file: {}", e)))
}

fn write_output(path: &Path, contents: &str) -> Result<PathBuf, PartselError> {
    let validated = validate_output_path(path)?;
    std::fs::write(&validated, contents)
        .map_err(|e| PartselError::IoError(format!("Write file: {}", e)))?;
    Ok(validated)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), PartselError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| PartselError::SerializationError(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

/// Parse a requirements file: a JSON object of field names to values.
///
/// A `componentType` key, if present, is ignored in favor of `--family`.
fn load_requirements(path: &Path) -> Result<RequirementSet, PartselError> {
    let data = read_input(path, MAX_INPUT_FILE_SIZE)?;
    let mut fields: Map<String, Value> = serde_json::from_slice(&data)
        .map_err(|e| PartselError::DeserializationError(format!("Requirements file: {}", e)))?;
    fields.remove("componentType");
    api::requirements_from_json(fields)
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    db_path: &Path,
    backend: Backend,
    config: AppConfig,
) -> Result<(), PartselError> {
    let store = open_store(db_path, backend)?;

    println!("partsel Selection Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Address:  {}", config.bind_address());
    println!("  Backend:  {}", backend.as_str());
    println!("  Database: {:?}", db_path);
    println!(
        "  Auth:     {}",
        if config.api_key().is_some() {
            "api key"
        } else {
            "disabled"
        }
    );
    println!();
    println!("Endpoints:");
    println!("  POST /select-parts       - Rank components against requirements");
    println!("  GET  /components         - List the catalog");
    println!("  GET  /history            - Recent selections");
    println!("  POST /download-specs     - Specification sheet CSV");
    println!("  POST /download-datasheet - Technical datasheet");
    println!("  POST /download-bom       - Bill of materials CSV");
    println!("  GET  /cart               - Session cart");
    println!("  GET  /health             - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    if backend == Backend::File {
        tracing::warn!("File backend: changes made through the server are not written back");
    }

    api::run_server(store, config).await
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show catalog status.
pub fn cmd_status(db_path: &Path, backend: Backend, json_mode: bool) -> Result<(), PartselError> {
    let store = open_store(db_path, backend)?;
    let stats = store.stats()?;

    if json_mode {
        let output = serde_json::json!({
            "database": db_path.to_string_lossy(),
            "backend": backend.as_str(),
            "total_components": stats.total_components,
            "components_by_family": stats.components_by_family,
            "history_records": stats.history_records,
        });
        return print_json(&output);
    }

    println!("partsel Catalog Status");
    println!("======================");
    println!("Database: {:?}", db_path);
    println!("Backend:  {}", backend.as_str());
    println!();
    for (family, count) in &stats.components_by_family {
        println!("{:<10} {}", family.as_str(), count);
    }
    println!("{:<10} {}", "total", stats.total_components);
    println!();
    println!("History records: {}", stats.history_records);

    Ok(())
}

// =============================================================================
// INIT COMMAND
// =============================================================================

/// Initialize a new empty database.
pub fn cmd_init(db_path: &Path, backend: Backend, force: bool) -> Result<(), PartselError> {
    if db_path.exists() {
        if !force {
            return Err(PartselError::IoError(
                "Database already exists. Use --force to overwrite.".to_string(),
            ));
        }
        std::fs::remove_file(db_path)
            .map_err(|e| PartselError::IoError(format!("Remove existing database: {}", e)))?;
    }

    match backend {
        Backend::Redb => {
            let _store = Store::with_redb(db_path)?;
            println!("Initialized new redb database at {:?}", db_path);
        }
        Backend::File => {
            save_store(&Store::new(), db_path)?;
            println!("Initialized new file database at {:?}", db_path);
        }
    }

    Ok(())
}

// =============================================================================
// IMPORT COMMAND
// =============================================================================

/// Import components from a JSON array of new components.
pub fn cmd_import(
    db_path: &Path,
    backend: Backend,
    json_mode: bool,
    file: &Path,
) -> Result<(), PartselError> {
    tracing::info!("Importing components from {:?}", file);

    let data = read_input(file, MAX_IMPORT_FILE_SIZE)?;
    let components: Vec<NewComponent> = serde_json::from_slice(&data)
        .map_err(|e| PartselError::DeserializationError(format!("Catalog file: {}", e)))?;

    let mut store = open_store(db_path, backend)?;
    let imported = store.import_components(components);
    // Partial imports are kept, so save before reporting a failure.
    save_store(&store, db_path)?;
    let ids = imported?;

    if json_mode {
        return print_json(&serde_json::json!({
            "imported": ids.len(),
            "ids": ids,
            "total_components": store.component_count()?,
        }));
    }

    println!("Imported {} components", ids.len());
    println!("Catalog now holds {} components", store.component_count()?);

    Ok(())
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// List components matching the optional filters.
pub fn cmd_list(
    db_path: &Path,
    backend: Backend,
    json_mode: bool,
    family: Option<String>,
    search: Option<String>,
    manufacturer: Option<String>,
) -> Result<(), PartselError> {
    let filter = ComponentFilter {
        family: family.as_deref().map(str::parse::<Family>).transpose()?,
        manufacturer,
        search,
        ..ComponentFilter::default()
    };

    let store = open_store(db_path, backend)?;
    let components = store.list_components(&filter)?;

    if json_mode {
        return print_json(&components);
    }

    if components.is_empty() {
        println!("No components found");
        return Ok(());
    }

    for component in &components {
        print_component_line(component);
    }
    println!();
    println!("{} components", components.len());

    Ok(())
}

fn print_component_line(component: &Component) {
    println!(
        "[{:>4}] {:<9} {:<32} {:<12} {:<14} {:.1}  {}",
        component.id.0,
        component.family.as_str(),
        component.name,
        component.manufacturer,
        component.part_number,
        component.rating,
        component.price
    );
}

// =============================================================================
// SELECT COMMAND
// =============================================================================

/// Rank a family against a requirements file and record the top pick.
pub fn cmd_select(
    db_path: &Path,
    backend: Backend,
    json_mode: bool,
    family: &str,
    requirements: &Path,
) -> Result<(), PartselError> {
    let reqs = load_requirements(requirements)?;
    let mut store = open_store(db_path, backend)?;
    let ranking = store.rank(family, &reqs)?;
    let timestamp = Utc::now().to_rfc3339();
    record_history(&mut store, db_path, family, &reqs, &ranking, &timestamp);

    if json_mode {
        return print_json(&serde_json::json!({
            "recommendations": ranking.recommendations,
            "totalMatches": ranking.total_matches,
            "timestamp": timestamp,
        }));
    }

    print_ranking(&ranking);
    Ok(())
}

/// Append the top pick to the history log and persist it. Failures are
/// logged; the ranking is shown either way.
fn record_history(
    store: &mut Store,
    db_path: &Path,
    family: &str,
    reqs: &RequirementSet,
    ranking: &Ranking,
    timestamp: &str,
) -> bool {
    let Some(family) = Family::parse(family) else {
        return false;
    };
    let Some(record) = SelectionRecord::from_ranking(family, reqs, ranking, timestamp) else {
        return false;
    };
    let recorded = match store.record_selection(record) {
        Ok(_) => save_store(store, db_path),
        Err(e) => Err(e),
    };
    if let Err(e) = recorded {
        tracing::warn!(error = %e, "Failed to record selection history");
        return false;
    }
    true
}

fn print_ranking(ranking: &Ranking) {
    println!("{} components evaluated", ranking.total_matches);

    for (place, rec) in ranking.recommendations.iter().enumerate() {
        println!();
        println!(
            "#{} {} ({}) [id {}] - score {}",
            place + 1,
            rec.name,
            rec.manufacturer,
            rec.id,
            rec.match_score
        );
        println!(
            "   {} | {} | lead time {}",
            rec.price, rec.availability, rec.lead_time
        );
        for criterion in &rec.criteria_matches {
            println!(
                "   {} {:<28} required {:<22} actual {}",
                if criterion.satisfied { "+" } else { "-" },
                criterion.name,
                criterion.requirement,
                criterion.observed
            );
        }
    }
}

// =============================================================================
// REPORT COMMAND
// =============================================================================

/// Evaluate one component against a requirements file and write its report.
pub fn cmd_report(
    db_path: &Path,
    backend: Backend,
    family: &str,
    requirements: &Path,
    component: u64,
    output: &Path,
    format: ReportFormat,
) -> Result<(), PartselError> {
    let family: Family = family.parse()?;
    let reqs = load_requirements(requirements)?;

    let store = open_store(db_path, backend)?;
    let component = store.require_component(ComponentId(component))?;
    if component.family != family {
        return Err(PartselError::NotFound(format!(
            "component {} is a {}, not a {}",
            component.id, component.family, family
        )));
    }

    let ranking = rank_components(family, &reqs, vec![component])?;
    let recommendation = ranking
        .top()
        .ok_or_else(|| PartselError::NotFound(format!("no evaluation for type '{family}'")))?;
    let sheet = SpecSheet::from_recommendation(recommendation, family);

    let now = Utc::now();
    let contents = match format {
        ReportFormat::Csv => specs_csv(&sheet, &now.to_rfc3339()),
        ReportFormat::Text => datasheet_text(&sheet, &now.format("%Y-%m-%d").to_string()),
    };
    let written = write_output(output, &contents)?;

    println!(
        "{} scored {} against the requirements",
        sheet.component_name, recommendation.match_score
    );
    println!("Wrote {} bytes to {:?}", contents.len(), written);

    Ok(())
}

// =============================================================================
// BOM COMMAND
// =============================================================================

/// Render a bill of materials from a JSON request file.
pub fn cmd_bom(file: &Path, output: &Path) -> Result<(), PartselError> {
    let data = read_input(file, MAX_INPUT_FILE_SIZE)?;
    let request: BomRequest = serde_json::from_slice(&data)
        .map_err(|e| PartselError::DeserializationError(format!("BOM file: {}", e)))?;
    request.validate()?;

    let csv = bom_csv(&request, &Utc::now().to_rfc3339());
    let written = write_output(output, &csv)?;

    println!(
        "BOM for {}: {} lines (max {}), total ${:.2}",
        request.project_name,
        request.components.len(),
        MAX_CART_ITEMS,
        request.total_cost()
    );
    println!("Wrote {:?}", written);

    Ok(())
}

// =============================================================================
// HISTORY COMMAND
// =============================================================================

/// Show the most recent selections, newest first.
pub fn cmd_history(
    db_path: &Path,
    backend: Backend,
    json_mode: bool,
    limit: usize,
) -> Result<(), PartselError> {
    let store = open_store(db_path, backend)?;
    let records = store.history(limit)?;

    if json_mode {
        return print_json(&records);
    }

    if records.is_empty() {
        println!("No selections recorded");
        return Ok(());
    }

    for record in &records {
        println!(
            "#{:<5} {}  {:<9} {:<32} score {}",
            record.id,
            record.recorded_at,
            record.family.as_str(),
            record.component_name,
            record.match_score
        );
    }

    Ok(())
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Open the store at `db_path` with the given backend.
///
/// The file backend starts empty when the file does not exist yet.
pub fn open_store(db_path: &Path, backend: Backend) -> Result<Store, PartselError> {
    match backend {
        Backend::Redb => Store::with_redb(db_path),
        Backend::File => {
            if !db_path.exists() {
                return Ok(Store::new());
            }
            let data = std::fs::read(db_path)
                .map_err(|e| PartselError::IoError(format!("Read db: {}", e)))?;
            Ok(Store::with_catalog(catalog_from_bytes(&data)?))
        }
    }
}

/// Write an in-memory store back to its snapshot file. Redb stores are
/// already durable.
pub fn save_store(store: &Store, db_path: &Path) -> Result<(), PartselError> {
    match store.catalog_opt() {
        None => Ok(()),
        Some(catalog) => {
            let data = catalog_to_bytes(catalog)?;
            std::fs::write(db_path, &data)
                .map_err(|e| PartselError::IoError(format!("Write db: {}", e)))
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
