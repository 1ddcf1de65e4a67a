//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    error::ApiError,
    types::{
        CartQuery, CartResponse, ComponentListQuery, HealthResponse, HistoryQuery,
        SelectPartsRequest, SelectPartsResponse, StatusResponse,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use partsel_core::{
    CartItem, Component, ComponentId, Family, NewComponent, SelectionRecord,
    report::{BomRequest, SpecSheet, bom_csv, datasheet_text, filename_stem, specs_csv},
};
use serde_json::{Map, Value};

/// Attachment response with the given content type and filename.
fn attachment(body: String, content_type: &'static str, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

// =============================================================================
// HEALTH & STATUS
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

/// Catalog counts per family and history length.
pub async fn status_handler(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, ApiError> {
    let store = state.store.read().await;
    let stats = store.stats()?;
    Ok(Json(StatusResponse::new(stats, store.is_persistent())))
}

// =============================================================================
// CATALOG
// =============================================================================

/// List components, filtered and ordered by the query string.
pub async fn list_components_handler(
    State(state): State<AppState>,
    Query(query): Query<ComponentListQuery>,
) -> Result<Json<Vec<Component>>, ApiError> {
    let filter = query.to_filter()?;
    let store = state.store.read().await;
    Ok(Json(store.list_components(&filter)?))
}

/// Fetch one component by id.
pub async fn get_component_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Component>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.require_component(ComponentId(id))?))
}

/// Add a component to the catalog.
pub async fn create_component_handler(
    State(state): State<AppState>,
    Json(component): Json<NewComponent>,
) -> Result<(StatusCode, Json<Component>), ApiError> {
    let mut store = state.store.write().await;
    let id = store.insert_component(component)?;
    let stored = store.require_component(id)?;
    tracing::info!(id = %id, family = %stored.family, part_number = %stored.part_number, "Component added");
    Ok((StatusCode::CREATED, Json(stored)))
}

// =============================================================================
// SELECTION
// =============================================================================

/// Rank a family against the requirements in the body.
///
/// The top recommendation goes to the history log; a failure to record it
/// is logged and does not fail the request.
pub async fn select_parts_handler(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<SelectPartsResponse>, ApiError> {
    let request = SelectPartsRequest::from_body(body)?;

    let ranking = {
        let store = state.store.read().await;
        store.rank(&request.component_type, &request.requirements)?
    };
    let timestamp = Utc::now().to_rfc3339();

    tracing::info!(
        family = %request.component_type,
        total = ranking.total_matches,
        top_score = ranking.top().map(|r| r.match_score),
        "Selection ranked"
    );

    if let Some(family) = Family::parse(&request.component_type) {
        if let Some(record) = SelectionRecord::from_ranking(
            family,
            &request.requirements,
            &ranking,
            timestamp.clone(),
        ) {
            let mut store = state.store.write().await;
            if let Err(e) = store.record_selection(record) {
                tracing::warn!(error = %e, "Failed to record selection history");
            }
        }
    }

    Ok(Json(SelectPartsResponse {
        recommendations: ranking.recommendations,
        total_matches: ranking.total_matches,
        timestamp,
    }))
}

/// Recent selections, newest first.
pub async fn history_handler(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<SelectionRecord>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(state.config.limits.history_page_size);
    let store = state.store.read().await;
    Ok(Json(store.history(limit)?))
}

// =============================================================================
// DOWNLOADS
// =============================================================================

/// Specification sheet as a CSV attachment.
pub async fn download_specs_handler(Json(sheet): Json<SpecSheet>) -> Response {
    let now = Utc::now();
    let csv = specs_csv(&sheet, &now.to_rfc3339());
    let filename = format!(
        "{}-{}.csv",
        filename_stem(&sheet.component_name),
        now.timestamp()
    );
    attachment(csv, "text/csv", &filename)
}

/// Technical datasheet as a plain-text attachment.
pub async fn download_datasheet_handler(Json(sheet): Json<SpecSheet>) -> Response {
    let now = Utc::now();
    let text = datasheet_text(&sheet, &now.format("%Y-%m-%d").to_string());
    let filename = format!(
        "{}-datasheet-{}.txt",
        filename_stem(&sheet.component_name),
        now.timestamp()
    );
    attachment(text, "text/plain; charset=utf-8", &filename)
}

/// Bill of materials as a CSV attachment.
pub async fn download_bom_handler(Json(request): Json<BomRequest>) -> Result<Response, ApiError> {
    request.validate()?;
    let now = Utc::now();
    let csv = bom_csv(&request, &now.to_rfc3339());
    let filename = format!(
        "BOM-{}-{}.csv",
        filename_stem(&request.project_name),
        now.timestamp()
    );
    Ok(attachment(csv, "text/csv", &filename))
}

// =============================================================================
// CART
// =============================================================================

/// Get the session's cart, creating an empty one if needed.
pub async fn get_cart_handler(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<CartResponse>, ApiError> {
    let mut store = state.store.write().await;
    Ok(Json(store.cart(query.session())?.into()))
}

/// Add an item to the session's cart.
pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
    Json(item): Json<CartItem>,
) -> Result<(StatusCode, Json<CartResponse>), ApiError> {
    let mut store = state.store.write().await;
    let cart = store.add_to_cart(query.session(), item)?;
    Ok((StatusCode::CREATED, Json(cart.into())))
}

/// Remove a component from the session's cart.
pub async fn remove_from_cart_handler(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<CartResponse>, ApiError> {
    let component_id = query
        .component_id
        .ok_or_else(|| ApiError::bad_request("component_id is required"))?;
    let mut store = state.store.write().await;
    let cart = store.remove_from_cart(query.session(), ComponentId(component_id))?;
    Ok(Json(cart.into()))
}
