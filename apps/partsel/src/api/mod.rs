//! # partsel HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /status` - Catalog counts per family and history length
//! - `GET /components` - List components (`component_type`, `manufacturer`, `search`, `ordering`)
//! - `GET /components/{id}` - One component
//! - `POST /components` - Add a component
//! - `POST /select-parts` - Rank a family against requirements
//! - `GET /history` - Recent selections
//! - `POST /download-specs` - Specification sheet CSV
//! - `POST /download-datasheet` - Plain-text datasheet
//! - `POST /download-bom` - Bill of materials CSV
//! - `GET|POST|DELETE /cart` - Session cart
//!
//! ## Security Configuration
//!
//! CORS origins, the rate limit and the API key come from [`AppConfig`].

mod auth;
mod error;
mod handlers;
mod middleware;
mod types;

pub use auth::{ApiKey, key_matches};
pub use error::{ApiError, ErrorResponse, status_for};
pub use middleware::{GlobalRateLimiter, create_rate_limiter};
// Re-export handlers and types for integration tests (via `partsel::api::*`)
pub use handlers::{
    add_to_cart_handler, create_component_handler, download_bom_handler,
    download_datasheet_handler, download_specs_handler, get_cart_handler, get_component_handler,
    health_handler, history_handler, list_components_handler, remove_from_cart_handler,
    select_parts_handler, status_handler,
};
pub use types::{
    CartQuery, CartResponse, ComponentListQuery, HealthResponse, HistoryQuery, SelectPartsRequest,
    SelectPartsResponse, StatusResponse, requirements_from_json,
};

use crate::config::AppConfig;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use partsel_core::{PartselError, Store};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the store behind a lock, plus read-only config.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// App state with default configuration.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self::with_config(store, AppConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Store, config: AppConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

const CORS_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

/// Build the CORS layer from the configured origins.
///
/// - `None`: localhost only
/// - `["*"]`: every origin
/// - otherwise: the listed origins, falling back to localhost if none parse
fn build_cors_layer(origins: Option<&[String]>) -> CorsLayer {
    match origins {
        Some([wildcard]) if wildcard == "*" => {
            tracing::warn!("CORS: Allowing ALL origins. This is insecure for production!");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(hv) => {
                        tracing::info!("CORS: Allowing origin: {}", origin);
                        Some(hv)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect();

            if allowed.is_empty() {
                tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed)
                    .allow_methods(CORS_METHODS)
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            }
        }
        None => {
            tracing::info!("CORS: No origins configured, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .iter()
    .filter_map(|origin| origin.parse::<HeaderValue>().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(CORS_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting (if enabled)
/// 5. Authentication (if an API key is configured)
pub fn create_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let cors = build_cors_layer(config.security.cors_origins.as_deref());

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/status", get(handlers::status_handler))
        .route(
            "/components",
            get(handlers::list_components_handler).post(handlers::create_component_handler),
        )
        .route("/components/{id}", get(handlers::get_component_handler))
        .route("/select-parts", post(handlers::select_parts_handler))
        .route("/history", get(handlers::history_handler))
        .route("/download-specs", post(handlers::download_specs_handler))
        .route("/download-datasheet", post(handlers::download_datasheet_handler))
        .route("/download-bom", post(handlers::download_bom_handler))
        .route(
            "/cart",
            get(handlers::get_cart_handler)
                .post(handlers::add_to_cart_handler)
                .delete(handlers::remove_from_cart_handler),
        );

    match config.api_key() {
        Some(key) => {
            tracing::info!("API key authentication enabled");
            let key: ApiKey = Arc::from(key);
            router = router.layer(axum_middleware::from_fn_with_state(
                key,
                auth::api_key_auth_middleware,
            ));
        }
        None => tracing::warn!(
            "API key authentication DISABLED - all endpoints are publicly accessible! \
             Set PARTSEL_API_KEY to enable authentication."
        ),
    }

    let rate_limit = config.security.rate_limit;
    if rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
        router = router.layer(axum_middleware::from_fn_with_state(
            create_rate_limiter(rate_limit),
            middleware::rate_limit_middleware,
        ));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    router
        .layer(axum::extract::DefaultBodyLimit::max(
            config.limits.body_limit_bytes,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Bind and serve until the process is stopped.
pub async fn run_server(store: Store, config: AppConfig) -> Result<(), PartselError> {
    let addr = config.bind_address();
    let router = create_router(AppState::with_config(store, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PartselError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("partsel HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| PartselError::IoError(format!("Server error: {}", e)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/select-parts")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn localhost_preflight_allowed_by_default() {
        let router = create_router(AppState::new(Store::new()));

        let response = router.oneshot(preflight("http://localhost:5173")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:5173"))
        );
    }

    #[tokio::test]
    async fn configured_origins_replace_localhost() {
        let mut config = AppConfig::default();
        config.security.cors_origins = Some(vec!["https://parts.example.com".to_string()]);
        let router = create_router(AppState::with_config(Store::new(), config));

        let response = router
            .clone()
            .oneshot(preflight("https://parts.example.com"))
            .await
            .unwrap();
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );

        let response = router.oneshot(preflight("http://localhost:3000")).await.unwrap();
        assert!(
            !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let router = create_router(AppState::new(Store::new()));
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
