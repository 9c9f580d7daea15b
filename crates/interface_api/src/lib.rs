//! HTTP API Layer
//!
//! Read-only JSON API over the customer risk-analytics engine, using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for analytics, identity and health
//! - **Adapters**: File-backed snapshot source
//! - **DTOs**: Request/Response data transfer objects
//! - **i18n**: Norwegian explanations for risk reasons
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{build_service, create_router};
//!
//! let app = create_router(build_service(&config), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod adapters;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod i18n;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_analytics::AnalyticsService;

use crate::adapters::FileSnapshotAdapter;
use crate::config::ApiConfig;
use crate::handlers::{analytics, health, identity};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AnalyticsService>,
    pub config: Arc<ApiConfig>,
}

/// Analytics service reading snapshots from the configured data directory
pub fn build_service(config: &ApiConfig) -> Arc<AnalyticsService> {
    let port = FileSnapshotAdapter::new(config.data_dir.clone());
    Arc::new(AnalyticsService::new(Arc::new(port), config.risk))
}

/// Creates the main API router
pub fn create_router(service: Arc<AnalyticsService>, config: ApiConfig) -> Router {
    let state = AppState {
        service,
        config: Arc::new(config),
    };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route("/customers/:id/analytics", get(analytics::customer_analytics))
        .route("/analytics", post(analytics::analyze_snapshot))
        .route("/identity/validate", post(identity::validate_identity));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
