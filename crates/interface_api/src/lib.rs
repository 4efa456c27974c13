//! HTTP API Layer
//!
//! REST API and chat page of the fund assistant, built on Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Chat, report, fund and health endpoints
//! - **Middleware**: Request ids, tracing, request logging, CORS
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent `{error, message}` responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(Arc::new(store), config);
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_assistant::Assistant;
use domain_fund::PortfolioRepository;
use domain_portfolio::{AttributionService, ReportService};

use crate::config::ApiConfig;
use crate::handlers::{chat, frontend, fund, health, report};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn PortfolioRepository>,
    pub assistant: Assistant,
    pub reports: ReportService,
    pub attribution: AttributionService,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the services over `repository`
    pub fn new(repository: Arc<dyn PortfolioRepository>, config: ApiConfig) -> Self {
        let reports = ReportService::with_config(repository.clone(), config.report_config());
        Self {
            assistant: Assistant::with_report(repository.clone(), reports.clone()),
            attribution: AttributionService::new(repository.clone()),
            repository,
            reports,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Services and configuration shared by the handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let chat_routes = Router::new()
        .route("/message", post(chat::send_message))
        .route("/history", get(chat::history));

    let fund_routes = Router::new()
        .route("/", get(fund::list_funds))
        .route("/:id/prices", get(fund::price_history))
        .route("/:id/industries", get(fund::industries));

    let api_routes = Router::new()
        .nest("/chat", chat_routes)
        .nest("/funds", fund_routes)
        .route("/report/daily", get(report::daily_report))
        .route("/health", get(health::health_check));

    Router::new()
        .route("/", get(frontend::index))
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
