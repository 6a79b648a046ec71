//! HTTP API
//!
//! Axum router exposing estimation, insight classification and calculation
//! history. Compiled with the `api` feature.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::EngineConfig;
use crate::emissions::EmissionBreakdown;
use crate::estimator::FootprintEstimator;
use crate::insights::{CategoryInsights, InsightClassifier};
use crate::lifestyle::{LifestyleInput, ValidationError};
use crate::report::FootprintReport;
use crate::storage::{CalculationStore, StoreError, StoredCalculation};

const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<FootprintEstimator>,
    /// Calculation history; history endpoints return 503 without it
    pub store: Option<Arc<CalculationStore>>,
}

impl AppState {
    pub fn new(config: &EngineConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing footprint estimator...");
        let estimator = Arc::new(FootprintEstimator::from_config(config)?);

        let store = match &config.database_path {
            Some(path) => {
                tracing::info!("Opening calculation history at {}", path);
                Some(Arc::new(CalculationStore::open(path)?))
            }
            None => {
                tracing::info!("No DATABASE_PATH set, calculation history disabled");
                None
            }
        };

        Ok(Self { estimator, store })
    }

    pub fn from_parts(estimator: FootprintEstimator, store: Option<CalculationStore>) -> Self {
        Self {
            estimator: Arc::new(estimator),
            store: store.map(Arc::new),
        }
    }

    fn require_store(&self) -> Result<Arc<CalculationStore>, AppError> {
        self.store
            .clone()
            .ok_or_else(|| AppError::Unavailable("calculation history is not enabled".to_string()))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/footprint", post(estimate_footprint))
        .route("/api/footprint/insights", post(classify_breakdown))
        .route("/api/history/:user_id", get(get_history).delete(delete_history))
        .route("/api/statistics", get(get_statistics))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FootprintRequest {
    #[serde(flatten)]
    pub lifestyle: LifestyleInput,
    /// When present and history is enabled, the calculation is saved
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FootprintResponse {
    #[serde(flatten)]
    pub report: FootprintReport,
    pub calculation_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    pub breakdown: EmissionBreakdown,
    pub total_emissions: f64,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub user_id: String,
    pub calculations: Vec<StoredCalculation>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn estimate_footprint(
    State(state): State<AppState>,
    Json(request): Json<FootprintRequest>,
) -> Result<Json<FootprintResponse>, AppError> {
    let report = state.estimator.estimate(&request.lifestyle).await?;

    let calculation_id = match (&state.store, request.user_id) {
        (Some(store), Some(user_id)) => save_quietly(store.clone(), user_id, &report).await,
        _ => None,
    };

    Ok(Json(FootprintResponse {
        report,
        calculation_id,
    }))
}

/// Persist a calculation. Failures are logged and never reach the caller.
async fn save_quietly(store: Arc<CalculationStore>, user_id: String, report: &FootprintReport) -> Option<i64> {
    let result = report.result.clone();
    let recommendations = report.recommendations.clone();

    let saved = tokio::task::spawn_blocking(move || {
        store.save_calculation(&user_id, &result, &recommendations)
    })
    .await;

    match saved {
        Ok(Ok(id)) => Some(id),
        Ok(Err(e)) => {
            tracing::warn!("Failed to save calculation: {}", e);
            None
        }
        Err(e) => {
            tracing::warn!("Save task failed: {}", e);
            None
        }
    }
}

async fn classify_breakdown(Json(request): Json<InsightsRequest>) -> Json<CategoryInsights> {
    Json(InsightClassifier::classify(&request.breakdown, request.total_emissions))
}

async fn get_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let store = state.require_store()?;
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

    let lookup_id = user_id.clone();
    let calculations = tokio::task::spawn_blocking(move || store.user_history(&lookup_id, limit))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(Json(HistoryResponse {
        user_id,
        calculations,
    }))
}

async fn delete_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let store = state.require_store()?;

    let deleted = tokio::task::spawn_blocking(move || store.delete_user_data(&user_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}

async fn get_statistics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.require_store()?;

    let stats = tokio::task::spawn_blocking(move || store.statistics())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(Json(stats))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Unavailable(String),
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
