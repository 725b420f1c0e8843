use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::chart::ChartData;
use crate::config::AnalyzerConfig;
use crate::engine::{AnalysisResult, Analyzer, Method};
use crate::error::AnalyzeError;
use crate::history::History;
use crate::metrics::{self, Metrics};
use crate::report::{iso_timestamp, AnalysisDocument};

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<Analyzer>,
    history: Arc<History>,
    default_method: Method,
    metrics: Metrics,
}

impl AppState {
    pub fn new(analyzer: Analyzer, cfg: &AnalyzerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            analyzer: Arc::new(analyzer),
            history: Arc::new(History::with_capacity(cfg.history_cap)),
            default_method: cfg.default_method,
            metrics: Metrics::init(cfg.history_cap)?,
        })
    }
}

pub fn router(state: AppState) -> Router {
    let metrics = state.metrics.router();
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/chart", post(chart))
        .route("/history", get(history))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
        .merge(metrics)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, bind: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "HTTP API listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[derive(serde::Deserialize)]
struct AnalyzeReq {
    text: String,
    #[serde(default)]
    method: Option<String>,
}

/// Failure modes of the handlers, rendered as `{"error": ...}`.
pub enum ApiError {
    BadRequest(AnalyzeError),
    Internal(String),
}

impl From<AnalyzeError> for ApiError {
    fn from(e: AnalyzeError) -> Self {
        ApiError::BadRequest(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::BadRequest(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(serde_json::json!({ "error": msg }))).into_response()
    }
}

/// Resolve the method and run the engine off the async workers.
async fn run_analysis(
    state: &AppState,
    body: &AnalyzeReq,
) -> Result<(Method, AnalysisResult), ApiError> {
    let method = match body.method.as_deref() {
        Some(m) => m.parse::<Method>().inspect_err(|_| metrics::record_rejected())?,
        None => state.default_method,
    };

    let analyzer = state.analyzer.clone();
    let text = body.text.clone();
    let started = Instant::now();
    let result = tokio::task::spawn_blocking(move || analyzer.analyze_with(&text, method))
        .await
        .map_err(|e| {
            warn!(error = %e, "analysis task failed");
            ApiError::Internal("analysis task failed".to_string())
        })?;
    metrics::record_analysis(method, started.elapsed());

    state.history.record(&body.text, method, &result);
    Ok((method, result))
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalysisDocument>, ApiError> {
    let (method, result) = run_analysis(&state, &body).await?;
    Ok(Json(AnalysisDocument::new(
        body.text,
        method,
        result,
        Local::now(),
    )))
}

async fn chart(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<ChartData>, ApiError> {
    let (_, result) = run_analysis(&state, &body).await?;
    Ok(Json(ChartData::from_result(&result)))
}

#[derive(serde::Deserialize)]
struct HistoryQuery {
    limit: Option<usize>,
}

#[derive(serde::Serialize)]
struct HistoryOut {
    timestamp: String,
    text: String,
    method: Method,
    results: AnalysisResult,
}

async fn history(
    State(state): State<AppState>,
    Query(q): Query<HistoryQuery>,
) -> Json<Vec<HistoryOut>> {
    let rows = state.history.snapshot_last_n(q.limit.unwrap_or(10));
    let out = rows
        .into_iter()
        .map(|h| HistoryOut {
            timestamp: iso_timestamp(h.at),
            text: h.text,
            method: h.method,
            results: h.result,
        })
        .collect::<Vec<_>>();
    Json(out)
}
