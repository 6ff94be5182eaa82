//! HTTP service exposing the analyzer.
//!
//! `POST /api/analyze` with `{"url": "..."}` returns the JSON report. Invalid
//! input yields 400 and fetch failures 500, both with a `{"message": ...}` body.

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::fetch::WebFetcher;
use crate::results::AnalysisReport;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { message })).into_response()
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        error_response(status, self.to_string())
    }
}

/// Shared state for request handlers
#[derive(Clone)]
pub struct ServiceState {
    fetcher: Arc<WebFetcher>,
}

impl ServiceState {
    pub fn new(fetcher: WebFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }
}

async fn analyze_handler(
    State(state): State<ServiceState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, Response> {
    let Json(request) = payload.map_err(|rejection| {
        ::log::debug!("Rejected analyze request: {}", rejection);
        error_response(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    ::log::info!("Analyze request for {}", request.url);
    match crate::analyze_with(state.fetcher.as_ref(), &request.url).await {
        Ok(report) => Ok(Json(report)),
        Err(err) => {
            ::log::error!("Error analyzing {}: {}", request.url, err);
            Err(err.into_response())
        }
    }
}

/// Builds the service router
pub fn router(state: ServiceState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .with_state(state)
}

/// Binds `config.bind_address` and serves until the process exits
pub async fn serve(config: &AnalyzerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = WebFetcher::new(config)?;
    let app = router(ServiceState::new(fetcher));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.bind_address, e))?;

    ::log::info!("Listening on http://{}/", config.bind_address);
    ::log::info!("  - Analyze: POST http://{}/api/analyze", config.bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
