use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{OutreachError, SuggestionCategory};
use super::feedback::FeedbackSubmission;
use super::service::{LeadBatch, OutreachService, SuggestionRequest};
use super::weights::ScoringWeights;
use crate::error::AppError;

/// Router exposing scoring, suggestion, feedback, and weight configuration endpoints.
pub fn outreach_router(service: Arc<OutreachService>) -> Router {
    Router::new()
        .route("/api/v1/leads/score", post(score_handler))
        .route("/api/v1/leads/categorize", post(categorize_handler))
        .route("/api/v1/leads/suggestions", post(suggestions_handler))
        .route("/api/v1/feedback", post(feedback_handler))
        .route("/api/v1/feedback/trends", get(trends_handler))
        .route(
            "/api/v1/config/scoring",
            get(weights_handler).put(replace_weights_handler),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CategorizeQuery {
    #[serde(default)]
    category: Option<String>,
}

pub(crate) async fn score_handler(
    State(service): State<Arc<OutreachService>>,
    Json(batch): Json<LeadBatch>,
) -> Response {
    Json(service.score(batch)).into_response()
}

pub(crate) async fn categorize_handler(
    State(service): State<Arc<OutreachService>>,
    Query(query): Query<CategorizeQuery>,
    Json(batch): Json<LeadBatch>,
) -> Result<Response, AppError> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<SuggestionCategory>)
        .transpose()?;

    let categorized = service.categorize(batch);
    let response = match category {
        Some(category) => Json(categorized.into_bucket(category)).into_response(),
        None => Json(categorized).into_response(),
    };
    Ok(response)
}

pub(crate) async fn suggestions_handler(
    State(service): State<Arc<OutreachService>>,
    Json(request): Json<SuggestionRequest>,
) -> Response {
    Json(service.suggest(request)).into_response()
}

pub(crate) async fn feedback_handler(
    State(service): State<Arc<OutreachService>>,
    Json(submission): Json<FeedbackSubmission>,
) -> Response {
    match service.submit_feedback(submission) {
        Ok(processed) => (StatusCode::CREATED, Json(processed)).into_response(),
        Err(OutreachError::InvalidFeedback(reason)) => {
            let payload = json!({ "error": reason });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => AppError::from(other).into_response(),
    }
}

pub(crate) async fn trends_handler(State(service): State<Arc<OutreachService>>) -> Response {
    Json(service.trends()).into_response()
}

pub(crate) async fn weights_handler(State(service): State<Arc<OutreachService>>) -> Response {
    Json(*service.weights()).into_response()
}

pub(crate) async fn replace_weights_handler(
    State(service): State<Arc<OutreachService>>,
    Json(weights): Json<ScoringWeights>,
) -> Response {
    match service.replace_weights(weights) {
        Ok(current) => Json(*current).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
