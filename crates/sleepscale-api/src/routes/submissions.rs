use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use jiff::civil::Date;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use sleepscale_core::models::record::AssessmentRecord;
use sleepscale_core::models::score::ScoreResult;
use sleepscale_storage::records::{self, Saved};

use crate::error::ApiError;
use crate::routes::instruments::SubmissionRequest;
use crate::state::AppState;

/// Outcome of a submission. The score is always returned once computed, even
/// when saving it failed.
#[derive(Serialize)]
pub struct SubmissionResponse {
    pub record_id: Option<Uuid>,
    pub date: Date,
    pub saved: Option<Saved>,
    pub result: ScoreResult,
    pub scores: Map<String, Value>,
    pub error: Option<String>,
}

pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SubmissionRequest>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    let submission = request.into_submission();
    let result = sleepscale_instruments::score(&id, &submission)?;
    let date = submission.local_date(state.utc_offset);
    let scores = result.flat_scores();

    let record = AssessmentRecord::new(submission, result.clone(), date);
    let response = match records::save_assessment(&state.store, record).await {
        Ok((record, saved)) => {
            let status = match saved {
                Saved::Inserted => StatusCode::CREATED,
                Saved::Updated => StatusCode::OK,
            };
            (
                status,
                SubmissionResponse {
                    record_id: Some(record.id),
                    date,
                    saved: Some(saved),
                    result,
                    scores,
                    error: None,
                },
            )
        }
        Err(e) => {
            tracing::error!(instrument = %result.instrument_id, error = %e, "failed to save assessment");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                SubmissionResponse {
                    record_id: None,
                    date,
                    saved: None,
                    result,
                    scores,
                    error: Some(format!("score computed but not saved: {e}")),
                },
            )
        }
    };

    Ok((response.0, Json(response.1)))
}
