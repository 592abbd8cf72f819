use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use sleepscale_core::models::record::{AssessmentRecord, AssessmentSummary};
use sleepscale_instruments::all_instruments;
use sleepscale_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AssessmentQuery {
    instrument: Option<String>,
}

pub async fn list_assessments(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<AssessmentQuery>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let records =
        records::list_assessments(&state.store, &name, query.instrument.as_deref()).await?;
    Ok(Json(records))
}

/// Latest headline score per instrument, in the order the clinic lists them.
pub async fn summary(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<AssessmentSummary>>, ApiError> {
    let mut summaries = records::latest_summaries(&state.store, &name).await?;
    let order: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    summaries.sort_by_key(|s| {
        order
            .iter()
            .position(|id| *id == s.instrument_id)
            .unwrap_or(order.len())
    });
    Ok(Json(summaries))
}
