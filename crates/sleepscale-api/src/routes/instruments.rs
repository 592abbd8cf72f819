use axum::Json;
use axum::extract::Path;
use serde::{Deserialize, Serialize};

use sleepscale_core::models::respondent::Respondent;
use sleepscale_core::models::score::ScoreResult;
use sleepscale_core::models::submission::{Response, Submission};
use sleepscale_instruments::scoring::{Item, SeverityBand};
use sleepscale_instruments::{Component, all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    items: Vec<Item>,
    components: Vec<Component>,
    bands: Vec<SeverityBand>,
}

/// A filled-in form as posted by the form host. The server stamps the
/// submission time unless the host supplies one.
#[derive(Deserialize)]
pub struct SubmissionRequest {
    pub respondent: Respondent,
    pub responses: Vec<Response>,
    #[serde(default)]
    pub submitted_at: Option<jiff::Timestamp>,
}

impl SubmissionRequest {
    pub fn into_submission(self) -> Submission {
        let mut submission = Submission::new(self.respondent, self.responses);
        if let Some(at) = self.submitted_at {
            submission.submitted_at = at;
        }
        submission
    }
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        items: instrument.items().to_vec(),
        components: instrument.components().to_vec(),
        bands: instrument.bands().to_vec(),
    }))
}

/// Score without saving.
pub async fn score(
    Path(id): Path<String>,
    Json(request): Json<SubmissionRequest>,
) -> Result<Json<ScoreResult>, ApiError> {
    let result = sleepscale_instruments::score(&id, &request.into_submission())?;
    Ok(Json(result))
}
