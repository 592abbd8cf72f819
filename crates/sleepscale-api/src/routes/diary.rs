use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use sleepscale_core::models::diary::{DiarySummary, SleepDiaryEntry};
use sleepscale_storage::records::{self, Saved};

use crate::error::ApiError;
use crate::routes::parse_date;
use crate::state::AppState;

const DEFAULT_RECENT_NIGHTS: usize = 7;
const MAX_RECENT_NIGHTS: usize = 366;

#[derive(Serialize)]
pub struct DiarySaved {
    date: Date,
    saved: Saved,
    time_in_bed_hours: f64,
    sleep_efficiency: Option<f64>,
}

#[derive(Deserialize)]
pub struct RecentQuery {
    limit: Option<usize>,
}

#[derive(Serialize)]
pub struct DiaryOverview {
    entries: Vec<SleepDiaryEntry>,
    summary: DiarySummary,
}

pub async fn submit_entry(
    State(state): State<AppState>,
    Json(entry): Json<SleepDiaryEntry>,
) -> Result<(StatusCode, Json<DiarySaved>), ApiError> {
    let saved = records::save_diary_entry(&state.store, &entry).await?;
    let status = match saved {
        Saved::Inserted => StatusCode::CREATED,
        Saved::Updated => StatusCode::OK,
    };

    Ok((
        status,
        Json(DiarySaved {
            date: entry.record_date,
            saved,
            time_in_bed_hours: entry.time_in_bed_hours(),
            sleep_efficiency: entry.sleep_efficiency(),
        }),
    ))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path((name, date)): Path<(String, String)>,
) -> Result<Json<SleepDiaryEntry>, ApiError> {
    let date = parse_date(&date)?;
    let entry = records::get_diary_entry(&state.store, &name, date).await?;
    Ok(Json(entry))
}

/// The most recent nights, oldest first, with their averages.
pub async fn recent(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<DiaryOverview>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_NIGHTS)
        .clamp(1, MAX_RECENT_NIGHTS);
    let entries = records::recent_diary_entries(&state.store, &name, limit).await?;
    let summary = DiarySummary::from_entries(&entries);
    Ok(Json(DiaryOverview { entries, summary }))
}
