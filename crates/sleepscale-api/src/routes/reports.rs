use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;

use sleepscale_core::models::report::ReportDocument;
use sleepscale_storage::records;

use crate::error::ApiError;
use crate::routes::parse_date;
use crate::state::AppState;

const PDF_MAGIC: &[u8] = b"%PDF-";

pub async fn list_reports(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<ReportDocument>>, ApiError> {
    let reports = records::list_reports(&state.store, &name).await?;
    Ok(Json(reports))
}

pub async fn get_report(
    State(state): State<AppState>,
    Path((name, treat_date)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let treat_date = parse_date(&treat_date)?;
    let pdf = records::get_report(&state.store, &name, treat_date).await?;

    let disposition = format!(
        "attachment; filename=\"{}.pdf\"",
        treat_date.strftime("%Y%m%d")
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    ))
}

pub async fn put_report(
    State(state): State<AppState>,
    Path((name, treat_date)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<ReportDocument>, ApiError> {
    let treat_date = parse_date(&treat_date)?;
    if !body.starts_with(PDF_MAGIC) {
        return Err(ApiError::BadRequest("report must be a PDF document".to_string()));
    }

    let doc = records::put_report(&state.store, &name, treat_date, body.to_vec()).await?;
    Ok(Json(doc))
}
