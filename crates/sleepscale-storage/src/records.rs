use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sleepscale_core::keys;
use sleepscale_core::models::diary::SleepDiaryEntry;
use sleepscale_core::models::record::{AssessmentRecord, AssessmentSummary};
use sleepscale_core::models::report::ReportDocument;
use sleepscale_core::models::respondent::validate_name;

use crate::error::StorageError;
use crate::objects::ObjectMeta;
use crate::store::{RecordStore, WriteCondition};

const MAX_SAVE_ATTEMPTS: u32 = 5;

/// Whether an upsert created a new record or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Saved {
    Inserted,
    Updated,
}

/// Save a scored assessment. A record for the same respondent, instrument and
/// day is replaced, keeping its id and creation time.
pub async fn save_assessment(
    store: &RecordStore,
    record: AssessmentRecord,
) -> Result<(AssessmentRecord, Saved), StorageError> {
    record.respondent.validate()?;
    let key = keys::assessment(
        record.respondent.key_name(),
        &record.instrument_id,
        record.date,
    );

    let (record, saved) = upsert(store, &key, |previous: Option<AssessmentRecord>| {
        match previous {
            Some(previous) => record.clone().replacing(&previous),
            None => record.clone(),
        }
    })
    .await?;

    tracing::info!(
        key = %key,
        instrument = %record.instrument_id,
        saved = ?saved,
        "assessment saved"
    );
    Ok((record, saved))
}

/// Write the value `build` makes from what is currently stored, conditional
/// on nothing having changed since it was read. Lost races are retried
/// against the winner's write.
async fn upsert<T, F>(store: &RecordStore, key: &str, build: F) -> Result<(T, Saved), StorageError>
where
    T: Serialize + DeserializeOwned,
    F: Fn(Option<T>) -> T,
{
    for attempt in 1..=MAX_SAVE_ATTEMPTS {
        let (value, saved, condition) = match store.find_json::<T>(key).await? {
            Some(current) => (
                build(Some(current.value)),
                Saved::Updated,
                WriteCondition::Matches(current.etag),
            ),
            None => (build(None), Saved::Inserted, WriteCondition::Absent),
        };

        match store.put_json_if(key, &value, &condition).await {
            Ok(()) => return Ok((value, saved)),
            Err(StorageError::PreconditionFailed { .. }) => {
                tracing::debug!(key = %key, attempt, "concurrent write, retrying");
            }
            Err(e) => return Err(e),
        }
    }

    Err(StorageError::PreconditionFailed {
        key: key.to_string(),
    })
}

/// All of a respondent's assessments, newest first, optionally for one
/// instrument only.
pub async fn list_assessments(
    store: &RecordStore,
    name: &str,
    instrument_id: Option<&str>,
) -> Result<Vec<AssessmentRecord>, StorageError> {
    validate_name(name)?;
    let prefix = match instrument_id {
        Some(id) => keys::instrument_assessments_prefix(name, &id.to_ascii_lowercase()),
        None => keys::assessments_prefix(name),
    };

    let mut records = Vec::new();
    for meta in store.list(&prefix).await? {
        if keys::json_record_date(&meta.key).is_none() {
            continue;
        }
        records.push(store.get_json::<AssessmentRecord>(&meta.key).await?);
    }
    records.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    Ok(records)
}

/// The most recent headline score per instrument, ordered by instrument id.
pub async fn latest_summaries(
    store: &RecordStore,
    name: &str,
) -> Result<Vec<AssessmentSummary>, StorageError> {
    let mut latest: BTreeMap<String, AssessmentSummary> = BTreeMap::new();
    for record in list_assessments(store, name, None).await? {
        latest
            .entry(record.instrument_id.clone())
            .or_insert_with(|| AssessmentSummary::from(&record));
    }
    Ok(latest.into_values().collect())
}

/// Validate and save a diary entry. One entry per respondent and date.
pub async fn save_diary_entry(
    store: &RecordStore,
    entry: &SleepDiaryEntry,
) -> Result<Saved, StorageError> {
    entry.validate()?;
    let key = keys::diary_entry(&entry.name, entry.record_date);

    let (_, saved) = upsert(store, &key, |_: Option<SleepDiaryEntry>| entry.clone()).await?;

    tracing::info!(key = %key, saved = ?saved, "diary entry saved");
    Ok(saved)
}

pub async fn get_diary_entry(
    store: &RecordStore,
    name: &str,
    date: Date,
) -> Result<SleepDiaryEntry, StorageError> {
    validate_name(name)?;
    store.get_json(&keys::diary_entry(name, date)).await
}

/// The `limit` most recent diary entries, oldest first.
pub async fn recent_diary_entries(
    store: &RecordStore,
    name: &str,
    limit: usize,
) -> Result<Vec<SleepDiaryEntry>, StorageError> {
    validate_name(name)?;
    let mut dated: Vec<(Date, String)> = store
        .list(&keys::diary_prefix(name))
        .await?
        .into_iter()
        .filter_map(|meta| keys::json_record_date(&meta.key).map(|date| (date, meta.key)))
        .collect();
    dated.sort();

    let skip = dated.len().saturating_sub(limit);
    let mut entries = Vec::with_capacity(dated.len() - skip);
    for (_, key) in dated.into_iter().skip(skip) {
        entries.push(store.get_json(&key).await?);
    }
    Ok(entries)
}

/// Store a monitoring report PDF for a treatment date, replacing any earlier
/// upload for that date. Returns the metadata as the store recorded it.
pub async fn put_report(
    store: &RecordStore,
    name: &str,
    treat_date: Date,
    pdf: Vec<u8>,
) -> Result<ReportDocument, StorageError> {
    validate_name(name)?;
    let key = keys::report_pdf(name, treat_date);
    store.put(&key, pdf, "application/pdf").await?;

    let doc = store
        .list(&key)
        .await?
        .into_iter()
        .find(|meta| meta.key == key)
        .and_then(report_document)
        .ok_or_else(|| StorageError::NotFound { key: key.clone() })?;

    tracing::info!(key = %key, size = doc.size, "report uploaded");
    Ok(doc)
}

/// A respondent's reports, newest treatment date first.
pub async fn list_reports(
    store: &RecordStore,
    name: &str,
) -> Result<Vec<ReportDocument>, StorageError> {
    validate_name(name)?;
    let mut reports: Vec<ReportDocument> = store
        .list(&keys::reports_prefix(name))
        .await?
        .into_iter()
        .filter_map(report_document)
        .collect();
    reports.sort_by(|a, b| b.treat_date.cmp(&a.treat_date));
    Ok(reports)
}

pub async fn get_report(
    store: &RecordStore,
    name: &str,
    treat_date: Date,
) -> Result<Vec<u8>, StorageError> {
    validate_name(name)?;
    store.get(&keys::report_pdf(name, treat_date)).await
}

fn report_document(meta: ObjectMeta) -> Option<ReportDocument> {
    keys::report_treat_date(&meta.key).map(|treat_date| ReportDocument {
        treat_date,
        key: meta.key,
        size: meta.size,
        uploaded_at: meta.last_modified,
    })
}
