use sleepscale_core::error::CoreError;
use thiserror::Error;

/// Why a submission could not be scored. Scoring is all-or-nothing: any of
/// these means no `ScoreResult` was produced.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("incomplete submission for '{instrument_id}': missing {}", missing.join(", "))]
    IncompleteSubmission {
        instrument_id: String,
        missing: Vec<String>,
    },

    #[error("unknown item '{item_id}' for instrument '{instrument_id}'")]
    UnknownItem {
        instrument_id: String,
        item_id: String,
    },

    #[error("more than one response for item '{item_id}'")]
    DuplicateResponse { item_id: String },

    #[error("'{option}' is not an option of item '{item_id}'")]
    UnknownOption { item_id: String, option: String },

    #[error("item '{item_id}': {value:?} is not a time of day (expected HH:MM)")]
    InvalidTimeFormat { item_id: String, value: String },

    #[error("item '{item_id}': {value:?} is not a number of hours between 0 and {max}")]
    InvalidNumber {
        item_id: String,
        value: String,
        max: f64,
    },

    #[error("bed time {bed_time} and rise time {rise_time} leave no time in bed")]
    ZeroTimeInBed { bed_time: String, rise_time: String },

    #[error("instrument '{instrument_id}' defines no severity bands")]
    NoSeverityBands { instrument_id: String },

    #[error("invalid respondent: {0}")]
    Respondent(#[from] CoreError),
}
