use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A monitoring report PDF uploaded for a patient's treatment date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportDocument {
    pub treat_date: Date,
    pub key: String,
    pub size: i64,
    pub uploaded_at: Option<jiff::Timestamp>,
}
