use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::respondent::Respondent;
use super::score::{ScoreResult, Severity};
use super::submission::{Response, Submission};

/// A scored submission as persisted in the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub instrument_id: String,
    pub respondent: Respondent,
    pub date: Date,
    pub responses: Vec<Response>,
    pub result: ScoreResult,
    pub submitted_at: jiff::Timestamp,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new(submission: Submission, result: ScoreResult, date: Date) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            instrument_id: result.instrument_id.clone(),
            respondent: submission.respondent,
            date,
            responses: submission.responses,
            result,
            submitted_at: submission.submitted_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Take over identity from the record this one replaces.
    pub fn replacing(mut self, previous: &AssessmentRecord) -> Self {
        self.id = previous.id;
        self.created_at = previous.created_at;
        self
    }
}

/// Latest headline score for one instrument, as shown on the patient overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub instrument_id: String,
    pub date: Date,
    pub score: u32,
    pub severity: Severity,
}

impl From<&AssessmentRecord> for AssessmentSummary {
    fn from(record: &AssessmentRecord) -> Self {
        Self {
            instrument_id: record.instrument_id.clone(),
            date: record.date,
            score: record.result.headline(),
            severity: record.result.severity.clone(),
        }
    }
}
