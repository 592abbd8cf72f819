use jiff::civil::Date;
use jiff::tz::{Offset, TimeZone};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::respondent::Respondent;

/// One answer: the item it belongs to and the text the respondent chose or
/// typed (an option label, a time of day, or a number of hours).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub item_id: String,
    pub answer: String,
}

impl Response {
    pub fn new(item_id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            answer: answer.into(),
        }
    }
}

/// A respondent's answers to one instrument, as handed over by the form host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub respondent: Respondent,
    pub responses: Vec<Response>,
    pub submitted_at: jiff::Timestamp,
}

impl Submission {
    pub fn new(respondent: Respondent, responses: Vec<Response>) -> Self {
        Self {
            respondent,
            responses,
            submitted_at: jiff::Timestamp::now(),
        }
    }

    /// The clinic-local calendar date of the submission.
    pub fn local_date(&self, offset: Offset) -> Date {
        self.submitted_at.to_zoned(TimeZone::fixed(offset)).date()
    }
}
