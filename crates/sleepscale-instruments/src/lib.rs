//! sleepscale-instruments
//!
//! Questionnaire definitions and the scoring engine. Pure and synchronous:
//! no I/O, no shared mutable state. Defines the items, options, scoring
//! rules and severity bands for each supported instrument.

pub mod error;
pub mod instruments;
pub mod scoring;

use serde::{Deserialize, Serialize};
use sleepscale_core::models::score::{ScoreResult, Severity};
use sleepscale_core::models::submission::Submission;
use ts_rs::TS;

use error::ScoringError;
use scoring::{Answers, Item, SeverityBand};

/// A named sub-score an instrument reports besides its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Component {
    pub id: String,
    pub name: String,
}

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "isi", "psqi").
    fn id(&self) -> &str;

    /// Display name as printed on the form.
    fn name(&self) -> &str;

    /// The questions, in form order.
    fn items(&self) -> &[Item];

    /// Severity bands in ascending order.
    fn bands(&self) -> &[SeverityBand];

    /// Sub-scores reported alongside the total. Most instruments have none.
    fn components(&self) -> &[Component] {
        &[]
    }

    /// Score a complete submission.
    fn score(&self, submission: &Submission) -> Result<ScoreResult, ScoringError>;

    /// Validate the respondent and parse every answer against this
    /// instrument's items.
    fn resolve<'a>(&'a self, submission: &Submission) -> Result<Answers<'a>, ScoringError> {
        submission.respondent.validate()?;
        scoring::resolve(self.id(), self.items(), &submission.responses)
    }

    fn severity(&self, score: u32) -> Result<Severity, ScoringError> {
        scoring::band_for(self.id(), self.bands(), score)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::psqi::Psqi),
        Box::new(instruments::isi::Isi),
        Box::new(instruments::has::Has),
        Box::new(instruments::fss::Fss),
        Box::new(instruments::sas::Sas),
        Box::new(instruments::sds::Sds),
    ]
}

/// Look up an instrument by ID. Codes are matched case-insensitively, so
/// "ISI" and "isi" are the same instrument.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments()
        .into_iter()
        .find(|i| i.id().eq_ignore_ascii_case(id))
}

/// Score a submission for the instrument with the given ID.
pub fn score(instrument_id: &str, submission: &Submission) -> Result<ScoreResult, ScoringError> {
    get_instrument(instrument_id)
        .ok_or_else(|| ScoringError::UnknownInstrument(instrument_id.to_string()))?
        .score(submission)
}
