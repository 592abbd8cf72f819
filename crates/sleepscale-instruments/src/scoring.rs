use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sleepscale_core::clock::ClockTime;
use sleepscale_core::models::score::{ItemPoints, ScoreResult, Severity};
use sleepscale_core::models::submission::{Response, Submission};
use ts_rs::TS;

use crate::error::ScoringError;
use crate::Instrument;

/// One selectable answer and the points it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemOption {
    pub label: String,
    pub value: u32,
}

/// What kind of answer an item takes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ItemKind {
    /// Pick one option. A reversed item scores `min + max - value`, which for
    /// a 1–4 scale is `5 - value`.
    Choice {
        options: Vec<ItemOption>,
        reversed: bool,
    },
    /// A time of day, `HH:MM`.
    ClockTime,
    /// A number of hours in `[0, max]`.
    Hours { max: f64 },
}

/// A single question within an instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub prompt: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn choice(id: &str, prompt: &str, options: &[(&str, u32)]) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            kind: ItemKind::Choice {
                options: options
                    .iter()
                    .map(|(label, value)| ItemOption {
                        label: label.to_string(),
                        value: *value,
                    })
                    .collect(),
                reversed: false,
            },
        }
    }

    pub fn clock_time(id: &str, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            kind: ItemKind::ClockTime,
        }
    }

    pub fn hours(id: &str, prompt: &str, max: f64) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            kind: ItemKind::Hours { max },
        }
    }

    /// Mark a choice item as reverse-scored.
    pub fn reversed(mut self) -> Self {
        if let ItemKind::Choice { reversed, .. } = &mut self.kind {
            *reversed = true;
        }
        self
    }

    pub fn is_reversed(&self) -> bool {
        matches!(self.kind, ItemKind::Choice { reversed: true, .. })
    }

    /// Parse a raw answer for this item.
    pub fn resolve(&self, answer: &str) -> Result<Answer, ScoringError> {
        match &self.kind {
            ItemKind::Choice { options, reversed } => {
                let chosen = options
                    .iter()
                    .find(|o| o.label == answer.trim())
                    .ok_or_else(|| ScoringError::UnknownOption {
                        item_id: self.id.clone(),
                        option: answer.to_string(),
                    })?;
                let points = if *reversed {
                    let min = options.iter().map(|o| o.value).min().unwrap_or(0);
                    let max = options.iter().map(|o| o.value).max().unwrap_or(0);
                    min + max - chosen.value
                } else {
                    chosen.value
                };
                Ok(Answer::Choice {
                    value: chosen.value,
                    points,
                })
            }
            ItemKind::ClockTime => answer.parse().map(Answer::Time).map_err(|_| {
                ScoringError::InvalidTimeFormat {
                    item_id: self.id.clone(),
                    value: answer.to_string(),
                }
            }),
            ItemKind::Hours { max } => {
                let invalid = || ScoringError::InvalidNumber {
                    item_id: self.id.clone(),
                    value: answer.to_string(),
                    max: *max,
                };
                let hours: f64 = answer.trim().parse().map_err(|_| invalid())?;
                if !hours.is_finite() || hours < 0.0 || hours > *max {
                    return Err(invalid());
                }
                Ok(Answer::Hours(hours))
            }
        }
    }
}

/// A parsed answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    /// `value` is the option's face value, `points` the value after reversal.
    Choice { value: u32, points: u32 },
    Time(ClockTime),
    Hours(f64),
}

/// Every item of an instrument paired with its parsed answer, in item order.
#[derive(Debug)]
pub struct Answers<'a> {
    instrument_id: &'a str,
    entries: Vec<(&'a Item, Answer)>,
}

impl<'a> Answers<'a> {
    fn get(&self, item_id: &str) -> Result<Answer, ScoringError> {
        self.entries
            .iter()
            .find(|(item, _)| item.id == item_id)
            .map(|(_, answer)| *answer)
            .ok_or_else(|| ScoringError::IncompleteSubmission {
                instrument_id: self.instrument_id.to_string(),
                missing: vec![item_id.to_string()],
            })
    }

    pub fn points(&self, item_id: &str) -> Result<u32, ScoringError> {
        match self.get(item_id)? {
            Answer::Choice { points, .. } => Ok(points),
            _ => Err(self.wrong_kind(item_id)),
        }
    }

    pub fn time(&self, item_id: &str) -> Result<ClockTime, ScoringError> {
        match self.get(item_id)? {
            Answer::Time(t) => Ok(t),
            _ => Err(self.wrong_kind(item_id)),
        }
    }

    pub fn hours(&self, item_id: &str) -> Result<f64, ScoringError> {
        match self.get(item_id)? {
            Answer::Hours(h) => Ok(h),
            _ => Err(self.wrong_kind(item_id)),
        }
    }

    pub fn sum_points(&self, item_ids: &[&str]) -> Result<u32, ScoringError> {
        item_ids.iter().map(|id| self.points(id)).sum()
    }

    /// Points of every choice item, in item order.
    pub fn item_points(&self) -> Vec<ItemPoints> {
        self.entries
            .iter()
            .filter_map(|(item, answer)| match answer {
                Answer::Choice { points, .. } => Some(ItemPoints {
                    item_id: item.id.clone(),
                    points: *points,
                }),
                _ => None,
            })
            .collect()
    }

    pub fn total_points(&self) -> u32 {
        self.item_points().iter().map(|p| p.points).sum()
    }

    fn wrong_kind(&self, item_id: &str) -> ScoringError {
        ScoringError::UnknownItem {
            instrument_id: self.instrument_id.to_string(),
            item_id: item_id.to_string(),
        }
    }
}

/// Match responses to items and parse every answer.
///
/// Responses are matched by item id, so their order does not matter. The
/// submission is rejected as a whole if any item is missing, unknown,
/// answered twice, or answered with something the item does not accept.
pub fn resolve<'a>(
    instrument_id: &'a str,
    items: &'a [Item],
    responses: &[Response],
) -> Result<Answers<'a>, ScoringError> {
    let mut by_item: HashMap<&str, &str> = HashMap::with_capacity(responses.len());
    for response in responses {
        let item_id = response.item_id.as_str();
        if !items.iter().any(|i| i.id == item_id) {
            return Err(ScoringError::UnknownItem {
                instrument_id: instrument_id.to_string(),
                item_id: item_id.to_string(),
            });
        }
        if by_item.insert(item_id, response.answer.as_str()).is_some() {
            return Err(ScoringError::DuplicateResponse {
                item_id: item_id.to_string(),
            });
        }
    }

    let missing: Vec<String> = items
        .iter()
        .filter(|i| !by_item.contains_key(i.id.as_str()))
        .map(|i| i.id.clone())
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteSubmission {
            instrument_id: instrument_id.to_string(),
            missing,
        });
    }

    let entries = items
        .iter()
        .map(|item| {
            item.resolve(by_item[item.id.as_str()])
                .map(|answer| (item, answer))
        })
        .collect::<Result<Vec<_>, ScoringError>>()?;

    Ok(Answers {
        instrument_id,
        entries,
    })
}

/// A severity band covering scores up to and including `max`; the last band
/// of an instrument has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub id: String,
    pub label: String,
    pub max: Option<u32>,
}

impl SeverityBand {
    pub fn up_to(id: &str, label: &str, max: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            max: Some(max),
        }
    }

    pub fn above(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            max: None,
        }
    }

    fn severity(&self) -> Severity {
        Severity {
            id: self.id.clone(),
            label: self.label.clone(),
        }
    }
}

/// Pick the first band (in ascending order) whose upper bound admits `score`.
/// A score above every bound falls in the last band. An instrument without
/// bands cannot be banded at all.
pub fn band_for(
    instrument_id: &str,
    bands: &[SeverityBand],
    score: u32,
) -> Result<Severity, ScoringError> {
    bands
        .iter()
        .find(|b| b.max.is_none_or(|max| score <= max))
        .or(bands.last())
        .map(SeverityBand::severity)
        .ok_or_else(|| ScoringError::NoSeverityBands {
            instrument_id: instrument_id.to_string(),
        })
}

/// Step function over closed upper bounds: the index of the first bound
/// `value` does not exceed, or the number of bounds if it exceeds them all.
///
/// `step(v, &[0, 2, 4])` maps 0 → 0, 1–2 → 1, 3–4 → 2, 5+ → 3.
pub fn step(value: u32, upper_bounds: &[u32]) -> u32 {
    upper_bounds
        .iter()
        .position(|&bound| value <= bound)
        .unwrap_or(upper_bounds.len()) as u32
}

/// Zung index score: `floor(raw * 1.25 + 0.5)`, computed exactly.
pub fn standardize(raw: u32) -> u32 {
    (raw * 5 + 2) / 4
}

/// Score an instrument whose result is the sum of its item points, optionally
/// converted to the Zung index before banding.
pub fn score_by_sum<I: Instrument + ?Sized>(
    instrument: &I,
    submission: &Submission,
    standardized: bool,
) -> Result<ScoreResult, ScoringError> {
    let answers = instrument.resolve(submission)?;
    let total = answers.total_points();
    let standardized = standardized.then(|| standardize(total));

    Ok(ScoreResult {
        instrument_id: instrument.id().to_string(),
        item_points: answers.item_points(),
        components: Vec::new(),
        total,
        standardized,
        sleep_efficiency: None,
        severity: instrument.severity(standardized.unwrap_or(total))?,
    })
}
