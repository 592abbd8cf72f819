use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::clock::ClockTime;
use crate::error::CoreError;

use super::respondent::{check_range, validate_name};

/// Five-point rating used for daytime mood and sleep quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Rating {
    VeryPoor,
    Poor,
    Fair,
    Good,
    VeryGood,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MorningFeeling {
    Poor,
    Fair,
    Good,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Interference {
    Noise,
    Pain,
    Stress,
    Temperature,
    Light,
    Other,
}

/// One night of the sleep diary. The "yesterday" fields describe the day
/// before `record_date`, the night fields the night leading into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SleepDiaryEntry {
    pub name: String,
    pub record_date: Date,

    // Yesterday
    #[ts(type = "string | null")]
    pub nap_start: Option<ClockTime>,
    #[ts(type = "string | null")]
    pub nap_end: Option<ClockTime>,
    #[serde(default)]
    pub caffeine: Option<String>,
    #[serde(default)]
    pub alcohol: Option<String>,
    #[serde(default)]
    pub medication: Option<Medication>,
    pub daytime_mood: Rating,

    // Last night
    #[serde(default)]
    pub interference: Vec<Interference>,
    #[ts(type = "string")]
    pub bed_time: ClockTime,
    #[ts(type = "string")]
    pub try_sleep_time: ClockTime,
    pub sleep_latency_min: u32,
    pub night_awake_count: u32,
    pub night_awake_total_min: u32,
    #[ts(type = "string")]
    pub final_wake_time: ClockTime,
    #[ts(type = "string")]
    pub get_up_time: ClockTime,
    pub total_sleep_hours: f64,
    pub sleep_quality: Rating,
    pub morning_feeling: MorningFeeling,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medication {
    pub name: String,
    pub dose: String,
    #[ts(type = "string")]
    pub time: ClockTime,
}

impl SleepDiaryEntry {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)?;
        check_range("sleep_latency_min", Some(self.sleep_latency_min), 0, 120)?;
        check_range("night_awake_count", Some(self.night_awake_count), 0, 10)?;
        check_range("night_awake_total_min", Some(self.night_awake_total_min), 0, 300)?;
        if !self.total_sleep_hours.is_finite() {
            return Err(CoreError::invalid("total_sleep_hours", "not a number"));
        }
        check_range("total_sleep_hours", Some(self.total_sleep_hours), 0.0, 24.0)?;
        if self.nap_start.is_some() != self.nap_end.is_some() {
            return Err(CoreError::invalid(
                "nap",
                "start and end must be given together",
            ));
        }
        Ok(())
    }

    /// Hours between going to bed and getting up, across midnight.
    pub fn time_in_bed_hours(&self) -> f64 {
        self.bed_time.hours_until(self.get_up_time)
    }

    /// Total sleep as a percentage of time in bed; `None` when no time in bed
    /// was recorded.
    pub fn sleep_efficiency(&self) -> Option<f64> {
        let in_bed = self.time_in_bed_hours();
        (in_bed > 0.0).then(|| self.total_sleep_hours / in_bed * 100.0)
    }
}

/// The per-night values plotted on the diary overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiaryNight {
    pub date: Date,
    pub sleep_latency_min: u32,
    pub night_awake_count: u32,
    pub night_awake_total_min: u32,
    pub total_sleep_hours: f64,
    pub time_in_bed_hours: f64,
    pub sleep_efficiency: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiarySummary {
    pub nights: Vec<DiaryNight>,
    pub mean_sleep_latency_min: Option<f64>,
    pub mean_night_awake_count: Option<f64>,
    pub mean_night_awake_total_min: Option<f64>,
    pub mean_total_sleep_hours: Option<f64>,
    pub mean_sleep_efficiency: Option<f64>,
}

impl DiarySummary {
    /// Summarize entries in date order, whatever order they arrive in.
    pub fn from_entries(entries: &[SleepDiaryEntry]) -> Self {
        let mut nights: Vec<DiaryNight> = entries
            .iter()
            .map(|e| DiaryNight {
                date: e.record_date,
                sleep_latency_min: e.sleep_latency_min,
                night_awake_count: e.night_awake_count,
                night_awake_total_min: e.night_awake_total_min,
                total_sleep_hours: e.total_sleep_hours,
                time_in_bed_hours: e.time_in_bed_hours(),
                sleep_efficiency: e.sleep_efficiency(),
            })
            .collect();
        nights.sort_by_key(|n| n.date);

        Self {
            mean_sleep_latency_min: mean(nights.iter().map(|n| n.sleep_latency_min as f64)),
            mean_night_awake_count: mean(nights.iter().map(|n| n.night_awake_count as f64)),
            mean_night_awake_total_min: mean(
                nights.iter().map(|n| n.night_awake_total_min as f64),
            ),
            mean_total_sleep_hours: mean(nights.iter().map(|n| n.total_sleep_hours)),
            mean_sleep_efficiency: mean(nights.iter().filter_map(|n| n.sleep_efficiency)),
            nights,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}
