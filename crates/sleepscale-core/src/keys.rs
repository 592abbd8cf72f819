//! Object key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the record store. Everything belonging to one
//! respondent lives under a single prefix so per-patient queries are one
//! listing.

use jiff::civil::Date;

pub const RESPONDENTS_PREFIX: &str = "respondents/";

const TREAT_DATE_FORMAT: &str = "%Y%m%d";

pub fn respondent_prefix(name: &str) -> String {
    format!("{RESPONDENTS_PREFIX}{}/", name.trim())
}

pub fn assessments_prefix(name: &str) -> String {
    format!("{}assessments/", respondent_prefix(name))
}

pub fn instrument_assessments_prefix(name: &str, instrument_id: &str) -> String {
    format!("{}{instrument_id}/", assessments_prefix(name))
}

/// One record per respondent, instrument and day; a same-day resubmission
/// lands on the same key.
pub fn assessment(name: &str, instrument_id: &str, date: Date) -> String {
    format!("{}{date}.json", instrument_assessments_prefix(name, instrument_id))
}

pub fn diary_prefix(name: &str) -> String {
    format!("{}diary/", respondent_prefix(name))
}

pub fn diary_entry(name: &str, date: Date) -> String {
    format!("{}{date}.json", diary_prefix(name))
}

pub fn reports_prefix(name: &str) -> String {
    format!("{}reports/", respondent_prefix(name))
}

pub fn report_pdf(name: &str, treat_date: Date) -> String {
    format!(
        "{}{}.pdf",
        reports_prefix(name),
        treat_date.strftime(TREAT_DATE_FORMAT)
    )
}

/// Recover the treatment date from a key produced by [`report_pdf`].
pub fn report_treat_date(key: &str) -> Option<Date> {
    let file = key.rsplit('/').next()?;
    let stem = file.strip_suffix(".pdf")?;
    Date::strptime(TREAT_DATE_FORMAT, stem).ok()
}

/// Recover the record date from a key produced by [`assessment`] or
/// [`diary_entry`].
pub fn json_record_date(key: &str) -> Option<Date> {
    let file = key.rsplit('/').next()?;
    file.strip_suffix(".json")?.parse().ok()
}
