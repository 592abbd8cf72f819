use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// The person filling in a questionnaire.
///
/// Only the name is required. The remaining fields are the demographics the
/// PSQI intake form collects; other instruments leave them empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Respondent {
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub height_cm: Option<u16>,
    #[serde(default)]
    pub weight_kg: Option<u16>,
    #[serde(default)]
    pub contact: Option<String>,
}

impl Respondent {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: None,
            age: None,
            height_cm: None,
            weight_kg: None,
            contact: None,
        }
    }

    /// The trimmed name used to key stored records.
    pub fn key_name(&self) -> &str {
        self.name.trim()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)?;
        check_range("age", self.age, 1, 120)?;
        check_range("height_cm", self.height_cm, 50, 250)?;
        check_range("weight_kg", self.weight_kg, 20, 200)?;
        Ok(())
    }
}

/// Names are used as a key segment, so they must be non-empty and free of `/`.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::MissingField("name".to_string()));
    }
    if name.contains('/') {
        return Err(CoreError::invalid("name", "must not contain '/'"));
    }
    Ok(())
}

pub(crate) fn check_range<T>(field: &str, value: Option<T>, min: T, max: T) -> Result<(), CoreError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    match value {
        Some(v) if v < min || v > max => Err(CoreError::invalid(
            field,
            format!("{v} is outside [{min}, {max}]"),
        )),
        _ => Ok(()),
    }
}
