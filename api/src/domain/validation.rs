//! Field validation
//!
//! Validation failures are collected per field rather than short-circuiting,
//! so a caller sees every problem with its input at once.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BLANK: &str = "can't be blank";
pub const NOT_A_NUMBER: &str = "is not a number";
pub const NEGATIVE: &str = "must be greater than or equal to 0";
pub const INVALID_DATE: &str = "is not a valid date";
pub const MUST_EXIST: &str = "must exist";
pub const NO_AVAILABLE_DRIVERS: &str = "no available drivers";

/// A single failed constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every failed constraint for one record, in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{}", self.summary())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Messages recorded against one field
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Drop everything recorded against `field`
    pub fn without(mut self, field: &str) -> Self {
        self.errors.retain(|e| e.field != field);
        self
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Record a blank error unless `value` holds non-whitespace text.
    /// Returns the value when it is present.
    pub fn require(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Some(v.to_string()),
            _ => {
                self.add(field, BLANK);
                None
            }
        }
    }

    fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{} {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Records that can check their own field constraints
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A numeric form value, either a JSON number or numeric text.
/// Any other JSON value is kept as `Invalid` and reported as not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Invalid(serde_json::Value),
}

impl NumericInput {
    pub fn is_blank(&self) -> bool {
        matches!(self, NumericInput::Text(s) if s.trim().is_empty())
    }

    /// The finite value this input denotes, if any
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => s.trim().parse::<f64>().ok()?,
            NumericInput::Invalid(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

/// Required, numeric and not negative.
pub fn require_amount(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&NumericInput>,
) -> Option<f64> {
    match value {
        None => {
            errors.add(field, BLANK);
            None
        }
        Some(input) if input.is_blank() => {
            errors.add(field, BLANK);
            None
        }
        Some(input) => match input.parse() {
            None => {
                errors.add(field, NOT_A_NUMBER);
                None
            }
            Some(n) if n < 0.0 => {
                errors.add(field, NEGATIVE);
                None
            }
            Some(n) => Some(n),
        },
    }
}

/// Optional and numeric when present. Blank text counts as absent.
/// The outer `Err` carries nothing: the error has already been recorded.
pub fn optional_number(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&NumericInput>,
) -> Result<Option<f64>, ()> {
    match value {
        None => Ok(None),
        Some(input) if input.is_blank() => Ok(None),
        Some(input) => match input.parse() {
            Some(n) => Ok(Some(n)),
            None => {
                errors.add(field, NOT_A_NUMBER);
                Err(())
            }
        },
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%m/%d/%Y"];
const LONG_DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

/// Parse a calendar date from any of the accepted textual formats.
///
/// Slash-separated dates with the year last are read day-first; the
/// month-first reading is only used when day-first is impossible
/// (`09/15/2016`). Full timestamps keep their date part.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .chain(LONG_DATE_FORMATS)
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
