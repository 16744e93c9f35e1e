//! Validation configuration

use chrono::NaiveDate;

use crate::fields::validate_date;
use crate::message::FieldContext;
use crate::Result;

/// How dates are checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DateCheck {
    /// Digits and hyphens in the `YYYY-MM-DD` positions only
    ///
    /// `2021-13-45` passes. This is what published file names have always
    /// been checked against.
    #[default]
    Structural,

    /// Structural check, then the date must exist in the calendar
    Calendar,
}

/// Configuration options for validation behavior
///
/// # Examples
///
/// ```
/// use article_grammar::{DateCheck, FieldContext, ValidationConfig};
///
/// let lenient = ValidationConfig::structural();
/// assert!(lenient.check_date("2021-02-30", &FieldContext::new()).is_ok());
///
/// let strict = ValidationConfig::calendar();
/// assert!(strict.check_date("2021-02-30", &FieldContext::new()).is_err());
///
/// let custom = ValidationConfig { date_check: DateCheck::Calendar };
/// assert_eq!(custom, strict);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationConfig {
    /// Date check applied to every date field and date segment
    #[cfg_attr(feature = "serde", serde(default))]
    pub date_check: DateCheck,
}

impl ValidationConfig {
    /// Structural date checks only (the default)
    pub fn structural() -> Self {
        Self {
            date_check: DateCheck::Structural,
        }
    }

    /// Structural date checks plus calendar validity
    pub fn calendar() -> Self {
        Self {
            date_check: DateCheck::Calendar,
        }
    }

    /// Validates `d` with the configured date check
    pub fn check_date(&self, d: &str, ctx: &FieldContext<'_>) -> Result<()> {
        validate_date(d, ctx)?;
        match self.date_check {
            DateCheck::Structural => Ok(()),
            DateCheck::Calendar => match NaiveDate::parse_from_str(d, "%Y-%m-%d") {
                Ok(_) => Ok(()),
                Err(e) => ctx.format_error(
                    &format!("which is not a calendar date ({}).", e),
                    d,
                    Some("date"),
                ),
            },
        }
    }
}
