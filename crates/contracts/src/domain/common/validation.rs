//! Form validation helpers

use super::{AttachmentMeta, Catalog};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Per-field error messages collected while validating a form.
///
/// Keys are the form field names, so the view can put each message next to its input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Record the error of `result` under `field` and return the value if any
    pub fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub fn required_text(value: &str, label: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(value.to_string())
    }
}

/// Empty input becomes `None`
pub fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn required_email(value: &str, label: &str) -> Result<String, String> {
    let value = required_text(value, label)?;
    let valid = value
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.ends_with('.'));
    if valid {
        Ok(value)
    } else {
        Err(format!("{} must be a valid email address", label))
    }
}

/// Parse a non-negative amount; thousands separators and a leading `$` are accepted
pub fn parse_amount(value: &str, label: &str) -> Result<f64, String> {
    let cleaned: String = value
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != ' ')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Ok(_) => Err(format!("{} must be a positive number", label)),
        Err(_) => Err(format!("{} must be a number", label)),
    }
}

pub fn required_amount(value: &str, label: &str) -> Result<f64, String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", label));
    }
    parse_amount(value, label)
}

pub fn optional_amount(value: &str, label: &str) -> Result<Option<f64>, String> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_amount(value, label).map(Some)
    }
}

pub fn optional_count(value: &str, label: &str) -> Result<Option<u32>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u32>()
        .map(Some)
        .map_err(|_| format!("{} must be a whole number", label))
}

pub fn optional_date(value: &str, label: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("{} must be a date (YYYY-MM-DD)", label))
}

pub fn required_date(value: &str, label: &str) -> Result<NaiveDate, String> {
    optional_date(value, label)?.ok_or_else(|| format!("{} is required", label))
}

/// Value picked from a catalog dropdown
pub fn required_option<C: Catalog>(value: &str, label: &str) -> Result<C, String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", label));
    }
    C::from_code(value).ok_or_else(|| format!("Unknown {} '{}'", label.to_lowercase(), value.trim()))
}

/// Attachment names for the activity log
pub fn attachment_names(attachments: &[AttachmentMeta]) -> Vec<String> {
    attachments.iter().map(|a| a.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Priority;

    #[test]
    fn test_check_collects_first_error_per_field() {
        let mut errors = ValidationErrors::new();
        assert_eq!(errors.check("title", required_text("  ", "Title")), None);
        errors.add("title", "ignored second message");
        assert_eq!(errors.check("note", Ok::<_, String>(1)), Some(1));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,250,000", "Amount"), Ok(1_250_000.0));
        assert_eq!(parse_amount("99.5", "Amount"), Ok(99.5));
        assert_eq!(parse_amount("abc", "Amount"), Err("Amount must be a number".into()));
        assert_eq!(
            parse_amount("-1", "Amount"),
            Err("Amount must be a positive number".into())
        );
        assert_eq!(required_amount("", "Amount"), Err("Amount is required".into()));
        assert_eq!(optional_amount(" ", "Cost"), Ok(None));
    }

    #[test]
    fn test_dates() {
        assert_eq!(optional_date("", "Date"), Ok(None));
        assert_eq!(
            optional_date("2024-03-15", "Date"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 15))
        );
        assert!(optional_date("15/03/2024", "Date").is_err());
        assert_eq!(required_date("", "Date"), Err("Date is required".into()));
    }

    #[test]
    fn test_email() {
        assert!(required_email("agent@realty.com", "Email").is_ok());
        assert!(required_email("agent@realty", "Email").is_err());
        assert!(required_email("@realty.com", "Email").is_err());
        assert_eq!(required_email("", "Email"), Err("Email is required".into()));
    }

    #[test]
    fn test_required_option() {
        assert_eq!(required_option::<Priority>("high", "Priority"), Ok(Priority::High));
        assert_eq!(
            required_option::<Priority>("urgent", "Priority"),
            Err("Unknown priority 'urgent'".into())
        );
        assert_eq!(
            required_option::<Priority>("", "Priority"),
            Err("Priority is required".into())
        );
    }
}
