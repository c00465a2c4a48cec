//! Filter model shared by every list page

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attributes a list filter can look at.
///
/// An attribute a type doesn't have is `None`; an active filter on it never matches.
pub trait Filterable {
    /// Searchable fields (id, names, description...) joined into one string
    fn search_text(&self) -> String;

    fn status_code(&self) -> Option<&str>;

    fn category_code(&self) -> Option<&str> {
        None
    }

    fn priority_code(&self) -> Option<&str> {
        None
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        None
    }

    fn filter_amount(&self) -> Option<f64> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("amount range '{0}' must look like 'min-max' or 'min+'")]
    InvalidAmountRange(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("date range is inverted: {from} is after {to}")]
    InvertedDateRange { from: NaiveDate, to: NaiveDate },
}

/// Inclusive amount bounds; `max == None` means unbounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl AmountRange {
    /// Parse "min-max" or "min+" tokens as used by the amount dropdowns
    pub fn parse(token: &str) -> Result<Self, FilterError> {
        let token = token.trim();
        let invalid = || FilterError::InvalidAmountRange(token.to_string());

        if let Some(min) = token.strip_suffix('+') {
            let min = parse_bound(min).ok_or_else(invalid)?;
            return Ok(Self { min, max: None });
        }

        let (min, max) = token.split_once('-').ok_or_else(invalid)?;
        let min = parse_bound(min).ok_or_else(invalid)?;
        let max = parse_bound(max).ok_or_else(invalid)?;
        if max < min {
            return Err(invalid());
        }
        Ok(Self {
            min,
            max: Some(max),
        })
    }

    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && self.max.map_or(true, |max| amount <= max)
    }
}

fn parse_bound(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

/// Active predicates of a list. Empty fields are inactive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub search: String,
    pub status: String,
    pub category: String,
    pub priority: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub amount: Option<AmountRange>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.status.trim().is_empty()
            && self.category.trim().is_empty()
            && self.priority.trim().is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.amount.is_none()
    }

    /// Number of active predicates (for the filter panel badge)
    pub fn active_count(&self) -> usize {
        [
            !self.search.trim().is_empty(),
            !self.status.trim().is_empty(),
            !self.category.trim().is_empty(),
            !self.priority.trim().is_empty(),
            self.date_from.is_some() || self.date_to.is_some(),
            self.amount.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// True if `item` satisfies every active predicate
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if !contains_ci(Some(item.search_text().as_str()), &self.search) {
            return false;
        }
        if !contains_ci(item.status_code(), &self.status) {
            return false;
        }
        if !contains_ci(item.category_code(), &self.category) {
            return false;
        }
        if !contains_ci(item.priority_code(), &self.priority) {
            return false;
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            let Some(date) = item.filter_date() else {
                return false;
            };
            if self.date_from.is_some_and(|from| date < from) {
                return false;
            }
            if self.date_to.is_some_and(|to| date > to) {
                return false;
            }
        }

        if let Some(range) = &self.amount {
            match item.filter_amount() {
                Some(amount) if range.contains(amount) => {}
                _ => return false,
            }
        }

        true
    }

    /// Matching items in their original order
    pub fn apply<T: Filterable + Clone>(&self, items: &[T]) -> Vec<T> {
        if self.is_empty() {
            return items.to_vec();
        }
        items
            .iter()
            .filter(|item| self.matches(*item))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring test; an empty needle always matches
fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// Raw filter panel input, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterForm {
    pub search: String,
    pub status: String,
    pub category: String,
    pub priority: String,
    pub date_from: String,
    pub date_to: String,
    pub amount: String,
}

impl FilterForm {
    pub fn to_filter(&self) -> Result<RecordFilter, FilterError> {
        let date_from = parse_optional_date(&self.date_from)?;
        let date_to = parse_optional_date(&self.date_to)?;
        if let (Some(from), Some(to)) = (date_from, date_to) {
            if from > to {
                return Err(FilterError::InvertedDateRange { from, to });
            }
        }

        let amount = if self.amount.trim().is_empty() {
            None
        } else {
            Some(AmountRange::parse(&self.amount)?)
        };

        Ok(RecordFilter {
            search: self.search.trim().to_string(),
            status: self.status.trim().to_string(),
            category: self.category.trim().to_string(),
            priority: self.priority.trim().to_string(),
            date_from,
            date_to,
            amount,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn parse_optional_date(s: &str) -> Result<Option<NaiveDate>, FilterError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FilterError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        status: &'static str,
        category: &'static str,
        date: Option<NaiveDate>,
        amount: Option<f64>,
    }

    impl Filterable for Row {
        fn search_text(&self) -> String {
            format!("{} {}", self.id, self.name)
        }
        fn status_code(&self) -> Option<&str> {
            Some(self.status)
        }
        fn category_code(&self) -> Option<&str> {
            Some(self.category)
        }
        fn filter_date(&self) -> Option<NaiveDate> {
            self.date
        }
        fn filter_amount(&self) -> Option<f64> {
            self.amount
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "SO-0001",
                name: "Maple Street House",
                status: "negotiation",
                category: "house",
                date: Some(d(2024, 3, 1)),
                amount: Some(1_000_000.0),
            },
            Row {
                id: "SO-0002",
                name: "Harbor View Condo",
                status: "closed",
                category: "condo",
                date: Some(d(2024, 3, 20)),
                amount: Some(2_500_000.0),
            },
            Row {
                id: "SO-0003",
                name: "Oak Avenue Lot",
                status: "inquiry",
                category: "land",
                date: None,
                amount: None,
            },
        ]
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let filter = RecordFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&rows()), rows());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = RecordFilter {
            search: "hARBOR view".into(),
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&rows()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["SO-0002"]);

        let filter = RecordFilter {
            search: "so-000".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows()).len(), 3);
    }

    #[test]
    fn test_amount_range_example() {
        let filter = FilterForm {
            amount: "500000-2000000".into(),
            ..Default::default()
        }
        .to_filter()
        .unwrap();
        let ids: Vec<_> = filter.apply(&rows()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["SO-0001"]);
    }

    #[test]
    fn test_amount_range_parse() {
        assert_eq!(
            AmountRange::parse("2000000+").unwrap(),
            AmountRange { min: 2_000_000.0, max: None }
        );
        assert_eq!(
            AmountRange::parse(" 0 - 500,000 ").unwrap(),
            AmountRange { min: 0.0, max: Some(500_000.0) }
        );
        assert!(AmountRange::parse("abc").is_err());
        assert!(AmountRange::parse("500-100").is_err());
        assert!(AmountRange::parse("-100").is_err());
    }

    #[test]
    fn test_amount_bounds_are_inclusive() {
        let range = AmountRange::parse("100-200").unwrap();
        assert!(range.contains(100.0));
        assert!(range.contains(200.0));
        assert!(!range.contains(200.01));
        assert!(AmountRange::parse("100+").unwrap().contains(f64::MAX));
    }

    #[test]
    fn test_date_range_is_inclusive_and_skips_undated() {
        let filter = RecordFilter {
            date_from: Some(d(2024, 3, 1)),
            date_to: Some(d(2024, 3, 20)),
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&rows()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["SO-0001", "SO-0002"]);
    }

    #[test]
    fn test_result_is_intersection_of_predicates() {
        let by_category = RecordFilter {
            category: "o".into(),
            ..Default::default()
        };
        let by_status = RecordFilter {
            status: "CLOSED".into(),
            ..Default::default()
        };
        let both = RecordFilter {
            category: "o".into(),
            status: "CLOSED".into(),
            ..Default::default()
        };

        let a = by_category.apply(&rows());
        let b = by_status.apply(&rows());
        let expected: Vec<_> = a.iter().filter(|r| b.contains(r)).cloned().collect();
        assert_eq!(both.apply(&rows()), expected);
        assert_eq!(both.active_count(), 2);
    }

    #[test]
    fn test_form_rejects_bad_input() {
        let form = FilterForm {
            date_from: "15.03.2024".into(),
            ..Default::default()
        };
        assert_eq!(
            form.to_filter(),
            Err(FilterError::InvalidDate("15.03.2024".into()))
        );

        let form = FilterForm {
            date_from: "2024-03-20".into(),
            date_to: "2024-03-01".into(),
            ..Default::default()
        };
        assert!(matches!(
            form.to_filter(),
            Err(FilterError::InvertedDateRange { .. })
        ));
    }
}
