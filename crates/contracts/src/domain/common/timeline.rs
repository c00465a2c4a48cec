use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File picked in a form. Contents are never read, only name and size are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentMeta {
    pub name: String,
    pub size_bytes: u64,
}

/// Structured part of a timeline entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<String>,
}

/// One activity entry of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: Uuid,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub notes: Option<String>,
    pub details: Option<TimelineDetails>,
}

impl TimelineEntry {
    pub fn new(action: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            action: action.into(),
            timestamp,
            notes: None,
            details: None,
        }
    }

    /// Empty or whitespace-only notes are dropped
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }

    pub fn with_details(mut self, details: TimelineDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// Append-only, insertion-ordered activity log.
///
/// Entries are never re-sorted by timestamp and never removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TimelineEntry> {
        self.entries.last()
    }
}

/// Format an entry timestamp relative to `now`.
///
/// Within `threshold_hours` the text is relative ("3 hours ago"), beyond it
/// an absolute `DD.MM.YYYY HH:MM` is used. Timestamps in the future render
/// as "just now".
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>, threshold_hours: i64) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    if elapsed.num_hours() >= threshold_hours {
        return timestamp.format("%d.%m.%Y %H:%M").to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else {
        plural(elapsed.num_hours(), "hour")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut timeline = Timeline::new();
        timeline.append(TimelineEntry::new("second", at(12, 0)));
        timeline.append(TimelineEntry::new("first", at(9, 0)));
        let actions: Vec<_> = timeline.entries().iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, vec!["second", "first"]);
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let entry = TimelineEntry::new("x", at(9, 0)).with_notes(Some("   ".into()));
        assert_eq!(entry.notes, None);
        let entry = TimelineEntry::new("x", at(9, 0)).with_notes(Some(" ok ".into()));
        assert_eq!(entry.notes.as_deref(), Some("ok"));
    }

    #[test]
    fn test_format_relative() {
        let now = at(14, 30);
        assert_eq!(format_relative(now, now, 24), "just now");
        assert_eq!(format_relative(now - Duration::minutes(1), now, 24), "1 minute ago");
        assert_eq!(format_relative(now - Duration::minutes(45), now, 24), "45 minutes ago");
        assert_eq!(format_relative(now - Duration::hours(3), now, 24), "3 hours ago");
        assert_eq!(format_relative(now + Duration::minutes(5), now, 24), "just now");
    }

    #[test]
    fn test_format_absolute_beyond_threshold() {
        let now = at(14, 30);
        let old = now - Duration::hours(30);
        assert_eq!(format_relative(old, now, 24), "14.03.2024 08:30");
    }

    #[test]
    fn test_details_skip_empty_fields_in_json() {
        let details = TimelineDetails {
            new_status: Some("submitted".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json, serde_json::json!({ "newStatus": "submitted" }));
    }
}
