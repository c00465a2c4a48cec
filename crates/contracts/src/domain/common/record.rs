use super::{Catalog, Filterable, Sortable, Timeline, TimelineDetails, WorkflowStatus};
use crate::shared::config::WorkflowSettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated output of a status-update form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate<S> {
    pub status: S,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
    pub amount: Option<f64>,
    pub documents: Vec<String>,
}

impl<S> StatusUpdate<S> {
    pub fn new(status: S) -> Self {
        Self {
            status,
            notes: None,
            assigned_to: None,
            amount: None,
            documents: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A record tracked through a status workflow (sales order, purchase order,
/// maintenance request, client onboarding, property listing).
pub trait WorkflowRecord: Filterable + Sortable + Clone {
    type Status: WorkflowStatus;
    /// Validated create-form payload
    type Draft;

    /// Id prefix, e.g. "MR-"
    fn id_prefix() -> &'static str;

    /// Singular name for UI and activity entries, e.g. "Maintenance request"
    fn element_name() -> &'static str;

    fn from_draft(
        id: String,
        draft: Self::Draft,
        now: DateTime<Utc>,
        settings: &WorkflowSettings,
    ) -> Self;

    fn id(&self) -> &str;

    fn status(&self) -> Self::Status;

    /// Overwrite the status; implementations stamp their completion date here
    fn set_status(&mut self, status: Self::Status, now: DateTime<Utc>);

    fn timeline(&self) -> &Timeline;

    fn timeline_mut(&mut self) -> &mut Timeline;

    /// Details of the initial activity entry
    fn creation_details(&self) -> TimelineDetails {
        TimelineDetails {
            new_status: Some(self.status().code().to_string()),
            ..Default::default()
        }
    }

    /// Copy kind-specific fields of an accepted update (assignee, cost...)
    fn apply_update(&mut self, _update: &StatusUpdate<Self::Status>) {}
}
