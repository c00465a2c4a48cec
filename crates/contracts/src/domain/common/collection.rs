//! In-memory record collection owned by a page controller

use super::{
    accepts_updates, check_transition, selectable_statuses, Catalog, IdSequence, RecordFilter,
    SortState, StatusUpdate, TimelineDetails, TimelineEntry, TransitionError, WorkflowRecord,
    WorkflowStatus,
};
use crate::shared::config::WorkflowSettings;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("{element} '{id}' not found")]
    NotFound { element: &'static str, id: String },

    #[error("{element} '{id}' already exists")]
    DuplicateId { element: &'static str, id: String },

    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Look up a status by its code
pub fn status_from_code<S: WorkflowStatus>(code: &str) -> Result<S, WorkflowError> {
    S::from_code(code).ok_or_else(|| WorkflowError::UnknownStatus(code.trim().to_string()))
}

/// Canonical collection of one record kind.
///
/// Records keep insertion order. All mutations are synchronous; the last
/// write wins.
#[derive(Debug, Clone)]
pub struct RecordCollection<R: WorkflowRecord> {
    records: Vec<R>,
    sequence: IdSequence,
    settings: WorkflowSettings,
}

impl<R: WorkflowRecord> RecordCollection<R> {
    pub fn new(settings: WorkflowSettings) -> Self {
        Self {
            records: Vec::new(),
            sequence: IdSequence::new(R::id_prefix()),
            settings,
        }
    }

    /// Collection seeded with existing records
    pub fn with_records(
        settings: WorkflowSettings,
        records: impl IntoIterator<Item = R>,
    ) -> Result<Self, WorkflowError> {
        let mut collection = Self::new(settings);
        for record in records {
            collection.insert(record)?;
        }
        Ok(collection)
    }

    /// Add an already built record, rejecting duplicate ids
    pub fn insert(&mut self, record: R) -> Result<(), WorkflowError> {
        if self.get(record.id()).is_some() {
            return Err(WorkflowError::DuplicateId {
                element: R::element_name(),
                id: record.id().to_string(),
            });
        }
        self.sequence.observe(record.id());
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Append a new record built from a validated draft.
    ///
    /// The record gets the next sequential id, its initial status and exactly
    /// one timeline entry.
    pub fn create(&mut self, draft: R::Draft, now: DateTime<Utc>) -> &R {
        let id = self.sequence.next_id();
        let mut record = R::from_draft(id, draft, now, &self.settings);
        let details = record.creation_details();
        record.timeline_mut().append(
            TimelineEntry::new(format!("{} created", R::element_name()), now).with_details(details),
        );

        log::info!(
            "{} {} created with status '{}'",
            R::element_name(),
            record.id(),
            record.status().code()
        );

        let index = self.records.len();
        self.records.push(record);
        &self.records[index]
    }

    /// Move a record to a new status and log the change.
    ///
    /// On success the status is overwritten and exactly one timeline entry
    /// with previous/new status is appended. A rejected transition leaves the
    /// record untouched.
    pub fn update_status(
        &mut self,
        id: &str,
        update: StatusUpdate<R::Status>,
        now: DateTime<Utc>,
    ) -> Result<&R, WorkflowError> {
        let policy = self.settings.transition_policy;
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| WorkflowError::NotFound {
                element: R::element_name(),
                id: id.to_string(),
            })?;

        let previous = record.status();
        if let Err(e) = check_transition(previous, update.status, policy) {
            log::warn!("{} {}: transition rejected: {}", R::element_name(), id, e);
            return Err(e.into());
        }

        record.set_status(update.status, now);
        record.apply_update(&update);

        let entry = TimelineEntry::new(
            format!(
                "Status changed from {} to {}",
                previous.label(),
                update.status.label()
            ),
            now,
        )
        .with_notes(update.notes.clone())
        .with_details(TimelineDetails {
            previous_status: Some(previous.code().to_string()),
            new_status: Some(update.status.code().to_string()),
            assigned_to: update.assigned_to.clone(),
            amount: update.amount,
            documents: update.documents.clone(),
        });
        record.timeline_mut().append(entry);

        log::info!(
            "{} {}: {} -> {}",
            R::element_name(),
            id,
            previous.code(),
            update.status.code()
        );

        Ok(record)
    }

    /// Statuses offered by the update form of record `id`
    pub fn selectable_statuses(&self, id: &str) -> Vec<R::Status> {
        self.get(id)
            .map(|r| selectable_statuses(r.status(), self.settings.transition_policy))
            .unwrap_or_default()
    }

    /// Whether the update form can be opened for record `id`
    pub fn accepts_updates(&self, id: &str) -> bool {
        self.get(id)
            .is_some_and(|r| accepts_updates(r.status(), self.settings.transition_policy))
    }

    /// Records matching every active predicate, in collection order
    pub fn filtered(&self, filter: &RecordFilter) -> Vec<R> {
        filter.apply(&self.records)
    }

    /// What the table shows: filtered, then sorted by the active column
    pub fn view(&self, filter: &RecordFilter, sort: &SortState) -> Vec<R> {
        sort.sorted(&self.filtered(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_maintenance_request::{
        MaintenanceRequest, MaintenanceRequestForm, MaintenanceStatus,
    };
    use crate::domain::common::{SubjectDirectory, TransitionPolicy, ValidationErrors};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn form() -> MaintenanceRequestForm {
        MaintenanceRequestForm {
            property_id: "1".into(),
            client_id: "1".into(),
            maintenance_type: "plumbing".into(),
            priority: "high".into(),
            issue_description: "Leak".into(),
            ..Default::default()
        }
    }

    fn collection(policy: TransitionPolicy) -> RecordCollection<MaintenanceRequest> {
        let settings = WorkflowSettings {
            transition_policy: policy,
            ..Default::default()
        };
        RecordCollection::new(settings)
    }

    fn create_one(c: &mut RecordCollection<MaintenanceRequest>) -> String {
        let draft = form().validate(&SubjectDirectory::new()).unwrap();
        c.create(draft, now()).id.clone()
    }

    #[test]
    fn test_create_appends_one_record_with_one_entry() {
        let mut c = collection(TransitionPolicy::Strict);
        let id = create_one(&mut c);

        assert_eq!(id, "MR-0001");
        assert_eq!(c.len(), 1);
        let record = c.get(&id).unwrap();
        assert_eq!(record.status, MaintenanceStatus::Submitted);
        assert_eq!(record.timeline.len(), 1);
        let entry = &record.timeline.entries()[0];
        assert_eq!(entry.action, "Maintenance request created");
        assert_eq!(
            entry.details.as_ref().unwrap().new_status.as_deref(),
            Some("submitted")
        );
    }

    #[test]
    fn test_create_without_preferred_date_targets_a_week_out() {
        let mut c = collection(TransitionPolicy::Strict);
        let id = create_one(&mut c);
        let record = c.get(&id).unwrap();
        assert_eq!(record.target_date, (now() + Duration::days(7)).date_naive());
    }

    /// Create-form submit: the record is appended only when validation passes
    fn submit(
        c: &mut RecordCollection<MaintenanceRequest>,
        form: &MaintenanceRequestForm,
    ) -> Result<String, ValidationErrors> {
        let draft = form.validate(&SubjectDirectory::new())?;
        Ok(c.create(draft, now()).id.clone())
    }

    #[test]
    fn test_missing_required_field_blocks_creation() {
        let blankers: [(&str, fn(&mut MaintenanceRequestForm)); 5] = [
            ("property_id", |f| f.property_id.clear()),
            ("client_id", |f| f.client_id.clear()),
            ("maintenance_type", |f| f.maintenance_type.clear()),
            ("priority", |f| f.priority.clear()),
            ("issue_description", |f| f.issue_description.clear()),
        ];

        let mut c = collection(TransitionPolicy::Permissive);
        create_one(&mut c);
        create_one(&mut c);
        let id = c.records()[0].id.clone();
        c.update_status(&id, StatusUpdate::new(MaintenanceStatus::Assigned), now())
            .unwrap();
        let before = c.records().to_vec();

        for (field, blank) in blankers {
            let mut bad = form();
            blank(&mut bad);
            let errors = submit(&mut c, &bad).unwrap_err();
            assert!(errors.get(field).is_some(), "{} should be required", field);

            assert_eq!(c.len(), before.len());
            for (record, old) in c.records().iter().zip(&before) {
                assert_eq!(record.id, old.id);
                assert_eq!(record.status, old.status);
                assert_eq!(record.timeline.entries(), old.timeline.entries());
            }
        }

        assert_eq!(submit(&mut c, &form()).unwrap(), "MR-0003");
    }

    #[test]
    fn test_update_appends_entry_with_previous_and_new_status() {
        let mut c = collection(TransitionPolicy::Strict);
        let id = create_one(&mut c);
        let later = now() + Duration::hours(2);

        let mut update = StatusUpdate::new(MaintenanceStatus::Assigned).with_notes("Plumber booked");
        update.assigned_to = Some("Mike Ross".into());
        let record = c.update_status(&id, update, later).unwrap();

        assert_eq!(record.status, MaintenanceStatus::Assigned);
        assert_eq!(record.assigned_to.as_deref(), Some("Mike Ross"));
        assert_eq!(record.timeline.len(), 2);
        let entry = record.timeline.last().unwrap();
        assert_eq!(entry.action, "Status changed from Submitted to Assigned");
        assert_eq!(entry.notes.as_deref(), Some("Plumber booked"));
        assert_eq!(entry.timestamp, later);
        let details = entry.details.as_ref().unwrap();
        assert_eq!(details.previous_status.as_deref(), Some("submitted"));
        assert_eq!(details.new_status.as_deref(), Some("assigned"));
        assert_eq!(details.assigned_to.as_deref(), Some("Mike Ross"));
    }

    #[test]
    fn test_strict_policy_rejects_without_side_effects() {
        let mut c = collection(TransitionPolicy::Strict);
        let id = create_one(&mut c);

        let err = c
            .update_status(&id, StatusUpdate::new(MaintenanceStatus::Completed), now())
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Transition(_)));

        let record = c.get(&id).unwrap();
        assert_eq!(record.status, MaintenanceStatus::Submitted);
        assert_eq!(record.timeline.len(), 1);
        assert_eq!(record.completed_date, None);
    }

    #[test]
    fn test_permissive_policy_accepts_any_status_from_any_status() {
        for from in MaintenanceStatus::all() {
            for to in MaintenanceStatus::all() {
                let mut c = collection(TransitionPolicy::Permissive);
                let id = create_one(&mut c);
                c.update_status(&id, StatusUpdate::new(*from), now()).unwrap();

                let before = c.get(&id).unwrap().timeline.len();
                let record = c.update_status(&id, StatusUpdate::new(*to), now()).unwrap();
                assert_eq!(record.status, *to);
                assert_eq!(record.timeline.len(), before + 1);
            }
        }
    }

    #[test]
    fn test_completion_stamps_completed_date() {
        let mut c = collection(TransitionPolicy::Permissive);
        let id = create_one(&mut c);
        let done = now() + Duration::days(2);
        let record = c
            .update_status(&id, StatusUpdate::new(MaintenanceStatus::Completed), done)
            .unwrap();
        assert_eq!(record.completed_date, Some(done.date_naive()));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut c = collection(TransitionPolicy::Strict);
        let err = c
            .update_status("MR-9999", StatusUpdate::new(MaintenanceStatus::Assigned), now())
            .unwrap_err();
        assert_eq!(
            err,
            WorkflowError::NotFound {
                element: "Maintenance request",
                id: "MR-9999".into()
            }
        );
    }

    #[test]
    fn test_seeding_rejects_duplicates_and_advances_sequence() {
        let mut c = collection(TransitionPolicy::Strict);
        create_one(&mut c);
        let existing = c.records()[0].clone();

        let mut seeded =
            RecordCollection::with_records(c.settings().clone(), vec![existing.clone()]).unwrap();
        assert!(matches!(
            seeded.insert(existing),
            Err(WorkflowError::DuplicateId { .. })
        ));
        assert_eq!(create_one(&mut seeded), "MR-0002");
    }

    #[test]
    fn test_selectable_statuses_follow_policy() {
        let mut c = collection(TransitionPolicy::Strict);
        let id = create_one(&mut c);
        assert_eq!(
            c.selectable_statuses(&id),
            vec![MaintenanceStatus::Assigned, MaintenanceStatus::Cancelled]
        );
        assert!(c.selectable_statuses("missing").is_empty());
    }

    #[test]
    fn test_status_from_code() {
        assert_eq!(
            status_from_code::<MaintenanceStatus>("IN-PROGRESS"),
            Ok(MaintenanceStatus::InProgress)
        );
        assert_eq!(
            status_from_code::<MaintenanceStatus>("done"),
            Err(WorkflowError::UnknownStatus("done".into()))
        );
    }
}
