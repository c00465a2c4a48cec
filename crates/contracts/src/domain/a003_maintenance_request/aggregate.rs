use crate::domain::common::validation::{
    optional_amount, optional_date, required_option, required_text,
};
use crate::domain::common::{
    cmp_opt, AttachmentMeta, Catalog, Filterable, NameLookup, Priority, Sortable, StatusUpdate,
    SubjectRef, Timeline, TimelineDetails, ValidationErrors, WorkflowRecord, WorkflowStatus,
};
use crate::shared::config::WorkflowSettings;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::catalog_enum! {
    /// Maintenance request lifecycle
    pub enum MaintenanceStatus {
        Submitted => ("submitted", "Submitted"),
        Assigned => ("assigned", "Assigned"),
        InProgress => ("in-progress", "In Progress"),
        PendingApproval => ("pending-approval", "Pending Approval"),
        Completed => ("completed", "Completed"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

impl WorkflowStatus for MaintenanceStatus {
    fn initial() -> Self {
        MaintenanceStatus::Submitted
    }

    fn permitted_next(&self) -> &'static [Self] {
        use MaintenanceStatus::*;
        match self {
            Submitted => &[Assigned, Cancelled],
            Assigned => &[InProgress, Cancelled],
            InProgress => &[PendingApproval, Cancelled],
            // approval can bounce the job back to the contractor
            PendingApproval => &[Completed, InProgress, Cancelled],
            Completed | Cancelled => &[],
        }
    }

    fn is_completion(&self) -> bool {
        matches!(self, MaintenanceStatus::Completed)
    }
}

crate::catalog_enum! {
    pub enum MaintenanceType {
        Plumbing => ("plumbing", "Plumbing"),
        Electrical => ("electrical", "Electrical"),
        Hvac => ("hvac", "HVAC"),
        Appliance => ("appliance", "Appliance"),
        Structural => ("structural", "Structural"),
        PestControl => ("pest-control", "Pest Control"),
        Landscaping => ("landscaping", "Landscaping"),
        Other => ("other", "Other"),
    }
}

crate::catalog_enum! {
    /// Where in the property the issue is
    pub enum IssueArea {
        Kitchen => ("kitchen", "Kitchen"),
        Bathroom => ("bathroom", "Bathroom"),
        Bedroom => ("bedroom", "Bedroom"),
        LivingRoom => ("living-room", "Living Room"),
        Exterior => ("exterior", "Exterior"),
        Other => ("other", "Other"),
    }
}

/// Maintenance request (aggregate a003)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: String,
    pub property: SubjectRef,
    pub client: SubjectRef,
    pub maintenance_type: MaintenanceType,
    pub priority: Priority,
    pub area: Option<IssueArea>,
    pub issue_description: String,
    pub preferred_date: Option<NaiveDate>,
    pub target_date: NaiveDate,
    pub assigned_to: Option<String>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub status: MaintenanceStatus,
    pub created_at: DateTime<Utc>,
    pub completed_date: Option<NaiveDate>,
    pub attachments: Vec<AttachmentMeta>,
    pub timeline: Timeline,
}

impl MaintenanceRequest {
    /// Cost shown in lists: actual once known, otherwise the estimate
    pub fn cost(&self) -> Option<f64> {
        self.actual_cost.or(self.estimated_cost)
    }

    /// Open and past its target date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.status.is_terminal() && today > self.target_date
    }
}

/// Validated create-form payload
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRequestDraft {
    pub property: SubjectRef,
    pub client: SubjectRef,
    pub maintenance_type: MaintenanceType,
    pub priority: Priority,
    pub area: Option<IssueArea>,
    pub issue_description: String,
    pub preferred_date: Option<NaiveDate>,
    pub estimated_cost: Option<f64>,
    pub attachments: Vec<AttachmentMeta>,
}

/// Raw input of the "New maintenance request" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequestForm {
    pub property_id: String,
    pub client_id: String,
    pub maintenance_type: String,
    pub priority: String,
    pub area: String,
    pub issue_description: String,
    pub preferred_date: String,
    pub estimated_cost: String,
    pub attachments: Vec<AttachmentMeta>,
}

impl MaintenanceRequestForm {
    pub fn validate(
        &self,
        lookup: &impl NameLookup,
    ) -> Result<MaintenanceRequestDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let property_id = errors.check("property_id", required_text(&self.property_id, "Property"));
        let client_id = errors.check("client_id", required_text(&self.client_id, "Client"));
        let maintenance_type = errors.check(
            "maintenance_type",
            required_option::<MaintenanceType>(&self.maintenance_type, "Maintenance type"),
        );
        let priority = errors.check("priority", required_option::<Priority>(&self.priority, "Priority"));
        let area = if self.area.trim().is_empty() {
            Some(None)
        } else {
            errors
                .check("area", required_option::<IssueArea>(&self.area, "Area"))
                .map(Some)
        };
        let issue_description = errors.check(
            "issue_description",
            required_text(&self.issue_description, "Issue description"),
        );
        let preferred_date = errors.check(
            "preferred_date",
            optional_date(&self.preferred_date, "Preferred date"),
        );
        let estimated_cost = errors.check(
            "estimated_cost",
            optional_amount(&self.estimated_cost, "Estimated cost"),
        );

        match (
            property_id,
            client_id,
            maintenance_type,
            priority,
            area,
            issue_description,
            preferred_date,
            estimated_cost,
        ) {
            (
                Some(property_id),
                Some(client_id),
                Some(maintenance_type),
                Some(priority),
                Some(area),
                Some(issue_description),
                Some(preferred_date),
                Some(estimated_cost),
            ) if errors.is_empty() => Ok(MaintenanceRequestDraft {
                property: SubjectRef::resolve(&property_id, lookup.property_name(&property_id)),
                client: SubjectRef::resolve(&client_id, lookup.client_name(&client_id)),
                maintenance_type,
                priority,
                area,
                issue_description,
                preferred_date,
                estimated_cost,
                attachments: self.attachments.clone(),
            }),
            _ => Err(errors),
        }
    }
}

impl WorkflowRecord for MaintenanceRequest {
    type Status = MaintenanceStatus;
    type Draft = MaintenanceRequestDraft;

    fn id_prefix() -> &'static str {
        "MR-"
    }

    fn element_name() -> &'static str {
        "Maintenance request"
    }

    fn from_draft(
        id: String,
        draft: Self::Draft,
        now: DateTime<Utc>,
        settings: &WorkflowSettings,
    ) -> Self {
        let target_date = draft
            .preferred_date
            .unwrap_or_else(|| now.date_naive() + Duration::days(settings.default_target_days));

        Self {
            id,
            property: draft.property,
            client: draft.client,
            maintenance_type: draft.maintenance_type,
            priority: draft.priority,
            area: draft.area,
            issue_description: draft.issue_description,
            preferred_date: draft.preferred_date,
            target_date,
            assigned_to: None,
            estimated_cost: draft.estimated_cost,
            actual_cost: None,
            status: MaintenanceStatus::initial(),
            created_at: now,
            completed_date: None,
            attachments: draft.attachments,
            timeline: Timeline::new(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status, now: DateTime<Utc>) {
        self.status = status;
        if status.is_completion() {
            self.completed_date = Some(now.date_naive());
        }
    }

    fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }

    fn creation_details(&self) -> TimelineDetails {
        TimelineDetails {
            new_status: Some(self.status.code().to_string()),
            amount: self.estimated_cost,
            documents: self.attachments.iter().map(|a| a.name.clone()).collect(),
            ..Default::default()
        }
    }

    fn apply_update(&mut self, update: &StatusUpdate<Self::Status>) {
        if let Some(assignee) = &update.assigned_to {
            self.assigned_to = Some(assignee.clone());
        }
        if let Some(cost) = update.amount {
            self.actual_cost = Some(cost);
        }
    }
}

impl Filterable for MaintenanceRequest {
    fn search_text(&self) -> String {
        [
            self.id.as_str(),
            self.property.name.as_str(),
            self.client.name.as_str(),
            self.issue_description.as_str(),
            self.assigned_to.as_deref().unwrap_or_default(),
        ]
        .join(" ")
    }

    fn status_code(&self) -> Option<&str> {
        Some(self.status.code())
    }

    fn category_code(&self) -> Option<&str> {
        Some(self.maintenance_type.code())
    }

    fn priority_code(&self) -> Option<&str> {
        Some(self.priority.code())
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }

    fn filter_amount(&self) -> Option<f64> {
        self.cost()
    }
}

impl Sortable for MaintenanceRequest {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "property" => self.property.name.cmp(&other.property.name),
            "client" => self.client.name.cmp(&other.client.name),
            "type" => self.maintenance_type.position().cmp(&other.maintenance_type.position()),
            "priority" => self.priority.position().cmp(&other.priority.position()),
            "status" => self.status.position().cmp(&other.status.position()),
            "created_at" => self.created_at.cmp(&other.created_at),
            "target_date" => self.target_date.cmp(&other.target_date),
            "cost" => cmp_opt(&self.cost(), &other.cost()),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{RecordFilter, SubjectDirectory};
    use chrono::TimeZone;

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

    fn build(form: &MaintenanceRequestForm) -> MaintenanceRequest {
        let lookup = SubjectDirectory::new()
            .with_property("1", "Maple Street House")
            .with_client("1", "Jane Cooper");
        let draft = form.validate(&lookup).unwrap();
        MaintenanceRequest::from_draft("MR-0001".into(), draft, now(), &WorkflowSettings::default())
    }

    #[test]
    fn test_example_request_defaults() {
        let request = build(&form());
        assert_eq!(request.status, MaintenanceStatus::Submitted);
        assert_eq!(request.property.name, "Maple Street House");
        assert_eq!(request.client.name, "Jane Cooper");
        assert_eq!(request.maintenance_type, MaintenanceType::Plumbing);
        assert_eq!(request.priority, Priority::High);
        assert_eq!(request.preferred_date, None);
        assert_eq!(
            request.target_date,
            NaiveDate::from_ymd_opt(2024, 3, 22).unwrap()
        );
    }

    #[test]
    fn test_preferred_date_becomes_target() {
        let mut f = form();
        f.preferred_date = "2024-03-18".into();
        let request = build(&f);
        assert_eq!(request.target_date, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
    }

    #[test]
    fn test_target_date_ignores_priority() {
        for priority in Priority::all() {
            let mut f = form();
            f.priority = priority.code().into();
            assert_eq!(build(&f).target_date, NaiveDate::from_ymd_opt(2024, 3, 22).unwrap());
        }
    }

    #[test]
    fn test_every_required_field_is_reported() {
        let errors = MaintenanceRequestForm::default()
            .validate(&SubjectDirectory::new())
            .unwrap_err();
        for field in [
            "property_id",
            "client_id",
            "maintenance_type",
            "priority",
            "issue_description",
        ] {
            assert!(errors.get(field).is_some(), "missing error for {}", field);
        }
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_type_checks() {
        let mut f = form();
        f.estimated_cost = "a lot".into();
        f.preferred_date = "next week".into();
        f.area = "attic".into();
        let errors = f.validate(&SubjectDirectory::new()).unwrap_err();
        assert_eq!(errors.get("estimated_cost"), Some("Estimated cost must be a number"));
        assert!(errors.get("preferred_date").is_some());
        assert_eq!(errors.get("area"), Some("Unknown area 'attic'"));
    }

    #[test]
    fn test_attachments_keep_only_metadata() {
        let mut f = form();
        f.attachments = vec![AttachmentMeta {
            name: "leak.jpg".into(),
            size_bytes: 120_000,
        }];
        let request = build(&f);
        assert_eq!(request.attachments.len(), 1);
        assert_eq!(request.creation_details().documents, vec!["leak.jpg".to_string()]);
    }

    #[test]
    fn test_search_covers_names_and_description() {
        let request = build(&form());
        let filter = RecordFilter {
            search: "maple".into(),
            ..Default::default()
        };
        assert!(filter.matches(&request));
        let filter = RecordFilter {
            search: "LEAK".into(),
            priority: "high".into(),
            category: "plumb".into(),
            ..Default::default()
        };
        assert!(filter.matches(&request));
        let filter = RecordFilter {
            priority: "low".into(),
            ..Default::default()
        };
        assert!(!filter.matches(&request));
    }

    #[test]
    fn test_overdue() {
        let request = build(&form());
        assert!(!request.is_overdue(NaiveDate::from_ymd_opt(2024, 3, 22).unwrap()));
        assert!(request.is_overdue(NaiveDate::from_ymd_opt(2024, 3, 23).unwrap()));
    }
}
