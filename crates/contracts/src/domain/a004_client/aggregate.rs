use crate::domain::common::validation::{
    optional_amount, optional_text, required_email, required_option, required_text,
};
use crate::domain::common::{
    cmp_opt, AttachmentMeta, Catalog, Filterable, Location, Sortable, StatusUpdate, SubjectRef,
    Timeline, TimelineDetails, ValidationErrors, WorkflowRecord, WorkflowStatus,
};
use crate::shared::config::WorkflowSettings;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::catalog_enum! {
    /// Client onboarding
    pub enum ClientStatus {
        New => ("new", "New"),
        DocumentsPending => ("documents-pending", "Documents Pending"),
        Verified => ("verified", "Verified"),
        Active => ("active", "Active"),
        Archived => ("archived", "Archived"),
    }
}

impl WorkflowStatus for ClientStatus {
    fn initial() -> Self {
        ClientStatus::New
    }

    fn permitted_next(&self) -> &'static [Self] {
        use ClientStatus::*;
        match self {
            New => &[DocumentsPending, Archived],
            DocumentsPending => &[Verified, Archived],
            Verified => &[Active, DocumentsPending, Archived],
            Active => &[Archived],
            Archived => &[Active],
        }
    }

    fn is_completion(&self) -> bool {
        matches!(self, ClientStatus::Active)
    }
}

crate::catalog_enum! {
    pub enum ClientType {
        Buyer => ("buyer", "Buyer"),
        Seller => ("seller", "Seller"),
        Tenant => ("tenant", "Tenant"),
        Landlord => ("landlord", "Landlord"),
        Investor => ("investor", "Investor"),
    }
}

/// Client (aggregate a004)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub client_type: ClientType,
    pub preferred_location: Option<Location>,
    pub budget: Option<f64>,
    pub assigned_agent: Option<String>,
    pub notes: Option<String>,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
    /// Date the client last became active
    pub activated_date: Option<NaiveDate>,
    pub documents: Vec<AttachmentMeta>,
    pub timeline: Timeline,
}

impl Client {
    pub fn subject(&self) -> SubjectRef {
        SubjectRef::new(&self.id, &self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub client_type: ClientType,
    pub preferred_location: Option<Location>,
    pub budget: Option<f64>,
    pub assigned_agent: Option<String>,
    pub notes: Option<String>,
    pub documents: Vec<AttachmentMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub client_type: String,
    pub preferred_location: String,
    pub budget: String,
    pub assigned_agent: String,
    pub notes: String,
    pub documents: Vec<AttachmentMeta>,
}

impl ClientForm {
    pub fn validate(&self) -> Result<ClientDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.check("name", required_text(&self.name, "Full name"));
        let email = errors.check("email", required_email(&self.email, "Email"));
        let client_type = errors.check(
            "client_type",
            required_option::<ClientType>(&self.client_type, "Client type"),
        );
        let preferred_location = if self.preferred_location.trim().is_empty() {
            Some(None)
        } else {
            errors
                .check(
                    "preferred_location",
                    required_option::<Location>(&self.preferred_location, "Location"),
                )
                .map(Some)
        };
        let budget = errors.check("budget", optional_amount(&self.budget, "Budget"));

        match (name, email, client_type, preferred_location, budget) {
            (Some(name), Some(email), Some(client_type), Some(preferred_location), Some(budget))
                if errors.is_empty() =>
            {
                Ok(ClientDraft {
                    name,
                    email,
                    phone: optional_text(&self.phone),
                    client_type,
                    preferred_location,
                    budget,
                    assigned_agent: optional_text(&self.assigned_agent),
                    notes: optional_text(&self.notes),
                    documents: self.documents.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

impl WorkflowRecord for Client {
    type Status = ClientStatus;
    type Draft = ClientDraft;

    fn id_prefix() -> &'static str {
        "CL-"
    }

    fn element_name() -> &'static str {
        "Client"
    }

    fn from_draft(id: String, draft: Self::Draft, now: DateTime<Utc>, _: &WorkflowSettings) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            client_type: draft.client_type,
            preferred_location: draft.preferred_location,
            budget: draft.budget,
            assigned_agent: draft.assigned_agent,
            notes: draft.notes,
            status: ClientStatus::initial(),
            created_at: now,
            activated_date: None,
            documents: draft.documents,
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
            self.activated_date = Some(now.date_naive());
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
            assigned_to: self.assigned_agent.clone(),
            documents: self.documents.iter().map(|d| d.name.clone()).collect(),
            ..Default::default()
        }
    }

    /// Documents uploaded with an update join the client's document list
    fn apply_update(&mut self, update: &StatusUpdate<Self::Status>) {
        if let Some(agent) = &update.assigned_to {
            self.assigned_agent = Some(agent.clone());
        }
        for name in &update.documents {
            if !self.documents.iter().any(|d| &d.name == name) {
                self.documents.push(AttachmentMeta {
                    name: name.clone(),
                    size_bytes: 0,
                });
            }
        }
    }
}

impl Filterable for Client {
    fn search_text(&self) -> String {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_deref().unwrap_or_default(),
            self.assigned_agent.as_deref().unwrap_or_default(),
        ]
        .join(" ")
    }

    fn status_code(&self) -> Option<&str> {
        Some(self.status.code())
    }

    fn category_code(&self) -> Option<&str> {
        Some(self.client_type.code())
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }

    fn filter_amount(&self) -> Option<f64> {
        self.budget
    }
}

impl Sortable for Client {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "email" => self.email.cmp(&other.email),
            "type" => self.client_type.position().cmp(&other.client_type.position()),
            "status" => self.status.position().cmp(&other.status.position()),
            "budget" => cmp_opt(&self.budget, &other.budget),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{AmountRange, RecordCollection, RecordFilter};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn form() -> ClientForm {
        ClientForm {
            name: "Jane Cooper".into(),
            email: "jane@example.com".into(),
            client_type: "buyer".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_email_and_location_are_checked() {
        let mut f = form();
        f.email = "jane.example.com".into();
        f.preferred_location = "moon".into();
        let errors = f.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email must be a valid email address"));
        assert_eq!(errors.get("preferred_location"), Some("Unknown location 'moon'"));
    }

    #[test]
    fn test_onboarding_flow() {
        let mut c = RecordCollection::<Client>::new(WorkflowSettings::default());
        let id = c.create(form().validate().unwrap(), now()).id.clone();
        assert_eq!(id, "CL-0001");

        let mut docs = StatusUpdate::new(ClientStatus::DocumentsPending);
        docs.documents = vec!["passport.pdf".into()];
        c.update_status(&id, docs, now()).unwrap();
        c.update_status(&id, StatusUpdate::new(ClientStatus::Verified), now())
            .unwrap();
        let client = c
            .update_status(&id, StatusUpdate::new(ClientStatus::Active), now())
            .unwrap();

        assert_eq!(client.status, ClientStatus::Active);
        assert_eq!(client.activated_date, Some(now().date_naive()));
        assert_eq!(client.documents.len(), 1);
        assert_eq!(client.timeline.len(), 4);
        assert_eq!(
            client.timeline.entries()[2].action,
            "Status changed from Documents Pending to Verified"
        );
    }

    #[test]
    fn test_archived_client_can_be_reactivated() {
        assert!(ClientStatus::Archived.can_transition_to(&ClientStatus::Active));
        assert!(!ClientStatus::Archived.is_terminal());
    }

    #[test]
    fn test_client_without_budget_fails_budget_filter() {
        let mut c = RecordCollection::<Client>::new(WorkflowSettings::default());
        c.create(form().validate().unwrap(), now());
        let mut with_budget = form();
        with_budget.budget = "300000".into();
        c.create(with_budget.validate().unwrap(), now());

        let filter = RecordFilter {
            amount: Some(AmountRange::parse("100000+").unwrap()),
            ..Default::default()
        };
        let ids: Vec<_> = c.filtered(&filter).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["CL-0002"]);
    }
}
