use crate::domain::common::validation::{
    optional_date, optional_text, required_amount, required_option, required_text,
};
use crate::domain::common::{
    cmp_f64, cmp_opt, AttachmentMeta, Catalog, Filterable, NameLookup, Priority, PropertyType,
    Sortable, StatusUpdate, SubjectRef, Timeline, TimelineDetails, ValidationErrors,
    WorkflowRecord, WorkflowStatus,
};
use crate::shared::config::WorkflowSettings;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::catalog_enum! {
    /// Acquisition of a property for a buying client
    pub enum PurchaseOrderStatus {
        Requested => ("requested", "Requested"),
        Evaluating => ("evaluating", "Evaluating"),
        OfferSubmitted => ("offer-submitted", "Offer Submitted"),
        DueDiligence => ("due-diligence", "Due Diligence"),
        Closing => ("closing", "Closing"),
        Completed => ("completed", "Completed"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

impl WorkflowStatus for PurchaseOrderStatus {
    fn initial() -> Self {
        PurchaseOrderStatus::Requested
    }

    fn permitted_next(&self) -> &'static [Self] {
        use PurchaseOrderStatus::*;
        match self {
            Requested => &[Evaluating, Cancelled],
            Evaluating => &[OfferSubmitted, Cancelled],
            // a rejected offer sends the buyer back to evaluating
            OfferSubmitted => &[DueDiligence, Evaluating, Cancelled],
            DueDiligence => &[Closing, Cancelled],
            Closing => &[Completed, Cancelled],
            Completed | Cancelled => &[],
        }
    }

    fn is_completion(&self) -> bool {
        matches!(self, PurchaseOrderStatus::Completed)
    }
}

/// Purchase order (aggregate a002)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub client: SubjectRef,
    pub property: SubjectRef,
    pub property_type: PropertyType,
    pub priority: Priority,
    pub budget: f64,
    pub offer_amount: Option<f64>,
    pub agent: Option<String>,
    pub target_close_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: PurchaseOrderStatus,
    pub created_at: DateTime<Utc>,
    pub completed_date: Option<NaiveDate>,
    pub attachments: Vec<AttachmentMeta>,
    pub timeline: Timeline,
}

impl PurchaseOrder {
    /// Submitted offer, or the budget before any offer
    pub fn amount(&self) -> f64 {
        self.offer_amount.unwrap_or(self.budget)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrderDraft {
    pub client: SubjectRef,
    pub property: SubjectRef,
    pub property_type: PropertyType,
    pub priority: Priority,
    pub budget: f64,
    pub agent: Option<String>,
    pub target_close_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub attachments: Vec<AttachmentMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderForm {
    pub client_id: String,
    pub property_id: String,
    pub property_type: String,
    pub priority: String,
    pub budget: String,
    pub agent: String,
    pub target_close_date: String,
    pub notes: String,
    pub attachments: Vec<AttachmentMeta>,
}

impl PurchaseOrderForm {
    pub fn validate(&self, lookup: &impl NameLookup) -> Result<PurchaseOrderDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let client_id = errors.check("client_id", required_text(&self.client_id, "Client"));
        let property_id = errors.check("property_id", required_text(&self.property_id, "Property"));
        let property_type = errors.check(
            "property_type",
            required_option::<PropertyType>(&self.property_type, "Property type"),
        );
        let priority = errors.check("priority", required_option::<Priority>(&self.priority, "Priority"));
        let budget = errors.check("budget", required_amount(&self.budget, "Budget"));
        let target_close_date = errors.check(
            "target_close_date",
            optional_date(&self.target_close_date, "Target close date"),
        );

        match (client_id, property_id, property_type, priority, budget, target_close_date) {
            (
                Some(client_id),
                Some(property_id),
                Some(property_type),
                Some(priority),
                Some(budget),
                Some(target_close_date),
            ) if errors.is_empty() => Ok(PurchaseOrderDraft {
                client: SubjectRef::resolve(&client_id, lookup.client_name(&client_id)),
                property: SubjectRef::resolve(&property_id, lookup.property_name(&property_id)),
                property_type,
                priority,
                budget,
                agent: optional_text(&self.agent),
                target_close_date,
                notes: optional_text(&self.notes),
                attachments: self.attachments.clone(),
            }),
            _ => Err(errors),
        }
    }
}

impl WorkflowRecord for PurchaseOrder {
    type Status = PurchaseOrderStatus;
    type Draft = PurchaseOrderDraft;

    fn id_prefix() -> &'static str {
        "PO-"
    }

    fn element_name() -> &'static str {
        "Purchase order"
    }

    fn from_draft(id: String, draft: Self::Draft, now: DateTime<Utc>, _: &WorkflowSettings) -> Self {
        Self {
            id,
            client: draft.client,
            property: draft.property,
            property_type: draft.property_type,
            priority: draft.priority,
            budget: draft.budget,
            offer_amount: None,
            agent: draft.agent,
            target_close_date: draft.target_close_date,
            notes: draft.notes,
            status: PurchaseOrderStatus::initial(),
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
            assigned_to: self.agent.clone(),
            amount: Some(self.budget),
            documents: self.attachments.iter().map(|a| a.name.clone()).collect(),
            ..Default::default()
        }
    }

    fn apply_update(&mut self, update: &StatusUpdate<Self::Status>) {
        if let Some(agent) = &update.assigned_to {
            self.agent = Some(agent.clone());
        }
        if let Some(amount) = update.amount {
            self.offer_amount = Some(amount);
        }
    }
}

impl Filterable for PurchaseOrder {
    fn search_text(&self) -> String {
        [
            self.id.as_str(),
            self.client.name.as_str(),
            self.property.name.as_str(),
            self.agent.as_deref().unwrap_or_default(),
            self.notes.as_deref().unwrap_or_default(),
        ]
        .join(" ")
    }

    fn status_code(&self) -> Option<&str> {
        Some(self.status.code())
    }

    fn category_code(&self) -> Option<&str> {
        Some(self.property_type.code())
    }

    fn priority_code(&self) -> Option<&str> {
        Some(self.priority.code())
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }

    fn filter_amount(&self) -> Option<f64> {
        Some(self.amount())
    }
}

impl Sortable for PurchaseOrder {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "client" => self.client.name.cmp(&other.client.name),
            "property" => self.property.name.cmp(&other.property.name),
            "type" => self.property_type.position().cmp(&other.property_type.position()),
            "priority" => self.priority.position().cmp(&other.priority.position()),
            "status" => self.status.position().cmp(&other.status.position()),
            "amount" => cmp_f64(self.amount(), other.amount()),
            "created_at" => self.created_at.cmp(&other.created_at),
            "target_close_date" => cmp_opt(&self.target_close_date, &other.target_close_date),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{RecordCollection, SubjectDirectory, WorkflowError};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn valid_form() -> PurchaseOrderForm {
        PurchaseOrderForm {
            client_id: "CL-0003".into(),
            property_id: "PR-0004".into(),
            property_type: "condo".into(),
            priority: "medium".into(),
            budget: "$650,000".into(),
            notes: "Needs parking".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate() {
        let draft = valid_form().validate(&SubjectDirectory::new()).unwrap();
        assert_eq!(draft.budget, 650_000.0);
        assert_eq!(draft.property_type, PropertyType::Condo);
        assert_eq!(draft.client.name, "CL-0003");

        let mut bad = valid_form();
        bad.priority = "whenever".into();
        bad.budget = "-5".into();
        let errors = bad.validate(&SubjectDirectory::new()).unwrap_err();
        assert_eq!(errors.get("priority"), Some("Unknown priority 'whenever'"));
        assert_eq!(errors.get("budget"), Some("Budget must be a positive number"));
    }

    #[test]
    fn test_offer_amount_replaces_budget_in_amount() {
        let mut c = RecordCollection::<PurchaseOrder>::new(WorkflowSettings::default());
        let draft = valid_form().validate(&SubjectDirectory::new()).unwrap();
        let id = c.create(draft, now()).id.clone();
        assert_eq!(id, "PO-0001");
        assert_eq!(c.get(&id).unwrap().amount(), 650_000.0);

        c.update_status(&id, StatusUpdate::new(PurchaseOrderStatus::Evaluating), now())
            .unwrap();
        let mut offer = StatusUpdate::new(PurchaseOrderStatus::OfferSubmitted);
        offer.amount = Some(610_000.0);
        let order = c.update_status(&id, offer, now()).unwrap();
        assert_eq!(order.amount(), 610_000.0);
        assert_eq!(order.budget, 650_000.0);
        assert_eq!(
            order.timeline.last().unwrap().details.as_ref().unwrap().amount,
            Some(610_000.0)
        );
    }

    #[test]
    fn test_same_status_is_rejected_under_strict() {
        let mut c = RecordCollection::<PurchaseOrder>::new(WorkflowSettings::default());
        let draft = valid_form().validate(&SubjectDirectory::new()).unwrap();
        let id = c.create(draft, now()).id.clone();
        let err = c
            .update_status(&id, StatusUpdate::new(PurchaseOrderStatus::Requested), now())
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Transition(_)));
        assert_eq!(c.get(&id).unwrap().timeline.len(), 1);
    }
}
