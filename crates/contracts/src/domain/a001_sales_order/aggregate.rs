use crate::domain::common::validation::{
    optional_date, optional_text, required_amount, required_option, required_text,
};
use crate::domain::common::{
    cmp_f64, cmp_opt, AttachmentMeta, Catalog, Filterable, NameLookup, PropertyType, Sortable,
    StatusUpdate, SubjectRef, Timeline, TimelineDetails, ValidationErrors, WorkflowRecord,
    WorkflowStatus,
};
use crate::shared::config::WorkflowSettings;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::catalog_enum! {
    /// Sale of a property on behalf of a seller
    pub enum SalesOrderStatus {
        Inquiry => ("inquiry", "Inquiry"),
        ViewingScheduled => ("viewing-scheduled", "Viewing Scheduled"),
        OfferMade => ("offer-made", "Offer Made"),
        Negotiation => ("negotiation", "Negotiation"),
        UnderContract => ("under-contract", "Under Contract"),
        Closed => ("closed", "Closed"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

impl WorkflowStatus for SalesOrderStatus {
    fn initial() -> Self {
        SalesOrderStatus::Inquiry
    }

    fn permitted_next(&self) -> &'static [Self] {
        use SalesOrderStatus::*;
        match self {
            Inquiry => &[ViewingScheduled, Cancelled],
            ViewingScheduled => &[OfferMade, Inquiry, Cancelled],
            OfferMade => &[Negotiation, UnderContract, Cancelled],
            Negotiation => &[OfferMade, UnderContract, Cancelled],
            UnderContract => &[Closed, Cancelled],
            Closed | Cancelled => &[],
        }
    }

    fn is_completion(&self) -> bool {
        matches!(self, SalesOrderStatus::Closed)
    }
}

/// Sales order (aggregate a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: String,
    pub client: SubjectRef,
    pub property: SubjectRef,
    pub property_type: PropertyType,
    /// Asking price at creation, then the latest offer amount
    pub amount: f64,
    pub agent: Option<String>,
    pub expected_close_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: SalesOrderStatus,
    pub created_at: DateTime<Utc>,
    pub closed_date: Option<NaiveDate>,
    pub attachments: Vec<AttachmentMeta>,
    pub timeline: Timeline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesOrderDraft {
    pub client: SubjectRef,
    pub property: SubjectRef,
    pub property_type: PropertyType,
    pub amount: f64,
    pub agent: Option<String>,
    pub expected_close_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub attachments: Vec<AttachmentMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderForm {
    pub client_id: String,
    pub property_id: String,
    pub property_type: String,
    pub amount: String,
    pub agent: String,
    pub expected_close_date: String,
    pub notes: String,
    pub attachments: Vec<AttachmentMeta>,
}

impl SalesOrderForm {
    pub fn validate(&self, lookup: &impl NameLookup) -> Result<SalesOrderDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let client_id = errors.check("client_id", required_text(&self.client_id, "Client"));
        let property_id = errors.check("property_id", required_text(&self.property_id, "Property"));
        let property_type = errors.check(
            "property_type",
            required_option::<PropertyType>(&self.property_type, "Property type"),
        );
        let amount = errors.check("amount", required_amount(&self.amount, "Price"));
        let expected_close_date = errors.check(
            "expected_close_date",
            optional_date(&self.expected_close_date, "Expected close date"),
        );

        match (client_id, property_id, property_type, amount, expected_close_date) {
            (
                Some(client_id),
                Some(property_id),
                Some(property_type),
                Some(amount),
                Some(expected_close_date),
            ) if errors.is_empty() => Ok(SalesOrderDraft {
                client: SubjectRef::resolve(&client_id, lookup.client_name(&client_id)),
                property: SubjectRef::resolve(&property_id, lookup.property_name(&property_id)),
                property_type,
                amount,
                agent: optional_text(&self.agent),
                expected_close_date,
                notes: optional_text(&self.notes),
                attachments: self.attachments.clone(),
            }),
            _ => Err(errors),
        }
    }
}

impl WorkflowRecord for SalesOrder {
    type Status = SalesOrderStatus;
    type Draft = SalesOrderDraft;

    fn id_prefix() -> &'static str {
        "SO-"
    }

    fn element_name() -> &'static str {
        "Sales order"
    }

    fn from_draft(id: String, draft: Self::Draft, now: DateTime<Utc>, _: &WorkflowSettings) -> Self {
        Self {
            id,
            client: draft.client,
            property: draft.property,
            property_type: draft.property_type,
            amount: draft.amount,
            agent: draft.agent,
            expected_close_date: draft.expected_close_date,
            notes: draft.notes,
            status: SalesOrderStatus::initial(),
            created_at: now,
            closed_date: None,
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
            self.closed_date = Some(now.date_naive());
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
            amount: Some(self.amount),
            documents: self.attachments.iter().map(|a| a.name.clone()).collect(),
            ..Default::default()
        }
    }

    fn apply_update(&mut self, update: &StatusUpdate<Self::Status>) {
        if let Some(agent) = &update.assigned_to {
            self.agent = Some(agent.clone());
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
    }
}

impl Filterable for SalesOrder {
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

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }

    fn filter_amount(&self) -> Option<f64> {
        Some(self.amount)
    }
}

impl Sortable for SalesOrder {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "client" => self.client.name.cmp(&other.client.name),
            "property" => self.property.name.cmp(&other.property.name),
            "type" => self.property_type.position().cmp(&other.property_type.position()),
            "status" => self.status.position().cmp(&other.status.position()),
            "amount" => cmp_f64(self.amount, other.amount),
            "created_at" => self.created_at.cmp(&other.created_at),
            "expected_close_date" => cmp_opt(&self.expected_close_date, &other.expected_close_date),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{
        RecordCollection, RecordFilter, SortState, SubjectDirectory, TransitionPolicy,
    };
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn form(client: &str, amount: &str) -> SalesOrderForm {
        SalesOrderForm {
            client_id: client.into(),
            property_id: "PR-0001".into(),
            property_type: "house".into(),
            amount: amount.into(),
            ..Default::default()
        }
    }

    fn collection() -> RecordCollection<SalesOrder> {
        let lookup = SubjectDirectory::new()
            .with_client("CL-0001", "Jane Cooper")
            .with_client("CL-0002", "Wade Warren")
            .with_property("PR-0001", "12 Harbour View");
        let mut c = RecordCollection::new(WorkflowSettings::default());
        for (client, amount) in [("CL-0001", "1,000,000"), ("CL-0002", "2500000"), ("CL-0001", "450000")] {
            let draft = form(client, amount).validate(&lookup).unwrap();
            c.create(draft, now());
        }
        c
    }

    #[test]
    fn test_create_resolves_names_and_ids() {
        let c = collection();
        let ids: Vec<_> = c.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["SO-0001", "SO-0002", "SO-0003"]);
        let first = c.get("SO-0001").unwrap();
        assert_eq!(first.client.name, "Jane Cooper");
        assert_eq!(first.property.name, "12 Harbour View");
        assert_eq!(first.status, SalesOrderStatus::Inquiry);
        assert_eq!(first.timeline.entries()[0].action, "Sales order created");
    }

    #[test]
    fn test_required_price() {
        let errors = form("CL-0001", "")
            .validate(&SubjectDirectory::new())
            .unwrap_err();
        assert_eq!(errors.get("amount"), Some("Price is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_amount_range_filter() {
        let c = collection();
        let filter = RecordFilter {
            amount: Some(crate::domain::common::AmountRange::parse("500000-2000000").unwrap()),
            ..Default::default()
        };
        let ids: Vec<_> = c.filtered(&filter).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["SO-0001"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let c = collection();
        let filter = RecordFilter {
            search: "jane".into(),
            status: "inquiry".into(),
            category: "house".into(),
            ..Default::default()
        };
        assert_eq!(c.filtered(&filter).len(), 2);
        let filter = RecordFilter {
            search: "jane".into(),
            // sales orders carry no priority
            priority: "high".into(),
            ..Default::default()
        };
        assert!(c.filtered(&filter).is_empty());
    }

    #[test]
    fn test_sort_toggle_twice_restores_order() {
        let c = collection();
        let mut sort = SortState::unsorted();
        sort.toggle("amount");
        let first: Vec<_> = c.view(&RecordFilter::default(), &sort).into_iter().map(|r| r.id).collect();
        assert_eq!(first, vec!["SO-0003", "SO-0001", "SO-0002"]);

        sort.toggle("amount");
        let desc: Vec<_> = c.view(&RecordFilter::default(), &sort).into_iter().map(|r| r.id).collect();
        assert_eq!(desc, vec!["SO-0002", "SO-0001", "SO-0003"]);

        sort.toggle("amount");
        let again: Vec<_> = c.view(&RecordFilter::default(), &sort).into_iter().map(|r| r.id).collect();
        assert_eq!(again, first);
    }

    #[test]
    fn test_offer_updates_amount_and_close_stamps_date() {
        let settings = WorkflowSettings {
            transition_policy: TransitionPolicy::Strict,
            ..Default::default()
        };
        let mut c = RecordCollection::<SalesOrder>::with_records(settings, collection().records().to_vec())
            .unwrap();
        let path = [
            SalesOrderStatus::ViewingScheduled,
            SalesOrderStatus::OfferMade,
            SalesOrderStatus::UnderContract,
            SalesOrderStatus::Closed,
        ];
        for (i, status) in path.into_iter().enumerate() {
            let mut update = StatusUpdate::new(status);
            if status == SalesOrderStatus::OfferMade {
                update.amount = Some(980_000.0);
            }
            c.update_status("SO-0001", update, now() + Duration::days(i as i64 + 1))
                .unwrap();
        }
        let order = c.get("SO-0001").unwrap();
        assert_eq!(order.amount, 980_000.0);
        assert_eq!(order.closed_date, Some(NaiveDate::from_ymd_opt(2024, 3, 19).unwrap()));
        assert_eq!(order.timeline.len(), 5);
        assert!(c.selectable_statuses("SO-0001").is_empty());
    }
}
