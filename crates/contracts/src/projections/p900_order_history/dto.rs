use crate::domain::a001_sales_order::SalesOrder;
use crate::domain::a002_purchase_order::PurchaseOrder;
use crate::domain::a003_maintenance_request::MaintenanceRequest;
use crate::domain::common::{cmp_opt, Catalog, Filterable, Priority, Sortable};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::catalog_enum! {
    /// Source of an order history row
    pub enum OrderKind {
        Sale => ("sale", "Sale"),
        Purchase => ("purchase", "Purchase"),
        Maintenance => ("maintenance", "Maintenance"),
    }
}

/// One row of the order history register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryRow {
    pub id: String,
    pub kind: OrderKind,
    pub client: String,
    pub property: String,
    pub status: String,
    pub status_label: String,
    pub priority: Option<Priority>,
    pub amount: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub completed_date: Option<NaiveDate>,
}

impl From<&SalesOrder> for OrderHistoryRow {
    fn from(o: &SalesOrder) -> Self {
        Self {
            id: o.id.clone(),
            kind: OrderKind::Sale,
            client: o.client.name.clone(),
            property: o.property.name.clone(),
            status: o.status.code().to_string(),
            status_label: o.status.label().to_string(),
            priority: None,
            amount: Some(o.amount),
            created_at: o.created_at,
            completed_date: o.closed_date,
        }
    }
}

impl From<&PurchaseOrder> for OrderHistoryRow {
    fn from(o: &PurchaseOrder) -> Self {
        Self {
            id: o.id.clone(),
            kind: OrderKind::Purchase,
            client: o.client.name.clone(),
            property: o.property.name.clone(),
            status: o.status.code().to_string(),
            status_label: o.status.label().to_string(),
            priority: Some(o.priority),
            amount: Some(o.amount()),
            created_at: o.created_at,
            completed_date: o.completed_date,
        }
    }
}

impl From<&MaintenanceRequest> for OrderHistoryRow {
    fn from(r: &MaintenanceRequest) -> Self {
        Self {
            id: r.id.clone(),
            kind: OrderKind::Maintenance,
            client: r.client.name.clone(),
            property: r.property.name.clone(),
            status: r.status.code().to_string(),
            status_label: r.status.label().to_string(),
            priority: Some(r.priority),
            amount: r.cost(),
            created_at: r.created_at,
            completed_date: r.completed_date,
        }
    }
}

/// Union of all orders, newest first
pub fn build_history(
    sales: &[SalesOrder],
    purchases: &[PurchaseOrder],
    maintenance: &[MaintenanceRequest],
) -> Vec<OrderHistoryRow> {
    let mut rows: Vec<OrderHistoryRow> = sales
        .iter()
        .map(OrderHistoryRow::from)
        .chain(purchases.iter().map(OrderHistoryRow::from))
        .chain(maintenance.iter().map(OrderHistoryRow::from))
        .collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows
}

/// Totals shown above the history table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderHistorySummary {
    pub count: usize,
    pub completed: usize,
    pub total_amount: f64,
}

pub fn summarize(rows: &[OrderHistoryRow]) -> OrderHistorySummary {
    OrderHistorySummary {
        count: rows.len(),
        completed: rows.iter().filter(|r| r.completed_date.is_some()).count(),
        total_amount: rows.iter().filter_map(|r| r.amount).sum(),
    }
}

impl Filterable for OrderHistoryRow {
    fn search_text(&self) -> String {
        [
            self.id.as_str(),
            self.kind.label(),
            self.client.as_str(),
            self.property.as_str(),
            self.status_label.as_str(),
        ]
        .join(" ")
    }

    fn status_code(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn category_code(&self) -> Option<&str> {
        Some(self.kind.code())
    }

    fn priority_code(&self) -> Option<&str> {
        self.priority.as_ref().map(|p| p.code())
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }

    fn filter_amount(&self) -> Option<f64> {
        self.amount
    }
}

impl Sortable for OrderHistoryRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "kind" => self.kind.position().cmp(&other.kind.position()),
            "client" => self.client.cmp(&other.client),
            "property" => self.property.cmp(&other.property),
            "status" => self.status_label.cmp(&other.status_label),
            "amount" => cmp_opt(&self.amount, &other.amount),
            "created_at" => self.created_at.cmp(&other.created_at),
            "completed_date" => cmp_opt(&self.completed_date, &other.completed_date),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_order::SalesOrderForm;
    use crate::domain::a003_maintenance_request::MaintenanceRequestForm;
    use crate::domain::common::{RecordCollection, RecordFilter, SubjectDirectory};
    use crate::shared::config::WorkflowSettings;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn history() -> Vec<OrderHistoryRow> {
        let lookup = SubjectDirectory::new();
        let mut sales = RecordCollection::<SalesOrder>::new(WorkflowSettings::default());
        let sale = SalesOrderForm {
            client_id: "CL-0001".into(),
            property_id: "PR-0001".into(),
            property_type: "house".into(),
            amount: "1000000".into(),
            ..Default::default()
        };
        sales.create(sale.validate(&lookup).unwrap(), now());

        let mut maintenance = RecordCollection::<MaintenanceRequest>::new(WorkflowSettings::default());
        let request = MaintenanceRequestForm {
            property_id: "1".into(),
            client_id: "1".into(),
            maintenance_type: "plumbing".into(),
            priority: "high".into(),
            issue_description: "Leak".into(),
            ..Default::default()
        };
        maintenance.create(request.validate(&lookup).unwrap(), now() + Duration::hours(1));

        build_history(sales.records(), &[], maintenance.records())
    }

    #[test]
    fn test_history_is_newest_first() {
        let rows = history();
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["MR-0001", "SO-0001"]);
        assert_eq!(rows[0].kind, OrderKind::Maintenance);
        assert_eq!(rows[0].amount, None);
        assert_eq!(rows[1].status_label, "Inquiry");
    }

    #[test]
    fn test_kind_and_priority_filters() {
        let rows = history();
        let filter = RecordFilter {
            category: "sale".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows).len(), 1);

        // sales rows carry no priority
        let filter = RecordFilter {
            priority: "high".into(),
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&rows).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["MR-0001"]);
    }

    #[test]
    fn test_summary() {
        let summary = summarize(&history());
        assert_eq!(summary.count, 2);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.total_amount, 1_000_000.0);
    }
}
