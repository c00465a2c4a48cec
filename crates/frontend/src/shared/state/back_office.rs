use chrono::Utc;
use contracts::domain::a001_sales_order::SalesOrder;
use contracts::domain::a002_purchase_order::PurchaseOrder;
use contracts::domain::a003_maintenance_request::MaintenanceRequest;
use contracts::domain::a004_client::Client;
use contracts::domain::a005_property::Property;
use contracts::domain::a006_employee::{Department, EmployeeDirectory};
use contracts::domain::common::{RecordCollection, SubjectDirectory, SubjectRef};
use contracts::projections::p900_order_history::{build_history, OrderHistoryRow};
use contracts::shared::config::AppSettings;
use contracts::shared::demo_data::DemoData;
use leptos::prelude::*;

/// In-memory collections of the back office, shared by every page.
///
/// Seeded once from the demo data set; lost on reload.
#[derive(Clone, Copy)]
pub struct BackOfficeStore {
    pub settings: StoredValue<AppSettings>,
    pub clients: RwSignal<RecordCollection<Client>>,
    pub properties: RwSignal<RecordCollection<Property>>,
    pub employees: RwSignal<EmployeeDirectory>,
    pub sales: RwSignal<RecordCollection<SalesOrder>>,
    pub purchases: RwSignal<RecordCollection<PurchaseOrder>>,
    pub maintenance: RwSignal<RecordCollection<MaintenanceRequest>>,
}

impl BackOfficeStore {
    pub fn new(settings: AppSettings) -> Self {
        let data = DemoData::build(&settings.workflow, Utc::now()).unwrap_or_else(|e| {
            log::error!("Failed to build demo data: {}", e);
            DemoData::empty(&settings.workflow)
        });

        Self {
            settings: StoredValue::new(settings),
            clients: RwSignal::new(data.clients),
            properties: RwSignal::new(data.properties),
            employees: RwSignal::new(data.employees),
            sales: RwSignal::new(data.sales),
            purchases: RwSignal::new(data.purchases),
            maintenance: RwSignal::new(data.maintenance),
        }
    }

    pub fn threshold_hours(&self) -> i64 {
        self.settings
            .with_value(|s| s.workflow.relative_time_threshold_hours)
    }

    pub fn client_refs(&self) -> Vec<SubjectRef> {
        self.clients
            .with(|c| c.records().iter().map(Client::subject).collect())
    }

    pub fn property_refs(&self) -> Vec<SubjectRef> {
        self.properties
            .with(|c| c.records().iter().map(Property::subject).collect())
    }

    /// (id, name) pairs for the client picker of the create forms
    pub fn client_options(&self) -> Vec<(String, String)> {
        self.client_refs().into_iter().map(|s| (s.id, s.name)).collect()
    }

    pub fn property_options(&self) -> Vec<(String, String)> {
        self.property_refs().into_iter().map(|s| (s.id, s.name)).collect()
    }

    /// Name lookup for the create forms
    pub fn subjects(&self) -> SubjectDirectory {
        SubjectDirectory::from_subjects(self.client_refs(), self.property_refs())
    }

    /// Active staff for "assigned to" pickers
    pub fn assignees(&self, department: Option<Department>) -> Vec<String> {
        self.employees.with(|d| d.assignees(department))
    }

    pub fn order_history(&self) -> Vec<OrderHistoryRow> {
        self.sales.with(|sales| {
            self.purchases.with(|purchases| {
                self.maintenance.with(|maintenance| {
                    build_history(sales.records(), purchases.records(), maintenance.records())
                })
            })
        })
    }
}

pub fn use_back_office() -> BackOfficeStore {
    use_context::<BackOfficeStore>().expect("BackOfficeStore not found in context")
}
