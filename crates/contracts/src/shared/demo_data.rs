//! Fixed demo data set the application starts with

use crate::domain::a001_sales_order::{SalesOrder, SalesOrderForm, SalesOrderStatus};
use crate::domain::a002_purchase_order::{PurchaseOrder, PurchaseOrderForm, PurchaseOrderStatus};
use crate::domain::a003_maintenance_request::{
    MaintenanceRequest, MaintenanceRequestForm, MaintenanceStatus,
};
use crate::domain::a004_client::{Client, ClientForm, ClientStatus};
use crate::domain::a005_property::{ListingStatus, Property, PropertyForm};
use crate::domain::a006_employee::{EmployeeDirectory, EmployeeForm};
use crate::domain::common::{
    RecordCollection, StatusUpdate, SubjectDirectory, ValidationErrors, WorkflowError,
    WorkflowRecord,
};
use crate::shared::config::WorkflowSettings;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid demo record: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

/// All collections of the back office
#[derive(Debug, Clone)]
pub struct DemoData {
    pub clients: RecordCollection<Client>,
    pub properties: RecordCollection<Property>,
    pub employees: EmployeeDirectory,
    pub sales: RecordCollection<SalesOrder>,
    pub purchases: RecordCollection<PurchaseOrder>,
    pub maintenance: RecordCollection<MaintenanceRequest>,
}

impl DemoData {
    /// Build the demo set relative to `now`
    pub fn build(settings: &WorkflowSettings, now: DateTime<Utc>) -> Result<Self, SeedError> {
        let days_ago = |d: i64| now - Duration::days(d);

        let mut clients = RecordCollection::<Client>::new(settings.clone());
        for (name, email, client_type, budget) in [
            ("Jane Cooper", "jane.cooper@example.com", "buyer", "1200000"),
            ("Wade Warren", "wade.warren@example.com", "seller", ""),
            ("Esther Howard", "esther.howard@example.com", "tenant", "3500"),
            ("Cameron Williamson", "cameron.w@example.com", "investor", "5000000"),
        ] {
            let form = ClientForm {
                name: name.into(),
                email: email.into(),
                client_type: client_type.into(),
                budget: budget.into(),
                ..Default::default()
            };
            clients.create(form.validate()?, days_ago(40));
        }
        walk(
            &mut clients,
            "CL-0001",
            &[ClientStatus::DocumentsPending, ClientStatus::Verified, ClientStatus::Active],
            days_ago(35),
        )?;
        walk(&mut clients, "CL-0002", &[ClientStatus::DocumentsPending], days_ago(20))?;

        let mut properties = RecordCollection::<Property>::new(settings.clone());
        for (title, address, property_type, location, listing_type, price) in [
            ("Maple Street House", "14 Maple St", "house", "suburbs", "sale", "1000000"),
            ("12 Harbour View", "12 Harbour Rd, Apt 5", "apartment", "waterfront", "sale", "850000"),
            ("City Loft", "88 King St, Unit 1201", "condo", "downtown", "rent", "3200"),
            ("Riverside Plot", "Lot 7, River Rd", "land", "countryside", "sale", "2500000"),
        ] {
            let form = PropertyForm {
                title: title.into(),
                address: address.into(),
                property_type: property_type.into(),
                location: location.into(),
                listing_type: listing_type.into(),
                price: price.into(),
                ..Default::default()
            };
            properties.create(form.validate()?, days_ago(60));
        }
        walk(&mut properties, "PR-0002", &[ListingStatus::UnderOffer], days_ago(10))?;

        let mut employees = EmployeeDirectory::new();
        for (name, role, department, hired) in [
            ("Mike Ross", "technician", "maintenance", "2020-02-03"),
            ("Rachel Zane", "agent", "sales", "2019-09-16"),
            ("Harvey Specter", "broker", "sales", "2015-01-12"),
            ("Donna Paulsen", "administrator", "administration", "2016-05-30"),
        ] {
            let form = EmployeeForm {
                name: name.into(),
                email: format!("{}@realestate.com", name.to_lowercase().replace(' ', ".")),
                role: role.into(),
                department: department.into(),
                hire_date: hired.into(),
                ..Default::default()
            };
            employees.create(form.validate()?);
        }

        let lookup = SubjectDirectory::from_subjects(
            clients.records().iter().map(Client::subject),
            properties.records().iter().map(Property::subject),
        );

        let mut sales = RecordCollection::<SalesOrder>::new(settings.clone());
        for (client, property, property_type, amount, created) in [
            ("CL-0002", "PR-0001", "house", "1000000", 30),
            ("CL-0002", "PR-0002", "apartment", "850000", 14),
            ("CL-0004", "PR-0004", "land", "2500000", 3),
        ] {
            let form = SalesOrderForm {
                client_id: client.into(),
                property_id: property.into(),
                property_type: property_type.into(),
                amount: amount.into(),
                agent: "Rachel Zane".into(),
                ..Default::default()
            };
            sales.create(form.validate(&lookup)?, days_ago(created));
        }
        walk(
            &mut sales,
            "SO-0001",
            &[
                SalesOrderStatus::ViewingScheduled,
                SalesOrderStatus::OfferMade,
                SalesOrderStatus::UnderContract,
                SalesOrderStatus::Closed,
            ],
            days_ago(25),
        )?;
        walk(
            &mut sales,
            "SO-0002",
            &[SalesOrderStatus::ViewingScheduled, SalesOrderStatus::OfferMade],
            days_ago(10),
        )?;

        let mut purchases = RecordCollection::<PurchaseOrder>::new(settings.clone());
        for (client, property, property_type, priority, budget, created) in [
            ("CL-0001", "PR-0002", "apartment", "high", "900000", 12),
            ("CL-0004", "PR-0003", "condo", "low", "600000", 5),
        ] {
            let form = PurchaseOrderForm {
                client_id: client.into(),
                property_id: property.into(),
                property_type: property_type.into(),
                priority: priority.into(),
                budget: budget.into(),
                agent: "Harvey Specter".into(),
                ..Default::default()
            };
            purchases.create(form.validate(&lookup)?, days_ago(created));
        }
        walk(
            &mut purchases,
            "PO-0001",
            &[PurchaseOrderStatus::Evaluating, PurchaseOrderStatus::OfferSubmitted],
            days_ago(9),
        )?;

        let mut maintenance = RecordCollection::<MaintenanceRequest>::new(settings.clone());
        for (property, client, kind, priority, description, cost, created) in [
            ("PR-0003", "CL-0003", "plumbing", "high", "Kitchen sink leaking under the cabinet", "250", 6),
            ("PR-0001", "CL-0002", "hvac", "medium", "Heating does not reach the upstairs bedrooms", "", 2),
            ("PR-0003", "CL-0003", "electrical", "critical", "Sparking outlet in the living room", "120", 0),
        ] {
            let form = MaintenanceRequestForm {
                property_id: property.into(),
                client_id: client.into(),
                maintenance_type: kind.into(),
                priority: priority.into(),
                issue_description: description.into(),
                estimated_cost: cost.into(),
                ..Default::default()
            };
            maintenance.create(form.validate(&lookup)?, days_ago(created));
        }
        let mut assign = StatusUpdate::new(MaintenanceStatus::Assigned).with_notes("Plumber booked");
        assign.assigned_to = Some("Mike Ross".into());
        maintenance.update_status("MR-0001", assign, days_ago(5))?;
        walk(
            &mut maintenance,
            "MR-0001",
            &[MaintenanceStatus::InProgress, MaintenanceStatus::PendingApproval],
            days_ago(4),
        )?;

        let data = Self {
            clients,
            properties,
            employees,
            sales,
            purchases,
            maintenance,
        };
        log::debug!(
            "Demo data: {} clients, {} properties, {} orders",
            data.clients.len(),
            data.properties.len(),
            data.sales.len() + data.purchases.len() + data.maintenance.len()
        );
        Ok(data)
    }

    /// Empty collections, used when the demo set cannot be built
    pub fn empty(settings: &WorkflowSettings) -> Self {
        Self {
            clients: RecordCollection::new(settings.clone()),
            properties: RecordCollection::new(settings.clone()),
            employees: EmployeeDirectory::new(),
            sales: RecordCollection::new(settings.clone()),
            purchases: RecordCollection::new(settings.clone()),
            maintenance: RecordCollection::new(settings.clone()),
        }
    }

    /// Names for the client/property pickers of create forms
    pub fn subject_directory(&self) -> SubjectDirectory {
        SubjectDirectory::from_subjects(
            self.clients.records().iter().map(Client::subject),
            self.properties.records().iter().map(Property::subject),
        )
    }
}

/// Move a record along `path`, one hour apart starting at `start`
fn walk<R: WorkflowRecord>(
    collection: &mut RecordCollection<R>,
    id: &str,
    path: &[R::Status],
    start: DateTime<Utc>,
) -> Result<(), WorkflowError> {
    for (i, status) in path.iter().enumerate() {
        collection.update_status(id, StatusUpdate::new(*status), start + Duration::hours(i as i64))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::TransitionPolicy;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_demo_data_builds() {
        let data = DemoData::build(&WorkflowSettings::default(), now()).unwrap();
        assert_eq!(data.clients.len(), 4);
        assert_eq!(data.properties.len(), 4);
        assert_eq!(data.employees.len(), 4);
        assert_eq!(data.sales.len(), 3);
        assert_eq!(data.purchases.len(), 2);
        assert_eq!(data.maintenance.len(), 3);

        let sale = data.sales.get("SO-0001").unwrap();
        assert_eq!(sale.status, SalesOrderStatus::Closed);
        assert_eq!(sale.client.name, "Wade Warren");
        assert_eq!(sale.property.name, "Maple Street House");
        assert_eq!(sale.timeline.len(), 5);
    }

    #[test]
    fn test_collections_keep_the_configured_policy() {
        let settings = WorkflowSettings {
            transition_policy: TransitionPolicy::Strict,
            ..Default::default()
        };
        let data = DemoData::build(&settings, now()).unwrap();
        assert_eq!(data.maintenance.settings().transition_policy, TransitionPolicy::Strict);
        assert_eq!(
            data.maintenance.selectable_statuses("MR-0001"),
            vec![
                MaintenanceStatus::Completed,
                MaintenanceStatus::InProgress,
                MaintenanceStatus::Cancelled
            ]
        );
    }

    #[test]
    fn test_new_records_continue_the_sequence() {
        let mut data = DemoData::build(&WorkflowSettings::default(), now()).unwrap();
        let form = MaintenanceRequestForm {
            property_id: "PR-0001".into(),
            client_id: "CL-0001".into(),
            maintenance_type: "other".into(),
            priority: "low".into(),
            issue_description: "Squeaky door".into(),
            ..Default::default()
        };
        let draft = form.validate(&data.subject_directory()).unwrap();
        let record = data.maintenance.create(draft, now());
        assert_eq!(record.id, "MR-0004");
        assert_eq!(record.client.name, "Jane Cooper");
    }
}
