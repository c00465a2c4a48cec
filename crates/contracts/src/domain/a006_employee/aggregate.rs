use crate::domain::common::validation::{
    optional_text, required_date, required_email, required_option, required_text,
};
use crate::domain::common::{
    Catalog, Filterable, IdSequence, RecordFilter, SortState, Sortable, ValidationErrors,
    WorkflowError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::catalog_enum! {
    pub enum EmployeeRole {
        Agent => ("agent", "Agent"),
        Broker => ("broker", "Broker"),
        PropertyManager => ("property-manager", "Property Manager"),
        Technician => ("technician", "Maintenance Technician"),
        Administrator => ("administrator", "Administrator"),
    }
}

crate::catalog_enum! {
    pub enum Department {
        Sales => ("sales", "Sales"),
        Leasing => ("leasing", "Leasing"),
        Maintenance => ("maintenance", "Maintenance"),
        Administration => ("administration", "Administration"),
    }
}

/// Employee (aggregate a006). A directory entry, no workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: EmployeeRole,
    pub department: Department,
    pub hire_date: NaiveDate,
    pub active: bool,
}

impl Employee {
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Deactivated"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: EmployeeRole,
    pub department: Department,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
    pub hire_date: String,
}

impl EmployeeForm {
    pub fn validate(&self) -> Result<EmployeeDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.check("name", required_text(&self.name, "Full name"));
        let email = errors.check("email", required_email(&self.email, "Email"));
        let role = errors.check("role", required_option::<EmployeeRole>(&self.role, "Role"));
        let department = errors.check(
            "department",
            required_option::<Department>(&self.department, "Department"),
        );
        let hire_date = errors.check("hire_date", required_date(&self.hire_date, "Hire date"));

        match (name, email, role, department, hire_date) {
            (Some(name), Some(email), Some(role), Some(department), Some(hire_date))
                if errors.is_empty() =>
            {
                Ok(EmployeeDraft {
                    name,
                    email,
                    phone: optional_text(&self.phone),
                    role,
                    department,
                    hire_date,
                })
            }
            _ => Err(errors),
        }
    }
}

impl Filterable for Employee {
    fn search_text(&self) -> String {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_deref().unwrap_or_default(),
            self.role.label(),
        ]
        .join(" ")
    }

    /// "active" / "deactivated"
    fn status_code(&self) -> Option<&str> {
        Some(if self.active { "active" } else { "deactivated" })
    }

    fn category_code(&self) -> Option<&str> {
        Some(self.department.code())
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.hire_date)
    }
}

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "role" => self.role.position().cmp(&other.role.position()),
            "department" => self.department.position().cmp(&other.department.position()),
            "hire_date" => self.hire_date.cmp(&other.hire_date),
            "active" => self.active.cmp(&other.active),
            _ => Ordering::Equal,
        }
    }
}

const ELEMENT: &str = "Employee";

/// Employee list with its id sequence
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    sequence: IdSequence,
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeDirectory {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            sequence: IdSequence::new("EM-"),
        }
    }

    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Result<Self, WorkflowError> {
        let mut directory = Self::new();
        for employee in employees {
            directory.insert(employee)?;
        }
        Ok(directory)
    }

    pub fn insert(&mut self, employee: Employee) -> Result<(), WorkflowError> {
        if self.get(&employee.id).is_some() {
            return Err(WorkflowError::DuplicateId {
                element: ELEMENT,
                id: employee.id,
            });
        }
        self.sequence.observe(&employee.id);
        self.employees.push(employee);
        Ok(())
    }

    pub fn create(&mut self, draft: EmployeeDraft) -> &Employee {
        let employee = Employee {
            id: self.sequence.next_id(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            role: draft.role,
            department: draft.department,
            hire_date: draft.hire_date,
            active: true,
        };
        log::info!("Employee {} added to {}", employee.id, employee.department.code());
        let index = self.employees.len();
        self.employees.push(employee);
        &self.employees[index]
    }

    pub fn set_active(&mut self, id: &str, active: bool) -> Result<&Employee, WorkflowError> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| WorkflowError::NotFound {
                element: ELEMENT,
                id: id.to_string(),
            })?;
        employee.active = active;
        log::info!("Employee {} active={}", id, active);
        Ok(employee)
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn view(&self, filter: &RecordFilter, sort: &SortState) -> Vec<Employee> {
        sort.sorted(&filter.apply(&self.employees))
    }

    /// Names offered by "assigned to" pickers: active staff, optionally of one department
    pub fn assignees(&self, department: Option<Department>) -> Vec<String> {
        self.employees
            .iter()
            .filter(|e| e.active && department.map_or(true, |d| e.department == d))
            .map(|e| e.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, department: &str) -> EmployeeForm {
        EmployeeForm {
            name: name.into(),
            email: format!("{}@realty.com", name.to_lowercase().replace(' ', ".")),
            role: "agent".into(),
            department: department.into(),
            hire_date: "2021-06-01".into(),
            ..Default::default()
        }
    }

    fn directory() -> EmployeeDirectory {
        let mut d = EmployeeDirectory::new();
        d.create(form("Mike Ross", "maintenance").validate().unwrap());
        d.create(form("Rachel Zane", "sales").validate().unwrap());
        d
    }

    #[test]
    fn test_create_assigns_ids_and_activates() {
        let d = directory();
        assert_eq!(d.len(), 2);
        let e = d.get("EM-0002").unwrap();
        assert_eq!(e.name, "Rachel Zane");
        assert!(e.active);
    }

    #[test]
    fn test_hire_date_is_required() {
        let mut f = form("Harvey Specter", "sales");
        f.hire_date.clear();
        let errors = f.validate().unwrap_err();
        assert_eq!(errors.get("hire_date"), Some("Hire date is required"));
    }

    #[test]
    fn test_deactivated_staff_drop_out_of_assignees() {
        let mut d = directory();
        assert_eq!(d.assignees(Some(Department::Maintenance)), vec!["Mike Ross".to_string()]);
        d.set_active("EM-0001", false).unwrap();
        assert!(d.assignees(Some(Department::Maintenance)).is_empty());
        assert_eq!(d.assignees(None), vec!["Rachel Zane".to_string()]);
        assert!(matches!(
            d.set_active("EM-0099", true),
            Err(WorkflowError::NotFound { .. })
        ));
    }

    #[test]
    fn test_status_filter_uses_active_flag() {
        let mut d = directory();
        d.set_active("EM-0002", false).unwrap();
        let filter = RecordFilter {
            status: "deactivated".into(),
            ..Default::default()
        };
        let names: Vec<_> = d
            .view(&filter, &SortState::unsorted())
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Rachel Zane"]);
    }

    #[test]
    fn test_duplicate_seed_rejected() {
        let d = directory();
        let mut copy = EmployeeDirectory::with_employees(d.employees().to_vec()).unwrap();
        assert!(copy.insert(d.employees()[0].clone()).is_err());
    }
}
