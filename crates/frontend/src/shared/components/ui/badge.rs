use contracts::domain::common::{Catalog, Priority, WorkflowStatus};
use leptos::prelude::*;
use thaw::*;

/// Badge color for a workflow status: finished green, dropped red, fresh blue
fn status_color<S: WorkflowStatus>(status: S) -> BadgeColor {
    if status.is_completion() {
        BadgeColor::Success
    } else if status.is_terminal() {
        BadgeColor::Danger
    } else if status == S::initial() {
        BadgeColor::Informative
    } else {
        BadgeColor::Brand
    }
}

fn priority_color(priority: Priority) -> BadgeColor {
    match priority {
        Priority::Critical => BadgeColor::Danger,
        Priority::High => BadgeColor::Warning,
        Priority::Medium => BadgeColor::Brand,
        Priority::Low => BadgeColor::Subtle,
    }
}

pub fn status_badge<S: WorkflowStatus + Send>(status: S) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
            {status.label()}
        </Badge>
    }
}

pub fn priority_badge(priority: Priority) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=priority_color(priority)>
            {priority.label()}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_maintenance_request::MaintenanceStatus;

    #[test]
    fn test_status_colors() {
        assert!(matches!(status_color(MaintenanceStatus::Completed), BadgeColor::Success));
        assert!(matches!(status_color(MaintenanceStatus::Cancelled), BadgeColor::Danger));
        assert!(matches!(status_color(MaintenanceStatus::Submitted), BadgeColor::Informative));
        assert!(matches!(status_color(MaintenanceStatus::InProgress), BadgeColor::Brand));
    }

    #[test]
    fn test_priority_colors_and_labels() {
        assert!(matches!(priority_color(Priority::Critical), BadgeColor::Danger));
        assert!(matches!(priority_color(Priority::Low), BadgeColor::Subtle));
        assert_eq!(Priority::High.label(), "High");
        assert_eq!(Priority::from_code("medium"), Some(Priority::Medium));
    }
}
