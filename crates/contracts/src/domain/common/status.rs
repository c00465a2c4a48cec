use super::Catalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status set of a workflow record together with its transition table.
pub trait WorkflowStatus: Catalog + Eq + std::fmt::Debug {
    /// Status assigned on creation
    fn initial() -> Self;

    /// Statuses permitted to follow `self`
    fn permitted_next(&self) -> &'static [Self];

    /// Entering this status stamps the record's completion date
    fn is_completion(&self) -> bool {
        false
    }

    fn is_terminal(&self) -> bool {
        self.permitted_next().is_empty()
    }

    fn can_transition_to(&self, next: &Self) -> bool {
        self.permitted_next().contains(next)
    }
}

/// How strictly the transition table is enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Any status may follow any other, the current one included
    #[default]
    Permissive,
    /// Only transitions listed in the table are accepted
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot move from '{from}' to '{to}' (allowed: {})", allowed_list(.allowed))]
pub struct TransitionError {
    pub from: &'static str,
    pub to: &'static str,
    pub allowed: Vec<&'static str>,
}

fn allowed_list(allowed: &[&'static str]) -> String {
    if allowed.is_empty() {
        "none, status is final".to_string()
    } else {
        allowed.join(", ")
    }
}

/// Check a transition against the table under the given policy
pub fn check_transition<S: WorkflowStatus>(
    from: S,
    to: S,
    policy: TransitionPolicy,
) -> Result<(), TransitionError> {
    match policy {
        TransitionPolicy::Permissive => Ok(()),
        TransitionPolicy::Strict if from.can_transition_to(&to) => Ok(()),
        TransitionPolicy::Strict => Err(TransitionError {
            from: from.code(),
            to: to.code(),
            allowed: from.permitted_next().iter().map(|s| s.code()).collect(),
        }),
    }
}

/// Statuses a user may pick for a record currently in `current`
pub fn selectable_statuses<S: WorkflowStatus>(current: S, policy: TransitionPolicy) -> Vec<S> {
    match policy {
        TransitionPolicy::Strict => current.permitted_next().to_vec(),
        TransitionPolicy::Permissive => S::all().to_vec(),
    }
}

/// Whether a record in `current` can still receive a status update
pub fn accepts_updates<S: WorkflowStatus>(current: S, policy: TransitionPolicy) -> bool {
    !selectable_statuses(current, policy).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_maintenance_request::MaintenanceStatus;

    #[test]
    fn test_strict_accepts_table_edges() {
        assert!(check_transition(
            MaintenanceStatus::Submitted,
            MaintenanceStatus::Assigned,
            TransitionPolicy::Strict
        )
        .is_ok());
    }

    #[test]
    fn test_strict_rejects_skipping_steps() {
        let err = check_transition(
            MaintenanceStatus::Submitted,
            MaintenanceStatus::Completed,
            TransitionPolicy::Strict,
        )
        .unwrap_err();
        assert_eq!(err.from, "submitted");
        assert_eq!(err.to, "completed");
        assert_eq!(err.allowed, vec!["assigned", "cancelled"]);
    }

    #[test]
    fn test_terminal_status_rejects_everything_in_strict_mode() {
        assert!(MaintenanceStatus::Cancelled.is_terminal());
        let err = check_transition(
            MaintenanceStatus::Cancelled,
            MaintenanceStatus::Submitted,
            TransitionPolicy::Strict,
        )
        .unwrap_err();
        assert!(err.to_string().contains("status is final"));
    }

    #[test]
    fn test_permissive_accepts_any_pair() {
        for from in MaintenanceStatus::all() {
            for to in MaintenanceStatus::all() {
                assert!(check_transition(*from, *to, TransitionPolicy::Permissive).is_ok());
            }
        }
    }

    #[test]
    fn test_selectable_statuses() {
        assert_eq!(
            selectable_statuses(MaintenanceStatus::Submitted, TransitionPolicy::Strict),
            vec![MaintenanceStatus::Assigned, MaintenanceStatus::Cancelled]
        );
        assert_eq!(
            selectable_statuses(MaintenanceStatus::Submitted, TransitionPolicy::Permissive).len(),
            MaintenanceStatus::all().len()
        );
    }

    #[test]
    fn test_final_statuses_accept_updates_unless_strict() {
        assert!(accepts_updates(MaintenanceStatus::Completed, TransitionPolicy::Permissive));
        assert!(!accepts_updates(MaintenanceStatus::Completed, TransitionPolicy::Strict));
        assert!(accepts_updates(MaintenanceStatus::Submitted, TransitionPolicy::Strict));
        assert_eq!(TransitionPolicy::default(), TransitionPolicy::Permissive);
    }
}
