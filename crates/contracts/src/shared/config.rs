use crate::domain::common::TransitionPolicy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub session: SessionSettings,
    pub workflow: WorkflowSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Local storage key holding the serialized session
    pub storage_key: String,
    pub lifetime_hours: i64,
    /// Lifetime when "remember me" is ticked
    pub remember_me_days: i64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            storage_key: "realEstateSession".to_string(),
            lifetime_hours: 12,
            remember_me_days: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkflowSettings {
    pub transition_policy: TransitionPolicy,
    /// Maintenance target date offset when no preferred date is given
    pub default_target_days: i64,
    /// Activity entries younger than this render as relative time
    pub relative_time_threshold_hours: i64,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            transition_policy: TransitionPolicy::Permissive,
            default_target_days: 7,
            relative_time_threshold_hours: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Artificial latency of the login form
    pub login_delay_ms: u32,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self { login_delay_ms: 800 }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[session]
storage_key = "realEstateSession"
lifetime_hours = 12
remember_me_days = 30

[workflow]
transition_policy = "permissive"
default_target_days = 7
relative_time_threshold_hours = 24

[auth]
login_delay_ms = 800
"#;

/// Load settings.
///
/// `overrides` is a TOML document; keys it leaves out keep their defaults.
/// Without overrides the embedded default config is used.
pub fn load_settings(overrides: Option<&str>) -> Result<AppSettings, ConfigError> {
    match overrides {
        Some(doc) if !doc.trim().is_empty() => {
            let settings: AppSettings = toml::from_str(doc)?;
            log::info!("Loaded settings overrides");
            Ok(settings)
        }
        _ => {
            log::debug!("Using default embedded configuration");
            Ok(toml::from_str(DEFAULT_CONFIG)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.workflow.default_target_days, 7);
        assert_eq!(settings.session.storage_key, "realEstateSession");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let settings = load_settings(Some(
            r#"
            [workflow]
            transition_policy = "strict"
            "#,
        ))
        .unwrap();
        assert_eq!(settings.workflow.transition_policy, TransitionPolicy::Strict);
        assert_eq!(settings.workflow.relative_time_threshold_hours, 24);
        assert_eq!(settings.auth.login_delay_ms, 800);
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(load_settings(Some("[workflow]\ntransition_policy = \"loose\"")).is_err());
        assert!(load_settings(Some("not toml at all ===")).is_err());
    }

    #[test]
    fn test_default_settings_accept_every_status_change() {
        use crate::domain::a003_maintenance_request::{
            MaintenanceRequest, MaintenanceRequestForm, MaintenanceStatus,
        };
        use crate::domain::common::{
            Catalog, RecordCollection, StatusUpdate, SubjectDirectory, WorkflowRecord,
        };
        use chrono::{TimeZone, Utc};

        let settings = load_settings(None).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let form = MaintenanceRequestForm {
            property_id: "1".into(),
            client_id: "1".into(),
            maintenance_type: "plumbing".into(),
            priority: "high".into(),
            issue_description: "Leak".into(),
            ..Default::default()
        };

        for from in MaintenanceStatus::all() {
            for to in MaintenanceStatus::all() {
                let mut requests =
                    RecordCollection::<MaintenanceRequest>::new(settings.workflow.clone());
                let draft = form.validate(&SubjectDirectory::new()).unwrap();
                let id = requests.create(draft, now).id().to_string();
                requests.update_status(&id, StatusUpdate::new(*from), now).unwrap();
                assert!(requests.accepts_updates(&id));

                let before = requests.get(&id).unwrap().timeline().len();
                let record = requests.update_status(&id, StatusUpdate::new(*to), now).unwrap();
                assert_eq!(record.status(), *to);
                assert_eq!(record.timeline().len(), before + 1);
            }
        }
    }
}
