use super::credentials::Role;
use crate::shared::config::SessionSettings;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Session expired, please log in again")]
    SessionExpired,

    #[error("failed to encode session: {0}")]
    Encode(String),
}

/// Logged-in user, persisted as `{email, role, loginTime, rememberMe}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub role: Role,
    pub login_time: DateTime<Utc>,
    pub remember_me: bool,
}

impl Session {
    pub fn expires_at(&self, settings: &SessionSettings) -> DateTime<Utc> {
        let lifetime = if self.remember_me {
            Duration::days(settings.remember_me_days)
        } else {
            Duration::hours(settings.lifetime_hours)
        };
        self.login_time + lifetime
    }

    pub fn is_expired(&self, now: DateTime<Utc>, settings: &SessionSettings) -> bool {
        now >= self.expires_at(settings)
    }

    pub fn ensure_valid(&self, now: DateTime<Utc>, settings: &SessionSettings) -> Result<(), AuthError> {
        if self.is_expired(now, settings) {
            Err(AuthError::SessionExpired)
        } else {
            Ok(())
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Key-value storage holding the serialized session
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    items: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.items.remove(key);
    }
}

pub fn save_session(
    store: &mut impl SessionStore,
    settings: &SessionSettings,
    session: &Session,
) -> Result<(), AuthError> {
    let json = serde_json::to_string(session).map_err(|e| AuthError::Encode(e.to_string()))?;
    store.set(&settings.storage_key, &json);
    Ok(())
}

/// Read the stored session.
///
/// Malformed or expired content is discarded and the key removed.
pub fn restore_session(
    store: &mut impl SessionStore,
    settings: &SessionSettings,
    now: DateTime<Utc>,
) -> Option<Session> {
    let raw = store.get(&settings.storage_key)?;
    let session = match serde_json::from_str::<Session>(&raw) {
        Ok(session) => session,
        Err(e) => {
            log::warn!("Discarding malformed session: {}", e);
            store.remove(&settings.storage_key);
            return None;
        }
    };

    if let Err(e) = session.ensure_valid(now, settings) {
        log::info!("Discarding session of {}: {}", session.email, e);
        store.remove(&settings.storage_key);
        return None;
    }

    Some(session)
}

pub fn clear_session(store: &mut impl SessionStore, settings: &SessionSettings) {
    store.remove(&settings.storage_key);
    log::info!("Session cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn login_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap()
    }

    fn session(remember_me: bool) -> Session {
        Session {
            email: "agent@realestate.com".into(),
            role: Role::Agent,
            login_time: login_time(),
            remember_me,
        }
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let json = serde_json::to_value(session(false)).unwrap();
        assert_eq!(json["email"], "agent@realestate.com");
        assert_eq!(json["role"], "agent");
        assert_eq!(json["rememberMe"], false);
        assert!(json.get("loginTime").is_some());
    }

    #[test]
    fn test_round_trip_through_store() {
        let settings = SessionSettings::default();
        let mut store = MemorySessionStore::new();
        save_session(&mut store, &settings, &session(false)).unwrap();

        let restored = restore_session(&mut store, &settings, login_time() + Duration::hours(1));
        assert_eq!(restored, Some(session(false)));
    }

    #[test]
    fn test_expiry_depends_on_remember_me() {
        let settings = SessionSettings::default();
        let later = login_time() + Duration::hours(13);
        assert!(session(false).is_expired(later, &settings));
        assert!(!session(true).is_expired(later, &settings));
        assert_eq!(
            session(false).ensure_valid(later, &settings),
            Err(AuthError::SessionExpired)
        );
    }

    #[test]
    fn test_expired_session_is_removed() {
        let settings = SessionSettings::default();
        let mut store = MemorySessionStore::new();
        save_session(&mut store, &settings, &session(false)).unwrap();

        assert_eq!(restore_session(&mut store, &settings, login_time() + Duration::days(1)), None);
        assert_eq!(store.get(&settings.storage_key), None);
    }

    #[test]
    fn test_malformed_session_is_removed() {
        let settings = SessionSettings::default();
        let mut store = MemorySessionStore::new();
        store.set(&settings.storage_key, "{\"email\": 42");
        assert_eq!(restore_session(&mut store, &settings, login_time()), None);
        assert_eq!(store.get(&settings.storage_key), None);

        store.set(&settings.storage_key, r#"{"email":"a@b.c","role":"owner","loginTime":"2024-03-15T08:00:00Z","rememberMe":false}"#);
        assert_eq!(restore_session(&mut store, &settings, login_time()), None);
        assert_eq!(store.get(&settings.storage_key), None);
    }

    #[test]
    fn test_clear_session() {
        let settings = SessionSettings::default();
        let mut store = MemorySessionStore::new();
        save_session(&mut store, &settings, &session(true)).unwrap();
        clear_session(&mut store, &settings);
        assert!(restore_session(&mut store, &settings, login_time()).is_none());
    }
}
