use chrono::Utc;
use contracts::shared::config::AppSettings;
use contracts::system::auth::{
    authenticate, clear_session, display_name, restore_session, save_session, AuthError,
    LoginCredentials, Session,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::storage::LocalStorageStore;
use crate::shared::state::use_back_office;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().map(|s| s.is_admin()).unwrap_or(false)
    }

    pub fn user_name(&self) -> String {
        self.session
            .as_ref()
            .map(|s| display_name(&s.email))
            .unwrap_or_else(|| "Guest".to_string())
    }
}

/// Auth context provider component.
///
/// Restores a stored session on mount; expired or malformed content is dropped.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = use_back_office();
    let session_settings = store.settings.with_value(|s| s.session.clone());
    let session = restore_session(&mut LocalStorageStore, &session_settings, Utc::now());
    if let Some(s) = &session {
        log::info!("Restored session of {}", s.email);
    }

    let (auth_state, set_auth_state) = signal(AuthState { session });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Check credentials after the configured delay and persist the session
pub async fn do_login(
    credentials: LoginCredentials,
    settings: AppSettings,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), AuthError> {
    TimeoutFuture::new(settings.auth.login_delay_ms).await;

    let session = authenticate(&credentials, Utc::now())?;
    save_session(&mut LocalStorageStore, &settings.session, &session)?;
    set_auth_state.set(AuthState {
        session: Some(session),
    });
    Ok(())
}

pub fn do_logout(settings: &AppSettings, set_auth_state: WriteSignal<AuthState>) {
    clear_session(&mut LocalStorageStore, &settings.session);
    set_auth_state.set(AuthState::default());
}
