use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::state::BackOfficeStore;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::storage::get_settings_override;
use contracts::shared::config::{load_settings, AppSettings};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let settings = load_settings(get_settings_override().as_deref()).unwrap_or_else(|e| {
        log::error!("Invalid settings override, using defaults: {}", e);
        AppSettings::default()
    });

    provide_context(AppGlobalContext::new());
    provide_context(BackOfficeStore::new(settings));

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
