use contracts::domain::common::{Catalog, ValidationErrors};
use contracts::system::auth::{demo_logins, LoginForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::state::use_back_office;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_back_office();
    let form = RwSignal::new(LoginForm::default());
    let field_errors = RwSignal::new(ValidationErrors::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let credentials = match form.get().validate() {
            Ok(credentials) => credentials,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(ValidationErrors::new());
        set_is_loading.set(true);

        let settings = store.settings.get_value();
        spawn_local(async move {
            // switching to MainLayout happens through the auth state
            if let Err(e) = do_login(credentials, settings, set_auth_state).await {
                set_error_message.set(Some(e.to_string()));
            }
            set_is_loading.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            field_errors.with(|e| {
                e.get(field)
                    .map(|m| view! { <div class="form-group__error">{m.to_string()}</div> })
            })
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Real Estate Back Office"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate=true>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="agent@realestate.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error("email")}
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error("password")}
                    </div>

                    <label class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().remember_me
                            on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                            disabled=move || is_loading.get()
                        />
                        "Remember me"
                    </label>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo accounts:"</p>
                    {demo_logins()
                        .into_iter()
                        .map(|(email, password, role)| {
                            view! {
                                <p>
                                    <strong>{role.label()}</strong>
                                    ": " {email} " / " {password}
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
