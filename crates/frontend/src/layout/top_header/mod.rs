//! Top bar: brand, sidebar toggle, current user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::state::use_back_office;
use crate::system::auth::context::{do_logout, use_auth};
use contracts::domain::common::Catalog;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_back_office();
    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        store
            .settings
            .with_value(|settings| do_logout(settings, set_auth_state));
        ctx.close_all();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Real Estate Back Office"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth_state.get().user_name()}</span>
                    {move || {
                        auth_state
                            .get()
                            .session
                            .map(|s| view! { <span class="top-header__role">{s.role.label()}</span> })
                    }}
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
