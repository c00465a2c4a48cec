use crate::layout::center::tabs::TabBar;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let no_tabs = move || tabs_store.opened.with(|tabs| tabs.is_empty());

    view! {
        <div data-zone="center" class="app-tabs">
            <TabBar />
            {move || no_tabs().then(|| view! {
                <div class="app-tabs__empty">"Select a section in the sidebar to get started."</div>
            })}
            {children()}
        </div>
    }
}
