use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::list_utils::{FilterField, ListControls};
use leptos::prelude::*;
use thaw::*;

/// Collapsible filter panel of a list page.
///
/// The search box is always visible; the children are the page's own
/// fields, shown when the panel is expanded.
#[component]
pub fn FilterPanel(
    controls: ListControls,
    #[prop(optional, into)]
    search_placeholder: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let is_expanded = controls.expanded;
    let active_filters_count = controls.active_count();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-right")}
                    </span>
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    <Input
                        label="Search"
                        value=controls.value(FilterField::Search)
                        on_input=controls.setter(FilterField::Search)
                        placeholder=search_placeholder
                    />
                </div>
                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| controls.clear()
                    >
                        "Clear filters"
                    </Button>
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </Show>

            {move || controls.filter_error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}
        </div>
    }
}
