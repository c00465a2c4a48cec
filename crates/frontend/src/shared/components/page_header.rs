use leptos::prelude::*;
use thaw::*;

/// Page title row: title, optional record count and the action buttons
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,
    /// Shown as a badge next to the title
    #[prop(optional, into)]
    count: MaybeProp<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{move || title.get()}</h1>
                {move || count.get().map(|c| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {c.to_string()}
                    </Badge>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
