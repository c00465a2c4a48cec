use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)]
    label: String,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label
            class="form__checkbox-wrapper"
            class:form__checkbox-wrapper--disabled=move || disabled.get()
        >
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
