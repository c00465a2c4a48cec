use super::label_text;
use leptos::prelude::*;

#[component]
pub fn Textarea(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group form__group--wide" class:form__group--error=has_error>
            <label class="form__label">
                {label_text(&label, required)}
                <textarea
                    class="form__textarea"
                    rows=rows.unwrap_or(3)
                    placeholder=move || placeholder.get().unwrap_or_default()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                ></textarea>
            </label>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
