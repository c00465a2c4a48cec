use super::label_text;
use leptos::prelude::*;

/// Labelled input with an error slot under it
#[component]
pub fn Input(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// "text" (default), "email", "number", "date"...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group" class:form__group--error=has_error>
            <label class="form__label">
                {label_text(&label, required)}
                <input
                    class="form__input"
                    type=input_t
                    prop:value=move || value.get()
                    placeholder=move || placeholder.get().unwrap_or_default()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
