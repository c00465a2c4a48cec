use super::label_text;
use contracts::domain::common::Catalog;
use leptos::prelude::*;

/// `(code, label)` pairs of a catalog in display order
pub fn catalog_options<C: Catalog>() -> Vec<(String, String)> {
    C::options()
        .into_iter()
        .map(|o| (o.code.to_string(), o.label.to_string()))
        .collect()
}

/// Labelled `<select>`; the empty placeholder option maps to ""
#[component]
pub fn Select(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group" class:form__group--error=has_error>
            <label class="form__label">
                {label_text(&label, required)}
                <select
                    class="form__select"
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    <option value="" selected=move || value.get().is_empty()>
                        {move || placeholder.get().unwrap_or_else(|| "Select...".to_string())}
                    </option>
                    <For
                        each=move || options.get()
                        key=|(val, _)| val.clone()
                        children=move |(val, label)| {
                            let val_clone = val.clone();
                            let is_selected = move || value.with(|v| *v == val_clone);
                            view! {
                                <option value=val selected=is_selected>
                                    {label}
                                </option>
                            }
                        }
                    />
                </select>
            </label>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Priority;

    #[test]
    fn test_catalog_options_keep_catalog_order() {
        let options = catalog_options::<Priority>();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], ("critical".to_string(), "Critical".to_string()));
        assert_eq!(options[3].1, "Low");
    }
}
