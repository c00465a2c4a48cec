use crate::shared::icons::icon;
use contracts::domain::common::AttachmentMeta;
use contracts::shared::format::format_number;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

pub(crate) fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{} KB", format_number(bytes.div_ceil(1024)))
    }
}

/// Name and size of the files picked in `input`; the contents are never read
fn picked_files(input: &HtmlInputElement) -> Vec<AttachmentMeta> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| AttachmentMeta {
            name: file.name(),
            size_bytes: file.size() as u64,
        })
        .collect()
}

/// File picker that keeps only attachment metadata
#[component]
pub fn AttachmentInput(
    #[prop(into)]
    label: String,
    attachments: Signal<Vec<AttachmentMeta>>,
    on_change: Callback<Vec<AttachmentMeta>>,
) -> impl IntoView {
    let on_pick = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let mut current = attachments.get_untracked();
        current.extend(picked_files(&input));
        // allow picking the same file again
        input.set_value("");
        on_change.run(current);
    };

    let remove = move |index: usize| {
        let mut current = attachments.get_untracked();
        if index < current.len() {
            current.remove(index);
            on_change.run(current);
        }
    };

    view! {
        <div class="form__group form__group--wide">
            <label class="form__label">
                {label}
                <input type="file" multiple=true class="form__file" on:change=on_pick />
            </label>
            <ul class="attachment-list">
                {move || {
                    attachments
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, file)| view! {
                            <li class="attachment-list__item">
                                {icon("paperclip")}
                                <span>{file.name}</span>
                                <span class="attachment-list__size">{format_size(file.size_bytes)}</span>
                                <button
                                    type="button"
                                    class="attachment-list__remove"
                                    title="Remove"
                                    on:click=move |_| remove(index)
                                >
                                    {icon("x")}
                                </button>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1025), "2 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5,120 KB");
    }
}
