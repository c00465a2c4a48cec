use crate::shared::components::attachment_input::format_size;
use crate::shared::icons::icon;
use contracts::domain::common::AttachmentMeta;
use leptos::prelude::*;
use thaw::*;

/// Two-column label/value grid of a detail page
#[component]
pub fn DetailCard(
    #[prop(optional, into)]
    title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <Card>
            {move || title.get().map(|t| view! { <h3 class="detail-card__title">{t}</h3> })}
            <div class="detail-card__grid">
                {children()}
            </div>
        </Card>
    }
}

/// One label/value pair of a [`DetailCard`]
pub fn detail_row(label: &'static str, value: impl IntoView + 'static) -> impl IntoView {
    view! {
        <span class="form__label">{label}</span>
        <span class="detail-card__value">{value}</span>
    }
}

/// Text or "-" for empty values
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Read-only list of attached document names
pub fn attachment_list(attachments: &[AttachmentMeta]) -> AnyView {
    if attachments.is_empty() {
        return view! { <span class="detail-card__muted">"No documents"</span> }.into_any();
    }
    view! {
        <ul class="attachment-list">
            {attachments
                .iter()
                .map(|a| view! {
                    <li class="attachment-list__item">
                        {icon("paperclip")}
                        <span>{a.name.clone()}</span>
                        <span class="attachment-list__size">{format_size(a.size_bytes)}</span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("Jane")), "Jane");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(None), "-");
    }
}
