use crate::shared::date_utils::{format_timestamp, relative_time};
use contracts::domain::common::{TimelineDetails, TimelineEntry};
use contracts::shared::format::format_currency;
use leptos::prelude::*;

/// Detail lines of an entry, status codes resolved through `status_label`
fn detail_lines(details: &TimelineDetails, status_label: fn(&str) -> String) -> Vec<String> {
    let mut lines = Vec::new();
    match (&details.previous_status, &details.new_status) {
        (Some(prev), Some(next)) => {
            lines.push(format!("Status: {} → {}", status_label(prev), status_label(next)))
        }
        (None, Some(next)) => lines.push(format!("Status: {}", status_label(next))),
        _ => {}
    }
    if let Some(assignee) = &details.assigned_to {
        lines.push(format!("Assigned to: {}", assignee));
    }
    if let Some(amount) = details.amount {
        lines.push(format!("Amount: {}", format_currency(amount)));
    }
    if !details.documents.is_empty() {
        lines.push(format!("Documents: {}", details.documents.join(", ")));
    }
    lines
}

/// Activity log of a record, oldest entry first
#[component]
pub fn TimelineView(
    #[prop(into)]
    entries: Signal<Vec<TimelineEntry>>,
    status_label: fn(&str) -> String,
    threshold_hours: i64,
) -> impl IntoView {
    view! {
        <div class="timeline">
            <h3 class="timeline__title">"Activity"</h3>
            <Show
                when=move || entries.with(|e| !e.is_empty())
                fallback=|| view! { <div class="timeline__empty">"No activity yet"</div> }
            >
                <ol class="timeline__list">
                    <For
                        each=move || entries.get()
                        key=|entry| entry.id
                        children=move |entry: TimelineEntry| {
                            let lines = entry
                                .details
                                .as_ref()
                                .map(|d| detail_lines(d, status_label))
                                .unwrap_or_default();
                            view! {
                                <li class="timeline__entry">
                                    <div class="timeline__entry-header">
                                        <span class="timeline__action">{entry.action.clone()}</span>
                                        <span class="timeline__time" title=format_timestamp(entry.timestamp)>
                                            {relative_time(entry.timestamp, threshold_hours)}
                                        </span>
                                    </div>
                                    {entry.notes.clone().map(|n| view! { <p class="timeline__notes">{n}</p> })}
                                    {lines
                                        .into_iter()
                                        .map(|line| view! { <div class="timeline__detail">{line}</div> })
                                        .collect_view()}
                                </li>
                            }
                        }
                    />
                </ol>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(code: &str) -> String {
        code.to_uppercase()
    }

    #[test]
    fn test_detail_lines() {
        let details = TimelineDetails {
            previous_status: Some("submitted".into()),
            new_status: Some("assigned".into()),
            assigned_to: Some("Mike Johnson".into()),
            amount: None,
            documents: vec!["quote.pdf".into(), "photo.jpg".into()],
        };
        assert_eq!(
            detail_lines(&details, upper),
            vec![
                "Status: SUBMITTED → ASSIGNED".to_string(),
                "Assigned to: Mike Johnson".to_string(),
                "Documents: quote.pdf, photo.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_creation_details_show_initial_status_only() {
        let details = TimelineDetails {
            new_status: Some("inquiry".into()),
            ..Default::default()
        };
        assert_eq!(detail_lines(&details, upper), vec!["Status: INQUIRY".to_string()]);
    }
}
