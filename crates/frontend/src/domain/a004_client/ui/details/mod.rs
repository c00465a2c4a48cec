use crate::shared::components::detail_card::{attachment_list, detail_row, or_dash, DetailCard};
use crate::shared::components::status_update_modal::StatusUpdateModal;
use crate::shared::components::timeline_view::TimelineView;
use crate::shared::components::ui::status_badge;
use crate::shared::date_utils::format_timestamp;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::state::use_back_office;
use contracts::domain::a004_client::ClientStatus;
use contracts::domain::a006_employee::Department;
use contracts::domain::common::Catalog;
use contracts::shared::format::{format_optional_currency, format_optional_date};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ClientDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let store = use_back_office();
    let id = StoredValue::new(id);
    let show_update = RwSignal::new(false);

    let client = Memo::new(move |_| store.clients.with(|c| id.with_value(|id| c.get(id).cloned())));
    let entries = Signal::derive(move || {
        client.with(|c| c.as_ref().map(|c| c.timeline.entries().to_vec()).unwrap_or_default())
    });
    let title = move || {
        client.with(|c| match c {
            Some(c) => format!("{} ({})", c.name, c.id),
            None => id.get_value(),
        })
    };

    view! {
        <PageFrame page_id="a004_client--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    {move || client.with(|c| c.as_ref().map(|c| status_badge(c.status)))}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || {
                            !store.clients.with(|c| id.with_value(|id| c.accepts_updates(id)))
                        })
                        on_click=move |_| show_update.set(true)
                    >
                        "Update status"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match client.get() {
                    None => view! {
                        <div class="alert alert--error">
                            {format!("Client '{}' not found", id.get_value())}
                        </div>
                    }
                    .into_any(),
                    Some(c) => view! {
                        <div class="detail-layout">
                            <DetailCard title="Contact".to_string()>
                                {detail_row("Email", c.email.clone())}
                                {detail_row("Phone", or_dash(c.phone.as_deref()))}
                                {detail_row("Client type", c.client_type.label())}
                                {detail_row("Preferred location", c.preferred_location.map(|l| l.label()).unwrap_or("Any"))}
                                {detail_row("Budget", format_optional_currency(c.budget))}
                                {detail_row("Assigned agent", or_dash(c.assigned_agent.as_deref()))}
                                {detail_row("Registered", format_timestamp(c.created_at))}
                                {detail_row("Active since", format_optional_date(c.activated_date))}
                                {detail_row("Notes", or_dash(c.notes.as_deref()))}
                                {detail_row("Documents", attachment_list(&c.documents))}
                            </DetailCard>
                            <TimelineView
                                entries=entries
                                status_label=ClientStatus::label_for
                                threshold_hours=store.threshold_hours()
                            />
                        </div>
                    }
                    .into_any(),
                }}
            </div>

            <Show when=move || show_update.get()>
                <StatusUpdateModal
                    collection=store.clients
                    record_id=id.get_value()
                    on_close=Callback::new(move |_| show_update.set(false))
                    assignees=store.assignees(Some(Department::Sales))
                />
            </Show>
        </PageFrame>
    }
}
