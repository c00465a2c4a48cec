use crate::shared::components::detail_card::{attachment_list, detail_row, or_dash, DetailCard};
use crate::shared::components::status_update_modal::StatusUpdateModal;
use crate::shared::components::timeline_view::TimelineView;
use crate::shared::components::ui::status_badge;
use crate::shared::date_utils::format_timestamp;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::state::use_back_office;
use contracts::domain::a001_sales_order::SalesOrderStatus;
use contracts::domain::a006_employee::Department;
use contracts::domain::common::Catalog;
use contracts::shared::format::{format_currency, format_optional_date};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SalesOrderDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let store = use_back_office();
    let id = StoredValue::new(id);
    let show_update = RwSignal::new(false);

    let order = Memo::new(move |_| store.sales.with(|c| id.with_value(|id| c.get(id).cloned())));
    let entries = Signal::derive(move || {
        order.with(|o| o.as_ref().map(|o| o.timeline.entries().to_vec()).unwrap_or_default())
    });
    let can_update = Signal::derive(move || {
        store.sales.with(|c| id.with_value(|id| c.accepts_updates(id)))
    });

    view! {
        <PageFrame page_id="a001_sales_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || format!("Sales order {}", id.get_value())}</h1>
                    {move || order.with(|o| o.as_ref().map(|o| status_badge(o.status)))}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !can_update.get())
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
                {move || match order.get() {
                    None => view! {
                        <div class="alert alert--error">
                            {format!("Sales order '{}' not found", id.get_value())}
                        </div>
                    }
                    .into_any(),
                    Some(o) => view! {
                        <div class="detail-layout">
                            <DetailCard title="Deal".to_string()>
                                {detail_row("Client", o.client.name.clone())}
                                {detail_row("Property", o.property.name.clone())}
                                {detail_row("Property type", o.property_type.label())}
                                {detail_row("Price", format_currency(o.amount))}
                                {detail_row("Agent", or_dash(o.agent.as_deref()))}
                                {detail_row("Created", format_timestamp(o.created_at))}
                                {detail_row("Expected close", format_optional_date(o.expected_close_date))}
                                {detail_row("Closed", format_optional_date(o.closed_date))}
                                {detail_row("Notes", or_dash(o.notes.as_deref()))}
                                {detail_row("Documents", attachment_list(&o.attachments))}
                            </DetailCard>
                            <TimelineView
                                entries=entries
                                status_label=SalesOrderStatus::label_for
                                threshold_hours=store.threshold_hours()
                            />
                        </div>
                    }
                    .into_any(),
                }}
            </div>

            <Show when=move || show_update.get()>
                <StatusUpdateModal
                    collection=store.sales
                    record_id=id.get_value()
                    on_close=Callback::new(move |_| show_update.set(false))
                    assignees=store.assignees(Some(Department::Sales))
                    amount_label="Offer amount"
                />
            </Show>
        </PageFrame>
    }
}
