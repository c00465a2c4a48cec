use crate::shared::components::detail_card::{attachment_list, detail_row, or_dash, DetailCard};
use crate::shared::components::status_update_modal::StatusUpdateModal;
use crate::shared::components::timeline_view::TimelineView;
use crate::shared::components::ui::{priority_badge, status_badge};
use crate::shared::date_utils::format_timestamp;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::state::use_back_office;
use chrono::Utc;
use contracts::domain::a003_maintenance_request::MaintenanceStatus;
use contracts::domain::a006_employee::Department;
use contracts::domain::common::Catalog;
use contracts::shared::format::{format_date, format_optional_currency, format_optional_date};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MaintenanceRequestDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let store = use_back_office();
    let id = StoredValue::new(id);
    let show_update = RwSignal::new(false);

    let request = Memo::new(move |_| store.maintenance.with(|c| id.with_value(|id| c.get(id).cloned())));
    let entries = Signal::derive(move || {
        request.with(|r| r.as_ref().map(|r| r.timeline.entries().to_vec()).unwrap_or_default())
    });
    let is_final = Signal::derive(move || {
        !store.maintenance.with(|c| id.with_value(|id| c.accepts_updates(id)))
    });

    view! {
        <PageFrame page_id="a003_maintenance_request--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || format!("Maintenance request {}", id.get_value())}</h1>
                    {move || request.with(|r| r.as_ref().map(|r| status_badge(r.status)))}
                    {move || request.with(|r| {
                        r.as_ref().filter(|r| r.is_overdue(Utc::now().date_naive())).map(|_| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Overdue"</Badge>
                        })
                    })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=is_final
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
                {move || match request.get() {
                    None => view! {
                        <div class="alert alert--error">
                            {format!("Maintenance request '{}' not found", id.get_value())}
                        </div>
                    }
                    .into_any(),
                    Some(r) => view! {
                        <div class="detail-layout">
                            <DetailCard title="Request".to_string()>
                                {detail_row("Property", r.property.name.clone())}
                                {detail_row("Reported by", r.client.name.clone())}
                                {detail_row("Type", r.maintenance_type.label())}
                                {detail_row("Priority", priority_badge(r.priority))}
                                {detail_row("Area", r.area.map(|a| a.label()).unwrap_or("-"))}
                                {detail_row("Issue", r.issue_description.clone())}
                                {detail_row("Preferred date", format_optional_date(r.preferred_date))}
                                {detail_row("Target date", format_date(r.target_date))}
                                {detail_row("Assigned to", or_dash(r.assigned_to.as_deref()))}
                                {detail_row("Estimated cost", format_optional_currency(r.estimated_cost))}
                                {detail_row("Actual cost", format_optional_currency(r.actual_cost))}
                                {detail_row("Created", format_timestamp(r.created_at))}
                                {detail_row("Completed", format_optional_date(r.completed_date))}
                                {detail_row("Documents", attachment_list(&r.attachments))}
                            </DetailCard>
                            <TimelineView
                                entries=entries
                                status_label=MaintenanceStatus::label_for
                                threshold_hours=store.threshold_hours()
                            />
                        </div>
                    }
                    .into_any(),
                }}
            </div>

            <Show when=move || show_update.get()>
                <StatusUpdateModal
                    collection=store.maintenance
                    record_id=id.get_value()
                    on_close=Callback::new(move |_| show_update.set(false))
                    assignees=store.assignees(Some(Department::Maintenance))
                    amount_label="Actual cost"
                />
            </Show>
        </PageFrame>
    }
}
