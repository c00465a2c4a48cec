use crate::shared::components::detail_card::{attachment_list, detail_row, or_dash, DetailCard};
use crate::shared::components::status_update_modal::StatusUpdateModal;
use crate::shared::components::timeline_view::TimelineView;
use crate::shared::components::ui::status_badge;
use crate::shared::date_utils::format_timestamp;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::state::use_back_office;
use contracts::domain::a005_property::ListingStatus;
use contracts::domain::a006_employee::Department;
use contracts::domain::common::Catalog;
use contracts::shared::format::{format_currency, format_number, format_optional_date};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PropertyDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let store = use_back_office();
    let id = StoredValue::new(id);
    let show_update = RwSignal::new(false);

    let property = Memo::new(move |_| store.properties.with(|c| id.with_value(|id| c.get(id).cloned())));
    let entries = Signal::derive(move || {
        property.with(|p| p.as_ref().map(|p| p.timeline.entries().to_vec()).unwrap_or_default())
    });
    let is_final = Signal::derive(move || {
        !store.properties.with(|c| id.with_value(|id| c.accepts_updates(id)))
    });
    let title = move || {
        property.with(|p| match p {
            Some(p) => format!("{} ({})", p.title, p.id),
            None => id.get_value(),
        })
    };

    view! {
        <PageFrame page_id="a005_property--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    {move || property.with(|p| p.as_ref().map(|p| status_badge(p.status)))}
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
                {move || match property.get() {
                    None => view! {
                        <div class="alert alert--error">
                            {format!("Property '{}' not found", id.get_value())}
                        </div>
                    }
                    .into_any(),
                    Some(p) => view! {
                        <div class="detail-layout">
                            <DetailCard title="Listing".to_string()>
                                {detail_row("Address", p.address.clone())}
                                {detail_row("Property type", p.property_type.label())}
                                {detail_row("Location", p.location.label())}
                                {detail_row("Listing type", p.listing_type.label())}
                                {detail_row("Price", format_currency(p.price))}
                                {detail_row("Bedrooms", p.bedrooms.map_or("-".to_string(), |b| b.to_string()))}
                                {detail_row("Bathrooms", p.bathrooms.map_or("-".to_string(), |b| b.to_string()))}
                                {detail_row("Area", p.area_sqft.map_or("-".to_string(), |a| format!("{} sq ft", format_number(a.round() as u64))))}
                                {detail_row("Agent", or_dash(p.agent.as_deref()))}
                                {detail_row("Listed", format_timestamp(p.created_at))}
                                {detail_row("Closed", format_optional_date(p.closed_date))}
                                {detail_row("Description", or_dash(p.description.as_deref()))}
                                {detail_row("Photos", attachment_list(&p.photos))}
                            </DetailCard>
                            <TimelineView
                                entries=entries
                                status_label=ListingStatus::label_for
                                threshold_hours=store.threshold_hours()
                            />
                        </div>
                    }
                    .into_any(),
                }}
            </div>

            <Show when=move || show_update.get()>
                <StatusUpdateModal
                    collection=store.properties
                    record_id=id.get_value()
                    on_close=Callback::new(move |_| show_update.set(false))
                    assignees=store.assignees(Some(Department::Sales))
                    amount_label="New price"
                />
            </Show>
        </PageFrame>
    }
}
