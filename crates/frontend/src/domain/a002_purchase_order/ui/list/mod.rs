use super::create::PurchaseOrderCreate;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_key, PURCHASE_ORDERS};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_update_modal::StatusUpdateModal;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{catalog_options, priority_badge, status_badge, Input, Select};
use crate::shared::date_utils::format_timestamp;
use crate::shared::list_utils::{FilterField, ListControls};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::use_back_office;
use contracts::domain::a002_purchase_order::{PurchaseOrder, PurchaseOrderStatus};
use contracts::domain::a006_employee::Department;
use contracts::domain::common::{Catalog, Priority, PropertyType, SortState};
use contracts::shared::format::{format_currency, format_optional_date};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_back_office();
    let controls = ListControls::new(SortState::new("created_at", false));

    let show_create = RwSignal::new(false);
    let update_target = RwSignal::new(Option::<String>::None);

    let rows = Memo::new(move |_| {
        store.purchases.with(|c| {
            controls
                .filter
                .with(|f| controls.sort.with(|s| c.view(f, s)))
        })
    });

    let open_detail = move |id: String| {
        tabs_store.open_tab(&detail_tab_key(PURCHASE_ORDERS, &id), &id);
    };

    view! {
        <PageFrame page_id="a002_purchase_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Purchase Orders".to_string() count=Signal::derive(move || Some(rows.with(|r| r.len())))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    "New purchase order"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel controls=controls search_placeholder="ID, client, property, agent...">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Select
                            label="Status"
                            value=controls.value(FilterField::Status)
                            on_change=controls.setter(FilterField::Status)
                            options={catalog_options::<PurchaseOrderStatus>()}
                            placeholder="All"
                        />
                        <Select
                            label="Property type"
                            value=controls.value(FilterField::Category)
                            on_change=controls.setter(FilterField::Category)
                            options={catalog_options::<PropertyType>()}
                            placeholder="All"
                        />
                        <Select
                            label="Priority"
                            value=controls.value(FilterField::Priority)
                            on_change=controls.setter(FilterField::Priority)
                            options={catalog_options::<Priority>()}
                            placeholder="All"
                        />
                        <Input
                            label="Created from"
                            input_type="date"
                            value=controls.value(FilterField::DateFrom)
                            on_input=controls.setter(FilterField::DateFrom)
                        />
                        <Input
                            label="Created to"
                            input_type="date"
                            value=controls.value(FilterField::DateTo)
                            on_input=controls.setter(FilterField::DateTo)
                        />
                        <Input
                            label="Amount"
                            value=controls.value(FilterField::Amount)
                            on_input=controls.setter(FilterField::Amount)
                            placeholder="200000-400000 or 1000000+"
                        />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" field="id" sort=controls.sort min_width=90.0 />
                                <SortableHeaderCell label="Client" field="client" sort=controls.sort min_width=160.0 />
                                <SortableHeaderCell label="Property" field="property" sort=controls.sort min_width=180.0 />
                                <SortableHeaderCell label="Type" field="type" sort=controls.sort />
                                <SortableHeaderCell label="Priority" field="priority" sort=controls.sort />
                                <SortableHeaderCell label="Budget / offer" field="amount" sort=controls.sort min_width=130.0 />
                                <SortableHeaderCell label="Status" field="status" sort=controls.sort min_width=140.0 />
                                <SortableHeaderCell label="Created" field="created_at" sort=controls.sort min_width=140.0 />
                                <SortableHeaderCell label="Target close" field="target_close_date" sort=controls.sort min_width=120.0 />
                                <TableHeaderCell resizable=false min_width=140.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|order: &PurchaseOrder| (order.id.clone(), order.timeline.len())
                                children=move |order: PurchaseOrder| {
                                    let id_for_link = order.id.clone();
                                    let id_for_view = order.id.clone();
                                    let id_for_update = order.id.clone();
                                    let amount = order.amount();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(id_for_link.clone());
                                                        }
                                                    >
                                                        {order.id.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{order.client.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{order.property.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{order.property_type.label()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{priority_badge(order.priority)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{format_currency(amount)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{status_badge(order.status)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_timestamp(order.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_optional_date(order.target_close_date)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| open_detail(id_for_view.clone())
                                                    >
                                                        "View"
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        size=ButtonSize::Small
                                                        on_click=move |_| update_target.set(Some(id_for_update.clone()))
                                                    >
                                                        "Update"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || rows.with(|r| r.is_empty())>
                        <div class="table__empty">"No purchase orders match the current filters"</div>
                    </Show>
                </div>
            </div>

            <Show when=move || show_create.get()>
                <PurchaseOrderCreate on_close=Callback::new(move |_| show_create.set(false)) />
            </Show>

            {move || update_target.get().map(|id| view! {
                <StatusUpdateModal
                    collection=store.purchases
                    record_id=id
                    on_close=Callback::new(move |_| update_target.set(None))
                    assignees=store.assignees(Some(Department::Sales))
                    amount_label="Offer amount"
                />
            })}
        </PageFrame>
    }
}
