use super::create::SalesOrderCreate;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_key, SALES_ORDERS};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_update_modal::StatusUpdateModal;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{catalog_options, status_badge, Input, Select};
use crate::shared::date_utils::format_timestamp;
use crate::shared::list_utils::{FilterField, ListControls};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::back_office::use_back_office;
use contracts::domain::a001_sales_order::{SalesOrder, SalesOrderStatus};
use contracts::domain::a006_employee::Department;
use contracts::domain::common::{Catalog, PropertyType, SortState};
use contracts::shared::format::{format_currency, format_optional_date};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SalesOrderList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_back_office();
    let controls = ListControls::new(SortState::new("created_at", false));

    let show_create = RwSignal::new(false);
    let update_target = RwSignal::new(Option::<String>::None);

    let rows = Memo::new(move |_| {
        store.sales.with(|c| {
            controls
                .filter
                .with(|f| controls.sort.with(|s| c.view(f, s)))
        })
    });
    let total = Signal::derive(move || store.sales.with(|c| c.len()));

    let open_detail = move |id: String| {
        tabs_store.open_tab(&detail_tab_key(SALES_ORDERS, &id), &id);
    };

    view! {
        <PageFrame page_id="a001_sales_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Sales Orders".to_string() count=Signal::derive(move || Some(rows.with(|r| r.len())))>
                <span class="page__subtitle">{move || format!("of {}", total.get())}</span>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    "New sales order"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel controls=controls search_placeholder="ID, client, property, agent...">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Select
                            label="Status"
                            value=controls.value(FilterField::Status)
                            on_change=controls.setter(FilterField::Status)
                            options={catalog_options::<SalesOrderStatus>()}
                            placeholder="All"
                        />
                        <Select
                            label="Property type"
                            value=controls.value(FilterField::Category)
                            on_change=controls.setter(FilterField::Category)
                            options={catalog_options::<PropertyType>()}
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
                            label="Price"
                            value=controls.value(FilterField::Amount)
                            on_input=controls.setter(FilterField::Amount)
                            placeholder="100000-250000 or 500000+"
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
                                <SortableHeaderCell label="Price" field="amount" sort=controls.sort min_width=120.0 />
                                <SortableHeaderCell label="Status" field="status" sort=controls.sort min_width=140.0 />
                                <TableHeaderCell resizable=false min_width=120.0>"Agent"</TableHeaderCell>
                                <SortableHeaderCell label="Created" field="created_at" sort=controls.sort min_width=140.0 />
                                <SortableHeaderCell label="Expected close" field="expected_close_date" sort=controls.sort min_width=120.0 />
                                <TableHeaderCell resizable=false min_width=140.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|order: &SalesOrder| (order.id.clone(), order.timeline.len())
                                children=move |order: SalesOrder| {
                                    let id_for_link = order.id.clone();
                                    let id_for_view = order.id.clone();
                                    let id_for_update = order.id.clone();
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
                                                <TableCellLayout>
                                                    <span class="table__number">{format_currency(order.amount)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{status_badge(order.status)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {order.agent.clone().unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_timestamp(order.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_optional_date(order.expected_close_date)}</TableCellLayout>
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
                        <div class="table__empty">"No sales orders match the current filters"</div>
                    </Show>
                </div>
            </div>

            <Show when=move || show_create.get()>
                <SalesOrderCreate on_close=Callback::new(move |_| show_create.set(false)) />
            </Show>

            {move || update_target.get().map(|id| view! {
                <StatusUpdateModal
                    collection=store.sales
                    record_id=id
                    on_close=Callback::new(move |_| update_target.set(None))
                    assignees=store.assignees(Some(Department::Sales))
                    amount_label="Offer amount"
                />
            })}
        </PageFrame>
    }
}
