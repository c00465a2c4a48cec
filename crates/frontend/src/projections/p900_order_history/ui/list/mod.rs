use super::export_modal::OrderHistoryExportModal;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{
    detail_tab_key, MAINTENANCE_REQUESTS, PURCHASE_ORDERS, SALES_ORDERS,
};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{catalog_options, priority_badge, Input, Select};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{FilterField, ListControls};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use crate::shared::state::use_back_office;
use contracts::domain::common::{Catalog, Priority, SortState};
use contracts::projections::p900_order_history::{summarize, OrderHistoryRow, OrderKind};
use contracts::shared::format::{format_currency, format_number, format_optional_currency, format_optional_date};
use leptos::prelude::*;
use thaw::*;

/// Tab of the page that owns a history row
fn source_list_key(kind: OrderKind) -> &'static str {
    match kind {
        OrderKind::Sale => SALES_ORDERS,
        OrderKind::Purchase => PURCHASE_ORDERS,
        OrderKind::Maintenance => MAINTENANCE_REQUESTS,
    }
}

/// Read-only register of sales, purchases and maintenance jobs
#[component]
pub fn OrderHistoryList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_back_office();
    let controls = ListControls::new(SortState::unsorted());
    let show_export = RwSignal::new(false);

    let rows = Memo::new(move |_| {
        let history = store.order_history();
        controls
            .filter
            .with(|f| controls.sort.with(|s| s.sorted(&f.apply(&history))))
    });
    let summary = Memo::new(move |_| rows.with(|r| summarize(r)));

    let open_source = move |kind: OrderKind, id: String| {
        tabs_store.open_tab(&detail_tab_key(source_list_key(kind), &id), &id);
    };

    view! {
        <PageFrame page_id="p900_order_history--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Order History".to_string() count=Signal::derive(move || Some(summary.with(|s| s.count)))>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || rows.with(|r| r.is_empty()))
                    on_click=move |_| show_export.set(true)
                >
                    "Export"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="report-summary">
                    <div class="report-summary__item">
                        {icon("history")}
                        <span class="report-summary__label">"Orders"</span>
                        <span class="report-summary__value">
                            {move || format_number(summary.with(|s| s.count) as u64)}
                        </span>
                    </div>
                    <div class="report-summary__item">
                        <span class="report-summary__label">"Completed"</span>
                        <span class="report-summary__value">
                            {move || format_number(summary.with(|s| s.completed) as u64)}
                        </span>
                    </div>
                    <div class="report-summary__item">
                        <span class="report-summary__label">"Total amount"</span>
                        <span class="report-summary__value">
                            {move || format_currency(summary.with(|s| s.total_amount))}
                        </span>
                    </div>
                </div>

                <FilterPanel controls=controls search_placeholder="ID, client, property, status...">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Select
                            label="Order type"
                            value=controls.value(FilterField::Category)
                            on_change=controls.setter(FilterField::Category)
                            options={catalog_options::<OrderKind>()}
                            placeholder="All"
                        />
                        <Input
                            label="Status"
                            value=controls.value(FilterField::Status)
                            on_input=controls.setter(FilterField::Status)
                            placeholder="e.g. completed"
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
                            placeholder="1000-5000 or 100000+"
                        />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" field="id" sort=controls.sort min_width=90.0 />
                                <SortableHeaderCell label="Type" field="kind" sort=controls.sort />
                                <SortableHeaderCell label="Client" field="client" sort=controls.sort min_width=160.0 />
                                <SortableHeaderCell label="Property" field="property" sort=controls.sort min_width=180.0 />
                                <SortableHeaderCell label="Status" field="status" sort=controls.sort min_width=140.0 />
                                <TableHeaderCell resizable=false min_width=100.0>"Priority"</TableHeaderCell>
                                <SortableHeaderCell label="Amount" field="amount" sort=controls.sort min_width=120.0 />
                                <SortableHeaderCell label="Created" field="created_at" sort=controls.sort min_width=140.0 />
                                <SortableHeaderCell label="Completed" field="completed_date" sort=controls.sort />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|row: &OrderHistoryRow| (row.id.clone(), row.status.clone())
                                children=move |row: OrderHistoryRow| {
                                    let kind = row.kind;
                                    let id_for_link = row.id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_source(kind, id_for_link.clone());
                                                        }
                                                    >
                                                        {row.id.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.kind.label()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.client.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.property.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.status_label.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.priority.map(priority_badge)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{format_optional_currency(row.amount)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_timestamp(row.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_optional_date(row.completed_date)}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || rows.with(|r| r.is_empty())>
                        <div class="table__empty">"No orders match the current filters"</div>
                    </Show>
                </div>
            </div>

            <Show when=move || show_export.get()>
                <OrderHistoryExportModal
                    rows=Signal::derive(move || rows.get())
                    on_close=Callback::new(move |_| show_export.set(false))
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_open_their_source_page() {
        assert_eq!(source_list_key(OrderKind::Sale), SALES_ORDERS);
        assert_eq!(source_list_key(OrderKind::Purchase), PURCHASE_ORDERS);
        assert_eq!(source_list_key(OrderKind::Maintenance), MAINTENANCE_REQUESTS);
    }
}
