use super::create::MaintenanceRequestCreate;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_key, MAINTENANCE_REQUESTS};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_update_modal::StatusUpdateModal;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{catalog_options, priority_badge, status_badge, Input, Select};
use crate::shared::list_utils::{FilterField, ListControls};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::use_back_office;
use chrono::Utc;
use contracts::domain::a003_maintenance_request::{
    MaintenanceRequest, MaintenanceStatus, MaintenanceType,
};
use contracts::domain::a006_employee::Department;
use contracts::domain::common::{Catalog, Priority, SortState};
use contracts::shared::format::{format_date, format_optional_currency};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MaintenanceRequestList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_back_office();
    let controls = ListControls::new(SortState::new("created_at", false));

    let show_create = RwSignal::new(false);
    let update_target = RwSignal::new(Option::<String>::None);

    let rows = Memo::new(move |_| {
        store.maintenance.with(|c| {
            controls
                .filter
                .with(|f| controls.sort.with(|s| c.view(f, s)))
        })
    });
    let overdue_count = Signal::derive(move || {
        let today = Utc::now().date_naive();
        rows.with(|r| r.iter().filter(|m| m.is_overdue(today)).count())
    });

    let open_detail = move |id: String| {
        tabs_store.open_tab(&detail_tab_key(MAINTENANCE_REQUESTS, &id), &id);
    };

    view! {
        <PageFrame page_id="a003_maintenance_request--list" category=PAGE_CAT_LIST>
            <PageHeader title="Maintenance Requests".to_string() count=Signal::derive(move || Some(rows.with(|r| r.len())))>
                {move || {
                    let overdue = overdue_count.get();
                    (overdue > 0).then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                            {format!("{} overdue", overdue)}
                        </Badge>
                    })
                }}
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    "New request"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel controls=controls search_placeholder="ID, property, issue, technician...">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Select
                            label="Status"
                            value=controls.value(FilterField::Status)
                            on_change=controls.setter(FilterField::Status)
                            options={catalog_options::<MaintenanceStatus>()}
                            placeholder="All"
                        />
                        <Select
                            label="Type"
                            value=controls.value(FilterField::Category)
                            on_change=controls.setter(FilterField::Category)
                            options={catalog_options::<MaintenanceType>()}
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
                            label="Cost"
                            value=controls.value(FilterField::Amount)
                            on_input=controls.setter(FilterField::Amount)
                            placeholder="100-500 or 1000+"
                        />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" field="id" sort=controls.sort min_width=90.0 />
                                <SortableHeaderCell label="Property" field="property" sort=controls.sort min_width=180.0 />
                                <SortableHeaderCell label="Type" field="type" sort=controls.sort />
                                <TableHeaderCell resizable=false min_width=220.0>"Issue"</TableHeaderCell>
                                <SortableHeaderCell label="Priority" field="priority" sort=controls.sort />
                                <SortableHeaderCell label="Status" field="status" sort=controls.sort min_width=140.0 />
                                <TableHeaderCell resizable=false min_width=140.0>"Assigned to"</TableHeaderCell>
                                <SortableHeaderCell label="Target date" field="target_date" sort=controls.sort min_width=110.0 />
                                <SortableHeaderCell label="Cost" field="cost" sort=controls.sort />
                                <TableHeaderCell resizable=false min_width=140.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|request: &MaintenanceRequest| (request.id.clone(), request.timeline.len())
                                children=move |request: MaintenanceRequest| {
                                    let id_for_link = request.id.clone();
                                    let id_for_view = request.id.clone();
                                    let id_for_update = request.id.clone();
                                    let overdue = request.is_overdue(Utc::now().date_naive());
                                    let cost = request.cost();
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
                                                        {request.id.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{request.property.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{request.maintenance_type.label()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{request.issue_description.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{priority_badge(request.priority)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{status_badge(request.status)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {request.assigned_to.clone().unwrap_or_else(|| "Unassigned".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class:table__overdue=overdue>{format_date(request.target_date)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{format_optional_currency(cost)}</span>
                                                </TableCellLayout>
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
                        <div class="table__empty">"No maintenance requests match the current filters"</div>
                    </Show>
                </div>
            </div>

            <Show when=move || show_create.get()>
                <MaintenanceRequestCreate on_close=Callback::new(move |_| show_create.set(false)) />
            </Show>

            {move || update_target.get().map(|id| view! {
                <StatusUpdateModal
                    collection=store.maintenance
                    record_id=id
                    on_close=Callback::new(move |_| update_target.set(None))
                    assignees=store.assignees(Some(Department::Maintenance))
                    amount_label="Actual cost"
                />
            })}
        </PageFrame>
    }
}
