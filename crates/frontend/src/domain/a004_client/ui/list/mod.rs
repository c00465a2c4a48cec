use super::create::ClientCreate;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_key, CLIENTS};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_update_modal::StatusUpdateModal;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{catalog_options, status_badge, Input, Select};
use crate::shared::date_utils::format_timestamp;
use crate::shared::list_utils::{FilterField, ListControls};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::use_back_office;
use contracts::domain::a004_client::{Client, ClientStatus, ClientType};
use contracts::domain::a006_employee::Department;
use contracts::domain::common::{Catalog, SortState};
use contracts::shared::format::format_optional_currency;
use leptos::prelude::*;
use thaw::*;

/// Client onboarding list
#[component]
pub fn ClientList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_back_office();
    let controls = ListControls::new(SortState::new("name", true));

    let show_create = RwSignal::new(false);
    let update_target = RwSignal::new(Option::<String>::None);

    let rows = Memo::new(move |_| {
        store.clients.with(|c| {
            controls
                .filter
                .with(|f| controls.sort.with(|s| c.view(f, s)))
        })
    });

    let open_detail = move |id: String| {
        tabs_store.open_tab(&detail_tab_key(CLIENTS, &id), &id);
    };

    view! {
        <PageFrame page_id="a004_client--list" category=PAGE_CAT_LIST>
            <PageHeader title="Client Onboarding".to_string() count=Signal::derive(move || Some(rows.with(|r| r.len())))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    "New client"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel controls=controls search_placeholder="Name, email, phone, agent...">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Select
                            label="Status"
                            value=controls.value(FilterField::Status)
                            on_change=controls.setter(FilterField::Status)
                            options={catalog_options::<ClientStatus>()}
                            placeholder="All"
                        />
                        <Select
                            label="Client type"
                            value=controls.value(FilterField::Category)
                            on_change=controls.setter(FilterField::Category)
                            options={catalog_options::<ClientType>()}
                            placeholder="All"
                        />
                        <Input
                            label="Registered from"
                            input_type="date"
                            value=controls.value(FilterField::DateFrom)
                            on_input=controls.setter(FilterField::DateFrom)
                        />
                        <Input
                            label="Registered to"
                            input_type="date"
                            value=controls.value(FilterField::DateTo)
                            on_input=controls.setter(FilterField::DateTo)
                        />
                        <Input
                            label="Budget"
                            value=controls.value(FilterField::Amount)
                            on_input=controls.setter(FilterField::Amount)
                            placeholder="200000-500000 or 1000000+"
                        />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" field="id" sort=controls.sort min_width=90.0 />
                                <SortableHeaderCell label="Name" field="name" sort=controls.sort min_width=180.0 />
                                <SortableHeaderCell label="Email" field="email" sort=controls.sort min_width=200.0 />
                                <SortableHeaderCell label="Type" field="type" sort=controls.sort />
                                <SortableHeaderCell label="Status" field="status" sort=controls.sort min_width=150.0 />
                                <SortableHeaderCell label="Budget" field="budget" sort=controls.sort min_width=120.0 />
                                <TableHeaderCell resizable=false min_width=140.0>"Agent"</TableHeaderCell>
                                <SortableHeaderCell label="Registered" field="created_at" sort=controls.sort min_width=140.0 />
                                <TableHeaderCell resizable=false min_width=140.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|client: &Client| (client.id.clone(), client.timeline.len())
                                children=move |client: Client| {
                                    let id_for_link = client.id.clone();
                                    let id_for_view = client.id.clone();
                                    let id_for_update = client.id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{client.id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(id_for_link.clone());
                                                        }
                                                    >
                                                        {client.name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{client.email.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{client.client_type.label()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{status_badge(client.status)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{format_optional_currency(client.budget)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {client.assigned_agent.clone().unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_timestamp(client.created_at)}</TableCellLayout>
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
                        <div class="table__empty">"No clients match the current filters"</div>
                    </Show>
                </div>
            </div>

            <Show when=move || show_create.get()>
                <ClientCreate on_close=Callback::new(move |_| show_create.set(false)) />
            </Show>

            {move || update_target.get().map(|id| view! {
                <StatusUpdateModal
                    collection=store.clients
                    record_id=id
                    on_close=Callback::new(move |_| update_target.set(None))
                    assignees=store.assignees(Some(Department::Sales))
                />
            })}
        </PageFrame>
    }
}
