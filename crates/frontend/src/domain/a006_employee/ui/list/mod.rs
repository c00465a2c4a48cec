use super::create::EmployeeCreate;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{catalog_options, Checkbox, Input, Select};
use crate::shared::list_utils::{FilterField, ListControls};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::use_back_office;
use crate::system::auth::context::use_auth;
use contracts::domain::a006_employee::{Department, Employee};
use contracts::domain::common::{Catalog, SortState};
use contracts::shared::format::format_date;
use leptos::prelude::*;
use thaw::*;

fn activity_options() -> Vec<(String, String)> {
    vec![
        ("active".to_string(), "Active".to_string()),
        ("deactivated".to_string(), "Deactivated".to_string()),
    ]
}

/// Staff directory (administrators only)
#[component]
pub fn EmployeeList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let is_admin = Signal::derive(move || auth_state.with(|s| s.is_admin()));

    view! {
        <Show
            when=move || is_admin.get()
            fallback=|| view! {
                <PageFrame page_id="a006_employee--list" category=PAGE_CAT_LIST>
                    <div class="alert alert--error">"Only administrators can manage employees."</div>
                </PageFrame>
            }
        >
            <EmployeeTable />
        </Show>
    }
}

#[component]
fn EmployeeTable() -> impl IntoView {
    let store = use_back_office();
    let controls = ListControls::new(SortState::new("name", true));
    let show_create = RwSignal::new(false);
    let (toggle_error, set_toggle_error) = signal(Option::<String>::None);

    let rows = Memo::new(move |_| {
        store.employees.with(|d| {
            controls
                .filter
                .with(|f| controls.sort.with(|s| d.view(f, s)))
        })
    });

    let set_active = move |id: String, active: bool| {
        let result = store
            .employees
            .try_update(|d| d.set_active(&id, active).map(|_| ()).map_err(|e| e.to_string()));
        match result {
            Some(Ok(())) => set_toggle_error.set(None),
            Some(Err(message)) => set_toggle_error.set(Some(message)),
            None => log::error!("Employee directory is no longer available"),
        }
    };

    view! {
        <PageFrame page_id="a006_employee--list" category=PAGE_CAT_LIST>
            <PageHeader title="Employees".to_string() count=Signal::derive(move || Some(rows.with(|r| r.len())))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    "New employee"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel controls=controls search_placeholder="Name, email, phone, role...">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Select
                            label="Status"
                            value=controls.value(FilterField::Status)
                            on_change=controls.setter(FilterField::Status)
                            options=activity_options()
                            placeholder="All"
                        />
                        <Select
                            label="Department"
                            value=controls.value(FilterField::Category)
                            on_change=controls.setter(FilterField::Category)
                            options={catalog_options::<Department>()}
                            placeholder="All"
                        />
                        <Input
                            label="Hired from"
                            input_type="date"
                            value=controls.value(FilterField::DateFrom)
                            on_input=controls.setter(FilterField::DateFrom)
                        />
                        <Input
                            label="Hired to"
                            input_type="date"
                            value=controls.value(FilterField::DateTo)
                            on_input=controls.setter(FilterField::DateTo)
                        />
                    </Flex>
                </FilterPanel>

                {move || toggle_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" field="id" sort=controls.sort min_width=90.0 />
                                <SortableHeaderCell label="Name" field="name" sort=controls.sort min_width=180.0 />
                                <TableHeaderCell resizable=false min_width=200.0>"Email"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Phone"</TableHeaderCell>
                                <SortableHeaderCell label="Role" field="role" sort=controls.sort min_width=160.0 />
                                <SortableHeaderCell label="Department" field="department" sort=controls.sort min_width=130.0 />
                                <SortableHeaderCell label="Hired" field="hire_date" sort=controls.sort />
                                <SortableHeaderCell label="Active" field="active" sort=controls.sort min_width=90.0 />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|e: &Employee| (e.id.clone(), e.active)
                                children=move |employee: Employee| {
                                    let id = employee.id.clone();
                                    let active = employee.active;
                                    let status_label = employee.status_label();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{employee.id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{employee.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{employee.email.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {employee.phone.clone().unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{employee.role.label()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{employee.department.label()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(employee.hire_date)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Checkbox
                                                    label=status_label
                                                    checked=Signal::derive(move || active)
                                                    on_change=Callback::new(move |active| set_active(id.clone(), active))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || rows.with(|r| r.is_empty())>
                        <div class="table__empty">"No employees match the current filters"</div>
                    </Show>
                </div>
            </div>

            <Show when=move || show_create.get()>
                <EmployeeCreate on_close=Callback::new(move |_| show_create.set(false)) />
            </Show>
        </PageFrame>
    }
}
