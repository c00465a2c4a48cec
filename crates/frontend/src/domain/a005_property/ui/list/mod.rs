use super::create::PropertyCreate;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{detail_tab_key, PROPERTIES};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_update_modal::StatusUpdateModal;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{catalog_options, status_badge, Input, Select};
use crate::shared::list_utils::{FilterField, ListControls};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::state::use_back_office;
use contracts::domain::a005_property::{ListingStatus, Property};
use contracts::domain::a006_employee::Department;
use contracts::domain::common::{Catalog, PropertyType, SortState};
use contracts::shared::format::format_currency;
use leptos::prelude::*;
use thaw::*;

/// Beds/baths column text, e.g. "3 / 2"
fn rooms_text(property: &Property) -> String {
    match (property.bedrooms, property.bathrooms) {
        (None, None) => "-".to_string(),
        (beds, baths) => format!(
            "{} / {}",
            beds.map_or("-".to_string(), |b| b.to_string()),
            baths.map_or("-".to_string(), |b| b.to_string())
        ),
    }
}

#[component]
pub fn PropertyList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let store = use_back_office();
    let controls = ListControls::new(SortState::new("created_at", false));

    let show_create = RwSignal::new(false);
    let update_target = RwSignal::new(Option::<String>::None);

    let rows = Memo::new(move |_| {
        store.properties.with(|c| {
            controls
                .filter
                .with(|f| controls.sort.with(|s| c.view(f, s)))
        })
    });

    let open_detail = move |id: String| {
        tabs_store.open_tab(&detail_tab_key(PROPERTIES, &id), &id);
    };

    view! {
        <PageFrame page_id="a005_property--list" category=PAGE_CAT_LIST>
            <PageHeader title="Properties".to_string() count=Signal::derive(move || Some(rows.with(|r| r.len())))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    "New listing"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel controls=controls search_placeholder="Title, address, agent...">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Select
                            label="Status"
                            value=controls.value(FilterField::Status)
                            on_change=controls.setter(FilterField::Status)
                            options={catalog_options::<ListingStatus>()}
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
                            label="Listed from"
                            input_type="date"
                            value=controls.value(FilterField::DateFrom)
                            on_input=controls.setter(FilterField::DateFrom)
                        />
                        <Input
                            label="Listed to"
                            input_type="date"
                            value=controls.value(FilterField::DateTo)
                            on_input=controls.setter(FilterField::DateTo)
                        />
                        <Input
                            label="Price"
                            value=controls.value(FilterField::Amount)
                            on_input=controls.setter(FilterField::Amount)
                            placeholder="1500-3000 or 500000+"
                        />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" field="id" sort=controls.sort min_width=90.0 />
                                <SortableHeaderCell label="Title" field="title" sort=controls.sort min_width=200.0 />
                                <TableHeaderCell resizable=false min_width=200.0>"Address"</TableHeaderCell>
                                <SortableHeaderCell label="Type" field="type" sort=controls.sort />
                                <SortableHeaderCell label="Location" field="location" sort=controls.sort min_width=120.0 />
                                <SortableHeaderCell label="Price" field="price" sort=controls.sort min_width=120.0 />
                                <SortableHeaderCell label="Beds / baths" field="bedrooms" sort=controls.sort />
                                <SortableHeaderCell label="Status" field="status" sort=controls.sort min_width=130.0 />
                                <TableHeaderCell resizable=false min_width=140.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|property: &Property| (property.id.clone(), property.timeline.len())
                                children=move |property: Property| {
                                    let id_for_link = property.id.clone();
                                    let id_for_view = property.id.clone();
                                    let id_for_update = property.id.clone();
                                    let rooms = rooms_text(&property);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{property.id.clone()}</TableCellLayout>
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
                                                        {property.title.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{property.address.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{property.property_type.label()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{property.location.label()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__number">{format_currency(property.price)}</span>
                                                    <span class="table__hint">{property.listing_type.label()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{rooms}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{status_badge(property.status)}</TableCellLayout>
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
                        <div class="table__empty">"No properties match the current filters"</div>
                    </Show>
                </div>
            </div>

            <Show when=move || show_create.get()>
                <PropertyCreate on_close=Callback::new(move |_| show_create.set(false)) />
            </Show>

            {move || update_target.get().map(|id| view! {
                <StatusUpdateModal
                    collection=store.properties
                    record_id=id
                    on_close=Callback::new(move |_| update_target.set(None))
                    assignees=store.assignees(Some(Department::Sales))
                    amount_label="New price"
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_property::PropertyForm;
    use contracts::domain::common::{RecordCollection, WorkflowRecord};
    use contracts::shared::config::WorkflowSettings;

    fn property(bedrooms: &str, bathrooms: &str) -> Property {
        let draft = PropertyForm {
            title: "Harbour loft".into(),
            address: "1 Pier Rd".into(),
            property_type: "apartment".into(),
            location: "waterfront".into(),
            listing_type: "sale".into(),
            price: "450000".into(),
            bedrooms: bedrooms.into(),
            bathrooms: bathrooms.into(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        let mut c = RecordCollection::<Property>::new(WorkflowSettings::default());
        let id = c.create(draft, chrono::Utc::now()).id().to_string();
        c.get(&id).unwrap().clone()
    }

    #[test]
    fn test_rooms_text() {
        assert_eq!(rooms_text(&property("3", "2")), "3 / 2");
        assert_eq!(rooms_text(&property("", "1")), "- / 1");
        assert_eq!(rooms_text(&property("", "")), "-");
    }
}
