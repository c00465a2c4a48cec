use crate::shared::components::attachment_input::AttachmentInput;
use crate::shared::components::ui::{catalog_options, field_error, Input, Select, Textarea};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::state::use_back_office;
use chrono::Utc;
use contracts::domain::a005_property::{ListingType, PropertyForm};
use contracts::domain::a006_employee::Department;
use contracts::domain::common::{Catalog, Location, PropertyType, ValidationErrors};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PropertyCreate(on_close: Callback<()>) -> impl IntoView {
    let store = use_back_office();
    let form = RwSignal::new(PropertyForm {
        listing_type: ListingType::Sale.code().to_string(),
        ..Default::default()
    });
    let errors = RwSignal::new(ValidationErrors::new());

    let agent_options: Vec<(String, String)> = store
        .assignees(Some(Department::Sales))
        .into_iter()
        .map(|name| (name.clone(), name))
        .collect();

    let price_label = move || {
        form.with(|f| match ListingType::from_code(&f.listing_type) {
            Some(ListingType::Rent) => "Monthly rent",
            _ => "Price",
        })
    };

    let submit = move |_| match form.with_untracked(PropertyForm::validate) {
        Ok(draft) => {
            store.properties.update(|c| {
                c.create(draft, Utc::now());
            });
            on_close.run(());
        }
        Err(e) => errors.set(e),
    };

    view! {
        <ModalFrame title="New listing".to_string() on_close=on_close modal_class="modal--form">
            <div class="form__grid">
                <Input
                    label="Title"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.title.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.title = v))
                    error=field_error(errors, "title")
                />
                <Input
                    label="Address"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.address.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.address = v))
                    error=field_error(errors, "address")
                />
                <Select
                    label="Property type"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.property_type.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.property_type = v))
                    options={catalog_options::<PropertyType>()}
                    error=field_error(errors, "property_type")
                />
                <Select
                    label="Location"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.location.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.location = v))
                    options={catalog_options::<Location>()}
                    error=field_error(errors, "location")
                />
                <Select
                    label="Listing type"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.listing_type.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.listing_type = v))
                    options={catalog_options::<ListingType>()}
                    error=field_error(errors, "listing_type")
                />
                {move || view! {
                    <Input
                        label=price_label()
                        required=true
                        input_type="number"
                        value=Signal::derive(move || form.with(|f| f.price.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.price = v))
                        error=field_error(errors, "price")
                    />
                }}
                <Input
                    label="Bedrooms"
                    input_type="number"
                    value=Signal::derive(move || form.with(|f| f.bedrooms.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.bedrooms = v))
                    error=field_error(errors, "bedrooms")
                />
                <Input
                    label="Bathrooms"
                    input_type="number"
                    value=Signal::derive(move || form.with(|f| f.bathrooms.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.bathrooms = v))
                    error=field_error(errors, "bathrooms")
                />
                <Input
                    label="Area (sq ft)"
                    input_type="number"
                    value=Signal::derive(move || form.with(|f| f.area_sqft.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.area_sqft = v))
                    error=field_error(errors, "area_sqft")
                />
                <Select
                    label="Listing agent"
                    value=Signal::derive(move || form.with(|f| f.agent.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.agent = v))
                    options=agent_options
                    placeholder="Unassigned"
                />
                <Textarea
                    label="Description"
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                />
                <AttachmentInput
                    label="Photos"
                    attachments=Signal::derive(move || form.with(|f| f.photos.clone()))
                    on_change=Callback::new(move |files| form.update(|f| f.photos = files))
                />
            </div>

            <div class="modal__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Create listing"
                </Button>
            </div>
        </ModalFrame>
    }
}
