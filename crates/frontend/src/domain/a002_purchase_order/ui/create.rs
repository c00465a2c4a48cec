use crate::shared::components::attachment_input::AttachmentInput;
use crate::shared::components::ui::{catalog_options, field_error, Input, Select, Textarea};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::state::use_back_office;
use chrono::Utc;
use contracts::domain::a002_purchase_order::PurchaseOrderForm;
use contracts::domain::a006_employee::Department;
use contracts::domain::common::{Catalog, Priority, PropertyType, ValidationErrors};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PurchaseOrderCreate(on_close: Callback<()>) -> impl IntoView {
    let store = use_back_office();
    let form = RwSignal::new(PurchaseOrderForm {
        priority: Priority::Medium.code().to_string(),
        ..Default::default()
    });
    let errors = RwSignal::new(ValidationErrors::new());

    let agent_options: Vec<(String, String)> = store
        .assignees(Some(Department::Sales))
        .into_iter()
        .map(|name| (name.clone(), name))
        .collect();

    let submit = move |_| {
        let subjects = store.subjects();
        match form.with_untracked(|f| f.validate(&subjects)) {
            Ok(draft) => {
                store.purchases.update(|c| {
                    c.create(draft, Utc::now());
                });
                on_close.run(());
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <ModalFrame title="New purchase order".to_string() on_close=on_close modal_class="modal--form">
            <div class="form__grid">
                <Select
                    label="Buyer"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.client_id.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.client_id = v))
                    options=store.client_options()
                    error=field_error(errors, "client_id")
                />
                <Select
                    label="Property"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.property_id.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.property_id = v))
                    options=store.property_options()
                    error=field_error(errors, "property_id")
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
                    label="Priority"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.priority.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.priority = v))
                    options={catalog_options::<Priority>()}
                    error=field_error(errors, "priority")
                />
                <Input
                    label="Budget"
                    required=true
                    input_type="number"
                    value=Signal::derive(move || form.with(|f| f.budget.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.budget = v))
                    error=field_error(errors, "budget")
                />
                <Select
                    label="Agent"
                    value=Signal::derive(move || form.with(|f| f.agent.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.agent = v))
                    options=agent_options
                    placeholder="Unassigned"
                />
                <Input
                    label="Target close date"
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.target_close_date.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.target_close_date = v))
                    error=field_error(errors, "target_close_date")
                />
                <Textarea
                    label="Notes"
                    value=Signal::derive(move || form.with(|f| f.notes.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.notes = v))
                />
                <AttachmentInput
                    label="Documents"
                    attachments=Signal::derive(move || form.with(|f| f.attachments.clone()))
                    on_change=Callback::new(move |files| form.update(|f| f.attachments = files))
                />
            </div>

            <div class="modal__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Create"
                </Button>
            </div>
        </ModalFrame>
    }
}
