use crate::shared::components::attachment_input::AttachmentInput;
use crate::shared::components::ui::{catalog_options, field_error, Input, Select, Textarea};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::state::use_back_office;
use chrono::Utc;
use contracts::domain::a004_client::{ClientForm, ClientType};
use contracts::domain::a006_employee::Department;
use contracts::domain::common::{Location, ValidationErrors};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ClientCreate(on_close: Callback<()>) -> impl IntoView {
    let store = use_back_office();
    let form = RwSignal::new(ClientForm::default());
    let errors = RwSignal::new(ValidationErrors::new());

    let agent_options: Vec<(String, String)> = store
        .assignees(Some(Department::Sales))
        .into_iter()
        .map(|name| (name.clone(), name))
        .collect();

    let submit = move |_| match form.with_untracked(ClientForm::validate) {
        Ok(draft) => {
            store.clients.update(|c| {
                c.create(draft, Utc::now());
            });
            on_close.run(());
        }
        Err(e) => errors.set(e),
    };

    view! {
        <ModalFrame title="New client".to_string() on_close=on_close modal_class="modal--form">
            <div class="form__grid">
                <Input
                    label="Full name"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    error=field_error(errors, "name")
                />
                <Input
                    label="Email"
                    required=true
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.email = v))
                    error=field_error(errors, "email")
                />
                <Input
                    label="Phone"
                    input_type="tel"
                    value=Signal::derive(move || form.with(|f| f.phone.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                />
                <Select
                    label="Client type"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.client_type.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.client_type = v))
                    options={catalog_options::<ClientType>()}
                    error=field_error(errors, "client_type")
                />
                <Select
                    label="Preferred location"
                    value=Signal::derive(move || form.with(|f| f.preferred_location.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.preferred_location = v))
                    options={catalog_options::<Location>()}
                    placeholder="Any"
                    error=field_error(errors, "preferred_location")
                />
                <Input
                    label="Budget"
                    input_type="number"
                    value=Signal::derive(move || form.with(|f| f.budget.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.budget = v))
                    error=field_error(errors, "budget")
                />
                <Select
                    label="Assigned agent"
                    value=Signal::derive(move || form.with(|f| f.assigned_agent.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.assigned_agent = v))
                    options=agent_options
                    placeholder="Unassigned"
                />
                <Textarea
                    label="Notes"
                    value=Signal::derive(move || form.with(|f| f.notes.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.notes = v))
                />
                <AttachmentInput
                    label="Identity and verification documents"
                    attachments=Signal::derive(move || form.with(|f| f.documents.clone()))
                    on_change=Callback::new(move |files| form.update(|f| f.documents = files))
                />
            </div>

            <div class="modal__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Register client"
                </Button>
            </div>
        </ModalFrame>
    }
}
