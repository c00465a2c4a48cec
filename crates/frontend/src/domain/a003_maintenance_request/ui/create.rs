use crate::shared::components::attachment_input::AttachmentInput;
use crate::shared::components::ui::{catalog_options, field_error, Input, Select, Textarea};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::state::use_back_office;
use chrono::Utc;
use contracts::domain::a003_maintenance_request::{
    IssueArea, MaintenanceRequestForm, MaintenanceType,
};
use contracts::domain::common::{Catalog, Priority, ValidationErrors};
use leptos::prelude::*;
use thaw::*;

/// New maintenance request dialog.
///
/// The target date is the preferred date, or the creation date plus
/// `workflow.default_target_days` when none is given.
#[component]
pub fn MaintenanceRequestCreate(on_close: Callback<()>) -> impl IntoView {
    let store = use_back_office();
    let form = RwSignal::new(MaintenanceRequestForm {
        priority: Priority::Medium.code().to_string(),
        ..Default::default()
    });
    let errors = RwSignal::new(ValidationErrors::new());

    let submit = move |_| {
        let subjects = store.subjects();
        match form.with_untracked(|f| f.validate(&subjects)) {
            Ok(draft) => {
                store.maintenance.update(|c| {
                    c.create(draft, Utc::now());
                });
                on_close.run(());
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <ModalFrame title="New maintenance request".to_string() on_close=on_close modal_class="modal--form">
            <div class="form__grid">
                <Select
                    label="Property"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.property_id.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.property_id = v))
                    options=store.property_options()
                    error=field_error(errors, "property_id")
                />
                <Select
                    label="Reported by"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.client_id.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.client_id = v))
                    options=store.client_options()
                    error=field_error(errors, "client_id")
                />
                <Select
                    label="Maintenance type"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.maintenance_type.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.maintenance_type = v))
                    options={catalog_options::<MaintenanceType>()}
                    error=field_error(errors, "maintenance_type")
                />
                <Select
                    label="Priority"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.priority.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.priority = v))
                    options={catalog_options::<Priority>()}
                    error=field_error(errors, "priority")
                />
                <Select
                    label="Area"
                    value=Signal::derive(move || form.with(|f| f.area.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.area = v))
                    options={catalog_options::<IssueArea>()}
                    error=field_error(errors, "area")
                />
                <Textarea
                    label="Issue description"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.issue_description.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.issue_description = v))
                    error=field_error(errors, "issue_description")
                />
                <Input
                    label="Preferred date"
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.preferred_date.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.preferred_date = v))
                    error=field_error(errors, "preferred_date")
                />
                <Input
                    label="Estimated cost"
                    input_type="number"
                    value=Signal::derive(move || form.with(|f| f.estimated_cost.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.estimated_cost = v))
                    error=field_error(errors, "estimated_cost")
                />
                <AttachmentInput
                    label="Photos and documents"
                    attachments=Signal::derive(move || form.with(|f| f.attachments.clone()))
                    on_change=Callback::new(move |files| form.update(|f| f.attachments = files))
                />
            </div>

            <div class="modal__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Submit request"
                </Button>
            </div>
        </ModalFrame>
    }
}
