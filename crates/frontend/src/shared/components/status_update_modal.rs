use crate::shared::components::attachment_input::AttachmentInput;
use crate::shared::components::ui::{field_error, status_badge, Input, Select, Textarea};
use crate::shared::modal_frame::ModalFrame;
use chrono::Utc;
use contracts::domain::common::{
    Catalog, RecordCollection, StatusUpdateForm, ValidationErrors, WorkflowRecord,
};
use leptos::prelude::*;
use thaw::*;

/// Status-update dialog shared by every workflow record kind.
///
/// Offers only the statuses the transition policy allows from the current
/// one. On success the record's status changes, one activity entry is
/// appended and the dialog closes.
#[component]
pub fn StatusUpdateModal<R>(
    collection: RwSignal<RecordCollection<R>>,
    #[prop(into)]
    record_id: String,
    on_close: Callback<()>,
    /// Staff offered in the "Assign to" picker; no picker when empty
    #[prop(optional)]
    assignees: Vec<String>,
    /// Label of the amount input; no input when unset
    #[prop(optional)]
    amount_label: Option<&'static str>,
) -> impl IntoView
where
    R: WorkflowRecord + Send + Sync + 'static,
    R::Status: Send,
{
    let record_id = StoredValue::new(record_id);
    let form = RwSignal::new(StatusUpdateForm::default());
    let errors = RwSignal::new(ValidationErrors::new());
    let (submit_error, set_submit_error) = signal(Option::<String>::None);

    let current_status = collection.with_untracked(|c| {
        record_id.with_value(|id| c.get(id).map(|r| r.status()))
    });
    let status_options: Vec<(String, String)> = collection.with_untracked(|c| {
        record_id.with_value(|id| {
            c.selectable_statuses(id)
                .into_iter()
                .map(|s| (s.code().to_string(), s.label().to_string()))
                .collect()
        })
    });
    let is_final = status_options.is_empty();
    let assignee_options: Vec<(String, String)> =
        assignees.into_iter().map(|name| (name.clone(), name)).collect();
    let has_assignees = !assignee_options.is_empty();

    let submit = move |_| {
        set_submit_error.set(None);
        let update = match form.with_untracked(|f| f.validate::<R::Status>()) {
            Ok(update) => update,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::new());

        let id = record_id.get_value();
        let result = collection.try_update(|c| {
            c.update_status(&id, update, Utc::now())
                .map(|_| ())
                .map_err(|e| e.to_string())
        });
        match result {
            Some(Ok(())) => on_close.run(()),
            Some(Err(message)) => set_submit_error.set(Some(message)),
            None => log::error!("Record collection is no longer available"),
        }
    };

    let title = format!("Update {} {}", R::element_name(), record_id.get_value());

    view! {
        <ModalFrame title=title on_close=on_close modal_class="modal--form">
            <div class="status-update">
                <div class="status-update__current">
                    "Current status: "
                    {current_status.map(status_badge)}
                </div>

                {if is_final {
                    view! {
                        <div class="alert alert--info">
                            "This status is final and cannot be changed."
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="form__grid">
                            <Select
                                label="New status"
                                required=true
                                value=Signal::derive(move || form.with(|f| f.status.clone()))
                                on_change=Callback::new(move |v| form.update(|f| f.status = v))
                                options=status_options.clone()
                                error=field_error(errors, "status")
                            />
                            {has_assignees.then(|| view! {
                                <Select
                                    label="Assign to"
                                    value=Signal::derive(move || form.with(|f| f.assigned_to.clone()))
                                    on_change=Callback::new(move |v| form.update(|f| f.assigned_to = v))
                                    options=assignee_options.clone()
                                    placeholder="Unassigned"
                                />
                            })}
                            {amount_label.map(|label| view! {
                                <Input
                                    label=label
                                    input_type="number"
                                    value=Signal::derive(move || form.with(|f| f.amount.clone()))
                                    on_input=Callback::new(move |v| form.update(|f| f.amount = v))
                                    error=field_error(errors, "amount")
                                />
                            })}
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
                    }
                    .into_any()
                }}

                {move || submit_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="modal__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=is_final
                        on_click=submit
                    >
                        "Update status"
                    </Button>
                </div>
            </div>
        </ModalFrame>
    }
}
