use crate::shared::components::ui::{catalog_options, field_error, Input, Select};
use crate::shared::date_utils::today_input_value;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::state::use_back_office;
use contracts::domain::a006_employee::{Department, EmployeeForm, EmployeeRole};
use contracts::domain::common::ValidationErrors;
use leptos::prelude::*;
use thaw::*;

/// New employee dialog; employees start active
#[component]
pub fn EmployeeCreate(on_close: Callback<()>) -> impl IntoView {
    let store = use_back_office();
    let form = RwSignal::new(EmployeeForm {
        hire_date: today_input_value(),
        ..Default::default()
    });
    let errors = RwSignal::new(ValidationErrors::new());

    let submit = move |_| match form.with_untracked(EmployeeForm::validate) {
        Ok(draft) => {
            store.employees.update(|d| {
                d.create(draft);
            });
            on_close.run(());
        }
        Err(e) => errors.set(e),
    };

    view! {
        <ModalFrame title="New employee".to_string() on_close=on_close modal_class="modal--form">
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
                    label="Role"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.role.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.role = v))
                    options={catalog_options::<EmployeeRole>()}
                    error=field_error(errors, "role")
                />
                <Select
                    label="Department"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.department.clone()))
                    on_change=Callback::new(move |v| form.update(|f| f.department = v))
                    options={catalog_options::<Department>()}
                    error=field_error(errors, "department")
                />
                <Input
                    label="Hire date"
                    required=true
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.hire_date.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.hire_date = v))
                    error=field_error(errors, "hire_date")
                />
            </div>

            <div class="modal__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Add employee"
                </Button>
            </div>
        </ModalFrame>
    }
}
