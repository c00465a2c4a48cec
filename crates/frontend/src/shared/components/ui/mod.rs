pub mod badge;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{priority_badge, status_badge};
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::{catalog_options, Select};
pub use textarea::Textarea;

use contracts::domain::common::ValidationErrors;
use leptos::prelude::*;

/// Message of `field` in the current validation result, for the field's error slot
pub fn field_error(errors: RwSignal<ValidationErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}

/// Label text with a required marker
pub(crate) fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}
