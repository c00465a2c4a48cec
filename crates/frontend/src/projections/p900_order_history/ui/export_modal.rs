use crate::shared::components::ui::{catalog_options, Checkbox, Input, Select};
use crate::shared::export::download_export_file;
use crate::shared::modal_frame::ModalFrame;
use chrono::{NaiveDate, Utc};
use contracts::domain::common::Catalog;
use contracts::projections::p900_order_history::{
    export_rows, field_options, ExportConfig, ExportField, OrderHistoryRow,
};
use contracts::shared::export::ExportFormat;
use leptos::prelude::*;
use thaw::*;

/// Optional `YYYY-MM-DD` input; `label` names the field in the error
fn parse_optional_date(value: &str, label: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("{} must be a date (YYYY-MM-DD)", label))
}

/// Export of the rows currently shown in the order history
#[component]
pub fn OrderHistoryExportModal(
    #[prop(into)]
    rows: Signal<Vec<OrderHistoryRow>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let config = RwSignal::new(ExportConfig::default());
    let format_code = RwSignal::new(ExportFormat::Json.code().to_string());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fallback_note = move || {
        format_code.with(|code| {
            ExportFormat::from_code(code)
                .filter(|f| f.effective() != *f)
                .map(|f| format!("{} files are written as JSON.", f.label()))
        })
    };

    let submit = move |_| {
        set_error.set(None);
        let from = match parse_optional_date(&date_from.get_untracked(), "Date from") {
            Ok(d) => d,
            Err(e) => return set_error.set(Some(e)),
        };
        let to = match parse_optional_date(&date_to.get_untracked(), "Date to") {
            Ok(d) => d,
            Err(e) => return set_error.set(Some(e)),
        };
        let selected_format = format_code.with_untracked(|c| ExportFormat::from_code(c)).unwrap_or(ExportFormat::Json);

        let mut export_config = config.get_untracked();
        export_config.format = selected_format;
        export_config.date_from = from;
        export_config.date_to = to;

        let result = rows.with_untracked(|r| export_rows(r, &export_config, Utc::now()));
        match result {
            Ok(file) => match download_export_file(&file) {
                Ok(()) => on_close.run(()),
                Err(e) => {
                    log::error!("Export download failed: {}", e);
                    set_error.set(Some(e));
                }
            },
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <ModalFrame title="Export order history".to_string() on_close=on_close modal_class="modal--form">
            <div class="form__grid">
                <Select
                    label="Format"
                    required=true
                    value=Signal::derive(move || format_code.get())
                    on_change=Callback::new(move |v| format_code.set(v))
                    options={catalog_options::<ExportFormat>()}
                />
                <Input
                    label="Date from"
                    input_type="date"
                    value=Signal::derive(move || date_from.get())
                    on_input=Callback::new(move |v| date_from.set(v))
                />
                <Input
                    label="Date to"
                    input_type="date"
                    value=Signal::derive(move || date_to.get())
                    on_input=Callback::new(move |v| date_to.set(v))
                />
            </div>

            {move || fallback_note().map(|note| view! { <div class="alert alert--info">{note}</div> })}

            <fieldset class="form__fieldset">
                <legend class="form__label">"Fields"</legend>
                {field_options()
                    .into_iter()
                    .filter_map(|option| ExportField::from_code(option.code))
                    .map(|field| view! {
                        <Checkbox
                            label=field.label()
                            checked=Signal::derive(move || config.with(|c| c.fields.contains(&field)))
                            on_change=Callback::new(move |_| config.update(|c| c.toggle_field(field)))
                        />
                    })
                    .collect_view()}
            </fieldset>

            <div class="export-modal__count">
                {move || format!("{} rows in view", rows.with(|r| r.len()))}
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="modal__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || config.with(|c| c.fields.is_empty()))
                    on_click=submit
                >
                    "Export"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date("", "Date from"), Ok(None));
        assert_eq!(
            parse_optional_date("2024-03-01", "Date from"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 1))
        );
        assert_eq!(
            parse_optional_date("01.03.2024", "Date to"),
            Err("Date to must be a date (YYYY-MM-DD)".to_string())
        );
    }
}
