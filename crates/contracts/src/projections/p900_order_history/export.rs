use super::dto::OrderHistoryRow;
use crate::domain::common::{Catalog, CatalogOption};
use crate::shared::export::{
    csv_table, export_filename, json_dump, mime_type, ExportError, ExportFile, ExportFormat,
};
use crate::shared::format::format_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

crate::catalog_enum! {
    /// Columns that can be included in an order history export
    pub enum ExportField {
        Id => ("id", "Order ID"),
        Kind => ("kind", "Type"),
        Client => ("client", "Client"),
        Property => ("property", "Property"),
        Status => ("status", "Status"),
        Priority => ("priority", "Priority"),
        Amount => ("amount", "Amount"),
        CreatedAt => ("createdAt", "Created"),
        CompletedDate => ("completedDate", "Completed"),
    }
}

const SOURCE: &str = "order_history";

/// Export dialog settings
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub fields: Vec<ExportField>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            date_from: None,
            date_to: None,
            fields: ExportField::all().to_vec(),
        }
    }
}

impl ExportConfig {
    pub fn toggle_field(&mut self, field: ExportField) {
        if let Some(pos) = self.fields.iter().position(|f| *f == field) {
            self.fields.remove(pos);
        } else {
            self.fields.push(field);
            // keep catalog order in the output
            self.fields.sort_by_key(|f| f.position());
        }
    }

    fn in_range(&self, row: &OrderHistoryRow) -> bool {
        let created = row.created_at.date_naive();
        self.date_from.map_or(true, |from| created >= from)
            && self.date_to.map_or(true, |to| created <= to)
    }
}

pub fn field_options() -> Vec<CatalogOption> {
    ExportField::options()
}

fn json_value(row: &OrderHistoryRow, field: ExportField) -> Value {
    match field {
        ExportField::Id => Value::String(row.id.clone()),
        ExportField::Kind => Value::String(row.kind.code().to_string()),
        ExportField::Client => Value::String(row.client.clone()),
        ExportField::Property => Value::String(row.property.clone()),
        ExportField::Status => Value::String(row.status.clone()),
        ExportField::Priority => row
            .priority
            .map(|p| Value::String(p.code().to_string()))
            .unwrap_or(Value::Null),
        ExportField::Amount => row.amount.map(Value::from).unwrap_or(Value::Null),
        ExportField::CreatedAt => Value::String(row.created_at.to_rfc3339()),
        ExportField::CompletedDate => row
            .completed_date
            .map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
            .unwrap_or(Value::Null),
    }
}

fn csv_value(row: &OrderHistoryRow, field: ExportField) -> String {
    match field {
        ExportField::Id => row.id.clone(),
        ExportField::Kind => row.kind.label().to_string(),
        ExportField::Client => row.client.clone(),
        ExportField::Property => row.property.clone(),
        ExportField::Status => row.status_label.clone(),
        ExportField::Priority => row.priority.map(|p| p.label().to_string()).unwrap_or_default(),
        ExportField::Amount => row.amount.map(|a| format!("{:.2}", a)).unwrap_or_default(),
        ExportField::CreatedAt => row.created_at.format("%d.%m.%Y %H:%M").to_string(),
        ExportField::CompletedDate => row.completed_date.map(format_date).unwrap_or_default(),
    }
}

/// Serialize the currently displayed rows.
///
/// The config's date range narrows the rows further; only the selected
/// fields are written, in catalog order.
pub fn export_rows(
    rows: &[OrderHistoryRow],
    config: &ExportConfig,
    now: DateTime<Utc>,
) -> Result<ExportFile, ExportError> {
    if config.fields.is_empty() {
        return Err(ExportError::NoFields);
    }
    let selected: Vec<&OrderHistoryRow> = rows.iter().filter(|r| config.in_range(r)).collect();
    if selected.is_empty() {
        return Err(ExportError::Empty);
    }

    let format = config.format.effective();
    if format != config.format {
        log::debug!(
            "{} export is not implemented separately, writing {}",
            config.format.label(),
            format.label()
        );
    }

    let content = match format {
        ExportFormat::Csv => {
            let headers: Vec<&str> = config.fields.iter().map(|f| f.label()).collect();
            let table: Vec<Vec<String>> = selected
                .iter()
                .map(|row| config.fields.iter().map(|f| csv_value(row, *f)).collect())
                .collect();
            csv_table(&headers, &table)?
        }
        _ => {
            let records = selected
                .iter()
                .map(|row| {
                    config
                        .fields
                        .iter()
                        .map(|f| (f.code().to_string(), json_value(row, *f)))
                        .collect::<Map<String, Value>>()
                })
                .collect();
            json_dump(SOURCE, records, now)?
        }
    };

    log::info!("Exported {} order history rows as {}", selected.len(), format.code());

    Ok(ExportFile {
        filename: export_filename(SOURCE, config.format, now),
        mime_type: mime_type(config.format),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Priority;
    use crate::projections::p900_order_history::dto::OrderKind;
    use chrono::TimeZone;

    fn row(id: &str, day: u32, amount: Option<f64>) -> OrderHistoryRow {
        OrderHistoryRow {
            id: id.into(),
            kind: OrderKind::Purchase,
            client: "Jane Cooper".into(),
            property: "Maple; Street".into(),
            status: "requested".into(),
            status_label: "Requested".into(),
            priority: Some(Priority::Low),
            amount,
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 9, 30, 0).unwrap(),
            completed_date: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_json_export_selected_fields() {
        let config = ExportConfig {
            fields: vec![ExportField::Id, ExportField::Amount],
            ..Default::default()
        };
        let file = export_rows(&[row("PO-0001", 1, Some(5.0)), row("PO-0002", 2, None)], &config, now())
            .unwrap();
        assert_eq!(file.filename, "order_history_20240320_1200.json");
        assert_eq!(file.mime_type, "application/json");

        let value: Value = serde_json::from_str(&file.content).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["records"][0]["id"], "PO-0001");
        assert_eq!(value["records"][0]["amount"], 5.0);
        assert_eq!(value["records"][1]["amount"], Value::Null);
        assert!(value["records"][0].get("client").is_none());
    }

    #[test]
    fn test_excel_falls_back_to_json() {
        let config = ExportConfig {
            format: ExportFormat::Excel,
            ..Default::default()
        };
        let file = export_rows(&[row("PO-0001", 1, None)], &config, now()).unwrap();
        assert!(file.filename.ends_with(".json"));
        assert!(serde_json::from_str::<Value>(&file.content).is_ok());
    }

    #[test]
    fn test_csv_export() {
        let config = ExportConfig {
            format: ExportFormat::Csv,
            fields: vec![ExportField::Id, ExportField::Property, ExportField::Amount],
            ..Default::default()
        };
        let file = export_rows(&[row("PO-0001", 1, Some(1250.5))], &config, now()).unwrap();
        assert!(file.filename.ends_with(".csv"));
        assert_eq!(
            file.content.trim_start_matches('\u{FEFF}'),
            "Order ID;Property;Amount\nPO-0001;\"Maple; Street\";1250.50\n"
        );
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let rows = [row("PO-0001", 1, None), row("PO-0002", 5, None), row("PO-0003", 9, None)];
        let config = ExportConfig {
            date_from: NaiveDate::from_ymd_opt(2024, 3, 5),
            date_to: NaiveDate::from_ymd_opt(2024, 3, 9),
            ..Default::default()
        };
        let file = export_rows(&rows, &config, now()).unwrap();
        let value: Value = serde_json::from_str(&file.content).unwrap();
        assert_eq!(value["count"], 2);
    }

    #[test]
    fn test_nothing_to_export() {
        let config = ExportConfig::default();
        assert!(matches!(export_rows(&[], &config, now()), Err(ExportError::Empty)));

        let mut config = ExportConfig::default();
        config.fields.clear();
        assert!(matches!(
            export_rows(&[row("PO-0001", 1, None)], &config, now()),
            Err(ExportError::NoFields)
        ));
    }

    #[test]
    fn test_toggle_field_keeps_catalog_order() {
        let mut config = ExportConfig {
            fields: vec![ExportField::Amount],
            ..Default::default()
        };
        config.toggle_field(ExportField::Id);
        assert_eq!(config.fields, vec![ExportField::Id, ExportField::Amount]);
        config.toggle_field(ExportField::Amount);
        assert_eq!(config.fields, vec![ExportField::Id]);
    }
}
