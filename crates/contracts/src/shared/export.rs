//! Serialization of list data into downloadable files

use crate::domain::common::Catalog;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

crate::catalog_enum! {
    /// Formats offered by the export dialog
    pub enum ExportFormat {
        Json => ("json", "JSON"),
        Csv => ("csv", "CSV"),
        Excel => ("excel", "Excel"),
        Pdf => ("pdf", "PDF"),
    }
}

impl ExportFormat {
    /// Format actually written. Excel and PDF are accepted but produce the JSON dump.
    pub fn effective(&self) -> ExportFormat {
        match self {
            ExportFormat::Csv => ExportFormat::Csv,
            _ => ExportFormat::Json,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no data to export")]
    Empty,

    #[error("no fields selected")]
    NoFields,

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// File ready to be handed to the browser download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Structured dump: `{ exportedAt, source, count, records: [...] }`
pub fn json_dump(
    source: &str,
    records: Vec<Map<String, Value>>,
    exported_at: DateTime<Utc>,
) -> Result<String, ExportError> {
    let mut root = Map::new();
    root.insert("exportedAt".into(), Value::String(exported_at.to_rfc3339()));
    root.insert("source".into(), Value::String(source.to_string()));
    root.insert("count".into(), Value::from(records.len()));
    root.insert(
        "records".into(),
        Value::Array(records.into_iter().map(Value::Object).collect()),
    );
    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

/// `;`-separated table with a UTF-8 BOM so spreadsheet apps pick the right encoding
pub fn csv_table(headers: &[&str], rows: &[Vec<String>]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    let mut content = String::from('\u{FEFF}');
    content.push_str(&String::from_utf8(bytes)?);
    Ok(content)
}

/// `{base}_{YYYYMMDD_HHMM}.{ext}`
pub fn export_filename(base: &str, format: ExportFormat, at: DateTime<Utc>) -> String {
    let ext = match format.effective() {
        ExportFormat::Csv => "csv",
        _ => "json",
    };
    format!("{}_{}.{}", base, at.format("%Y%m%d_%H%M"), ext)
}

pub fn mime_type(format: ExportFormat) -> &'static str {
    match format.effective() {
        ExportFormat::Csv => "text/csv;charset=utf-8;",
        _ => "application/json",
    }
}

/// Formats as dropdown options
pub fn format_options() -> Vec<crate::domain::common::CatalogOption> {
    ExportFormat::options()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 0).unwrap()
    }

    #[test]
    fn test_effective_format() {
        assert_eq!(ExportFormat::Excel.effective(), ExportFormat::Json);
        assert_eq!(ExportFormat::Pdf.effective(), ExportFormat::Json);
        assert_eq!(ExportFormat::Csv.effective(), ExportFormat::Csv);
    }

    #[test]
    fn test_json_dump_shape() {
        let mut rec = Map::new();
        rec.insert("id".into(), Value::String("SO-0001".into()));
        let text = json_dump("order_history", vec![rec], at()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["source"], "order_history");
        assert_eq!(value["records"][0]["id"], "SO-0001");
    }

    #[test]
    fn test_csv_quotes_separators() {
        let text = csv_table(
            &["id", "note"],
            &[vec!["SO-0001".into(), "a;b".into()]],
        )
        .unwrap();
        assert!(text.starts_with('\u{FEFF}'));
        assert_eq!(text.trim_start_matches('\u{FEFF}'), "id;note\nSO-0001;\"a;b\"\n");
    }

    #[test]
    fn test_filename() {
        assert_eq!(
            export_filename("orders", ExportFormat::Pdf, at()),
            "orders_20240315_0905.json"
        );
        assert_eq!(
            export_filename("orders", ExportFormat::Csv, at()),
            "orders_20240315_0905.csv"
        );
    }
}
