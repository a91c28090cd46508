use serde::Serialize;
use serde_json::{Map, Value};

use super::ReportError;

/// Render a collection as CSV with every field quoted. The header row comes
/// from the keys of the first record; an empty collection yields an empty
/// document.
pub fn export_csv<T: Serialize>(records: &[T]) -> Result<String, ReportError> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };

    let headers: Vec<String> = record_map(first)?.keys().cloned().collect();

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());
    writer.write_record(&headers)?;

    for record in records {
        let map = record_map(record)?;
        let row: Vec<String> = headers
            .iter()
            .map(|key| map.get(key).map(field_text).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ReportError::Buffer(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ReportError::Buffer(err.to_string()))
}

pub(super) fn record_map<T: Serialize>(record: &T) -> Result<Map<String, Value>, ReportError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        _ => Err(ReportError::Buffer(
            "export records must serialize to objects".to_string(),
        )),
    }
}

pub(super) fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
