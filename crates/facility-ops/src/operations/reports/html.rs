use chrono::NaiveDate;
use serde::Serialize;

use super::csv_export::{field_text, record_map};
use super::ReportError;

/// Render a collection as a self-contained printable HTML document, the
/// browser-print stand-in for PDF export. Same column convention as the CSV
/// export: headers from the keys of the first record.
pub fn printable_report<T: Serialize>(
    title: &str,
    records: &[T],
    generated_on: NaiveDate,
) -> Result<String, ReportError> {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(title)));
    html.push_str(
        "<style>body{font-family:sans-serif;margin:2rem}table{border-collapse:collapse;width:100%}th,td{border:1px solid #999;padding:4px 8px;text-align:left}th{background:#eee}</style>\n",
    );
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    html.push_str(&format!(
        "<p>Generated on {} &middot; {} records</p>\n",
        generated_on,
        records.len()
    ));

    if let Some(first) = records.first() {
        let headers: Vec<String> = record_map(first)?.keys().cloned().collect();

        html.push_str("<table>\n<tr>");
        for header in &headers {
            html.push_str(&format!("<th>{}</th>", escape(header)));
        }
        html.push_str("</tr>\n");

        for record in records {
            let map = record_map(record)?;
            html.push_str("<tr>");
            for header in &headers {
                let text = map.get(header).map(field_text).unwrap_or_default();
                html.push_str(&format!("<td>{}</td>", escape(&text)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>\n");
    } else {
        html.push_str("<p>No records.</p>\n");
    }

    html.push_str("</body>\n</html>\n");
    Ok(html)
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
