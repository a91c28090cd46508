//! Client-download exports: CSV for spreadsheets and a printable HTML
//! document standing in for PDF. Neither format has a byte-exact contract;
//! the only consumer is a person opening the file.

mod csv_export;
mod html;

pub use csv_export::export_csv;
pub use html::printable_report;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize record for export: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("csv write failure: {0}")]
    Csv(#[from] csv::Error),
    #[error("export buffer error: {0}")]
    Buffer(String),
}
