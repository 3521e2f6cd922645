//! CSV adapters for the audit's row source and report sink.

mod reader;
mod writer;

pub use reader::CsvAuditSource;
pub use writer::CsvReportWriter;
