use dangling_dns_application::ports::AuditReportSink;
use dangling_dns_domain::audit::REPORT_HEADER;
use dangling_dns_domain::{AuditReport, DomainError};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

/// Writes the five-column audit report. The header goes out on creation,
/// so an empty run still produces a valid file.
pub struct CsvReportWriter<W: io::Write> {
    writer: csv::Writer<W>,
    label: String,
    rows: u64,
}

impl CsvReportWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let file = File::create(path).map_err(|e| DomainError::OutputWrite {
            path: label.clone(),
            reason: e.to_string(),
        })?;
        Self::with_label(file, label)
    }
}

impl<W: io::Write> CsvReportWriter<W> {
    pub fn from_writer(writer: W) -> Result<Self, DomainError> {
        Self::with_label(writer, "<output>".to_string())
    }

    fn with_label(writer: W, label: String) -> Result<Self, DomainError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        writer
            .write_record(REPORT_HEADER)
            .map_err(|e| output_error(&label, e))?;

        Ok(Self {
            writer,
            label,
            rows: 0,
        })
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(self) -> Result<W, DomainError> {
        let label = self.label;
        self.writer.into_inner().map_err(|e| DomainError::OutputWrite {
            path: label,
            reason: e.to_string(),
        })
    }
}

impl<W: io::Write> AuditReportSink for CsvReportWriter<W> {
    fn write_report(&mut self, report: &AuditReport) -> Result<(), DomainError> {
        self.writer
            .write_record(report.to_row())
            .map_err(|e| output_error(&self.label, e))?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), DomainError> {
        self.writer.flush().map_err(|e| DomainError::OutputWrite {
            path: self.label.clone(),
            reason: e.to_string(),
        })?;
        debug!(path = %self.label, rows = self.rows, "Audit report flushed");
        Ok(())
    }
}

fn output_error(label: &str, e: csv::Error) -> DomainError {
    DomainError::OutputWrite {
        path: label.to_string(),
        reason: e.to_string(),
    }
}
