use dangling_dns_application::ports::AuditTargetSource;
use dangling_dns_domain::{AuditTarget, DomainError};
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

/// Input columns the audit reads; every other column is ignored.
#[derive(Debug, Deserialize)]
struct InputRow {
    #[serde(rename = "FQDN*", default)]
    fqdn: Option<String>,

    #[serde(rename = "Canonical_Name*", default)]
    canonical_name: Option<String>,
}

/// Reads audit targets from a headed CSV, one row at a time.
///
/// Rows shorter than the header are accepted; their missing cells read as
/// absent.
pub struct CsvAuditSource<R: io::Read> {
    reader: csv::Reader<R>,
    headers: csv::StringRecord,
    record: csv::StringRecord,
    label: String,
}

impl CsvAuditSource<File> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let file = File::open(path).map_err(|e| DomainError::InputRead {
            path: label.clone(),
            reason: e.to_string(),
        })?;
        Self::with_label(file, label)
    }
}

impl<R: io::Read> CsvAuditSource<R> {
    pub fn from_reader(reader: R) -> Result<Self, DomainError> {
        Self::with_label(reader, "<input>".to_string())
    }

    fn with_label(reader: R, label: String) -> Result<Self, DomainError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| input_error(&label, e))?
            .clone();

        debug!(path = %label, columns = headers.len(), "Opened audit input");

        Ok(Self {
            reader,
            headers,
            record: csv::StringRecord::new(),
            label,
        })
    }
}

impl<R: io::Read> AuditTargetSource for CsvAuditSource<R> {
    fn next_target(&mut self) -> Result<Option<AuditTarget>, DomainError> {
        let more = self
            .reader
            .read_record(&mut self.record)
            .map_err(|e| input_error(&self.label, e))?;
        if !more {
            return Ok(None);
        }

        let row: InputRow = self
            .record
            .deserialize(Some(&self.headers))
            .map_err(|e| input_error(&self.label, e))?;

        Ok(Some(AuditTarget {
            fqdn: row.fqdn,
            canonical_name: row.canonical_name,
        }))
    }
}

fn input_error(label: &str, e: csv::Error) -> DomainError {
    DomainError::InputRead {
        path: label.to_string(),
        reason: e.to_string(),
    }
}
