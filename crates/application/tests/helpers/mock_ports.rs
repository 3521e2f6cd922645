#![allow(dead_code)]

use async_trait::async_trait;
use dangling_dns_application::ports::{
    AuditReportSink, AuditTargetSource, DnsRecordLookup, HttpProber,
};
use dangling_dns_domain::{AuditReport, AuditTarget, DomainError, RecordType};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Answers from a fixed table; names without an entry have no records.
#[derive(Clone, Default)]
pub struct MockDnsLookup {
    answers: Arc<Mutex<HashMap<(String, RecordType), Result<Vec<String>, DomainError>>>>,
    queries: Arc<Mutex<Vec<(String, RecordType)>>>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cname(&self, domain: &str, target: &str) {
        self.set_answers(domain, RecordType::CNAME, vec![target]);
    }

    pub fn set_a(&self, domain: &str, ip: &str) {
        self.set_answers(domain, RecordType::A, vec![ip]);
    }

    pub fn set_answers(&self, domain: &str, record_type: RecordType, answers: Vec<&str>) {
        self.answers.lock().unwrap().insert(
            (domain.to_string(), record_type),
            Ok(answers.into_iter().map(str::to_string).collect()),
        );
    }

    pub fn set_error(&self, domain: &str, record_type: RecordType, error: DomainError) {
        self.answers
            .lock()
            .unwrap()
            .insert((domain.to_string(), record_type), Err(error));
    }

    /// Aliases each name to the next one; the last name gets no CNAME.
    pub fn set_chain(&self, names: &[&str]) {
        for pair in names.windows(2) {
            self.set_cname(pair[0], &format!("{}.", pair[1]));
        }
    }

    pub fn queries(&self) -> Vec<(String, RecordType)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn queries_of(&self, record_type: RecordType) -> Vec<String> {
        self.queries()
            .into_iter()
            .filter(|(_, rt)| *rt == record_type)
            .map(|(domain, _)| domain)
            .collect()
    }
}

#[async_trait]
impl DnsRecordLookup for MockDnsLookup {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        self.queries
            .lock()
            .unwrap()
            .push((domain.to_string(), record_type));

        self.answers
            .lock()
            .unwrap()
            .get(&(domain.to_string(), record_type))
            .cloned()
            .unwrap_or_else(|| Ok(vec![]))
    }
}

/// Status lines (or errors) per host; unknown hosts fail at the transport level.
#[derive(Clone, Default)]
pub struct MockHttpProber {
    responses: Arc<Mutex<HashMap<String, Result<String, DomainError>>>>,
    probed: Arc<Mutex<Vec<String>>>,
}

impl MockHttpProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&self, host: &str, status_line: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(host.to_string(), Ok(status_line.to_string()));
    }

    pub fn set_error(&self, host: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(host.to_string(), Err(error));
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpProber for MockHttpProber {
    async fn status_line(&self, host: &str) -> Result<String, DomainError> {
        self.probed.lock().unwrap().push(host.to_string());

        self.responses
            .lock()
            .unwrap()
            .get(host)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::HttpTransport("connect".to_string())))
    }
}

pub struct VecTargetSource {
    rows: VecDeque<Result<AuditTarget, DomainError>>,
}

impl VecTargetSource {
    pub fn new(targets: Vec<AuditTarget>) -> Self {
        Self {
            rows: targets.into_iter().map(Ok).collect(),
        }
    }

    pub fn with_error_after(targets: Vec<AuditTarget>, error: DomainError) -> Self {
        let mut source = Self::new(targets);
        source.rows.push_back(Err(error));
        source
    }
}

impl AuditTargetSource for VecTargetSource {
    fn next_target(&mut self) -> Result<Option<AuditTarget>, DomainError> {
        self.rows.pop_front().transpose()
    }
}

#[derive(Default)]
pub struct VecReportSink {
    pub reports: Vec<AuditReport>,
    pub finished: bool,
    pub fail_writes: bool,
}

impl VecReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<[String; 5]> {
        self.reports.iter().map(AuditReport::to_row).collect()
    }
}

impl AuditReportSink for VecReportSink {
    fn write_report(&mut self, report: &AuditReport) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::OutputWrite {
                path: "memory".to_string(),
                reason: "disk full".to_string(),
            });
        }
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), DomainError> {
        self.finished = true;
        Ok(())
    }
}
