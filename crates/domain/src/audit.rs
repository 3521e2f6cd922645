use super::cname_chain::CnameChain;
use super::http_status::HttpStatus;

/// CNAME cell when the chain did not yield a usable terminal name.
pub const NO_VALID_CNAME: &str = "No valid CNAME record";
/// Resolved IP cell when the chain did not yield a usable terminal name.
pub const NO_VALID_RESOLUTION: &str = "No valid resolution";
/// HTTP Status cell when the chain did not yield a usable terminal name.
pub const NO_HTTP_CHECK: &str = "No HTTP check (invalid resolution)";

/// Report column names, in output order.
pub const REPORT_HEADER: [&str; 5] = [
    "FQDN",
    "Canonical_Name",
    "CNAME",
    "Resolved IP",
    "HTTP Status",
];

/// One input row: the audited name and the canonical name it is expected to alias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditTarget {
    pub fqdn: Option<String>,
    pub canonical_name: Option<String>,
}

impl AuditTarget {
    pub fn new(fqdn: impl Into<String>, canonical_name: impl Into<String>) -> Self {
        Self {
            fqdn: Some(fqdn.into()),
            canonical_name: Some(canonical_name.into()),
        }
    }
}

/// Everything learned about one row; rendered into five report cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub fqdn: Option<String>,
    pub canonical_name: Option<String>,
    pub chain: CnameChain,
    pub address: Option<String>,
    pub http_status: Option<HttpStatus>,
}

impl AuditReport {
    /// Row whose chain gave nothing to look up; downstream lookups never ran.
    pub fn unresolved(target: &AuditTarget, chain: CnameChain) -> Self {
        Self {
            fqdn: target.fqdn.clone(),
            canonical_name: target.canonical_name.clone(),
            chain,
            address: None,
            http_status: None,
        }
    }

    pub fn resolved(
        target: &AuditTarget,
        chain: CnameChain,
        address: Option<String>,
        http_status: HttpStatus,
    ) -> Self {
        Self {
            fqdn: target.fqdn.clone(),
            canonical_name: target.canonical_name.clone(),
            chain,
            address,
            http_status: Some(http_status),
        }
    }

    pub fn has_valid_resolution(&self) -> bool {
        self.chain.usable_target().is_some()
    }

    pub fn cname_cell(&self) -> String {
        self.chain
            .usable_target()
            .unwrap_or(NO_VALID_CNAME)
            .to_string()
    }

    pub fn address_cell(&self) -> String {
        if !self.has_valid_resolution() {
            return NO_VALID_RESOLUTION.to_string();
        }
        self.address.clone().unwrap_or_default()
    }

    pub fn http_status_cell(&self) -> String {
        match (&self.http_status, self.has_valid_resolution()) {
            (Some(status), true) => status.to_string(),
            _ => NO_HTTP_CHECK.to_string(),
        }
    }

    /// Cells in [`REPORT_HEADER`] order.
    pub fn to_row(&self) -> [String; 5] {
        [
            self.fqdn.clone().unwrap_or_default(),
            self.canonical_name.clone().unwrap_or_default(),
            self.cname_cell(),
            self.address_cell(),
            self.http_status_cell(),
        ]
    }
}

/// Counters over a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: u64,
    pub resolved: u64,
    pub unresolved: u64,
    pub with_address: u64,
    pub with_status_line: u64,
}

impl BatchSummary {
    pub fn record(&mut self, report: &AuditReport) {
        self.rows += 1;
        if !report.has_valid_resolution() {
            self.unresolved += 1;
            return;
        }
        self.resolved += 1;
        if report.address.is_some() {
            self.with_address += 1;
        }
        if report
            .http_status
            .as_ref()
            .is_some_and(HttpStatus::is_status_line)
        {
            self.with_status_line += 1;
        }
    }
}
