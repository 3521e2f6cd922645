mod probe_http_status;

pub use probe_http_status::ProbeHttpStatusUseCase;
