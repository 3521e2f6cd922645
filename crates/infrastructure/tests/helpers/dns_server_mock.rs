use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, CNAME};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::collections::{HashMap, HashSet};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Records the mock server answers from. Names are stored without the
/// trailing dot.
#[derive(Clone, Default)]
pub struct MockZone {
    records: HashMap<(String, RecordType), Vec<RData>>,
    nxdomain: HashSet<String>,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cname(mut self, name: &str, target: &str) -> Self {
        let target = Name::from_str(target).unwrap();
        self.records
            .entry((key(name), RecordType::CNAME))
            .or_default()
            .push(RData::CNAME(CNAME(target)));
        self
    }

    pub fn a(mut self, name: &str, ip: &str) -> Self {
        let ip = Ipv4Addr::from_str(ip).unwrap();
        self.records
            .entry((key(name), RecordType::A))
            .or_default()
            .push(RData::A(A(ip)));
        self
    }

    pub fn nxdomain(mut self, name: &str) -> Self {
        self.nxdomain.insert(key(name));
        self
    }
}

fn key(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerMode {
    /// Answers from the zone over UDP.
    Normal,
    /// UDP answers come back empty with TC set; TCP on the same port answers
    /// from the zone.
    TruncateUdp,
    /// Every answer is SERVFAIL.
    ServFail,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<(String, RecordType, &'static str)>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(zone: MockZone) -> Self {
        Self::start_with_mode(zone, ServerMode::Normal).await
    }

    pub async fn start_with_mode(zone: MockZone, mode: ServerMode) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let tcp = TcpListener::bind(addr).await.unwrap();

        let queries = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let zone = Arc::new(zone);
        let log = queries.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let truncate = mode == ServerMode::TruncateUdp;
                            if let Some(response) = respond(&zone, mode, &buf[..len], truncate, &log, "UDP") {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = tcp.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            let zone = zone.clone();
                            let log = log.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = respond(&zone, mode, &query, false, &log, "TCP") {
                                    let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `(name, type, transport)` for every query received, in arrival order.
    pub fn queries(&self) -> Vec<(String, RecordType, &'static str)> {
        self.queries.lock().unwrap().clone()
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn respond(
    zone: &MockZone,
    mode: ServerMode,
    query: &[u8],
    truncate: bool,
    log: &Mutex<Vec<(String, RecordType, &'static str)>>,
    transport: &'static str,
) -> Option<Vec<u8>> {
    let request = Message::from_vec(query).ok()?;

    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true);

    for question in request.queries() {
        let name = key(&question.name().to_utf8());
        log.lock()
            .unwrap()
            .push((name.clone(), question.query_type(), transport));
        response.add_query(question.clone());

        if mode == ServerMode::ServFail {
            response.set_response_code(ResponseCode::ServFail);
            continue;
        }
        if truncate {
            response.set_truncated(true);
            continue;
        }
        if zone.nxdomain.contains(&name) {
            response.set_response_code(ResponseCode::NXDomain);
            continue;
        }
        if let Some(rdatas) = zone.records.get(&(name, question.query_type())) {
            for rdata in rdatas {
                response.add_answer(Record::from_rdata(
                    question.name().clone(),
                    60,
                    rdata.clone(),
                ));
            }
        }
    }

    response.to_vec().ok()
}
