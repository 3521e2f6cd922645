use super::*;

fn addr() -> SocketAddr {
    "192.0.2.53:53".parse().unwrap()
}

#[test]
fn test_validate_response_id_matching_ids_ok() {
    let query = [0xAB, 0xCD, 0x01, 0x00];
    let response = [0xAB, 0xCD, 0x81, 0x80];
    assert!(validate_response_id(&query, &response, addr()).is_ok());
}

#[test]
fn test_validate_response_id_mismatch_returns_error() {
    let query = [0xAB, 0xCD, 0x01, 0x00];
    let response = [0x12, 0x34, 0x81, 0x80];
    let err = validate_response_id(&query, &response, addr())
        .unwrap_err()
        .to_string();
    assert!(err.contains("mismatch"), "unexpected error: {}", err);
}

#[test]
fn test_validate_response_id_short_messages_return_error() {
    assert!(validate_response_id(&[0xAB], &[0xAB, 0xCD], addr()).is_err());
    assert!(validate_response_id(&[0xAB, 0xCD], &[0xAB], addr()).is_err());
}

#[test]
fn test_udp_transport_creation() {
    let transport = UdpTransport::new(addr());
    assert_eq!(transport.server_addr, addr());
    assert_eq!(transport.protocol_name(), "UDP");
}

#[tokio::test]
async fn test_silent_server_times_out() {
    // Bound but never answers.
    let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let server = silent.local_addr().unwrap();

    let transport = UdpTransport::new(server);
    let result = transport
        .send(&[0x12, 0x34, 0x01, 0x00], Duration::from_millis(100))
        .await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::TransportTimeout {
            server: server.to_string()
        }
    );
}
