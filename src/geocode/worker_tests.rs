//! Tests for the lookup worker thread

use super::*;
use crate::config::ProviderConfig;
use std::sync::mpsc;
use std::time::Duration;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn test_worker_without_client_reports_disabled() {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    spawn_worker(None, request_rx, response_tx).unwrap();

    request_tx
        .send(LookupRequest {
            term: "paris".to_string(),
            request_id: 7,
        })
        .unwrap();

    let response = response_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(response.request_id, 7);
    assert_eq!(response.outcome, Err(LookupError::Disabled));
}

#[test]
fn test_worker_tags_responses_with_request_id() {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    let config = ProviderConfig {
        endpoint: "http://127.0.0.1:9/search".to_string(),
        ..ProviderConfig::default()
    };
    let client = GeocodeClient::from_config(&config).unwrap();
    spawn_worker(Some(client), request_rx, response_tx).unwrap();

    // Single-character terms resolve without touching the network
    for request_id in [1, 2, 3] {
        request_tx
            .send(LookupRequest {
                term: "x".to_string(),
                request_id,
            })
            .unwrap();
    }

    let mut ids: Vec<u64> = (0..3)
        .map(|_| response_rx.recv_timeout(RECV_TIMEOUT).unwrap())
        .map(|r| {
            assert_eq!(r.outcome, Ok(Vec::new()));
            r.request_id
        })
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_worker_shuts_down_when_channel_closed() {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel::<LookupRequest>();
    let (response_tx, _response_rx) = mpsc::channel();

    let handle = spawn_worker(None, request_rx, response_tx).unwrap();

    drop(request_tx);

    handle.join().expect("Worker thread should exit cleanly");
}
