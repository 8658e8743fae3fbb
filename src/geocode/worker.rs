//! Lookup worker thread
//!
//! Runs geocoding lookups off the UI thread. Each request is spawned as its
//! own task, so responses can arrive in any order; the UI thread decides
//! which ones are still current by comparing request ids.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use super::{GeocodeClient, LookupError};
use crate::location::LocationCandidate;

/// Request sent from the UI thread to the worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub term: String,
    /// Unique ID for this request, used to filter stale responses
    pub request_id: u64,
}

/// Response sent from the worker back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    /// Request ID this response belongs to
    pub request_id: u64,
    pub outcome: Result<Vec<LocationCandidate>, LookupError>,
}

/// Spawn the lookup worker thread
///
/// `client` is None when live lookups are disabled; every request is then
/// answered immediately with `LookupError::Disabled`. The thread exits once
/// the request channel is closed.
pub fn spawn_worker(
    client: Option<GeocodeClient>,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    std::thread::Builder::new()
        .name("lookup-worker".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::warn!("Lookup worker could not start a runtime: {}", e);
                    return;
                }
            };

            runtime.block_on(worker_loop(client, request_rx, response_tx));
        })
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    client: Option<GeocodeClient>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        log::debug!(
            "Lookup {} dispatched for {:?}",
            request.request_id,
            request.term
        );

        let Some(client) = client.clone() else {
            let _ = response_tx.send(LookupResponse {
                request_id: request.request_id,
                outcome: Err(LookupError::Disabled),
            });
            continue;
        };

        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            let outcome = client.fetch(&request.term).await;
            // UI thread gone means the app is shutting down
            let _ = response_tx.send(LookupResponse {
                request_id: request.request_id,
                outcome,
            });
        });
    }

    log::debug!("Lookup worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
