//! Lookup Worker Thread
//!
//! Runs lookups in a background thread so the UI loop never waits on the
//! network. Requests arrive on an unbounded channel; each one is spawned as its
//! own task on a current-thread runtime, so overlapping lookups run
//! concurrently and may complete out of order. Every request produces exactly
//! one response on the response channel.

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;

use super::fetcher::LookupClient;
use crate::error::AppError;

/// Request messages sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Trimmed, non-empty query text
    pub query: String,
}

/// Response messages received from the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    /// The lookup succeeded (possibly with no names)
    Suggestions { query: String, names: Vec<String> },
    /// The lookup failed for any reason
    Failed { query: String, message: String },
}

impl LookupResponse {
    /// Query text the response was produced for
    pub fn query(&self) -> &str {
        match self {
            LookupResponse::Suggestions { query, .. } | LookupResponse::Failed { query, .. } => {
                query
            }
        }
    }
}

/// Spawn the lookup worker thread
///
/// The thread exits once every request sender has been dropped. Lookups still
/// in flight at that point are abandoned.
pub fn spawn_worker(
    client: LookupClient,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> Result<JoinHandle<()>, AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::Worker(e.to_string()))?;

    let handle = std::thread::Builder::new()
        .name("lookup-worker".to_string())
        .spawn(move || runtime.block_on(worker_loop(client, request_rx, response_tx)))?;

    Ok(handle)
}

/// Main worker loop - dispatches requests until the channel is closed
async fn worker_loop(
    client: LookupClient,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        let client = client.clone();
        let response_tx = response_tx.clone();

        tokio::spawn(async move {
            let response = handle_request(&client, request).await;
            if response_tx.send(response).is_err() {
                log::debug!("UI thread gone, dropping lookup response");
            }
        });
    }

    log::debug!("Lookup worker shutting down");
}

/// Run one lookup and fold the outcome into a response
async fn handle_request(client: &LookupClient, request: LookupRequest) -> LookupResponse {
    let LookupRequest { query } = request;

    match client.fetch(&query).await {
        Ok(names) => {
            log::debug!("Lookup for {:?} returned {} names", query, names.len());
            LookupResponse::Suggestions { query, names }
        }
        Err(e) => {
            log::debug!("Lookup for {:?} failed: {}", query, e);
            LookupResponse::Failed {
                query,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
