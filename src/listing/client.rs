use super::entry::ListingEntry;
use std::sync::mpsc;
use std::thread;

/// Outcome of the one-shot listing fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// 2xx response whose body parsed as a listing
    Loaded(Vec<ListingEntry>),
    /// Non-2xx status; treated as "no data", not as a failure
    Unavailable { status: u16 },
    /// Transport error or a body that failed to parse
    Failed(String),
}

/// Issue the GET on a background thread.
///
/// The outcome is sent once on the returned channel and the thread exits.
/// The send is allowed to fail silently when the receiver is gone (viewer
/// quit before the response arrived).
pub fn spawn_fetch(endpoint: String) -> mpsc::Receiver<FetchOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(fetch_listing(&endpoint));
    });
    rx
}

/// Blocking fetch of the listing.
///
/// No timeout is set: a hung endpoint keeps the request pending until the
/// process exits.
pub fn fetch_listing(endpoint: &str) -> FetchOutcome {
    match ureq::get(endpoint).call() {
        Ok(response) => {
            let body = match response.into_string() {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!("Failed to read listing body from {}: {}", endpoint, e);
                    return FetchOutcome::Failed(e.to_string());
                }
            };
            match serde_json::from_str::<Vec<ListingEntry>>(&body) {
                Ok(entries) => {
                    tracing::info!("Fetched {} listing entries from {}", entries.len(), endpoint);
                    FetchOutcome::Loaded(entries)
                }
                Err(e) => {
                    tracing::error!("Failed to parse listing from {}: {}", endpoint, e);
                    FetchOutcome::Failed(e.to_string())
                }
            }
        }
        Err(ureq::Error::Status(status, _)) => {
            tracing::warn!("Listing endpoint {} returned status {}", endpoint, status);
            FetchOutcome::Unavailable { status }
        }
        Err(e) => {
            tracing::error!("Failed to fetch listing from {}: {}", endpoint, e);
            FetchOutcome::Failed(e.to_string())
        }
    }
}
