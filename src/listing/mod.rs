// Listing module
//
// The wire-format entry descriptors served by the listing endpoint and
// the one-shot background client that fetches them.

pub mod client;
pub mod entry;

pub use client::{fetch_listing, spawn_fetch, FetchOutcome};
pub use entry::{EntryKind, ListingEntry, ModifiedTime};
