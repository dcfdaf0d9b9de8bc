//! SafeList Core Library
//!
//! This crate provides the URL list engine for the SafeList parental-control
//! product: reconciling backend URL records into unified per-domain state,
//! computing the write commands that transition a URL to a requested state,
//! and typo-tolerant substring search for the list UI.
//!
//! # Architecture
//!
//! The backend returns a flat list of `{ url, state }` records where an
//! extension-scope override is encoded as a separate record whose URL is
//! prefixed with `&`. The prefix is decoded once at the ingestion boundary
//! into an explicit scope tag; from there data flows one direction:
//!
//! raw records -> reconcile -> unified entries -> build_commands -> commands
//!
//! Everything is a synchronous, side-effect-free transformation. Malformed
//! input degrades to a safe default (empty string, `false`, empty sequence)
//! rather than panicking, so the engine is callable with partially-validated
//! UI input.
//!
//! # Modules
//!
//! - `types`: state tags, wire records, unified entries, update commands
//! - `url`: URL normalization, validity gate, bulk-input parsing
//! - `fuzzy`: edit distance and typo-tolerant substring matching
//! - `pattern`: wildcard pattern matching for list rules
//! - `reconcile`: merging raw records into unified entries
//! - `commands`: computing write commands for a state transition

pub mod commands;
pub mod fuzzy;
pub mod pattern;
pub mod reconcile;
pub mod types;
pub mod url;

// Re-export commonly used items
pub use commands::build_commands;
pub use fuzzy::{edit_distance, fuzzy_includes, fuzzy_match};
pub use pattern::matches_pattern;
pub use reconcile::reconcile;
pub use types::{
    CommandState, ParseStateError, RecordScope, ScopedRecord, StateTag, UnifiedUrlEntry,
    UpdateCommand, UrlRecord, EXTENSION_MARKER,
};
pub use url::{extract_domain, is_valid_url_or_domain, normalize, parse_bulk_urls};
