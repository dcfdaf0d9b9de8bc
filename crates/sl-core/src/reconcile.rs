//! Reconciliation of raw URL records into unified per-URL entries
//!
//! The backend returns base and extension-scope records as separate flat
//! entries. This module merges them into one entry per logical URL, with
//! the extension override winning display precedence.

use std::collections::BTreeMap;

use log::debug;

use crate::types::{RecordScope, StateTag, UnifiedUrlEntry, UrlRecord};

/// Merge raw records into unified entries, sorted ascending by bare URL.
///
/// Records are processed in input order; within one scope class the last
/// record for a URL wins. The result is independent of whether the base or
/// the extension record for a URL arrives first: an `extension_excluded`
/// override sticks regardless of arrival order.
pub fn reconcile(records: &[UrlRecord]) -> Vec<UnifiedUrlEntry> {
    let mut merged: BTreeMap<String, UnifiedUrlEntry> = BTreeMap::new();

    for record in records {
        let scoped = record.decode();
        match scoped.scope {
            RecordScope::Extension => match merged.get_mut(&scoped.url) {
                Some(entry) => {
                    entry.has_extension_entry = true;
                    entry.extension_state = Some(scoped.state);
                    // The override only changes the display state when it
                    // is the exclusion itself.
                    if scoped.state == StateTag::ExtensionExcluded {
                        entry.state = scoped.state;
                    }
                }
                None => {
                    merged.insert(
                        scoped.url.clone(),
                        UnifiedUrlEntry {
                            url: scoped.url,
                            state: scoped.state,
                            has_extension_entry: true,
                            extension_state: Some(scoped.state),
                            base_state: None,
                        },
                    );
                }
            },
            RecordScope::Base => match merged.get_mut(&scoped.url) {
                Some(entry) => {
                    if entry.extension_state == Some(StateTag::ExtensionExcluded) {
                        entry.state = StateTag::ExtensionExcluded;
                    } else {
                        entry.state = scoped.state;
                    }
                    entry.base_state = Some(scoped.state);
                }
                None => {
                    merged.insert(
                        scoped.url.clone(),
                        UnifiedUrlEntry {
                            url: scoped.url,
                            state: scoped.state,
                            has_extension_entry: false,
                            extension_state: None,
                            base_state: Some(scoped.state),
                        },
                    );
                }
            },
        }
    }

    debug!(
        "reconciled {} records into {} unified entries",
        records.len(),
        merged.len()
    );

    merged.into_values().collect()
}
