//! Core type definitions for the SafeList URL engine
//!
//! These types map directly to the JSON record format exchanged with the
//! filtering backend and are used throughout the reconciliation engine.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

/// Marker character carried by extension-scope records on the wire.
pub const EXTENSION_MARKER: char = '&';

// =============================================================================
// State Tags
// =============================================================================

/// Persisted filtering state of a URL entry.
///
/// `remove` is deliberately not a variant here: it only exists as a command
/// (see [`CommandState`]), never as a stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateTag {
    /// Access to the URL is blocked
    Blocked,
    /// URL bypasses all filtering
    FullyOpen,
    /// URL goes through the content filter
    MbFilter,
    /// No filtering data recorded for the URL
    Nodata,
    /// The browser extension opts out of inherited filtering.
    /// Only legitimate on an extension-scope record.
    ExtensionExcluded,
}

impl StateTag {
    /// Wire string for this state.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blocked => "blocked",
            Self::FullyOpen => "fully_open",
            Self::MbFilter => "mb_filter",
            Self::Nodata => "nodata",
            Self::ExtensionExcluded => "extension_excluded",
        }
    }
}

impl fmt::Display for StateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced when a wire string names no known state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown url state: {0:?}")]
pub struct ParseStateError(pub String);

impl FromStr for StateTag {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blocked" => Ok(Self::Blocked),
            "fully_open" => Ok(Self::FullyOpen),
            "mb_filter" => Ok(Self::MbFilter),
            "nodata" => Ok(Self::Nodata),
            "extension_excluded" => Ok(Self::ExtensionExcluded),
            _ => Err(ParseStateError(s.to_string())),
        }
    }
}

// =============================================================================
// Record Scope
// =============================================================================

/// Scope of a URL record.
///
/// The backend encodes extension-scope records by prefixing the URL with
/// [`EXTENSION_MARKER`]. The prefix is decoded exactly once at the ingestion
/// boundary; everything past that point works with this tag and a bare URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordScope {
    /// Filtering state outside the browser-extension scope
    Base,
    /// Filtering state within the browser-extension scope
    Extension,
}

impl RecordScope {
    /// Split a wire URL into its scope and bare form.
    pub fn split(url: &str) -> (Self, &str) {
        match url.strip_prefix(EXTENSION_MARKER) {
            Some(bare) => (Self::Extension, bare),
            None => (Self::Base, url),
        }
    }
}

// =============================================================================
// Wire Records
// =============================================================================

/// Raw URL record as received from the backend.
///
/// `url` may still carry the extension marker; call [`UrlRecord::decode`]
/// to obtain the scoped form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub url: String,
    pub state: StateTag,
}

impl UrlRecord {
    pub fn new(url: impl Into<String>, state: StateTag) -> Self {
        Self {
            url: url.into(),
            state,
        }
    }

    /// Decode the marker prefix into an explicit scope tag.
    pub fn decode(&self) -> ScopedRecord {
        let (scope, bare) = RecordScope::split(&self.url);
        ScopedRecord {
            scope,
            url: bare.to_string(),
            state: self.state,
        }
    }
}

/// A [`UrlRecord`] with the marker prefix decoded away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedRecord {
    pub scope: RecordScope,
    /// Bare URL, never carries the marker
    pub url: String,
    pub state: StateTag,
}

// =============================================================================
// Unified Entries
// =============================================================================

/// Reconciled per-URL entry combining base and extension scope states.
///
/// Built once per reconciliation pass and immutable afterwards. `state` is
/// the display state: an `extension_excluded` override always wins precedence
/// over the base state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedUrlEntry {
    /// Bare URL, never carries the marker
    pub url: String,
    pub state: StateTag,
    pub has_extension_entry: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_state: Option<StateTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_state: Option<StateTag>,
}

// =============================================================================
// Update Commands
// =============================================================================

/// Payload of an update command: set a state, or remove the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState {
    Set(StateTag),
    Remove,
}

impl CommandState {
    /// Wire string for this command payload.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Set(tag) => tag.as_str(),
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for CommandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "remove" {
            Ok(Self::Remove)
        } else {
            s.parse().map(Self::Set)
        }
    }
}

impl Serialize for CommandState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CommandState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A single atomic write instruction for the backend.
///
/// Serializes to the wire shape `{ "url": "...", "state": "..." }` with the
/// extension marker re-applied to `url` for extension-scope targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCommand {
    pub scope: RecordScope,
    /// Bare URL, never carries the marker
    pub url: String,
    pub state: CommandState,
}

impl UpdateCommand {
    /// Command that sets `url` to `state` within `scope`.
    pub fn set(scope: RecordScope, url: impl Into<String>, state: StateTag) -> Self {
        Self {
            scope,
            url: url.into(),
            state: CommandState::Set(state),
        }
    }

    /// Command that removes the record for `url` within `scope`.
    pub fn remove(scope: RecordScope, url: impl Into<String>) -> Self {
        Self {
            scope,
            url: url.into(),
            state: CommandState::Remove,
        }
    }

    /// URL as written to the wire, marker re-applied for extension scope.
    pub fn wire_url(&self) -> String {
        match self.scope {
            RecordScope::Base => self.url.clone(),
            RecordScope::Extension => format!("{}{}", EXTENSION_MARKER, self.url),
        }
    }
}

impl Serialize for UpdateCommand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut st = serializer.serialize_struct("UpdateCommand", 2)?;
        st.serialize_field("url", &self.wire_url())?;
        st.serialize_field("state", &self.state)?;
        st.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_tag_roundtrip() {
        let tags = [
            StateTag::Blocked,
            StateTag::FullyOpen,
            StateTag::MbFilter,
            StateTag::Nodata,
            StateTag::ExtensionExcluded,
        ];
        for tag in tags {
            assert_eq!(tag.as_str().parse::<StateTag>(), Ok(tag));
        }
        assert!("remove".parse::<StateTag>().is_err());
        assert!("".parse::<StateTag>().is_err());
    }

    #[test]
    fn test_command_state_parses_remove() {
        assert_eq!("remove".parse::<CommandState>(), Ok(CommandState::Remove));
        assert_eq!(
            "blocked".parse::<CommandState>(),
            Ok(CommandState::Set(StateTag::Blocked))
        );
        assert!("nuke".parse::<CommandState>().is_err());
    }

    #[test]
    fn test_scope_split() {
        assert_eq!(
            RecordScope::split("&site.com"),
            (RecordScope::Extension, "site.com")
        );
        assert_eq!(RecordScope::split("site.com"), (RecordScope::Base, "site.com"));
        // Only one marker is consumed
        assert_eq!(
            RecordScope::split("&&site.com"),
            (RecordScope::Extension, "&site.com")
        );
    }

    #[test]
    fn test_record_decode() {
        let record = UrlRecord::new("&kids.example.com", StateTag::ExtensionExcluded);
        let scoped = record.decode();
        assert_eq!(scoped.scope, RecordScope::Extension);
        assert_eq!(scoped.url, "kids.example.com");
        assert_eq!(scoped.state, StateTag::ExtensionExcluded);
    }

    #[test]
    fn test_wire_url() {
        let cmd = UpdateCommand::remove(RecordScope::Extension, "site.com");
        assert_eq!(cmd.wire_url(), "&site.com");
        let cmd = UpdateCommand::set(RecordScope::Base, "site.com", StateTag::Blocked);
        assert_eq!(cmd.wire_url(), "site.com");
    }
}
