//! Update-command construction
//!
//! Given a desired target state and the current unified entry, compute the
//! exact write commands that transition the URL to that state. This is a
//! pure function of its arguments; it never inspects persisted storage.

use log::debug;

use crate::types::{CommandState, RecordScope, StateTag, UnifiedUrlEntry, UpdateCommand};

/// Build the commands needed to move `base_url` to `target`.
///
/// `existing` is the current unified entry for the URL, or `None` if the URL
/// has no prior record. The decision table, in priority order:
///
/// 1. `Remove`: remove the base record when one exists or when no extension
///    record exists; remove the extension record when one exists.
/// 2. `Set(ExtensionExcluded)`: unconditionally set the base record to
///    `fully_open` and the extension record to `extension_excluded`. The
///    exclusion is meaningless without an explicit open base state.
/// 3. `Set(other)`: set the base record; switching away from an override
///    clears the extension record.
pub fn build_commands(
    base_url: &str,
    target: CommandState,
    existing: Option<&UnifiedUrlEntry>,
) -> Vec<UpdateCommand> {
    let has_extension_entry = existing.is_some_and(|e| e.has_extension_entry);
    let has_base_entry = existing.is_some_and(|e| e.base_state.is_some());

    let mut commands = Vec::with_capacity(2);

    match target {
        CommandState::Remove => {
            if has_base_entry || !has_extension_entry {
                commands.push(UpdateCommand::remove(RecordScope::Base, base_url));
            }
            if has_extension_entry {
                commands.push(UpdateCommand::remove(RecordScope::Extension, base_url));
            }
        }
        CommandState::Set(StateTag::ExtensionExcluded) => {
            commands.push(UpdateCommand::set(
                RecordScope::Base,
                base_url,
                StateTag::FullyOpen,
            ));
            commands.push(UpdateCommand::set(
                RecordScope::Extension,
                base_url,
                StateTag::ExtensionExcluded,
            ));
        }
        CommandState::Set(state) => {
            commands.push(UpdateCommand::set(RecordScope::Base, base_url, state));
            if has_extension_entry {
                commands.push(UpdateCommand::remove(RecordScope::Extension, base_url));
            }
        }
    }

    debug!(
        "built {} command(s) for {} -> {}",
        commands.len(),
        base_url,
        target
    );

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        state: StateTag,
        has_extension_entry: bool,
        extension_state: Option<StateTag>,
        base_state: Option<StateTag>,
    ) -> UnifiedUrlEntry {
        UnifiedUrlEntry {
            url: "a.com".to_string(),
            state,
            has_extension_entry,
            extension_state,
            base_state,
        }
    }

    #[test]
    fn test_remove_with_base_and_extension() {
        let existing = entry(
            StateTag::ExtensionExcluded,
            true,
            Some(StateTag::ExtensionExcluded),
            Some(StateTag::Blocked),
        );
        let commands = build_commands("a.com", CommandState::Remove, Some(&existing));
        assert_eq!(
            commands,
            vec![
                UpdateCommand::remove(RecordScope::Base, "a.com"),
                UpdateCommand::remove(RecordScope::Extension, "a.com"),
            ]
        );
    }

    #[test]
    fn test_remove_base_only() {
        let existing = entry(StateTag::Blocked, false, None, Some(StateTag::Blocked));
        let commands = build_commands("a.com", CommandState::Remove, Some(&existing));
        assert_eq!(commands, vec![UpdateCommand::remove(RecordScope::Base, "a.com")]);
    }

    #[test]
    fn test_remove_marker_only_entry_skips_base() {
        // Extension record exists but no base record was ever created: only
        // the extension remove is emitted, no vacuous base remove.
        let existing = entry(
            StateTag::ExtensionExcluded,
            true,
            Some(StateTag::ExtensionExcluded),
            None,
        );
        let commands = build_commands("a.com", CommandState::Remove, Some(&existing));
        assert_eq!(
            commands,
            vec![UpdateCommand::remove(RecordScope::Extension, "a.com")]
        );
    }

    #[test]
    fn test_remove_without_existing_entry() {
        let commands = build_commands("a.com", CommandState::Remove, None);
        assert_eq!(commands, vec![UpdateCommand::remove(RecordScope::Base, "a.com")]);
    }

    #[test]
    fn test_extension_excluded_always_emits_pair() {
        let commands = build_commands(
            "a.com",
            CommandState::Set(StateTag::ExtensionExcluded),
            None,
        );
        assert_eq!(
            commands,
            vec![
                UpdateCommand::set(RecordScope::Base, "a.com", StateTag::FullyOpen),
                UpdateCommand::set(RecordScope::Extension, "a.com", StateTag::ExtensionExcluded),
            ]
        );

        // Same pair regardless of the existing entry
        let existing = entry(StateTag::Blocked, false, None, Some(StateTag::Blocked));
        let with_existing = build_commands(
            "a.com",
            CommandState::Set(StateTag::ExtensionExcluded),
            Some(&existing),
        );
        assert_eq!(commands, with_existing);
    }

    #[test]
    fn test_set_state_without_extension_entry() {
        let existing = entry(StateTag::FullyOpen, false, None, Some(StateTag::FullyOpen));
        let commands = build_commands(
            "a.com",
            CommandState::Set(StateTag::Blocked),
            Some(&existing),
        );
        assert_eq!(
            commands,
            vec![UpdateCommand::set(RecordScope::Base, "a.com", StateTag::Blocked)]
        );
    }

    #[test]
    fn test_set_state_clears_extension_override() {
        let existing = entry(
            StateTag::ExtensionExcluded,
            true,
            Some(StateTag::ExtensionExcluded),
            Some(StateTag::FullyOpen),
        );
        let commands = build_commands(
            "a.com",
            CommandState::Set(StateTag::MbFilter),
            Some(&existing),
        );
        assert_eq!(
            commands,
            vec![
                UpdateCommand::set(RecordScope::Base, "a.com", StateTag::MbFilter),
                UpdateCommand::remove(RecordScope::Extension, "a.com"),
            ]
        );
    }

    #[test]
    fn test_set_state_on_fresh_url() {
        let commands = build_commands("a.com", CommandState::Set(StateTag::Blocked), None);
        assert_eq!(
            commands,
            vec![UpdateCommand::set(RecordScope::Base, "a.com", StateTag::Blocked)]
        );
    }
}
