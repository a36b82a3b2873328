//! Saving events extracted by the assistant (chat or image import).

use super::EventRepository;
use crate::error::TimeboxResult;
use crate::event::{Event, NewEvent};

/// Phrases that turn a chat message into an update of an existing event.
const UPDATE_KEYWORDS: &[&str] = &[
    "move",
    "change",
    "update",
    "reschedule",
    "shift",
    "make it",
    "make that",
];

/// Whether a chat message asks to modify events rather than add new ones.
pub fn is_update_request(message: &str) -> bool {
    let message = message.to_lowercase();
    UPDATE_KEYWORDS.iter().any(|kw| message.contains(kw))
}

/// Result of [`apply_actions`].
#[derive(Debug, Default)]
pub struct ApplyOutcome {
    /// Events that were stored
    pub created: Vec<Event>,
    /// Old events removed because a new action replaced them
    pub replaced: Vec<Event>,
    /// Actions that failed validation
    pub skipped: usize,
}

/// Store every action as a new event.
///
/// With `replace_matching_titles`, each action first deletes the first event
/// that existed before the call and has the same title (case-insensitive), so
/// "move my dentist appointment to 3pm" replaces rather than duplicates.
/// Invalid actions are counted and skipped; store failures abort.
pub fn apply_actions(
    repo: &dyn EventRepository,
    actions: Vec<NewEvent>,
    replace_matching_titles: bool,
) -> TimeboxResult<ApplyOutcome> {
    let existing = if replace_matching_titles {
        repo.list_all()?
    } else {
        Vec::new()
    };

    let mut outcome = ApplyOutcome::default();

    for action in actions {
        if let Err(err) = action.validate() {
            tracing::warn!(title = %action.title, error = %err, "skipping invalid action");
            outcome.skipped += 1;
            continue;
        }

        if replace_matching_titles {
            let wanted = action.title.to_lowercase();
            if let Some(old) = existing.iter().find(|e| e.title.to_lowercase() == wanted) {
                if repo.delete(&old.id)? {
                    tracing::info!(title = %old.title, start = %old.start, "replaced old version");
                    outcome.replaced.push(old.clone());
                }
            }
        }

        outcome.created.push(repo.create(action)?);
    }

    Ok(outcome)
}
