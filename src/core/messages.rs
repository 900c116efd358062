//! Fixed user-visible strings.
//!
//! Everything the controller renders on its own behalf lives here, so the
//! state-machine tests and the handlers agree on the exact wording.

use crate::core::profile::{Character, Profile};

/// Shown when the backend answered but sent no usable response text.
pub const EMPTY_RESPONSE: &str = "I don't have a response for that right now.";

/// Shown when the `/ai/process` request failed at the transport level.
pub const CONNECTIVITY_ERROR: &str =
    "I can't reach the assistant service right now. Please check that the backend is running and try again.";

pub const CLEAR_CONFIRM_PROMPT: &str =
    "This will permanently delete the conversation history. Type 'y' to confirm.";
pub const CLEAR_CANCELLED: &str = "Conversation history was left untouched.";
pub const TRANSCRIPT_CLEARED: &str = "Conversation history cleared.";

pub const VOICE_UNAVAILABLE: &str = "Voice input is not available in this build.";

pub const SYNC_FAILED: &str = "Knowledge sync failed. The assistant service may be busy.";

pub fn profile_switched(profile: Profile) -> String {
    format!("Switched to profile: {}", profile.display_name())
}

pub fn profile_switch_failed(profile: Profile) -> String {
    format!("Could not switch to profile: {}", profile.display_name())
}

pub fn character_switched(character: Character) -> String {
    format!("Switched to character: {}", character.display_name())
}

pub fn character_switch_failed(character: Character) -> String {
    format!("Could not switch to character: {}", character.display_name())
}

pub fn sync_completed(processed_files: Option<u64>) -> String {
    match processed_files {
        Some(count) => format!("Knowledge sync completed. {count} files processed."),
        None => "Knowledge sync completed.".to_string(),
    }
}
