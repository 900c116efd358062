use crate::core::profile::{display_label, Character, Profile};

/// Process-wide session state, created once at controller start.
///
/// Profile and character are session-local UI state: they are never restored
/// from disk, and a switch is only committed here after the backend confirms
/// it. `thinking` is true exactly while one `/ai/process` request is in
/// flight and always starts out false.
#[derive(Debug)]
pub struct SessionState {
    pub active_profile: Profile,
    pub active_character: Character,
    pub thinking: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            active_profile: Profile::default(),
            active_character: Character::default(),
            thinking: false,
        }
    }

    /// Commit a server-confirmed profile switch.
    pub fn set_profile(&mut self, profile: Profile) {
        self.active_profile = profile;
    }

    /// Commit a server-confirmed character switch.
    pub fn set_character(&mut self, character: Character) {
        self.active_character = character;
    }

    /// Combined label for the status area.
    pub fn display_label(&self) -> String {
        display_label(self.active_profile, self.active_character)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_session_is_idle_with_defaults() {
        let session = SessionState::new();
        assert_eq!(session.active_profile, Profile::Personal);
        assert_eq!(session.active_character, Character::Artemis);
        assert!(!session.thinking);
    }

    #[test]
    fn label_tracks_committed_switches() {
        let mut session = SessionState::new();
        assert_eq!(session.display_label(), "Personal Assistant / Artemis");
        session.set_profile(Profile::Education);
        session.set_character(Character::StudyBuddy);
        assert_eq!(session.display_label(), "Education Assistant / Study Buddy");
    }
}
