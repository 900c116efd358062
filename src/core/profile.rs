//! The closed sets of assistant profiles and characters.
//!
//! These mirror the defaults shipped by the backend. Switching to any of
//! them still round-trips through the service for confirmation; the enums
//! only guarantee that no unknown id is ever sent.

use std::fmt;

/// Operating mode the backend applies to shape response behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Personal,
    Business,
    Education,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Personal, Profile::Business, Profile::Education];

    /// Wire id, as the backend expects it in `profile_id`.
    pub fn id(self) -> &'static str {
        match self {
            Profile::Personal => "personal",
            Profile::Business => "business",
            Profile::Education => "education",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Profile::Personal => "Personal Assistant",
            Profile::Business => "Business Assistant",
            Profile::Education => "Education Assistant",
        }
    }

    pub fn parse(input: &str) -> Result<Self, String> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.id().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| {
                let available: Vec<&str> = Self::ALL.iter().map(|p| p.id()).collect();
                format!(
                    "Profile '{}' not found. Available profiles: {}",
                    input.trim(),
                    available.join(", ")
                )
            })
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Personal
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Personality overlay affecting response tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Character {
    Artemis,
    Corporate,
    StudyBuddy,
}

impl Character {
    pub const ALL: [Character; 3] = [
        Character::Artemis,
        Character::Corporate,
        Character::StudyBuddy,
    ];

    /// Wire id, as the backend expects it in `character_id`.
    pub fn id(self) -> &'static str {
        match self {
            Character::Artemis => "artemis",
            Character::Corporate => "corporate",
            Character::StudyBuddy => "study_buddy",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Character::Artemis => "Artemis",
            Character::Corporate => "Corporate Advisor",
            Character::StudyBuddy => "Study Buddy",
        }
    }

    pub fn parse(input: &str) -> Result<Self, String> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.id().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| {
                let available: Vec<&str> = Self::ALL.iter().map(|c| c.id()).collect();
                format!(
                    "Character '{}' not found. Available characters: {}",
                    input.trim(),
                    available.join(", ")
                )
            })
    }
}

impl Default for Character {
    fn default() -> Self {
        Character::Artemis
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Combined profile/character label shown in the status area.
pub fn display_label(profile: Profile, character: Character) -> String {
    format!("{} / {}", profile.display_name(), character.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_known_id() {
        for profile in Profile::ALL {
            assert_eq!(Profile::parse(profile.id()).expect("known id"), profile);
        }
        for character in Character::ALL {
            assert_eq!(
                Character::parse(character.id()).expect("known id"),
                character
            );
        }
    }

    #[test]
    fn parse_trims_and_ignores_case() {
        assert_eq!(
            Profile::parse("  Business ").expect("valid profile"),
            Profile::Business
        );
        assert_eq!(
            Character::parse("STUDY_BUDDY").expect("valid character"),
            Character::StudyBuddy
        );
    }

    #[test]
    fn parse_lists_valid_ids_on_failure() {
        let err = Profile::parse("gaming").expect_err("unknown profile");
        assert!(err.contains("personal"));
        assert!(err.contains("education"));
        let err = Character::parse("hal9000").expect_err("unknown character");
        assert!(err.contains("artemis"));
    }

    #[test]
    fn defaults_match_the_backend_bootstrap() {
        assert_eq!(Profile::default(), Profile::Personal);
        assert_eq!(Character::default(), Character::Artemis);
    }

    #[test]
    fn label_combines_both_display_names() {
        assert_eq!(
            display_label(Profile::Business, Character::Corporate),
            "Business Assistant / Corporate Advisor"
        );
    }
}
