//! The conversation log store and its persisted snapshot.
//!
//! The store owns the ordered turn sequence. Persistence is a full overwrite
//! of one JSON snapshot holding the semantic turns (sender, text, RFC 3339
//! timestamp); rendering is re-done by the presenter on restore. A snapshot
//! that cannot be decoded is discarded with a log line, never an error: an
//! empty transcript is always a valid starting state.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::core::message::Turn;

const SNAPSHOT_FILE: &str = "transcript.json";

pub struct TranscriptStore {
    turns: Vec<Turn>,
    path: PathBuf,
}

impl TranscriptStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            turns: Vec::new(),
            path,
        }
    }

    pub fn at_default_path() -> Self {
        Self::new(Self::default_snapshot_path())
    }

    fn default_snapshot_path() -> PathBuf {
        let proj_dirs = ProjectDirs::from("org", "artemis-assistant", "artemis-chat")
            .expect("Failed to determine data directory");
        proj_dirs.data_dir().join(SNAPSHOT_FILE)
    }

    /// Load the persisted snapshot, if any. Best-effort: a missing file is a
    /// fresh start and a corrupt one is discarded.
    pub fn restore(&mut self) {
        self.turns.clear();
        if !self.path.exists() {
            return;
        }
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("could not read transcript snapshot: {e}");
                return;
            }
        };
        match serde_json::from_str::<Vec<Turn>>(&contents) {
            Ok(turns) => self.turns = turns,
            Err(e) => {
                tracing::warn!("discarding corrupt transcript snapshot: {e}");
            }
        }
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Overwrite the snapshot with the full current turn sequence.
    pub fn persist(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.turns)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Empty the in-memory transcript and erase the snapshot.
    pub fn clear(&mut self) {
        self.turns.clear();
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("could not remove transcript snapshot: {e}");
            }
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Sender;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> TranscriptStore {
        TranscriptStore::new(dir.path().join(SNAPSHOT_FILE))
    }

    #[test]
    fn persist_then_restore_reproduces_the_transcript() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut store = store_in(&dir);
        store.append(Turn::user("Hello, my name is John"));
        store.append(Turn::assistant("Hello! How can I help you today?"));
        store.persist().expect("Failed to persist transcript");

        let mut restored = store_in(&dir);
        restored.restore();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.turns()[0].sender, Sender::User);
        assert_eq!(restored.turns()[0].text, "Hello, my name is John");
        assert_eq!(restored.turns()[1].sender, Sender::Assistant);
        assert_eq!(
            restored.turns()[0].timestamp,
            store.turns()[0].timestamp,
            "timestamps survive the round trip"
        );
    }

    #[test]
    fn missing_snapshot_restores_to_empty() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut store = store_in(&dir);
        store.restore();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_snapshot_is_discarded_without_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(SNAPSHOT_FILE);
        fs::write(&path, "{not json").expect("Failed to write snapshot");

        let mut store = TranscriptStore::new(path);
        store.restore();
        assert!(store.is_empty());
    }

    #[test]
    fn snapshot_with_unknown_sender_is_discarded() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(SNAPSHOT_FILE);
        fs::write(
            &path,
            r#"[{"sender":"system","text":"x","timestamp":"2026-01-01T00:00:00Z"}]"#,
        )
        .expect("Failed to write snapshot");

        let mut store = TranscriptStore::new(path);
        store.restore();
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties_memory_and_removes_the_snapshot() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut store = store_in(&dir);
        store.append(Turn::user("hello"));
        store.persist().expect("Failed to persist transcript");
        assert!(dir.path().join(SNAPSHOT_FILE).exists());

        store.clear();
        assert!(store.is_empty());
        assert!(!dir.path().join(SNAPSHOT_FILE).exists());

        let mut restored = store_in(&dir);
        restored.restore();
        assert!(restored.is_empty(), "restore after clear yields empty");
    }

    #[test]
    fn clear_on_a_never_persisted_store_is_quiet() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut store = store_in(&dir);
        store.append(Turn::user("hello"));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn persist_overwrites_the_previous_snapshot() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut store = store_in(&dir);
        store.append(Turn::user("first"));
        store.persist().expect("Failed to persist transcript");
        store.append(Turn::assistant("second"));
        store.persist().expect("Failed to persist transcript");

        let mut restored = store_in(&dir);
        restored.restore();
        assert_eq!(restored.len(), 2);
    }
}
