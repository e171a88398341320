use std::io;
use std::path::Path;

/// Per-session committed text plus the uncommitted staging buffer.
///
/// Editor change events only ever `stage`; the committed value that feeds
/// the chart moves on an explicit `commit` (the "Apply changes" action).
pub struct SessionStore {
    committed: String,
    staged: Option<String>,
    commit_count: u64,
}

impl SessionStore {
    pub fn new(committed: impl Into<String>) -> Self {
        Self {
            committed: committed.into(),
            staged: None,
            commit_count: 0,
        }
    }

    /// Loads the bundled default payload. Called once at session start; a
    /// missing file is surfaced by the caller as a startup error.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let committed = std::fs::read_to_string(path)?;
        Ok(Self::new(committed))
    }

    pub fn get(&self) -> &str {
        &self.committed
    }

    /// Records the latest editor content without touching the committed
    /// value. Called on every change event; last write wins.
    pub fn stage(&mut self, text: impl Into<String>) {
        self.staged = Some(text.into());
    }

    pub fn has_staged(&self) -> bool {
        self.staged.is_some()
    }

    /// Replaces the committed value with the most recently staged buffer.
    /// The text is not validated here: invalid JSON still commits, and the
    /// chart feed reports the parse failure on its own surface.
    pub fn commit(&mut self) -> bool {
        let Some(staged) = self.staged.take() else {
            return false;
        };
        self.committed = staged;
        self.commit_count = self.commit_count.wrapping_add(1);
        true
    }

    /// Drops the pending buffer, e.g. when the user navigates away from
    /// the dashboard before applying.
    pub fn discard_staged(&mut self) {
        self.staged = None;
    }

    pub fn commit_count(&self) -> u64 {
        self.commit_count
    }
}

#[cfg(test)]
mod tests {
    use super::SessionStore;

    #[test]
    fn initial_value_matches_payload_file_exactly() {
        let path = std::env::temp_dir().join("paneboard-session-initial.json");
        let payload = "[{\"id\": \"Serie 1\", \"data\": []}]\n";
        std::fs::write(&path, payload).unwrap();

        let session = SessionStore::from_file(&path).unwrap();
        assert_eq!(session.get(), payload);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_payload_file_is_an_error() {
        let path = std::env::temp_dir().join("paneboard-session-missing.json");
        let _ = std::fs::remove_file(&path);
        assert!(SessionStore::from_file(&path).is_err());
    }

    #[test]
    fn staging_does_not_commit() {
        let mut session = SessionStore::new("initial");
        session.stage("t1");
        session.stage("t2");
        session.stage("t3");
        assert_eq!(session.get(), "initial");
        assert_eq!(session.commit_count(), 0);
    }

    #[test]
    fn commit_applies_last_staged() {
        let mut session = SessionStore::new("initial");
        session.stage("A");
        session.stage("B");
        assert!(session.commit());
        assert_eq!(session.get(), "B");
    }

    #[test]
    fn commit_without_staged_is_a_noop() {
        let mut session = SessionStore::new("initial");
        assert!(!session.commit());
        assert_eq!(session.get(), "initial");
        assert_eq!(session.commit_count(), 0);
    }

    #[test]
    fn commit_does_not_validate_json() {
        let mut session = SessionStore::new("[]");
        session.stage("{not valid json");
        assert!(session.commit());
        assert_eq!(session.get(), "{not valid json");
    }

    #[test]
    fn discard_staged_keeps_committed_value() {
        let mut session = SessionStore::new("initial");
        session.stage("draft");
        session.discard_staged();
        assert!(!session.commit());
        assert_eq!(session.get(), "initial");
    }
}
