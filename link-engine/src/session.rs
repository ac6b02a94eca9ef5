//! Per-user text collection sessions.
//!
//! [`SessionStore`] is an owned, injectable map from user id to [`CollectionSession`]. The map is a
//! [`DashMap`], so mutations are serialized per key (per shard) without a global lock.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use linkbot_core::{FileArtifact, TextSpan};
use tracing::{debug, info};

use crate::error::{EngineError, Result};
use crate::transform::extract_link_entries;

/// Collected entries and the target file name for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSession {
    entries: Vec<String>,
    file_name: String,
}

impl CollectionSession {
    fn new(user_id: i64, requested_name: Option<&str>) -> Self {
        let file_name = match requested_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => format!("{}.txt", name),
            None => format!("{}_extracted.txt", user_id),
        };
        Self {
            entries: Vec::new(),
            file_name,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    fn content(&self) -> String {
        self.entries.join("\n")
    }
}

/// Result of [`SessionStore::start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Started {
    pub file_name: String,
}

/// Result of [`SessionStore::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appended {
    /// Entries added by this call.
    pub added: usize,
    /// Entries in the session after this call.
    pub total: usize,
}

/// A session removed by [`SessionStore::finish`] together with its artifact.
///
/// Keep it until delivery succeeds; on failure, [`FinishedSession::restore_into`] puts the session
/// back so the user does not lose what they collected.
#[derive(Debug)]
pub struct FinishedSession {
    user_id: i64,
    session: CollectionSession,
    artifact: FileArtifact,
}

impl FinishedSession {
    pub fn artifact(&self) -> &FileArtifact {
        &self.artifact
    }

    pub fn into_artifact(self) -> FileArtifact {
        self.artifact
    }

    /// Reinserts the session unless the user already started a new one. Returns true when restored.
    pub fn restore_into(self, store: &SessionStore) -> bool {
        match store.sessions.entry(self.user_id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(self.session);
                info!(user_id = self.user_id, "collection session restored after failed delivery");
                true
            }
        }
    }
}

/// In-process store of collection sessions, at most one per user.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<i64, CollectionSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session for `user_id`.
    ///
    /// The file name is `{requested_name}.txt`, or `{user_id}_extracted.txt` when no name is given.
    /// An existing session is left untouched and [`EngineError::AlreadyActive`] is returned.
    pub fn start(&self, user_id: i64, requested_name: Option<&str>) -> Result<Started> {
        match self.sessions.entry(user_id) {
            Entry::Occupied(_) => Err(EngineError::AlreadyActive),
            Entry::Vacant(slot) => {
                let session = CollectionSession::new(user_id, requested_name);
                let file_name = session.file_name.clone();
                slot.insert(session);
                info!(user_id, file_name = %file_name, "collection session started");
                Ok(Started { file_name })
            }
        }
    }

    /// Adds a message to the user's session.
    ///
    /// Each hyperlink span contributes one `"{visible_text} : {url}"` entry; without hyperlinks the
    /// raw text is added as a single entry.
    pub fn append(&self, user_id: i64, text: &str, entities: &[TextSpan]) -> Result<Appended> {
        let mut session = self
            .sessions
            .get_mut(&user_id)
            .ok_or(EngineError::NoActiveSession)?;

        let links = extract_link_entries(text, entities);
        let added = if links.is_empty() {
            session.entries.push(text.to_string());
            1
        } else {
            let n = links.len();
            session.entries.extend(links);
            n
        };
        let total = session.entries.len();
        debug!(user_id, added, total, "collection session appended");
        Ok(Appended { added, total })
    }

    /// Removes the user's session and builds its artifact: entries joined by `\n`.
    ///
    /// Whitespace-only content is [`EngineError::EmptyContent`]; the session is discarded either way.
    pub fn finish(&self, user_id: i64) -> Result<FinishedSession> {
        let (_, session) = self
            .sessions
            .remove(&user_id)
            .ok_or(EngineError::NoActiveSession)?;

        let content = session.content();
        if content.trim().is_empty() {
            info!(user_id, "collection session finished without content");
            return Err(EngineError::EmptyContent);
        }

        info!(
            user_id,
            file_name = %session.file_name,
            entries = session.entries.len(),
            "collection session finished"
        );
        let artifact = FileArtifact::new(session.file_name.clone(), content);
        Ok(FinishedSession {
            user_id,
            session,
            artifact,
        })
    }

    /// Drops every session of every user.
    pub fn reset_all(&self) {
        let cleared = self.sessions.len();
        self.sessions.clear();
        info!(cleared, "all collection sessions reset");
    }

    pub fn is_active(&self, user_id: i64) -> bool {
        self.sessions.contains_key(&user_id)
    }

    /// Snapshot of a user's session.
    pub fn get(&self, user_id: i64) -> Option<CollectionSession> {
        self.sessions.get(&user_id).map(|s| s.value().clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_default_and_named_file() {
        let store = SessionStore::new();
        assert_eq!(store.start(7, None).unwrap().file_name, "7_extracted.txt");
        assert_eq!(store.start(8, Some("notes")).unwrap().file_name, "notes.txt");
        assert_eq!(store.start(9, Some("   ")).unwrap().file_name, "9_extracted.txt");
    }

    #[test]
    fn test_start_twice_keeps_first_session() {
        let store = SessionStore::new();
        store.start(1, Some("first")).unwrap();
        store.append(1, "kept", &[]).unwrap();

        assert_eq!(store.start(1, Some("second")), Err(EngineError::AlreadyActive));

        let session = store.get(1).unwrap();
        assert_eq!(session.file_name(), "first.txt");
        assert_eq!(session.entries(), ["kept".to_string()]);
    }

    #[test]
    fn test_finish_joins_entries_in_order() {
        let store = SessionStore::new();
        store.start(1, None).unwrap();
        for text in ["one", "two", "three"] {
            store.append(1, text, &[]).unwrap();
        }

        let finished = store.finish(1).unwrap();
        assert_eq!(finished.artifact().file_name, "1_extracted.txt");
        assert_eq!(finished.artifact().text(), Some("one\ntwo\nthree"));
        assert!(!store.is_active(1));
    }

    #[test]
    fn test_append_uses_hyperlinks_instead_of_raw_text() {
        let store = SessionStore::new();
        store.start(1, None).unwrap();
        let spans = vec![
            TextSpan::hyperlink(0, 5, "https://x.com/a"),
            TextSpan::hyperlink(6, 5, "https://x.com/b"),
        ];
        let appended = store.append(1, "Alpha Bravo", &spans).unwrap();
        assert_eq!(appended, Appended { added: 2, total: 2 });
        assert_eq!(
            store.finish(1).unwrap().artifact().text(),
            Some("Alpha : https://x.com/a\nBravo : https://x.com/b")
        );
    }

    #[test]
    fn test_append_without_session() {
        let store = SessionStore::new();
        assert_eq!(store.append(5, "hi", &[]), Err(EngineError::NoActiveSession));
    }

    #[test]
    fn test_finish_empty_content_discards_session() {
        let store = SessionStore::new();
        store.start(1, None).unwrap();
        store.append(1, "  ", &[]).unwrap();
        assert_eq!(store.finish(1).unwrap_err(), EngineError::EmptyContent);
        assert!(!store.is_active(1));
        assert_eq!(store.finish(1).unwrap_err(), EngineError::NoActiveSession);
    }

    #[test]
    fn test_reset_all_ends_every_session() {
        let store = SessionStore::new();
        for user in 1..=3 {
            store.start(user, None).unwrap();
            store.append(user, "x", &[]).unwrap();
        }
        store.reset_all();
        assert!(store.is_empty());
        for user in 1..=3 {
            assert_eq!(store.finish(user).unwrap_err(), EngineError::NoActiveSession);
        }
    }

    #[test]
    fn test_restore_after_failed_delivery() {
        let store = SessionStore::new();
        store.start(1, Some("keep")).unwrap();
        store.append(1, "line", &[]).unwrap();

        let finished = store.finish(1).unwrap();
        assert!(finished.restore_into(&store));

        let again = store.finish(1).unwrap();
        assert_eq!(again.artifact().file_name, "keep.txt");
        assert_eq!(again.artifact().text(), Some("line"));
    }

    #[test]
    fn test_restore_does_not_overwrite_new_session() {
        let store = SessionStore::new();
        store.start(1, Some("old")).unwrap();
        store.append(1, "old line", &[]).unwrap();
        let finished = store.finish(1).unwrap();

        store.start(1, Some("new")).unwrap();
        assert!(!finished.restore_into(&store));
        assert_eq!(store.get(1).unwrap().file_name(), "new.txt");
    }
}
