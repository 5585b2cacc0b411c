//! In-memory log store for short-lived sessions

use super::{LogEntry, LogStore, StoreError};

/// Vec-backed store; contents are lost when the value drops
#[derive(Debug, Clone, Default)]
pub struct MemoryLogStore {
    entries: Vec<LogEntry>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total record count across all sessions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LogStore for MemoryLogStore {
    fn append(&mut self, entry: LogEntry) -> Result<(), StoreError> {
        self.entries.push(entry);
        Ok(())
    }

    fn entries(&self, session: &str) -> Result<Vec<LogEntry>, StoreError> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.session == session)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{sample_entry, EventKind};

    #[test]
    fn test_appends_preserve_insertion_order() {
        let mut store = MemoryLogStore::new();
        store.append(sample_entry("s1", EventKind::Given)).unwrap();
        store.append(sample_entry("s1", EventKind::Taken)).unwrap();
        store.append(sample_entry("s1", EventKind::Healed)).unwrap();

        let kinds: Vec<EventKind> = store
            .entries("s1")
            .unwrap()
            .into_iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![EventKind::Given, EventKind::Taken, EventKind::Healed]
        );
    }

    #[test]
    fn test_queries_filter_by_session() {
        let mut store = MemoryLogStore::new();
        store.append(sample_entry("s1", EventKind::Given)).unwrap();
        store.append(sample_entry("s2", EventKind::Given)).unwrap();
        store.append(sample_entry("s1", EventKind::Taken)).unwrap();

        assert_eq!(store.entries("s1").unwrap().len(), 2);
        assert_eq!(store.entries("s2").unwrap().len(), 1);
        assert_eq!(store.given_events("s1").unwrap().len(), 1);
        assert!(store.entries("s3").unwrap().is_empty());
    }
}
