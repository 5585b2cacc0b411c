//! Durable log store - one JSON record per line, append-only
//!
//! The file is the source of truth: appends reopen it in append mode and
//! queries re-read it, so a store constructed on an existing file sees every
//! record written before the process restart. Query semantics match
//! `MemoryLogStore` exactly.

use super::{LogEntry, LogStore, StoreError};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

/// File-backed store in JSON Lines format
#[derive(Debug, Clone)]
pub struct JsonlLogStore {
    path: PathBuf,
}

impl JsonlLogStore {
    /// Use (or create on first append) the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonlLogStore { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LogStore for JsonlLogStore {
    fn append(&mut self, entry: LogEntry) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(&entry)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    fn entries(&self, session: &str) -> Result<Vec<LogEntry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: LogEntry = serde_json::from_str(&line)?;
            if entry.session == session {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}
