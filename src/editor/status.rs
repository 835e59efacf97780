//! Bounded status history backing the status bar.
//!
//! Every user-visible outcome (copies, pastes, rejections, parenting) lands
//! here as a short line and is mirrored to the tracing log.

use bevy::prelude::*;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

use crate::constants::STATUS_LOG_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct StatusEntry {
    pub time: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Resource, Default)]
pub struct StatusLog {
    entries: VecDeque<StatusEntry>,
}

impl StatusLog {
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.push(StatusKind::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.push(StatusKind::Warning, message);
    }

    fn push(&mut self, kind: StatusKind, message: String) {
        if self.entries.len() >= STATUS_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(StatusEntry {
            time: Local::now(),
            kind,
            message,
        });
    }

    pub fn latest(&self) -> Option<&StatusEntry> {
        self.entries.back()
    }

    /// Entries newest first, for the history window.
    pub fn iter_recent(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter().rev()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_most_recent() {
        let mut log = StatusLog::default();
        log.info("first");
        log.warn("second");

        let latest = log.latest().unwrap();
        assert_eq!(latest.message, "second");
        assert_eq!(latest.kind, StatusKind::Warning);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = StatusLog::default();
        for i in 0..(STATUS_LOG_CAPACITY + 5) {
            log.info(format!("entry {}", i));
        }

        assert_eq!(log.iter_recent().count(), STATUS_LOG_CAPACITY);
        // Oldest surviving entry is the sixth pushed
        let oldest = log.iter_recent().last().unwrap();
        assert_eq!(oldest.message, "entry 5");
    }

    #[test]
    fn test_iter_recent_is_newest_first() {
        let mut log = StatusLog::default();
        log.info("a");
        log.info("b");
        log.info("c");

        let messages: Vec<_> = log.iter_recent().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["c", "b", "a"]);
    }
}
