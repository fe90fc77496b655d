//! The in-game message log.
//!
//! Append-only within a session; the UI layer renders and filters entries
//! by topic. Not persisted — the log is rebuilt as the player plays.

use serde::{Deserialize, Serialize};

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Standard,
    Injury,
    Danger,
}

/// Message topic, used by the UI to filter panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTopic {
    /// Narrative milestone events (achievement unlocks).
    Story,
    Event,
    Combat,
    Rebirth,
}

/// A single log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub level: LogLevel,
    pub topic: LogTopic,
    pub timestamp: i64,
}

/// Log service: collects user-facing messages from all game systems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogService {
    entries: Vec<LogEntry>,
}

impl LogService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_log_message(&mut self, message: impl Into<String>, level: LogLevel, topic: LogTopic) {
        self.entries.push(LogEntry {
            message: message.into(),
            level,
            topic,
            timestamp: chrono::Utc::now().timestamp(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Entries on the story topic, in arrival order.
    pub fn story_entries(&self) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.topic == LogTopic::Story)
            .collect()
    }
}
