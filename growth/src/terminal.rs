//! Rolling log shown in the configuration terminal panel.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::modules::Module;

/// Entries kept on screen; older lines scroll away.
pub const TERMINAL_CAPACITY: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique within one log; used as the render key.
    pub id: u64,
    pub level: LogLevel,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalLog {
    entries: VecDeque<LogEntry>,
    next_id: u64,
}

impl Default for TerminalLog {
    fn default() -> Self {
        let mut log = Self { entries: VecDeque::with_capacity(TERMINAL_CAPACITY), next_id: 0 };
        log.push(LogLevel::Info, "System initialized...");
        log.push(LogLevel::Info, "Waiting for user configuration...");
        log
    }
}

impl TerminalLog {
    /// Append a line, evicting the oldest beyond [`TERMINAL_CAPACITY`].
    pub fn push(&mut self, level: LogLevel, text: impl Into<String>) {
        if self.entries.len() == TERMINAL_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry { id: self.next_id, level, text: text.into() });
        self.next_id += 1;
    }

    /// Log the result of flipping `module` to `active`.
    pub fn record_toggle(&mut self, module: Module, active: bool) {
        if active {
            self.push(LogLevel::Success, module.activation_message());
        } else {
            self.push(LogLevel::Warning, module.deactivation_message());
        }
    }

    /// Oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
