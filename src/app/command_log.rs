//! Ringpuffer der zuletzt ausgeführten Commands.
//!
//! Der Skript-Runner schreibt daraus den letzten Command ins Debug-Log,
//! die Controller-Flow-Tests prüfen darüber die Command-Folge eines Intents.

use super::AppCommand;
use std::collections::VecDeque;

/// Anzahl der Commands, die das Log höchstens vorhält.
pub const COMMAND_LOG_CAPACITY: usize = 256;

/// Die jüngsten Commands, älteste zuerst, plus Gesamtzähler.
#[derive(Debug, Clone)]
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    capacity: usize,
    total: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(COMMAND_LOG_CAPACITY)
    }
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log mit eigener Kapazität (mindestens ein Eintrag).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            recent: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    /// Hängt einen Command an; bei voller Kapazität fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl der vorgehaltenen Commands.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Alle jemals aufgezeichneten Commands, auch bereits verdrängte.
    pub fn total_recorded(&self) -> u64 {
        self.total
    }

    /// Vorgehaltene Commands, ältester zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> + '_ {
        self.recent.iter()
    }

    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }
}
