//! Debug event log.
//!
//! A heapless ring buffer of recent panel events (screen switches, load
//! toggles, pack depletion). The simulator prints it on demand; a hardware
//! port could render it on a service screen.

use heapless::{Deque, String};

/// Maximum number of log lines kept.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line; longer messages are truncated.
pub const LOG_LINE_LENGTH: usize = 48;

/// Ring buffer of recent event messages. Oldest entries are dropped when full.
pub struct EventLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl EventLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self { buffer: Deque::new() }
    }

    /// Push an event message, dropping the oldest entry if the buffer is full.
    pub fn push(&mut self, msg: &str) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars().take(LOG_LINE_LENGTH - 1) {
            line.push(c).ok();
        }

        self.buffer.push_back(line).ok();
    }

    /// Iterate over messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(|s| s.as_str())
    }

    /// Number of buffered messages.
    #[inline]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True if no messages are buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
