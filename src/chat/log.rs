// Append-only message log
//
// Order is chronological: entries are only ever pushed to the end.

use super::message::{ChatMessage, Sender};

#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: ChatMessage) -> &ChatMessage {
        self.entries.push(message);
        &self.entries[self.entries.len() - 1]
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries from the given sender
    pub fn count_from(&self, sender: Sender) -> usize {
        self.entries.iter().filter(|m| m.sender == sender).count()
    }
}
