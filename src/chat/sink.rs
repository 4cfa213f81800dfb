//! Display sink - where a session shows its messages
//!
//! The session owns the authoritative `MessageLog`; a sink is told about each
//! append so it can render it (transcript panel, stdout, test recorder).

use super::message::ChatMessage;

/// Rendering capability injected into a `ChatSession`
pub trait DisplaySink {
    /// Show a newly appended message; the view should bring it into sight
    fn show(&mut self, message: &ChatMessage);
}

/// Sink that records what it was shown, in order
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub shown: Vec<ChatMessage>,
}

#[cfg(test)]
impl DisplaySink for RecordingSink {
    fn show(&mut self, message: &ChatMessage) {
        self.shown.push(message.clone());
    }
}
