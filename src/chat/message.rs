// Chat messages as they appear in the log
//
// A message is created on each submit (user) or reply delivery (bot) and is
// owned by the MessageLog from then on.

use chrono::{DateTime, Utc};
use std::fmt;

/// Identifies one submission; its user message and bot reply share it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Style tag used by the front ends ("user" / "bot")
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// A single entry in the message log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: SubmissionId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(id: SubmissionId, text: impl Into<String>) -> Self {
        Self::new(id, text, Sender::User)
    }

    pub fn bot(id: SubmissionId, text: impl Into<String>) -> Self {
        Self::new(id, text, Sender::Bot)
    }

    fn new(id: SubmissionId, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    /// One-line rendering for clipboard and headless output
    pub fn to_line(&self) -> String {
        format!("{}: {}", self.sender.css_class(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_class_matches_style_tags() {
        assert_eq!(Sender::User.css_class(), "user");
        assert_eq!(Sender::Bot.css_class(), "bot");
    }

    #[test]
    fn to_line_prefixes_sender_class() {
        let msg = ChatMessage::bot(SubmissionId(3), "hi");
        assert_eq!(msg.to_line(), "bot: hi");
        assert_eq!(msg.id.to_string(), "#3");
    }
}
