//! Copyable trait for components that provide clipboard content

use super::Component;

/// Trait for components that can provide text for the clipboard (`y`)
pub trait Copyable: Component {
    /// Text to copy, or `None` if there is nothing to copy
    fn copy_text(&self) -> Option<String>;

    /// What will be copied, for the toast
    fn copy_description(&self) -> String;
}

/// Result of a copy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    /// Successfully copied content
    Success { description: String },
    /// Nothing to copy (empty panel)
    Empty,
    /// Clipboard access failed
    Error,
}

impl CopyResult {
    pub fn toast_message(&self) -> String {
        match self {
            Self::Success { description } => format!("✓ Copied {}", description),
            Self::Empty => "Nothing to copy".to_string(),
            Self::Error => "✗ Failed to copy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_messages() {
        let ok = CopyResult::Success {
            description: "message".to_string(),
        };
        assert_eq!(ok.toast_message(), "✓ Copied message");
        assert_eq!(CopyResult::Error.toast_message(), "✗ Failed to copy");
        assert_eq!(CopyResult::Empty.toast_message(), "Nothing to copy");
    }
}
