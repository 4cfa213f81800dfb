//! Feature flags configuration
//!
//! Toggles for optional TUI behavior.

use serde::Deserialize;

/// Feature flags for optional TUI behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    /// Show the system logs panel at startup (F2 toggles it at runtime)
    pub logs_panel: bool,

    /// Capture the mouse: Send button clicks and wheel scrolling
    pub mouse: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            logs_panel: false,
            mouse: true,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub logs_panel: Option<bool>,
    pub mouse: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            logs_panel: file.logs_panel.unwrap_or(defaults.logs_panel),
            mouse: file.mouse.unwrap_or(defaults.mouse),
        }
    }
}
