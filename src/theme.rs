// Theme support for the TUI
//
// Three built-in palettes selected by name from config. "terminal" uses the
// terminal's ANSI palette and leaves the background alone; the named themes
// use true color (RGB).

use crate::chat::Sender;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Message colors, keyed by sender class
    pub user: Color,
    pub bot: Color,

    // Log level colors
    pub error: Color,
    pub warn: Color,
    pub info: Color,
    pub muted: Color,

    // UI element colors
    pub title: Color,
    pub status_bar: Color,
    pub border: Color,
    pub highlight: Color,
    pub button: Color,
    pub panel_logs: Color,

    // Selection pair (guaranteed contrast)
    pub selection: Color,
    pub selection_fg: Color,

    // Terminal colors
    pub background: Color,
    pub foreground: Color,

    pub border_type: BorderType,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Names accepted by `by_name`
    pub const NAMES: [&'static str; 3] = ["dark", "light", "terminal"];

    /// Load theme by name; unknown names fall back to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "terminal" => Self::terminal(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!(
                    "Unknown theme '{}' (expected one of: {}), using dark",
                    other,
                    Self::NAMES.join(", ")
                );
                Self::dark()
            }
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            user: Color::Rgb(0x8b, 0xe9, 0xfd),    // cyan
            bot: Color::Rgb(0x50, 0xfa, 0x7b),     // green
            error: Color::Rgb(0xff, 0x55, 0x55),   // red
            warn: Color::Rgb(0xf1, 0xfa, 0x8c),    // yellow
            info: Color::Rgb(0xbd, 0x93, 0xf9),    // purple
            muted: Color::Rgb(0x62, 0x72, 0xa4),   // comment
            title: Color::Rgb(0x8b, 0xe9, 0xfd),
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),
            border: Color::Rgb(0x62, 0x72, 0xa4),
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),
            button: Color::Rgb(0xff, 0x79, 0xc6),  // pink
            panel_logs: Color::Rgb(0x62, 0x72, 0xa4),
            selection: Color::Rgb(0x44, 0x47, 0x5a),
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            border_type: BorderType::Rounded,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            user: Color::Rgb(0x00, 0x5c, 0xc5),    // blue
            bot: Color::Rgb(0x11, 0x6f, 0x2a),     // green
            error: Color::Rgb(0xcf, 0x22, 0x2e),
            warn: Color::Rgb(0x9a, 0x67, 0x00),
            info: Color::Rgb(0x82, 0x50, 0xdf),
            muted: Color::Rgb(0x6e, 0x77, 0x81),
            title: Color::Rgb(0x00, 0x5c, 0xc5),
            status_bar: Color::Rgb(0x11, 0x6f, 0x2a),
            border: Color::Rgb(0xa0, 0xa7, 0xb0),
            highlight: Color::Rgb(0xbf, 0x39, 0x89),
            button: Color::Rgb(0xbf, 0x39, 0x89),
            panel_logs: Color::Rgb(0x6e, 0x77, 0x81),
            selection: Color::Rgb(0xdd, 0xf4, 0xff),
            selection_fg: Color::Rgb(0x1f, 0x23, 0x28),
            background: Color::Rgb(0xff, 0xff, 0xff),
            foreground: Color::Rgb(0x1f, 0x23, 0x28),
            border_type: BorderType::Plain,
        }
    }

    /// Uses the terminal's own palette
    pub fn terminal() -> Self {
        Self {
            name: "terminal".to_string(),
            user: Color::Cyan,
            bot: Color::Green,
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Blue,
            muted: Color::DarkGray,
            title: Color::Cyan,
            status_bar: Color::Green,
            border: Color::Gray,
            highlight: Color::Yellow,
            button: Color::Magenta,
            panel_logs: Color::DarkGray,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            background: Color::Reset,
            foreground: Color::Reset,
            border_type: BorderType::Plain,
        }
    }

    // ─── Style helpers ───────────────────────────────────────

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a message, keyed by its sender class
    pub fn sender_style(&self, sender: Sender) -> Style {
        match sender.css_class() {
            "user" => Style::default().fg(self.user),
            _ => Style::default().fg(self.bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("LIGHT").name, "light");
        assert_eq!(Theme::by_name("Terminal").name, "terminal");
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        assert_eq!(Theme::by_name("solarized").name, "dark");
    }

    #[test]
    fn every_listed_name_resolves_to_itself() {
        for name in Theme::NAMES {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }

    #[test]
    fn senders_get_distinct_styles() {
        let theme = Theme::dark();
        assert_ne!(
            theme.sender_style(Sender::User),
            theme.sender_style(Sender::Bot)
        );
    }
}
