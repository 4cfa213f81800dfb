//! Logs panel component
//!
//! Shows the tracing events captured by `TuiLogLayer`. Hidden by default;
//! F2 toggles it. Holds a handle to the shared `LogBuffer` and snapshots it
//! on each sync.

use super::formatters::truncate;
use super::scrollbar::render_scrollbar;
use crate::logging::{LogBuffer, LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable,
    ScrollableInteractive, Selectable,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    buffer: LogBuffer,

    /// Snapshot from the last sync
    entries: Vec<LogEntry>,

    scroll: ScrollState,

    /// Selected entry index (None = auto-follow mode)
    selected: Option<usize>,

    /// Width available for entry text
    width: usize,
}

impl LogsPanel {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            entries: Vec::new(),
            scroll: ScrollState::new(),
            selected: None,
            width: 0,
        }
    }

    /// Snapshot the buffer and size the viewport (call each frame)
    pub fn sync(&mut self, width: usize, height: usize) {
        self.entries = self.buffer.get_all();
        self.width = width;
        self.scroll.update_dimensions(self.entries.len(), height);

        // The ring buffer may have evicted the selected entry
        if let Some(idx) = self.selected {
            if idx >= self.entries.len() {
                self.selected = self.entries.len().checked_sub(1);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = self.entries[start..end.min(self.entries.len())]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if focused && self.selected == Some(start + i) {
                    theme.selected_style()
                } else {
                    log_level_style(entry.level, theme)
                };
                ListItem::new(truncate(&format_log_entry(entry), self.width)).style(style)
            })
            .collect();

        let border_style = if focused {
            Style::default().fg(theme.panel_logs)
        } else {
            theme.border_style(false)
        };

        let title = if self.selected.is_some() && focused {
            " System Logs [select] "
        } else if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(border_style)
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll);
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for LogsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        let index = index.min(self.entries.len().saturating_sub(1));
        self.selected = Some(index);
        self.scroll.ensure_visible(index, 1);
    }

    fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn item_count(&self) -> usize {
        self.entries.len()
    }
}

impl Copyable for LogsPanel {
    fn copy_text(&self) -> Option<String> {
        self.selected
            .or_else(|| self.entries.len().checked_sub(1))
            .and_then(|idx| self.entries.get(idx))
            .map(format_log_entry)
    }

    fn copy_description(&self) -> String {
        "log entry".to_string()
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  y:copy  Esc:clear  F2:hide")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ═══════════════════════════════════════════════════════════════════════════

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.warn),
        LogLevel::Info => Style::default().fg(theme.info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn panel_with(messages: &[&str]) -> LogsPanel {
        let buffer = LogBuffer::new();
        for message in messages {
            buffer.add(LogEntry {
                timestamp: Utc::now(),
                level: LogLevel::Info,
                message: message.to_string(),
            });
        }
        let mut panel = LogsPanel::new(buffer);
        panel.sync(80, 10);
        panel
    }

    #[test]
    fn copy_uses_newest_entry_without_selection() {
        let panel = panel_with(&["first", "second"]);
        let text = panel.copy_text().unwrap();
        assert!(text.ends_with("INFO  second"), "{}", text);
    }

    #[test]
    fn selection_navigates_entries() {
        let mut panel = panel_with(&["a", "b", "c"]);
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        panel.handle_key(up);
        panel.handle_key(up);
        assert_eq!(panel.selected_index(), Some(1));
        assert!(panel.copy_text().unwrap().ends_with(" b"));
    }

    #[test]
    fn sync_picks_up_new_entries() {
        let mut panel = panel_with(&[]);
        assert_eq!(panel.item_count(), 0);
        panel.buffer.add(LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Error,
            message: "boom".to_string(),
        });
        panel.sync(80, 10);
        assert_eq!(panel.item_count(), 1);
    }
}
