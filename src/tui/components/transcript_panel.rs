//! Transcript panel component
//!
//! The TUI's `DisplaySink`: the session hands it every message as it enters
//! the log, and the panel keeps its own copy for rendering. Each message is
//! wrapped to the panel width and labelled with its sender class.
//!
//! Scrolling is by rendered line; selection is by whole message.

use super::formatters::wrap_text;
use super::scrollbar::render_scrollbar;
use crate::chat::{ChatMessage, DisplaySink};
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable,
    ScrollableInteractive, Selectable,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the "user │ " gutter
const GUTTER: usize = 7;

/// One wrapped line of the transcript
#[derive(Debug, Clone)]
struct RenderedLine {
    message: usize,
    first: bool,
    text: String,
}

pub struct TranscriptPanel {
    messages: Vec<ChatMessage>,
    scroll: ScrollState,

    /// Selected message index (None = follow mode)
    selected: Option<usize>,

    /// Wrapped lines from the last sync
    lines: Vec<RenderedLine>,

    /// Scroll the selection into view on the next sync
    reveal_selection: bool,
}

impl TranscriptPanel {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            scroll: ScrollState::new(),
            selected: None,
            lines: Vec::new(),
            reveal_selection: false,
        }
    }

    #[cfg(test)]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Re-wrap for the current panel size (call each frame before render)
    pub fn sync(&mut self, width: usize, height: usize) {
        let text_width = width.saturating_sub(GUTTER).max(1);

        self.lines.clear();
        for (idx, message) in self.messages.iter().enumerate() {
            for (n, text) in wrap_text(&message.text, text_width).into_iter().enumerate() {
                self.lines.push(RenderedLine {
                    message: idx,
                    first: n == 0,
                    text,
                });
            }
        }

        self.scroll.update_dimensions(self.lines.len(), height);

        if std::mem::take(&mut self.reveal_selection) {
            if let Some(selected) = self.selected {
                if let Some(start) = self.lines.iter().position(|l| l.message == selected) {
                    let len = self.lines[start..]
                        .iter()
                        .take_while(|l| l.message == selected)
                        .count();
                    self.scroll.ensure_visible(start, len);
                }
            }
        }
    }

    pub fn selected_message(&self) -> Option<&ChatMessage> {
        self.selected.and_then(|idx| self.messages.get(idx))
    }
}

impl Default for TranscriptPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for TranscriptPanel {
    fn show(&mut self, message: &ChatMessage) {
        self.messages.push(message.clone());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for TranscriptPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Transcript
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let title = if self.selected.is_some() && focused {
            " Chat [select] "
        } else if self.scroll.auto_follow {
            " Chat "
        } else {
            " Chat [scroll] "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(title)
            .title_bottom(Line::from(format!(" {} ", self.messages.len())).right_aligned());

        if self.messages.is_empty() {
            let hint = Paragraph::new(Line::from(Span::styled(
                " Try: what skills do you have?",
                Style::default().fg(theme.muted),
            )))
            .block(block);
            f.render_widget(hint, area);
            return;
        }

        let (start, end) = self.scroll.visible_range();
        let lines: Vec<Line> = self.lines[start..end]
            .iter()
            .map(|line| {
                let message = &self.messages[line.message];
                let sender_style = theme.sender_style(message.sender);

                let gutter = if line.first {
                    format!("{:>4} │ ", message.sender.css_class())
                } else {
                    format!("{:>4} │ ", "")
                };

                let text_style = if focused && self.selected == Some(line.message) {
                    theme.selected_style()
                } else {
                    sender_style
                };

                Line::from(vec![
                    Span::styled(gutter, sender_style.add_modifier(Modifier::BOLD)),
                    Span::styled(line.text.clone(), text_style),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
        render_scrollbar(f, area, &self.scroll);
    }
}

impl Scrollable for TranscriptPanel {
    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for TranscriptPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index.min(self.messages.len().saturating_sub(1)));
        self.reveal_selection = true;
    }

    fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn item_count(&self) -> usize {
        self.messages.len()
    }
}

impl Copyable for TranscriptPanel {
    /// Selected message, or the newest one when nothing is selected
    fn copy_text(&self) -> Option<String> {
        self.selected_message()
            .or_else(|| self.messages.last())
            .map(|m| m.text.clone())
    }

    fn copy_description(&self) -> String {
        match self.selected_message().or_else(|| self.messages.last()) {
            Some(m) => format!("{} message", m.sender.css_class()),
            None => "message".to_string(),
        }
    }
}

impl Interactive for TranscriptPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  PgUp/PgDn:scroll  y:copy  x:stop reply  Esc:clear")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::SubmissionId;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn panel_with(texts: &[&str]) -> TranscriptPanel {
        let mut panel = TranscriptPanel::new();
        for (i, text) in texts.iter().enumerate() {
            let id = SubmissionId(i as u64 / 2 + 1);
            let msg = if i % 2 == 0 {
                ChatMessage::user(id, *text)
            } else {
                ChatMessage::bot(id, *text)
            };
            panel.show(&msg);
        }
        panel
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn shown_messages_are_kept_in_order() {
        let panel = panel_with(&["skills", "My key skills include: Docker"]);
        let texts: Vec<_> = panel.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["skills", "My key skills include: Docker"]);
    }

    #[test]
    fn sync_wraps_and_follows_newest() {
        let mut panel = panel_with(&["a", "one two three four five six"]);
        // 7-cell gutter leaves 10 cells of text
        panel.sync(17, 2);
        assert_eq!(panel.lines.len(), 4);
        assert_eq!(panel.scroll.visible_range(), (2, 4));
        assert!(panel.scroll.auto_follow);
    }

    #[test]
    fn first_up_selects_newest_message() {
        let mut panel = panel_with(&["q1", "a1", "q2"]);
        assert_eq!(panel.handle_key(key(KeyCode::Up)), Handled::Yes);
        assert_eq!(panel.selected_index(), Some(2));
        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected_index(), Some(1));
        panel.handle_key(key(KeyCode::Down));
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.selected_index(), Some(2));
    }

    #[test]
    fn selection_is_scrolled_into_view() {
        let mut panel = panel_with(&["q1", "a1", "q2", "a2", "q3"]);
        panel.sync(40, 2);
        assert_eq!(panel.scroll.offset(), 3);

        panel.select(0);
        panel.sync(40, 2);
        assert_eq!(panel.scroll.offset(), 0);
        assert!(!panel.scroll.auto_follow);
    }

    #[test]
    fn esc_clears_selection_then_bubbles() {
        let mut panel = panel_with(&["q1"]);
        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::Yes);
        assert_eq!(panel.selected_index(), None);
        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::No);
    }

    #[test]
    fn copy_prefers_selection_then_newest() {
        let mut panel = panel_with(&["q1", "a1"]);
        assert_eq!(panel.copy_text().as_deref(), Some("a1"));
        assert_eq!(panel.copy_description(), "bot message");

        panel.select(0);
        assert_eq!(panel.copy_text().as_deref(), Some("q1"));
        assert_eq!(panel.copy_description(), "user message");
    }

    #[test]
    fn empty_panel_has_nothing_to_copy() {
        let panel = TranscriptPanel::new();
        assert_eq!(panel.copy_text(), None);
    }
}
