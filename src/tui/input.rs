// Single-line text input
//
// Holds the text being composed and a cursor (in chars). Rendering scrolls
// horizontally so the cursor stays visible; widths are measured in terminal
// cells so wide characters line up.

use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const PLACEHOLDER: &str = "Ask about skills, experience, or certifications";

/// Editable input field
#[derive(Debug, Default)]
pub struct InputField {
    buffer: String,
    /// Cursor position in chars (0..=char_count)
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of a char index
    fn byte_index(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.buffer.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.buffer.remove(idx);
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.buffer.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Slice of the text that fits in `width` cells with the cursor visible
    ///
    /// Returns the visible text and the cursor column within it.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        let chars: Vec<char> = self.buffer.chars().collect();
        let width = width.max(1);

        // Walk back from the cursor until the cursor cell no longer fits
        let mut start = self.cursor;
        let mut used = 1; // the cursor cell itself
        while start > 0 {
            let w = chars[start - 1].width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }

        let cursor_col: usize = chars[start..self.cursor]
            .iter()
            .map(|c| c.width().unwrap_or(0))
            .sum();

        let mut visible = String::new();
        let mut cols = 0;
        for c in &chars[start..] {
            let w = c.width().unwrap_or(0);
            if cols + w > width {
                break;
            }
            cols += w;
            visible.push(*c);
        }

        (visible, cursor_col)
    }
}

impl Component for InputField {
    fn id(&self) -> ComponentId {
        ComponentId::Input
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(ctx.theme.border_style(focused))
            .title(" Message ");

        let inner = block.inner(area);
        let (visible, cursor_col) = self.visible_window(inner.width as usize);

        let line = if self.is_empty() && !focused {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(ctx.theme.muted)))
        } else {
            Line::from(Span::styled(visible, Style::default().fg(ctx.theme.foreground)))
        };

        f.render_widget(Paragraph::new(line).block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            f.set_cursor_position((inner.x + cursor_col as u16, inner.y));
        }
    }
}

impl Interactive for InputField {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char('a') if ctrl => self.move_home(),
            KeyCode::Char('e') if ctrl => self.move_end(),
            KeyCode::Char(_) if ctrl => return Handled::No,
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("Enter:send  ↑↓:scroll  Tab:focus  Esc:stop/quit")
    }
}
