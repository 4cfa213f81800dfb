// Input bar component
//
// The input field with a clickable Send button to its right. Returns the
// button's area so mouse clicks can be hit-tested against it.

use crate::tui::input::InputField;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const SEND_LABEL: &str = "[ Send ]";

/// Button width: label plus borders
const BUTTON_WIDTH: u16 = SEND_LABEL.len() as u16 + 2;

/// Split the bar into (field, button) areas
pub fn split(area: Rect) -> (Rect, Rect) {
    let [field, button] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(BUTTON_WIDTH)]).areas(area);
    (field, button)
}

/// Whether a click at (column, row) lands on the button
pub fn hits(button: Rect, column: u16, row: u16) -> bool {
    button.contains(Position::new(column, row))
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    input: &InputField,
    can_send: bool,
) -> Rect {
    let (field_area, button_area) = split(area);

    input.render(f, field_area, ctx);

    let style = if can_send {
        Style::default()
            .fg(ctx.theme.button)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ctx.theme.muted)
    };

    let button = Paragraph::new(SEND_LABEL)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(style),
        );
    f.render_widget(button, button_area);

    button_area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_takes_the_right_edge() {
        let area = Rect::new(0, 20, 80, 3);
        let (field, button) = split(area);
        assert_eq!(button.width, 10);
        assert_eq!(button.x, 70);
        assert_eq!(field.width, 70);
    }

    #[test]
    fn hit_testing() {
        let (_, button) = split(Rect::new(0, 20, 80, 3));
        assert!(hits(button, 75, 21));
        assert!(!hits(button, 10, 21));
        assert!(!hits(button, 75, 23));
    }
}
