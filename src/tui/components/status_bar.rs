// Status bar component
//
// Key hints for the focused panel on the left, message counts and theme on
// the right. Narrow terminals drop the right side.

use crate::tui::layout::Breakpoint;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Counts shown on the right of the status bar
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCounts {
    pub user: usize,
    pub bot: usize,
}

pub fn render(f: &mut Frame, area: Rect, ctx: &RenderContext, hint: &str, counts: StatusCounts) {
    let bp = Breakpoint::from_width(area.width);
    let theme = ctx.theme;

    let mut spans = vec![Span::styled(
        format!(" {}  F2:logs  ^C:quit", hint),
        Style::default().fg(theme.status_bar),
    )];

    if bp.at_least(Breakpoint::Wide) {
        spans.push(Span::styled(
            format!(
                "  │ you {} · bot {} │ {}",
                counts.user, counts.bot, theme.name
            ),
            Style::default().fg(theme.muted),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
