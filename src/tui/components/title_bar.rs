// Title bar component
//
// App name, reply indicator while the bot is "thinking", and the profile
// summary on the right.

use crate::chat::TurnState;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Indicator text for the current turn state
pub fn turn_indicator(ctx: &RenderContext) -> String {
    match ctx.turn {
        TurnState::Idle => String::new(),
        TurnState::PendingBotReply { pending: 1 } => {
            format!(" {} thinking{}", ctx.spinner_char(), ctx.thinking_dots())
        }
        TurnState::PendingBotReply { pending } => format!(
            " {} thinking{} ({} queued)",
            ctx.spinner_char(),
            ctx.thinking_dots(),
            pending
        ),
    }
}

pub fn render(f: &mut Frame, area: Rect, ctx: &RenderContext, profile_summary: &str) {
    let title_text = format!(" 💬 folio{}", turn_indicator(ctx));

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(ctx.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(Style::default().fg(ctx.theme.title))
                .title_top(Line::from(format!(" {} ", profile_summary)).right_aligned()),
        );

    f.render_widget(title, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::tui::traits::ComponentId;

    #[test]
    fn idle_shows_no_indicator() {
        let theme = Theme::default();
        let ctx = RenderContext::new(&theme, ComponentId::Input, 0, TurnState::Idle);
        assert_eq!(turn_indicator(&ctx), "");
    }

    #[test]
    fn pending_shows_spinner_and_queue_depth() {
        let theme = Theme::default();
        let one = RenderContext::new(
            &theme,
            ComponentId::Input,
            0,
            TurnState::PendingBotReply { pending: 1 },
        );
        assert_eq!(turn_indicator(&one), " ◐ thinking");

        let three = RenderContext::new(
            &theme,
            ComponentId::Input,
            1,
            TurnState::PendingBotReply { pending: 3 },
        );
        assert_eq!(turn_indicator(&three), " ◓ thinking. (3 queued)");
    }
}
