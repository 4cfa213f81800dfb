//! Core component trait
//!
//! Every panel that can be rendered implements `Component`.

use crate::chat::TurnState;
use crate::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Identifies a component for focus and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    Transcript,
    Logs,
    Input,
}

/// Immutable context passed to components during rendering
///
/// Components see the theme, focus and animation state, never the App.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (for spinners)
    pub animation_frame: usize,

    /// Whether replies are pending
    pub turn: TurnState,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        theme: &'a Theme,
        focus: ComponentId,
        animation_frame: usize,
        turn: TurnState,
    ) -> Self {
        Self {
            theme,
            focus,
            animation_frame,
            turn,
        }
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Spinner character for the current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Animated dots for the "thinking" indicator
    pub fn thinking_dots(&self) -> &'static str {
        const DOTS: [&str; 4] = ["", ".", "..", "..."];
        DOTS[self.animation_frame % DOTS.len()]
    }
}

/// Base trait for all UI components
pub trait Component {
    fn id(&self) -> ComponentId;

    /// Render into `area`
    ///
    /// Takes `&self`; anything that depends on the area size is synced by
    /// the view layer before this is called.
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_cycles() {
        let theme = Theme::default();
        let a = RenderContext::new(&theme, ComponentId::Input, 0, TurnState::Idle);
        let b = RenderContext::new(&theme, ComponentId::Input, 4, TurnState::Idle);
        assert_eq!(a.spinner_char(), b.spinner_char());
        assert_eq!(a.thinking_dots(), "");
        assert!(a.is_focused(ComponentId::Input));
        assert!(!a.is_focused(ComponentId::Logs));
    }
}
