//! Interactive trait for components that handle keyboard input
//!
//! ```text
//! KeyEvent
//!    │
//!    ▼
//! App (global keys: Ctrl+C, Enter, Tab, F2, Esc)
//!    │
//!    │ if not handled
//!    ▼
//! Focused component (via Interactive)
//!    │
//!    │ Handled::Yes or Handled::No
//!    ▼
//! App (fallback)
//! ```

use super::{Component, Selectable};
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for components that handle keyboard input
pub trait Interactive: Component {
    /// Returns `Handled::Yes` if the component consumed the event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Key hints for the status bar while this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}

/// Standard navigation for selectable, scrollable panels
///
/// ↑/↓ move the selection; PgUp/PgDn/Home/End move the view. Esc clears the
/// selection and hands the key back when there was nothing to clear.
pub trait ScrollableInteractive: Interactive + Selectable {
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::Home => {
                self.scroll_to_top();
                Handled::Yes
            }
            KeyCode::End => {
                self.clear_selection();
                self.scroll_to_bottom();
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.page_up();
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.page_down();
                Handled::Yes
            }
            KeyCode::Esc if self.selected_index().is_some() => {
                self.clear_selection();
                self.scroll_to_bottom();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }
}

impl<T: Interactive + Selectable> ScrollableInteractive for T {}
