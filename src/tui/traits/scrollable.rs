//! Scrollable content and item selection
//!
//! Components own a `ScrollState` and expose it here; the navigation
//! methods come for free.

use super::Component;
use crate::tui::scroll::ScrollState;

/// Trait for components with scrollable content
pub trait Scrollable: Component {
    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    // ─────────────────────────────────────────────────────────────
    // Navigation - default implementations delegate to ScrollState
    // ─────────────────────────────────────────────────────────────

    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }
}

/// Selection of whole items within scrollable content
///
/// With nothing selected, the first step in either direction selects the
/// newest item.
pub trait Selectable: Scrollable {
    fn selected_index(&self) -> Option<usize>;

    fn select(&mut self, index: usize);

    fn clear_selection(&mut self);

    fn item_count(&self) -> usize;

    fn select_next(&mut self) {
        match self.selected_index() {
            Some(current) if current + 1 < self.item_count() => self.select(current + 1),
            Some(_) => {}
            None if self.item_count() > 0 => self.select(self.item_count() - 1),
            None => {}
        }
    }

    fn select_previous(&mut self) {
        match self.selected_index() {
            Some(current) if current > 0 => self.select(current - 1),
            Some(_) => {}
            None if self.item_count() > 0 => self.select(self.item_count() - 1),
            None => {}
        }
    }
}
