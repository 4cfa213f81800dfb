// Scroll state shared by the TUI panels
//
// Each panel owns its ScrollState; App only routes input. Offsets and sizes
// are in rendered lines.
//
// Auto-follow keeps the view pinned to the newest content. Scrolling up
// disables it; reaching the bottom again re-enables it.

/// Scroll state for a single panel
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Line index at the top of the viewport
    offset: usize,

    /// Total number of lines in content
    total: usize,

    /// Number of lines visible in the viewport
    viewport: usize,

    /// Whether new content keeps the view at the bottom
    pub auto_follow: bool,
}

impl ScrollState {
    /// Create new scroll state with auto-follow enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// Scroll up by one line
    /// Disables auto-follow (user took control)
    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    /// Scroll down by one line
    /// Re-enables auto-follow if we reach the bottom
    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
        if self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
        if self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = self.max_offset() == 0;
    }

    /// Jump to bottom (and enable auto-follow)
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = true;
    }

    /// Move the viewport just enough to show lines `start..start + len`
    pub fn ensure_visible(&mut self, start: usize, len: usize) {
        let end = start + len.max(1);
        if start < self.offset {
            self.offset = start;
        } else if end > self.offset + self.viewport {
            self.offset = end.saturating_sub(self.viewport).min(self.max_offset());
        }
        self.auto_follow = self.offset >= self.max_offset();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Panels that can be focused for input routing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusablePanel {
    /// Text input (default focus)
    #[default]
    Input,
    /// Conversation transcript
    Transcript,
    /// System logs panel (only while shown)
    Logs,
}

impl FocusablePanel {
    /// Tab order; the logs panel is skipped while hidden
    pub fn next(self, logs_visible: bool) -> Self {
        match self {
            Self::Input => Self::Transcript,
            Self::Transcript if logs_visible => Self::Logs,
            Self::Transcript | Self::Logs => Self::Input,
        }
    }

    /// Shift+Tab order
    pub fn prev(self, logs_visible: bool) -> Self {
        match self {
            Self::Input if logs_visible => Self::Logs,
            Self::Input => Self::Transcript,
            Self::Transcript => Self::Input,
            Self::Logs => Self::Transcript,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follow_on_new_content() {
        let mut scroll = ScrollState::new();
        assert!(scroll.auto_follow);

        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_scroll_up_disables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 14);

        // New content no longer moves the view
        scroll.update_dimensions(30, 5);
        assert_eq!(scroll.offset(), 14);
    }

    #[test]
    fn test_scroll_down_to_bottom_resumes_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        scroll.scroll_up();
        scroll.scroll_down();
        assert!(scroll.auto_follow);
        assert_eq!(scroll.offset(), 15);
    }

    #[test]
    fn test_pages_and_jumps() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);

        scroll.page_up();
        assert_eq!(scroll.offset(), 80);
        scroll.scroll_to_top();
        assert_eq!(scroll.visible_range(), (0, 10));
        assert!(!scroll.auto_follow);

        scroll.page_down();
        assert_eq!(scroll.offset(), 10);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.visible_range(), (90, 100));
        assert!(scroll.auto_follow);
    }

    #[test]
    fn test_ensure_visible() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(50, 10);

        scroll.ensure_visible(3, 2);
        assert_eq!(scroll.offset(), 3);
        assert!(!scroll.auto_follow);

        scroll.ensure_visible(20, 3);
        assert_eq!(scroll.offset(), 13);

        // Already visible: no movement
        scroll.ensure_visible(15, 1);
        assert_eq!(scroll.offset(), 13);
    }

    #[test]
    fn test_short_content_needs_no_scrollbar() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(3, 10);
        assert!(!scroll.needs_scrollbar());
        assert_eq!(scroll.visible_range(), (0, 3));
    }

    #[test]
    fn test_focus_cycle_skips_hidden_logs() {
        use FocusablePanel::*;
        assert_eq!(Input.next(false), Transcript);
        assert_eq!(Transcript.next(false), Input);
        assert_eq!(Transcript.next(true), Logs);
        assert_eq!(Logs.next(true), Input);
        assert_eq!(Input.prev(true), Logs);
        assert_eq!(Input.prev(false), Transcript);
    }
}
