// TUI application state
//
// App owns the ChatSession (with the transcript panel as its display sink),
// the input field and the UI chrome. Keyboard and mouse handlers in mod.rs
// call into it; views read from it.

use super::clipboard;
use super::components::logs_panel::LogsPanel;
use super::components::status_bar::StatusCounts;
use super::components::transcript_panel::TranscriptPanel;
use super::components::{input_bar, Toast};
use super::input::InputField;
use super::scroll::FocusablePanel;
use super::traits::{ComponentId, CopyResult, Copyable, Handled, Interactive, RenderContext, Scrollable};
use crate::chat::{ChatSession, Sender, SubmitOutcome};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::profile::ProfileFacts;
use crate::resolver::Resolver;
use crate::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use tokio::time::Instant;

/// Screen areas from the last draw, for mouse hit-testing
#[derive(Debug, Default, Clone, Copy)]
pub struct HitAreas {
    pub transcript: Rect,
    pub logs: Option<Rect>,
    pub input: Rect,
    pub send_button: Rect,
}

/// Main application state for the TUI
pub struct App {
    /// Conversation; the transcript panel is its display sink
    pub session: ChatSession<TranscriptPanel>,

    pub input: InputField,

    pub logs_panel: LogsPanel,

    /// Whether the logs panel is shown (F2)
    pub show_logs: bool,

    pub focused: FocusablePanel,

    pub theme: Theme,

    pub toast: Option<Toast>,

    /// Animation frame counter (advanced each tick)
    pub animation_frame: usize,

    pub hit_areas: HitAreas,

    /// Right side of the title bar
    pub profile_summary: String,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, profile: Arc<ProfileFacts>, log_buffer: LogBuffer) -> Self {
        let profile_summary = summarize(&profile);
        let resolver = Resolver::new(config.resolver.missing_experience);
        let session = ChatSession::new(profile, resolver, TranscriptPanel::new())
            .with_reply_delay(config.reply_delay);

        Self {
            session,
            input: InputField::new(),
            logs_panel: LogsPanel::new(log_buffer),
            show_logs: config.features.logs_panel,
            focused: FocusablePanel::default(),
            theme: Theme::by_name(&config.theme),
            toast: None,
            animation_frame: 0,
            hit_areas: HitAreas::default(),
            profile_summary,
            should_quit: false,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Chat actions
    // ─────────────────────────────────────────────────────────────

    /// Send the input field's contents (Enter and the Send button)
    ///
    /// The field is cleared once the session accepts the text; blank input
    /// leaves it untouched. A faulted lookup is only logged.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        let outcome = self.session.submit(self.input.text(), now);
        if outcome.accepted() {
            self.input.clear();
        }
        outcome
    }

    /// Deliver replies that are due
    pub fn deliver_due(&mut self, now: Instant) -> usize {
        self.session.deliver_due(now)
    }

    /// Stop generating: drop every queued reply
    pub fn cancel_pending(&mut self) -> usize {
        let count = self.session.cancel_all();
        if count > 0 {
            self.show_toast(format!("■ Stopped {} reply(s)", count));
        }
        count
    }

    /// Stop the reply to the selected message (`x` in the transcript)
    pub fn cancel_selected(&mut self) -> bool {
        if self.focused != FocusablePanel::Transcript {
            return false;
        }
        let Some(id) = self.transcript().selected_message().map(|m| m.id) else {
            return false;
        };

        let cancelled = self.session.cancel(id);
        if cancelled {
            self.show_toast(format!("■ Stopped reply to {}", id));
        } else {
            self.show_toast("No reply pending for that message");
        }
        cancelled
    }

    /// Esc: cancel pending replies, else clear the focused selection, else quit
    pub fn handle_esc(&mut self, key: KeyEvent) {
        if self.cancel_pending() > 0 {
            return;
        }
        if self.focused != FocusablePanel::Input && self.dispatch_to_focused(key).was_handled() {
            return;
        }
        self.should_quit = true;
    }

    // ─────────────────────────────────────────────────────────────
    // Focus and panels
    // ─────────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next(self.show_logs);
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev(self.show_logs);
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if !self.show_logs && self.focused == FocusablePanel::Logs {
            self.focused = FocusablePanel::Input;
        }
    }

    /// Route a key to the focused component
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            FocusablePanel::Input => self.input.handle_key(key),
            FocusablePanel::Transcript => self.session.sink_mut().handle_key(key),
            FocusablePanel::Logs => self.logs_panel.handle_key(key),
        }
    }

    /// Line scrolling of the transcript while typing
    pub fn scroll_transcript(&mut self, up: bool) {
        let transcript = self.session.sink_mut();
        if up {
            transcript.scroll_up();
        } else {
            transcript.scroll_down();
        }
    }

    pub fn transcript(&self) -> &TranscriptPanel {
        self.session.sink()
    }

    // ─────────────────────────────────────────────────────────────
    // Mouse
    // ─────────────────────────────────────────────────────────────

    /// Left click: Send button submits, panels take focus
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        let areas = self.hit_areas;
        let pos = Position::new(column, row);

        if input_bar::hits(areas.send_button, column, row) {
            self.submit(now);
        } else if areas.input.contains(pos) {
            self.focused = FocusablePanel::Input;
        } else if areas.transcript.contains(pos) {
            self.focused = FocusablePanel::Transcript;
        } else if areas.logs.is_some_and(|r| r.contains(pos)) {
            self.focused = FocusablePanel::Logs;
        }
    }

    /// Wheel scrolls whichever panel is under the pointer
    pub fn wheel(&mut self, column: u16, row: u16, up: bool) {
        let over_logs = self
            .hit_areas
            .logs
            .is_some_and(|r| r.contains(Position::new(column, row)));

        if over_logs {
            if up {
                self.logs_panel.scroll_up();
            } else {
                self.logs_panel.scroll_down();
            }
        } else {
            self.scroll_transcript(up);
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Clipboard and toasts
    // ─────────────────────────────────────────────────────────────

    /// Copy the focused panel's text (`y`)
    pub fn copy_focused(&mut self) -> CopyResult {
        let (text, description) = match self.focused {
            FocusablePanel::Logs => (self.logs_panel.copy_text(), self.logs_panel.copy_description()),
            _ => {
                let transcript = self.transcript();
                (transcript.copy_text(), transcript.copy_description())
            }
        };

        let result = match text {
            None => CopyResult::Empty,
            Some(text) => match clipboard::copy_to_clipboard(&text) {
                Ok(()) => CopyResult::Success { description },
                Err(e) => {
                    tracing::warn!("Clipboard copy failed: {:#}", e);
                    CopyResult::Error
                }
            },
        };
        self.show_toast(result.toast_message());
        result
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    // ─────────────────────────────────────────────────────────────
    // View helpers
    // ─────────────────────────────────────────────────────────────

    pub fn render_context(&self) -> RenderContext<'_> {
        let focus = match self.focused {
            FocusablePanel::Input => ComponentId::Input,
            FocusablePanel::Transcript => ComponentId::Transcript,
            FocusablePanel::Logs => ComponentId::Logs,
        };
        RenderContext::new(&self.theme, focus, self.animation_frame, self.session.state())
    }

    pub fn focus_hint(&self) -> &'static str {
        let hint = match self.focused {
            FocusablePanel::Input => self.input.focus_hint(),
            FocusablePanel::Transcript => self.transcript().focus_hint(),
            FocusablePanel::Logs => self.logs_panel.focus_hint(),
        };
        hint.unwrap_or("")
    }

    pub fn status_counts(&self) -> StatusCounts {
        let log = self.session.log();
        StatusCounts {
            user: log.count_from(Sender::User),
            bot: log.count_from(Sender::Bot),
        }
    }
}

/// One-line profile summary for the title bar
fn summarize(profile: &ProfileFacts) -> String {
    let experience = match profile.latest_experience() {
        Some(exp) => format!("{} @ {}", exp.role, exp.company),
        None => "no experience listed".to_string(),
    };
    format!(
        "{} skills · {} certs · {}",
        profile.skills.len(),
        profile.certifications.len(),
        experience
    )
}
