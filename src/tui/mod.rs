// TUI module - Terminal User Interface
//
// Manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - The event loop (keyboard/mouse input, animation ticks, reply deadlines)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod traits;
pub mod views;

use crate::chat::reply_timer;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::profile::ProfileFacts;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use traits::Scrollable;

/// Animation tick (spinner, toast expiry)
const TICK: Duration = Duration::from_millis(120);

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal even if setup or the loop failed.
pub async fn run_tui(config: &Config, profile: Arc<ProfileFacts>, log_buffer: LogBuffer) -> Result<()> {
    let mouse = config.features.mouse;

    let mut terminal = match setup_terminal(mouse) {
        Ok(terminal) => terminal,
        Err(e) => {
            // Undo whatever part of the setup succeeded
            let _ = restore_terminal(mouse);
            return Err(e);
        }
    };

    let mut app = App::new(config, profile, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app).await;

    restore_terminal(mouse)?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!(
        "Chat ended with {} message(s), {} reply(s) undelivered",
        app.session.log().len(),
        app.session.pending().count()
    );

    result
}

fn setup_terminal(mouse: bool) -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Turn off mouse capture, then leave the alternate screen
fn leave_screen(out: &mut impl Write, mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(out, DisableMouseCapture)?;
    }
    execute!(out, LeaveAlternateScreen)
}

/// Undo `setup_terminal`; every step runs even if an earlier one fails
fn restore_terminal(mouse: bool) -> Result<()> {
    let screen = leave_screen(&mut io::stdout(), mouse).context("Failed to restore terminal");
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    screen.and(raw)
}

/// Main event loop
///
/// Waits on whichever comes first:
/// 1. Keyboard or mouse input
/// 2. The animation tick
/// 3. The next reply deadline
///
/// Due replies are delivered after every wakeup, so a reply whose deadline
/// passed while input was being handled still lands before the next draw.
async fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        let next_due = app.session.next_due();

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(_) => {}
                        Err(e) => tracing::warn!("Failed to read terminal event: {}", e),
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            _ = reply_timer(next_due) => {}
        }

        app.deliver_due(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → Focused component → Fallback
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Some terminals report releases; act on presses (and repeats) only
    if key_event.kind == KeyEventKind::Release {
        return;
    }

    // Layer 1: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 2: Focused component
    if app.dispatch_to_focused(key_event).was_handled() {
        return;
    }

    // Layer 3: Fallbacks for keys the focused component passed on
    match key_event.code {
        KeyCode::Char('y') => {
            app.copy_focused();
        }
        KeyCode::Char('x') => {
            app.cancel_selected();
        }
        KeyCode::Up => app.scroll_transcript(true),
        KeyCode::Down => app.scroll_transcript(false),
        KeyCode::PageUp => app.session.sink_mut().page_up(),
        KeyCode::PageDown => app.session.sink_mut().page_down(),
        _ => {}
    }
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Enter => {
            app.submit(Instant::now());
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::F(2) => app.toggle_logs(),
        KeyCode::Esc => app.handle_esc(*key_event),
        _ => return false,
    }
    true
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let (column, row) = (mouse_event.column, mouse_event.row);
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(column, row, Instant::now()),
        MouseEventKind::ScrollUp => app.wheel(column, row, true),
        MouseEventKind::ScrollDown => app.wheel(column, row, false),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::scroll::FocusablePanel;

    fn app() -> App {
        App::new(
            &Config::default(),
            Arc::new(ProfileFacts::default()),
            LogBuffer::new(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn enter_submits_typed_text() {
        let mut app = app();
        type_text(&mut app, "your skills?");
        press(&mut app, KeyCode::Enter);

        assert!(app.input.is_empty());
        assert_eq!(app.transcript().messages()[0].text, "your skills?");
        assert!(app.session.next_due().is_some());
    }

    #[test]
    fn y_types_into_input_but_copies_elsewhere() {
        let mut app = app();
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.input.text(), "y");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, FocusablePanel::Transcript);
        press(&mut app, KeyCode::Char('y'));
        // Empty transcript: nothing copied, field unchanged
        assert_eq!(app.input.text(), "y");
        assert_eq!(app.toast.as_ref().map(|t| t.message.as_str()), Some("Nothing to copy"));
    }

    #[test]
    fn f2_toggles_logs_and_tab_reaches_them() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        assert!(app.show_logs);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, FocusablePanel::Logs);
    }

    #[test]
    fn x_types_into_input_but_stops_reply_in_transcript() {
        let mut app = app();
        type_text(&mut app, "skills");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input.text(), "x");
        assert!(app.session.next_due().is_some());

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.session.next_due().is_none());
        assert_eq!(app.input.text(), "x");
    }

    #[test]
    fn mouse_capture_is_released_before_leaving_screen() {
        let mut out = Vec::new();
        leave_screen(&mut out, true).unwrap();
        let sequence = String::from_utf8(out).unwrap();

        let mouse_off = sequence.find("\x1b[?1000l").unwrap();
        let screen_off = sequence.find("\x1b[?1049l").unwrap();
        assert!(mouse_off < screen_off, "{:?}", sequence);

        let mut out = Vec::new();
        leave_screen(&mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[?1049l");
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
        assert!(app.input.is_empty());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut app, key);
        assert!(app.input.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn reply_timer_wakes_the_loop_on_time() {
        let mut app = app();
        type_text(&mut app, "certification");
        press(&mut app, KeyCode::Enter);

        let start = Instant::now();
        reply_timer(app.session.next_due()).await;
        assert_eq!(app.deliver_due(Instant::now()), 1);
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(app.transcript().messages().len(), 2);
    }
}
