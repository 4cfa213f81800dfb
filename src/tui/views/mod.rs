// Views module - screen layout and per-frame rendering
//
// ┌ title bar ───────────────────────────────┐
// │ transcript            │ logs (F2, wide)  │
// ├───────────────────────┴──────────────────┤
// │ input field                   │ [ Send ] │
// └──────────────────────────────────────────┘
//   status bar
//
// On narrower terminals the logs panel goes below the transcript.

use super::app::{App, HitAreas};
use super::components::{input_bar, status_bar, title_bar};
use super::layout::Breakpoint;
use super::traits::Component;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Split the body into (transcript, optional logs) areas
fn split_body(area: Rect, show_logs: bool) -> (Rect, Option<Rect>) {
    if !show_logs {
        return (area, None);
    }

    let constraints = [Constraint::Percentage(65), Constraint::Percentage(35)];
    let [transcript, logs] = if Breakpoint::from_width(area.width).logs_beside_transcript() {
        Layout::horizontal(constraints).areas(area)
    } else {
        Layout::vertical(constraints).areas(area)
    };
    (transcript, Some(logs))
}

/// Usable (width, height) inside a bordered panel
fn inner_size(area: Rect) -> (usize, usize) {
    (
        area.width.saturating_sub(2) as usize,
        area.height.saturating_sub(2) as usize,
    )
}

/// Main render function, called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let full = f.area();
    f.render_widget(Block::default().style(app.theme.base_style()), full);

    let [title_area, body_area, input_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(full);

    let (transcript_area, logs_area) = split_body(body_area, app.show_logs);

    // Size-dependent state first, then render from immutable borrows
    let (w, h) = inner_size(transcript_area);
    app.session.sink_mut().sync(w, h);
    if let Some(area) = logs_area {
        let (w, h) = inner_size(area);
        app.logs_panel.sync(w, h);
    }

    let send_button = {
        let ctx = app.render_context();

        title_bar::render(f, title_area, &ctx, &app.profile_summary);
        app.transcript().render(f, transcript_area, &ctx);
        if let Some(area) = logs_area {
            app.logs_panel.render(f, area, &ctx);
        }
        let can_send = !app.input.text().trim().is_empty();
        let button = input_bar::render(f, input_area, &ctx, &app.input, can_send);
        status_bar::render(f, status_area, &ctx, app.focus_hint(), app.status_counts());

        if let Some(ref toast) = app.toast {
            toast.render(f, full, &app.theme);
        }
        button
    };

    app.hit_areas = HitAreas {
        transcript: transcript_area,
        logs: logs_area,
        input: input_area,
        send_button,
    };

    app.clear_expired_toast();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_hidden_gives_whole_body_to_transcript() {
        let area = Rect::new(0, 3, 80, 20);
        assert_eq!(split_body(area, false), (area, None));
    }

    #[test]
    fn logs_go_beside_on_wide_and_below_on_narrow() {
        let (t, l) = split_body(Rect::new(0, 0, 120, 20), true);
        let l = l.unwrap();
        assert_eq!(t.y, l.y);
        assert!(l.x > t.x);

        let (t, l) = split_body(Rect::new(0, 0, 80, 20), true);
        let l = l.unwrap();
        assert_eq!(t.x, l.x);
        assert!(l.y > t.y);
    }
}
