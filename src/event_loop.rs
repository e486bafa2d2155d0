use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{poll, read};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::debug;

use crate::app::{App, ClockView, SegmentAreas, TimerView};
use crate::event::Event;
use crate::handlers::{handle_key_event, handle_mouse_event};
use crate::timer::Segment;
use crate::ui::{create_screen_layout, ClockFace, HelpMenuWidget};

/// Upper bound on how long one poll waits while no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run until the host window is closed.
///
/// One thread handles both input and ticks: each turn draws, waits for input
/// no longer than the next tick deadline, handles at most one event, then
/// delivers a due tick. Events and ticks are therefore processed in arrival
/// order.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, app))?;

        let timeout = app
            .ticker()
            .time_until_due(Instant::now())
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

        if poll(timeout)? {
            match Event::from(read()?) {
                Event::Key(key) => handle_key_event(app, key, Instant::now()),
                Event::Mouse(mouse) => handle_mouse_event(app, mouse, Instant::now()),
                Event::Resize(w, h) => {
                    debug!(width = w, height = h, "terminal resized");
                    terminal.autoresize()?;
                }
                Event::Ignored => {}
            }
        }

        app.advance(Instant::now());

        if app.host().is_closed() {
            return Ok(());
        }
    }
}

/// Draw one frame. Generic over the backend so tests can use `TestBackend`.
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw_ui(f, app))?;
    Ok(())
}

fn draw_ui(f: &mut Frame, app: &mut App) {
    let view = app.view();
    let layout = create_screen_layout(f.area(), app.config.display.show_help_bar);

    if !view.is_hidden {
        let title = Paragraph::new(Line::from(Span::styled(
            app.config.display.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(title, layout.title);
    }

    app.segment_areas = draw_clock(f, layout.clock, &view);

    if let Some(status) = view.status_line() {
        let status = Paragraph::new(status).alignment(Alignment::Center);
        f.render_widget(status, layout.status);
    }

    // The credit line stays visible even while text is hidden
    if !app.config.display.footer.is_empty() {
        let footer = Paragraph::new(app.config.display.footer.as_str())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(footer, layout.footer);
    }

    if let Some(help_area) = layout.help_bar.filter(|_| !view.is_hidden) {
        draw_help_bar(f, help_area, &view);
    }

    // Help overlay last (highest z-index)
    if app.show_help {
        let area = HelpMenuWidget::calculate_area(f.area());
        f.render_widget(HelpMenuWidget::new(), area);
    }
}

/// Draw the clock and return the segment areas when a draft is shown
fn draw_clock(f: &mut Frame, area: Rect, view: &TimerView) -> Option<SegmentAreas> {
    match &view.clock {
        ClockView::Countdown { text, expired } => {
            let style = if *expired {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            f.render_widget(ClockFace::from_mm_ss(text).style(style), area);
            None
        }
        ClockView::Draft {
            minutes,
            seconds,
            focused,
        } => {
            let focus_style = Style::default().fg(Color::Black).bg(Color::Cyan);
            let mut clock = ClockFace::new(minutes, seconds)
                .style(Style::default().add_modifier(Modifier::BOLD));
            clock = match focused {
                Segment::Minutes => clock.minutes_style(focus_style),
                Segment::Seconds => clock.seconds_style(focus_style),
            };
            let geometry = clock.geometry(area);
            f.render_widget(clock, area);
            Some(SegmentAreas {
                minutes: geometry.minutes,
                seconds: geometry.seconds,
            })
        }
    }
}

fn draw_help_bar(f: &mut Frame, area: Rect, view: &TimerView) {
    let (badge_style, hints) = match view.clock {
        ClockView::Draft { .. } => (
            Style::default().fg(Color::Black).bg(Color::Cyan),
            " ↑↓ adjust  ←→ segment  0-9 type  Enter save  Esc cancel",
        ),
        ClockView::Countdown { .. } => (
            Style::default().fg(Color::Black).bg(Color::Green),
            " i start/pause  r reset  f set  m hide  x close  ? help",
        ),
    };
    let msg = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", view.mode_name), badge_style),
        Span::raw(hints),
    ]))
    .style(Style::default().bg(Color::DarkGray));
    f.render_widget(msg, area);
}
