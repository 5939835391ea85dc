use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::{GameState, RunState};

const SEPARATOR: &str = " │ ";
/// How long the score stays highlighted after it changes.
pub const SCORE_FLASH_DURATION: Duration = Duration::from_millis(600);

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    /// Best final score seen since the program started.
    pub best_score: u32,
    /// Best final score from before the most recently finished game.
    pub previous_best: u32,
    pub theme: &'a Theme,
    /// When the host last received a score change.
    pub score_changed_at: Option<Instant>,
    /// Wall-clock instant of this frame render.
    pub now: Instant,
}

/// Renders the one-line HUD under `area` and returns the area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(state, info, usize::from(hud_area.width)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(info.theme.hud_muted)),
        hud_area,
    );

    play_area
}

fn info_line(state: &GameState, info: &HudInfo<'_>, available_width: usize) -> Line<'static> {
    let compact = full_width(state, info) > available_width;
    let (score_label, length_label, best_label) = if compact {
        ("S", "L", "B")
    } else {
        ("Score", "Length", "Best")
    };

    let flashing = info
        .score_changed_at
        .is_some_and(|at| info.now.saturating_duration_since(at) < SCORE_FLASH_DURATION);
    let mut score_style = Style::default().fg(info.theme.hud_score);
    if flashing {
        score_style = score_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    Line::from(vec![
        Span::raw(format!("{score_label}: ")),
        Span::styled(state.score.to_string(), score_style),
        Span::raw(SEPARATOR),
        Span::raw(format!("{length_label}: ")),
        Span::styled(
            state.snake.len().to_string(),
            Style::default().fg(info.theme.hud_score),
        ),
        Span::raw(SEPARATOR),
        Span::raw(format!("{best_label}: ")),
        Span::styled(
            info.best_score.max(state.score).to_string(),
            Style::default().fg(info.theme.hud_score),
        ),
        Span::raw(SEPARATOR),
        Span::styled(status_label(state.status), status_style(state.status)),
    ])
}

fn full_width(state: &GameState, info: &HudInfo<'_>) -> usize {
    let text = format!(
        "Score: {}{SEPARATOR}Length: {}{SEPARATOR}Best: {}{SEPARATOR}{}",
        state.score,
        state.snake.len(),
        info.best_score.max(state.score),
        status_label(state.status)
    );
    text.width()
}

fn status_label(status: RunState) -> &'static str {
    match status {
        RunState::Ready => "READY",
        RunState::Running => "RUNNING",
        RunState::Paused => "PAUSED",
        RunState::GameOver => "GAME OVER",
        RunState::Won => "CLEARED",
    }
}

fn status_style(status: RunState) -> Style {
    let color = match status {
        RunState::Running => Color::Green,
        RunState::Paused | RunState::Ready => Color::Yellow,
        RunState::GameOver => Color::Red,
        RunState::Won => Color::Cyan,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
