use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::config::{
    CELL_WIDTH, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GridSize, Theme,
};
use crate::game::{GameState, RunState};
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, &hud_info);

    let Some(board_area) = board_rect(play_area, state.bounds()) else {
        frame.render_widget(
            Paragraph::new("Terminal too small for the board")
                .alignment(Alignment::Center)
                .style(Style::new().fg(hud_info.theme.food)),
            play_area,
        );
        return;
    };

    let theme = hud_info.theme;
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg).bg(theme.play_bg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_grid(frame, inner, state.bounds(), theme);
    render_snake(frame, inner, state, theme);
    render_food(frame, inner, state, theme);

    match state.status {
        RunState::Ready => render_start_menu(frame, board_area, hud_info.best_score, theme),
        RunState::Paused => render_pause_menu(frame, board_area),
        RunState::GameOver => render_game_over_menu(
            frame,
            board_area,
            state.score,
            hud_info.previous_best,
            state.death_reason,
        ),
        RunState::Won => render_victory_menu(frame, board_area, state.score, theme),
        RunState::Running => {}
    }
}

/// Centers a bordered board of `bounds` inside `area`; `None` if it cannot fit.
fn board_rect(area: Rect, bounds: GridSize) -> Option<Rect> {
    let width = bounds.width.checked_mul(CELL_WIDTH)?.checked_add(2)?;
    let height = bounds.height.checked_add(2)?;
    if width > area.width || height > area.height {
        return None;
    }

    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    })
}

fn render_grid(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, theme: &Theme) {
    let style = Style::new().fg(theme.grid_line).bg(theme.play_bg);
    let buffer = frame.buffer_mut();
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            if let Some((col, row)) = logical_to_terminal(inner, bounds, Position { x, y }) {
                buffer.set_string(col, row, GLYPH_EMPTY, style);
            }
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    if state.status == RunState::Won {
        return;
    }
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food.position) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new().fg(theme.food).bg(theme.food_shine),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .bg(theme.play_bg)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_BODY,
                Style::new().fg(theme.snake_body).bg(theme.play_bg),
            );
        }
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
