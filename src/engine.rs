//! One discrete simulation step.

use crate::game::{DeathReason, GameState, RunState};

/// Categorical result of one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved one cell without eating.
    Advance,
    /// The snake ate and grew by one segment; fresh food was placed.
    FoodEaten,
    /// The snake hit a wall or itself. Terminal.
    GameOver,
    /// The snake ate the last food and now fills the board. Terminal.
    Victory,
}

/// Advances `state` by exactly one tick and classifies the result.
///
/// The pending heading is committed first. Collisions are evaluated against
/// the pre-move body, wall before self, and leave the snake untouched. The
/// tail cell counts as occupied, so moving into the cell the tail is about
/// to vacate is a collision. Terminal states are frozen and report their
/// classification again without mutating anything.
pub fn step(state: &mut GameState) -> TickOutcome {
    match state.status {
        RunState::GameOver => return TickOutcome::GameOver,
        RunState::Won => return TickOutcome::Victory,
        RunState::Ready | RunState::Running | RunState::Paused => {}
    }

    state.tick_count += 1;
    state.snake.commit_direction();
    let new_head = state.snake.next_head_position();

    if !new_head.is_within_bounds(state.bounds()) {
        return end_game(state, DeathReason::WallCollision);
    }

    if state.snake.occupies(new_head) {
        return end_game(state, DeathReason::SelfCollision);
    }

    let ate = new_head == state.food.position;
    state.snake.advance_to(new_head, ate);
    if !ate {
        return TickOutcome::Advance;
    }

    state.score += state.food.points();
    if state.respawn_food() {
        TickOutcome::FoodEaten
    } else {
        state.status = RunState::Won;
        TickOutcome::Victory
    }
}

fn end_game(state: &mut GameState, reason: DeathReason) -> TickOutcome {
    state.status = RunState::GameOver;
    state.death_reason = Some(reason);
    TickOutcome::GameOver
}
