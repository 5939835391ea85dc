//! Command/event boundary around the game state and its tick timer.
//!
//! The host feeds [`Command`]s and the passage of time in, and reacts to the
//! [`GameEvent`]s pushed to the caller's buffer. Nothing else mutates the
//! game state.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::{GridSize, TICK_INTERVAL};
use crate::engine::{self, TickOutcome};
use crate::error::ConfigError;
use crate::game::{GameState, RunState};
use crate::input::{Direction, GameInput};
use crate::timer::TickTimer;

/// Inbound requests from the presentation layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Starts a fresh game; ignored while already running.
    Start,
    /// Toggles between running and paused.
    Pause,
    /// Stops the clock and returns to a fresh ready board.
    Reset,
    /// Requests a heading for the next tick, subject to the reversal rule.
    SetHeading(Direction),
}

impl Command {
    /// Translates a mapped key into a command. `Quit` is handled by the host.
    #[must_use]
    pub fn from_input(input: GameInput) -> Option<Self> {
        match input {
            GameInput::Direction(direction) => Some(Self::SetHeading(direction)),
            GameInput::Pause => Some(Self::Pause),
            GameInput::Start => Some(Self::Start),
            GameInput::Reset => Some(Self::Reset),
            GameInput::Quit => None,
        }
    }
}

/// Outbound notifications for the presentation layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    ScoreChanged(u32),
    /// State changed and should be redrawn.
    FrameReady,
    GameOver { final_score: u32 },
    Victory { final_score: u32 },
}

/// Owns one game and the timer that drives it.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    timer: TickTimer,
}

impl Session {
    /// Creates a session in the ready state on a grid of `bounds`.
    pub fn new(bounds: GridSize) -> Result<Self, ConfigError> {
        GameState::initialize(bounds).map(Self::from_state)
    }

    /// Like [`Session::new`] but with a reproducible food sequence.
    pub fn with_seed(bounds: GridSize, seed: u64) -> Result<Self, ConfigError> {
        GameState::initialize_with_seed(bounds, seed).map(Self::from_state)
    }

    /// Wraps an existing state, using the fixed tick interval.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self::with_interval(state, TICK_INTERVAL)
    }

    /// Wraps an existing state with a custom tick interval.
    #[must_use]
    pub fn with_interval(state: GameState, interval: Duration) -> Self {
        Self {
            state,
            timer: TickTimer::new(interval),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.state.status
    }

    /// Returns true while a tick is scheduled.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.timer.is_armed()
    }

    /// Time until the next scheduled tick, or `None` when the clock is stopped.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    /// Applies one command at time `now`.
    pub fn apply(&mut self, command: Command, now: Instant, events: &mut Vec<GameEvent>) {
        match command {
            Command::Start => self.start(now, events),
            Command::Pause => self.toggle_pause(now, events),
            Command::Reset => self.reset(events),
            Command::SetHeading(direction) => self.set_heading(direction),
        }
    }

    /// Runs the scheduled tick if its deadline has passed.
    pub fn poll(&mut self, now: Instant, events: &mut Vec<GameEvent>) {
        if self.state.status != RunState::Running || !self.timer.fire_if_due(now) {
            return;
        }

        let outcome = engine::step(&mut self.state);
        debug!(
            "tick {}: {:?}, head at {:?}",
            self.state.tick_count,
            outcome,
            self.state.snake.head()
        );

        match outcome {
            TickOutcome::Advance => events.push(GameEvent::FrameReady),
            TickOutcome::FoodEaten => {
                events.push(GameEvent::ScoreChanged(self.state.score));
                events.push(GameEvent::FrameReady);
            }
            TickOutcome::GameOver => {
                self.timer.cancel();
                info!(
                    "game over after {} ticks: {:?}, score {}",
                    self.state.tick_count, self.state.death_reason, self.state.score
                );
                events.push(GameEvent::FrameReady);
                events.push(GameEvent::GameOver {
                    final_score: self.state.score,
                });
            }
            TickOutcome::Victory => {
                self.timer.cancel();
                info!("board filled, final score {}", self.state.score);
                events.push(GameEvent::ScoreChanged(self.state.score));
                events.push(GameEvent::FrameReady);
                events.push(GameEvent::Victory {
                    final_score: self.state.score,
                });
            }
        }

        if self.state.status == RunState::Running {
            self.timer.arm(now);
        }
    }

    /// Re-initializes the board and arms the timer one full interval ahead.
    /// The first tick runs when that interval elapses, not immediately.
    fn start(&mut self, now: Instant, events: &mut Vec<GameEvent>) {
        if self.state.status == RunState::Running {
            return;
        }

        self.state.reset();
        self.state.status = RunState::Running;
        self.timer.arm(now);
        info!(
            "game started on {}x{} grid",
            self.state.bounds().width,
            self.state.bounds().height
        );
        events.push(GameEvent::ScoreChanged(0));
        events.push(GameEvent::FrameReady);
    }

    fn toggle_pause(&mut self, now: Instant, events: &mut Vec<GameEvent>) {
        match self.state.status {
            RunState::Running => {
                self.state.status = RunState::Paused;
                self.timer.cancel();
                info!("paused at tick {}", self.state.tick_count);
            }
            RunState::Paused => {
                self.state.status = RunState::Running;
                self.timer.arm(now);
                info!("resumed at tick {}", self.state.tick_count);
            }
            RunState::Ready | RunState::GameOver | RunState::Won => return,
        }
        events.push(GameEvent::FrameReady);
    }

    fn reset(&mut self, events: &mut Vec<GameEvent>) {
        self.timer.cancel();
        self.state.reset();
        info!("reset to ready");
        events.push(GameEvent::ScoreChanged(0));
        events.push(GameEvent::FrameReady);
    }

    fn set_heading(&mut self, direction: Direction) {
        if self.state.status.is_terminal() {
            return;
        }
        if !self.state.snake.set_pending_direction(direction) {
            debug!(
                "ignored reversal {direction:?} while heading {:?}",
                self.state.snake.direction()
            );
        }
    }
}
