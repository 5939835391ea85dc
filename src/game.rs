use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::error::ConfigError;
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Lifecycle of one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunState {
    Ready,
    Running,
    Paused,
    GameOver,
    /// The snake covers every cell; nothing is left to eat.
    Won,
}

impl RunState {
    /// Returns true for states that only a reset or start can leave.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Won)
    }
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub status: RunState,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a ready-to-start state with food placed from OS entropy.
    pub fn initialize(bounds: GridSize) -> Result<Self, ConfigError> {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible games.
    pub fn initialize_with_seed(bounds: GridSize, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Result<Self, ConfigError> {
        validate_grid(bounds)?;

        let snake = seed_snake(bounds);
        let food = Food::spawn(&mut rng, bounds, &snake).ok_or(ConfigError::GridTooSmall {
            width: bounds.width,
            height: bounds.height,
        })?;

        Ok(Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: RunState::Ready,
            death_reason: None,
            bounds,
            rng,
        })
    }

    /// Re-seeds snake, food and score on the same grid and returns to Ready.
    ///
    /// The random source carries over, so consecutive games on a seeded
    /// state differ but stay reproducible.
    pub fn reset(&mut self) {
        self.snake = seed_snake(self.bounds);
        self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake)
            .expect("validated grid always leaves a free cell beside the seed snake");
        self.score = 0;
        self.tick_count = 0;
        self.status = RunState::Ready;
        self.death_reason = None;
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Places a fresh food item; `false` when no free cell is left.
    pub(crate) fn respawn_food(&mut self) -> bool {
        match Food::spawn(&mut self.rng, self.bounds, &self.snake) {
            Some(food) => {
                self.food = food;
                true
            }
            None => false,
        }
    }
}

fn validate_grid(bounds: GridSize) -> Result<(), ConfigError> {
    let fits_seed = usize::from(bounds.width) >= INITIAL_SNAKE_LENGTH && bounds.height >= 1;
    if fits_seed && bounds.total_cells() > INITIAL_SNAKE_LENGTH {
        Ok(())
    } else {
        Err(ConfigError::GridTooSmall {
            width: bounds.width,
            height: bounds.height,
        })
    }
}

/// Horizontal seed heading right, head a third of the way across.
fn seed_snake(bounds: GridSize) -> Snake {
    let tail_room = i32::try_from(INITIAL_SNAKE_LENGTH - 1).unwrap_or(0);
    let head = Position {
        x: (i32::from(bounds.width) / 3).max(tail_room),
        y: i32::from(bounds.height) / 2,
    };
    Snake::new(head, Direction::Right, INITIAL_SNAKE_LENGTH)
}

#[cfg(test)]
mod tests {
    use crate::config::{DEFAULT_GRID, GridSize};
    use crate::error::ConfigError;
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{GameState, RunState};

    #[test]
    fn default_grid_seeds_three_cells_heading_right() {
        let state = GameState::initialize_with_seed(DEFAULT_GRID, 1).expect("valid grid");

        let cells: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(
            cells,
            vec![
                Position { x: 10, y: 10 },
                Position { x: 9, y: 10 },
                Position { x: 8, y: 10 },
            ]
        );
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.snake.pending_direction(), Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, RunState::Ready);
        assert!(!state.snake.occupies(state.food.position));
        assert!(state.food.position.is_within_bounds(DEFAULT_GRID));
    }

    #[test]
    fn narrow_grid_still_fits_the_seed() {
        let bounds = GridSize {
            width: 3,
            height: 2,
        };
        let state = GameState::initialize_with_seed(bounds, 5).expect("3x2 fits the seed");

        assert!(state.snake.segments().all(|cell| cell.is_within_bounds(bounds)));
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn too_small_grid_is_a_config_error() {
        for (width, height) in [(2, 10), (10, 0), (3, 1)] {
            let result = GameState::initialize_with_seed(GridSize { width, height }, 1);
            assert_eq!(
                result.err(),
                Some(ConfigError::GridTooSmall { width, height })
            );
        }
    }

    #[test]
    fn reset_discards_progress() {
        let mut state = GameState::initialize_with_seed(DEFAULT_GRID, 8).expect("valid grid");
        state.score = 120;
        state.tick_count = 40;
        state.status = RunState::GameOver;
        let _ = state.snake.set_pending_direction(Direction::Up);
        state.snake.commit_direction();

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.status, RunState::Ready);
        assert_eq!(state.death_reason, None);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position { x: 10, y: 10 });
        assert_eq!(state.snake.direction(), Direction::Right);
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn seeded_states_are_reproducible() {
        let a = GameState::initialize_with_seed(DEFAULT_GRID, 42).expect("valid grid");
        let b = GameState::initialize_with_seed(DEFAULT_GRID, 42).expect("valid grid");

        assert_eq!(a.food, b.food);
    }
}
