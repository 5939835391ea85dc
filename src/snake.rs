use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body plus its committed and pending headings.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a straight snake of `length` cells with the head at `head`,
    /// the body trailing away from `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let trailing = direction.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut cell = head;
        body.push_back(cell);
        for _ in 1..length {
            cell = cell.stepped(trailing);
            body.push_back(cell);
        }

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty body.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        })
    }

    /// Records `direction` as the heading for the next tick.
    ///
    /// A reversal of the committed heading is ignored. Anything else
    /// overwrites the previous pending value, so only the latest valid input
    /// between two ticks survives. Returns whether the input was accepted.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Promotes the pending heading to the committed heading.
    pub fn commit_direction(&mut self) {
        self.direction = self.pending_direction;
    }

    /// Returns the cell the head would enter moving along the committed heading.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().stepped(self.direction)
    }

    /// Pushes `new_head` to the front; drops the tail unless `grow` is set.
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading that the next tick will commit.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_check_is_half_open() {
        let bounds = GridSize {
            width: 30,
            height: 20,
        };

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 29, y: 19 }.is_within_bounds(bounds));
        assert!(!Position { x: 30, y: 10 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: -1 }.is_within_bounds(bounds));
    }

    #[test]
    fn empty_segment_list_is_not_a_snake() {
        assert!(Snake::from_segments(Vec::new(), Direction::Right).is_none());

        let snake = Snake::from_segments(vec![Position { x: 4, y: 2 }], Direction::Down)
            .expect("one segment is a snake");
        assert_eq!(snake.head(), Position { x: 4, y: 2 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn seed_trails_behind_the_head() {
        let snake = Snake::new(Position { x: 10, y: 10 }, Direction::Right, 3);

        let cells: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            cells,
            vec![
                Position { x: 10, y: 10 },
                Position { x: 9, y: 10 },
                Position { x: 8, y: 10 },
            ]
        );
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 3);

        let next = snake.next_head_position();
        snake.advance_to(next, false);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position { x: 3, y: 5 }));
    }

    #[test]
    fn advance_with_growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 3);

        let next = snake.next_head_position();
        snake.advance_to(next, true);

        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Position { x: 3, y: 5 }));
    }

    #[test]
    fn pending_reversal_is_rejected() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Up, 1);

        assert!(!snake.set_pending_direction(Direction::Down));
        snake.commit_direction();

        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.next_head_position(), Position { x: 5, y: 4 });
    }

    #[test]
    fn last_valid_pending_direction_wins() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Down, 3);

        assert!(snake.set_pending_direction(Direction::Right));
        assert!(snake.set_pending_direction(Direction::Left));
        // Up reverses the committed heading, not the pending one.
        assert!(!snake.set_pending_direction(Direction::Up));
        snake.commit_direction();

        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn quick_double_turn_cannot_reverse_into_the_neck() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 3);

        // Up then Left between two ticks: Left is checked against Right.
        assert!(snake.set_pending_direction(Direction::Up));
        assert!(!snake.set_pending_direction(Direction::Left));
        snake.commit_direction();

        assert_eq!(snake.direction(), Direction::Up);
    }
}
