use std::collections::VecDeque;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;

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

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighboring position one cell away in `direction`,
    /// without wrapping.
    #[must_use]
    pub fn moved(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Snake body and heading.
///
/// The body is ordered front-to-back, front = head. The snake itself never
/// decides when to move or grow; the session computes the next head, runs
/// its collision checks, and only then calls [`Snake::advance`], so a
/// colliding step leaves the body untouched.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates the starting snake: three segments laid out horizontally
    /// from the grid center, head east-most, heading right.
    #[must_use]
    pub fn initial(bounds: GridSize) -> Self {
        let center = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };

        let mut body = VecDeque::with_capacity(INITIAL_SNAKE_LENGTH);
        for offset in 0..INITIAL_SNAKE_LENGTH {
            body.push_front(Position {
                x: center.x + offset as i32,
                y: center.y,
            });
        }

        Self {
            body,
            direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Changes the heading unless the request reverses it outright.
    ///
    /// A reversal request is ignored silently; the snake keeps moving in
    /// its current direction.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Returns where the head will be after the next step, wrapped into
    /// bounds on both axes.
    #[must_use]
    pub fn next_head(&self, bounds: GridSize) -> Position {
        self.head().moved(self.direction).wrapped(bounds)
    }

    /// Pushes `new_head` onto the front; drops the tail unless growing.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
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

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
