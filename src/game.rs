use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GridSize;
use crate::food::Food;
use crate::input::Direction;
use crate::snake::Snake;

/// Complete mutable state for one playthrough.
///
/// A session is created once at process start and reused for every game:
/// [`Session::reset`] brings it back to the starting layout without
/// replacing the RNG, so a seeded session stays deterministic across
/// restarts.
#[derive(Debug, Clone)]
pub struct Session {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    game_over: bool,
    bounds: GridSize,
    rng: StdRng,
}

impl Session {
    /// Creates a session with food placed from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::initial(bounds);
        let food = Food::spawn(&mut rng, bounds);

        Self {
            snake,
            food,
            score: 0,
            game_over: false,
            bounds,
            rng,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// The next head position is checked against every existing segment
    /// before the body is touched, so a colliding step ends the session
    /// with the snake exactly as it was. Once game-over is set, further
    /// ticks are no-ops until [`Session::reset`].
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }

        let next_head = self.snake.next_head(self.bounds);

        if self.snake.occupies(next_head) {
            self.game_over = true;
            return;
        }

        if next_head == self.food.position {
            self.snake.advance(next_head, true);
            self.score += 1;
            self.food = Food::spawn(&mut self.rng, self.bounds);
        } else {
            self.snake.advance(next_head, false);
        }
    }

    /// Requests a heading change; reversal requests are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// Restores the starting layout: three-segment snake heading right,
    /// fresh food, score zero, game-over cleared.
    pub fn reset(&mut self) {
        self.snake = Snake::initial(self.bounds);
        self.food = Food::spawn(&mut self.rng, self.bounds);
        self.score = 0;
        self.game_over = false;
    }

    /// Returns true once the session has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the play field dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
