use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food at a uniformly random cell within bounds.
    ///
    /// Placement does not exclude cells currently covered by the snake;
    /// food under the body becomes reachable again once the snake moves
    /// off it.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::new(Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;

    use super::Food;

    #[test]
    fn spawned_food_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..200 {
            let food = Food::spawn(&mut rng, bounds);
            assert!(food.position.is_within_bounds(bounds));
        }
    }

    #[test]
    fn spawn_covers_more_than_one_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        let first = Food::spawn(&mut rng, bounds);
        let distinct = (0..50).any(|_| Food::spawn(&mut rng, bounds) != first);
        assert!(distinct, "spawn should not be stuck on a single cell");
    }
}
