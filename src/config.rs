use std::time::Duration;

use clap::ValueEnum;

/// Logical grid dimensions passed through the game as a named type.
///
/// Width and height are measured in cells, not terminal columns, so every
/// call site is unambiguous about which space it works in.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Play field width in cells (an 800-pixel window at 20 pixels per cell).
pub const GRID_WIDTH: u16 = 40;

/// Play field height in cells (a 600-pixel window at 20 pixels per cell).
pub const GRID_HEIGHT: u16 = 30;

/// Default play field dimensions.
pub const PLAY_FIELD: GridSize = GridSize {
    width: GRID_WIDTH,
    height: GRID_HEIGHT,
};

/// Segments in a freshly initialized snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// How long the title screen stays up before the menu takes over.
pub const TITLE_SCREEN_DURATION: Duration = Duration::from_secs(3);

/// Tick period at Medium difficulty, roughly 7.5 steps per second.
pub const BASE_TICK_INTERVAL_MS: u64 = 133;

/// Difficulty selection, held process-wide.
///
/// The selection persists across sessions until changed on the levels
/// screen; it only affects the simulation tick cadence.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Level {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Level {
    /// Returns the simulation tick period for this difficulty.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        let base = Duration::from_millis(BASE_TICK_INTERVAL_MS);
        match self {
            Self::Easy => base * 2,
            Self::Medium => base,
            Self::Hard => base / 2,
        }
    }

    /// Returns the display name used by the levels screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Glyph drawn for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph drawn for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Glyph drawn for food.
pub const GLYPH_FOOD: &str = "●";

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{GridSize, Level, BASE_TICK_INTERVAL_MS};

    #[test]
    fn total_cells_multiplies_both_axes() {
        let grid = GridSize {
            width: 40,
            height: 30,
        };
        assert_eq!(grid.total_cells(), 1200);
    }

    #[test]
    fn tick_interval_scales_with_difficulty() {
        let base = Duration::from_millis(BASE_TICK_INTERVAL_MS);

        assert_eq!(Level::Easy.tick_interval(), base * 2);
        assert_eq!(Level::Medium.tick_interval(), base);
        assert_eq!(Level::Hard.tick_interval(), base / 2);
    }

    #[test]
    fn default_level_is_medium() {
        assert_eq!(Level::default(), Level::Medium);
    }
}
