use std::io;

use thiserror::Error;

/// Errors surfaced by the terminal runtime.
///
/// Game logic itself has no recoverable errors: inputs are acted on or
/// ignored, and game-over is an ordinary state, not a failure. Everything
/// here comes from the boundary with the terminal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(
        "terminal too small: the play field needs {needed_width}x{needed_height} \
         cells, the terminal has {actual_width}x{actual_height}"
    )]
    TerminalTooSmall {
        needed_width: u16,
        needed_height: u16,
        actual_width: u16,
        actual_height: u16,
    },
}
