//! Classic arcade Snake for the terminal.
//!
//! The simulation core (`snake`, `food`, `game`) and the screen state
//! machine (`screen`) are plain state manipulation driven by two event
//! sources, timer ticks and key presses. `renderer` and `ui` read that
//! state once per frame and never mutate it, and `scheduler` decides when
//! ticks are due without knowing anything about either.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod screen;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
