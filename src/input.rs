use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::config::Level;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Actions reachable from the main menu.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuAction {
    StartGame,
    OpenLevels,
    Exit,
}

/// Actions reachable from the levels menu.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LevelsAction {
    Select(Level),
}

/// Actions reachable while a session is being played.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlayAction {
    Turn(Direction),
    EndSession,
}

/// Actions reachable from the scoreboard.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScoreboardAction {
    Restart,
    BackToMenu,
}

/// Maps a key press to a main menu action.
#[must_use]
pub fn menu_action(key: KeyCode) -> Option<MenuAction> {
    match key {
        KeyCode::Char('1') => Some(MenuAction::StartGame),
        KeyCode::Char('2') => Some(MenuAction::OpenLevels),
        KeyCode::Char('3') => Some(MenuAction::Exit),
        _ => None,
    }
}

/// Maps a key press to a difficulty selection.
#[must_use]
pub fn levels_action(key: KeyCode) -> Option<LevelsAction> {
    match key {
        KeyCode::Char('1') => Some(LevelsAction::Select(Level::Easy)),
        KeyCode::Char('2') => Some(LevelsAction::Select(Level::Medium)),
        KeyCode::Char('3') => Some(LevelsAction::Select(Level::Hard)),
        _ => None,
    }
}

/// Maps a key press to an in-game action. Both WASD and the arrow keys
/// steer; Escape ends the session.
#[must_use]
pub fn play_action(key: KeyCode) -> Option<PlayAction> {
    match key {
        KeyCode::Char('w' | 'W') | KeyCode::Up => Some(PlayAction::Turn(Direction::Up)),
        KeyCode::Char('s' | 'S') | KeyCode::Down => Some(PlayAction::Turn(Direction::Down)),
        KeyCode::Char('a' | 'A') | KeyCode::Left => Some(PlayAction::Turn(Direction::Left)),
        KeyCode::Char('d' | 'D') | KeyCode::Right => Some(PlayAction::Turn(Direction::Right)),
        KeyCode::Esc => Some(PlayAction::EndSession),
        _ => None,
    }
}

/// Maps a key press to a scoreboard action.
#[must_use]
pub fn scoreboard_action(key: KeyCode) -> Option<ScoreboardAction> {
    match key {
        KeyCode::Char('1' | 'r' | 'R') => Some(ScoreboardAction::Restart),
        KeyCode::Char('2') => Some(ScoreboardAction::BackToMenu),
        _ => None,
    }
}

/// Polls the terminal for the next key press, waiting at most `timeout`.
///
/// Non-key events (resize, focus, mouse) and key releases are discarded.
pub fn poll_key(timeout: Duration) -> io::Result<Option<KeyCode>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key.code)),
        _ => Ok(None),
    }
}
