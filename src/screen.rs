use crossterm::event::KeyCode;

use crate::config::{GridSize, Level};
use crate::game::Session;
use crate::input::{self, LevelsAction, MenuAction, PlayAction, ScoreboardAction};

/// Which view currently owns input and rendering.
///
/// Exactly one screen is active at any time; transitions happen only
/// through [`App::on_key`], [`App::on_tick`], and
/// [`App::on_title_elapsed`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Title,
    Menu,
    Levels,
    Play,
    Scoreboard,
}

/// Commands the state machine raises for the runtime to act on.
///
/// The core never terminates the process itself; the menu's Exit entry
/// surfaces here and the event loop decides what to do with it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AppCommand {
    Exit,
}

/// Top-level application state: active screen, difficulty, session.
#[derive(Debug, Clone)]
pub struct App {
    screen: Screen,
    pub level: Level,
    pub session: Session,
}

impl App {
    /// Creates the application on the title screen with default difficulty.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_session(Session::new(bounds))
    }

    /// Creates a deterministic application for tests and seeded runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_session(Session::new_with_seed(bounds, seed))
    }

    fn with_session(session: Session) -> Self {
        Self {
            screen: Screen::Title,
            level: Level::default(),
            session,
        }
    }

    /// Returns the active screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Routes one key press to the active screen's handler.
    ///
    /// Keys that mean nothing on the active screen are dropped without
    /// effect.
    pub fn on_key(&mut self, key: KeyCode) -> Option<AppCommand> {
        match self.screen {
            Screen::Title => None,
            Screen::Menu => self.on_menu_key(key),
            Screen::Levels => {
                self.on_levels_key(key);
                None
            }
            Screen::Play => {
                self.on_play_key(key);
                None
            }
            Screen::Scoreboard => {
                self.on_scoreboard_key(key);
                None
            }
        }
    }

    /// Advances the session by one step while play is active.
    ///
    /// A session that reports game-over hands control to the scoreboard;
    /// ticks on any other screen are ignored.
    pub fn on_tick(&mut self) {
        if self.screen != Screen::Play {
            return;
        }

        self.session.step();
        if self.session.is_game_over() {
            self.screen = Screen::Scoreboard;
        }
    }

    /// Hands the title screen over to the menu once its timer elapses.
    pub fn on_title_elapsed(&mut self) {
        if self.screen == Screen::Title {
            self.screen = Screen::Menu;
        }
    }

    fn on_menu_key(&mut self, key: KeyCode) -> Option<AppCommand> {
        match input::menu_action(key)? {
            MenuAction::StartGame => {
                self.session.reset();
                self.screen = Screen::Play;
            }
            MenuAction::OpenLevels => self.screen = Screen::Levels,
            MenuAction::Exit => return Some(AppCommand::Exit),
        }
        None
    }

    fn on_levels_key(&mut self, key: KeyCode) {
        let Some(LevelsAction::Select(level)) = input::levels_action(key) else {
            return;
        };

        self.level = level;
        self.screen = Screen::Menu;
    }

    fn on_play_key(&mut self, key: KeyCode) {
        match input::play_action(key) {
            Some(PlayAction::Turn(direction)) => self.session.set_direction(direction),
            Some(PlayAction::EndSession) => self.screen = Screen::Scoreboard,
            None => {}
        }
    }

    fn on_scoreboard_key(&mut self, key: KeyCode) {
        match input::scoreboard_action(key) {
            Some(ScoreboardAction::Restart) => {
                self.session.reset();
                self.screen = Screen::Play;
            }
            // Deliberately leaves the score alone; it is cleared only when
            // a new session starts.
            Some(ScoreboardAction::BackToMenu) => self.screen = Screen::Menu,
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::config::{GridSize, Level};
    use crate::food::Food;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{App, AppCommand, Screen};

    const BOUNDS: GridSize = GridSize {
        width: 12,
        height: 10,
    };

    fn app_at_menu() -> App {
        let mut app = App::new_with_seed(BOUNDS, 42);
        app.on_title_elapsed();
        app
    }

    #[test]
    fn starts_on_title_and_moves_to_menu_when_timer_elapses() {
        let mut app = App::new_with_seed(BOUNDS, 1);
        assert_eq!(app.screen(), Screen::Title);

        app.on_key(KeyCode::Char('1'));
        assert_eq!(app.screen(), Screen::Title);

        app.on_title_elapsed();
        assert_eq!(app.screen(), Screen::Menu);

        // A second elapse event must not fire again from another screen.
        app.on_key(KeyCode::Char('2'));
        app.on_title_elapsed();
        assert_eq!(app.screen(), Screen::Levels);
    }

    #[test]
    fn menu_starts_a_fresh_session() {
        let mut app = app_at_menu();
        app.session.score = 9;

        app.on_key(KeyCode::Char('1'));

        assert_eq!(app.screen(), Screen::Play);
        assert_eq!(app.session.score, 0);
        assert_eq!(app.session.snake.len(), 3);
    }

    #[test]
    fn menu_exit_raises_command_without_touching_session() {
        let mut app = app_at_menu();
        app.session.score = 4;

        assert_eq!(app.on_key(KeyCode::Char('3')), Some(AppCommand::Exit));
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.session.score, 4);
    }

    #[test]
    fn levels_selection_sets_difficulty_and_returns_to_menu() {
        let mut app = app_at_menu();

        app.on_key(KeyCode::Char('2'));
        assert_eq!(app.screen(), Screen::Levels);

        app.on_key(KeyCode::Char('3'));
        assert_eq!(app.level, Level::Hard);
        assert_eq!(app.screen(), Screen::Menu);
    }

    #[test]
    fn unmatched_levels_key_is_a_no_op() {
        let mut app = app_at_menu();
        app.on_key(KeyCode::Char('2'));

        app.on_key(KeyCode::Char('x'));
        app.on_key(KeyCode::Enter);

        assert_eq!(app.screen(), Screen::Levels);
        assert_eq!(app.level, Level::Medium);
    }

    #[test]
    fn play_routes_direction_keys_into_session() {
        let mut app = app_at_menu();
        app.on_key(KeyCode::Char('1'));

        app.on_key(KeyCode::Char('w'));
        assert_eq!(app.session.snake.direction(), Direction::Up);

        // Reversal of the new heading is ignored.
        app.on_key(KeyCode::Char('s'));
        assert_eq!(app.session.snake.direction(), Direction::Up);
    }

    #[test]
    fn escape_stops_the_session_into_the_scoreboard() {
        let mut app = app_at_menu();
        app.on_key(KeyCode::Char('1'));

        app.on_key(KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Scoreboard);
    }

    #[test]
    fn game_over_hands_control_to_the_scoreboard() {
        let mut app = app_at_menu();
        app.on_key(KeyCode::Char('1'));

        app.session.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 2, y: 3 },
                Position { x: 1, y: 3 },
                Position { x: 1, y: 2 },
            ],
            Direction::Left,
        );
        app.on_tick();

        assert_eq!(app.screen(), Screen::Scoreboard);
        assert!(app.session.is_game_over());
    }

    #[test]
    fn ticks_only_step_while_play_is_active() {
        let mut app = app_at_menu();
        let head = app.session.snake.head();

        app.on_tick();
        assert_eq!(app.session.snake.head(), head);

        app.on_key(KeyCode::Char('1'));
        app.session.food = Food::new(Position { x: 0, y: 0 });
        app.on_tick();
        assert_ne!(app.session.snake.head(), head);
    }

    #[test]
    fn scoreboard_restart_resets_score_and_snake() {
        let mut app = app_at_menu();
        app.on_key(KeyCode::Char('1'));
        app.session.score = 7;
        app.on_key(KeyCode::Esc);

        app.on_key(KeyCode::Char('r'));

        assert_eq!(app.screen(), Screen::Play);
        assert_eq!(app.session.score, 0);
        assert_eq!(app.session.snake.len(), 3);
        assert_eq!(app.session.snake.direction(), Direction::Right);
    }

    #[test]
    fn scoreboard_back_to_menu_keeps_score() {
        let mut app = app_at_menu();
        app.on_key(KeyCode::Char('1'));
        app.session.score = 7;
        app.on_key(KeyCode::Esc);

        app.on_key(KeyCode::Char('2'));

        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.session.score, 7);
    }

    #[test]
    fn difficulty_survives_session_restarts() {
        let mut app = app_at_menu();

        app.on_key(KeyCode::Char('2'));
        app.on_key(KeyCode::Char('1'));
        assert_eq!(app.level, Level::Easy);

        app.on_key(KeyCode::Char('1'));
        app.on_key(KeyCode::Esc);
        app.on_key(KeyCode::Char('1'));

        assert_eq!(app.level, Level::Easy);
    }
}
