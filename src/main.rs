use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;

use arcade_snake::config::{Level, PLAY_FIELD, TITLE_SCREEN_DURATION};
use arcade_snake::error::AppError;
use arcade_snake::input;
use arcade_snake::renderer;
use arcade_snake::scheduler::{Deadline, TickScheduler};
use arcade_snake::screen::{App, AppCommand};
use arcade_snake::terminal_runtime::{TerminalSession, restore_terminal};

/// How long one key poll blocks; doubles as the frame pacing.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Classic arcade Snake for the terminal")]
struct Cli {
    /// Difficulty preselected at startup; still changeable in-game.
    #[arg(long, default_value = "medium")]
    difficulty: Level,

    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    install_panic_hook();
    run(&cli)
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut terminal_session = TerminalSession::enter()?;
    terminal_session.ensure_fits(PLAY_FIELD)?;

    let mut app = match cli.seed {
        Some(seed) => App::new_with_seed(PLAY_FIELD, seed),
        None => App::new(PLAY_FIELD),
    };
    app.level = cli.difficulty;

    let now = Instant::now();
    let mut ticks = TickScheduler::new(now);
    let mut title_timer = Deadline::after(now, TITLE_SCREEN_DURATION);

    loop {
        terminal_session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &app))?;

        if let Some(key) = input::poll_key(INPUT_POLL_INTERVAL)? {
            if app.on_key(key) == Some(AppCommand::Exit) {
                break;
            }
        }

        let now = Instant::now();
        if title_timer.poll(now) {
            app.on_title_elapsed();
        }

        // Cadence is re-derived from the current difficulty every pass.
        if ticks.poll(now, app.level.tick_interval()) {
            app.on_tick();
        }
    }

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
