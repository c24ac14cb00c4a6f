use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GridSize, Level};
use crate::game::Session;
use crate::screen::{App, Screen};
use crate::snake::Position;
use crate::ui::menu;

/// Renders the active screen from immutable state.
///
/// This is the single entry point the event loop calls once per frame;
/// nothing here mutates the app.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    match app.screen() {
        Screen::Title => menu::render_title(frame, area),
        Screen::Menu => menu::render_menu(frame, area),
        Screen::Levels => menu::render_levels_menu(frame, area, app.level),
        Screen::Play => render_play(frame, area, &app.session, app.level),
        Screen::Scoreboard => menu::render_scoreboard(frame, area, app.session.score),
    }
}

fn render_play(frame: &mut Frame<'_>, area: Rect, session: &Session, level: Level) {
    let [field_row, status_row] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

    let field = field_rect(field_row, session.bounds());
    let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    render_food(frame, inner, session);
    render_snake(frame, inner, session);

    frame.render_widget(
        Paragraph::new(Line::from(format!(
            "Score: {}   Level: {}   Esc ends the session",
            session.score,
            level.label()
        )))
        .style(Style::default().fg(Color::DarkGray)),
        status_row,
    );
}

/// Centers a border-wrapped play field inside the available row.
fn field_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = (bounds.width + 2).min(area.width);
    let height = (bounds.height + 2).min(area.height);

    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(mid);

    center
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &Session) {
    let Some((x, y)) = cell_to_screen(inner, session.bounds(), session.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &Session) {
    let head = session.snake.head();

    let buffer = frame.buffer_mut();
    for segment in session.snake.segments() {
        let Some((x, y)) = cell_to_screen(inner, session.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(Color::Green));
        }
    }
}

/// Maps a logical cell to a terminal coordinate inside the play field.
fn cell_to_screen(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
