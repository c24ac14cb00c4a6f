use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Level;

/// Draws the title screen: the game name centered on an empty field.
pub fn render_title(frame: &mut Frame<'_>, area: Rect) {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        row,
    );
}

/// Draws the main menu as a centered popup.
pub fn render_menu(frame: &mut Frame<'_>, area: Rect) {
    let entries = ["1. Play", "2. Levels", "3. Exit"];
    let lines = entries.iter().map(|entry| Line::from(*entry)).collect();

    render_popup(frame, area, " menu ", &entries, lines);
}

/// Draws the difficulty selection popup, marking the active level.
pub fn render_levels_menu(frame: &mut Frame<'_>, area: Rect, selected: Level) {
    let entries = [
        (Level::Easy, "1. Easy"),
        (Level::Medium, "2. Medium"),
        (Level::Hard, "3. Hard"),
    ];

    let texts: Vec<&str> = entries.iter().map(|(_, text)| *text).collect();
    let lines = entries
        .iter()
        .map(|(level, text)| {
            if *level == selected {
                Line::styled(
                    *text,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::from(*text)
            }
        })
        .collect();

    render_popup(frame, area, " levels ", &texts, lines);
}

/// Draws the end-of-session scoreboard popup.
pub fn render_scoreboard(frame: &mut Frame<'_>, area: Rect, score: u32) {
    let score_text = format!("Your score: {score}");
    let entries = [score_text.as_str(), "", "1. Restart", "2. Menu"];
    let lines = vec![
        Line::styled(
            score_text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("1. Restart"),
        Line::from("2. Menu"),
    ];

    render_popup(frame, area, " scoreboard ", &entries, lines);
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    raw_entries: &[&str],
    lines: Vec<Line<'_>>,
) {
    let popup = popup_area(area, raw_entries);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

/// Sizes the popup to its widest content line so long score values never
/// clip, then centers it.
fn popup_area(area: Rect, content: &[&str]) -> Rect {
    let content_width = content
        .iter()
        .map(|entry| UnicodeWidthStr::width(*entry))
        .max()
        .unwrap_or(0);

    let width = u16::try_from(content_width + 8)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let height = u16::try_from(content.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);

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
