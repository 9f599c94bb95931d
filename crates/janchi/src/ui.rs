//! Per-scene rendering.
//!
//! Scenes draw over the effects layer; every clickable control reports
//! the rectangle it was rendered into so the app can hit-test mouse
//! clicks against it.

use janchi_core::SceneId;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph, Wrap},
};

/// Stagger between revealed title characters on the birthday scene.
const TITLE_STAGGER_MS: u64 = 50;

const PINK: Color = Color::Rgb(255, 107, 157);
const ROSE: Color = Color::Rgb(255, 64, 129);
const GOLD: Color = Color::Rgb(255, 215, 0);
const RED: Color = Color::Rgb(255, 23, 68);

/// Clickable controls, identified per scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    TapBalloon,
    Yes,
    No,
    Next,
    Heart,
    Music,
}

/// Everything the scene renderers need from the app state.
pub struct SceneView<'a> {
    pub recipient: &'a str,
    pub balloon_popped: bool,
    pub question_visible: bool,
    pub retry_visible: bool,
    pub heart_pulsing: bool,
    pub completed: bool,
    pub music_label: &'static str,
    pub since_entry_ms: u64,
}

/// Draw the active scene's widgets and collect its control rects.
pub fn render_scene(
    frame: &mut Frame,
    scene: SceneId,
    view: &SceneView,
    buttons: &mut Vec<(Rect, ButtonId)>,
) {
    match scene {
        SceneId::Balloon => render_balloon(frame, view, buttons),
        SceneId::Birthday => render_birthday(frame, view, buttons),
        SceneId::Memories => render_memories(frame, buttons),
        SceneId::Heart => render_heart(frame, view, buttons),
        SceneId::Letter => render_letter(frame, view, buttons),
        SceneId::Final => render_final(frame, view),
    }
}

fn render_balloon(frame: &mut Frame, view: &SceneView, buttons: &mut Vec<(Rect, ButtonId)>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(janchi_art::BALLOON.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    if view.balloon_popped {
        frame.render_widget(art_paragraph(&janchi_art::BALLOON_POPPED, PINK), chunks[1]);
        let hint = Paragraph::new("pop!".dark_gray()).alignment(Alignment::Center);
        frame.render_widget(hint, chunks[3]);
    } else {
        frame.render_widget(art_paragraph(&janchi_art::BALLOON, RED), chunks[1]);
        let button = Paragraph::new(Line::from("[ tap the balloon ]".bold().fg(PINK)))
            .alignment(Alignment::Center);
        frame.render_widget(button, chunks[3]);
        buttons.push((chunks[3], ButtonId::TapBalloon));
    }

    frame.render_widget(help_line(), chunks[5]);
}

fn render_birthday(frame: &mut Frame, view: &SceneView, buttons: &mut Vec<(Rect, ButtonId)>) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(janchi_art::CAKE.len() as u16),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    // Music toggle, top right.
    let music_rect = right_corner(chunks[0], 12);
    let music = Paragraph::new(view.music_label).alignment(Alignment::Right);
    frame.render_widget(music, music_rect);
    buttons.push((music_rect, ButtonId::Music));

    // Title characters appear one by one after the scene is entered.
    let title = format!("✦ happy birthday, {}! ✦", view.recipient);
    let shown = ((view.since_entry_ms / TITLE_STAGGER_MS) as usize).min(title.chars().count());
    let partial: String = title.chars().take(shown).collect();
    let title_widget = Paragraph::new(Line::from(partial.bold().fg(GOLD))).centered();
    frame.render_widget(title_widget, chunks[2]);

    frame.render_widget(art_paragraph(&janchi_art::CAKE, PINK), chunks[4]);

    if view.question_visible {
        let card = centered_box(chunks[6], 42);
        let lines = vec![
            Line::from("are you enjoying your day?").centered(),
            Line::from(""),
            Line::from(vec!["[y] yes".bold().fg(PINK), "      ".into(), "[n] no".dark_gray()])
                .centered(),
        ];
        let widget = Paragraph::new(lines).block(Block::bordered().border_style(Style::new().fg(PINK)));
        frame.render_widget(widget, card);

        // Left and right halves of the answer row.
        let answers_y = card.y + 3;
        let half = card.width.saturating_sub(2) / 2;
        buttons.push((Rect::new(card.x + 1, answers_y, half, 1), ButtonId::Yes));
        buttons.push((Rect::new(card.x + 1 + half, answers_y, half, 1), ButtonId::No));
    } else if view.retry_visible {
        let message = Paragraph::new(Line::from("that's okay… let's start over ♥".fg(ROSE)))
            .alignment(Alignment::Center);
        frame.render_widget(message, chunks[6]);
    }

    frame.render_widget(help_line(), chunks[8]);
}

fn render_memories(frame: &mut Frame, buttons: &mut Vec<(Rect, ButtonId)>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    let title = Paragraph::new(Line::from("our little gallery".bold().fg(GOLD))).centered();
    frame.render_widget(title, chunks[1]);

    let row = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(18),
        Constraint::Length(2),
        Constraint::Length(18),
        Constraint::Length(2),
        Constraint::Length(18),
        Constraint::Fill(1),
    ])
    .split(chunks[3]);

    let photos = [
        ("first trip", "⛰  ☼"),
        ("that summer", "🌊  ✿"),
        ("every day since", "♥  ♥"),
    ];
    for (slot, (caption, content)) in [row[1], row[3], row[5]].into_iter().zip(photos) {
        let photo = Paragraph::new(vec![
            Line::from(""),
            Line::from(content).centered(),
            Line::from(""),
        ])
        .block(Block::bordered().title(caption).border_style(Style::new().fg(PINK)));
        frame.render_widget(photo, slot);
    }

    let next = Paragraph::new(Line::from("[enter] next →".bold().fg(PINK))).centered();
    frame.render_widget(next, chunks[5]);
    buttons.push((chunks[5], ButtonId::Next));

    frame.render_widget(help_line(), chunks[7]);
}

fn render_heart(frame: &mut Frame, view: &SceneView, buttons: &mut Vec<(Rect, ButtonId)>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(janchi_art::HEART.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    let (art, color): (&[&str], Color) = if view.heart_pulsing {
        (&janchi_art::HEART_PULSE, ROSE)
    } else {
        (&janchi_art::HEART, RED)
    };
    frame.render_widget(art_paragraph(art, color), chunks[1]);
    buttons.push((chunks[1], ButtonId::Heart));

    let hint = if view.heart_pulsing {
        Line::from("♥ !".fg(ROSE))
    } else {
        Line::from("tap the heart".dark_gray())
    };
    frame.render_widget(Paragraph::new(hint).centered(), chunks[3]);

    frame.render_widget(help_line(), chunks[5]);
}

fn render_letter(frame: &mut Frame, view: &SceneView, buttons: &mut Vec<(Rect, ButtonId)>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(janchi_art::ENVELOPE.len() as u16),
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    frame.render_widget(art_paragraph(&janchi_art::ENVELOPE, GOLD), chunks[1]);

    let card = centered_box(chunks[3], 46);
    let text = format!(
        "dear {},\n\nanother year of you, and the world is better for it. \
         thank you for the laughter, the patience, and the light you \
         carry into every room.\n\nwith all my heart ♥",
        view.recipient
    );
    let letter = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" for you ").border_style(Style::new().fg(PINK)));
    frame.render_widget(letter, card);

    let next = Paragraph::new(Line::from("[enter] next →".bold().fg(PINK))).centered();
    frame.render_widget(next, chunks[5]);
    buttons.push((chunks[5], ButtonId::Next));

    frame.render_widget(help_line(), chunks[7]);
}

fn render_final(frame: &mut Frame, view: &SceneView) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    let headline = format!("happy birthday, {} ♥", view.recipient);
    frame.render_widget(
        Paragraph::new(Line::from(headline.bold().fg(PINK))).centered(),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from("thank you for every moment".fg(GOLD))).centered(),
        chunks[3],
    );
    if view.completed {
        frame.render_widget(
            Paragraph::new(Line::from("…and once more, from the top".dark_gray())).centered(),
            chunks[5],
        );
    }

    frame.render_widget(help_line(), chunks[7]);
}

/// Render an art block centered in its area.
fn art_paragraph(art: &[&str], color: Color) -> Paragraph<'static> {
    let lines: Vec<Line> = art
        .iter()
        .map(|s| Line::from(s.to_string()).style(Style::new().fg(color)))
        .collect();
    Paragraph::new(lines).alignment(Alignment::Center)
}

/// A horizontally centered box of the given width within `area`.
fn centered_box(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// The rightmost `width` cells of a one-line area.
fn right_corner(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.right().saturating_sub(width), area.y, width, 1)
}

/// Footer key hints, shared by all scenes.
fn help_line() -> Paragraph<'static> {
    let line = Line::from(vec![
        "q".bold().fg(PINK),
        " quit  ".dark_gray(),
        "←".bold().fg(PINK),
        " back  ".dark_gray(),
        "→".bold().fg(PINK),
        " next  ".dark_gray(),
        "m".bold().fg(PINK),
        " music".dark_gray(),
    ])
    .centered();
    Paragraph::new(line)
}
