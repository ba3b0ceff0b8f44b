pub mod field;
pub mod hud;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::Phase;

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
        .title(" 🧱 Smashout ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 100, 100))
                .add_modifier(Modifier::BOLD),
        );

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(8),    // Playfield
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(hud::status_line(&app.game)), chunks[0]);

    let lines = field::render_field(
        &app.game,
        chunks[1].width as usize,
        chunks[1].height as usize,
    );
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    frame.render_widget(Paragraph::new(help_line(app)), chunks[2]);

    if let Some((message, color)) = banner(app) {
        render_banner(frame, chunks[1], message, color);
    }
}

/// The center-screen message for the phases that have one.
fn banner(app: &App) -> Option<(&'static str, Color)> {
    match app.game.phase {
        Phase::Ready => Some(("Press Space to start", Color::Rgb(255, 220, 80))),
        Phase::Won => Some(("You win!", Color::Rgb(80, 220, 80))),
        Phase::GameOver => Some(("Game Over", Color::Rgb(220, 80, 80))),
        _ => None,
    }
}

fn render_banner(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let w = (message.len() as u16 + 6).min(area.width);
    let h = 3u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let overlay = Rect::new(x, y, w, h);

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let text = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

fn help_line(app: &App) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let sep = Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60)));

    if app.game.paused {
        return Line::from(Span::styled(
            " ⏸ PAUSED - Press P to resume ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    match app.game.phase {
        Phase::GameOver | Phase::Won => Line::from(vec![
            Span::styled(" ENTER Play again ", key),
            sep.clone(),
            Span::styled("Q Quit", dim),
        ]),
        Phase::Ready => Line::from(vec![
            Span::styled(" ←→ Move Paddle ", dim),
            sep.clone(),
            Span::styled("SPACE Launch ", key),
            sep.clone(),
            Span::styled("P Pause ", dim),
            sep.clone(),
            Span::styled("R Restart ", dim),
            sep.clone(),
            Span::styled("Q Quit", dim),
        ]),
        _ => Line::from(vec![
            Span::styled(" ←→ Move Paddle ", dim),
            sep.clone(),
            Span::styled("P Pause ", dim),
            sep.clone(),
            Span::styled("R Restart ", dim),
            sep.clone(),
            Span::styled("Q Quit", dim),
        ]),
    }
}
