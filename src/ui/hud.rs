use ratatui::prelude::*;

use crate::game::Breakout;

pub fn status_line(game: &Breakout) -> Line<'static> {
    let divider = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
    Line::from(vec![
        Span::styled(" 🧱 ", Style::default()),
        Span::styled(
            format!("Score: {} ", game.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        divider.clone(),
        Span::styled(
            format!("Lives: {} ", "♥ ".repeat(game.lives as usize)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        divider.clone(),
        Span::styled(
            format!("🏆 High: {} ", game.high_score),
            Style::default().fg(Color::Cyan),
        ),
        divider,
        Span::styled(
            format!("Bricks: {}/{} ", game.bricks_left(), game.bricks.len()),
            Style::default().fg(Color::Green),
        ),
    ])
}
