use ratatui::prelude::*;

use crate::game::{Breakout, Phase};

const FIELD_BG: Color = Color::Rgb(10, 10, 20);
const WALL_FG: Color = Color::Rgb(60, 60, 80);

/// Brick shading follows remaining hit points: the tougher the brick,
/// the hotter the color.
fn brick_color(hits: u32) -> Color {
    match hits {
        1 => Color::Rgb(220, 200, 30),
        2 => Color::Rgb(220, 130, 30),
        _ => Color::Rgb(220, 80, 80),
    }
}

/// Rasterize the logical playfield into a character grid of the given
/// terminal size.
pub fn render_field(game: &Breakout, width: usize, height: usize) -> Vec<Line<'static>> {
    let w = width;
    let h = height;
    if w == 0 || h == 0 {
        return Vec::new();
    }

    // Scale factors from playfield units to cells
    let sx = w as f32 / game.field_width();
    let sy = h as f32 / game.field_height();

    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(FIELD_BG)); w]; h];

    // Walls: the ball bounces off the sides and the top
    let wall = Style::default().fg(WALL_FG).bg(FIELD_BG);
    for row in grid.iter_mut() {
        row[0] = ('│', wall);
        if w > 1 {
            row[w - 1] = ('│', wall);
        }
    }
    for x in 0..w {
        grid[0][x] = ('─', wall);
    }
    grid[0][0] = ('╭', wall);
    if w > 1 {
        grid[0][w - 1] = ('╮', wall);
    }

    // Bricks
    for brick in game.bricks.iter().filter(|b| b.is_alive()) {
        let bx_start = (brick.rect.left * sx) as usize;
        let bx_end = ((brick.rect.right * sx) as usize).min(w);
        let by = (brick.rect.top * sy) as usize;
        if by >= h {
            continue;
        }
        let style = Style::default().fg(brick_color(brick.hits)).bg(FIELD_BG);
        for bx in bx_start..bx_end {
            let ch = if bx == bx_start {
                '▐'
            } else if bx + 1 >= bx_end {
                '▌'
            } else {
                '█'
            };
            grid[by][bx] = (ch, style);
        }
    }

    // Paddle
    let paddle = game.paddle.bounds();
    let px_start = (paddle.left * sx) as usize;
    let px_end = ((paddle.right * sx) as usize).min(w);
    let py = (paddle.top * sy) as usize;
    if py < h {
        let style = Style::default()
            .fg(Color::Rgb(180, 200, 255))
            .bg(Color::Rgb(30, 50, 120))
            .add_modifier(Modifier::BOLD);
        for px in px_start..px_end {
            let ch = if px == px_start {
                '╣'
            } else if px + 1 >= px_end {
                '╠'
            } else {
                '═'
            };
            grid[py][px] = (ch, style);
        }
    }

    // Ball, hidden while waiting out a lost life
    if !matches!(game.phase, Phase::Respawn { .. }) {
        let bx = (game.ball.x * sx) as usize;
        let by = (game.ball.y * sy) as usize;
        if bx < w && by < h {
            grid[by][bx] = (
                '●',
                Style::default()
                    .fg(Color::Rgb(255, 255, 255))
                    .bg(FIELD_BG)
                    .add_modifier(Modifier::BOLD),
            );
            // One-cell trail behind the ball; only meaningful once it
            // is actually moving
            if game.phase == Phase::Playing {
                let tx = ((game.ball.x - game.ball.dx * game.ball.speed) * sx) as usize;
                let ty = ((game.ball.y - game.ball.dy * game.ball.speed) * sy) as usize;
                if tx < w && ty < h && (tx != bx || ty != by) {
                    grid[ty][tx] =
                        ('·', Style::default().fg(Color::Rgb(100, 100, 120)).bg(FIELD_BG));
                }
            }
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn grid_matches_requested_size() {
        let game = Breakout::new(Config::default());
        let lines = render_field(&game, 60, 24);
        assert_eq!(lines.len(), 24);
        assert!(lines.iter().all(|line| line.spans.len() == 60));
    }

    #[test]
    fn zero_area_renders_nothing() {
        let game = Breakout::new(Config::default());
        assert!(render_field(&game, 0, 10).is_empty());
        assert!(render_field(&game, 10, 0).is_empty());
    }

    fn has_trail(lines: &[Line<'_>]) -> bool {
        lines
            .iter()
            .any(|line| line.spans.iter().any(|span| span.content == "·"))
    }

    #[test]
    fn racked_ball_has_no_trail() {
        let game = Breakout::new(Config::default());
        assert!(!has_trail(&render_field(&game, 60, 24)));
    }

    #[test]
    fn moving_ball_leaves_a_trail() {
        let mut game = Breakout::new(Config::default());
        game.launch();
        assert!(has_trail(&render_field(&game, 60, 24)));
    }
}
