pub mod ball;
pub mod brick;
pub mod paddle;
pub mod rect;

use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

use crate::config::Config;
use ball::Ball;
use brick::Brick;
use paddle::Paddle;
use rect::Rectf;

/// Margin between the first brick column and the side wall.
const BRICK_MARGIN: f32 = 5.0;
/// Gap between the paddle top and a racked ball.
const SERVE_GAP: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ball rides the paddle until the player serves.
    Ready,
    Playing,
    /// Breather after a lost life before the next serve.
    Respawn { ticks_left: u64 },
    GameOver,
    Won,
}

pub struct Breakout {
    config: Config,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
    pub lives: u32,
    pub score: u32,
    pub high_score: u32,
    pub phase: Phase,
    pub paused: bool,
}

impl Breakout {
    pub fn new(config: Config) -> Self {
        let paddle = Paddle {
            x: config.field_width / 2.0,
            y: config.paddle_y,
            width: config.paddle_width,
            height: config.paddle_height,
        };
        let bricks = Self::layout_bricks(&config);
        let mut game = Self {
            ball: Ball::new(0.0, 0.0, config.ball_radius, config.ball_speed, 1.0),
            lives: config.lives,
            config,
            paddle,
            bricks,
            score: 0,
            high_score: 0,
            phase: Phase::Ready,
            paused: false,
        };
        game.rack_ball();
        game
    }

    /// Columns of fixed width marching across the field, one brick per
    /// configured row in each column.
    fn layout_bricks(config: &Config) -> Vec<Brick> {
        let mut bricks = Vec::new();
        let mut x = BRICK_MARGIN;
        while x < config.field_width - BRICK_MARGIN {
            let cx = x + config.brick_width / 2.0;
            for &(cy, hits) in &config.brick_rows {
                bricks.push(Brick::new(
                    cx,
                    cy,
                    config.brick_width,
                    config.brick_height,
                    hits,
                ));
            }
            x += config.brick_width;
        }
        bricks
    }

    /// Place a fresh ball on the paddle, ready to serve.
    fn rack_ball(&mut self) {
        let paddle_top = self.paddle.bounds().top;
        self.ball = Ball::new(
            self.paddle.x,
            paddle_top - self.config.ball_radius - SERVE_GAP,
            self.config.ball_radius,
            self.config.ball_speed,
            1.0,
        );
    }

    /// Serve the racked ball: upward, random horizontal direction.
    pub fn launch(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        let mut rng = rand::thread_rng();
        self.ball.dx = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.dy = -1.0;
        self.phase = Phase::Playing;
        log::debug!("Serve: dx={}", self.ball.dx);
    }

    pub fn field_width(&self) -> f32 {
        self.config.field_width
    }

    pub fn field_height(&self) -> f32 {
        self.config.field_height
    }

    pub fn bricks_left(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }

    pub fn update(&mut self) {
        if self.paused {
            return;
        }
        match self.phase {
            Phase::Playing => self.step(),
            Phase::Respawn { ticks_left } => {
                if ticks_left <= 1 {
                    self.rack_ball();
                    self.phase = Phase::Ready;
                } else {
                    self.phase = Phase::Respawn {
                        ticks_left: ticks_left - 1,
                    };
                }
            }
            _ => {}
        }
    }

    /// One simulation tick: resolve contacts, then check the win and
    /// lost-ball conditions, then move the ball.
    fn step(&mut self) {
        self.resolve_collisions();

        if self.bricks_left() == 0 {
            self.record_high_score();
            self.phase = Phase::Won;
            log::info!("Cleared the wall with {} points", self.score);
            return;
        }

        if self.ball.bounds().bottom >= self.config.field_height {
            self.lives -= 1;
            if self.lives == 0 {
                self.record_high_score();
                self.phase = Phase::GameOver;
                log::info!("Game over at {} points", self.score);
            } else {
                self.phase = Phase::Respawn {
                    ticks_left: self.config.respawn_ticks(),
                };
                log::info!("Ball lost, {} lives remaining", self.lives);
            }
            return;
        }

        self.ball.advance(self.config.field_width);
    }

    /// Overlap query against the paddle and live bricks, then the
    /// deflection rule: a lone contact bounces the ball horizontally
    /// when its center is past the object's side edge and vertically
    /// otherwise; several simultaneous contacts bounce it vertically.
    /// Every brick touched takes a hit.
    fn resolve_collisions(&mut self) {
        let ball_bounds = self.ball.bounds();

        let mut contacts: Vec<Rectf> = Vec::new();
        if self.paddle.bounds().overlaps(&ball_bounds) {
            contacts.push(self.paddle.bounds());
        }
        let mut hit_bricks: Vec<usize> = Vec::new();
        for (i, brick) in self.bricks.iter().enumerate() {
            if brick.is_alive() && brick.rect.overlaps(&ball_bounds) {
                contacts.push(brick.rect);
                hit_bricks.push(i);
            }
        }

        match contacts.as_slice() {
            [] => {}
            [rect] => {
                let cx = ball_bounds.center_x();
                if cx > rect.right {
                    self.ball.dx = 1.0;
                } else if cx < rect.left {
                    self.ball.dx = -1.0;
                } else {
                    self.ball.dy = -self.ball.dy;
                }
            }
            _ => self.ball.dy = -self.ball.dy,
        }

        for i in hit_bricks {
            if let Some(points) = self.bricks[i].hit() {
                self.score += points;
                log::debug!("Brick destroyed, score {}", self.score);
            }
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Char('p') | KeyCode::Char('P') => {
                if !matches!(self.phase, Phase::GameOver | Phase::Won) {
                    self.paused = !self.paused;
                }
            }
            _ => {
                if matches!(self.phase, Phase::GameOver | Phase::Won) {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.reset();
                    }
                    return;
                }
                if self.paused {
                    return;
                }
                match key.code {
                    KeyCode::Left => self.nudge_paddle(-self.config.paddle_step),
                    KeyCode::Right => self.nudge_paddle(self.config.paddle_step),
                    KeyCode::Char(' ') | KeyCode::Up => self.launch(),
                    _ => {}
                }
            }
        }
    }

    /// Move the paddle; a racked ball stays centered on it.
    fn nudge_paddle(&mut self, offset: f32) {
        let moved = self.paddle.slide(offset, self.config.field_width);
        if moved && self.phase == Phase::Ready {
            self.ball.x = self.paddle.x;
        }
    }

    pub fn reset(&mut self) {
        let high_score = self.high_score;
        *self = Breakout::new(self.config.clone());
        self.high_score = high_score;
        log::info!("Game restarted");
    }

    fn record_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}
