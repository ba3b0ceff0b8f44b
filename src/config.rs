use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "smashout.json";

/// Tunable game parameters, all in logical playfield units unless
/// noted. Defaults reproduce the classic layout: a 600x400 field,
/// three rows of bricks worth 3/2/1 hits, three lives, and a ball
/// that moves 10 units every 50 ms tick.
///
/// A `smashout.json` next to the executable overrides any subset of
/// fields; a malformed file is ignored with a warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed simulation step in milliseconds.
    pub tick_ms: u64,
    pub field_width: f32,
    pub field_height: f32,
    pub lives: u32,
    pub ball_radius: f32,
    /// Distance the ball travels per tick.
    pub ball_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Vertical center of the paddle.
    pub paddle_y: f32,
    /// Horizontal distance per key press.
    pub paddle_step: f32,
    pub brick_width: f32,
    pub brick_height: f32,
    /// One `(center y, hit points)` pair per brick row.
    pub brick_rows: Vec<(f32, u32)>,
    /// Delay between losing a life and the next serve.
    pub respawn_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            field_width: 600.0,
            field_height: 400.0,
            lives: 3,
            ball_radius: 10.0,
            ball_speed: 10.0,
            paddle_width: 80.0,
            paddle_height: 10.0,
            paddle_y: 326.0,
            paddle_step: 10.0,
            brick_width: 75.0,
            brick_height: 20.0,
            brick_rows: vec![(50.0, 3), (70.0, 2), (90.0, 1)],
            respawn_delay_ms: 1000,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let path = Self::config_path();
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<Config>(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn config_path() -> PathBuf {
        // Look next to the executable
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join(CONFIG_FILE);
            }
        }
        PathBuf::from(CONFIG_FILE)
    }

    /// Clamp values that would stall or break the simulation.
    fn sanitized(mut self) -> Self {
        self.tick_ms = self.tick_ms.max(10);
        self.lives = self.lives.max(1);
        self.ball_speed = self.ball_speed.max(1.0);
        self.ball_radius = self.ball_radius.max(1.0);
        self.field_width = self.field_width.max(100.0);
        self.field_height = self.field_height.max(100.0);
        self.paddle_width = self.paddle_width.clamp(10.0, self.field_width);
        self.brick_width = self.brick_width.clamp(1.0, self.field_width);
        self.brick_height = self.brick_height.max(1.0);
        for row in &mut self.brick_rows {
            row.1 = row.1.max(1);
        }
        self
    }

    /// Respawn delay expressed in whole ticks, rounded up.
    pub fn respawn_ticks(&self) -> u64 {
        self.respawn_delay_ms.div_ceil(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_respawn_is_twenty_ticks() {
        let config = Config::default();
        assert_eq!(config.respawn_ticks(), 20);
    }

    #[test]
    fn respawn_ticks_round_up() {
        let config = Config {
            tick_ms: 30,
            respawn_delay_ms: 100,
            ..Config::default()
        };
        assert_eq!(config.respawn_ticks(), 4);
    }

    #[test]
    fn sanitize_clamps_degenerate_values() {
        let config = Config {
            tick_ms: 0,
            lives: 0,
            ball_speed: -5.0,
            // A non-positive column width would stall brick layout
            brick_width: 0.0,
            brick_rows: vec![(50.0, 0), (70.0, 2)],
            ..Config::default()
        }
        .sanitized();
        assert_eq!(config.tick_ms, 10);
        assert_eq!(config.lives, 1);
        assert_eq!(config.ball_speed, 1.0);
        assert_eq!(config.brick_width, 1.0);
        // Every row keeps at least one hit point, so the wall is
        // never born already cleared
        assert!(config.brick_rows.iter().all(|&(_, hits)| hits >= 1));
    }

    #[test]
    fn partial_json_overrides_keep_other_defaults() {
        let config: Config = serde_json::from_str(r#"{"lives": 5}"#).unwrap();
        assert_eq!(config.lives, 5);
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.brick_rows.len(), 3);
    }
}
