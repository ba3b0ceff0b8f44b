use crate::game::rect::Rectf;

/// The ball: a circle moving with a scalar speed and a direction
/// vector whose components are each +1 or -1.
#[derive(Debug, Clone)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Ball {
    /// A freshly served ball always moves upward.
    pub fn new(x: f32, y: f32, radius: f32, speed: f32, dx: f32) -> Self {
        Self {
            x,
            y,
            radius,
            speed,
            dx,
            dy: -1.0,
        }
    }

    pub fn bounds(&self) -> Rectf {
        Rectf::centered(self.x, self.y, self.radius * 2.0, self.radius * 2.0)
    }

    /// Bounce off the side and top walls, then advance one step.
    /// Falling out the bottom is the game's concern, not the ball's.
    pub fn advance(&mut self, field_width: f32) {
        let bounds = self.bounds();
        if bounds.left <= 0.0 || bounds.right >= field_width {
            self.dx = -self.dx;
        }
        if bounds.top <= 0.0 {
            self.dy = -self.dy;
        }
        self.x += self.dx * self.speed;
        self.y += self.dy * self.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_by_speed() {
        let mut ball = Ball::new(100.0, 100.0, 10.0, 10.0, 1.0);
        ball.advance(600.0);
        assert_eq!(ball.x, 110.0);
        assert_eq!(ball.y, 90.0);
    }

    #[test]
    fn left_wall_flips_horizontal_direction() {
        let mut ball = Ball::new(9.0, 100.0, 10.0, 10.0, -1.0);
        ball.advance(600.0);
        assert_eq!(ball.dx, 1.0);
        assert_eq!(ball.x, 19.0);
    }

    #[test]
    fn right_wall_flips_horizontal_direction() {
        let mut ball = Ball::new(592.0, 100.0, 10.0, 10.0, 1.0);
        ball.advance(600.0);
        assert_eq!(ball.dx, -1.0);
        assert_eq!(ball.x, 582.0);
    }

    #[test]
    fn top_wall_flips_vertical_direction() {
        let mut ball = Ball::new(100.0, 8.0, 10.0, 10.0, 1.0);
        ball.advance(600.0);
        assert_eq!(ball.dy, 1.0);
        assert_eq!(ball.y, 18.0);
    }
}
