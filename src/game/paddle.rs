use crate::game::rect::Rectf;

/// Player-controlled rectangle, horizontal movement only.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn bounds(&self) -> Rectf {
        Rectf::centered(self.x, self.y, self.width, self.height)
    }

    /// Shift horizontally by `offset`. A move that would cross either
    /// side wall is refused entirely. Returns whether it moved.
    pub fn slide(&mut self, offset: f32, field_width: f32) -> bool {
        let bounds = self.bounds();
        if bounds.left + offset >= 0.0 && bounds.right + offset <= field_width {
            self.x += offset;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Paddle {
        Paddle {
            x: 300.0,
            y: 326.0,
            width: 80.0,
            height: 10.0,
        }
    }

    #[test]
    fn slide_moves_within_bounds() {
        let mut p = paddle();
        assert!(p.slide(10.0, 600.0));
        assert_eq!(p.x, 310.0);
    }

    #[test]
    fn slide_past_wall_is_refused() {
        let mut p = paddle();
        p.x = 45.0; // left edge at 5
        assert!(!p.slide(-10.0, 600.0));
        assert_eq!(p.x, 45.0);
        // A smaller step still fits
        assert!(p.slide(-5.0, 600.0));
        assert_eq!(p.x, 40.0);
    }
}
