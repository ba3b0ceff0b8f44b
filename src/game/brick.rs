use crate::game::rect::Rectf;

/// Points awarded per initial hit point when a brick is destroyed.
const POINTS_PER_HIT: u32 = 10;

/// Static rectangle with a hit-point counter; removed at zero.
#[derive(Debug, Clone)]
pub struct Brick {
    pub rect: Rectf,
    pub hits: u32,
    strength: u32,
}

impl Brick {
    pub fn new(cx: f32, cy: f32, width: f32, height: f32, hits: u32) -> Self {
        Self {
            rect: Rectf::centered(cx, cy, width, height),
            hits,
            strength: hits,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hits > 0
    }

    /// Take one hit. Tougher bricks pay out more when they finally go.
    pub fn hit(&mut self) -> Option<u32> {
        if self.hits == 0 {
            return None;
        }
        self.hits -= 1;
        (self.hits == 0).then(|| self.strength * POINTS_PER_HIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brick_survives_until_last_hit() {
        let mut brick = Brick::new(100.0, 50.0, 75.0, 20.0, 3);
        assert_eq!(brick.hit(), None);
        assert_eq!(brick.hit(), None);
        assert!(brick.is_alive());
        assert_eq!(brick.hit(), Some(30));
        assert!(!brick.is_alive());
    }

    #[test]
    fn dead_brick_pays_nothing_more() {
        let mut brick = Brick::new(100.0, 50.0, 75.0, 20.0, 1);
        assert_eq!(brick.hit(), Some(10));
        assert_eq!(brick.hit(), None);
        assert_eq!(brick.hits, 0);
    }
}
