/// Axis-aligned box in playfield units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectf {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rectf {
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            left: cx - width / 2.0,
            top: cy - height / 2.0,
            right: cx + width / 2.0,
            bottom: cy + height / 2.0,
        }
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    /// Touching edges count as overlapping.
    pub fn overlaps(&self, other: &Rectf) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_builds_symmetric_box() {
        let r = Rectf::centered(100.0, 50.0, 80.0, 20.0);
        assert_eq!(r.left, 60.0);
        assert_eq!(r.right, 140.0);
        assert_eq!(r.top, 40.0);
        assert_eq!(r.bottom, 60.0);
        assert_eq!(r.center_x(), 100.0);
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Rectf::centered(0.0, 0.0, 10.0, 10.0);
        let b = Rectf::centered(4.0, 4.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_overlap() {
        let a = Rectf::centered(0.0, 0.0, 10.0, 10.0);
        let b = Rectf::centered(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = Rectf::centered(0.0, 0.0, 10.0, 10.0);
        let b = Rectf::centered(20.0, 0.0, 8.0, 8.0);
        assert!(!a.overlaps(&b));
    }
}
