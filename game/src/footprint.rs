use engine::Sprite;
use glam::Vec2;

/// The sprite size every actor shares for hit-testing and collisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    width: u32,
    height: u32,
}

impl Footprint {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(sprite: &Sprite) -> Self {
        Self::new(sprite.width, sprite.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Half extents, halved in whole pixels: a 41px wide sprite reaches
    /// 20px either side of its centre.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }

    /// Box around `center`. Screen space: `top` is the smaller y.
    pub fn bounds(&self, center: Vec2) -> Bounds {
        let half = self.half_extents();
        Bounds {
            left: center.x - half.x,
            right: center.x + half.x,
            top: center.y - half.y,
            bottom: center.y + half.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Strictly inside; a point on an edge is outside.
    pub fn contains_strict(&self, point: Vec2) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.top && point.y < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_sizes_halve_down() {
        let fp = Footprint::new(41, 57);
        assert_eq!(fp.half_extents(), Vec2::new(20.0, 28.0));
        assert_eq!(
            fp.bounds(Vec2::new(100.0, 100.0)),
            Bounds {
                left: 80.0,
                right: 120.0,
                top: 72.0,
                bottom: 128.0,
            }
        );
    }

    #[test]
    fn edges_are_excluded() {
        let b = Footprint::new(20, 20).bounds(Vec2::new(50.0, 50.0));
        assert!(b.contains_strict(Vec2::new(50.0, 50.0)));
        assert!(b.contains_strict(Vec2::new(40.5, 59.5)));
        assert!(!b.contains_strict(Vec2::new(40.0, 50.0)));
        assert!(!b.contains_strict(Vec2::new(60.0, 50.0)));
        assert!(!b.contains_strict(Vec2::new(50.0, 40.0)));
        assert!(!b.contains_strict(Vec2::new(50.0, 60.0)));
    }
}
