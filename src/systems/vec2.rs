use serde::{Deserialize, Serialize};

/// 2D vector used for world positions and velocity hints
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Grid slot containing this world position for a given cell scale.
    /// Truncates toward zero first, so `-0.5` lands in column 0.
    pub fn to_grid(&self, scale: u32) -> (i64, i64) {
        let scale = scale.max(1) as i64;
        ((self.x as i64) / scale, (self.y as i64) / scale)
    }
}
