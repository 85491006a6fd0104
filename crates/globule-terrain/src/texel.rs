//! UV to texel mapping with toroidal wraparound.

use glam::Vec2;

/// An unwrapped texel coordinate.
///
/// May lie outside the field; [`TexelCoord::wrap`] folds it back in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TexelCoord {
    pub x: i64,
    pub y: i64,
}

impl TexelCoord {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)` without wrapping. Saturates at the `i64` limits.
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Wrap into `[0, width) x [0, height)`.
    pub fn wrap(self, width: u32, height: u32) -> (u32, u32) {
        (
            self.x.rem_euclid(width as i64) as u32,
            self.y.rem_euclid(height as i64) as u32,
        )
    }
}

/// Map a surface UV to the texel containing it: `floor(uv * size)` per axis.
///
/// The result is not wrapped, so `uv.x == 1.0` yields `x == width`.
pub fn uv_to_texel(uv: Vec2, width: u32, height: u32) -> TexelCoord {
    let x = (uv.x as f64 * width as f64).floor() as i64;
    let y = (uv.y as f64 * height as f64).floor() as i64;
    TexelCoord::new(x, y)
}
