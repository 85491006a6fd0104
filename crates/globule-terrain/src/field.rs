//! The terrain field: a wrapped float grid blended by brushes and sampled as a texture.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use tracing::trace;

use crate::brush::{BrushStroke, WATER};
use crate::error::TerrainError;
use crate::texel::{TexelCoord, uv_to_texel};

/// One texel of the uploaded terrain texture.
///
/// The shader reads the terrain value from the red channel; alpha is always 1.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TexelRgba {
    pub rgba: [f32; 4],
}

/// Water/land transition values over the planet's UV square.
///
/// Row-major, toroidally addressed on both axes so brushes crossing the UV
/// seam continue on the other side. Painting sets a dirty flag the renderer
/// polls once per frame before re-uploading the texture.
#[derive(Clone, Debug)]
pub struct TerrainField {
    width: u32,
    height: u32,
    values: Vec<f32>,
    dirty: bool,
    revision: u64,
}

impl TerrainField {
    /// Create an all-water field.
    ///
    /// Both dimensions must be non-zero powers of two.
    pub fn new(width: u32, height: u32) -> Result<Self, TerrainError> {
        if width == 0 || height == 0 || !width.is_power_of_two() || !height.is_power_of_two() {
            return Err(TerrainError::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            values: vec![WATER; len],
            dirty: true,
            revision: 0,
        })
    }

    /// Create an all-water square field.
    pub fn square(size: u32) -> Result<Self, TerrainError> {
        Self::new(size, size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Value at a texel coordinate, wrapped on both axes.
    pub fn sample(&self, x: i64, y: i64) -> f32 {
        let (x, y) = TexelCoord::new(x, y).wrap(self.width, self.height);
        self.values[self.index(x, y)]
    }

    /// Value of the texel containing `uv`.
    pub fn sample_uv(&self, uv: Vec2) -> f32 {
        let texel = uv_to_texel(uv, self.width, self.height);
        self.sample(texel.x, texel.y)
    }

    /// Blend a circular brush centered on the texel containing `uv`.
    ///
    /// Returns the number of texel writes.
    pub fn paint_brush(&mut self, uv: Vec2, stroke: BrushStroke) -> usize {
        let center = uv_to_texel(uv, self.width, self.height);
        self.paint_brush_at(center, stroke)
    }

    /// Blend a circular brush centered on `center`.
    ///
    /// Every texel within `stroke.radius` (Euclidean, measured before
    /// wrapping) moves toward `stroke.target` by the stroke's falloff factor.
    /// The factor is not clamped, so narrow-falloff brushes overshoot near
    /// their center. A brush wider than the field writes some texels twice.
    pub fn paint_brush_at(&mut self, center: TexelCoord, stroke: BrushStroke) -> usize {
        // Fold the center in first so offsets stay far from the i64 limits.
        let (cx, cy) = center.wrap(self.width, self.height);
        let center = TexelCoord::new(cx as i64, cy as i64);
        let radius = stroke.radius as i64;
        let target = stroke.target as f64;
        let mut writes = 0;

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let distance = ((dx * dx + dy * dy) as f64).sqrt();
                if distance > radius as f64 {
                    continue;
                }

                let (x, y) = center.offset(dx, dy).wrap(self.width, self.height);
                let index = self.index(x, y);
                let factor = stroke.factor(distance);
                let current = self.values[index] as f64;
                self.values[index] = (current + (target - current) * factor) as f32;
                writes += 1;
            }
        }

        self.dirty = true;
        self.revision += 1;
        trace!(
            x = center.x,
            y = center.y,
            radius = stroke.radius,
            target = stroke.target,
            writes,
            "Painted terrain brush"
        );
        writes
    }

    /// Whether the field changed since the renderer last cleared the flag.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after uploading.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Return the dirty flag and clear it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Number of paint operations applied since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Fraction of texels whose value is at least `threshold`.
    pub fn land_fraction(&self, threshold: f32) -> f32 {
        let land = self.values.iter().filter(|&&v| v >= threshold).count();
        land as f32 / self.values.len() as f32
    }

    /// Expand the field into RGBA float texels for upload.
    pub fn texture_rgba(&self) -> Vec<TexelRgba> {
        self.values
            .iter()
            .map(|&value| TexelRgba {
                rgba: [value, 0.0, 0.0, 1.0],
            })
            .collect()
    }

    /// RGBA float texture as raw bytes, row-major.
    pub fn texture_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.texture_rgba()).to_vec()
    }
}
