//! Paintable water/land terrain field wrapped over the planet sphere.
//!
//! The field is a toroidally addressed grid of `f32` values (0 = water,
//! 1 = land) that brushes blend into and the renderer samples as a texture.

mod brush;
mod error;
mod field;
mod texel;

pub use brush::{BrushStroke, LAND, WATER, falloff_factor};
pub use error::TerrainError;
pub use field::{TerrainField, TexelRgba};
pub use texel::{TexelCoord, uv_to_texel};
