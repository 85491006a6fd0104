//! Terrain field error types.

/// Errors raised when building a [`TerrainField`](crate::TerrainField).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TerrainError {
    /// Width or height is zero or not a power of two.
    #[error("terrain dimensions must be non-zero powers of two, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width in texels.
        width: u32,
        /// Requested height in texels.
        height: u32,
    },
}
