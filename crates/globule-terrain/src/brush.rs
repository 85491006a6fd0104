//! Circular soft-edged brush used to blend water and land into the field.

/// Field value for open water.
pub const WATER: f32 = 0.0;

/// Field value for solid land.
pub const LAND: f32 = 1.0;

/// One application of a circular brush.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushStroke {
    /// Value the covered texels are blended toward.
    pub target: f32,
    /// Radius in texels. Texels farther than this are untouched.
    pub radius: u32,
    /// Width of the soft edge in texels. Zero or negative gives a hard edge.
    pub falloff: f32,
}

impl BrushStroke {
    pub fn new(target: f32, radius: u32, falloff: f32) -> Self {
        Self {
            target,
            radius,
            falloff,
        }
    }

    /// Blend factor for a texel at `distance` texels from the brush center.
    pub fn factor(&self, distance: f64) -> f64 {
        falloff_factor(distance, self.radius as f64, self.falloff as f64)
    }
}

/// `max(0, 1 - (distance - (radius - falloff)) / falloff)`.
///
/// Not clamped above: when `falloff < radius` the factor exceeds 1 near the
/// center, so a blend overshoots its target there. Callers only evaluate it
/// for `distance <= radius`.
pub fn falloff_factor(distance: f64, radius: f64, falloff: f64) -> f64 {
    if falloff <= 0.0 {
        return 1.0;
    }
    (1.0 - (distance - (radius - falloff)) / falloff).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_wide_falloff_halves_center() {
        // radius 48, falloff 96: the soft edge reaches past the center.
        assert!((falloff_factor(0.0, 48.0, 96.0) - 0.5).abs() < EPSILON);
        assert!((falloff_factor(30.0, 48.0, 96.0) - 0.1875).abs() < EPSILON);
        assert!(falloff_factor(48.0, 48.0, 96.0).abs() < EPSILON);
    }

    #[test]
    fn test_narrow_falloff_overshoots_center() {
        // radius 24, falloff 12: flat top inside 12 texels, factor above 1.
        assert!((falloff_factor(0.0, 24.0, 12.0) - 2.0).abs() < EPSILON);
        assert!((falloff_factor(12.0, 24.0, 12.0) - 1.0).abs() < EPSILON);
        assert!((falloff_factor(18.0, 24.0, 12.0) - 0.5).abs() < EPSILON);
        assert!(falloff_factor(24.0, 24.0, 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_factor_never_negative() {
        assert_eq!(falloff_factor(100.0, 24.0, 12.0), 0.0);
    }

    #[test]
    fn test_zero_falloff_is_hard_edge() {
        assert_eq!(falloff_factor(0.0, 10.0, 0.0), 1.0);
        assert_eq!(falloff_factor(10.0, 10.0, 0.0), 1.0);
    }

    #[test]
    fn test_stroke_factor_uses_its_shape() {
        let stroke = BrushStroke::new(LAND, 24, 12.0);
        assert!((stroke.factor(18.0) - 0.5).abs() < EPSILON);
    }
}
