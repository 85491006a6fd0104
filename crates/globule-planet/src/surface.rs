//! Mapping pointer hits onto the planet surface.
//!
//! Hit points come from an approximate mesh intersection in world space. The
//! mapper pulls them back into the planet's local frame and snaps them onto
//! the ideal sphere so placed structures never float or sink.

use glam::{Mat4, Quat, Vec3};

/// Canonical "up" axis of structure models before orientation.
pub const MODEL_UP: Vec3 = Vec3::Y;

/// Smallest local-space distance from the center a hit may have.
const MIN_HIT_DISTANCE: f32 = 1e-6;

/// Smallest absolute determinant accepted for the planet transform.
const MIN_DETERMINANT: f32 = 1e-12;

/// Rotation taking [`MODEL_UP`] onto the outward direction at `surface_position`.
///
/// Returns identity for a zero-length position.
pub fn outward_orientation(surface_position: Vec3) -> Quat {
    match surface_position.try_normalize() {
        Some(up) => Quat::from_rotation_arc(MODEL_UP, up),
        None => Quat::IDENTITY,
    }
}

/// Snaps pointer hits onto a sphere of fixed radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMapper {
    radius: f32,
}

impl SurfaceMapper {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Snap a world-space hit onto the sphere, in planet-local coordinates.
    ///
    /// Returns `None` when the transform cannot be inverted or the hit sits at
    /// the planet center, where no outward direction exists.
    pub fn project_to_surface(&self, world_hit: Vec3, planet_transform: &Mat4) -> Option<Vec3> {
        if planet_transform.determinant().abs() < MIN_DETERMINANT {
            return None;
        }
        let local = planet_transform.inverse().transform_point3(world_hit);
        if !local.is_finite() || local.length() < MIN_HIT_DISTANCE {
            return None;
        }
        Some(local.normalize() * self.radius)
    }
}
