//! Terrain painting and structure placement on a tiny planet.
//!
//! Pointer events from the renderer's raycaster are routed by the selected
//! [`Tool`] into either a brush stroke on the [`TerrainField`](globule_terrain::TerrainField)
//! or a new [`Structure`] snapped onto the sphere. Both paths share one
//! [`PlacementRateLimiter`] so drag gestures do not flood the planet.

mod face_ledger;
mod frame_clock;
mod interaction;
mod planet;
mod rate_limiter;
mod scale;
mod structure;
mod surface;
mod tool;

pub use face_ledger::FaceLedger;
pub use frame_clock::FrameClock;
pub use interaction::{
    DragState, InteractionContext, InteractionController, InteractionOutcome, PointerEvent,
    PointerHit, SkipReason,
};
pub use planet::{Planet, PlanetError, PlanetState};
pub use rate_limiter::{Millis, PlacementRateLimiter, interval_for};
pub use scale::ScaleRoller;
pub use structure::{RegistryError, Structure, StructureInstance, StructureRegistry};
pub use surface::{MODEL_UP, SurfaceMapper, outward_orientation};
pub use tool::{ParseToolError, StructureKind, Tool};
