//! The planet aggregate: terrain, structures and the controller that edits them.

use glam::Mat4;
use tracing::info;

use globule_config::Config;
use globule_terrain::{TerrainError, TerrainField};

use crate::face_ledger::FaceLedger;
use crate::frame_clock::FrameClock;
use crate::interaction::{
    InteractionContext, InteractionController, InteractionOutcome, PointerEvent,
};
use crate::rate_limiter::Millis;
use crate::scale::ScaleRoller;
use crate::structure::{RegistryError, StructureRegistry};
use crate::surface::SurfaceMapper;
use crate::tool::Tool;

/// Errors raised while building a planet.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanetError {
    #[error("terrain field: {0}")]
    Terrain(#[from] TerrainError),
}

/// Everything a pointer action can edit.
#[derive(Clone, Debug)]
pub struct PlanetState {
    pub terrain: TerrainField,
    pub structures: StructureRegistry,
    pub faces: FaceLedger,
    pub scales: ScaleRoller,
    pub mapper: SurfaceMapper,
}

impl PlanetState {
    /// Fresh all-water state sized and seeded from `config`.
    pub fn from_config(config: &Config) -> Result<Self, PlanetError> {
        Ok(Self {
            terrain: TerrainField::square(config.terrain.resolution)?,
            structures: StructureRegistry::new(),
            faces: FaceLedger::new(),
            scales: ScaleRoller::new(
                config.planet.seed,
                config.placement.scale_min,
                config.placement.scale_max,
            ),
            mapper: SurfaceMapper::new(config.planet.radius),
        })
    }
}

/// A paintable tiny planet for one session.
///
/// The renderer feeds pointer events in, polls [`Planet::take_terrain_dirty`]
/// once per frame to re-upload the terrain texture, and instances
/// [`Planet::structures`].
#[derive(Clone, Debug)]
pub struct Planet {
    state: PlanetState,
    controller: InteractionController,
    frame_clock: FrameClock,
    transform: Option<Mat4>,
}

impl Planet {
    pub fn new(config: &Config) -> Result<Self, PlanetError> {
        let state = PlanetState::from_config(config)?;
        info!(
            radius = config.planet.radius,
            resolution = config.terrain.resolution,
            seed = config.planet.seed,
            "Created planet"
        );
        Ok(Self {
            state,
            controller: InteractionController::from_config(config),
            frame_clock: FrameClock::new(config.animation.time_step),
            transform: Some(Mat4::IDENTITY),
        })
    }

    /// Set the planet-to-world transform; `None` while the planet node is detached.
    pub fn set_transform(&mut self, transform: Option<Mat4>) {
        self.transform = transform;
    }

    /// Context for `tool` at `now_ms` using the planet's current transform.
    pub fn context(&self, tool: Tool, now_ms: Millis) -> InteractionContext {
        InteractionContext::new(tool, now_ms).with_transform(self.transform)
    }

    /// Feed one pointer event with an explicit context.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        ctx: &InteractionContext,
    ) -> InteractionOutcome {
        self.controller.handle(event, ctx, &mut self.state)
    }

    /// Re-type the clicked structure to `tool` with a fresh scale.
    pub fn click_structure(&mut self, index: usize, tool: Tool) -> Result<(), RegistryError> {
        self.controller.click_structure(index, tool, &mut self.state)
    }

    /// Advance the per-frame shader clock and return the new time.
    pub fn advance_frame(&mut self) -> f32 {
        self.frame_clock.advance()
    }

    pub fn shader_time(&self) -> f32 {
        self.frame_clock.time()
    }

    pub fn frames(&self) -> u64 {
        self.frame_clock.frames()
    }

    pub fn terrain(&self) -> &TerrainField {
        &self.state.terrain
    }

    /// Whether the terrain texture needs re-uploading; clears the flag.
    pub fn take_terrain_dirty(&mut self) -> bool {
        self.state.terrain.take_dirty()
    }

    pub fn structures(&self) -> &StructureRegistry {
        &self.state.structures
    }

    pub fn faces(&self) -> &FaceLedger {
        &self.state.faces
    }

    pub fn radius(&self) -> f32 {
        self.state.mapper.radius()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }
}
