//! Pointer interaction state machine.
//!
//! Pointer-down starts a drag and performs one action; every move while
//! dragging repeats it; pointer-up or leaving the planet ends the drag. The
//! selected tool decides whether an action paints terrain or drops a
//! structure. Actions that cannot be carried out are skipped without touching
//! any state, including the rate limiter slot.

use glam::{Mat4, Vec2, Vec3};
use tracing::{trace, warn};

use globule_config::{BrushConfig, Config, PlacementConfig};
use globule_terrain::{BrushStroke, LAND};

use crate::planet::PlanetState;
use crate::rate_limiter::{Millis, PlacementRateLimiter, interval_for};
use crate::structure::{RegistryError, Structure};
use crate::tool::Tool;

/// Where the pointer ray met the planet mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerHit {
    /// World-space intersection point.
    pub point: Vec3,
    /// Surface UV at the intersection, if the mesh provides one.
    pub uv: Option<Vec2>,
    /// Index of the intersected mesh face.
    pub face: Option<u32>,
}

impl PointerHit {
    pub fn new(point: Vec3, uv: Vec2, face: u32) -> Self {
        Self {
            point,
            uv: Some(uv),
            face: Some(face),
        }
    }
}

/// Pointer events delivered by the renderer's raycaster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Option<PointerHit>),
    Move(Option<PointerHit>),
    Up,
    Leave,
}

/// Per-call context: the selected tool, the time and the planet transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionContext {
    pub tool: Tool,
    pub now_ms: Millis,
    /// Planet-to-world transform, when the planet node is available.
    pub planet_transform: Option<Mat4>,
}

impl InteractionContext {
    pub fn new(tool: Tool, now_ms: Millis) -> Self {
        Self {
            tool,
            now_ms,
            planet_transform: Some(Mat4::IDENTITY),
        }
    }

    pub fn with_transform(mut self, planet_transform: Option<Mat4>) -> Self {
        self.planet_transform = planet_transform;
        self
    }
}

/// Drag state of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Why a routed action did not happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("pointer ray missed the planet")]
    NoHit,
    #[error("hit carries no usable surface UV")]
    MissingUv,
    #[error("hit carries no face index")]
    MissingFace,
    #[error("planet transform unavailable")]
    MissingTransform,
    #[error("hit cannot be projected onto the surface")]
    OffSurface,
    #[error("too soon after the previous action")]
    RateLimited,
}

/// Result of feeding one pointer event to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionOutcome {
    /// A terrain stroke was blended into the field.
    Painted { writes: usize, new_face: bool },
    /// A structure was appended at `index` on top of a fresh land patch.
    Placed { index: usize },
    /// The event routed to an action that was skipped.
    Skipped(SkipReason),
    /// The event does not route to an action in the current state.
    Ignored,
}

/// Drives pointer events into terrain strokes and structure placements.
#[derive(Clone, Debug)]
pub struct InteractionController {
    drag: DragState,
    limiter: PlacementRateLimiter,
    brush: BrushConfig,
    structure_patch: BrushConfig,
    placement: PlacementConfig,
}

impl InteractionController {
    pub fn new(
        brush: BrushConfig,
        structure_patch: BrushConfig,
        placement: PlacementConfig,
    ) -> Self {
        Self {
            drag: DragState::Idle,
            limiter: PlacementRateLimiter::new(),
            brush,
            structure_patch,
            placement,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.terrain.brush,
            config.terrain.structure_patch,
            config.placement.clone(),
        )
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Feed one pointer event.
    ///
    /// An event that ends up [`InteractionOutcome::Skipped`] for anything
    /// other than [`SkipReason::RateLimited`] leaves the rate limiter slot
    /// untouched, so the next usable event is judged against the last
    /// accepted one.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        ctx: &InteractionContext,
        state: &mut PlanetState,
    ) -> InteractionOutcome {
        let outcome = match (self.drag, event) {
            (_, PointerEvent::Down(hit)) => {
                self.drag = DragState::Dragging;
                self.route(hit.as_ref(), ctx, state)
            }
            (DragState::Dragging, PointerEvent::Move(hit)) => self.route(hit.as_ref(), ctx, state),
            (DragState::Idle, PointerEvent::Move(_)) => InteractionOutcome::Ignored,
            (_, PointerEvent::Up | PointerEvent::Leave) => {
                self.drag = DragState::Idle;
                InteractionOutcome::Ignored
            }
        };

        if let InteractionOutcome::Skipped(reason) = outcome {
            trace!(tool = %ctx.tool, now_ms = ctx.now_ms, %reason, "Skipped pointer action");
        }
        outcome
    }

    /// Re-type the clicked structure to `tool` and re-roll its scale.
    ///
    /// Independent of the drag state and not rate limited. A terrain tool
    /// re-types the structure too, which hides it from rendering.
    pub fn click_structure(
        &self,
        index: usize,
        tool: Tool,
        state: &mut PlanetState,
    ) -> Result<(), RegistryError> {
        let scale = state.scales.roll();
        state.structures.replace_type_and_scale(index, tool, scale)?;
        if tool.is_terrain() {
            warn!(index, %tool, "Structure re-typed with a terrain tool; it will not render");
        }
        Ok(())
    }

    fn route(
        &mut self,
        hit: Option<&PointerHit>,
        ctx: &InteractionContext,
        state: &mut PlanetState,
    ) -> InteractionOutcome {
        let Some(hit) = hit else {
            return InteractionOutcome::Skipped(SkipReason::NoHit);
        };
        match ctx.tool.terrain_target() {
            Some(target) => self.paint_terrain(hit, target, ctx, state),
            None => self.place_structure(hit, ctx, state),
        }
    }

    fn paint_terrain(
        &mut self,
        hit: &PointerHit,
        target: f32,
        ctx: &InteractionContext,
        state: &mut PlanetState,
    ) -> InteractionOutcome {
        let Some(uv) = resolved_uv(hit) else {
            return InteractionOutcome::Skipped(SkipReason::MissingUv);
        };
        let Some(face) = hit.face else {
            return InteractionOutcome::Skipped(SkipReason::MissingFace);
        };
        if !self
            .limiter
            .try_acquire(ctx.now_ms, interval_for(ctx.tool, &self.placement))
        {
            return InteractionOutcome::Skipped(SkipReason::RateLimited);
        }

        let stroke = BrushStroke::new(target, self.brush.radius, self.brush.falloff);
        let writes = state.terrain.paint_brush(uv, stroke);
        let new_face = state.faces.record(ctx.tool, face);
        InteractionOutcome::Painted { writes, new_face }
    }

    fn place_structure(
        &mut self,
        hit: &PointerHit,
        ctx: &InteractionContext,
        state: &mut PlanetState,
    ) -> InteractionOutcome {
        let Some(kind) = ctx.tool.structure_kind() else {
            return InteractionOutcome::Ignored;
        };
        let Some(uv) = resolved_uv(hit) else {
            return InteractionOutcome::Skipped(SkipReason::MissingUv);
        };
        let Some(transform) = ctx.planet_transform else {
            return InteractionOutcome::Skipped(SkipReason::MissingTransform);
        };
        let Some(position) = state.mapper.project_to_surface(hit.point, &transform) else {
            return InteractionOutcome::Skipped(SkipReason::OffSurface);
        };
        if !self
            .limiter
            .try_acquire(ctx.now_ms, interval_for(ctx.tool, &self.placement))
        {
            return InteractionOutcome::Skipped(SkipReason::RateLimited);
        }

        let scale = state.scales.roll();
        let index = state.structures.append(Structure::new(position, scale, kind));

        // Structures sit on a small land patch.
        let patch = BrushStroke::new(
            LAND,
            self.structure_patch.radius,
            self.structure_patch.falloff,
        );
        state.terrain.paint_brush(uv, patch);

        InteractionOutcome::Placed { index }
    }
}

/// The hit's UV, if it has one with finite components.
fn resolved_uv(hit: &PointerHit) -> Option<Vec2> {
    hit.uv.filter(|uv| uv.is_finite())
}

#[cfg(test)]
#[path = "interaction_tests.rs"]
mod tests;
