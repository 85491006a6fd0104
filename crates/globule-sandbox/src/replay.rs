//! Replays a session script against a planet, acting as the renderer.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use tracing::{debug, info, warn};

use globule_planet::{
    InteractionOutcome, Planet, PointerEvent, PointerHit, StructureKind, Tool,
};

use crate::script::{ScriptStep, SessionScript};

/// Field value at or above which a texel counts as land in the summary.
const LAND_THRESHOLD: f32 = 0.5;

/// Point on a sphere of `radius` for a surface UV, using the icosphere's
/// azimuth/inclination parameterization.
pub fn sphere_point(uv: Vec2, radius: f32) -> Vec3 {
    let azimuth = (uv.x - 0.5) * TAU;
    let inclination = (uv.y - 0.5) * PI;
    let ring = inclination.cos();
    Vec3::new(
        -ring * azimuth.cos(),
        -inclination.sin(),
        ring * azimuth.sin(),
    ) * radius
}

/// Stand-in face id: the cell of a `4s x 2s` longitude/latitude grid.
pub fn grid_face(uv: Vec2, segments: u32) -> u32 {
    let cols = segments.max(1) * 4;
    let rows = segments.max(1) * 2;
    let col = ((uv.x.rem_euclid(1.0) * cols as f32) as u32).min(cols - 1);
    let row = ((uv.y.clamp(0.0, 1.0) * rows as f32) as u32).min(rows - 1);
    row * cols + col
}

/// Counts gathered while replaying a session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSummary {
    pub painted: usize,
    pub placed: usize,
    pub skipped: usize,
    pub ignored: usize,
    pub clicks: usize,
    pub failed_clicks: usize,
    pub texture_uploads: usize,
    pub frames: u64,
}

/// Drives a [`Planet`] through a script.
pub struct Replay<'a> {
    planet: &'a mut Planet,
    segments: u32,
    tool: Tool,
    summary: SessionSummary,
}

impl<'a> Replay<'a> {
    pub fn new(planet: &'a mut Planet, segments: u32) -> Self {
        Self {
            planet,
            segments,
            tool: Tool::default(),
            summary: SessionSummary::default(),
        }
    }

    /// Run every step in order and return the counts.
    pub fn run(mut self, script: &SessionScript) -> SessionSummary {
        for step in &script.steps {
            self.step(step);
        }
        self.summary.frames = self.planet.frames();
        self.summary
    }

    fn hit_at(&self, u: f32, v: f32) -> PointerHit {
        let uv = Vec2::new(u, v);
        PointerHit::new(
            sphere_point(uv, self.planet.radius()),
            uv,
            grid_face(uv, self.segments),
        )
    }

    fn step(&mut self, step: &ScriptStep) {
        match *step {
            ScriptStep::Select(tool) => {
                debug!(%tool, "Selected tool");
                self.tool = tool;
            }
            ScriptStep::Down { at_ms, u, v } => {
                let event = PointerEvent::Down(Some(self.hit_at(u, v)));
                self.pointer(event, at_ms);
            }
            ScriptStep::Move { at_ms, u, v } => {
                let event = PointerEvent::Move(Some(self.hit_at(u, v)));
                self.pointer(event, at_ms);
            }
            ScriptStep::MoveOff { at_ms } => self.pointer(PointerEvent::Move(None), at_ms),
            ScriptStep::Up { at_ms } => self.pointer(PointerEvent::Up, at_ms),
            ScriptStep::Leave { at_ms } => self.pointer(PointerEvent::Leave, at_ms),
            ScriptStep::Click { index } => {
                self.summary.clicks += 1;
                if let Err(err) = self.planet.click_structure(index, self.tool) {
                    warn!(%err, "Ignored structure click");
                    self.summary.failed_clicks += 1;
                }
            }
            ScriptStep::Frames(count) => {
                for _ in 0..count {
                    self.render_frame();
                }
            }
        }
    }

    fn pointer(&mut self, event: PointerEvent, at_ms: u64) {
        let ctx = self.planet.context(self.tool, at_ms);
        match self.planet.handle_pointer(&event, &ctx) {
            InteractionOutcome::Painted { .. } => self.summary.painted += 1,
            InteractionOutcome::Placed { .. } => self.summary.placed += 1,
            InteractionOutcome::Skipped(_) => self.summary.skipped += 1,
            InteractionOutcome::Ignored => self.summary.ignored += 1,
        }
    }

    fn render_frame(&mut self) {
        let time = self.planet.advance_frame();
        if self.planet.take_terrain_dirty() {
            let terrain = self.planet.terrain();
            self.summary.texture_uploads += 1;
            debug!(
                revision = terrain.revision(),
                width = terrain.width(),
                height = terrain.height(),
                time,
                "Uploaded terrain texture"
            );
        }
        let instances = self.planet.structures().render_instances().count();
        debug!(instances, time, "Rendered frame");
    }
}

/// Log the final state of the planet and the replay counts.
pub fn log_summary(planet: &Planet, summary: &SessionSummary) {
    let structures = planet.structures();
    info!(
        painted = summary.painted,
        placed = summary.placed,
        skipped = summary.skipped,
        ignored = summary.ignored,
        clicks = summary.clicks,
        "Session replayed"
    );
    for kind in StructureKind::ALL {
        info!(%kind, count = structures.count_of(kind), "Structures");
    }
    let hidden = structures.len() - structures.render_instances().count();
    if hidden > 0 {
        warn!(hidden, "Structures re-typed with terrain tools are not rendered");
    }
    info!(
        land_fraction = planet.terrain().land_fraction(LAND_THRESHOLD),
        land_faces = planet.faces().land_faces().len(),
        water_faces = planet.faces().water_faces().len(),
        uploads = summary.texture_uploads,
        frames = summary.frames,
        shader_time = planet.shader_time(),
        "Terrain"
    );
}
