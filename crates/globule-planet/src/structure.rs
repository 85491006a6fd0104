//! Placed structures and the registry the renderer draws from.

use glam::{Quat, Vec3};
use tracing::debug;

use crate::surface::outward_orientation;
use crate::tool::{StructureKind, Tool};

/// A structure anchored on the planet surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Structure {
    /// Planet-local position, exactly one planet radius from the center.
    pub position: Vec3,
    /// Uniform scale multiplier.
    pub scale: f32,
    /// Tool the structure was placed or last re-typed with.
    pub tool: Tool,
}

impl Structure {
    pub fn new(position: Vec3, scale: f32, kind: StructureKind) -> Self {
        Self {
            position,
            scale,
            tool: kind.tool(),
        }
    }

    /// Renderable kind, or `None` after a terrain tool re-typed it.
    pub fn kind(&self) -> Option<StructureKind> {
        self.tool.structure_kind()
    }
}

/// Everything the renderer needs to instance one structure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StructureInstance {
    pub index: usize,
    pub kind: StructureKind,
    pub position: Vec3,
    pub scale: f32,
    pub orientation: Quat,
}

/// Errors from registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no structure at index {index} (registry holds {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered, grow-only collection of placed structures.
///
/// Indexes are stable for the registry's lifetime: entries are appended or
/// edited in place, never removed.
#[derive(Clone, Debug, Default)]
pub struct StructureRegistry {
    entries: Vec<Structure>,
}

impl StructureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a structure and return its index.
    pub fn append(&mut self, structure: Structure) -> usize {
        let index = self.entries.len();
        self.entries.push(structure);
        debug!(index, tool = %structure.tool, scale = structure.scale, "Placed structure");
        index
    }

    /// Re-type and re-scale the structure at `index`, keeping its position.
    pub fn replace_type_and_scale(
        &mut self,
        index: usize,
        tool: Tool,
        scale: f32,
    ) -> Result<(), RegistryError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(RegistryError::OutOfRange { index, len })?;
        entry.tool = tool;
        entry.scale = scale;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Structure> {
        self.entries.get(index)
    }

    /// Read-only view in placement order.
    pub fn snapshot(&self) -> &[Structure] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries currently of `kind`.
    pub fn count_of(&self, kind: StructureKind) -> usize {
        self.entries
            .iter()
            .filter(|s| s.kind() == Some(kind))
            .count()
    }

    /// Renderable entries with their outward orientation, in placement order.
    ///
    /// Entries re-typed to a terrain tool are skipped but keep their index.
    pub fn render_instances(&self) -> impl Iterator<Item = StructureInstance> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, structure)| {
                structure.kind().map(|kind| StructureInstance {
                    index,
                    kind,
                    position: structure.position,
                    scale: structure.scale,
                    orientation: outward_orientation(structure.position),
                })
            })
    }
}
