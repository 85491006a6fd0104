//! Record of which mesh faces received water and land strokes.

use hashbrown::HashSet;

use crate::tool::Tool;

/// Ordered, de-duplicated face ids per terrain tool.
///
/// A face is recorded the first time it is painted with a given tool and is
/// never pruned, so a face painted with both tools appears in both lists.
#[derive(Clone, Debug, Default)]
pub struct FaceLedger {
    water: FaceList,
    land: FaceList,
}

#[derive(Clone, Debug, Default)]
struct FaceList {
    order: Vec<u32>,
    seen: HashSet<u32>,
}

impl FaceList {
    fn insert(&mut self, face: u32) -> bool {
        if !self.seen.insert(face) {
            return false;
        }
        self.order.push(face);
        true
    }
}

impl FaceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `face` under `tool`. Returns `true` if it was new for that tool.
    ///
    /// Structure tools are not tracked and always return `false`.
    pub fn record(&mut self, tool: Tool, face: u32) -> bool {
        match tool {
            Tool::Water => self.water.insert(face),
            Tool::Land => self.land.insert(face),
            _ => false,
        }
    }

    /// Faces painted with water, in first-painted order.
    pub fn water_faces(&self) -> &[u32] {
        &self.water.order
    }

    /// Faces painted with land, in first-painted order.
    pub fn land_faces(&self) -> &[u32] {
        &self.land.order
    }
}
