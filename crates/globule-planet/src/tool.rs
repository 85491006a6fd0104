//! Toolbar tools and the structure kinds they place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use globule_terrain::{LAND, WATER};

/// The tool currently selected in the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Mountain,
    Tree,
    Water,
    House,
    #[default]
    Land,
    Fire,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 6] = [
        Tool::Mountain,
        Tool::Tree,
        Tool::Water,
        Tool::House,
        Tool::Land,
        Tool::Fire,
    ];

    /// Water and land paint the terrain field instead of placing structures.
    pub fn is_terrain(self) -> bool {
        matches!(self, Tool::Water | Tool::Land)
    }

    /// Field value a terrain tool blends toward.
    pub fn terrain_target(self) -> Option<f32> {
        match self {
            Tool::Water => Some(WATER),
            Tool::Land => Some(LAND),
            _ => None,
        }
    }

    /// Structure kind a structure tool places.
    pub fn structure_kind(self) -> Option<StructureKind> {
        match self {
            Tool::Mountain => Some(StructureKind::Mountain),
            Tool::Tree => Some(StructureKind::Tree),
            Tool::House => Some(StructureKind::House),
            Tool::Fire => Some(StructureKind::Fire),
            Tool::Water | Tool::Land => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Mountain => "mountain",
            Tool::Tree => "tree",
            Tool::Water => "water",
            Tool::House => "house",
            Tool::Land => "land",
            Tool::Fire => "fire",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a tool name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool `{0}` (expected mountain, tree, water, house, land or fire)")]
pub struct ParseToolError(pub String);

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == lower)
            .ok_or_else(|| ParseToolError(s.to_string()))
    }
}

/// Renderable structure types. Geometry for each lives in the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    Mountain,
    Tree,
    House,
    Fire,
}

impl StructureKind {
    pub const ALL: [StructureKind; 4] = [
        StructureKind::Mountain,
        StructureKind::Tree,
        StructureKind::House,
        StructureKind::Fire,
    ];

    /// The tool that places this kind.
    pub fn tool(self) -> Tool {
        match self {
            StructureKind::Mountain => Tool::Mountain,
            StructureKind::Tree => Tool::Tree,
            StructureKind::House => Tool::House,
            StructureKind::Fire => Tool::Fire,
        }
    }
}

impl From<StructureKind> for Tool {
    fn from(kind: StructureKind) -> Self {
        kind.tool()
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool().name())
    }
}
