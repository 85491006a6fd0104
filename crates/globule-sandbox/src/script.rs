//! Scripted pointer sessions stored as RON.
//!
//! A script is an ordered list of steps standing in for what a user does in
//! the browser: pick a tool, press, drag, release, click structures, and let
//! frames render in between.

use std::path::Path;

use serde::{Deserialize, Serialize};

use globule_planet::{Millis, Tool};

/// Errors from loading a session script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse script: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// One user action in a scripted session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScriptStep {
    /// Pick a toolbar tool.
    Select(Tool),
    /// Press on the planet at surface coordinate `(u, v)`.
    Down { at_ms: Millis, u: f32, v: f32 },
    /// Move the pointer to `(u, v)` on the planet.
    Move { at_ms: Millis, u: f32, v: f32 },
    /// Move the pointer over empty space.
    MoveOff { at_ms: Millis },
    /// Release the pointer.
    Up { at_ms: Millis },
    /// Leave the planet mesh.
    Leave { at_ms: Millis },
    /// Click the structure at `index` with the selected tool.
    Click { index: usize },
    /// Render this many frames.
    Frames(u32),
}

/// An ordered list of steps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionScript {
    pub steps: Vec<ScriptStep>,
}

impl SessionScript {
    /// Parse a script from RON text.
    pub fn from_ron(text: &str) -> Result<Self, ScriptError> {
        Ok(ron::from_str(text)?)
    }

    /// Load a script from a RON file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron(&text)
    }

    /// A short session: paint an island, plant trees on it, drop a house and
    /// turn the first tree into a fire.
    pub fn demo() -> Self {
        let mut steps = vec![ScriptStep::Select(Tool::Land)];
        steps.push(ScriptStep::Down {
            at_ms: 0,
            u: 0.45,
            v: 0.5,
        });
        for i in 1..=10u64 {
            steps.push(ScriptStep::Move {
                at_ms: i * 16,
                u: 0.45 + i as f32 * 0.01,
                v: 0.5,
            });
        }
        steps.push(ScriptStep::Up { at_ms: 180 });
        steps.push(ScriptStep::Frames(2));

        steps.push(ScriptStep::Select(Tool::Tree));
        steps.push(ScriptStep::Down {
            at_ms: 400,
            u: 0.48,
            v: 0.5,
        });
        steps.push(ScriptStep::Move {
            at_ms: 450,
            u: 0.5,
            v: 0.5,
        });
        steps.push(ScriptStep::Move {
            at_ms: 600,
            u: 0.52,
            v: 0.5,
        });
        steps.push(ScriptStep::Leave { at_ms: 620 });
        steps.push(ScriptStep::Frames(1));

        steps.push(ScriptStep::Select(Tool::House));
        steps.push(ScriptStep::Down {
            at_ms: 1_000,
            u: 0.5,
            v: 0.52,
        });
        steps.push(ScriptStep::Up { at_ms: 1_010 });

        steps.push(ScriptStep::Select(Tool::Fire));
        steps.push(ScriptStep::Click { index: 0 });
        steps.push(ScriptStep::Frames(1));

        Self { steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ron_script() {
        let text = r#"(
            steps: [
                Select(tree),
                Down(at_ms: 0, u: 0.5, v: 0.5),
                Move(at_ms: 40, u: 0.51, v: 0.5),
                MoveOff(at_ms: 60),
                Up(at_ms: 80),
                Click(index: 0),
                Frames(3),
            ],
        )"#;
        let script = SessionScript::from_ron(text).unwrap();
        assert_eq!(script.steps.len(), 7);
        assert_eq!(script.steps[0], ScriptStep::Select(Tool::Tree));
        assert_eq!(
            script.steps[1],
            ScriptStep::Down {
                at_ms: 0,
                u: 0.5,
                v: 0.5
            }
        );
        assert_eq!(script.steps[6], ScriptStep::Frames(3));
    }

    #[test]
    fn test_unknown_tool_is_parse_error() {
        let err = SessionScript::from_ron("(steps: [Select(volcano)])").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SessionScript::load(&dir.path().join("missing.ron")).unwrap_err();
        assert!(err.to_string().contains("missing.ron"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.ron");
        std::fs::write(&path, "(steps: [Frames(1)])").unwrap();
        let script = SessionScript::load(&path).unwrap();
        assert_eq!(script.steps, vec![ScriptStep::Frames(1)]);
    }

    #[test]
    fn test_demo_round_trips_through_ron() {
        let demo = SessionScript::demo();
        let text = ron::to_string(&demo).unwrap();
        assert_eq!(SessionScript::from_ron(&text).unwrap(), demo);
    }
}
