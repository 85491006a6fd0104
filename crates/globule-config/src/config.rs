//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level sandbox configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet body settings.
    pub planet: PlanetConfig,
    /// Terrain field and brush settings.
    pub terrain: TerrainConfig,
    /// Structure placement cadence and scale range.
    pub placement: PlacementConfig,
    /// Per-frame animation settings.
    pub animation: AnimationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Planet body configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Planet radius in scene units. Placed structures sit exactly at this distance.
    pub radius: f32,
    /// Icosphere subdivision level handed to the renderer.
    pub segments: u32,
    /// Seed for the structure scale roller.
    pub seed: u64,
}

/// A circular brush footprint measured in texels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrushConfig {
    /// Brush radius in texels.
    pub radius: u32,
    /// Width of the soft edge in texels. Zero gives a hard edge.
    pub falloff: f32,
}

/// Terrain field configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Edge length of the square terrain buffer. Must be a power of two.
    pub resolution: u32,
    /// Brush used by the water and land tools.
    pub brush: BrushConfig,
    /// Land patch painted under every newly placed structure.
    pub structure_patch: BrushConfig,
}

/// Placement cadence and structure scale configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlacementConfig {
    /// Minimum gap between terrain strokes, in milliseconds.
    pub terrain_interval_ms: u64,
    /// Minimum gap between structure drops, in milliseconds.
    pub structure_interval_ms: u64,
    /// Lower bound (inclusive) of the random structure scale.
    pub scale_min: f32,
    /// Upper bound (exclusive) of the random structure scale.
    pub scale_max: f32,
}

/// Per-frame animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Shader time added on every rendered frame.
    pub time_step: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            radius: 3.0,
            segments: 32,
            seed: 0,
        }
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            radius: 48,
            falloff: 96.0,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            resolution: 2048,
            brush: BrushConfig::default(),
            structure_patch: BrushConfig {
                radius: 24,
                falloff: 12.0,
            },
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            terrain_interval_ms: 10,
            structure_interval_ms: 150,
            scale_min: 0.5,
            scale_max: 0.8,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { time_step: 0.01 }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject settings the painting engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.planet.radius.is_finite() && self.planet.radius > 0.0) {
            return Err(ConfigError::Invalid {
                field: "planet.radius",
                reason: format!("must be a positive number, got {}", self.planet.radius),
            });
        }

        let resolution = self.terrain.resolution;
        if resolution == 0 || !resolution.is_power_of_two() {
            return Err(ConfigError::Invalid {
                field: "terrain.resolution",
                reason: format!("must be a non-zero power of two, got {resolution}"),
            });
        }

        for (field, brush) in [
            ("terrain.brush", &self.terrain.brush),
            ("terrain.structure_patch", &self.terrain.structure_patch),
        ] {
            if !(brush.falloff.is_finite() && brush.falloff >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("falloff must be zero or positive, got {}", brush.falloff),
                });
            }
        }

        let placement = &self.placement;
        if !(placement.scale_min.is_finite()
            && placement.scale_max.is_finite()
            && placement.scale_min > 0.0
            && placement.scale_min <= placement.scale_max)
        {
            return Err(ConfigError::Invalid {
                field: "placement.scale_min",
                reason: format!(
                    "scale range must be positive and ordered, got [{}, {})",
                    placement.scale_min, placement.scale_max
                ),
            });
        }

        if !self.animation.time_step.is_finite() {
            return Err(ConfigError::Invalid {
                field: "animation.time_step",
                reason: "must be finite".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("resolution: 2048"));
        assert!(ron_str.contains("structure_interval_ms: 150"));
    }

    #[test]
    fn test_defaults_match_sandbox_constants() {
        let config = Config::default();
        assert_eq!(config.planet.radius, 3.0);
        assert_eq!(config.terrain.brush.radius, 48);
        assert_eq!(config.terrain.brush.falloff, 96.0);
        assert_eq!(config.terrain.structure_patch.radius, 24);
        assert_eq!(config.terrain.structure_patch.falloff, 12.0);
        assert_eq!(config.placement.terrain_interval_ms, 10);
        assert_eq!(config.placement.scale_min, 0.5);
        assert_eq!(config.placement.scale_max, 0.8);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `placement` section entirely
        let ron_str = "(planet: (radius: 5.0), terrain: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.placement, PlacementConfig::default());
        assert_eq!(config.planet.radius, 5.0);
        assert_eq!(config.planet.segments, 32);
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.resolution = 512;
        config.planet.seed = 99;
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.placement.structure_interval_ms = 300;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().placement.structure_interval_ms, 300);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_power_of_two_resolution() {
        let mut config = Config::default();
        config.terrain.resolution = 1000;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "terrain.resolution",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_negative_falloff() {
        let mut config = Config::default();
        config.terrain.structure_patch.falloff = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("terrain.structure_patch"));
    }

    #[test]
    fn test_validate_rejects_inverted_scale_range() {
        let mut config = Config::default();
        config.placement.scale_min = 0.9;
        config.placement.scale_max = 0.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_radius() {
        let mut config = Config::default();
        config.planet.radius = 0.0;
        assert!(config.validate().is_err());
    }
}
