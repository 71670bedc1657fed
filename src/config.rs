// src/config.rs
//! RON-backed configuration for the bake pass and the wave animator.
//! Every field defaults, so a partial `proxy.ron` is fine and a missing
//! one falls back to `ProxyConfig::default()`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bake::BakeError;
use crate::wave::params::WaveParams;

#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
pub struct ProxyConfig {
    #[serde(default)]
    pub field: FieldSettings,
    #[serde(default)]
    pub bake: BakeSettings,
    #[serde(default)]
    pub wave: WaveParams,
    #[serde(default = "default_cull_distance")]
    pub cull_distance: f32,
    #[serde(default)]
    pub scatter: ScatterSettings,
    /// Asset paths resolving prototype indices to renderable scenes.
    #[serde(default = "default_prototypes")]
    pub prototypes: Vec<String>,
    #[serde(default)]
    pub layers: Vec<LayerSettings>,
    #[serde(default)]
    pub control_maps: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldSettings {
    /// Heightmap image, read straight from disk (not via the asset server).
    pub image: String,
    /// World XZ of the field corner (UV origin).
    pub origin: Vec2,
    /// World XZ span of the field.
    pub size: Vec2,
    /// World height at full brightness.
    pub height_scale: f32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        let size = Vec2::splat(512.0);
        Self {
            image: "assets/heightmap.png".to_string(),
            origin: -size * 0.5,
            size,
            height_scale: 60.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BakeSettings {
    pub center: Vec3,
    pub size: f32,
    pub resolution: u32,
}

impl Default for BakeSettings {
    fn default() -> Self {
        Self { center: Vec3::ZERO, size: 200.0, resolution: 150 }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScatterSettings {
    pub seed: u64,
    /// Jittered-grid cell size in meters.
    pub cell: f32,
    /// Jitter as a fraction of the cell, clamped to 0..=0.5 at use.
    pub jitter: f32,
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self { seed: 20260823, cell: 12.0, jitter: 0.35 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayerSettings {
    pub diffuse: String,
    #[serde(default)]
    pub normal: Option<String>,
    pub tile: Vec2,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            field: FieldSettings::default(),
            bake: BakeSettings::default(),
            wave: WaveParams::default(),
            cull_distance: default_cull_distance(),
            scatter: ScatterSettings::default(),
            prototypes: default_prototypes(),
            layers: Vec::new(),
            control_maps: Vec::new(),
        }
    }
}

fn default_cull_distance() -> f32 {
    50.0
}

fn default_prototypes() -> Vec<String> {
    vec!["models/tree.glb#Scene0".to_string()]
}

impl ProxyConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BakeError> {
        let text = std::fs::read_to_string(path)?;
        ron::from_str(&text).map_err(|e| BakeError::Ron(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_fills_in_defaults() {
        let config: ProxyConfig = ron::from_str("(cull_distance: 75.0)").unwrap();
        assert_eq!(config.cull_distance, 75.0);
        assert_eq!(config.bake.resolution, 150);
        assert_eq!(config.bake.size, 200.0);
        assert_eq!(config.wave.frequency, 0.1);
        assert_eq!(config.prototypes.len(), 1);
    }

    #[test]
    fn defaults_match_the_shader_side() {
        let config = ProxyConfig::default();
        assert_eq!(config.wave.direction, Vec2::new(1.0, 0.6));
        assert_eq!(config.cull_distance, 50.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ProxyConfig::load("definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, BakeError::Io(_)));
    }
}
