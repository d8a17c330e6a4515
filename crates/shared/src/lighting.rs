//! Light and environment configuration

use serde::{Deserialize, Serialize};

use crate::{Color, Vec3};

/// Color, intensity and position of a light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    pub color: Color,
    /// Non-negative
    pub intensity: f64,
    pub position: Vec3,
}

impl LightConfig {
    /// Default fill point light
    pub fn point_default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 0.5,
            position: [-5.0, 5.0, -5.0],
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self::point_default()
    }
}

/// Directional (sun) light with shadow parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLightConfig {
    #[serde(flatten)]
    pub light: LightConfig,
    pub cast_shadow: bool,
    /// (width, height) in texels
    pub shadow_map_size: (u32, u32),
    pub shadow_bias: f64,
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            light: LightConfig {
                color: Color::WHITE,
                intensity: 1.0,
                position: [5.0, 5.0, 5.0],
            },
            cast_shadow: true,
            shadow_map_size: (1024, 1024),
            shadow_bias: -0.0001,
        }
    }
}

/// Named image-based lighting preset of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentPreset {
    Apartment,
    City,
    Dawn,
    Forest,
    Lobby,
    Night,
    Park,
    Studio,
    #[default]
    Sunset,
    Warehouse,
}

impl EnvironmentPreset {
    /// All presets in menu order
    pub fn all() -> &'static [EnvironmentPreset] {
        &[
            EnvironmentPreset::Apartment,
            EnvironmentPreset::City,
            EnvironmentPreset::Dawn,
            EnvironmentPreset::Forest,
            EnvironmentPreset::Lobby,
            EnvironmentPreset::Night,
            EnvironmentPreset::Park,
            EnvironmentPreset::Studio,
            EnvironmentPreset::Sunset,
            EnvironmentPreset::Warehouse,
        ]
    }

    /// Identifier understood by the renderer
    pub fn key(&self) -> &'static str {
        match self {
            EnvironmentPreset::Apartment => "apartment",
            EnvironmentPreset::City => "city",
            EnvironmentPreset::Dawn => "dawn",
            EnvironmentPreset::Forest => "forest",
            EnvironmentPreset::Lobby => "lobby",
            EnvironmentPreset::Night => "night",
            EnvironmentPreset::Park => "park",
            EnvironmentPreset::Studio => "studio",
            EnvironmentPreset::Sunset => "sunset",
            EnvironmentPreset::Warehouse => "warehouse",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EnvironmentPreset::Apartment => "Apartment",
            EnvironmentPreset::City => "City",
            EnvironmentPreset::Dawn => "Dawn",
            EnvironmentPreset::Forest => "Forest",
            EnvironmentPreset::Lobby => "Lobby",
            EnvironmentPreset::Night => "Night",
            EnvironmentPreset::Park => "Park",
            EnvironmentPreset::Studio => "Studio",
            EnvironmentPreset::Sunset => "Sunset",
            EnvironmentPreset::Warehouse => "Warehouse",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_keys_match_serde() {
        for preset in EnvironmentPreset::all() {
            let json = serde_json::to_string(preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset.key()));
            assert_eq!(EnvironmentPreset::from_key(preset.key()), Some(*preset));
        }
        assert_eq!(EnvironmentPreset::all().len(), 10);
        assert_eq!(EnvironmentPreset::default(), EnvironmentPreset::Sunset);
    }

    #[test]
    fn test_directional_light_flattens_base() {
        let light = DirectionalLightConfig::default();
        let json = serde_json::to_value(&light).unwrap();
        assert_eq!(json["intensity"], 1.0);
        assert_eq!(json["cast_shadow"], true);
        assert_eq!(json["shadow_map_size"][0], 1024);
    }
}
