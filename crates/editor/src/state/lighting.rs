//! Light configuration and environment preset. Not versioned by history.

use serde::{Deserialize, Serialize};
use shared::{Axis, Color, DirectionalLightConfig, EnvironmentPreset, LightConfig};

use crate::error::{EditorError, Result};

/// Which light an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightTarget {
    Directional,
    Point,
}

/// A single edit from the lighting panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum LightEdit {
    Color(Color),
    Intensity(f64),
    Position { axis: Axis, value: f64 },
    /// Directional light only
    CastShadow(bool),
    /// Directional light only
    ShadowMapSize { width: u32, height: u32 },
    /// Directional light only
    ShadowBias(f64),
}

impl LightEdit {
    fn is_shadow_edit(&self) -> bool {
        matches!(
            self,
            LightEdit::CastShadow(_) | LightEdit::ShadowMapSize { .. } | LightEdit::ShadowBias(_)
        )
    }
}

/// Both scene lights plus the environment preset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightingState {
    pub directional: DirectionalLightConfig,
    pub point: LightConfig,
    pub environment: EnvironmentPreset,
}

impl LightingState {
    pub fn with_environment(environment: EnvironmentPreset) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    /// Apply an edit to one light. Invalid edits leave both lights untouched.
    pub fn update(&mut self, target: LightTarget, edit: LightEdit) -> Result<()> {
        if let LightEdit::Intensity(value) = edit {
            if value.is_nan() || value < 0.0 {
                return Err(EditorError::Validation(format!(
                    "Light intensity must be non-negative, got {value}"
                )));
            }
        }
        if let LightEdit::ShadowMapSize { width, height } = edit {
            if width == 0 || height == 0 {
                return Err(EditorError::Validation(
                    "Shadow map size must be non-zero".to_string(),
                ));
            }
        }

        match target {
            LightTarget::Point if edit.is_shadow_edit() => Err(EditorError::Validation(
                "The point light has no shadow settings".to_string(),
            )),
            LightTarget::Point => {
                apply_base(&mut self.point, &edit);
                Ok(())
            }
            LightTarget::Directional => {
                let light = &mut self.directional;
                match edit {
                    LightEdit::CastShadow(on) => light.cast_shadow = on,
                    LightEdit::ShadowMapSize { width, height } => {
                        light.shadow_map_size = (width, height)
                    }
                    LightEdit::ShadowBias(bias) => light.shadow_bias = bias,
                    base => apply_base(&mut light.light, &base),
                }
                Ok(())
            }
        }
    }

    pub fn light(&self, target: LightTarget) -> &LightConfig {
        match target {
            LightTarget::Directional => &self.directional.light,
            LightTarget::Point => &self.point,
        }
    }

    pub fn set_environment(&mut self, preset: EnvironmentPreset) {
        self.environment = preset;
    }
}

fn apply_base(light: &mut LightConfig, edit: &LightEdit) {
    match *edit {
        LightEdit::Color(color) => light.color = color,
        LightEdit::Intensity(value) => light.intensity = value,
        LightEdit::Position { axis, value } => light.position[axis.index()] = value,
        LightEdit::CastShadow(_) | LightEdit::ShadowMapSize { .. } | LightEdit::ShadowBias(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_axis_edit() {
        let mut lighting = LightingState::default();
        let before = lighting.point.position;
        lighting
            .update(LightTarget::Point, LightEdit::Position { axis: Axis::X, value: 7.0 })
            .unwrap();
        assert_eq!(lighting.point.position, [7.0, before[1], before[2]]);
        assert_eq!(lighting.directional, DirectionalLightConfig::default());
    }

    #[test]
    fn test_directional_shadow_edits() {
        let mut lighting = LightingState::default();
        lighting
            .update(LightTarget::Directional, LightEdit::CastShadow(false))
            .unwrap();
        lighting
            .update(
                LightTarget::Directional,
                LightEdit::ShadowMapSize { width: 2048, height: 512 },
            )
            .unwrap();
        lighting
            .update(LightTarget::Directional, LightEdit::Intensity(1.5))
            .unwrap();
        assert!(!lighting.directional.cast_shadow);
        assert_eq!(lighting.directional.shadow_map_size, (2048, 512));
        assert_eq!(lighting.directional.light.intensity, 1.5);
    }

    #[test]
    fn test_point_light_rejects_shadow_edit() {
        let mut lighting = LightingState::default();
        let err = lighting
            .update(LightTarget::Point, LightEdit::ShadowBias(0.1))
            .unwrap_err();
        assert!(matches!(err, EditorError::Validation(_)));
        assert_eq!(lighting, LightingState::default());
    }

    #[test]
    fn test_negative_intensity_rejected() {
        let mut lighting = LightingState::default();
        assert!(lighting
            .update(LightTarget::Directional, LightEdit::Intensity(-0.5))
            .is_err());
        assert!(lighting
            .update(LightTarget::Point, LightEdit::Intensity(f64::NAN))
            .is_err());
        assert_eq!(lighting, LightingState::default());
    }

    #[test]
    fn test_light_edit_json_shape() {
        let edit: LightEdit =
            serde_json::from_str(r#"{"field": "position", "value": {"axis": "z", "value": 2.0}}"#)
                .unwrap();
        assert_eq!(edit, LightEdit::Position { axis: Axis::Z, value: 2.0 });
        let edit: LightEdit = serde_json::from_str(r##"{"field": "color", "value": "#00ff00"}"##).unwrap();
        assert_eq!(edit, LightEdit::Color(Color::rgb(0, 255, 0)));
    }
}
