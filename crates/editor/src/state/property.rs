//! Typed property edits for scene objects

use serde::{Deserialize, Serialize};
use shared::{Axis, Color, SceneObject};

/// Vector-valued transform fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorField {
    Position,
    /// Radians
    Rotation,
    Scale,
}

/// Real-valued material fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    Roughness,
    Metalness,
    EmissiveIntensity,
    Opacity,
}

/// Color-valued material fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorField {
    MaterialColor,
    EmissiveColor,
}

/// A single edit made from the properties panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "group", rename_all = "snake_case")]
pub enum PropertyEdit {
    Name {
        value: String,
    },
    /// Overwrites one component, the other two are kept
    Vector {
        field: VectorField,
        axis: Axis,
        value: f64,
    },
    Scalar {
        field: ScalarField,
        value: f64,
    },
    Color {
        field: ColorField,
        value: Color,
    },
    Wireframe {
        value: bool,
    },
}

impl PropertyEdit {
    pub fn position(axis: Axis, value: f64) -> Self {
        PropertyEdit::Vector {
            field: VectorField::Position,
            axis,
            value,
        }
    }

    pub fn rotation(axis: Axis, radians: f64) -> Self {
        PropertyEdit::Vector {
            field: VectorField::Rotation,
            axis,
            value: radians,
        }
    }

    /// Rotation as typed into the panel, which works in degrees
    pub fn rotation_degrees(axis: Axis, degrees: f64) -> Self {
        Self::rotation(axis, degrees.to_radians())
    }

    pub fn scale(axis: Axis, value: f64) -> Self {
        PropertyEdit::Vector {
            field: VectorField::Scale,
            axis,
            value,
        }
    }

    pub fn scalar(field: ScalarField, value: f64) -> Self {
        PropertyEdit::Scalar { field, value }
    }

    pub fn color(field: ColorField, value: Color) -> Self {
        PropertyEdit::Color { field, value }
    }

    /// Write the edited value into `object`
    pub fn apply(&self, object: &mut SceneObject) {
        match self {
            PropertyEdit::Name { value } => object.name = value.clone(),
            PropertyEdit::Vector { field, axis, value } => {
                let target = match field {
                    VectorField::Position => &mut object.position,
                    VectorField::Rotation => &mut object.rotation,
                    VectorField::Scale => &mut object.scale,
                };
                target[axis.index()] = *value;
            }
            PropertyEdit::Scalar { field, value } => {
                let material = &mut object.material;
                let target = match field {
                    ScalarField::Roughness => &mut material.roughness,
                    ScalarField::Metalness => &mut material.metalness,
                    ScalarField::EmissiveIntensity => &mut material.emissive_intensity,
                    ScalarField::Opacity => &mut material.opacity,
                };
                *target = *value;
            }
            PropertyEdit::Color { field, value } => match field {
                ColorField::MaterialColor => object.material.material_color = *value,
                ColorField::EmissiveColor => object.material.emissive_color = *value,
            },
            PropertyEdit::Wireframe { value } => object.material.wireframe = *value,
        }
    }

    /// Field label for logs and notifications
    pub fn field_name(&self) -> &'static str {
        match self {
            PropertyEdit::Name { .. } => "name",
            PropertyEdit::Vector { field, .. } => match field {
                VectorField::Position => "position",
                VectorField::Rotation => "rotation",
                VectorField::Scale => "scale",
            },
            PropertyEdit::Scalar { field, .. } => match field {
                ScalarField::Roughness => "roughness",
                ScalarField::Metalness => "metalness",
                ScalarField::EmissiveIntensity => "emissive_intensity",
                ScalarField::Opacity => "opacity",
            },
            PropertyEdit::Color { field, .. } => match field {
                ColorField::MaterialColor => "material_color",
                ColorField::EmissiveColor => "emissive_color",
            },
            PropertyEdit::Wireframe { .. } => "wireframe",
        }
    }
}
