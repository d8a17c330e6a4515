//! Plain data types shared by the editor core and its collaborators.

use serde::{Deserialize, Serialize};

mod color;
mod lighting;

pub use color::{Color, ParseColorError};
pub use lighting::{DirectionalLightConfig, EnvironmentPreset, LightConfig};

/// Unique identifier of a scene object
pub type ObjectId = String;

/// Three-component vector (position, rotation in radians, scale)
pub type Vec3 = [f64; 3];

/// Full collection state captured by one history entry
pub type HistorySnapshot = Vec<SceneObject>;

/// Component of a 3-vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index into a `[f64; 3]`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Handle to a model blob held by the editor's model registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobId(pub String);

impl std::fmt::Display for BlobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the bytes of an imported model live
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ModelRef {
    /// Remote or bundled asset, never owned by the editor
    Url(String),
    /// Uploaded bytes owned by the model registry
    Blob(BlobId),
}

impl ModelRef {
    pub fn blob_id(&self) -> Option<&BlobId> {
        match self {
            ModelRef::Blob(id) => Some(id),
            ModelRef::Url(_) => None,
        }
    }
}

/// Shape of a scene object. Fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectKind {
    Box,
    Sphere,
    ImportedModel { model: ModelRef },
}

impl ObjectKind {
    /// Human readable kind label, used for generated names
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Box => "Box",
            ObjectKind::Sphere => "Sphere",
            ObjectKind::ImportedModel { .. } => "Model",
        }
    }

    pub fn model(&self) -> Option<&ModelRef> {
        match self {
            ObjectKind::ImportedModel { model } => Some(model),
            _ => None,
        }
    }

    /// Whether material fields affect rendering for this kind
    pub fn has_editable_material(&self) -> bool {
        !matches!(self, ObjectKind::ImportedModel { .. })
    }
}

/// Rendering hints for primitive shapes. Ignored for imported models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub material_color: Color,
    pub roughness: f64,
    pub metalness: f64,
    pub emissive_color: Color,
    pub emissive_intensity: f64,
    pub opacity: f64,
    pub wireframe: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            material_color: Color::rgb(0x34, 0x98, 0xdb),
            roughness: 0.5,
            metalness: 0.0,
            emissive_color: Color::BLACK,
            emissive_intensity: 0.0,
            opacity: 1.0,
            wireframe: false,
        }
    }
}

impl Material {
    /// Whether the renderer has to blend this material
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// One renderable entity in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    pub position: Vec3,
    /// Euler angles in radians
    pub rotation: Vec3,
    pub scale: Vec3,
    #[serde(flatten)]
    pub material: Material,
}

impl SceneObject {
    /// Object of the given kind at the origin with unit scale and default material
    pub fn new(id: impl Into<ObjectId>, name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
            material: Material::default(),
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn model(&self) -> Option<&ModelRef> {
        self.kind.model()
    }
}

fn default_version() -> u32 {
    1
}

/// Exported, read-only view of an editor session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default = "default_version")]
    pub version: u32,
    pub objects: Vec<SceneObject>,
    pub directional_light: DirectionalLightConfig,
    pub point_light: LightConfig,
    #[serde(default)]
    pub environment: EnvironmentPreset,
}
