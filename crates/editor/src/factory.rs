//! Default-valued objects created by the "Add" buttons

use shared::{Color, Material, ModelRef, ObjectId, ObjectKind, SceneObject};

/// Bundled sample model used by "Add GLTF Model"
pub const SAMPLE_MODEL_URL: &str =
    "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Models/master/2.0/Duck/glTF-Binary/Duck.glb";

/// Fresh unique object id
pub fn generate_id() -> ObjectId {
    uuid::Uuid::new_v4().to_string()
}

/// Display name like `"Box 3"` for the n-th object
pub fn generate_name(label: &str, n: usize) -> String {
    format!("{label} {n}")
}

/// Unit box resting on the ground plane
pub fn create_box(id: ObjectId, name: String) -> SceneObject {
    SceneObject::new(id, name, ObjectKind::Box).with_position([0.0, 0.5, 0.0])
}

/// Unit sphere resting on the ground plane
pub fn create_sphere(id: ObjectId, name: String) -> SceneObject {
    SceneObject::new(id, name, ObjectKind::Sphere)
        .with_position([0.0, 0.75, 0.0])
        .with_material(Material {
            material_color: Color::rgb(0xe7, 0x4c, 0x3c),
            ..Material::default()
        })
}

/// Imported model at the origin
pub fn create_model(id: ObjectId, name: String, model: ModelRef) -> SceneObject {
    SceneObject::new(id, name, ObjectKind::ImportedModel { model })
}

/// Default-valued object for `kind`
pub fn create_object(id: ObjectId, name: String, kind: ObjectKind) -> SceneObject {
    match kind {
        ObjectKind::Box => create_box(id, name),
        ObjectKind::Sphere => create_sphere(id, name),
        ObjectKind::ImportedModel { model } => create_model(id, name, model),
    }
}

/// Cube, sphere and flat rectangle shown when a session starts
pub fn starter_scene() -> Vec<SceneObject> {
    vec![
        SceneObject::new("cube-1", "Cube", ObjectKind::Box).with_position([0.0, 0.5, 0.0]),
        SceneObject::new("sphere-1", "Sphere", ObjectKind::Sphere)
            .with_position([2.0, 0.75, -2.0])
            .with_material(Material {
                material_color: Color::rgb(0xe7, 0x4c, 0x3c),
                roughness: 0.2,
                metalness: 0.8,
                ..Material::default()
            }),
        SceneObject::new("rectangle-1", "Rectangle", ObjectKind::Box)
            .with_position([-2.0, 0.25, 2.0])
            .with_scale([1.5, 0.5, 2.0])
            .with_material(Material {
                material_color: Color::rgb(0x2e, 0xcc, 0x71),
                roughness: 0.7,
                metalness: 0.1,
                ..Material::default()
            }),
    ]
}
