//! Factory functions for creating test data.
//!
//! Provides convenient helpers to construct `SceneObject`s and controllers
//! used in tests and by the command protocol examples.

use shared::{BlobId, ModelRef, ObjectKind, SceneObject, Vec3};

use crate::controller::SceneController;
use crate::state::EditorSettings;

// ── Object factories ────────────────────────────────────────────

/// Box with a fixed id at `position`
pub fn box_at(id: &str, position: Vec3) -> SceneObject {
    SceneObject::new(id, format!("Box {id}"), ObjectKind::Box).with_position(position)
}

/// Sphere with a fixed id at the origin
pub fn sphere(id: &str) -> SceneObject {
    SceneObject::new(id, format!("Sphere {id}"), ObjectKind::Sphere)
}

/// Imported model backed by a blob handle
pub fn imported_blob(id: &str, blob: &str) -> SceneObject {
    SceneObject::new(
        id,
        format!("Model {id}"),
        ObjectKind::ImportedModel {
            model: ModelRef::Blob(BlobId(blob.to_string())),
        },
    )
}

// ── Controller factories ────────────────────────────────────────

/// Settings for a blank session with unbounded history
pub fn blank_settings() -> EditorSettings {
    EditorSettings {
        history_limit: None,
        seed_starter_scene: false,
        ..EditorSettings::default()
    }
}

/// Controller with an empty scene and unbounded history
pub fn empty_controller() -> SceneController {
    SceneController::new(&blank_settings())
}

/// Controller whose initial snapshot holds `objects`
pub fn controller_with(objects: Vec<SceneObject>) -> SceneController {
    SceneController::with_objects(objects, &blank_settings())
}
