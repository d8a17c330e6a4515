//! What the viewport consumes and what it sends back

use serde::{Deserialize, Serialize};
use shared::{Color, DirectionalLightConfig, EnvironmentPreset, LightConfig, ObjectId, SceneObject};

use crate::state::camera::CameraState;
use crate::state::lighting::LightingState;
use crate::state::models::ModelRegistry;
use crate::state::selection::SelectionTracker;
use crate::state::store::SceneObjectStore;

/// Tint of the selected object
pub const SELECTED_COLOR: Color = Color::rgb(0, 220, 255);

/// Tint of the object under the pointer
pub const HOVER_COLOR: Color = Color::rgb(255, 105, 180);

/// Pointer events emitted by the viewport, keyed by object id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Click on an object, or on empty space when `id` is `None`
    Click { id: Option<ObjectId> },
    Enter { id: ObjectId },
    Leave { id: ObjectId },
}

/// Color an object is drawn with. Selection wins over hover.
pub fn display_color(object: &SceneObject, selected: bool, hovered: bool) -> Color {
    if selected {
        SELECTED_COLOR
    } else if hovered {
        HOVER_COLOR
    } else {
        object.material.material_color
    }
}

/// One object as handed to the renderer
#[derive(Debug, Clone)]
pub struct RenderObject<'a> {
    pub object: &'a SceneObject,
    pub selected: bool,
    pub hovered: bool,
    pub display_color: Color,
    /// Uploaded bytes for blob-backed models
    pub model_bytes: Option<&'a [u8]>,
}

/// Everything the viewport needs to draw one frame
#[derive(Debug, Clone)]
pub struct RenderFrame<'a> {
    pub objects: Vec<RenderObject<'a>>,
    pub directional_light: &'a DirectionalLightConfig,
    pub point_light: &'a LightConfig,
    pub environment: EnvironmentPreset,
    pub camera: &'a CameraState,
}

impl<'a> RenderFrame<'a> {
    pub fn build(
        store: &'a SceneObjectStore,
        selection: &'a SelectionTracker,
        lighting: &'a LightingState,
        camera: &'a CameraState,
        models: &'a ModelRegistry,
    ) -> Self {
        let objects = store
            .list()
            .iter()
            .map(|object| {
                let selected = selection.is_selected(&object.id);
                let hovered = selection.is_hovered(&object.id);
                let model_bytes = object
                    .model()
                    .and_then(|m| m.blob_id())
                    .and_then(|id| models.get(id))
                    .map(|blob| blob.bytes.as_slice());
                RenderObject {
                    object,
                    selected,
                    hovered,
                    display_color: display_color(object, selected, hovered),
                    model_bytes,
                }
            })
            .collect();

        Self {
            objects,
            directional_light: &lighting.directional,
            point_light: &lighting.point,
            environment: lighting.environment,
            camera,
        }
    }

    pub fn object(&self, id: &str) -> Option<&RenderObject<'a>> {
        self.objects.iter().find(|o| o.object.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::box_at;

    #[test]
    fn test_display_color_priority() {
        let obj = box_at("a", [0.0; 3]);
        assert_eq!(display_color(&obj, true, true), SELECTED_COLOR);
        assert_eq!(display_color(&obj, false, true), HOVER_COLOR);
        assert_eq!(display_color(&obj, false, false), obj.material.material_color);
    }

    #[test]
    fn test_frame_marks_selected_and_hovered() {
        let store = SceneObjectStore::from_objects(vec![box_at("a", [0.0; 3]), box_at("b", [1.0; 3])]);
        let mut selection = SelectionTracker::default();
        selection.select("a".into());
        selection.set_hovered(Some("b".into()));
        let lighting = LightingState::default();
        let camera = CameraState::default();
        let models = ModelRegistry::new();

        let frame = RenderFrame::build(&store, &selection, &lighting, &camera, &models);
        assert_eq!(frame.objects.len(), 2);
        assert!(frame.object("a").unwrap().selected);
        assert_eq!(frame.object("b").unwrap().display_color, HOVER_COLOR);
        assert_eq!(frame.environment, EnvironmentPreset::Sunset);
    }

    #[test]
    fn test_pointer_event_json() {
        let ev: PointerEvent = serde_json::from_str(r#"{"type": "click", "id": null}"#).unwrap();
        assert_eq!(ev, PointerEvent::Click { id: None });
        let ev: PointerEvent = serde_json::from_str(r#"{"type": "enter", "id": "a"}"#).unwrap();
        assert_eq!(ev, PointerEvent::Enter { id: "a".into() });
    }
}
