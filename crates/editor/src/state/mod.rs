//! Editor state: object store, selection, history, lighting, camera, settings

pub mod camera;
pub mod history;
pub mod lighting;
pub mod models;
pub mod property;
pub mod selection;
pub mod settings;
pub mod store;

pub use camera::CameraState;
pub use history::HistoryManager;
pub use lighting::{LightEdit, LightTarget, LightingState};
pub use models::{ModelBlob, ModelRegistry};
pub use property::{ColorField, PropertyEdit, ScalarField, VectorField};
pub use selection::SelectionTracker;
pub use settings::EditorSettings;
pub use store::SceneObjectStore;
