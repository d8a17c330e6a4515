//! Composition root: wires user actions to the stores.
//!
//! Every mutation of the object store is followed by exactly one history
//! record carrying the resulting collection. Undo and redo read history and
//! never write it.

use std::future::Future;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use shared::{EnvironmentPreset, ModelRef, ObjectId, ObjectKind, SceneDescription, SceneObject};

use crate::error::{EditorError, Result};
use crate::factory::{self, SAMPLE_MODEL_URL};
use crate::import::{self, ModelUpload};
use crate::notify::{Notification, NotificationQueue};
use crate::render::{PointerEvent, RenderFrame};
use crate::state::{
    CameraState, EditorSettings, HistoryManager, LightEdit, LightTarget, LightingState,
    ModelRegistry, PropertyEdit, SceneObjectStore, SelectionTracker,
};

/// One editor session
pub struct SceneController {
    store: SceneObjectStore,
    selection: SelectionTracker,
    history: HistoryManager,
    lighting: LightingState,
    camera: CameraState,
    models: ModelRegistry,
    notifications: NotificationQueue,
    pending_imports: Arc<AtomicUsize>,
}

/// Counts one in-flight import; dropping it (read finished or abandoned)
/// takes the import off the pending count
struct PendingImport(Arc<AtomicUsize>);

impl PendingImport {
    fn start(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for PendingImport {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Default for SceneController {
    /// Empty scene with default settings
    fn default() -> Self {
        Self::with_objects(Vec::new(), &EditorSettings::default())
    }
}

impl SceneController {
    /// New session, seeded with the starter scene if the settings ask for it
    pub fn new(settings: &EditorSettings) -> Self {
        let objects = if settings.seed_starter_scene {
            factory::starter_scene()
        } else {
            Vec::new()
        };
        Self::with_objects(objects, settings)
    }

    /// New session whose initial history snapshot is `objects`
    pub fn with_objects(objects: Vec<SceneObject>, settings: &EditorSettings) -> Self {
        let store = SceneObjectStore::from_objects(objects);
        let history = HistoryManager::with_limit(store.list().to_vec(), settings.history_limit);
        tracing::debug!("Editor session started with {} object(s)", store.len());
        Self {
            store,
            selection: SelectionTracker::default(),
            history,
            lighting: LightingState::with_environment(settings.environment),
            camera: CameraState::new(settings.camera_fov),
            models: ModelRegistry::new(),
            notifications: NotificationQueue::default(),
            pending_imports: Arc::new(AtomicUsize::new(0)),
        }
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn store(&self) -> &SceneObjectStore {
        &self.store
    }

    pub fn objects(&self) -> &[SceneObject] {
        self.store.list()
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn lighting(&self) -> &LightingState {
        &self.lighting
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Orbit/zoom/pan are driven directly by viewport drags
    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    pub fn models(&self) -> &ModelRegistry {
        &self.models
    }

    /// The selected object, if the selection still points at a live object
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selection.current().and_then(|id| self.store.get(id))
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    // ── Internal sequencing ───────────────────────────────────

    /// Record the live collection and drop model bytes no snapshot can reach
    fn commit(&mut self) {
        self.history.record(self.store.list().to_vec());
        self.release_unreachable_models();
    }

    fn release_unreachable_models(&mut self) {
        let referenced = self.history.referenced_blobs();
        self.models.release_unreferenced(&referenced);
    }

    /// Convert a failure into a notification and pass it on
    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.notifications.push(Notification::from(e));
        }
        result
    }

    // ── Objects ───────────────────────────────────────────────

    /// Add a default-valued object of `kind`, select it and record history
    pub fn add_object(&mut self, kind: ObjectKind) -> Result<ObjectId> {
        let id = factory::generate_id();
        let name = factory::generate_name(kind.label(), self.store.len() + 1);
        self.insert_object(factory::create_object(id, name, kind))
    }

    pub fn add_box(&mut self) -> Result<ObjectId> {
        self.add_object(ObjectKind::Box)
    }

    pub fn add_sphere(&mut self) -> Result<ObjectId> {
        self.add_object(ObjectKind::Sphere)
    }

    /// Add the bundled sample model
    pub fn add_sample_model(&mut self) -> Result<ObjectId> {
        self.add_object(ObjectKind::ImportedModel {
            model: ModelRef::Url(SAMPLE_MODEL_URL.to_string()),
        })
    }

    /// Add a fully built object, select it and record history
    pub fn insert_object(&mut self, object: SceneObject) -> Result<ObjectId> {
        let id = object.id.clone();
        let added = self.store.add(object);
        self.report(added)?;

        self.selection.select(id.clone());
        self.commit();
        tracing::info!("Added object {id}");
        Ok(id)
    }

    pub fn select(&mut self, id: ObjectId) {
        self.selection.select(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Edit the selected object. Returns `Ok(false)` when nothing is selected.
    pub fn edit_selected(&mut self, edit: PropertyEdit) -> Result<bool> {
        let Some(id) = self.selection.current().cloned() else {
            return Ok(false);
        };
        self.edit_property(&id, edit)?;
        Ok(true)
    }

    /// Edit one property of the object at `id` and record history
    pub fn edit_property(&mut self, id: &str, edit: PropertyEdit) -> Result<()> {
        let updated = self.store.update_property(id, &edit).map(|_| ());
        self.report(updated)?;
        self.commit();
        tracing::debug!("Edited {} of {id}", edit.field_name());
        Ok(())
    }

    /// Delete the selected object, if any
    pub fn delete_selected(&mut self) -> Option<SceneObject> {
        let id = self.selection.current()?.clone();
        self.delete_object(&id)
    }

    /// Delete the object at `id`, clearing the selection if it pointed there.
    ///
    /// Deleting a missing id changes nothing and records nothing.
    pub fn delete_object(&mut self, id: &str) -> Option<SceneObject> {
        let removed = self.store.delete(id)?;
        if self.selection.is_selected(id) {
            self.selection.clear();
        }
        self.commit();

        self.notifications.push(Notification::info(
            "Object Deleted",
            format!("\"{}\" has been removed.", removed.name),
        ));
        Some(removed)
    }

    // ── History ───────────────────────────────────────────────

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one snapshot. Returns `false` (and changes nothing) at the start.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let snapshot = self.history.undo().clone();
        self.store.replace_all(snapshot);
        self.selection.clear();
        tracing::debug!("Undo to snapshot {}", self.history.cursor());
        true
    }

    /// Step forward one snapshot. Returns `false` (and changes nothing) at the end.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let snapshot = self.history.redo().clone();
        self.store.replace_all(snapshot);
        self.selection.clear();
        tracing::debug!("Redo to snapshot {}", self.history.cursor());
        true
    }

    // ── Lighting & camera ─────────────────────────────────────

    pub fn update_light(&mut self, target: LightTarget, edit: LightEdit) -> Result<()> {
        let updated = self.lighting.update(target, edit);
        self.report(updated)
    }

    pub fn set_environment(&mut self, preset: EnvironmentPreset) {
        self.lighting.set_environment(preset);
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    // ── Viewport ──────────────────────────────────────────────

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Click { id: Some(id) } => self.selection.select(id),
            PointerEvent::Click { id: None } => self.selection.clear(),
            PointerEvent::Enter { id } => self.selection.set_hovered(Some(id)),
            PointerEvent::Leave { id } => {
                if self.selection.is_hovered(&id) {
                    self.selection.set_hovered(None);
                }
            }
        }
    }

    pub fn render_frame(&self) -> RenderFrame<'_> {
        RenderFrame::build(
            &self.store,
            &self.selection,
            &self.lighting,
            &self.camera,
            &self.models,
        )
    }

    /// Read-only export of the session
    pub fn describe(&self) -> SceneDescription {
        SceneDescription {
            version: 1,
            objects: self.store.list().to_vec(),
            directional_light: self.lighting.directional.clone(),
            point_light: self.lighting.point.clone(),
            environment: self.lighting.environment,
        }
    }

    // ── Model import ──────────────────────────────────────────

    pub fn is_importing(&self) -> bool {
        self.pending_imports.load(Ordering::SeqCst) > 0
    }

    /// Start importing a model file.
    ///
    /// The file name is checked immediately. The returned future reads the
    /// bytes without borrowing the controller; feed its output to
    /// [`SceneController::finish_import`]. The import counts as pending until
    /// the future completes or is dropped.
    pub fn begin_import(
        &mut self,
        path: PathBuf,
    ) -> Result<impl Future<Output = Result<ModelUpload>> + Send + 'static> {
        let checked = import::validate_file_name(&import::file_name_of(&path));
        self.report(checked)?;

        let pending = PendingImport::start(&self.pending_imports);
        tracing::info!("Importing model {}", path.display());
        Ok(async move {
            let result = import::read_model_file(path).await;
            drop(pending);
            result
        })
    }

    /// Complete an import: add the model as a new object, or report the failure.
    ///
    /// There is no cancellation; a successful read always appends a new object
    /// and history entry, whatever happened while it was in flight.
    pub fn finish_import(&mut self, result: Result<ModelUpload>) -> Result<ObjectId> {
        let upload = self.report(result)?;

        let name = upload
            .display_name()
            .map(str::to_string)
            .unwrap_or_else(|| factory::generate_name("Model", self.store.len() + 1));
        let file_name = upload.file_name.clone();
        let blob = self.models.insert(upload.file_name, upload.bytes);
        let object = factory::create_model(factory::generate_id(), name, ModelRef::Blob(blob));

        match self.insert_object(object) {
            Ok(id) => {
                self.notifications.push(Notification::info(
                    "Model Uploaded",
                    format!("\"{file_name}\" added to scene."),
                ));
                Ok(id)
            }
            Err(e) => {
                self.release_unreachable_models();
                Err(e)
            }
        }
    }

    /// Convenience for sequential callers: validate, read and add in one go
    pub async fn import_model(&mut self, path: PathBuf) -> Result<ObjectId> {
        let read = self.begin_import(path)?;
        let result = read.await;
        self.finish_import(result)
    }

    /// Surface an error from an outer layer (e.g. a failed command) as a toast
    pub fn notify_error(&mut self, err: &EditorError) {
        self.notifications.push(Notification::from(err));
    }
}
