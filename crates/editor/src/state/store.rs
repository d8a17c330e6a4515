//! Ordered collection of scene objects

use shared::{ObjectId, SceneObject};

use super::property::PropertyEdit;
use crate::error::{EditorError, Result};

/// Live scene content, in insertion order.
///
/// The store never records history on its own; callers pair every mutation
/// with a history snapshot.
#[derive(Debug, Default, Clone)]
pub struct SceneObjectStore {
    objects: Vec<SceneObject>,
}

impl SceneObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `objects`. Later duplicates of an id are dropped.
    pub fn from_objects(objects: Vec<SceneObject>) -> Self {
        let mut store = Self::new();
        for object in objects {
            if let Err(e) = store.add(object) {
                tracing::warn!("Skipping seed object: {e}");
            }
        }
        store
    }

    /// Insert a new object at the end
    pub fn add(&mut self, object: SceneObject) -> Result<()> {
        if self.contains(&object.id) {
            return Err(EditorError::DuplicateId(object.id));
        }
        self.objects.push(object);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn position_of(&self, id: &str) -> Result<usize> {
        self.objects
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| EditorError::NotFound(id.to_string()))
    }

    /// Replace the object at `id` with `f(current)`.
    ///
    /// `id` and `kind` are immutable and are carried over from the current value.
    pub fn update<F>(&mut self, id: &str, f: F) -> Result<&SceneObject>
    where
        F: FnOnce(&SceneObject) -> SceneObject,
    {
        let index = self.position_of(id)?;
        let current = &self.objects[index];
        let mut next = f(current);
        next.id = current.id.clone();
        next.kind = current.kind.clone();
        self.objects[index] = next;
        Ok(&self.objects[index])
    }

    /// Apply a single property edit to the object at `id`
    pub fn update_property(&mut self, id: &str, edit: &PropertyEdit) -> Result<&SceneObject> {
        self.update(id, |current| {
            let mut next = current.clone();
            edit.apply(&mut next);
            next
        })
    }

    /// Remove the object at `id`. Deleting a missing id is a no-op returning `None`.
    pub fn delete(&mut self, id: &str) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    /// All objects in insertion order
    pub fn list(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn ids(&self) -> impl Iterator<Item = &ObjectId> {
        self.objects.iter().map(|o| &o.id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Overwrite the entire content, e.g. with a history snapshot
    pub fn replace_all(&mut self, objects: Vec<SceneObject>) {
        self.objects = objects;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{box_at, sphere};
    use shared::{Axis, ObjectKind};

    #[test]
    fn test_add_and_list_keeps_insertion_order() {
        let mut store = SceneObjectStore::new();
        store.add(box_at("b", [0.0; 3])).unwrap();
        store.add(sphere("a")).unwrap();
        let ids: Vec<_> = store.ids().cloned().collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_add_duplicate_id_fails() {
        let mut store = SceneObjectStore::new();
        store.add(sphere("a")).unwrap();
        let err = store.add(sphere("a")).unwrap_err();
        assert!(matches!(err, EditorError::DuplicateId(id) if id == "a"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_property_axis() {
        let mut store = SceneObjectStore::new();
        store.add(box_at("a", [1.0, 2.0, 3.0])).unwrap();
        let before = store.get("a").unwrap().clone();

        let updated = store
            .update_property("a", &PropertyEdit::position(Axis::Y, 5.0))
            .unwrap();
        assert_eq!(updated.position, [1.0, 5.0, 3.0]);

        let after = store.get("a").unwrap();
        assert_eq!(after.rotation, before.rotation);
        assert_eq!(after.scale, before.scale);
        assert_eq!(after.material, before.material);
        assert_eq!(after.name, before.name);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = SceneObjectStore::new();
        let err = store
            .update_property("ghost", &PropertyEdit::Wireframe { value: true })
            .unwrap_err();
        assert!(matches!(err, EditorError::NotFound(_)));
    }

    #[test]
    fn test_update_cannot_change_id_or_kind() {
        let mut store = SceneObjectStore::new();
        store.add(box_at("a", [0.0; 3])).unwrap();
        store
            .update("a", |o| {
                let mut next = o.clone();
                next.id = "other".into();
                next.kind = ObjectKind::Sphere;
                next.name = "Renamed".into();
                next
            })
            .unwrap();
        let obj = store.get("a").unwrap();
        assert_eq!(obj.kind, ObjectKind::Box);
        assert_eq!(obj.name, "Renamed");
        assert!(!store.contains("other"));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = SceneObjectStore::new();
        store.add(sphere("a")).unwrap();
        assert!(store.delete("ghost").is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.delete("a").map(|o| o.id), Some("a".to_string()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_objects_skips_duplicates() {
        let store = SceneObjectStore::from_objects(vec![sphere("a"), sphere("a"), sphere("b")]);
        assert_eq!(store.len(), 2);
    }
}
