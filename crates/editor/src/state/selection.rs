use shared::ObjectId;

/// Single-object selection plus the object under the pointer.
///
/// No existence checks happen here; the controller is responsible for
/// clearing the selection when the selected object goes away.
#[derive(Debug, Default, Clone)]
pub struct SelectionTracker {
    selected: Option<ObjectId>,
    hovered: Option<ObjectId>,
}

impl SelectionTracker {
    /// Select an object (replaces any previous selection)
    pub fn select(&mut self, id: ObjectId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn current(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Pointer hover feedback from the viewport
    pub fn set_hovered(&mut self, id: Option<ObjectId>) {
        self.hovered = id;
    }

    pub fn hovered(&self) -> Option<&ObjectId> {
        self.hovered.as_ref()
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }
}
