//! Integration tests for history sequencing through the controller.
//!
//! Every add/edit/delete must leave `history.current() == store.list()`.

use scene_editor_lib::fixtures::{box_at, controller_with, empty_controller};
use scene_editor_lib::state::{ColorField, PropertyEdit, ScalarField};
use scene_editor_lib::SceneController;
use shared::{Axis, Color};

fn assert_in_sync(c: &SceneController) {
    assert_eq!(
        c.history().current().as_slice(),
        c.objects(),
        "history at cursor {} diverged from the store",
        c.history().cursor()
    );
}

#[test]
fn test_every_mutation_records_exactly_once() {
    let mut c = empty_controller();
    assert_in_sync(&c);

    let a = c.add_box().unwrap();
    assert_eq!(c.history().len(), 2);
    assert_in_sync(&c);

    c.add_sphere().unwrap();
    assert_eq!(c.history().len(), 3);
    assert_in_sync(&c);

    c.select(a.clone());
    c.edit_selected(PropertyEdit::position(Axis::X, 4.0)).unwrap();
    assert_eq!(c.history().len(), 4);
    assert_in_sync(&c);

    c.edit_selected(PropertyEdit::color(ColorField::MaterialColor, Color::rgb(1, 2, 3)))
        .unwrap();
    assert_eq!(c.history().len(), 5);
    assert_in_sync(&c);

    c.delete_selected().unwrap();
    assert_eq!(c.history().len(), 6);
    assert_in_sync(&c);
}

#[test]
fn test_end_to_end_add_edit_undo() {
    let mut c = empty_controller();
    let initial = c.objects().to_vec();

    c.add_box().unwrap();
    assert_eq!(c.history().len(), 2);
    assert_eq!(c.history().cursor(), 1);

    c.edit_selected(PropertyEdit::scalar(ScalarField::Roughness, 0.9))
        .unwrap();
    assert_eq!(c.history().len(), 3);
    assert_eq!(c.history().cursor(), 2);
    assert_eq!(c.objects()[0].material.roughness, 0.9);

    assert!(c.undo());
    assert_eq!(c.objects()[0].material.roughness, 0.5);
    assert!(c.undo());
    assert_eq!(c.objects(), initial.as_slice());
    assert_eq!(c.history().cursor(), 0);
    assert!(c.selection().current().is_none());
}

#[test]
fn test_undo_then_redo_restores_content() {
    let mut c = empty_controller();
    c.add_box().unwrap();
    c.add_sphere().unwrap();
    c.edit_selected(PropertyEdit::scale(Axis::Z, 3.0)).unwrap();

    for _ in 0..3 {
        let before = c.objects().to_vec();
        assert!(c.undo());
        assert!(c.can_redo());
        assert!(c.redo());
        assert_eq!(c.objects(), before.as_slice());
        assert!(c.undo());
    }
    assert!(!c.can_undo());
}

#[test]
fn test_record_after_undo_discards_redo_branch() {
    let mut c = empty_controller();
    c.add_box().unwrap();
    c.add_box().unwrap();
    assert_eq!(c.history().len(), 3);

    c.undo();
    c.undo();
    assert!(c.can_redo());

    c.add_sphere().unwrap();
    assert_eq!(c.history().len(), 2);
    assert!(!c.can_redo());
    assert!(!c.redo());
    assert_eq!(c.objects().len(), 1);
    assert_eq!(c.objects()[0].name, "Sphere 1");
}

#[test]
fn test_axis_edit_leaves_other_fields() {
    let mut c = controller_with(vec![box_at("a", [1.0, 2.0, 3.0])]);
    let before = c.objects()[0].clone();

    c.select("a".into());
    c.edit_selected(PropertyEdit::position(Axis::Y, 5.0)).unwrap();

    let after = &c.objects()[0];
    assert_eq!(after.position, [1.0, 5.0, 3.0]);
    assert_eq!(after.rotation, before.rotation);
    assert_eq!(after.scale, before.scale);
    assert_eq!(after.material, before.material);
}

#[test]
fn test_delete_selected_clears_selection() {
    let mut c = empty_controller();
    let a = c.add_box().unwrap();
    c.select(a.clone());

    let removed = c.delete_selected().unwrap();
    assert_eq!(removed.id, a);
    assert!(c.selection().current().is_none());

    let toast = c.drain_notifications().pop().unwrap();
    assert_eq!(toast.title, "Object Deleted");
    assert!(toast.description.contains("Box 1"));
}

#[test]
fn test_undo_redo_at_boundaries_are_noops() {
    let mut c = empty_controller();
    assert!(!c.undo());
    assert_eq!(c.history().cursor(), 0);

    let id = c.add_box().unwrap();
    assert!(!c.redo());
    assert_eq!(c.history().cursor(), 1);
    // A no-op redo does not drop the selection
    assert_eq!(c.selection().current(), Some(&id));
}

#[test]
fn test_undo_clears_selection() {
    let mut c = empty_controller();
    c.add_box().unwrap();
    c.add_sphere().unwrap();
    assert!(c.selection().current().is_some());
    c.undo();
    assert!(c.selection().current().is_none());
}

#[test]
fn test_names_follow_live_count() {
    let mut c = empty_controller();
    c.add_box().unwrap();
    c.add_box().unwrap();
    c.delete_selected().unwrap();
    c.add_sphere().unwrap();
    let names: Vec<_> = c.objects().iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Box 1", "Sphere 2"]);
}
