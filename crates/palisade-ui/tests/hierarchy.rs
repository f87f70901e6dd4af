mod common;

use common::{EventLog, Recorder, absolute_root, place, settle};
use palisade_ui::prelude::*;

fn assert_dense(ui: &RootPanel, parent: ControlId) {
    let container = ui.container(parent).unwrap();
    let mut z: Vec<ControlId> = container.z_order().to_vec();
    let mut children: Vec<ControlId> = container.children().to_vec();
    z.sort();
    children.sort();
    assert_eq!(z, children, "z-order must be a permutation of the children");
    for (index, &child) in container.z_order().iter().enumerate() {
        assert_eq!(container.z_index(child), Some(index));
    }
}

#[test]
fn test_new_children_go_on_top() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = ui.create(Panel::new());
    let b = ui.create(Panel::new());
    ui.add(root, a);
    ui.add(root, b);

    let container = ui.container(root).unwrap();
    assert_eq!(container.children(), &[a, b]);
    assert_eq!(container.z_order(), &[b, a]);
}

#[test]
fn test_z_order_density_under_churn() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let ids: Vec<ControlId> = (0..6).map(|_| ui.create(Panel::new())).collect();
    for &id in &ids {
        ui.add(root, id);
        assert_dense(&ui, root);
    }

    ui.set_child_z_order(root, ids[0], 0);
    assert_dense(&ui, root);
    assert_eq!(ui.container(root).unwrap().z_index(ids[0]), Some(0));

    ui.set_child_z_order(root, ids[0], 5);
    assert_dense(&ui, root);
    assert_eq!(ui.container(root).unwrap().z_index(ids[0]), Some(5));

    ui.remove_child(root, ids[3]);
    assert_dense(&ui, root);
    ui.set_child_z_order(root, ids[5], 2);
    assert_dense(&ui, root);
    ui.remove(ids[1]);
    assert_dense(&ui, root);
    assert_eq!(ui.container(root).unwrap().len(), 4);
}

#[test]
fn test_topmost_children_stay_above() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let tip = ui.create(Panel::new());
    ui.add(root, tip);
    ui.set_topmost(tip, true);

    let a = ui.create(Panel::new());
    let b = ui.create(Panel::new());
    ui.add(root, a);
    ui.add(root, b);
    // New children land below the topmost run.
    assert_eq!(ui.container(root).unwrap().z_order(), &[tip, b, a]);

    // Asking for index 0 lands right after the topmost run.
    ui.set_child_z_order(root, a, 0);
    assert_eq!(ui.container(root).unwrap().z_order(), &[tip, a, b]);

    ui.set_topmost(tip, false);
    assert_dense(&ui, root);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_z_order_out_of_range_panics() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = ui.create(Panel::new());
    ui.add(root, a);
    ui.set_child_z_order(root, a, 1);
}

#[test]
#[should_panic(expected = "already has parent")]
fn test_double_parenting_panics() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let group = ui.create_container(Panel::new(), AbsoluteLayout::new());
    let a = ui.create(Panel::new());
    ui.add(root, group);
    ui.add(root, a);
    ui.add(group, a);
}

#[test]
#[should_panic(expected = "would create a cycle")]
fn test_cycle_panics() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let outer = ui.create_container(Panel::new(), AbsoluteLayout::new());
    let inner = ui.create_container(Panel::new(), AbsoluteLayout::new());
    ui.add(outer, inner);
    ui.add(inner, outer);
}

#[test]
#[should_panic(expected = "is not a container")]
fn test_add_to_leaf_panics() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let leaf = ui.create(Panel::new());
    let other = ui.create(Panel::new());
    ui.add(leaf, other);
}

#[test]
fn test_detach_propagates_and_clears_references() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();

    let x = ui.create_container(Recorder::new("x", &log), AbsoluteLayout::new());
    ui.add(root, x);
    ui.set_bounds(x, Rect::new(0.0, 0.0, 50.0, 50.0));
    let y = ui.create(Recorder::new("y", &log));
    ui.state_mut(y).set_focusable(true);
    ui.add(x, y);
    ui.set_bounds(y, Rect::new(0.0, 0.0, 20.0, 20.0));
    settle(&mut ui, &mut surface);

    ui.handle_input(InputEvent::PointerMove(Point::new(5.0, 5.0)));
    ui.handle_input(InputEvent::PointerDown(Point::new(5.0, 5.0)));
    ui.capture_mouse(y);
    assert_eq!(ui.hovered(), Some(y));
    assert_eq!(ui.focused(), Some(y));
    assert_eq!(ui.captured(), Some(y));
    log.clear();

    assert!(ui.remove_child(root, x));
    assert_eq!(log.count("x:detached"), 1);
    assert_eq!(log.count("y:detached"), 1);
    assert_eq!(ui.hovered(), None);
    assert_eq!(ui.focused(), None);
    assert_eq!(ui.captured(), None);
    assert_eq!(ui.parent(x), None);
    assert_eq!(ui.parent(y), Some(x));
    assert!(!ui.is_attached(y));

    // Removing again is a no-op.
    assert!(!ui.remove_child(root, x));
    assert_eq!(log.count("x:detached"), 1);
}

#[test]
fn test_reattach_after_detach() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let group = ui.create_container(Panel::new(), AbsoluteLayout::new());
    let a = ui.create(Panel::new());
    ui.add(root, a);
    ui.remove(a);
    ui.add(root, group);
    ui.add(group, a);
    assert_eq!(ui.parent(a), Some(group));
    assert!(ui.is_attached(a));
}

#[test]
fn test_remove_all() {
    let log = EventLog::new();
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    for name in ["a", "b", "c"] {
        let id = ui.create(Recorder::new(name, &log));
        ui.add(root, id);
    }
    ui.remove_all(root);
    assert!(ui.children(root).is_empty());
    assert_eq!(log.entries().len(), 3);
}

#[test]
fn test_enablement_is_hierarchical() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = ui.create_container(Panel::new(), AbsoluteLayout::new());
    let b = ui.create_container(Panel::new(), AbsoluteLayout::new());
    let c = ui.create(Panel::new());
    ui.add(root, a);
    ui.add(a, b);
    ui.add(b, c);
    assert!(ui.is_enabled(c));

    ui.set_enabled(a, false);
    assert!(!ui.is_enabled(c));
    assert!(ui.state(c).is_self_enabled());

    ui.set_enabled(a, true);
    assert!(ui.is_enabled(c));
}

#[test]
fn test_destroy_frees_subtree() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let group = ui.create_container(Panel::new(), AbsoluteLayout::new());
    let a = ui.create(Panel::new());
    ui.add(group, a);
    let before = ui.control_count();

    ui.destroy(group);
    assert_eq!(ui.control_count(), before - 2);
    assert!(!ui.contains(group));
    assert!(!ui.contains(a));

    // Stale handles never alias new controls.
    let fresh = ui.create(Panel::new());
    assert_ne!(fresh, a);
    assert_ne!(fresh, group);
}

#[test]
#[should_panic(expected = "still attached")]
fn test_destroy_attached_panics() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = ui.create(Panel::new());
    ui.add(root, a);
    ui.destroy(a);
}

#[test]
fn test_coordinates_follow_parent_chain() {
    let log = EventLog::new();
    let (mut ui, _) = absolute_root(200.0, 200.0);
    let root = ui.root();
    let group = ui.create_container(Panel::new(), AbsoluteLayout::new());
    ui.add(root, group);
    ui.set_bounds(group, Rect::new(10.0, 20.0, 100.0, 100.0));
    let leaf = place(&mut ui, group, Recorder::new("leaf", &log), Rect::new(5.0, 5.0, 10.0, 10.0));

    assert_eq!(ui.local_to_absolute(leaf, Point::new(1.0, 1.0)), Point::new(16.0, 26.0));
    assert_eq!(ui.absolute_to_local(leaf, Point::new(16.0, 26.0)), Point::new(1.0, 1.0));

    ui.set_force_padding(group, Point::new(2.0, 3.0));
    assert_eq!(ui.local_to_absolute(leaf, Point::ZERO), Point::new(17.0, 28.0));
    assert_eq!(ui.find_control(Point::new(18.0, 29.0), false), Some(leaf));

    let detached = ui.create(Panel::new());
    assert_eq!(ui.local_to_absolute(detached, Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
}

#[test]
fn test_set_bounds_is_idempotent() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = place(&mut ui, root, Recorder::new("a", &log), Rect::new(0.0, 0.0, 10.0, 10.0));
    settle(&mut ui, &mut surface);
    log.clear();

    ui.set_bounds(a, Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(log.entries().is_empty());
    assert!(!ui.needs_layout());

    ui.set_bounds(a, Rect::new(1.0, 0.0, 10.0, 10.0));
    assert_eq!(log.take(), vec!["a:bounds"]);
    assert!(ui.needs_layout());
}

#[test]
#[should_panic(expected = "invalid bounds")]
fn test_non_finite_bounds_panic() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let a = ui.create(Panel::new());
    ui.set_bounds(a, Rect::new(0.0, 0.0, f32::NAN, 1.0));
}

#[test]
#[should_panic(expected = "must stay at the origin")]
fn test_root_cannot_move() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    ui.set_bounds(root, Rect::new(5.0, 0.0, 100.0, 100.0));
}

#[test]
fn test_relayout_ignored_when_detached() {
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    settle(&mut ui, &mut surface);
    let a = ui.create(Panel::new());
    ui.relayout(a);
    ui.set_bounds(a, Rect::new(0.0, 0.0, 5.0, 5.0));
    assert!(!ui.needs_layout());
}

#[test]
fn test_find_id() {
    let (mut ui, _) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let group = ui.create_container(Panel::new(), AbsoluteLayout::new());
    let a = ui.create(Panel::new());
    ui.add(root, group);
    ui.add(group, a);
    ui.state_mut(a).set_id("ok-button");
    ui.state_mut(group).set_id("dialog");

    assert_eq!(ui.find_id("ok-button"), Some(a));
    assert_eq!(ui.find_id("dialog"), Some(group));
    assert_eq!(ui.find_id_in(group, "ok-button"), Some(a));
    assert_eq!(ui.find_id("missing"), None);
}
