mod common;

use std::time::Duration;

use common::{EventLog, Recorder, absolute_root, place, settle};
use palisade_test_utils::SurfaceCall;
use palisade_ui::prelude::*;

const RED: Color = Color::rgb(1.0, 0.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_clean_tree_draws_nothing() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = place(&mut ui, root, Recorder::new("a", &log), Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(settle(&mut ui, &mut surface));
    surface.clear_calls();
    log.clear();

    assert!(!settle(&mut ui, &mut surface));
    assert_eq!(surface.call_count(), 0);
    assert!(log.entries().is_empty());

    ui.redraw(a);
    assert!(ui.any_dirty());
    assert!(settle(&mut ui, &mut surface));
    assert!(!ui.any_dirty());
    assert_eq!(log.take(), vec!["a:draw"]);
}

#[test]
fn test_full_repaint_is_balanced() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let group = ui.create_container(Panel::new(), AbsoluteLayout::new());
    ui.add(root, group);
    ui.set_bounds(group, Rect::new(10.0, 10.0, 50.0, 50.0));
    place(&mut ui, group, Recorder::new("a", &log), Rect::new(0.0, 0.0, 10.0, 10.0));
    settle(&mut ui, &mut surface);

    let calls = surface.calls();
    assert_eq!(calls[0], SurfaceCall::Clear(Rect::new(0.0, 0.0, 100.0, 100.0)));
    assert_eq!(
        calls[1],
        SurfaceCall::StrokeRect {
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            line_width: 1.0,
            color: Color::GRAY,
        }
    );
    assert!(calls.contains(&SurfaceCall::Clip(Rect::new(0.0, 0.0, 50.0, 50.0))));
    assert!(surface.is_balanced());
}

#[test]
fn test_outline_disabled() {
    let mut surface = palisade_test_utils::MockSurface::new(40.0, 40.0);
    let config = RootConfig::default().with_outline(Color::GRAY, 0.0);
    let mut ui = RootPanel::with_config(AbsoluteLayout::new(), config);
    ui.tick(Duration::ZERO, &mut surface);
    assert_eq!(
        surface.count(|call| matches!(call, SurfaceCall::StrokeRect { .. })),
        0
    );
}

#[test]
fn test_children_paint_bottom_up() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let under = place(&mut ui, root, Recorder::new("under", &log).fill(RED), Rect::new(0.0, 0.0, 40.0, 40.0));
    place(&mut ui, root, Recorder::new("over", &log).fill(BLUE), Rect::new(20.0, 20.0, 40.0, 40.0));
    log.clear();
    settle(&mut ui, &mut surface);

    assert_eq!(
        surface.fills(),
        vec![
            (Rect::new(0.0, 0.0, 40.0, 40.0), RED),
            (Rect::new(20.0, 20.0, 40.0, 40.0), BLUE),
        ]
    );
    assert_eq!(log.take(), vec!["under:draw", "over:draw"]);

    ui.set_child_z_order(root, under, 0);
    surface.clear_calls();
    settle(&mut ui, &mut surface);
    assert_eq!(log.take(), vec!["over:draw", "under:draw"]);
}

#[test]
fn test_force_padding_shifts_children() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let group = ui.create_container(Panel::new(), AbsoluteLayout::new());
    ui.add(root, group);
    ui.set_bounds(group, Rect::new(10.0, 20.0, 50.0, 50.0));
    place(&mut ui, group, Recorder::new("a", &log).fill(RED), Rect::new(5.0, 5.0, 10.0, 10.0));
    ui.set_force_padding(group, Point::new(-3.0, 2.0));
    settle(&mut ui, &mut surface);

    assert_eq!(surface.fills_with(RED), vec![Rect::new(12.0, 27.0, 10.0, 10.0)]);
}

#[test]
fn test_borders_are_painted() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = place(&mut ui, root, Recorder::new("a", &log), Rect::new(10.0, 10.0, 20.0, 20.0));
    ui.state_mut(a).set_borders(Insets::uniform(2.0));
    ui.state_mut(a).set_border_color(GREEN);
    settle(&mut ui, &mut surface);

    let strips = surface.fills_with(GREEN);
    assert_eq!(strips.len(), 4);
    assert!(strips.contains(&Rect::new(10.0, 10.0, 20.0, 2.0)));
}

#[test]
fn test_hidden_controls_are_not_drawn() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = place(&mut ui, root, Recorder::new("a", &log), Rect::new(0.0, 0.0, 10.0, 10.0));
    ui.set_visible(a, false);
    settle(&mut ui, &mut surface);
    assert_eq!(log.count("a:draw"), 0);

    // Dirt on a hidden control does not trigger a frame.
    ui.redraw(a);
    assert!(!settle(&mut ui, &mut surface));
}

#[test]
fn test_tooltip_shows_after_delay() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = place(&mut ui, root, Recorder::new("a", &log), Rect::new(0.0, 0.0, 50.0, 50.0));
    let tip = ui.create(Recorder::new("tip", &log).best(30.0, 10.0));
    ui.set_tooltip(a, Some(tip), None);
    settle(&mut ui, &mut surface);

    ui.handle_input(InputEvent::PointerMove(Point::new(10.0, 10.0)));
    ui.tick(ms(200), &mut surface);
    assert_eq!(ui.shown_tooltip(), None);

    ui.tick(ms(100), &mut surface);
    assert_eq!(ui.shown_tooltip(), Some(tip));
    assert!(ui.is_floating(tip));
    assert_eq!(ui.bounds(tip), Rect::new(10.0, 26.0, 30.0, 10.0));

    // The tooltip is invisible to hit-testing, so resting on it keeps hover.
    ui.handle_input(InputEvent::PointerMove(Point::new(15.0, 30.0)));
    assert_eq!(ui.hovered(), Some(a));
    assert_eq!(ui.shown_tooltip(), Some(tip));

    log.clear();
    ui.handle_input(InputEvent::PointerMove(Point::new(80.0, 80.0)));
    assert_eq!(ui.shown_tooltip(), None);
    assert!(!ui.is_floating(tip));
    assert_eq!(ui.parent(tip), None);
    assert_eq!(log.count("tip:detached"), 1);
}

#[test]
fn test_removing_owner_cancels_pending_tooltip() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = place(&mut ui, root, Recorder::new("a", &log), Rect::new(0.0, 0.0, 50.0, 50.0));
    let tip = ui.create(Recorder::new("tip", &log).best(30.0, 10.0));
    ui.set_tooltip(a, Some(tip), None);
    settle(&mut ui, &mut surface);

    ui.handle_input(InputEvent::PointerMove(Point::new(10.0, 10.0)));
    ui.tick(ms(100), &mut surface);
    assert!(ui.remove(a));
    assert_ne!(ui.hovered(), Some(a));

    ui.tick(ms(400), &mut surface);
    assert_eq!(ui.shown_tooltip(), None);
    assert!(!ui.is_floating(tip));
}

#[test]
fn test_removing_owner_hides_shown_tooltip() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = place(&mut ui, root, Recorder::new("a", &log), Rect::new(0.0, 0.0, 50.0, 50.0));
    let tip = ui.create(Recorder::new("tip", &log).best(30.0, 10.0));
    ui.set_tooltip(a, Some(tip), None);
    settle(&mut ui, &mut surface);

    ui.handle_input(InputEvent::PointerMove(Point::new(10.0, 10.0)));
    ui.tick(ms(300), &mut surface);
    assert_eq!(ui.shown_tooltip(), Some(tip));
    log.clear();

    assert!(ui.remove(a));
    assert_eq!(ui.shown_tooltip(), None);
    assert!(!ui.is_floating(tip));
    assert_eq!(log.count("tip:detached"), 1);
    assert_eq!(log.count("a:detached"), 1);
}

#[test]
fn test_moving_rearms_tooltip_timer() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = place(&mut ui, root, Recorder::new("a", &log), Rect::new(0.0, 0.0, 50.0, 50.0));
    let tip = ui.create(Recorder::new("tip", &log).best(30.0, 10.0));
    ui.set_tooltip(a, Some(tip), Some(Point::new(60.0, 5.0)));
    settle(&mut ui, &mut surface);

    ui.handle_input(InputEvent::PointerMove(Point::new(10.0, 10.0)));
    ui.tick(ms(250), &mut surface);
    ui.handle_input(InputEvent::PointerMove(Point::new(12.0, 10.0)));
    ui.tick(ms(250), &mut surface);
    assert_eq!(ui.shown_tooltip(), None);

    ui.tick(ms(50), &mut surface);
    assert_eq!(ui.shown_tooltip(), Some(tip));
    assert_eq!(ui.bounds(tip).position(), Point::new(60.0, 5.0));
}

#[test]
fn test_click_hides_tooltip() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = place(&mut ui, root, Recorder::new("a", &log), Rect::new(0.0, 0.0, 50.0, 50.0));
    let tip = ui.create(Recorder::new("tip", &log).best(30.0, 10.0));
    ui.set_tooltip(a, Some(tip), None);
    settle(&mut ui, &mut surface);

    ui.handle_input(InputEvent::PointerMove(Point::new(10.0, 10.0)));
    ui.tick(ms(300), &mut surface);
    assert_eq!(ui.shown_tooltip(), Some(tip));

    ui.handle_input(InputEvent::PointerDown(Point::new(10.0, 10.0)));
    assert_eq!(ui.shown_tooltip(), None);
    assert_eq!(log.count("a:down"), 1);

    // The timer stays disarmed until the pointer moves again.
    ui.tick(ms(1000), &mut surface);
    assert_eq!(ui.shown_tooltip(), None);
}

#[test]
fn test_tooltip_clamped_to_surface() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    let a = place(&mut ui, root, Recorder::new("a", &log), Rect::new(0.0, 0.0, 100.0, 100.0));
    let tip = ui.create(Recorder::new("tip", &log).best(30.0, 10.0));
    ui.set_tooltip(a, Some(tip), None);
    settle(&mut ui, &mut surface);

    ui.handle_input(InputEvent::PointerMove(Point::new(90.0, 90.0)));
    ui.tick(ms(300), &mut surface);
    assert_eq!(ui.bounds(tip), Rect::new(70.0, 90.0, 30.0, 10.0));
}

#[test]
fn test_floating_controls_sit_above_tree() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let root = ui.root();
    place(&mut ui, root, Recorder::new("base", &log).fill(RED), Rect::new(0.0, 0.0, 100.0, 100.0));

    let first = ui.create(Recorder::new("first", &log).fill(BLUE));
    ui.set_bounds(first, Rect::new(0.0, 0.0, 40.0, 40.0));
    ui.add_floating(first, false);
    let second = ui.create(Recorder::new("second", &log).fill(GREEN));
    ui.set_bounds(second, Rect::new(20.0, 20.0, 40.0, 40.0));
    ui.add_floating(second, false);
    settle(&mut ui, &mut surface);

    assert_eq!(ui.find_control(Point::new(30.0, 30.0), false), Some(second));
    assert_eq!(ui.find_control(Point::new(10.0, 10.0), false), Some(first));
    assert_eq!(ui.floating().collect::<Vec<_>>(), vec![first, second]);
    let colors: Vec<Color> = surface.fills().into_iter().map(|(_, c)| c).collect();
    assert_eq!(colors, vec![RED, BLUE, GREEN]);
    // Unmanaged floating controls keep their size.
    assert_eq!(ui.bounds(first), Rect::new(0.0, 0.0, 40.0, 40.0));

    assert!(ui.remove_child(root, second));
    assert!(!ui.is_floating(second));
    assert_eq!(ui.find_control(Point::new(50.0, 50.0), false), Some(ui.children(root)[0]));
}

#[test]
fn test_managed_floating_sized_to_best() {
    let log = EventLog::new();
    let (mut ui, mut surface) = absolute_root(100.0, 100.0);
    let menu = ui.create(Recorder::new("menu", &log).best(25.0, 35.0));
    ui.set_position(menu, Point::new(5.0, 5.0));
    ui.add_floating(menu, true);
    settle(&mut ui, &mut surface);
    assert_eq!(ui.bounds(menu), Rect::new(5.0, 5.0, 25.0, 35.0));
    assert!(ui.is_attached(menu));
}

#[test]
fn test_layout_runs_only_when_requested() {
    let log = EventLog::new();
    let mut surface = palisade_test_utils::MockSurface::new(100.0, 100.0);
    let mut ui = RootPanel::new(LinearLayout::vertical());
    let root = ui.root();
    let a = ui.create(Recorder::new("a", &log).best(10.0, 10.0));
    ui.add(root, a);
    assert!(ui.needs_layout());
    settle(&mut ui, &mut surface);
    assert!(!ui.needs_layout());
    assert_eq!(ui.bounds(a), Rect::new(0.0, 0.0, 10.0, 10.0));

    ui.relayout(a);
    assert!(ui.needs_layout());
    settle(&mut ui, &mut surface);
    assert!(!ui.needs_layout());
}
