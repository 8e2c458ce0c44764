use std::cell::RefCell;
use std::rc::Rc;

use sapling_foundation::{PointerEvent, ScrollDirection};
use sapling_ui_graphics::Point;
use sapling_ui_layout::Constraints;

use crate::fixtures::*;
use crate::{Dispatch, ElementId, ElementTree, Widget};

type Log = Rc<RefCell<Vec<&'static str>>>;

fn listener(name: &'static str, consume: bool, log: &Log, child: Widget) -> Widget {
    Widget::stateful(Listener {
        name,
        consume,
        log: log.clone(),
        child,
    })
}

fn scroll_at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::scroll(ScrollDirection::Down, 1.0, Point::new(x, y))
}

/// `outer(passive) > row > [inner(consumes) > leaf, passive > leaf]`, 20x10.
fn listener_tree(log: &Log) -> (ElementTree, ElementId) {
    let mut tree = ElementTree::new();
    let root = tree
        .mount(listener(
            "outer",
            false,
            log,
            Widget::structural(Row(vec![
                listener("inner", true, log, fixed(10.0, 10.0)),
                listener("passive", false, log, fixed(10.0, 10.0)),
            ])),
        ))
        .expect("mount");
    tree.layout(root, Constraints::UNBOUNDED).expect("layout");
    (tree, root)
}

#[test]
fn hit_test_returns_deepest_element_containing_point() {
    let mut tree = ElementTree::new();
    let root = tree
        .mount(Widget::structural(Inset {
            inset: 10.0,
            child: Some(fixed(20.0, 20.0)),
        }))
        .expect("mount");
    tree.layout(root, Constraints::UNBOUNDED).expect("layout");
    let leaf = tree.children(root)[0];

    assert_eq!(tree.hit_test(root, Point::new(5.0, 5.0)), Some(root));
    assert_eq!(tree.hit_test(root, Point::new(15.0, 15.0)), Some(leaf));
    assert_eq!(tree.hit_test(root, Point::new(30.0, 30.0)), Some(root));
    assert_eq!(tree.hit_test(root, Point::new(40.0, 1.0)), None);
    assert_eq!(tree.hit_test(root, Point::new(-0.5, 1.0)), None);
}

#[test]
fn overlapping_children_first_child_wins() {
    let mut tree = ElementTree::new();
    let root = tree
        .mount(Widget::structural(Stack(vec![
            fixed(10.0, 10.0),
            fixed(20.0, 20.0),
        ])))
        .expect("mount");
    tree.layout(root, Constraints::UNBOUNDED).expect("layout");
    let (top, bottom) = (tree.children(root)[0], tree.children(root)[1]);

    assert_eq!(tree.hit_test(root, Point::new(5.0, 5.0)), Some(top));
    assert_eq!(tree.hit_test(root, Point::new(15.0, 15.0)), Some(bottom));
}

#[test]
fn bounds_are_half_open_between_siblings() {
    let log = Log::default();
    let (tree, root) = listener_tree(&log);
    let row = tree.children(root)[0];
    let second = tree.children(row)[1];

    let hit = tree.hit_test(root, Point::new(10.0, 5.0)).expect("hit");
    assert_eq!(tree.ancestors(hit).nth(1), Some(second));
    assert_eq!(tree.hit_test(root, Point::new(20.0, 5.0)), None);
}

#[test]
fn bubbling_stops_at_first_handler_and_marks_it_dirty() {
    let log = Log::default();
    let (mut tree, root) = listener_tree(&log);
    let row = tree.children(root)[0];
    let inner = tree.children(row)[0];

    let outcome = tree.dispatch_pointer(&scroll_at(5.0, 5.0));

    assert_eq!(outcome, Dispatch::Handled(inner));
    assert_eq!(*log.borrow(), vec!["inner"]);
    assert!(tree.get(inner).is_some_and(|e| e.is_dirty()));
    assert_eq!(tree.state::<ListenerState>(inner).map(|s| s.seen), Some(1));
    assert_eq!(tree.rebuild_dirty().expect("rebuild"), 1);
}

#[test]
fn unhandled_event_visits_every_ancestor_then_drops() {
    let log = Log::default();
    let (mut tree, root) = listener_tree(&log);

    let outcome = tree.dispatch_pointer(&scroll_at(15.0, 5.0));

    assert_eq!(outcome, Dispatch::Dropped);
    assert_eq!(*log.borrow(), vec!["passive", "outer"]);
    assert!(!tree.get(root).is_some_and(|e| e.is_dirty()));
}

#[test]
fn events_outside_the_tree_are_missed() {
    let log = Log::default();
    let (mut tree, _root) = listener_tree(&log);

    assert_eq!(tree.dispatch_pointer(&scroll_at(5.0, 50.0)), Dispatch::Missed);
    assert!(log.borrow().is_empty());
}
