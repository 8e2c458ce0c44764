use std::cell::Cell;
use std::rc::Rc;

use sapling_ui_graphics::Size;
use sapling_ui_layout::Constraints;

use crate::fixtures::*;
use crate::{ElementTree, Invariant, TreeError, Widget};

fn two_counters(drops: &Rc<Cell<usize>>) -> Widget {
    Widget::structural(Row(vec![
        Counter::widget(0, drops),
        Counter::widget(0, drops),
    ]))
}

#[test]
fn only_dirty_elements_are_rebuilt() {
    let drops = Rc::new(Cell::new(0));
    let mut tree = ElementTree::new();
    let root = tree.mount(two_counters(&drops)).expect("mount");
    let (first, second) = (tree.children(root)[0], tree.children(root)[1]);
    assert_eq!(tree.rebuild_dirty().expect("clean rebuild"), 0);

    tree.set_state::<CounterState, _>(first, |state| state.count += 1)
        .expect("set state");
    assert!(tree.get(first).is_some_and(|e| e.is_dirty()));

    assert_eq!(tree.rebuild_dirty().expect("rebuild"), 1);
    assert_eq!(tree.children(root), &[first, second]);
    assert_eq!(tree.state::<CounterState>(first).map(|s| s.builds), Some(2));
    assert_eq!(tree.state::<CounterState>(second).map(|s| s.builds), Some(1));
    assert!(!tree.get(first).is_some_and(|e| e.is_dirty()));
}

#[test]
fn rebuild_resyncs_the_subtree_under_the_dirty_element() {
    let drops = Rc::new(Cell::new(0));
    let mut tree = ElementTree::new();
    let root = tree.mount(Counter::widget(0, &drops)).expect("mount");
    let leaf = tree.children(root)[0];
    tree.layout(root, Constraints::UNBOUNDED).expect("layout");
    assert_eq!(tree.get(leaf).map(|e| e.size()), Some(Size::new(10.0, 10.0)));

    tree.set_state::<CounterState, _>(root, |state| state.count = 2)
        .expect("set state");
    tree.rebuild_dirty().expect("rebuild");
    let size = tree.layout(root, Constraints::UNBOUNDED).expect("layout");

    assert_eq!(tree.children(root), &[leaf]);
    assert_eq!(size, Size::new(30.0, 10.0));
}

#[test]
fn fresh_tree_is_stale_until_painted() {
    let drops = Rc::new(Cell::new(0));
    let mut tree = ElementTree::new();
    let root = tree.mount(two_counters(&drops)).expect("mount");

    let report = tree.propagate_rendered();
    assert!(!report.is_rendered(root));
    assert_eq!(report.stale_count(), 3);

    tree.paint(&mut FillLog::default());
    let report = tree.propagate_rendered();
    assert!(report.is_clean());
    assert_eq!(tree.get(root).and_then(|e| e.rendered_flag()), Some(true));
}

#[test]
fn state_change_marks_element_and_ancestors_stale_for_one_frame() {
    let drops = Rc::new(Cell::new(0));
    let mut tree = ElementTree::new();
    let row = Widget::structural(Row(vec![two_counters(&drops), fixed(4.0, 4.0)]));
    let root = tree.mount(Widget::builder(Wrap(row))).expect("mount");
    tree.paint(&mut FillLog::default());
    assert!(tree.propagate_rendered().is_clean());

    let outer = tree.children(root)[0];
    let inner = tree.children(outer)[0];
    let leaf = tree.children(outer)[1];
    let (dirty, sibling) = (tree.children(inner)[0], tree.children(inner)[1]);
    tree.set_state::<CounterState, _>(dirty, |state| state.count = 1)
        .expect("set state");
    tree.rebuild_dirty().expect("rebuild");

    let report = tree.propagate_rendered();
    for id in [dirty, inner, outer, root] {
        assert!(!report.is_rendered(id), "{id:?} should be stale");
    }
    assert!(report.is_rendered(sibling));
    assert!(report.is_rendered(leaf));
    assert_eq!(tree.get(outer).and_then(|e| e.rendered_flag()), Some(false));

    tree.paint(&mut FillLog::default());
    assert!(tree.propagate_rendered().is_clean());
}

#[test]
fn set_state_reports_misuse() {
    let drops = Rc::new(Cell::new(0));
    let mut tree = ElementTree::new();
    let root = tree.mount(two_counters(&drops)).expect("mount");
    let counter = tree.children(root)[0];

    assert!(matches!(
        tree.set_state::<CounterState, _>(root, |_| ()),
        Err(TreeError::NotStateful { .. })
    ));
    assert!(matches!(
        tree.set_state::<ListenerState, _>(counter, |_| ()),
        Err(TreeError::StateTypeMismatch { .. })
    ));

    tree.mount(fixed(1.0, 1.0)).expect("remount");
    assert!(matches!(
        tree.set_state::<CounterState, _>(counter, |_| ()),
        Err(TreeError::Missing { .. })
    ));
}

#[test]
fn invariant_violations_are_fatal() {
    let drops = Rc::new(Cell::new(0));
    let mut tree = ElementTree::new();
    let root = tree.mount(Counter::widget(0, &drops)).expect("mount");

    let violation = TreeError::from(Invariant::RebuildChangedIdentity { element: root });
    assert!(violation.is_fatal());
    assert!(violation.to_string().contains("different element"));
    assert!(!TreeError::NotStateful { id: root }.is_fatal());
}
