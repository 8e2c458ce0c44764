use sapling_ui_graphics::{Offset, Size};
use sapling_ui_layout::Constraints;

use crate::fixtures::*;
use crate::{ElementId, ElementTree, Invariant, TreeError, Widget};

fn inset(inset: f32, child: Option<Widget>) -> Widget {
    Widget::structural(Inset { inset, child })
}

fn geometry(tree: &ElementTree, id: ElementId) -> (Size, Offset) {
    let element = tree.get(id).expect("element");
    (element.size(), element.offset())
}

#[test]
fn inset_around_fixed_leaf_under_unbounded_constraints() {
    let mut tree = ElementTree::new();
    let root = tree
        .mount(inset(10.0, Some(fixed(20.0, 20.0))))
        .expect("mount");

    let size = tree.layout(root, Constraints::UNBOUNDED).expect("layout");

    assert_eq!(size, Size::new(40.0, 40.0));
    let leaf = tree.children(root)[0];
    assert_eq!(
        geometry(&tree, leaf),
        (Size::new(20.0, 20.0), Offset::new(10.0, 10.0))
    );
}

#[test]
fn repeated_layout_with_same_constraints_is_stable() {
    let mut tree = ElementTree::new();
    let root = tree
        .mount(Widget::structural(Row(vec![
            inset(2.0, Some(fixed(5.0, 8.0))),
            fixed(3.0, 3.0),
        ])))
        .expect("mount");
    let constraints = Constraints::loose(Size::new(100.0, 50.0));

    tree.layout(root, constraints).expect("first layout");
    let first: Vec<_> = tree
        .dump(Some(root))
        .lines()
        .map(str::to_owned)
        .collect();
    tree.layout(root, constraints).expect("second layout");
    let second: Vec<_> = tree
        .dump(Some(root))
        .lines()
        .map(str::to_owned)
        .collect();

    assert_eq!(first, second);
    let children = tree.children(root).to_vec();
    assert_eq!(geometry(&tree, children[0]).1, Offset::ZERO);
    assert_eq!(
        geometry(&tree, children[1]),
        (Size::new(3.0, 3.0), Offset::new(9.0, 0.0))
    );
    assert_eq!(geometry(&tree, root).0, Size::new(12.0, 12.0));
}

#[test]
fn structural_widget_without_required_child_fails() {
    let mut tree = ElementTree::new();
    let root = tree.mount(inset(4.0, None)).expect("mount");

    let err = tree
        .layout(root, Constraints::UNBOUNDED)
        .expect_err("missing child");

    match err {
        TreeError::InvariantViolation(Invariant::MissingChild { kind }) => {
            assert!(kind.ends_with("Inset"), "unexpected kind {kind}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn wrappers_pass_constraints_through_and_adopt_child_size() {
    let mut tree = ElementTree::new();
    let root = tree
        .mount(Widget::builder(Wrap(fixed(10.0, 10.0))))
        .expect("mount");

    let size = tree
        .layout(root, Constraints::tight(Size::new(50.0, 30.0)))
        .expect("layout");

    assert_eq!(size, Size::new(50.0, 30.0));
    let leaf = tree.children(root)[0];
    assert_eq!(geometry(&tree, leaf), (size, Offset::ZERO));
}

#[test]
fn oversized_insets_saturate_instead_of_going_negative() {
    let mut tree = ElementTree::new();
    let root = tree
        .mount(inset(30.0, Some(fixed(20.0, 20.0))))
        .expect("mount");

    let size = tree
        .layout(root, Constraints::tight(Size::new(40.0, 40.0)))
        .expect("layout");

    assert_eq!(size, Size::new(40.0, 40.0));
    let leaf = tree.children(root)[0];
    assert_eq!(geometry(&tree, leaf), (Size::ZERO, Offset::new(30.0, 30.0)));
}

#[test]
fn layout_of_removed_element_is_an_error() {
    let mut tree = ElementTree::new();
    let old = tree.mount(fixed(1.0, 1.0)).expect("mount");
    tree.mount(Widget::structural(Spacer)).expect("remount");

    assert!(matches!(
        tree.layout(old, Constraints::UNBOUNDED),
        Err(TreeError::Missing { .. })
    ));
}
