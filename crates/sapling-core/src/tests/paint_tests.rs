use std::cell::Cell;
use std::rc::Rc;

use sapling_ui_graphics::{Color, Rect, Size};
use sapling_ui_layout::Constraints;

use crate::fixtures::*;
use crate::{ElementTree, Widget};

fn swatch(width: f32, height: f32) -> Widget {
    Widget::structural(Swatch(Size::new(width, height), Color::WHITE))
}

#[test]
fn render_receives_accumulated_offsets_in_tree_order() {
    let mut tree = ElementTree::new();
    let root = tree
        .mount(Widget::structural(Row(vec![
            swatch(5.0, 5.0),
            Widget::structural(Inset {
                inset: 10.0,
                child: Some(swatch(20.0, 20.0)),
            }),
        ])))
        .expect("mount");
    tree.layout(root, Constraints::UNBOUNDED).expect("layout");

    let mut surface = FillLog::default();
    tree.paint(&mut surface);

    assert_eq!(
        surface.0,
        vec![
            Rect {
                x: 0.0,
                y: 0.0,
                width: 5.0,
                height: 5.0
            },
            Rect {
                x: 15.0,
                y: 10.0,
                width: 20.0,
                height: 20.0
            },
        ]
    );
}

#[test]
fn painting_marks_stateful_elements_rendered() {
    let drops = Rc::new(Cell::new(0));
    let mut tree = ElementTree::new();
    let root = tree.mount(Counter::widget(0, &drops)).expect("mount");
    assert_eq!(tree.get(root).and_then(|e| e.rendered_flag()), Some(false));

    tree.paint(&mut FillLog::default());

    assert_eq!(tree.get(root).and_then(|e| e.rendered_flag()), Some(true));
}

#[test]
fn empty_tree_paints_nothing() {
    let mut tree = ElementTree::new();
    let mut surface = FillLog::default();
    tree.paint(&mut surface);
    assert!(surface.0.is_empty());
}
