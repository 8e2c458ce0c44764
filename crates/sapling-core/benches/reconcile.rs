use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sapling_core::{Constraints, ElementTree, Size, Widget};
use sapling_ui::{Column, Label, Padding, SizedBox};
use sapling_ui_graphics::EdgeInsets;

const SECTION_COUNT: usize = 4;
const ROWS_PER_SECTION_SAMPLES: &[usize] = &[8, 32, 128];
const ROOT_SIZE: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

fn content(sections: usize, rows_per_section: usize) -> Widget {
    Column::new(
        (0..sections)
            .map(|section| {
                let mut rows: Vec<Widget> = vec![Label::new(format!("Section {section}")).into()];
                rows.extend((0..rows_per_section).map(|row| {
                    Padding::new(
                        EdgeInsets::symmetric(2.0, 4.0),
                        Column::new(vec![
                            Label::new(format!("Item {section}-{row}")).into(),
                            SizedBox::new(40.0, 8.0).into(),
                        ]),
                    )
                    .into()
                }));
                Column::new(rows).into()
            })
            .collect(),
    )
    .into()
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");
    for &rows in ROWS_PER_SECTION_SAMPLES {
        group.bench_with_input(BenchmarkId::new("mount", rows), &rows, |b, &rows| {
            b.iter(|| {
                let mut tree = ElementTree::new();
                black_box(tree.mount(content(SECTION_COUNT, rows)).expect("mount"));
            });
        });
        group.bench_with_input(BenchmarkId::new("reuse", rows), &rows, |b, &rows| {
            let mut tree = ElementTree::new();
            tree.mount(content(SECTION_COUNT, rows)).expect("mount");
            b.iter(|| black_box(tree.mount(content(SECTION_COUNT, rows)).expect("remount")));
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut tree = ElementTree::new();
    let root = tree.mount(content(SECTION_COUNT, 32)).expect("mount");
    c.bench_function("layout", |b| {
        b.iter(|| {
            black_box(
                tree.layout(root, Constraints::loose(ROOT_SIZE))
                    .expect("layout"),
            )
        })
    });
}

criterion_group!(benches, bench_reconcile, bench_layout);
criterion_main!(benches);
