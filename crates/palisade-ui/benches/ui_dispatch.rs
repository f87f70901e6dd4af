//! Hit-testing and pointer dispatch over a populated tree.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use palisade_ui::prelude::*;

const COLUMNS: usize = 32;
const ROWS: usize = 24;

fn populated() -> RootPanel {
    let mut ui = RootPanel::new(GridLayout::new(COLUMNS));
    let root = ui.root();
    for _ in 0..COLUMNS * ROWS {
        let cell = ui.create_container(Panel::new(), AbsoluteLayout::new());
        ui.add(root, cell);
        let inner = ui.create(Panel::new());
        ui.add(cell, inner);
        ui.set_bounds(inner, Rect::new(2.0, 2.0, 16.0, 16.0));
    }
    ui.resize(Dimension::new(COLUMNS as f32 * 20.0, ROWS as f32 * 20.0));
    ui.do_layout();
    ui
}

fn bench_find_control(c: &mut Criterion) {
    let ui = populated();
    c.bench_function("find_control", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for y in (0..ROWS * 20).step_by(7) {
                for x in (0..COLUMNS * 20).step_by(7) {
                    let point = Point::new(x as f32, y as f32);
                    if ui.find_control(point, false).is_some() {
                        hits += 1;
                    }
                }
            }
            black_box(hits)
        });
    });
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let mut ui = populated();
    c.bench_function("pointer_sweep", |b| {
        b.iter(|| {
            for x in (0..COLUMNS * 20).step_by(3) {
                let point = Point::new(x as f32, 100.0);
                black_box(ui.handle_input(InputEvent::PointerMove(point)));
            }
        });
    });
}

criterion_group!(benches, bench_find_control, bench_pointer_sweep);
criterion_main!(benches);
