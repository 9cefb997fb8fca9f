//! Benchmarks for the split solver and drag machine hot paths.
//!
//! Run with: cargo bench -p sashpane

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sashpane::{
    PaneVisibility, Size, SplitAxis, SplitConstraints, SplitDragMachine, StateCell, solve,
};
use std::hint::black_box;

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("split/solve");
    let constraints = SplitConstraints::new()
        .min_primary(0.2)
        .min_secondary(0.15)
        .drag_to_hide_primary(true);

    for visibility in [
        PaneVisibility::Both,
        PaneVisibility::Primary,
        PaneVisibility::Secondary,
    ] {
        group.bench_with_input(
            BenchmarkId::new("horizontal", format!("{visibility:?}")),
            &visibility,
            |b, &visibility| {
                b.iter(|| {
                    black_box(solve(
                        Size::new(1440.0, 900.0),
                        SplitAxis::Horizontal,
                        black_box(0.37),
                        visibility,
                        &constraints,
                    ))
                })
            },
        );
    }

    group.finish();
}

fn bench_clamp(c: &mut Criterion) {
    let constraints = SplitConstraints::new().min_primary(0.2).min_secondary(0.2);
    c.bench_function("split/clamp_position", |b| {
        b.iter(|| black_box(constraints.clamp_position(black_box(0.07))))
    });
}

fn bench_drag_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("split/drag_stream");
    let constraints = SplitConstraints::new()
        .min_primary(0.2)
        .drag_to_hide_primary(true);

    for moves in [8usize, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            b.iter(|| {
                let mut machine = SplitDragMachine::new(constraints);
                let mut position = StateCell::new(0.5_f32);
                let mut visibility = StateCell::new(PaneVisibility::Both);
                machine.on_press();
                for i in 0..moves {
                    let delta = if i % 2 == 0 { 6.0 } else { -4.0 };
                    black_box(machine.on_move(delta, 1280.0, &mut position));
                }
                black_box(machine.on_release(&mut position, &mut visibility))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve, bench_clamp, bench_drag_stream);
criterion_main!(benches);
