//! Benchmarks for popup placement.
//!
//! Run with: cargo bench -p popover-position

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use popover_position::{
    Alignment, EdgeAlignment, LayoutDirection, Offset, PopupPositioner, PositionProvider, Rect,
    Size,
};
use std::hint::black_box;

// =============================================================================
// Test Data
// =============================================================================

/// Anchors spread across a 4K screen, some larger than the popup, some smaller.
fn anchors(count: usize) -> Vec<Rect> {
    (0..count as i32)
        .map(|i| {
            let x = (i * 37) % 3800;
            let y = (i * 53) % 2100;
            Rect::new(x, y, x + 20 + i % 300, y + 10 + i % 60)
        })
        .collect()
}

fn positioners() -> Vec<(&'static str, PopupPositioner)> {
    vec![
        (
            "aligned_center",
            PopupPositioner::aligned(Alignment::Center, Offset::new(3, 4)),
        ),
        (
            "aligned_bottom_end",
            PopupPositioner::aligned(Alignment::BottomEnd, Offset::ZERO),
        ),
        (
            "dropdown_start",
            PopupPositioner::dropdown(EdgeAlignment::Start, Offset::new(0, 2)),
        ),
        (
            "dropdown_end",
            PopupPositioner::dropdown(EdgeAlignment::End, Offset::ZERO),
        ),
    ]
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_calculate_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("position/calculate");
    let anchors = anchors(1024);
    let popup = Size::new(180, 90);

    for (name, positioner) in positioners() {
        for direction in [LayoutDirection::LeftToRight, LayoutDirection::RightToLeft] {
            group.bench_with_input(
                BenchmarkId::new(name, direction),
                &positioner,
                |b, positioner| {
                    b.iter(|| {
                        for anchor in &anchors {
                            black_box(positioner.calculate_position(
                                black_box(*anchor),
                                direction,
                                popup,
                            ));
                        }
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_position);
criterion_main!(benches);
