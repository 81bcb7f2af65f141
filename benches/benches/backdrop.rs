// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kidicode_backdrop::{BackdropTiler, ScrollDirection, WrapMode};
use kurbo::Size;

const FRAME: f64 = 1.0 / 60.0;

fn scrolling_tiler(mode: WrapMode) -> BackdropTiler<()> {
    let mut tiler = BackdropTiler::new(());
    tiler.set_image(Some(()));
    tiler.layout(Size::new(480.0, 360.0));
    tiler.set_wrap_mode(mode);
    tiler.set_scroll(ScrollDirection::Right, 100.0);
    tiler.set_scroll(ScrollDirection::Up, 35.0);
    tiler
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("backdrop/advance");

    // One simulated minute of frames per iteration.
    let frames = 3_600_u64;
    group.throughput(Throughput::Elements(frames));

    for (name, mode) in [
        ("single_step", WrapMode::SingleStep),
        ("periodic", WrapMode::Periodic),
    ] {
        group.bench_function(BenchmarkId::new("frames", name), |b| {
            let mut tiler = scrolling_tiler(mode);
            b.iter(|| {
                for _ in 0..frames {
                    tiler.advance(black_box(FRAME));
                }
                black_box(tiler.tiles());
            });
        });
    }

    group.finish();
}

fn bench_long_pause(c: &mut Criterion) {
    let mut group = c.benchmark_group("backdrop/long_pause");

    // A backgrounded tab resuming after `secs` seconds in a single step.
    for secs in [1.0_f64, 60.0, 3_600.0] {
        group.bench_with_input(BenchmarkId::new("periodic", secs), &secs, |b, &secs| {
            let mut tiler = scrolling_tiler(WrapMode::Periodic);
            b.iter(|| {
                tiler.advance(black_box(secs));
                black_box(tiler.tiles());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance, bench_long_pause);
criterion_main!(benches);
