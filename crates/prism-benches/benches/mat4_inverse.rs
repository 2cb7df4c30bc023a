// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Matrix inversion and determinant throughput.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prism_math::{Mat4, Quat, Vec3};
use std::hint::black_box;

/// Deterministic batch of well-conditioned translation · rotation · scale
/// matrices.
fn make_matrices(n: u16) -> Vec<Mat4> {
    (0..n)
        .map(|i| {
            let f = f32::from(i);
            let axis = Vec3::new(1.0 + f * 0.1, 2.0 - f * 0.05, 0.5 + f * 0.02);
            let rot = Quat::from_axis_angle(axis, f * 0.37).to_mat4();
            let s = 1.0 + f32::from(i % 4) * 0.25;
            Mat4::translation(f, -f * 0.5, 3.0)
                .multiply(&rot)
                .multiply(&Mat4::scale(s, s * 0.5, 2.0))
        })
        .collect()
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4_inverse");
    for &n in &[1_u16, 64, 1_024] {
        let mats = make_matrices(n);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("inverse", n), &mats, |b, mats| {
            b.iter(|| {
                for m in mats {
                    black_box(black_box(m).inverse());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("try_inverse", n), &mats, |b, mats| {
            b.iter(|| {
                for m in mats {
                    let _ = black_box(black_box(m).try_inverse());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("determinant", n), &mats, |b, mats| {
            b.iter(|| {
                for m in mats {
                    black_box(black_box(m).determinant());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_inverse);
criterion_main!(benches);
