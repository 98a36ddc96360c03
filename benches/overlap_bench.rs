use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flat_collide::intersect::{segment_intersection, segment_rect_intersections};
use flat_collide::overlap::circle_penetration;
use flat_collide::sat::{rect_penetration, rect_segment_penetration, rect_triangle_penetration};
use flat_collide::{Circle, OrientedRect, Segment, Triangle, Vec2};
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

const POP: usize = 10_000;
const SIZE: f32 = 100.0;

fn random_point() -> Vec2 {
    let r = rand::random::<[f32; 2]>();
    Vec2::new(SIZE * r[0], SIZE * r[1])
}

fn random_rect() -> OrientedRect {
    let r = rand::random::<[f32; 3]>();
    OrientedRect::new(random_point(), 1.0 + 10.0 * r[0], 1.0 + 10.0 * r[1], TAU * r[2])
}

fn random_segment() -> Segment {
    let start = random_point();
    let end = start + Vec2::new(rand::random::<f32>() - 0.5, rand::random::<f32>() - 0.5) * 20.0;
    Segment::new(start, end)
}

fn random_triangle() -> Triangle {
    let a = random_point();
    let r = rand::random::<[f32; 4]>();
    Triangle::new(
        a,
        a + Vec2::new(r[0] * 10.0, 0.0),
        a + Vec2::new(r[1] * 10.0, r[2] * 10.0 + r[3]),
    )
}

fn random_circle() -> Circle {
    Circle::new(random_point(), 1.0 + 5.0 * rand::random::<f32>())
}

/// Calls `f` on pairs picked from `a` and `b` until `iter` calls were made.
#[inline(never)]
fn pairwise<A, B, R>(a: &[A], b: &[B], iter: u64, f: impl Fn(&A, &B) -> R) -> Duration {
    let start = Instant::now();
    for i in 0..iter as usize {
        black_box(f(&a[i % a.len()], &b[(i * 7 + 1) % b.len()]));
    }
    start.elapsed()
}

fn sat(c: &mut Criterion) {
    let mut g = c.benchmark_group("SAT");
    let rects: Vec<_> = (0..POP).map(|_| random_rect()).collect();
    let segments: Vec<_> = (0..POP).map(|_| random_segment()).collect();
    let triangles: Vec<_> = (0..POP).map(|_| random_triangle()).collect();

    g.bench_function("rect rect", |b| {
        b.iter_custom(|iter| pairwise(&rects, &rects, iter, rect_penetration))
    });
    g.bench_function("rect segment", |b| {
        b.iter_custom(|iter| pairwise(&rects, &segments, iter, rect_segment_penetration))
    });
    g.bench_function("rect triangle", |b| {
        b.iter_custom(|iter| pairwise(&rects, &triangles, iter, rect_triangle_penetration))
    });
    g.finish()
}

fn primitives(c: &mut Criterion) {
    let mut g = c.benchmark_group("Primitives");
    let rects: Vec<_> = (0..POP).map(|_| random_rect()).collect();
    let segments: Vec<_> = (0..POP).map(|_| random_segment()).collect();
    let circles: Vec<_> = (0..POP).map(|_| random_circle()).collect();

    g.bench_function("segment segment", |b| {
        b.iter_custom(|iter| pairwise(&segments, &segments, iter, segment_intersection))
    });
    g.bench_function("segment rect crossings", |b| {
        b.iter_custom(|iter| pairwise(&segments, &rects, iter, segment_rect_intersections))
    });
    g.bench_function("circle circle", |b| {
        b.iter_custom(|iter| pairwise(&circles, &circles, iter, circle_penetration))
    });
    g.finish()
}

criterion_group!(benches, sat, primitives);
criterion_main!(benches);
