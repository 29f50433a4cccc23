//! Benchmarks for the closure search and capture sweep.
//!
//! The hot path is the final connection of a long chain: it runs the
//! depth-first closure search over every window and, once the loop closes,
//! the scanline capture over the enclosed area.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use kropki::GameEngine;

/// Perimeter of the square (1,1)-(10,10), walked clockwise.
fn ring_coords() -> Vec<(i32, i32)> {
    let mut ring = Vec::new();
    for x in 1..=10 {
        ring.push((x, 1));
    }
    for y in 2..=10 {
        ring.push((10, y));
    }
    for x in (1..10).rev() {
        ring.push((x, 10));
    }
    for y in (2..10).rev() {
        ring.push((1, y));
    }
    ring
}

/// Build a game where player 0 owns a full ring of dots with every segment
/// but the closing one already pending.
fn ring_game() -> (GameEngine, ((i32, i32), (i32, i32))) {
    let ring = ring_coords();
    let mut engine = GameEngine::new();
    assert!(engine.new_game(20, 20, 100));

    // Opponent dots inside the ring, to give the capture sweep real work.
    let mut fillers = (0..=20).map(|y| (13, y)).chain((0..=20).map(|y| (15, y)));

    for (i, &(x, y)) in ring.iter().enumerate() {
        assert!(engine.place_dot(x, y), "ring dot {i}");
        engine.end_turn();
        let (fx, fy) = if i < 8 {
            // First few opponent dots land strictly inside the ring.
            (2 + (i as i32 % 4) * 2, 2 + (i as i32 / 4) * 2)
        } else {
            fillers.next().expect("filler coordinates")
        };
        assert!(engine.place_dot(fx, fy), "filler dot {i}");
        engine.end_turn();
    }

    // Last turn: build the whole pending chain except the closing edge.
    assert!(engine.place_dot(19, 0));
    for pair in ring.windows(2) {
        let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
        assert!(engine.connect_dots(x1, y1, x2, y2));
    }

    let closing = (ring[ring.len() - 1], ring[0]);
    (engine, closing)
}

fn bench_closing_connection(c: &mut Criterion) {
    let (engine, ((x1, y1), (x2, y2))) = ring_game();

    c.bench_function("close_ring_and_capture", |b| {
        b.iter_batched(
            || engine.clone(),
            |mut engine| {
                let accepted = engine.connect_dots(x1, y1, x2, y2);
                black_box((accepted, engine))
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_open_connection(c: &mut Criterion) {
    // A single mid-ring connection: every completion attempt fails, which is
    // the common case during play.
    let ring = ring_coords();
    let mut engine = GameEngine::new();
    assert!(engine.new_game(20, 20, 100));
    for (i, &(x, y)) in ring.iter().enumerate() {
        assert!(engine.place_dot(x, y), "ring dot {i}");
        engine.end_turn();
        assert!(engine.place_dot(13 + i as i32 % 2, i as i32 / 2), "filler {i}");
        engine.end_turn();
    }
    assert!(engine.place_dot(19, 0));

    c.bench_function("open_connection", |b| {
        b.iter_batched(
            || engine.clone(),
            |mut engine| {
                let accepted = engine.connect_dots(1, 1, 2, 1);
                black_box((accepted, engine))
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_full_scripted_game(c: &mut Criterion) {
    c.bench_function("full_ring_game", |b| {
        b.iter(|| {
            let (mut engine, ((x1, y1), (x2, y2))) = ring_game();
            let accepted = engine.connect_dots(x1, y1, x2, y2);
            black_box((accepted, engine))
        });
    });
}

criterion_group!(
    benches,
    bench_closing_connection,
    bench_open_connection,
    bench_full_scripted_game
);
criterion_main!(benches);
