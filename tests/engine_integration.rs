//! End-to-end scenarios for the game engine.
//!
//! These drive full games through the public command surface and verify the
//! capture, barricade and turn-sequencing rules, checking engine invariants
//! along the way.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use kropki::{CAPTURE_POINTS, GameEngine, Stage, check_invariants};

/// Assert no invariant is violated, with context.
fn assert_clean(engine: &GameEngine, context: &str) {
    let violations = check_invariants(engine);
    assert!(violations.is_empty(), "{context}: {violations:?}");
}

#[test]
fn test_place_then_wrong_stage_place_fails() {
    // Scenario: a fresh 3x3 game, one dot placed.
    let mut engine = GameEngine::new();
    engine.new_game(3, 3, 5);

    assert!(engine.place_dot(1, 1));
    assert_eq!(engine.stage(), Stage::ConnectDots);

    // A second placement in the same turn is a wrong-stage move.
    assert!(!engine.place_dot(1, 2));
    assert_eq!(engine.stage(), Stage::ConnectDots);
    assert_clean(&engine, "after rejected placement");
}

#[test]
fn test_square_cycle_closes_and_finalizes() {
    // An interior unit square: the fourth connection wraps the pending chain
    // into a closed loop, leaving four permanent lines and no chains. (A
    // square touching the border would complete earlier as a pocket
    // barricade.)
    let mut engine = GameEngine::new();
    engine.new_game(5, 5, 20);

    let corners = [(2, 2), (3, 2), (3, 3), (2, 3)];
    for (i, &(x, y)) in corners.iter().enumerate() {
        assert!(engine.place_dot(x, y), "corner {i}");
        engine.end_turn();
        assert!(engine.place_dot(i as i32, 5), "filler {i}");
        engine.end_turn();
    }

    assert!(engine.place_dot(0, 0));
    assert!(engine.connect_dots(2, 2, 3, 2));
    assert!(engine.connect_dots(3, 2, 3, 3));
    assert!(engine.connect_dots(3, 3, 2, 3));
    assert!(engine.connect_dots(2, 3, 2, 2));

    assert_eq!(engine.lines(0).len(), 4);
    assert!(engine.chains().is_empty());
    // Nothing was inside: no points scored.
    assert_eq!(engine.player_scores(), &[0, 0]);
    assert_clean(&engine, "after closed square");
}

#[test]
fn test_enclosed_opponent_dot_is_captured_once() {
    // A diamond of player 0 dots around (2,2), where player 1 has a dot.
    let mut engine = GameEngine::new();
    engine.new_game(4, 4, 20);

    // Alternate placements: player 0 builds the diamond, player 1 puts one
    // dot in the middle and the rest out of the way.
    let p0 = [(2, 1), (1, 2), (2, 3)];
    let p1 = [(2, 2), (0, 0), (0, 1)];
    for i in 0..3 {
        assert!(engine.place_dot(p0[i].0, p0[i].1), "p0 dot {i}");
        engine.end_turn();
        assert!(engine.place_dot(p1[i].0, p1[i].1), "p1 dot {i}");
        engine.end_turn();
    }

    // Final corner, then the four diagonal edges of the diamond.
    assert!(engine.place_dot(3, 2));
    assert!(engine.connect_dots(2, 1, 1, 2));
    assert!(engine.connect_dots(1, 2, 2, 3));
    assert!(engine.connect_dots(2, 3, 3, 2));
    assert_eq!(engine.player_scores(), &[0, 0]);
    assert!(engine.connect_dots(3, 2, 2, 1));

    // The enclosed dot was captured exactly once.
    assert_eq!(engine.player_scores(), &[CAPTURE_POINTS, 0]);
    let victim = engine.dot_at(2, 2).unwrap();
    assert!(!victim.active);
    // The consumed intersection can never host a dot again.
    assert!(!engine.can_place_dot(2, 2));
    assert_clean(&engine, "after diamond capture");

    // Captured dots never re-activate, and the area cannot be re-scored:
    // finish the turn and verify scores are stable.
    engine.end_turn();
    assert!(engine.place_dot(3, 3));
    engine.end_turn();
    assert_eq!(engine.player_scores(), &[CAPTURE_POINTS, 0]);
    assert!(!engine.dot_at(2, 2).unwrap().active);
}

#[test]
fn test_full_span_barricade_scores_nothing() {
    // A straight cut from x=0 to x=columns at constant y is a valid
    // barricade even though it encloses no area.
    let mut engine = GameEngine::new();
    engine.new_game(3, 3, 20);

    let row: Vec<(i32, i32)> = (0..=3).map(|x| (x, 1)).collect();
    for (i, &(x, y)) in row.iter().enumerate() {
        assert!(engine.place_dot(x, y), "row dot {i}");
        engine.end_turn();
        assert!(engine.place_dot(i as i32, 3), "filler {i}");
        engine.end_turn();
    }

    assert!(engine.place_dot(0, 0));
    assert!(engine.connect_dots(0, 1, 1, 1));
    assert!(engine.connect_dots(1, 1, 2, 1));
    assert_eq!(engine.lines(0).len(), 0);
    // The third segment completes the border-to-border cut.
    assert!(engine.connect_dots(2, 1, 3, 1));

    assert_eq!(engine.lines(0).len(), 3);
    assert!(engine.chains().is_empty());
    // Empty interior: no points, no error.
    assert_eq!(engine.player_scores(), &[0, 0]);

    // The finalized segments cannot be drawn again.
    assert!(!engine.connect_dots(0, 1, 1, 1));
    assert!(!engine.connect_dots(1, 1, 0, 1));
    assert_clean(&engine, "after straight barricade");
}

#[test]
fn test_pocket_barricade_captures_against_border() {
    // A U-shaped run from the top border down and back up seals a pocket
    // whose middle row is bracketed by both legs, trapping an opponent dot.
    let mut engine = GameEngine::new();
    engine.new_game(4, 4, 20);

    let p0 = [(1, 0), (1, 1), (1, 2), (2, 2), (3, 2), (3, 1)];
    let p1 = [(2, 1), (0, 4), (2, 4), (4, 4), (0, 3), (4, 3)];
    for i in 0..6 {
        assert!(engine.place_dot(p0[i].0, p0[i].1), "p0 dot {i}");
        engine.end_turn();
        assert!(engine.place_dot(p1[i].0, p1[i].1), "p1 dot {i}");
        engine.end_turn();
    }

    // Final leg dot, then the six segments of the U.
    assert!(engine.place_dot(3, 0));
    assert!(engine.connect_dots(1, 0, 1, 1));
    assert!(engine.connect_dots(1, 1, 1, 2));
    assert!(engine.connect_dots(1, 2, 2, 2));
    assert!(engine.connect_dots(2, 2, 3, 2));
    assert!(engine.connect_dots(3, 2, 3, 1));
    assert_eq!(engine.player_scores(), &[0, 0]);
    // Both ends reach y=0: the pocket seals and the sweep runs.
    assert!(engine.connect_dots(3, 1, 3, 0));

    // The pocket interior holds player 1's dot at (2,1).
    assert_eq!(engine.player_scores(), &[CAPTURE_POINTS, 0]);
    assert!(!engine.dot_at(2, 1).unwrap().active);
    assert!(!engine.can_place_dot(2, 1));
    assert_clean(&engine, "after pocket barricade");
}

#[test]
fn test_round_robin_until_end_stage() {
    let mut engine = GameEngine::new();
    engine.new_game(6, 6, 3);

    let mut placements = 0;
    let mut coords = (0..=6).flat_map(|y| (0..=6).map(move |x| (x, y)));

    while engine.stage() != Stage::End {
        let (x, y) = coords.next().unwrap();
        assert!(engine.place_dot(x, y));
        placements += 1;
        engine.end_turn();
        assert_clean(&engine, "mid round-robin");
    }

    // 2 players x 3 rounds.
    assert_eq!(placements, 6);
    assert_eq!(engine.turns_left(), 0);

    // Terminal stage rejects everything uniformly.
    assert!(!engine.place_dot(6, 6));
    assert!(!engine.connect_dots(0, 0, 1, 0));
    engine.end_turn();
    assert_eq!(engine.stage(), Stage::End);
}

#[test]
fn test_new_game_discards_previous_game() {
    let mut engine = GameEngine::new();
    engine.new_game(4, 4, 20);

    assert!(engine.place_dot(1, 1));
    engine.end_turn();
    assert!(engine.place_dot(2, 2));
    engine.end_turn();

    engine.new_game(3, 3, 2);
    assert!(engine.dots().is_empty());
    assert!(engine.chains().is_empty());
    assert_eq!(engine.turns_left(), 2);
    assert_eq!(engine.current_player(), 0);
    // The old dots are gone, so their coordinates are free again.
    assert!(engine.place_dot(1, 1));
    assert_clean(&engine, "after reset");
}

#[test]
fn test_scores_and_names_roundtrip() {
    let mut engine = GameEngine::new();
    assert!(engine.set_player_names(vec!["Ada".into(), "Bix".into()]));
    engine.new_game(3, 3, 5);

    assert_eq!(engine.player_names(), &["Ada", "Bix"]);
    assert_eq!(engine.player_scores(), &[0, 0]);
}
