//! Property checks for pattern generation across many seeds.

use std::collections::HashSet;

use acidentiton::{generate_pattern, ColourRole, Pattern, Seed, ShapeKind};
use pretty_assertions::assert_eq;

/// A fixed spread of identity-like seeds.
fn sample_seeds(n: u64) -> Vec<String> {
    (0..n)
        .map(|i| format!("user-{:05}-{:x}", i, i.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
        .collect()
}

fn fingerprint(pattern: &Pattern) -> String {
    serde_json::to_string(pattern).unwrap()
}

#[test]
fn test_determinism() {
    for seed in sample_seeds(200) {
        assert_eq!(generate_pattern(&seed), generate_pattern(&seed));
    }
}

#[test]
fn test_sensitivity() {
    let seeds = sample_seeds(1000);
    let distinct: HashSet<String> = seeds
        .iter()
        .map(|seed| fingerprint(&generate_pattern(seed)))
        .collect();

    assert_eq!(distinct.len(), seeds.len());
}

#[test]
fn test_range_invariants() {
    for seed in sample_seeds(1000) {
        let pattern = generate_pattern(&seed);

        assert!((3..=6).contains(&pattern.len()), "{}: {} shapes", seed, pattern.len());
        for shape in pattern.iter() {
            assert!((0.0..100.0).contains(&shape.x));
            assert!((0.0..100.0).contains(&shape.y));
            assert!((20.0..60.0).contains(&shape.size));
            assert!((0.0..360.0).contains(&shape.rotation));
            assert!(ShapeKind::ALL.contains(&shape.kind));
            assert_eq!(shape.colour, pattern.palette.get(shape.role));
        }
    }
}

#[test]
fn test_palette_invariant() {
    for seed in sample_seeds(1000) {
        let palette = generate_pattern(&seed).palette;
        assert_eq!(palette.secondary.hue, (palette.primary.hue + 120) % 360);
        assert_eq!(palette.accent.hue, (palette.primary.hue + 240) % 360);
    }
}

#[test]
fn test_empty_seed() {
    let pattern = generate_pattern("");
    assert_eq!(pattern, generate_pattern(""));
    assert!((3..=6).contains(&pattern.len()));
}

#[test]
fn test_alice_regression() {
    let first = generate_pattern("alice-1700000000000");
    let second = generate_pattern("alice-1700000000000");

    assert_eq!(first.palette.primary.hue, 301);
    assert_eq!(first.len(), 4);

    let tuples = |p: &Pattern| -> Vec<(ShapeKind, f64, f64, f64, f64, ColourRole)> {
        p.iter()
            .map(|s| (s.kind, s.x, s.y, s.size, s.rotation, s.role))
            .collect()
    };
    assert_eq!(tuples(&first), tuples(&second));
}

#[test]
fn test_alice_palette_snapshot() {
    let palette = generate_pattern("alice-1700000000000").palette;
    insta::assert_snapshot!(
        palette.primary.to_string(),
        @"hsl(301, 72.82588952220976%, 68.44435511156917%)"
    );
}

#[test]
fn test_distinct_neighbouring_seeds() {
    let a = generate_pattern("alice-1");
    let b = generate_pattern("alice-2");
    assert_ne!(a.palette.primary.hue, b.palette.primary.hue);
}

#[test]
fn test_profile_seed_round_trip() {
    let seed = Seed::for_profile("alice", 1_700_000_000_000);
    assert_eq!(seed.pattern(), generate_pattern("alice-1700000000000"));
}

#[test]
fn test_parallel_generation_matches_serial() {
    let seeds = sample_seeds(64);
    let serial: Vec<Pattern> = seeds.iter().map(|s| generate_pattern(s)).collect();

    let parallel: Vec<Pattern> = std::thread::scope(|scope| {
        let handles: Vec<_> = seeds
            .iter()
            .map(|s| scope.spawn(move || generate_pattern(s)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, parallel);
}
