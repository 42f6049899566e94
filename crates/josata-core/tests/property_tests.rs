//! Property-based tests for the particle field and carousel rotor
//!
//! Uses proptest to verify the frame-loop invariants across arbitrary seeds,
//! frame counts, and pointer trajectories.

use glam::Vec2;
use josata_core::plexus::{PlexusConfig, PlexusField};
use josata_core::Rotor;
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Pointer positions roughly spanning the visible world volume, plus None.
fn pointer_strategy() -> impl Strategy<Value = Option<Vec2>> {
    prop_oneof![
        2 => (-30.0f32..30.0, -30.0f32..30.0).prop_map(|(x, y)| Some(Vec2::new(x, y))),
        1 => Just(None),
    ]
}

/// A short run of frames, each with its own pointer sample.
fn frames_strategy(max_frames: usize) -> impl Strategy<Value = Vec<Option<Vec2>>> {
    prop::collection::vec(pointer_strategy(), 1..max_frames)
}

/// A small field so 200 cases stay fast; the invariants do not depend on n.
fn small_field(seed: u64) -> PlexusField {
    let config = PlexusConfig {
        point_count: 24,
        ..Default::default()
    };
    PlexusField::new(config, seed).expect("default-shaped config is valid")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Reflection keeps every coordinate inside the boundary box (with one
    /// velocity step of slack at the moment of the bounce).
    #[test]
    fn points_never_escape_the_box(seed in any::<u64>(), frames in frames_strategy(120)) {
        let mut field = small_field(seed);
        let bounds = field.config().bounds;
        let slack = field.config().velocity_extent;

        for (frame, pointer) in frames.iter().enumerate() {
            field.step(frame as f32 / 60.0, *pointer);
            for point in field.points() {
                prop_assert!(point.position.x.abs() <= bounds.x + slack.x);
                prop_assert!(point.position.y.abs() <= bounds.y + slack.y);
                prop_assert!(point.position.z.abs() <= bounds.z + slack.z);
            }
        }
    }

    /// The link set is sound and complete: a pair is linked iff its distance
    /// is under the threshold, every pair appears at most once, and indices
    /// are ordered i < j.
    #[test]
    fn links_are_sound_and_complete(seed in any::<u64>(), frames in frames_strategy(30)) {
        let mut field = small_field(seed);
        for (frame, pointer) in frames.iter().enumerate() {
            field.step(frame as f32 / 60.0, *pointer);
        }

        let threshold = field.config().link_distance;
        let points = field.points();
        let links = field.links();

        for &(i, j) in links {
            prop_assert!(i < j);
            prop_assert!(points[i].position.distance(points[j].position) < threshold);
        }

        let mut deduped = links.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), links.len());

        let close_pairs = (0..points.len())
            .flat_map(|i| ((i + 1)..points.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| points[i].position.distance(points[j].position) < threshold)
            .count();
        prop_assert_eq!(close_pairs, links.len());
    }

    /// Same seed and same inputs always reproduce the same trajectory.
    #[test]
    fn evolution_is_deterministic(seed in any::<u64>(), frames in frames_strategy(60)) {
        let mut a = small_field(seed);
        let mut b = small_field(seed);
        for (frame, pointer) in frames.iter().enumerate() {
            let t = frame as f32 / 60.0;
            a.step(t, *pointer);
            b.step(t, *pointer);
        }
        prop_assert_eq!(a.points(), b.points());
        prop_assert_eq!(a.links(), b.links());
    }

    /// Advancing a rotor `len` times is the identity, and the indices seen
    /// along the way are a permutation of 0..len.
    #[test]
    fn rotor_cycle_is_a_permutation(len in 1usize..32) {
        let mut rotor = Rotor::new(len);
        let start = rotor.current();

        let mut seen = vec![start];
        for _ in 1..len {
            seen.push(rotor.advance());
        }
        prop_assert_eq!(rotor.advance(), start);

        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), len);
    }

    /// `select` always lands in range and records the outgoing slide.
    #[test]
    fn rotor_select_stays_in_range(len in 1usize..32, picks in prop::collection::vec(any::<usize>(), 1..16)) {
        let mut rotor = Rotor::new(len);
        for pick in picks {
            let before = rotor.current();
            rotor.select(pick);
            prop_assert!(rotor.current() < len);
            prop_assert_eq!(rotor.previous(), before);
        }
    }
}
