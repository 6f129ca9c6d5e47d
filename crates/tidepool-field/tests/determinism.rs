//! Identical call sequences produce bit-identical fields.

use tidepool_core::{BoundaryMode, Disturbance};
use tidepool_field::WaveField;
use tidepool_test_utils::{bounded_profile, pond_field};

fn script() -> Vec<Disturbance> {
    vec![
        Disturbance::Churn {
            x: 0.2,
            y: 0.05,
            strength: 0.4,
        },
        Disturbance::Splash {
            x: 0.7,
            y: -0.08,
            strength: 1.0,
        },
        Disturbance::Swell {
            x: 0.4,
            strength: 6.0,
            positive: false,
            ticks: 30,
        },
        Disturbance::Churn {
            x: 0.95,
            y: -0.02,
            strength: 1.0,
        },
    ]
}

fn play(mut field: WaveField) -> (u64, Vec<u64>) {
    let mut trail = Vec::new();
    for (round, d) in script().iter().cycle().take(40).enumerate() {
        field.apply(d).unwrap();
        for _ in 0..(round % 3 + 1) {
            field.tick(0.01).unwrap();
        }
        trail.push(field.state_hash());
    }
    (field.state_hash(), trail)
}

#[test]
fn churn_sequence_is_deterministic() {
    for mode in [BoundaryMode::Clamped, BoundaryMode::Wrapped] {
        let (a, trail_a) = play(pond_field(mode));
        let (b, trail_b) = play(pond_field(mode));
        assert_eq!(a, b, "{mode:?}");
        assert_eq!(trail_a, trail_b, "{mode:?}");
    }
}

#[test]
fn boundary_mode_changes_the_outcome() {
    let (clamped, _) = play(pond_field(BoundaryMode::Clamped));
    let (wrapped, _) = play(pond_field(BoundaryMode::Wrapped));
    assert_ne!(clamped, wrapped);
}

#[test]
fn seeded_profile_replays_identically() {
    let profile = bounded_profile(100, 0.05, 42);
    let run = || {
        let mut field = pond_field(BoundaryMode::Wrapped);
        field.set_displacement(&profile).unwrap();
        for _ in 0..500 {
            field.tick(0.01).unwrap();
        }
        field.state_hash()
    };
    assert_eq!(run(), run());
}

#[test]
fn volume_survives_a_long_script() {
    let mut field = pond_field(BoundaryMode::Clamped);
    for d in script().iter().cycle().take(200) {
        field.apply(d).unwrap();
        field.tick(0.01).unwrap();
    }
    assert!(field.mean().abs() < 1e-9, "mean drifted to {}", field.mean());
}
