//! Double pendulum integration tests

use glam::DVec2;
use pendulum_core::integrator::double_pendulum_accelerations;
use pendulum_core::tests::test_helpers::approx_eq_vec;
use pendulum_core::{ConfigError, DoublePendulum, DoublePendulumConfig, PhysicsParams};

fn double(angles: (f64, f64)) -> DoublePendulum {
    DoublePendulum::new(
        DVec2::new(400.0, 200.0),
        2.0,
        2.0,
        angles.0,
        angles.1,
        1.0,
        1.0,
        PhysicsParams::default(),
    )
    .expect("valid double pendulum")
}

#[test]
fn test_hanging_straight_down_stays_at_rest() {
    let mut p = double((0.0, 0.0));
    let (first, second) = double_pendulum_accelerations(p.first(), p.second(), 9.8);
    assert_eq!(first, 0.0);
    assert_eq!(second, 0.0);

    for _ in 0..10_000 {
        p.advance();
    }
    for bob in [p.first(), p.second()] {
        assert_eq!(bob.angle(), 0.0);
        assert_eq!(bob.velocity(), 0.0);
        assert_eq!(bob.acceleration(), 0.0);
    }
    assert_eq!(p.first().pos(), DVec2::new(400.0, 300.0));
    assert_eq!(p.second().pos(), DVec2::new(400.0, 400.0));
}

#[test]
fn test_second_bob_anchored_to_updated_first_bob() {
    let mut p = double((1.0, 0.5));
    let reach = 2.0 * 50.0;
    let mut max_gap: f64 = 0.0;

    for _ in 0..10 {
        let pre_tick_first = p.first().pos();
        p.advance();

        let offset = DVec2::new(
            reach * p.second().angle().sin(),
            reach * p.second().angle().cos(),
        );
        let expected = p.first().pos() + offset;
        let anchored_to_stale = pre_tick_first + offset;

        assert!(approx_eq_vec(p.second().pos(), expected, 1e-9));
        max_gap = max_gap.max(p.second().pos().distance(anchored_to_stale));
    }

    assert!(
        max_gap > 0.5,
        "anchoring to the pre-tick first bob should give a different trajectory, gap {}",
        max_gap
    );
}

#[test]
fn test_accelerations_use_pre_tick_state() {
    let mut p = double((2.0, -1.0));
    for _ in 0..30 {
        p.advance();
    }
    let (expected_first, expected_second) =
        double_pendulum_accelerations(p.first(), p.second(), 9.8);
    let (first_velocity, second_velocity) = (p.first().velocity(), p.second().velocity());

    p.advance();

    assert_eq!(p.first().acceleration(), expected_first);
    assert_eq!(p.second().acceleration(), expected_second);
    assert_eq!(p.first().velocity(), first_velocity + expected_first * (1.0 / 60.0));
    assert_eq!(p.second().velocity(), second_velocity + expected_second * (1.0 / 60.0));
}

#[test]
fn test_repeated_runs_are_identical() {
    let config = DoublePendulumConfig::default();
    let run = || {
        let mut p = config.build(PhysicsParams::default()).expect("valid preset");
        for _ in 0..5_000 {
            p.advance();
        }
        p
    };
    assert_eq!(run(), run());
}

#[test]
fn test_arms_keep_their_length() {
    let mut p = DoublePendulumConfig::default()
        .build(PhysicsParams::default())
        .expect("valid preset");
    for _ in 0..3_000 {
        p.advance();
        let pivot = p.pivot();
        assert!((p.first().pos().distance(pivot) - 250.0).abs() < 1e-6);
        assert!((p.second().pos().distance(p.first().pos()) - 250.0).abs() < 1e-6);
    }
}

#[test]
fn test_invalid_configuration_names_parameter() {
    let base = DoublePendulumConfig::default();
    let params = PhysicsParams::default();

    let cases = [
        (
            DoublePendulumConfig {
                first_arm_length: 0.0,
                ..base.clone()
            },
            "first_arm_length",
        ),
        (
            DoublePendulumConfig {
                second_arm_length: 0.0,
                ..base.clone()
            },
            "second_arm_length",
        ),
        (
            DoublePendulumConfig {
                first_mass: 0.0,
                ..base.clone()
            },
            "first_mass",
        ),
        (
            DoublePendulumConfig {
                second_mass: -1.0,
                ..base.clone()
            },
            "second_mass",
        ),
        (
            DoublePendulumConfig {
                second_angle: f64::NAN,
                ..base.clone()
            },
            "second_angle",
        ),
    ];

    for (config, parameter) in cases {
        let err = config.build(params).unwrap_err();
        assert_eq!(err.parameter(), Some(parameter), "{}", err);
        assert!(err.to_string().contains(parameter));
    }
}

#[test]
fn test_degenerate_denominator_rejected() {
    // 2*first_mass vanishes next to second_mass, so the mass term is 1 - cos(0)
    let err = DoublePendulum::new(
        DVec2::ZERO,
        1.0,
        1.0,
        0.5,
        0.5,
        1e-300,
        1.0,
        PhysicsParams::default(),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::DegenerateDenominator { value: 0.0 });
    assert_eq!(err.parameter(), None);
    assert!(err.to_string().contains("denominator"));
}

#[test]
fn test_angles_accumulate_past_full_turns() {
    let mut p = DoublePendulumConfig::default()
        .build(PhysicsParams::default())
        .expect("valid preset");
    let mut max_angle: f64 = 0.0;

    for _ in 0..6_000 {
        let (first_before, second_before) = (p.first().angle(), p.second().angle());
        p.advance();
        // A wrap into [0, 2*pi) would show up as a jump of about 2*pi
        assert!((p.first().angle() - first_before).abs() < 1.0);
        assert!((p.second().angle() - second_before).abs() < 1.0);
        max_angle = max_angle
            .max(p.first().angle().abs())
            .max(p.second().angle().abs());
    }

    assert!(
        max_angle > 4.0 * std::f64::consts::PI,
        "preset should spin past two full turns, max angle {}",
        max_angle
    );
}
