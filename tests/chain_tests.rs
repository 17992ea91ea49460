use catena::{Bounds, Chain, FiniteGuard, NoOpStepObserver, PhysicsError, SolverConfig, Vec2};

// Screen-style coordinates throughout: +y is down, so gravity is +y and a
// chain built with `Chain::new` already hangs along the pull of gravity.

#[test]
fn chain_correct_particle_count() {
    let chain: Chain<f32> = Chain::new(Vec2::new(0.0, 0.0), 10, 15.0).unwrap();
    assert_eq!(chain.len(), 11); // segments + 1
    assert_eq!(chain.segment_count(), 10);
    assert_eq!(chain.positions().len(), 11);
}

#[test]
fn anchor_is_pinned_at_construction() {
    let chain: Chain<f32> = Chain::new(Vec2::new(2.0, 3.0), 4, 1.0).unwrap();
    assert!(chain.particle(0).pinned);
    for i in 1..chain.len() {
        assert!(!chain.particle(i).pinned, "particle {} should start unpinned", i);
    }
}

#[test]
fn zero_segments_rejected() {
    let result = Chain::<f32>::new(Vec2::zero(), 0, 1.0);
    assert_eq!(result.err(), Some(PhysicsError::InvalidSegmentCount));
}

#[test]
fn non_positive_segment_length_rejected() {
    assert_eq!(
        Chain::<f32>::new(Vec2::zero(), 5, 0.0).err(),
        Some(PhysicsError::InvalidSegmentLength),
    );
    assert_eq!(
        Chain::<f32>::new(Vec2::zero(), 5, -2.0).err(),
        Some(PhysicsError::InvalidSegmentLength),
    );
    assert_eq!(
        Chain::<f32>::new(Vec2::zero(), 5, f32::NAN).err(),
        Some(PhysicsError::InvalidSegmentLength),
    );
}

#[test]
fn angled_layout_matches_segment_length() {
    let chain: Chain<f32> = Chain::angled(Vec2::zero(), 6, 2.0, 0.9).unwrap();
    for i in 0..chain.segment_count() {
        let d = chain.particle(i).pos.distance(chain.particle(i + 1).pos);
        assert!((d - 2.0).abs() < 1e-4, "segment {} has length {}", i, d);
    }
}

#[test]
fn horizontal_chain_swings_down_under_gravity() {
    // Angle pi/2 from +y lays the chain out horizontally.
    let mut chain: Chain<f32> =
        Chain::angled(Vec2::new(0.0, 10.0), 10, 1.0, core::f32::consts::FRAC_PI_2).unwrap();

    let config = SolverConfig::new()
        .with_gravity(Vec2::new(0.0, 9.81))
        .with_iterations(8)
        .with_sub_steps(2);

    for _ in 0..120 {
        chain.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
    }

    let start_y = chain.particle(0).pos.y;
    let end_y = chain.particle(chain.len() - 1).pos.y;
    assert!(end_y > start_y, "free end should fall below the pinned start");
}

#[test]
fn hanging_chain_converges_to_rest_length() {
    let mut chain: Chain<f32> = Chain::new(Vec2::new(0.0, 0.0), 10, 5.0).unwrap();

    let config = SolverConfig::new()
        .with_gravity(Vec2::new(0.0, 9.81))
        .with_iterations(20);

    for _ in 0..120 {
        chain.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
    }

    for i in 0..chain.segment_count() {
        let err = chain.constraint(i).error(chain.particles());
        assert!(
            err.abs() < 0.05,
            "segment {} off rest length by {} (> 1%)",
            i,
            err,
        );
    }
}

#[test]
fn three_segment_scenario() {
    let anchor = Vec2::new(0.0f32, 0.0);
    let mut chain: Chain<f32> = Chain::new(anchor, 3, 10.0).unwrap();

    let config = SolverConfig::new()
        .with_gravity(Vec2::new(0.0, 9.81))
        .with_iterations(10);

    for _ in 0..50 {
        chain.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
        assert_eq!(chain.particle(0).pos, anchor, "anchor must stay exactly in place");
    }

    let tail = chain.particle(3).pos.distance(chain.particle(2).pos);
    assert!(
        (tail - 10.0).abs() < 0.1,
        "last segment should be within 1% of rest length, got {}",
        tail,
    );
}

#[test]
fn bounds_clamp_holds_every_tick() {
    let bounds = Bounds::new(Vec2::new(0.0f32, 0.0), Vec2::new(100.0, 100.0));
    // Total chain length (150) exceeds the box, so the tail presses against
    // the bottom edge from the first step on.
    let mut chain: Chain<f32> = Chain::new(Vec2::new(50.0, 10.0), 15, 10.0).unwrap();

    let config = SolverConfig::new()
        .with_gravity(Vec2::new(0.0, 400.0))
        .with_iterations(5)
        .with_bounds(bounds);

    for _ in 0..200 {
        chain.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
        for i in 1..chain.len() {
            let pos = chain.particle(i).pos;
            assert!(bounds.contains(pos), "particle {} escaped the box: {:?}", i, pos);
        }
    }
}

#[test]
fn finite_guard_quiet_on_healthy_run() {
    let mut chain: Chain<f32> = Chain::new(Vec2::zero(), 8, 2.0).unwrap();
    let config = SolverConfig::new().with_gravity(Vec2::new(0.0, 9.81));

    let mut guard = FiniteGuard::new();
    for _ in 0..60 {
        chain.step(1.0 / 60.0, &config, &mut guard);
    }
    assert!(guard.all_finite());
}

#[test]
fn finite_guard_flags_nan_positions() {
    let mut chain: Chain<f32> = Chain::new(Vec2::zero(), 8, 2.0).unwrap();
    chain.particle_mut(4).pos = Vec2::new(f32::NAN, 0.0);

    let config = SolverConfig::new().with_gravity(Vec2::new(0.0, 9.81));
    let mut guard = FiniteGuard::new();
    chain.step(1.0 / 60.0, &config, &mut guard);

    assert!(guard.violations >= 1);
    assert!(!guard.all_finite());
}
