use heart_core::{is_inside_heart, place, HeartConfig, HeartError, SurfaceSize, Variant};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn surface(w: f64, h: f64) -> SurfaceSize {
    SurfaceSize::new(w, h).unwrap()
}

#[test]
fn places_exactly_the_target_count_inside_the_heart() {
    let config = HeartConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let particles = place(&mut rng, &config, 1000, 200.0, surface(800.0, 600.0)).unwrap();
    assert_eq!(particles.len(), 1000);
    for p in &particles {
        let base = p.base();
        // Undo the vertical flip to recover the sampled point.
        let sampled_y = 600.0 - base.y;
        assert!(
            is_inside_heart(base.x, sampled_y, 200.0, 800.0, 600.0),
            "({}, {}) outside",
            base.x,
            sampled_y
        );
    }
}

#[test]
fn particles_start_at_rest_with_attributes_in_range() {
    let config = HeartConfig::default();
    let mut rng = StdRng::seed_from_u64(11);
    let particles = place(&mut rng, &config, 500, 200.0, surface(800.0, 600.0)).unwrap();
    for p in &particles {
        assert_eq!(p.position, p.base());
        assert!((1.0..3.0).contains(&p.size()), "size {}", p.size());
        assert!((5.0..15.0).contains(&p.density()), "density {}", p.density());
        assert!((0.0..std::f64::consts::TAU).contains(&p.phase()));
    }
}

#[test]
fn flipped_population_has_tip_at_the_bottom() {
    let config = HeartConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let particles = place(&mut rng, &config, 1000, 200.0, surface(800.0, 600.0)).unwrap();
    // Lobes sit above the center after the flip: more mass in the upper half.
    let upper = particles.iter().filter(|p| p.base().y < 300.0).count();
    assert!(upper > 500, "upper half holds {upper}");
    let lowest = particles.iter().map(|p| p.base().y).fold(f64::MIN, f64::max);
    assert!(lowest <= 300.0 + 200.0);
}

#[test]
fn zero_target_yields_empty_population() {
    let config = HeartConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let particles = place(&mut rng, &config, 0, 200.0, surface(800.0, 600.0)).unwrap();
    assert!(particles.is_empty());
}

#[test]
fn non_positive_scale_is_rejected() {
    let config = HeartConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    for scale in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let err = place(&mut rng, &config, 10, scale, surface(800.0, 600.0)).unwrap_err();
        assert!(matches!(err, HeartError::InvalidScale(_)), "{err:?}");
    }
}

#[test]
fn tiny_heart_gives_up_instead_of_spinning() {
    let mut config = Variant::Classic.config();
    config.max_placement_attempts = 5_000;
    let mut rng = StdRng::seed_from_u64(5);
    let err = place(&mut rng, &config, 1000, 1.0, surface(800.0, 600.0)).unwrap_err();
    match err {
        HeartError::PlacementExhausted {
            placed,
            target,
            attempts,
        } => {
            assert!(placed < target);
            assert_eq!(target, 1000);
            assert_eq!(attempts, 5_000);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn same_seed_same_population() {
    let config = HeartConfig::default();
    let a = place(&mut StdRng::seed_from_u64(9), &config, 100, 150.0, surface(640.0, 480.0)).unwrap();
    let b = place(&mut StdRng::seed_from_u64(9), &config, 100, 150.0, surface(640.0, 480.0)).unwrap();
    assert_eq!(a, b);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_surface_gets_a_full_population(
        w in 200.0f64..2000.0,
        h in 200.0f64..2000.0,
        seed in any::<u64>(),
    ) {
        let config = HeartConfig::default();
        let scale = config.scale.resolve(w, h);
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = place(&mut rng, &config, 200, scale, surface(w, h)).unwrap();
        prop_assert_eq!(particles.len(), 200);
        for p in &particles {
            prop_assert!(is_inside_heart(p.base().x, h - p.base().y, scale, w, h));
            prop_assert!(p.base().x >= 0.0 && p.base().x < w);
        }
    }
}

#[test]
fn degenerate_surface_is_rejected_before_sampling() {
    let bad = [
        SurfaceSize { width: 0.0, height: 600.0 },
        SurfaceSize { width: 800.0, height: -1.0 },
        SurfaceSize { width: f64::NAN, height: 600.0 },
        SurfaceSize { width: 800.0, height: f64::INFINITY },
    ];
    for variant in [Variant::Classic, Variant::Ripple] {
        let config = variant.config();
        for size in bad {
            let mut rng = StdRng::seed_from_u64(1);
            let err = place(&mut rng, &config, 10, 200.0, size).unwrap_err();
            assert!(matches!(err, HeartError::InvalidSurface { .. }), "{size:?}: {err:?}");
        }
    }
}
