use heart_core::{
    DVec2, Glow, HeartConfig, HeartError, InputEvent, Rgba, ScaleRule, Simulation, Surface,
    SurfaceSize, Variant,
};

#[derive(Default)]
struct RecordingSurface {
    clears: Vec<SurfaceSize>,
    glows: Vec<Glow>,
    circles: Vec<(DVec2, f64, Rgba)>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: SurfaceSize) {
        self.clears.push(size);
        self.circles.clear();
    }

    fn set_glow(&mut self, glow: &Glow) {
        self.glows.push(*glow);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.circles.push((center, radius, color));
    }
}

fn size(w: f64, h: f64) -> SurfaceSize {
    SurfaceSize::new(w, h).unwrap()
}

fn sim(variant: Variant) -> Simulation {
    Simulation::new(variant.config(), size(800.0, 600.0), 42).unwrap()
}

#[test]
fn startup_places_full_population() {
    let s = sim(Variant::Ripple);
    assert_eq!(s.particles().len(), 1000);
    assert_eq!(s.generation(), 1);
    assert_eq!(s.scale(), 200.0);
    assert!(!s.pointer().is_present());
    assert!(s.ripples().is_empty());
}

#[test]
fn classic_variant_keeps_fixed_scale_across_resizes() {
    let mut s = sim(Variant::Classic);
    assert_eq!(s.scale(), 200.0);
    s.resize(size(1200.0, 900.0)).unwrap();
    assert_eq!(s.scale(), 200.0);
}

#[test]
fn resize_replaces_the_whole_population() {
    let mut s = sim(Variant::Ripple);
    let before: Vec<DVec2> = s.particles().iter().map(|p| p.base()).collect();
    s.resize(size(1024.0, 768.0)).unwrap();
    assert_eq!(s.generation(), 2);
    assert_eq!(s.particles().len(), 1000);
    assert_eq!(s.scale(), 256.0);
    assert_eq!(s.size(), size(1024.0, 768.0));
    let survivors = s
        .particles()
        .iter()
        .filter(|p| before.contains(&p.base()))
        .count();
    assert_eq!(survivors, 0);
}

#[test]
fn failed_resize_keeps_previous_population() {
    let config = HeartConfig {
        scale: ScaleRule::Fixed(200.0),
        max_placement_attempts: 20_000,
        ..HeartConfig::default()
    };
    let mut s = Simulation::new(config, size(800.0, 600.0), 1).unwrap();
    let before = s.particles().to_vec();
    let err = s.resize(size(4000.0, 4000.0)).unwrap_err();
    assert!(matches!(err, HeartError::PlacementExhausted { .. }), "{err:?}");
    assert_eq!(s.generation(), 1);
    assert_eq!(s.size(), size(800.0, 600.0));
    assert_eq!(s.particles(), &before[..]);
}

#[test]
fn degenerate_surface_is_an_error_for_every_scale_rule() {
    for variant in [Variant::Classic, Variant::Ripple] {
        for bad in [
            SurfaceSize { width: 0.0, height: 600.0 },
            SurfaceSize { width: f64::NAN, height: 600.0 },
        ] {
            let err = Simulation::new(variant.config(), bad, 1)
                .err()
                .expect("surface should be rejected");
            assert!(matches!(err, HeartError::InvalidSurface { .. }), "{err:?}");

            let mut s = sim(variant);
            let before = s.particles().to_vec();
            let err = s.resize(bad).unwrap_err();
            assert!(matches!(err, HeartError::InvalidSurface { .. }), "{err:?}");
            assert_eq!(s.generation(), 1);
            assert_eq!(s.size(), size(800.0, 600.0));
            assert_eq!(s.particles(), &before[..]);
        }
    }
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut config = HeartConfig::default();
    config.ripples.decay = 1.5;
    let err = Simulation::new(config, size(800.0, 600.0), 1)
        .err()
        .expect("config should be rejected");
    assert!(matches!(err, HeartError::InvalidConfig(_)));
}

#[test]
fn frame_clears_then_draws_every_particle_before_updating() {
    let mut s = sim(Variant::Ripple);
    let bases: Vec<DVec2> = s.particles().iter().map(|p| p.base()).collect();
    let mut surface = RecordingSurface::default();
    s.frame(&mut surface);

    assert_eq!(surface.clears, vec![size(800.0, 600.0)]);
    assert_eq!(surface.glows.len(), 1);
    assert_eq!(surface.glows[0], s.config().glow);
    assert_eq!(surface.circles.len(), 1000);
    // First frame draws the untouched start positions.
    for ((center, radius, color), (base, p)) in
        surface.circles.iter().zip(bases.iter().zip(s.particles()))
    {
        assert_eq!(center, base);
        assert_eq!(*radius, p.size());
        assert_eq!(*color, Rgba::RED);
    }
    assert_eq!(s.frame_count(), 1);
    assert!(s.particles().iter().any(|p| p.position != p.base()));
}

#[test]
fn frame_draws_positions_from_previous_update() {
    let mut s = sim(Variant::Ripple);
    let mut surface = RecordingSurface::default();
    s.frame(&mut surface);
    let after_first: Vec<DVec2> = s.particles().iter().map(|p| p.position).collect();
    s.frame(&mut surface);
    let drawn: Vec<DVec2> = surface.circles.iter().map(|c| c.0).collect();
    assert_eq!(drawn, after_first);
}

#[test]
fn press_spawns_ripple_and_moves_pointer() {
    let mut s = sim(Variant::Ripple);
    s.handle(InputEvent::Press { x: 400.0, y: 300.0 });
    assert_eq!(s.pointer().position(), Some(DVec2::new(400.0, 300.0)));
    assert_eq!(s.ripples().len(), 1);

    s.step();
    let r = s.ripples().as_slice()[0];
    assert_eq!(r.radius, 5.0);
    assert!((r.strength - 15.2).abs() < 1e-12);
}

#[test]
fn pointer_move_and_leave() {
    let mut s = sim(Variant::Classic);
    s.handle(InputEvent::PointerMove { x: 10.0, y: 20.0 });
    assert_eq!(s.pointer().position(), Some(DVec2::new(10.0, 20.0)));
    assert!(s.ripples().is_empty());
    s.handle(InputEvent::PointerLeave);
    assert!(!s.pointer().is_present());
}

#[test]
fn classic_variant_ignores_touch_and_clicks_make_no_ripples() {
    let mut s = sim(Variant::Classic);
    s.handle(InputEvent::TouchStart { x: 5.0, y: 5.0 });
    assert!(!s.pointer().is_present());
    s.handle(InputEvent::Press { x: 5.0, y: 5.0 });
    assert!(s.ripples().is_empty());
    assert!(s.pointer().is_present());
}

#[test]
fn touch_variant_tracks_touches_without_ripples() {
    let mut s = sim(Variant::Touch);
    s.handle(InputEvent::TouchStart { x: 1.0, y: 2.0 });
    assert_eq!(s.pointer().position(), Some(DVec2::new(1.0, 2.0)));
    assert!(s.ripples().is_empty());
    s.handle(InputEvent::TouchMove { x: 3.0, y: 4.0 });
    assert_eq!(s.pointer().position(), Some(DVec2::new(3.0, 4.0)));
    s.handle(InputEvent::TouchEnd);
    assert!(!s.pointer().is_present());
}

#[test]
fn touch_move_never_spawns_ripples() {
    let mut s = sim(Variant::Ripple);
    s.handle(InputEvent::TouchMove { x: 3.0, y: 4.0 });
    assert!(s.ripples().is_empty());
    s.handle(InputEvent::TouchStart { x: 3.0, y: 4.0 });
    assert_eq!(s.ripples().len(), 1);
}

#[test]
fn ripples_drain_during_frames() {
    let mut s = sim(Variant::Ripple);
    s.handle(InputEvent::Press { x: 400.0, y: 300.0 });
    s.handle(InputEvent::PointerLeave);
    let mut surface = RecordingSurface::default();
    for _ in 0..99 {
        s.frame(&mut surface);
    }
    assert!(s.ripples().is_empty());
    assert!(s.particles().iter().all(|p| p.position.is_finite()));
}

#[test]
fn population_settles_back_after_pointer_leaves() {
    let mut s = sim(Variant::Ripple);
    s.handle(InputEvent::PointerMove { x: 400.0, y: 300.0 });
    for _ in 0..10 {
        s.step();
    }
    s.handle(InputEvent::PointerLeave);
    s.step();
    let amp = s.config().force.idle_amplitude;
    for p in s.particles() {
        assert!((p.position - p.base()).length() <= amp + 1e-9);
    }
}

#[test]
fn step_matches_frame_without_drawing() {
    let mut drawn = sim(Variant::Ripple);
    let mut headless = sim(Variant::Ripple);
    for s in [&mut drawn, &mut headless] {
        s.handle(InputEvent::Press { x: 420.0, y: 280.0 });
    }
    let mut surface = RecordingSurface::default();
    for _ in 0..5 {
        drawn.frame(&mut surface);
        headless.step();
    }
    assert_eq!(drawn.particles(), headless.particles());
    assert_eq!(drawn.ripples().as_slice(), headless.ripples().as_slice());
    assert_eq!(drawn.frame_count(), headless.frame_count());
}
