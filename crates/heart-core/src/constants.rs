// Default tuning constants for the heart simulation. `HeartConfig` presets
// are built from these; frontends never read them directly.

// Population
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_SIZE_MIN: f64 = 1.0;
pub const PARTICLE_SIZE_MAX: f64 = 3.0; // exclusive
pub const PARTICLE_DENSITY_MIN: f64 = 5.0;
pub const PARTICLE_DENSITY_MAX: f64 = 15.0; // exclusive

// Heart scale
pub const CLASSIC_HEART_SCALE: f64 = 200.0; // fixed scale of the first variant
pub const SHORTEST_SIDE_DIVISOR: f64 = 3.0; // scale = min(w, h) / divisor

// Idle motion
pub const IDLE_AMPLITUDE: f64 = 6.0; // orbit radius in px
pub const IDLE_SPEED: f64 = 0.008; // radians per tick

// Pointer repulsion
pub const REPULSION_RADIUS: f64 = 150.0; // hover radius in px
pub const REPULSION_GAIN: f64 = 4.0;

// Return-to-base divisors (offset / divisor per tick)
pub const RESTORE_DIVISOR: f64 = 20.0;
pub const CLASSIC_RESTORE_DIVISOR_X: f64 = 2.0e13;
pub const CLASSIC_RESTORE_DIVISOR_Y: f64 = 2.0e12;

// Ripples
pub const RIPPLE_WAVE_SPEED: f64 = 5.0; // px per tick
pub const RIPPLE_DECAY: f64 = 0.95; // strength multiplier per tick
pub const RIPPLE_INITIAL_STRENGTH: f64 = 16.0;
pub const RIPPLE_MIN_STRENGTH: f64 = 0.1; // pruned below this
pub const RIPPLE_MAX_RADIUS_FACTOR: f64 = 2.0; // pruned past factor * surface width
pub const RIPPLE_SOFT_CAP: usize = 64;

// Glow
pub const CLASSIC_GLOW_BLUR: f64 = 7.0;
pub const GLOW_BLUR: f64 = 10.0;

// Placement guard: attempts allowed per requested particle
pub const PLACEMENT_ATTEMPTS_PER_PARTICLE: usize = 1000;
