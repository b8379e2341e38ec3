//! Parameter set for the heart simulation.
//!
//! The three evolutionary variants of the effect differ only in constants
//! and enabled features, so they are expressed as presets of one
//! [`HeartConfig`] rather than as separate code paths.

use crate::color::{Glow, Rgba};
use crate::constants::*;
use crate::error::{HeartError, Result};
use glam::DVec2;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// How the heart scale follows the surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleRule {
    /// Same scale regardless of surface size.
    Fixed(f64),
    /// `min(width, height) / divisor`.
    ShortestSide { divisor: f64 },
}

impl ScaleRule {
    pub fn resolve(&self, width: f64, height: f64) -> f64 {
        match *self {
            ScaleRule::Fixed(scale) => scale,
            ScaleRule::ShortestSide { divisor } => width.min(height) / divisor,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleConfig {
    pub enabled: bool,
    pub wave_speed: f64,
    pub decay: f64,
    pub initial_strength: f64,
    pub min_strength: f64,
    /// Ripples are dropped once `radius > max_radius_factor * surface width`.
    pub max_radius_factor: f64,
    /// Oldest ripples are dropped beyond this many live ones.
    pub soft_cap: Option<usize>,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            wave_speed: RIPPLE_WAVE_SPEED,
            decay: RIPPLE_DECAY,
            initial_strength: RIPPLE_INITIAL_STRENGTH,
            min_strength: RIPPLE_MIN_STRENGTH,
            max_radius_factor: RIPPLE_MAX_RADIUS_FACTOR,
            soft_cap: Some(RIPPLE_SOFT_CAP),
        }
    }
}

/// Per-particle force model constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceConfig {
    pub idle_amplitude: f64,
    pub idle_speed: f64,
    pub repulsion_radius: f64,
    pub repulsion_gain: f64,
    /// Each tick without repulsion moves `offset / divisor` back toward base,
    /// per axis.
    pub restore_divisor: DVec2,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            idle_amplitude: IDLE_AMPLITUDE,
            idle_speed: IDLE_SPEED,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_gain: REPULSION_GAIN,
            restore_divisor: DVec2::splat(RESTORE_DIVISOR),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeartConfig {
    pub particle_count: usize,
    pub scale: ScaleRule,
    pub size_range: Range<f64>,
    pub density_range: Range<f64>,
    pub force: ForceConfig,
    pub ripples: RippleConfig,
    pub touch_enabled: bool,
    pub fill: Rgba,
    pub glow: Glow,
    /// Upper bound on rejection-sampling draws per rebuild.
    pub max_placement_attempts: usize,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Variant::default().config()
    }
}

impl HeartConfig {
    /// Check the knobs that would otherwise produce NaN positions or a
    /// population that never settles.
    pub fn validate(&self) -> Result<()> {
        let f = &self.force;
        if !(f.repulsion_radius.is_finite() && f.repulsion_radius > 0.0) {
            return Err(invalid("repulsion_radius must be positive"));
        }
        if !(f.restore_divisor.x.is_finite()
            && f.restore_divisor.y.is_finite()
            && f.restore_divisor.x > 0.0
            && f.restore_divisor.y > 0.0)
        {
            return Err(invalid("restore_divisor must be positive on both axes"));
        }
        if !(f.idle_amplitude.is_finite() && f.idle_speed.is_finite() && f.repulsion_gain.is_finite())
        {
            return Err(invalid("idle and repulsion constants must be finite"));
        }
        if self.size_range.is_empty() || self.size_range.start <= 0.0 {
            return Err(invalid("size_range must be a non-empty positive range"));
        }
        if self.density_range.is_empty() {
            return Err(invalid("density_range must be non-empty"));
        }
        let r = &self.ripples;
        if r.enabled {
            if !(r.decay > 0.0 && r.decay < 1.0) {
                return Err(invalid("ripple decay must lie in (0, 1)"));
            }
            if !(r.wave_speed.is_finite() && r.wave_speed > 0.0) {
                return Err(invalid("ripple wave_speed must be positive"));
            }
            if !(r.min_strength > 0.0 && r.initial_strength.is_finite()) {
                return Err(invalid("ripple strengths must be positive and finite"));
            }
        }
        if self.max_placement_attempts < self.particle_count {
            return Err(invalid("max_placement_attempts is below particle_count"));
        }
        if let ScaleRule::ShortestSide { divisor } = self.scale {
            if !(divisor.is_finite() && divisor > 0.0) {
                return Err(invalid("scale divisor must be positive"));
            }
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> HeartError {
    HeartError::InvalidConfig(msg.to_string())
}

/// The three shipped flavours of the effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Fixed scale, slow glow, effectively no return-to-base, mouse only.
    Classic,
    /// Scale follows the window, snappy return, touch input.
    Touch,
    /// Touch variant plus click/tap ripples.
    #[default]
    Ripple,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Classic, Variant::Touch, Variant::Ripple];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Touch => "touch",
            Variant::Ripple => "ripple",
        }
    }

    pub fn config(self) -> HeartConfig {
        let glow_color = Rgba::RED.with_alpha(0.8);
        let base = HeartConfig {
            particle_count: PARTICLE_COUNT,
            scale: ScaleRule::ShortestSide {
                divisor: SHORTEST_SIDE_DIVISOR,
            },
            size_range: PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX,
            density_range: PARTICLE_DENSITY_MIN..PARTICLE_DENSITY_MAX,
            force: ForceConfig::default(),
            ripples: RippleConfig::default(),
            touch_enabled: true,
            fill: Rgba::RED,
            glow: Glow {
                color: glow_color,
                blur: GLOW_BLUR,
            },
            max_placement_attempts: PARTICLE_COUNT * PLACEMENT_ATTEMPTS_PER_PARTICLE,
        };
        match self {
            Variant::Classic => HeartConfig {
                scale: ScaleRule::Fixed(CLASSIC_HEART_SCALE),
                force: ForceConfig {
                    restore_divisor: DVec2::new(
                        CLASSIC_RESTORE_DIVISOR_X,
                        CLASSIC_RESTORE_DIVISOR_Y,
                    ),
                    ..ForceConfig::default()
                },
                ripples: RippleConfig {
                    enabled: false,
                    ..RippleConfig::default()
                },
                touch_enabled: false,
                glow: Glow {
                    color: glow_color,
                    blur: CLASSIC_GLOW_BLUR,
                },
                ..base
            },
            Variant::Touch => HeartConfig {
                ripples: RippleConfig {
                    enabled: false,
                    ..RippleConfig::default()
                },
                ..base
            },
            Variant::Ripple => base,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = HeartError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| HeartError::UnknownVariant(s.to_string()))
    }
}
