//! A single glowing point and its per-tick force model.
//!
//! Every tick the position is re-derived from the fixed base position and
//! the idle phase, then perturbed: pushed away from a nearby pointer or
//! relaxed toward base, then displaced by every active ripple front.

use crate::color::Rgba;
use crate::config::{ForceConfig, HeartConfig};
use crate::ripple::Ripple;
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::{PI, TAU};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    base: DVec2,
    size: f64,
    density: f64,
    phase: f64,
}

/// Idle orbit: `base + amplitude * (cos φ, sin φ)`.
#[inline]
pub fn idle_position(base: DVec2, phase: f64, amplitude: f64) -> DVec2 {
    base + DVec2::new(phase.cos(), phase.sin()) * amplitude
}

/// Displacement that pushes a point at `position` away from `pointer`.
/// Returns `None` when the pointer is outside the hover radius, and a zero
/// vector when the two coincide.
pub fn repulsion(position: DVec2, pointer: DVec2, density: f64, force: &ForceConfig) -> Option<DVec2> {
    let delta = pointer - position;
    let distance = delta.length();
    if !(distance < force.repulsion_radius) {
        return None;
    }
    if distance == 0.0 {
        return Some(DVec2::ZERO);
    }
    let direction = delta / distance;
    let strength =
        (force.repulsion_radius - distance) / force.repulsion_radius * force.repulsion_gain;
    Some(-direction * strength * density)
}

/// Outward push from one ripple front; zero outside the ripple or at its origin.
pub fn ripple_push(position: DVec2, ripple: &Ripple) -> DVec2 {
    let delta = position - ripple.origin;
    let distance = delta.length();
    if distance == 0.0 || !(distance < ripple.radius) {
        return DVec2::ZERO;
    }
    let strength = ((distance / ripple.radius) * PI).sin() * ripple.strength;
    delta / distance * strength
}

impl Particle {
    pub fn new(base: DVec2, size: f64, density: f64, phase: f64) -> Self {
        Self {
            position: base,
            base,
            size,
            density,
            phase,
        }
    }

    /// Particle at `base` with size, density and starting phase drawn from
    /// the configured ranges.
    pub fn random<R: Rng + ?Sized>(base: DVec2, config: &HeartConfig, rng: &mut R) -> Self {
        let size = rng.gen_range(config.size_range.clone());
        let density = rng.gen_range(config.density_range.clone());
        let phase = rng.gen_range(0.0..TAU);
        Self::new(base, size, density, phase)
    }

    #[inline]
    pub fn base(&self) -> DVec2 {
        self.base
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn density(&self) -> f64 {
        self.density
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Rgba) {
        surface.fill_circle(self.position, self.size, color);
    }

    /// Advance one tick against the current pointer and ripple snapshot.
    pub fn update(&mut self, pointer: Option<DVec2>, ripples: &[Ripple], force: &ForceConfig) {
        self.phase += force.idle_speed;
        self.position = idle_position(self.base, self.phase, force.idle_amplitude);

        let pushed = pointer.and_then(|p| repulsion(self.position, p, self.density, force));
        match pushed {
            Some(offset) => self.position += offset,
            None => self.relax(force.restore_divisor),
        }

        for ripple in ripples {
            self.position += ripple_push(self.position, ripple);
        }
    }

    fn relax(&mut self, divisor: DVec2) {
        if self.position.x != self.base.x {
            self.position.x += (self.base.x - self.position.x) / divisor.x;
        }
        if self.position.y != self.base.y {
            self.position.y += (self.base.y - self.position.y) / divisor.y;
        }
    }
}
