use crate::config::RippleConfig;
use glam::DVec2;
use smallvec::SmallVec;

/// Expanding, decaying circular wave source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: DVec2,
    pub radius: f64,
    pub strength: f64,
}

impl Ripple {
    pub fn new(origin: DVec2, strength: f64) -> Self {
        Self {
            origin,
            radius: 0.0,
            strength,
        }
    }
}

/// Live ripples in spawn order. Each one ages and expires independently and
/// applies its displacement additively, so order only affects iteration.
#[derive(Clone, Debug)]
pub struct RippleField {
    config: RippleConfig,
    ripples: SmallVec<[Ripple; 8]>,
}

impl RippleField {
    pub fn new(config: RippleConfig) -> Self {
        Self {
            config,
            ripples: SmallVec::new(),
        }
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Start a ripple at `(x, y)`. Ignored when ripples are disabled.
    pub fn spawn(&mut self, x: f64, y: f64) {
        if !self.config.enabled || !(x.is_finite() && y.is_finite()) {
            return;
        }
        if let Some(cap) = self.config.soft_cap {
            if cap == 0 {
                return;
            }
            while self.ripples.len() >= cap {
                self.ripples.remove(0);
            }
        }
        self.ripples
            .push(Ripple::new(DVec2::new(x, y), self.config.initial_strength));
    }

    /// Grow and weaken every ripple, then drop the spent ones.
    pub fn tick(&mut self, surface_width: f64) {
        let max_radius = self.config.max_radius_factor * surface_width;
        for r in self.ripples.iter_mut() {
            r.radius += self.config.wave_speed;
            r.strength *= self.config.decay;
        }
        let min_strength = self.config.min_strength;
        let before = self.ripples.len();
        self.ripples
            .retain(|r| r.strength >= min_strength && r.radius <= max_radius);
        let expired = before - self.ripples.len();
        if expired > 0 {
            log::trace!("[ripple] expired={} live={}", expired, self.ripples.len());
        }
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[Ripple] {
        &self.ripples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }
}
