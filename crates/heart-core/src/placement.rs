//! Rejection sampling of particle bases inside the heart curve.

use crate::config::HeartConfig;
use crate::error::{HeartError, Result};
use crate::geometry::{coverage, is_inside_heart};
use crate::particle::Particle;
use crate::surface::SurfaceSize;
use glam::DVec2;
use rand::Rng;

/// Draw uniform points over the surface until `target` of them fall inside
/// the heart. Accepted points are flipped vertically so the heart renders
/// upright. Gives up after `config.max_placement_attempts` draws.
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    config: &HeartConfig,
    target: usize,
    scale: f64,
    size: SurfaceSize,
) -> Result<Vec<Particle>> {
    let size = size.validate()?;
    if !(scale.is_finite() && scale > 0.0) {
        return Err(HeartError::InvalidScale(scale));
    }
    let SurfaceSize { width, height } = size;
    let max_attempts = config.max_placement_attempts;

    let mut particles = Vec::with_capacity(target);
    let mut attempts = 0usize;
    while particles.len() < target {
        if attempts >= max_attempts {
            log::warn!(
                "[placement] gave up: placed={} target={} attempts={} coverage={:.4}",
                particles.len(),
                target,
                attempts,
                coverage(scale, width, height)
            );
            return Err(HeartError::PlacementExhausted {
                placed: particles.len(),
                target,
                attempts,
            });
        }
        attempts += 1;
        let x = rng.gen_range(0.0..width);
        let y = rng.gen_range(0.0..height);
        if is_inside_heart(x, y, scale, width, height) {
            particles.push(Particle::random(DVec2::new(x, height - y), config, rng));
        }
    }
    log::debug!(
        "[placement] placed={} attempts={} acceptance={:.3}",
        target,
        attempts,
        if attempts > 0 {
            target as f64 / attempts as f64
        } else {
            1.0
        }
    );
    Ok(particles)
}
