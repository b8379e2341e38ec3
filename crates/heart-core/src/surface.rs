use crate::color::{Glow, Rgba};
use crate::error::{HeartError, Result};
use glam::DVec2;

/// Drawing collaborator: a 2D target able to clear itself and fill glowing
/// circles. Implemented by the canvas 2D context on the web and by the
/// instanced-quad renderer natively.
pub trait Surface {
    fn clear(&mut self, size: SurfaceSize);
    /// Shadow/glow applied to every fill until changed.
    fn set_glow(&mut self, glow: &Glow);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self { width, height }.validate()
    }

    /// Both sides finite and positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Re-check a size built from its public fields.
    pub fn validate(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(HeartError::InvalidSurface {
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}
