use thiserror::Error;

/// Errors surfaced by the simulation to its hosting frontend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HeartError {
    /// Width or height was zero, negative or not finite.
    #[error("invalid surface size {width}x{height}: both sides must be positive and finite")]
    InvalidSurface { width: f64, height: f64 },

    /// The resolved heart scale cannot normalize coordinates.
    #[error("invalid heart scale {0}: must be positive and finite")]
    InvalidScale(f64),

    /// A configuration knob would poison the simulation with NaN or never settle.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Rejection sampling ran out of attempts before reaching the target count.
    #[error("placed {placed} of {target} particles after {attempts} attempts; heart does not fit the surface")]
    PlacementExhausted {
        placed: usize,
        target: usize,
        attempts: usize,
    },

    /// A preset name did not match any known variant.
    #[error("unknown variant '{0}', expected one of: classic, touch, ripple")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, HeartError>;
