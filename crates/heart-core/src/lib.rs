pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod particle;
pub mod placement;
pub mod pointer;
pub mod ripple;
pub mod simulation;
pub mod surface;

pub use color::{Glow, Rgba};
pub use config::{ForceConfig, HeartConfig, RippleConfig, ScaleRule, Variant};
pub use error::{HeartError, Result};
pub use geometry::is_inside_heart;
pub use particle::Particle;
pub use placement::place;
pub use pointer::{InputEvent, PointerState};
pub use ripple::{Ripple, RippleField};
pub use simulation::Simulation;
pub use surface::{Surface, SurfaceSize};

pub use glam::DVec2;
