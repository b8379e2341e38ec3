//! Simulation context: the state shared between input handlers and the
//! frame loop, and the per-frame driver over it.
//!
//! Frontends own one `Simulation`, feed it [`InputEvent`]s and resize
//! notifications between frames, and call [`Simulation::frame`] once per
//! display refresh. Everything runs on a single thread; each frame sees a
//! consistent snapshot of pointer, ripples and population.

use crate::color::{Glow, Rgba};
use crate::config::HeartConfig;
use crate::error::Result;
use crate::particle::Particle;
use crate::placement::place;
use crate::pointer::{InputEvent, PointerState};
use crate::ripple::RippleField;
use crate::surface::{Surface, SurfaceSize};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Surface that discards every call; drives [`Simulation::step`].
struct Headless;

impl Surface for Headless {
    fn clear(&mut self, _size: SurfaceSize) {}
    fn set_glow(&mut self, _glow: &Glow) {}
    fn fill_circle(&mut self, _center: DVec2, _radius: f64, _color: Rgba) {}
}

pub struct Simulation {
    config: HeartConfig,
    rng: StdRng,
    size: SurfaceSize,
    scale: f64,
    particles: Vec<Particle>,
    ripples: RippleField,
    pointer: PointerState,
    generation: u64,
    frame: u64,
}

impl Simulation {
    /// Deterministic simulation for a given seed.
    pub fn new(config: HeartConfig, size: SurfaceSize, seed: u64) -> Result<Self> {
        Self::with_rng(config, size, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: HeartConfig, size: SurfaceSize) -> Result<Self> {
        Self::with_rng(config, size, StdRng::from_entropy())
    }

    fn with_rng(config: HeartConfig, size: SurfaceSize, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let ripples = RippleField::new(config.ripples);
        let mut sim = Self {
            config,
            rng,
            size,
            scale: 0.0,
            particles: Vec::new(),
            ripples,
            pointer: PointerState::default(),
            generation: 0,
            frame: 0,
        };
        sim.rebuild(size)?;
        Ok(sim)
    }

    /// Adopt a new surface size: recompute the heart scale and replace the
    /// whole population. On error the previous population stays in place.
    pub fn resize(&mut self, size: SurfaceSize) -> Result<()> {
        self.rebuild(size)
    }

    fn rebuild(&mut self, size: SurfaceSize) -> Result<()> {
        // ShortestSide would swallow a NaN side through f64::min.
        let size = size.validate()?;
        let scale = self.config.scale.resolve(size.width, size.height);
        let particles = place(
            &mut self.rng,
            &self.config,
            self.config.particle_count,
            scale,
            size,
        )?;
        self.size = size;
        self.scale = scale;
        self.particles = particles;
        self.generation += 1;
        log::info!(
            "[heart] population rebuilt: generation={} particles={} size={}x{} scale={:.1}",
            self.generation,
            self.particles.len(),
            size.width,
            size.height,
            scale
        );
        Ok(())
    }

    pub fn handle(&mut self, event: InputEvent) {
        if event.is_touch() && !self.config.touch_enabled {
            return;
        }
        match event {
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                self.pointer.move_to(x, y)
            }
            InputEvent::PointerLeave | InputEvent::TouchEnd => self.pointer.clear(),
            InputEvent::Press { x, y } | InputEvent::TouchStart { x, y } => {
                self.ripples.spawn(x, y);
                self.pointer.move_to(x, y);
            }
        }
    }

    /// One display frame: clear, age ripples, then draw and update every
    /// particle in order.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.size);
        self.ripples.tick(self.size.width);
        surface.set_glow(&self.config.glow);
        let pointer = self.pointer.position();
        let ripples = self.ripples.as_slice();
        let fill = self.config.fill;
        for particle in self.particles.iter_mut() {
            particle.draw(surface, fill);
            particle.update(pointer, ripples, &self.config.force);
        }
        self.frame += 1;
    }

    /// Advance one frame without drawing.
    pub fn step(&mut self) {
        self.frame(&mut Headless);
    }

    pub fn config(&self) -> &HeartConfig {
        &self.config
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn ripples(&self) -> &RippleField {
        &self.ripples
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Incremented every time the population is rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}
