use crate::canvas::CanvasSurface;
use crate::constants::FPS_SAMPLE_SECS;
use heart_core::Simulation;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub surface: CanvasSurface,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.sim.borrow_mut().frame(&mut self.surface);
        self.stats.record();
    }
}

/// Frame counter that logs the achieved frame rate once per sample window.
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }
}

impl FrameStats {
    pub fn record(&mut self) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f64();
        if elapsed >= FPS_SAMPLE_SECS {
            log::debug!("[frame] fps={:.1}", self.frames as f64 / elapsed);
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run `frame` once per display refresh for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
