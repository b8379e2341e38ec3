use heart_core::{DVec2, Glow, Rgba, Surface, SurfaceSize};
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas 2D context as the simulation's drawing surface. Glow maps onto
/// the context shadow.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    fill: Option<Rgba>,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx, fill: None }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: SurfaceSize) {
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
        // A resize between frames resets fillStyle, so re-issue it.
        self.fill = None;
    }

    fn set_glow(&mut self, glow: &Glow) {
        self.ctx.set_shadow_color(&glow.color.to_css());
        self.ctx.set_shadow_blur(glow.blur);
        self.ctx.set_shadow_offset_x(0.0);
        self.ctx.set_shadow_offset_y(0.0);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.fill = Some(color);
        }
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
            self.ctx.close_path();
            self.ctx.fill();
        }
    }
}
