use crate::constants::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
use heart_core::{Result, SurfaceSize};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Value of a query-string parameter of the current page.
pub fn query_param(name: &str) -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    web::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Size the canvas to the window. The simulation works in CSS pixels; the
/// backing store is scaled by the device pixel ratio and the context
/// transform compensates, so particle sizes stay in CSS pixels.
pub fn sync_canvas_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Result<SurfaceSize> {
    let (css_w, css_h, dpr) = match web::window() {
        Some(w) => (
            w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(FALLBACK_WIDTH),
            w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(FALLBACK_HEIGHT),
            w.device_pixel_ratio(),
        ),
        None => (FALLBACK_WIDTH, FALLBACK_HEIGHT, 1.0),
    };
    let css_w = css_w.max(1.0);
    let css_h = css_h.max(1.0);
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let size = SurfaceSize::new(css_w, css_h)?;

    canvas.set_width(((css_w * dpr) as u32).max(1));
    canvas.set_height(((css_h * dpr) as u32).max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{css_w}px"));
    _ = style.set_property("height", &format!("{css_h}px"));
    // Resizing the backing store resets the context state.
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

    Ok(size)
}
