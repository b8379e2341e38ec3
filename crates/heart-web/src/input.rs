use glam::DVec2;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// CSS size the canvas was last laid out at, shared between listeners.
/// Pointers map against this, not the simulation size, which stays behind
/// when a rebuild fails.
#[derive(Clone, Debug, Default)]
pub struct LayoutSize(Rc<Cell<DVec2>>);

impl LayoutSize {
    pub fn new(size: DVec2) -> Self {
        Self(Rc::new(Cell::new(size)))
    }

    #[inline]
    pub fn get(&self) -> DVec2 {
        self.0.get()
    }

    pub fn set(&self, size: DVec2) {
        self.0.set(size);
    }
}

/// Map a client-space point into surface pixels given the canvas' client
/// rect and the simulation surface size. `None` while the canvas has no
/// layout box.
#[inline]
pub fn client_to_surface(
    client: DVec2,
    rect_origin: DVec2,
    rect_size: DVec2,
    surface_size: DVec2,
) -> Option<DVec2> {
    if !(rect_size.x > 0.0 && rect_size.y > 0.0) {
        return None;
    }
    let local = client - rect_origin;
    let mapped = local / rect_size * surface_size;
    mapped.is_finite().then_some(mapped)
}

#[inline]
fn canvas_rect(canvas: &web::HtmlCanvasElement) -> (DVec2, DVec2) {
    let rect = canvas.get_bounding_client_rect();
    (
        DVec2::new(rect.left(), rect.top()),
        DVec2::new(rect.width(), rect.height()),
    )
}

#[inline]
pub fn mouse_surface_px(
    ev: &web::MouseEvent,
    canvas: &web::HtmlCanvasElement,
    surface_size: DVec2,
) -> Option<DVec2> {
    let (origin, size) = canvas_rect(canvas);
    let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
    client_to_surface(client, origin, size, surface_size)
}

/// First active touch point, if any.
#[inline]
pub fn touch_surface_px(
    ev: &web::TouchEvent,
    canvas: &web::HtmlCanvasElement,
    surface_size: DVec2,
) -> Option<DVec2> {
    let touch = ev.touches().get(0)?;
    let (origin, size) = canvas_rect(canvas);
    let client = DVec2::new(touch.client_x() as f64, touch.client_y() as f64);
    client_to_surface(client, origin, size, surface_size)
}
