use crate::dom;
use crate::input::{self, LayoutSize};
use glam::DVec2;
use heart_core::{InputEvent, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub sim: Rc<RefCell<Simulation>>,
    pub layout: LayoutSize,
}

impl InputWiring {
    fn surface_size(&self) -> DVec2 {
        self.layout.get()
    }

    fn dispatch(&self, event: InputEvent) {
        self.sim.borrow_mut().handle(event);
    }
}

pub fn wire_input_handlers(w: &InputWiring) {
    wire_mouse(w);
    // Without touch listeners the browser keeps emulating mouse events.
    if w.sim.borrow().config().touch_enabled {
        wire_touch(w);
    }
}

fn listen<E: 'static>(target: &web::EventTarget, kind: &str, handler: impl FnMut(E) + 'static)
where
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        log::error!("[events] failed to listen for {}: {:?}", kind, e);
    }
    closure.forget();
}

fn wire_mouse(w: &InputWiring) {
    let target: &web::EventTarget = w.canvas.as_ref();

    let wm = w.clone();
    listen(target, "mousemove", move |ev: web::MouseEvent| {
        if let Some(p) = input::mouse_surface_px(&ev, &wm.canvas, wm.surface_size()) {
            wm.dispatch(InputEvent::PointerMove { x: p.x, y: p.y });
        }
    });

    let wl = w.clone();
    listen(target, "mouseleave", move |_ev: web::MouseEvent| {
        wl.dispatch(InputEvent::PointerLeave);
    });

    let wc = w.clone();
    listen(target, "click", move |ev: web::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(p) = input::mouse_surface_px(&ev, &wc.canvas, wc.surface_size()) {
            log::debug!("[click] ripple at ({:.0}, {:.0})", p.x, p.y);
            wc.dispatch(InputEvent::Press { x: p.x, y: p.y });
        }
    });
}

fn wire_touch(w: &InputWiring) {
    let target: &web::EventTarget = w.canvas.as_ref();

    let ws = w.clone();
    listen(target, "touchstart", move |ev: web::TouchEvent| {
        // Suppress the synthetic click that would spawn a second ripple.
        ev.prevent_default();
        if let Some(p) = input::touch_surface_px(&ev, &ws.canvas, ws.surface_size()) {
            ws.dispatch(InputEvent::TouchStart { x: p.x, y: p.y });
        }
    });

    let wm = w.clone();
    listen(target, "touchmove", move |ev: web::TouchEvent| {
        ev.prevent_default();
        if let Some(p) = input::touch_surface_px(&ev, &wm.canvas, wm.surface_size()) {
            wm.dispatch(InputEvent::TouchMove { x: p.x, y: p.y });
        }
    });

    let we = w.clone();
    listen(target, "touchend", move |_ev: web::TouchEvent| {
        we.dispatch(InputEvent::TouchEnd);
    });
    let wx = w.clone();
    listen(target, "touchcancel", move |_ev: web::TouchEvent| {
        wx.dispatch(InputEvent::TouchEnd);
    });
}

/// Rebuild the population whenever the window changes size. A failed
/// rebuild keeps the previous heart on screen.
pub fn wire_resize(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let wr = w.clone();
    listen(window.as_ref(), "resize", move |_ev: web::Event| {
        let size = match dom::sync_canvas_size(&wr.canvas, &wr.ctx) {
            Ok(size) => size,
            Err(e) => {
                log::error!("[resize] {}", e);
                return;
            }
        };
        wr.layout.set(DVec2::new(size.width, size.height));
        if let Err(e) = wr.sim.borrow_mut().resize(size) {
            log::error!("[resize] {}", e);
        }
    });
}
