#![cfg(target_arch = "wasm32")]
use heart_core::{Simulation, Variant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn selected_variant() -> Variant {
    match dom::query_param(constants::VARIANT_QUERY_PARAM) {
        Some(name) => name.parse().unwrap_or_else(|e| {
            log::warn!("{}; using {}", e, Variant::default());
            Variant::default()
        }),
        None => Variant::default(),
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let variant = selected_variant();
    log::info!("[heart] variant={}", variant);
    let size = dom::sync_canvas_size(&canvas, &ctx)?;
    let sim = Rc::new(RefCell::new(Simulation::from_entropy(variant.config(), size)?));

    let wiring = events::InputWiring {
        canvas,
        ctx: ctx.clone(),
        sim: sim.clone(),
        layout: input::LayoutSize::new(glam::DVec2::new(size.width, size.height)),
    };
    events::wire_input_handlers(&wiring);
    events::wire_resize(&wiring);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        sim,
        surface: canvas::CanvasSurface::new(ctx),
        stats: frame::FrameStats::default(),
    })));
    Ok(())
}
