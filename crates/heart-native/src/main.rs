use heart_core::{InputEvent, Simulation, SurfaceSize, Variant};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

mod input;
mod render;

use render::{GpuState, QuadBatch};

const VARIANT_ENV: &str = "HEART_VARIANT";

fn selected_variant() -> Variant {
    let requested = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(VARIANT_ENV).ok());
    match requested {
        Some(name) => name.parse().unwrap_or_else(|e| {
            log::warn!("{}; using {}", e, Variant::default());
            Variant::default()
        }),
        None => Variant::default(),
    }
}

fn logical_size(window: &winit::window::Window) -> anyhow::Result<SurfaceSize> {
    let size = window
        .inner_size()
        .to_logical::<f64>(window.scale_factor());
    Ok(SurfaceSize::new(size.width, size.height)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let variant = selected_variant();
    log::info!("[heart] variant={}", variant);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Particle Heart")
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 600.0))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut sim = Simulation::from_entropy(variant.config(), logical_size(&window)?)?;
    let mut batch = QuadBatch::default();
    let mut cursor: Option<glam::DVec2> = None;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                match logical_size(gpu.window) {
                    Ok(s) => {
                        if let Err(e) = sim.resize(s) {
                            log::error!("[resize] {}", e);
                        }
                    }
                    // Minimized windows report a zero size; keep the old heart.
                    Err(e) => log::debug!("[resize] skipped: {}", e),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = input::to_logical(position, gpu.window.scale_factor());
                cursor = Some(p);
                sim.handle(InputEvent::PointerMove { x: p.x, y: p.y });
            }
            WindowEvent::CursorLeft { .. } => {
                cursor = None;
                sim.handle(InputEvent::PointerLeave);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(ev) = input::mouse_press(state, button, cursor) {
                    sim.handle(ev);
                }
            }
            WindowEvent::Touch(t) => {
                let p = input::to_logical(t.location, gpu.window.scale_factor());
                sim.handle(input::touch(t.phase, p));
            }
            _ => {}
        },
        Event::AboutToWait => {
            sim.frame(&mut batch);
            match gpu.render(&batch) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::debug!("[gpu] frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
