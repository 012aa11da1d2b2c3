mod cli;
mod framepace;
mod gpu;
mod gui;

use std::sync::Arc;

use clap::Parser;
use dot_playground::{Bounds, Playground};
use framepace::Framepacer;
use glam::Vec2;
use gpu::GpuContext;
use gui::EguiIntegration;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Collect Arguments
    let args = cli::Args::parse();
    let playground = Playground::new(args.playground_config())?;

    // Setup Winit
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app_state = AppState {
        tokio_rt: tokio::runtime::Runtime::new()?,
        gfx: None,
        playground,
        framepace: Framepacer::new(),
        framerate: args.framerate,

        pointer: None,
        mouse_position: Vec2::ZERO,
        occluded: false,
        error: None,
    };

    event_loop.run_app(&mut app_state)?;

    match app_state.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct GfxState {
    window: Arc<Window>,
    gpu: GpuContext,
    egui: EguiIntegration,
}

/// What is currently holding a press on the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Mouse,
    Touch(u64),
}

struct AppState {
    tokio_rt: tokio::runtime::Runtime,
    gfx: Option<GfxState>,
    playground: Playground,
    framepace: Framepacer,
    framerate: Option<u32>,

    pointer: Option<Pointer>,
    mouse_position: Vec2,
    occluded: bool,
    error: Option<anyhow::Error>,
}

impl AppState {
    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<GfxState> {
        let attributes = Window::default_attributes().with_title("Dot Playground");
        let window = Arc::new(event_loop.create_window(attributes)?);
        let window_size = window.inner_size();

        let gpu = self.tokio_rt.block_on(GpuContext::new(window.clone()))?;
        let mut egui = EguiIntegration::new(&gpu.device, gpu.format());
        egui.resize(window_size.width, window_size.height);

        info!(
            "window {}x{}, surface format {:?}",
            window_size.width,
            window_size.height,
            gpu.format()
        );

        Ok(GfxState { window, gpu, egui })
    }

    fn press_start(&mut self, pointer: Pointer, position: Vec2) {
        if self.pointer.is_some() {
            return;
        }

        // Time spent idle before the press must not reach the spawn timer.
        self.framepace.reset();
        self.pointer = Some(pointer);
        self.playground.on_press_start(position);
    }

    fn drag(&mut self, pointer: Pointer, position: Vec2) {
        if self.pointer == Some(pointer) {
            self.playground.on_drag_update(position);
        }
    }

    fn press_end(&mut self, pointer: Pointer) {
        if self.pointer == Some(pointer) {
            self.pointer = None;
            self.playground.on_press_end();
        }
    }

    /// Touches that start on one of the egui windows belong to the UI.
    fn touch(&mut self, id: u64, phase: TouchPhase, position: Vec2, over_ui: bool) {
        let pointer = Pointer::Touch(id);

        match phase {
            TouchPhase::Started if over_ui => (),
            TouchPhase::Started => self.press_start(pointer, position),
            TouchPhase::Moved => self.drag(pointer, position),
            TouchPhase::Ended | TouchPhase::Cancelled => self.press_end(pointer),
        }
    }

    fn redraw(&mut self) {
        let Some(gfx) = &mut self.gfx else {
            return;
        };
        if self.occluded {
            return;
        }

        let frame = match gfx.gpu.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.gpu.reconfigure_surface();
                gfx.window.request_redraw();
                return;
            }
            Err(err) => {
                warn!("skipping frame: {err}");
                return;
            }
        };

        let elapsed = self.framepace.begin_frame();
        let size = gfx.window.inner_size();
        self.playground.on_timer(elapsed);
        self.playground
            .tick(elapsed, Bounds::new(size.width as f32, size.height as f32));

        let sprites = self.playground.snapshot();
        let stats = self.playground.stats();
        let framerate = self.framepace.framerate();
        let mut toggled = None;

        gfx.egui.run(|ctx| {
            gui::draw_dots(ctx, &sprites);
            toggled = gui::palette_window(ctx, self.playground.selection());
            gui::stats_window(ctx, stats, framerate);
        });

        let mut encoder = gfx
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let egui_commands = gfx.egui.pre_render(
            &gfx.gpu.device,
            &gfx.gpu.queue,
            &mut encoder,
            elapsed.as_secs_f32(),
        );
        gfx.egui.paint(&mut encoder, &view);

        gfx.gpu
            .queue
            .submit(egui_commands.into_iter().chain(Some(encoder.finish())));
        frame.present();

        if let Some(color) = toggled {
            self.playground.toggle_color(color);
            gfx.window.request_redraw();
        }

        // Keep frames coming while the dots move or a press feeds the spawn timer.
        if self.playground.clock_mut().take_redraw() || self.playground.is_pressed() {
            gfx.window.request_redraw();
        }

        self.framepace.end_frame(self.framerate);
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }

        match self.init_graphics(event_loop) {
            Ok(gfx) => {
                gfx.window.request_redraw();
                self.gfx = Some(gfx);
                self.framepace.reset();
            }
            Err(err) => {
                error!("failed to start: {err:#}");
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gfx) = &mut self.gfx else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                gfx.gpu.resize(new_size.width, new_size.height);
                gfx.egui.resize(new_size.width, new_size.height);
                gfx.window.request_redraw();
            }
            WindowEvent::Occluded(occluded) => {
                // Hidden windows get no frames and nothing is caught up afterwards.
                self.occluded = occluded;
                if !occluded {
                    self.framepace.reset();
                    gfx.window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }

                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Space) => {
                        self.playground.clock_mut().toggle_pause();
                    }
                    PhysicalKey::Code(KeyCode::KeyN) => {
                        self.playground.clock_mut().request_step();
                    }
                    PhysicalKey::Code(KeyCode::KeyC) => {
                        self.playground.clear();
                    }
                    PhysicalKey::Code(KeyCode::F11) => {
                        if gfx.window.fullscreen().is_none() {
                            gfx.window
                                .set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
                        } else {
                            gfx.window.set_fullscreen(None);
                        }
                    }
                    _ => (),
                }
                gfx.window.request_redraw();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                gfx.egui.mouse_event(self.mouse_position, state, button);
                gfx.window.request_redraw();

                match (state, button) {
                    (ElementState::Pressed, MouseButton::Left) if !gfx.egui.owns_pointer() => {
                        self.press_start(Pointer::Mouse, self.mouse_position);
                    }
                    (ElementState::Released, MouseButton::Left) => {
                        self.press_end(Pointer::Mouse);
                    }
                    _ => (),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                gfx.egui.mouse_motion(position);
                gfx.window.request_redraw();

                self.mouse_position = position;
                self.drag(Pointer::Mouse, position);
            }
            WindowEvent::Touch(touch) => {
                let position = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                let over_ui = gfx.egui.owns_pointer() || gfx.egui.covers(position);
                gfx.egui.touch_event(touch.phase, position);
                gfx.window.request_redraw();

                self.touch(touch.id, touch.phase, position, over_ui);
            }

            _ => (),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.playground.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use dot_playground::PlaygroundConfig;

    use super::*;

    fn app() -> AppState {
        let config = PlaygroundConfig {
            seed: Some(7),
            ..Default::default()
        };

        AppState {
            tokio_rt: tokio::runtime::Runtime::new().expect("runtime"),
            gfx: None,
            playground: Playground::new(config).expect("default config is valid"),
            framepace: Framepacer::new(),
            framerate: None,
            pointer: None,
            mouse_position: Vec2::ZERO,
            occluded: false,
            error: None,
        }
    }

    #[test]
    fn touch_over_ui_does_not_press() {
        let mut app = app();
        let position = Vec2::new(20.0, 20.0);

        app.touch(1, TouchPhase::Started, position, true);
        app.touch(1, TouchPhase::Moved, position, true);

        assert!(app.pointer.is_none());
        assert!(!app.playground.is_pressed());
        assert!(app.playground.store().is_empty());
    }

    #[test]
    fn touch_on_playground_presses_and_drags() {
        let mut app = app();
        let position = Vec2::new(200.0, 200.0);

        app.touch(3, TouchPhase::Started, position, false);
        assert!(app.playground.is_pressed());

        app.touch(3, TouchPhase::Moved, position, false);
        assert_eq!(app.playground.store().len(), 1);

        app.touch(3, TouchPhase::Ended, position, false);
        assert!(!app.playground.is_pressed());
        assert!(app.pointer.is_none());
    }

    #[test]
    fn second_finger_is_ignored_while_pressed() {
        let mut app = app();

        app.touch(1, TouchPhase::Started, Vec2::new(100.0, 100.0), false);
        app.touch(2, TouchPhase::Started, Vec2::new(300.0, 300.0), false);
        app.touch(2, TouchPhase::Moved, Vec2::new(310.0, 310.0), false);

        assert_eq!(app.pointer, Some(Pointer::Touch(1)));
        assert!(app.playground.store().is_empty());
    }
}
