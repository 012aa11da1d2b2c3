use dot_playground::{selection::ColorSelection, DotColor, DotSprite, PlaygroundStats};
use glam::Vec2;

const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.05,
    a: 1.0,
};

const SWATCH_SIZE: f32 = 28.0;

pub struct EguiIntegration {
    pub ctx: egui::Context,
    raw_input: egui::RawInput,

    renderer: egui_wgpu::Renderer,
    clipped_shapes: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
}

impl EguiIntegration {
    pub fn new(device: &wgpu::Device, swapchain_format: wgpu::TextureFormat) -> Self {
        let renderer = egui_wgpu::Renderer::new(device, swapchain_format, None, 1);

        Self {
            ctx: egui::Context::default(),
            raw_input: egui::RawInput::default(),

            renderer,
            clipped_shapes: Vec::new(),
            textures_delta: egui::TexturesDelta::default(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.raw_input.screen_rect = Some(egui::Rect::from_min_size(
            Default::default(),
            egui::Vec2::new(width as f32, height as f32),
        ));
    }

    /// Whether the pointer is over one of our windows and belongs to egui.
    pub fn owns_pointer(&self) -> bool {
        self.ctx.is_pointer_over_area() || self.ctx.wants_pointer_input()
    }

    pub fn run<F: FnOnce(&egui::Context)>(&mut self, run_ui: F) {
        let raw_input = std::mem::take(&mut self.raw_input);
        self.ctx.begin_frame(raw_input);
        run_ui(&self.ctx);

        let output = self.ctx.end_frame();
        self.clipped_shapes = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        self.textures_delta = output.textures_delta;
    }

    pub fn pre_render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        delta_time: f32,
    ) -> Vec<wgpu::CommandBuffer> {
        self.raw_input.predicted_dt = delta_time;

        for (id, delta) in &self.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }

        let screen_descriptor = self.screen_descriptor();
        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &self.clipped_shapes,
            &screen_descriptor,
        )
    }

    /// Clears the frame to the background color and draws everything egui tessellated.
    pub fn paint(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let screen_descriptor = self.screen_descriptor();

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Dots"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer
                .render(&mut rpass, &self.clipped_shapes, &screen_descriptor);
        }

        for id in &self.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    pub fn mouse_event(
        &mut self,
        position: Vec2,
        state: winit::event::ElementState,
        button: winit::event::MouseButton,
    ) {
        let pressed = matches!(state, winit::event::ElementState::Pressed);
        let button = match button {
            winit::event::MouseButton::Left => egui::PointerButton::Primary,
            winit::event::MouseButton::Right => egui::PointerButton::Secondary,
            winit::event::MouseButton::Middle => egui::PointerButton::Middle,
            winit::event::MouseButton::Back => egui::PointerButton::Extra1,
            winit::event::MouseButton::Forward => egui::PointerButton::Extra2,
            winit::event::MouseButton::Other(_) => return,
        };

        self.raw_input.events.push(egui::Event::PointerButton {
            pos: egui::Pos2::new(position.x, position.y),
            button,
            pressed,
            modifiers: egui::Modifiers::default(),
        });
    }

    pub fn mouse_motion(&mut self, position: Vec2) {
        self.raw_input
            .events
            .push(egui::Event::PointerMoved(egui::Pos2::new(
                position.x, position.y,
            )));
    }

    pub fn touch_event(&mut self, phase: winit::event::TouchPhase, position: Vec2) {
        self.raw_input.events.extend(touch_events(phase, position));
    }

    /// Whether one of our windows was drawn under `position` last frame.
    pub fn covers(&self, position: Vec2) -> bool {
        self.ctx
            .layer_id_at(egui::Pos2::new(position.x, position.y))
            .is_some_and(|layer| layer.order != egui::Order::Background)
    }

    fn screen_descriptor(&self) -> egui_wgpu::ScreenDescriptor {
        let screen_rect = self.ctx.screen_rect();
        egui_wgpu::ScreenDescriptor {
            size_in_pixels: [screen_rect.width() as u32, screen_rect.height() as u32],
            pixels_per_point: self.ctx.pixels_per_point(),
        }
    }
}

/// A touch acts as the primary pointer button for egui.
fn touch_events(phase: winit::event::TouchPhase, position: Vec2) -> Vec<egui::Event> {
    use winit::event::TouchPhase;

    let pos = egui::Pos2::new(position.x, position.y);
    let button = |pressed| egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    };

    match phase {
        TouchPhase::Started => vec![egui::Event::PointerMoved(pos), button(true)],
        TouchPhase::Moved => vec![egui::Event::PointerMoved(pos)],
        TouchPhase::Ended => vec![button(false), egui::Event::PointerGone],
        TouchPhase::Cancelled => vec![egui::Event::PointerGone],
    }
}

fn color32(color: DotColor) -> egui::Color32 {
    let [r, g, b, a] = color.rgba();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Paints the dots as filled circles underneath every window.
pub fn draw_dots(ctx: &egui::Context, sprites: &[DotSprite]) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    for sprite in sprites {
        painter.circle_filled(
            egui::Pos2::new(sprite.position.x, sprite.position.y),
            sprite.radius,
            color32(sprite.color),
        );
    }
}

/// Selected colors are drawn as circles, the rest as squares.
/// Returns the color that was clicked this frame, if any.
pub fn palette_window(ctx: &egui::Context, selection: &ColorSelection) -> Option<DotColor> {
    let mut clicked = None;

    egui::Window::new("Palette")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for color in DotColor::PALETTE {
                    let size = egui::Vec2::splat(SWATCH_SIZE);
                    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

                    if selection.is_selected(color) {
                        ui.painter()
                            .circle_filled(rect.center(), rect.width() / 2.0, color32(color));
                    } else {
                        ui.painter()
                            .rect_filled(rect.shrink(3.0), 0.0, color32(color));
                    }

                    if response.on_hover_text(color.name()).clicked() {
                        clicked = Some(color);
                    }
                }
            });
        });

    clicked
}

pub fn stats_window(ctx: &egui::Context, stats: PlaygroundStats, framerate: f32) {
    egui::Window::new("Stats")
        .default_width(145.0)
        .show(ctx, |ui| {
            ui.label(format!("Dots {}", stats.dots));
            ui.label(format!("Frames {}", stats.frames));
            ui.label(format!("FPS {:.1}", framerate));
            if stats.paused {
                ui.colored_label(egui::Color32::YELLOW, "Paused [Space]");
            }
        });
}
