use std::sync::Arc;
use std::time::Instant;
use winit::window::Window;

use crate::camera::{CameraController, CameraMode, FlyKey};
use crate::error::VisError;
use crate::markers::MarkerPool;
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::settings::Settings;
use crate::ui::{Ui, UiResponse};

pub struct App {
    pub window: Arc<Window>,
    ui: Ui,
    scene: Scene,
    markers: MarkerPool,
    controller: CameraController,
    renderer: Renderer,
    egui_state: egui_winit::State,
    start: Instant,
}

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl App {
    pub async fn new(window: Arc<Window>, initial_input: Option<String>) -> Result<Self, VisError> {
        let renderer = Renderer::new(&window).await?;

        let egui_ctx = renderer.egui_context();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::viewport::ViewportId::ROOT,
            &*window,
            None,
            None,
            None,
        );

        let settings = Settings::load();
        // CLI input takes precedence over the persisted point list
        let input_text = initial_input.unwrap_or_else(|| settings.input.point_list.clone());
        let mut ui = Ui::new(settings, input_text);

        let mut scene = Scene::new();
        let mut markers = MarkerPool::new();
        if let Err(e) = markers.apply_text(&mut scene, &ui.input_text) {
            log::warn!("initial point list rejected: {e}");
            ui.parse_status = Some(e.to_string());
        }

        Ok(Self {
            window,
            ui,
            scene,
            markers,
            controller: CameraController::new(CameraMode::origin()),
            renderer,
            egui_state,
            start: Instant::now(),
        })
    }

    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> EventResponse {
        // Let egui handle the event first
        let egui_response = self.egui_state.on_window_event(&self.window, event);
        if egui_response.consumed {
            return EventResponse {
                repaint: egui_response.repaint,
                exit: false,
            };
        }

        let mut repaint = false;
        match event {
            winit::event::WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            winit::event::WindowEvent::KeyboardInput { event, .. } => {
                if event.logical_key
                    == winit::keyboard::Key::Named(winit::keyboard::NamedKey::Escape)
                {
                    return EventResponse {
                        repaint: false,
                        exit: true,
                    };
                }
                match event.state {
                    winit::event::ElementState::Pressed => {
                        // OS key repeat is not a state transition
                        if !event.repeat {
                            if let winit::keyboard::Key::Character(s) = &event.logical_key {
                                if let Some(key) = FlyKey::from_str(s.as_str()) {
                                    self.controller.on_key_down(key);
                                }
                            }
                        }
                    }
                    winit::event::ElementState::Released => {
                        // Any key release clears the fly key slot
                        self.controller.on_key_up();
                    }
                }
            }
            winit::event::WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
            }
            winit::event::WindowEvent::MouseInput { state, button, .. } => {
                if *button == winit::event::MouseButton::Left {
                    match state {
                        winit::event::ElementState::Pressed => self.controller.on_pointer_down(),
                        winit::event::ElementState::Released => self.controller.on_pointer_up(),
                    }
                }
            }
            winit::event::WindowEvent::CursorMoved { position, .. } => {
                let size = self.window.inner_size();
                // A mid-drag sample updates the pose immediately so feedback
                // does not wait for the next frame tick
                repaint = self.controller.on_pointer_move(
                    position.x as f32,
                    position.y as f32,
                    size.width as f32,
                    size.height as f32,
                );
            }
            winit::event::WindowEvent::Touch(touch) => {
                let size = self.window.inner_size();
                match touch.phase {
                    winit::event::TouchPhase::Started => self.controller.on_pointer_down(),
                    winit::event::TouchPhase::Moved => {
                        repaint = self.controller.on_pointer_move(
                            touch.location.x as f32,
                            touch.location.y as f32,
                            size.width as f32,
                            size.height as f32,
                        );
                    }
                    winit::event::TouchPhase::Ended | winit::event::TouchPhase::Cancelled => {
                        self.controller.on_pointer_up()
                    }
                }
            }
            winit::event::WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => -y * 40.0,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                self.controller.on_wheel(delta_y);
                repaint = true;
            }
            _ => {}
        }

        EventResponse {
            repaint,
            exit: false,
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();

        let mut ui_response = UiResponse::default();
        let full_output = egui_ctx.run(raw_input, |ctx| {
            ui_response = self.ui.show(ctx, self.controller.mode());
        });

        self.apply_ui_response(ui_response);

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);
        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [
                self.window.inner_size().width,
                self.window.inner_size().height,
            ],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        self.controller.update(self.start.elapsed().as_secs_f32());

        self.renderer.render(
            &self.scene,
            self.controller.eye(),
            self.controller.target(),
            self.ui.settings.display.show_grid,
            self.ui.settings.display.far_plane,
            paint_jobs,
            full_output.textures_delta,
            screen_descriptor,
        )
    }

    fn apply_ui_response(&mut self, response: UiResponse) {
        if response.text_edited {
            match self.markers.apply_text(&mut self.scene, &self.ui.input_text) {
                Ok(()) => self.ui.parse_status = None,
                Err(e) => {
                    // Previous valid markers stay on screen
                    log::warn!("point list rejected: {e}");
                    self.ui.parse_status = Some(e.to_string());
                }
            }
        }
        if response.reset_points {
            self.markers.reset(&mut self.scene);
            self.ui.input_text.clear();
            self.ui.parse_status = None;
        }
        if response.save_input {
            self.ui.settings.input.point_list = self.ui.input_text.clone();
            self.ui.settings.input.save();
        }
        if let Some(mode) = response.switch_mode {
            self.controller.reset(mode);
        } else if response.reset_camera {
            let mode = if self.controller.mode().is_free() {
                CameraMode::free()
            } else {
                CameraMode::origin()
            };
            self.controller.reset(mode);
        }
    }
}
