use std::path::Path;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

mod app;
mod camera;
mod error;
mod geometry;
mod markers;
mod renderer;
mod scene;
mod settings;
mod ui;

/// Name under which confy stores the settings files.
pub const CONFY_APP_NAME: &str = "pointvis";

struct AppHandler {
    app: Option<app::App>,
    initial_input: Option<String>,
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("PointVis - 3D Point Marker Viewer")
                .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 800.0));

            let window = event_loop.create_window(window_attrs).unwrap();
            let app = pollster::block_on(app::App::new(
                Arc::new(window),
                self.initial_input.take(),
            ))
            .unwrap();

            self.app = Some(app);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            if let Err(e) = app.render() {
                eprintln!("Render error: {:?}", e);
            }
            app.window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The argument is either a path to a point list file or an inline
    // JSON array of [x, y, z] triples
    let args: Vec<String> = std::env::args().collect();
    let initial_input = if args.len() > 1 {
        let arg = args[1].clone();
        if Path::new(&arg).exists() {
            Some(std::fs::read_to_string(&arg)?)
        } else {
            Some(arg)
        }
    } else {
        None
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = AppHandler {
        app: None,
        initial_input,
    };

    event_loop.run_app(&mut handler)?;

    Ok(())
}
