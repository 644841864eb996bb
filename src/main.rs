//! Epicycler - Fourier square-wave epicycles
//!
//! A chain of rotating circles, one per odd harmonic, whose tip traces a
//! square-wave approximation onto a scrolling trail. Five controls adjust
//! speed, zoom, harmonic count, and the chain's anchor.

mod cli;
mod controls;
mod fourier;
mod params;
mod rendering;
mod scene;
mod view;

use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cli::Args;
use fourier::WaveSystem;
use params::{ControlRanges, RecordingConfig, RenderConfig};
use rendering::RenderSystem;
use scene::SceneBuffer;
use view::Canvas;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    wave: WaveSystem,
    scene: SceneBuffer,
    canvas: Canvas,

    // Configuration
    ranges: ControlRanges,
    render_config: RenderConfig,
    recording: Option<RecordingConfig>,

    // Frame counter (drives recording shutoff)
    frame_num: usize,
}

impl App {
    fn new(args: &Args) -> Self {
        let ranges = ControlRanges::default();
        let render_config = RenderConfig::default();
        let recording = args.create_recording_config();

        let wave = WaveSystem::new(args.initial_params(&ranges), args.trace);
        let max_vertices =
            render_config.max_scene_vertices(ranges.complexity_max + 1, args.trace);
        let scene = SceneBuffer::new(max_vertices);
        let canvas = Canvas::new(render_config.window_width, render_config.window_height);

        Self {
            window: None,
            render_system: None,
            wave,
            scene,
            canvas,
            ranges,
            render_config,
            recording,
            frame_num: 0,
        }
    }

    /// Run one tick → evaluate → tessellate → draw cycle
    fn render_frame(&mut self) {
        let Some(ref mut render_system) = self.render_system else {
            return;
        };

        self.wave.update();
        self.scene.build_frame(
            self.wave.segments(),
            self.wave.terminal(),
            self.wave.trace(),
            &self.render_config,
        );

        render_system.update_vertices(&self.scene.vertices);
        render_system.update_projection(self.canvas.projection());

        if let Err(e) = render_system.render(self.frame_num) {
            eprintln!("Render error: {:?}", e);
        }
        self.frame_num += 1;
    }

    /// True once the requested recording duration has been captured
    fn recording_done(&self) -> bool {
        self.recording
            .as_ref()
            .is_some_and(|config| self.frame_num >= config.total_frames())
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title("Epicycler - Fourier Square Wave")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        let max_vertices = self
            .render_config
            .max_scene_vertices(self.ranges.complexity_max + 1, self.wave.trace().capacity());

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            max_vertices as u32,
            self.recording.clone(),
        ))
        .unwrap();

        println!("\nEpicycler is running!");
        controls::print_bindings();

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.canvas.resize(size.width, size.height);
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                } else {
                    controls::apply_key(&mut self.wave, &self.ranges, code);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
                if self.recording_done() {
                    println!("Recording complete ({} frames)", self.frame_num);
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

fn main() {
    let args = Args::parse();

    println!("Epicycler - Fourier square-wave epicycle visualizer");
    if let Some(duration) = args.record {
        println!("Recording {} seconds to recording/frames\n", duration);
    }

    let mut app = App::new(&args);
    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
