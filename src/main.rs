//! Pulsecage - Audio-reactive raymarched sphere cage
//!
//! Six spheres pulse with the music inside a wireframe cube, sphere-traced
//! per pixel on the GPU. The orbit profile adds drag-to-rotate and soft
//! shadows.

use clap::Parser;
use glam::Vec2;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use pulsecage::audio::AudioSystem;
use pulsecage::cli::Args;
use pulsecage::params::{
    AnalyserConfig, RecordingConfig, RenderConfig, SceneParams, SpinMode,
    DRAG_SENSITIVITY_RAD_PER_PX,
};
use pulsecage::rendering::{RenderSystem, SceneUniforms};
use pulsecage::scene::SceneInputs;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Audio
    audio: Option<AudioSystem>,
    music: Option<PathBuf>,

    // Scene profile and per-frame inputs
    scene_params: SceneParams,
    orbit: Vec2,
    mouse_pressed: bool,
    last_cursor: (f64, f64),

    // Configuration
    render_config: RenderConfig,
    recording_config: Option<RecordingConfig>,

    // Time and frame tracking
    start_time: Instant,
    frame_count: usize,
}

impl App {
    fn new(args: &Args) -> Self {
        let scene_params = args.parse_scene_params();
        let render_config = args.render_config();
        let recording_config = args.create_recording_config();

        Self {
            window: None,
            render_system: None,
            audio: None,
            music: args.music.clone(),
            scene_params,
            orbit: Vec2::ZERO,
            mouse_pressed: false,
            last_cursor: (0.0, 0.0),
            render_config,
            recording_config,
            start_time: Instant::now(),
            frame_count: 0,
        }
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
            .with_title("Pulsecage - Audio-Reactive Sphere Cage")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        // Initialize rendering system
        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.scene_params,
            self.recording_config.clone(),
        ))
        .unwrap();

        // Initialize audio system
        let audio = AudioSystem::new(
            AnalyserConfig::default(),
            self.music.as_deref(),
            self.recording_config.as_ref(),
        )
        .unwrap();

        println!("\nPulsecage is running!");
        if self.scene_params.spin == SpinMode::Orbit {
            println!("Drag to orbit the cage");
        }
        println!("Press ESC to quit\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.audio = Some(audio);
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    let dx = (position.x - self.last_cursor.0) as f32;
                    let dy = (position.y - self.last_cursor.1) as f32;
                    self.orbit.x += dx * DRAG_SENSITIVITY_RAD_PER_PX;
                    self.orbit.y += dy * DRAG_SENSITIVITY_RAD_PER_PX;
                }
                self.last_cursor = (position.x, position.y);
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Render a single frame
    fn render_frame(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };
        let Some(audio) = self.audio.as_mut() else {
            return;
        };

        // Get current time
        let time_s = self.start_time.elapsed().as_secs_f32();

        // Drain the playback tap and get the current spectral energy
        let energy = audio.poll_energy();

        // Pack this frame's inputs for the shader
        let inputs = SceneInputs {
            time_s,
            energy,
            orbit: self.orbit,
        };
        let (width, height) = render_system.surface_size();
        let uniforms = SceneUniforms::new(width, height, &inputs, &self.scene_params);
        render_system.update_uniforms(&uniforms);

        match render_system.render(self.frame_count) {
            Ok(()) => {
                self.frame_count += 1;

                // Recording runs for a fixed frame count, then exits
                if let Some(ref recording) = self.recording_config {
                    if self.frame_count >= recording.total_frames() {
                        println!(
                            "Recording complete: {} frames in {}",
                            self.frame_count,
                            recording.frames_dir()
                        );
                        event_loop.exit();
                    }
                }
            }
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_system.surface_size();
                render_system.resize(width, height);
            }
            Err(e) => eprintln!("Render error: {:?}", e),
        }
    }
}

fn main() {
    let args = Args::parse();

    println!("Pulsecage - Audio-reactive raymarched sphere cage");
    println!("Initializing systems...\n");

    let mut app = App::new(&args);
    if let Some(ref recording) = app.recording_config {
        println!(
            "Recording {}s ({} frames at {}fps) to {}/",
            recording.duration_secs,
            recording.total_frames(),
            recording.fps,
            recording.output_dir
        );
    }

    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
