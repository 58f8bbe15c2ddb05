//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::params::{RecordingConfig, RenderConfig, SceneParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Pulsecage")]
#[command(about = "Audio-reactive raymarched sphere cage", long_about = None)]
pub struct Args {
    /// Scene profile: classic (default), orbit
    #[arg(long, value_name = "PROFILE", default_value = "classic")]
    pub scene: String,

    /// Play this WAV file in a loop instead of the built-in composition
    #[arg(long, value_name = "WAV")]
    pub music: Option<PathBuf>,

    /// Record the session to PNG frames plus audio (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Window width (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "1280")]
    pub width: u32,

    /// Window height (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "720")]
    pub height: u32,
}

impl Args {
    /// Parse scene profile from command-line arguments
    pub fn parse_scene_params(&self) -> SceneParams {
        match self.scene.to_lowercase().as_str() {
            "classic" => {
                println!("Scene: Classic (auto-rotating, hard purple light)");
                SceneParams::classic()
            }
            "orbit" => {
                println!("Scene: Orbit (drag to rotate, soft shadows)");
                SceneParams::orbit()
            }
            other => {
                eprintln!("Warning: Unknown scene '{}', using classic", other);
                SceneParams::classic()
            }
        }
    }

    /// Window configuration from the size flags
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
        }
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Option<RecordingConfig> {
        self.record.map(|duration| {
            let config = RecordingConfig::new(duration);

            // Create output directories
            std::fs::create_dir_all(config.frames_dir())
                .expect("Failed to create frames directory");
            std::fs::create_dir_all(&config.output_dir).expect("Failed to create output directory");

            config
        })
    }
}
