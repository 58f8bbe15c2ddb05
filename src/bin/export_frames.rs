//! Offline exporter: render the scene to PNG frames on the CPU, no window
//! or GPU required.
//!
//! The energy track comes from stepping a WAV file through the analyser in
//! real-time increments, so an exported sequence matches what the windowed
//! app would have shown for the same audio.

use clap::Parser;
use glam::Vec2;
use std::path::{Path, PathBuf};

use pulsecage::audio::{load_wav, Analyser};
use pulsecage::params::{AnalyserConfig, SceneParams};
use pulsecage::scene::{render_frame, SceneInputs};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "export_frames")]
#[command(about = "Offline CPU render of the scene to PNG frames", long_about = None)]
pub(crate) struct Args {
    /// Scene profile: classic (default), orbit
    #[arg(long, value_name = "PROFILE", default_value = "classic")]
    pub(crate) scene: String,

    /// WAV file driving the energy track (the scene rests without one)
    #[arg(long, value_name = "WAV")]
    pub(crate) audio: Option<PathBuf>,

    /// Length to render (seconds)
    #[arg(long, value_name = "SECONDS", default_value = "5")]
    pub(crate) seconds: f32,

    /// Frames per second
    #[arg(long, value_name = "FPS", default_value = "60")]
    pub(crate) fps: u32,

    /// Frame width (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "640")]
    pub(crate) width: u32,

    /// Frame height (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "360")]
    pub(crate) height: u32,

    /// Output directory (frames land in <DIR>/frames/)
    #[arg(long, value_name = "DIR", default_value = "export")]
    pub(crate) out: PathBuf,
}

pub(crate) fn validate_args(args: &Args) -> Result<(), String> {
    if args.fps == 0 {
        return Err("--fps must be >= 1".to_string());
    }
    if args.seconds <= 0.0 {
        return Err("--seconds must be > 0".to_string());
    }
    Ok(())
}

pub(crate) fn frame_count(seconds: f32, fps: u32) -> usize {
    ((seconds * fps as f32).ceil() as usize).max(1)
}

pub(crate) fn scene_by_name(name: &str) -> SceneParams {
    match name.to_lowercase().as_str() {
        "orbit" => SceneParams::orbit(),
        "classic" => SceneParams::classic(),
        other => {
            eprintln!("Warning: Unknown scene '{}', using classic", other);
            SceneParams::classic()
        }
    }
}

/// Per-frame energy from stepping the WAV through the analyser exactly as
/// the live playback tap would: the new samples since the previous frame,
/// then one refresh.
pub(crate) fn energy_track(path: &Path, frame_count: usize, fps: u32) -> Result<Vec<f32>, String> {
    let (frames, rate) = load_wav(path)?;
    // The live tap feeds the analyser the left channel only.
    let mono: Vec<f32> = frames.iter().map(|f| f[0]).collect();

    let config = AnalyserConfig {
        sample_rate_hz: rate as usize,
        ..AnalyserConfig::default()
    };
    let mut analyser = Analyser::new(config)?;

    let mut track = Vec::with_capacity(frame_count);
    let mut cursor = 0usize;
    for frame_idx in 0..frame_count {
        let t = (frame_idx + 1) as f32 / fps as f32;
        let end = ((t * rate as f32) as usize).min(mono.len());
        if end > cursor {
            analyser.push_samples(&mono[cursor..end]);
            analyser.refresh();
            cursor = end;
        }
        track.push(analyser.energy());
    }
    Ok(track)
}

fn run(args: &Args) -> Result<(), String> {
    validate_args(args)?;

    let params = scene_by_name(&args.scene);
    let frames = frame_count(args.seconds, args.fps);

    let energies = match &args.audio {
        Some(path) => {
            println!("Music: {}", path.display());
            energy_track(path, frames, args.fps)?
        }
        None => vec![0.0; frames],
    };

    let frames_dir = args.out.join("frames");
    std::fs::create_dir_all(&frames_dir)
        .map_err(|e| format!("Failed to create {}: {}", frames_dir.display(), e))?;

    println!(
        "Rendering {} frames at {}x{}...",
        frames, args.width, args.height
    );

    for (frame_idx, energy) in energies.iter().enumerate() {
        let inputs = SceneInputs {
            time_s: frame_idx as f32 / args.fps as f32,
            energy: *energy,
            orbit: Vec2::ZERO,
        };
        let pixels = render_frame(args.width, args.height, &inputs, &params);

        let frame_path = frames_dir.join(format!("frame_{:05}.png", frame_idx));
        image::save_buffer(
            &frame_path,
            &pixels,
            args.width,
            args.height,
            image::ColorType::Rgb8,
        )
        .map_err(|e| format!("Failed to save {}: {}", frame_path.display(), e))?;
    }

    println!(
        "Exported {} frames at {} fps to {}",
        frames,
        args.fps,
        frames_dir.display()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
