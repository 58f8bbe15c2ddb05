//! Audio playback with a spectrum tap.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use glicol::Engine;
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::analyser::Analyser;
use super::synthesis::GLICOL_COMPOSITION;
use crate::params::{audio_constants::BLOCK_SIZE, AnalyserConfig, RecordingConfig};

/// Audio system: one output stream, a mono tap feeding the analyser, and
/// the cached energy scalar the frame loop reads.
pub struct AudioSystem {
    analyser: Analyser,

    /// Mono samples mirrored out of the playback callback
    tap: Arc<Mutex<Vec<f32>>>,

    /// Last computed energy, reused while no new samples arrive
    energy: f32,

    /// Audio output stream (kept alive)
    _stream: cpal::Stream,
}

impl AudioSystem {
    /// Create and start the audio system.
    ///
    /// Plays `music` in a loop when given, the built-in composition
    /// otherwise. With a recording config the played samples are mirrored
    /// into `audio.wav` next to the captured frames.
    pub fn new(
        analyser_config: AnalyserConfig,
        music: Option<&Path>,
        recording_config: Option<&RecordingConfig>,
    ) -> Result<Self, String> {
        let analyser = Analyser::new(analyser_config)?;

        // Setup audio output device
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or("No audio output device found")?;

        let config = device
            .default_output_config()
            .map_err(|e| format!("Failed to get audio config: {}", e))?;
        let sample_rate = config.sample_rate().0;

        println!(
            "Audio: {} @ {}Hz",
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            sample_rate
        );

        // Stereo block renderer: either the looping WAV or the Glicol engine
        let mut render_block = match music {
            Some(path) => wav_renderer(path, sample_rate)?,
            None => glicol_renderer(sample_rate)?,
        };

        // Create WAV mirror if recording
        let wav_writer: Option<Arc<Mutex<hound::WavWriter<std::io::BufWriter<std::fs::File>>>>> =
            recording_config.map(|config| {
                let spec = hound::WavSpec {
                    channels: 2,
                    sample_rate,
                    bits_per_sample: 32,
                    sample_format: hound::SampleFormat::Float,
                };
                let writer = hound::WavWriter::create(config.audio_path(), spec)
                    .expect("Failed to create WAV writer");
                Arc::new(Mutex::new(writer))
            });

        let tap = Arc::new(Mutex::new(Vec::<f32>::new()));
        let tap_clone = Arc::clone(&tap);

        // Build audio output stream
        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    render_block(data);

                    let mut tap = tap_clone.lock().unwrap();
                    for frame in data.chunks_exact(2) {
                        tap.push(frame[0]);

                        if let Some(ref writer) = wav_writer {
                            if let Ok(mut w) = writer.lock() {
                                let _ = w.write_sample(frame[0]);
                                let _ = w.write_sample(frame[1]);
                            }
                        }
                    }
                },
                |err| eprintln!("Audio stream error: {}", err),
                None,
            )
            .map_err(|e| format!("Failed to build audio stream: {}", e))?;

        stream
            .play()
            .map_err(|e| format!("Failed to start audio stream: {}", e))?;

        Ok(Self {
            analyser,
            tap,
            energy: 0.0,
            _stream: stream,
        })
    }

    /// Drain the playback tap and recompute the energy scalar.
    ///
    /// Called once per rendered frame. Returns the previous value when the
    /// callback produced no new samples since the last poll.
    pub fn poll_energy(&mut self) -> f32 {
        let drained = {
            let mut tap = self.tap.lock().unwrap();
            std::mem::take(&mut *tap)
        };
        if !drained.is_empty() {
            self.analyser.push_samples(&drained);
            self.analyser.refresh();
            self.energy = self.analyser.energy();
        }
        self.energy
    }
}

/// Stereo block renderer backed by the Glicol engine.
fn glicol_renderer(sample_rate: u32) -> Result<Box<dyn FnMut(&mut [f32]) + Send>, String> {
    let mut engine = Engine::<BLOCK_SIZE>::new();
    engine.set_sr(sample_rate as usize);
    engine.update_with_code(GLICOL_COMPOSITION);
    engine
        .update()
        .map_err(|e| format!("Glicol engine init failed: {:?}", e))?;

    Ok(Box::new(move |data: &mut [f32]| {
        let frames_needed = data.len() / 2; // Stereo frames
        let mut frame_idx = 0;

        // Generate as many blocks as it takes to fill the buffer
        while frame_idx < frames_needed {
            let (buffers, _) = engine.next_block(vec![]);
            let frames_to_copy = (frames_needed - frame_idx).min(BLOCK_SIZE);

            for i in 0..frames_to_copy {
                // Safety limiter: hard clip to ±0.5 to prevent ear damage
                let left = buffers[0][i].clamp(-0.5, 0.5);
                let right = buffers[1][i].clamp(-0.5, 0.5);

                let out_idx = (frame_idx + i) * 2;
                data[out_idx] = left;
                data[out_idx + 1] = right;
            }

            frame_idx += frames_to_copy;
        }
    }))
}

/// Stereo block renderer that loops a WAV file, stepped at the output rate.
fn wav_renderer(path: &Path, sample_rate: u32) -> Result<Box<dyn FnMut(&mut [f32]) + Send>, String> {
    let (frames, wav_rate) = load_wav(path)?;
    println!(
        "Music: {} ({} frames @ {}Hz, looping)",
        path.display(),
        frames.len(),
        wav_rate
    );

    // Nearest-sample stepping covers rate mismatches well enough here.
    let step = wav_rate as f64 / sample_rate as f64;
    let mut cursor = 0.0f64;

    Ok(Box::new(move |data: &mut [f32]| {
        for out in data.chunks_exact_mut(2) {
            let frame = frames[cursor as usize % frames.len()];
            out[0] = frame[0];
            out[1] = frame[1];
            cursor += step;
            if cursor as usize >= frames.len() {
                cursor -= frames.len() as f64;
            }
        }
    }))
}

/// Decode a whole WAV file to stereo f32 frames.
pub fn load_wav(path: &Path) -> Result<(Vec<[f32; 2]>, u32), String> {
    let mut reader =
        hound::WavReader::open(path).map_err(|e| format!("Failed to open WAV: {}", e))?;
    let spec = reader.spec();
    if spec.channels == 0 || spec.channels > 2 {
        return Err(format!("Unsupported channel count: {}", spec.channels));
    }

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| format!("Failed to read WAV samples: {}", e))?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()
                .map_err(|e| format!("Failed to read WAV samples: {}", e))?
        }
    };

    let frames: Vec<[f32; 2]> = if spec.channels == 1 {
        samples.iter().map(|&s| [s, s]).collect()
    } else {
        samples.chunks_exact(2).map(|c| [c[0], c[1]]).collect()
    };
    if frames.is_empty() {
        return Err("WAV file has no samples".to_string());
    }

    Ok((frames, spec.sample_rate))
}
