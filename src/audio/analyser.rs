//! Byte-spectrum analyser.
//!
//! Reduces live playback samples to the byte spectrum the scene constants
//! were tuned against (the WebAudio `AnalyserNode` shape): a short
//! Hann-windowed FFT, exponential smoothing per bin, then a decibel window
//! quantized onto `0..=255`.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::f32::consts::PI;
use std::sync::Arc;

use crate::params::AnalyserConfig;

/// Mean byte magnitude normalized to [0, 1].
///
/// All-zero bins give exactly 0.0, all-255 bins exactly 1.0, and the
/// result is monotonic in the bin sum.
pub fn spectral_energy(bins: &[u8]) -> f32 {
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32 / 255.0
}

/// Sliding-window spectrum analyser over the playback signal.
pub struct Analyser {
    config: AnalyserConfig,
    fft: Arc<dyn Fft<f32>>,

    /// Newest `fft_size` mono samples, oldest first
    window: Vec<f32>,

    /// Smoothed linear magnitude per bin
    smoothed: Vec<f32>,

    /// FFT workspace
    scratch: Vec<Complex<f32>>,

    /// Latest byte spectrum
    bins: Vec<u8>,
}

impl Analyser {
    pub fn new(config: AnalyserConfig) -> Result<Self, String> {
        config
            .validate()
            .map_err(|e| format!("Invalid analyser config: {}", e))?;

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(config.fft_size);

        Ok(Self {
            window: vec![0.0; config.fft_size],
            smoothed: vec![0.0; config.bin_count()],
            scratch: vec![Complex::new(0.0, 0.0); config.fft_size],
            bins: vec![0; config.bin_count()],
            fft,
            config,
        })
    }

    /// Feed mono playback samples; only the newest `fft_size` are kept.
    pub fn push_samples(&mut self, samples: &[f32]) {
        let n = self.window.len();
        if samples.len() >= n {
            self.window.copy_from_slice(&samples[samples.len() - n..]);
        } else {
            self.window.rotate_left(samples.len());
            let start = n - samples.len();
            self.window[start..].copy_from_slice(samples);
        }
    }

    /// Recompute the byte spectrum from the current window.
    pub fn refresh(&mut self) {
        let n = self.config.fft_size;
        for i in 0..n {
            self.scratch[i] = Complex::new(self.window[i] * hann_window(i, n), 0.0);
        }
        self.fft.process(&mut self.scratch);

        let scale = 2.0 / n as f32;
        let smoothing = self.config.smoothing;
        for i in 0..self.bins.len() {
            let magnitude = self.scratch[i].norm() * scale;
            self.smoothed[i] = smoothing * self.smoothed[i] + (1.0 - smoothing) * magnitude;
            self.bins[i] = magnitude_to_byte(self.smoothed[i], &self.config);
        }
    }

    /// Latest byte spectrum (one u8 per frequency bin)
    pub fn bins(&self) -> &[u8] {
        &self.bins
    }

    /// Energy scalar for the latest spectrum
    pub fn energy(&self) -> f32 {
        spectral_energy(&self.bins)
    }
}

/// Map a linear magnitude onto the configured decibel window as a byte
fn magnitude_to_byte(magnitude: f32, config: &AnalyserConfig) -> u8 {
    if magnitude <= 0.0 {
        return 0;
    }
    let db = 20.0 * magnitude.log10();
    let scaled = (db - config.min_db) / (config.max_db - config.min_db);
    (scaled.clamp(0.0, 1.0) * 255.0) as u8
}

/// Hann window function for FFT analysis
fn hann_window(index: usize, size: usize) -> f32 {
    0.5 * (1.0 - ((2.0 * PI * index as f32) / (size as f32 - 1.0)).cos())
}
