//! Audio analysis configuration and constants.

/// Frequency snapshot configuration.
///
/// Models a WebAudio `AnalyserNode` byte spectrum: a short FFT, exponential
/// smoothing between frames, and a decibel window mapped onto `0..=255`.
/// The defaults are the AnalyserNode defaults, which the visuals were
/// tuned against.
#[derive(Debug, Clone)]
pub struct AnalyserConfig {
    /// Audio sample rate (Hz)
    pub sample_rate_hz: usize,

    /// FFT window size (must be a power of 2)
    /// 256 samples → 128 magnitude bins
    pub fft_size: usize,

    /// Exponential smoothing between consecutive spectra (0.0 = none,
    /// values near 1.0 = very slow response)
    pub smoothing: f32,

    /// Magnitude mapped to byte 0 (decibels)
    pub min_db: f32,

    /// Magnitude mapped to byte 255 (decibels)
    pub max_db: f32,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44100,
            fft_size: 256,
            smoothing: 0.8,
            min_db: -100.0,
            max_db: -30.0,
        }
    }
}

impl AnalyserConfig {
    /// Number of magnitude bins in a snapshot (half the FFT size)
    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Validate configuration (FFT size must be power of 2, etc.)
    pub fn validate(&self) -> Result<(), String> {
        if !self.fft_size.is_power_of_two() {
            return Err(format!(
                "FFT size must be power of 2, got {}",
                self.fft_size
            ));
        }
        if self.sample_rate_hz == 0 {
            return Err("Sample rate must be > 0".to_string());
        }
        if !(0.0..1.0).contains(&self.smoothing) {
            return Err(format!(
                "Smoothing must be in [0, 1), got {}",
                self.smoothing
            ));
        }
        if self.min_db >= self.max_db {
            return Err(format!(
                "Decibel window must be ascending, got [{}, {}]",
                self.min_db, self.max_db
            ));
        }
        Ok(())
    }
}

/// Audio constants (compile-time, match Glicol engine setup)
pub mod audio_constants {
    /// Audio block size (samples per buffer)
    /// 128 = 2.9ms @ 44.1kHz
    pub const BLOCK_SIZE: usize = 128;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bin_count(), 128);
    }

    #[test]
    fn test_validate_rejects_bad_fft_size() {
        let config = AnalyserConfig {
            fft_size: 100,
            ..AnalyserConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_db_window() {
        let config = AnalyserConfig {
            min_db: -30.0,
            max_db: -100.0,
            ..AnalyserConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
