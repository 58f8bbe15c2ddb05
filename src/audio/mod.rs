//! Audio playback and spectrum analysis.
//!
//! One cpal output stream plays either Glicol procedural synthesis or a
//! looping WAV file; the playback callback taps mono samples into a shared
//! buffer the frame loop reduces to a single energy scalar each draw.

mod analyser;
mod synthesis;
mod system;

// Re-export public types
pub use analyser::{spectral_energy, Analyser};
pub use system::{load_wav, AudioSystem};
