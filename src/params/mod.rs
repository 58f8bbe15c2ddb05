//! Parameter definitions with documented units and semantics.
//!
//! All magic numbers from both scene profiles are extracted here with:
//! - Units (world units, seconds, radians)
//! - Documented ranges and meanings
//! - Type safety where possible

mod audio;
mod render;
mod scene;

// Re-export all types
pub use audio::{audio_constants, AnalyserConfig};
pub use render::{RecordingConfig, RenderConfig};
pub use scene::{
    RadiusResponse, SceneParams, ShadowParams, SpinMode, DRAG_SENSITIVITY_RAD_PER_PX,
};
