//! Audio-reactive raymarched scene: six pulsing spheres caged in a
//! wireframe box, animated by time, audio energy and pointer orbit.
//!
//! Everything in this module is pure. The same (point, inputs, profile)
//! triple always produces the same answer, so the GPU shader is a port of
//! this code and the test suite pins this code down as the reference.

mod cpu;
mod field;
mod march;
mod shade;

pub use cpu::{pixel_ray, render_frame};
pub use field::{map, DistanceSample};
pub use march::{march, surface_normal, Hit, EYE, FAR_PLANE, HIT_EPSILON, MAX_STEPS};
pub use shade::{background, light_dir, shade, soft_shadow};

use glam::Vec2;

/// Per-frame scene inputs, owned by the frame driver and rebuilt every draw.
///
/// Audio energy arrives from the analyser poll, orbit angles from pointer
/// drags. The evaluator itself holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneInputs {
    /// Seconds since startup (monotonic)
    pub time_s: f32,

    /// Mean normalized spectrum magnitude, 0..=1
    pub energy: f32,

    /// Accumulated pointer-drag rotation (radians); x spins the scene
    /// horizontally, y tilts it
    pub orbit: Vec2,
}
