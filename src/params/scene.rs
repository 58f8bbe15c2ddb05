//! Scene evaluator profiles.
//!
//! The two scene profiles (the auto-rotating `classic` scene and the
//! drag-to-orbit `orbit` scene) share one evaluator; everything that differs
//! between them lives in a `SceneParams` value. Constants are preserved
//! verbatim per profile, never averaged or unified.

use glam::Vec3;

/// Pointer-drag sensitivity (radians of orbit per pixel of cursor travel)
pub const DRAG_SENSITIVITY_RAD_PER_PX: f32 = 0.01;

/// Whole-scene rigid rotation scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinMode {
    /// Rotate the yz plane, then the xz plane, both by `time * spin_speed`.
    /// Ignores the pointer orbit angles.
    Tumble,

    /// Rotate the xz plane by `time * spin_speed + orbit.x`, then the yz
    /// plane by `orbit.y`, where `orbit` accumulates pointer drags.
    Orbit,
}

/// Audio-driven sphere radius response.
///
/// The two variants use structurally different formulas; both are kept
/// as written rather than folded into one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadiusResponse {
    /// `radius = base + energy * gain`
    Gain { base: f32, gain: f32 },

    /// `radius = base + sin(time * rate) * amplitude * energy`
    Swell { base: f32, amplitude: f32, rate: f32 },
}

impl RadiusResponse {
    /// Sphere radius for the current frame (world units)
    pub fn radius(&self, time_s: f32, energy: f32) -> f32 {
        match *self {
            RadiusResponse::Gain { base, gain } => base + energy * gain,
            RadiusResponse::Swell {
                base,
                amplitude,
                rate,
            } => base + (time_s * rate).sin() * amplitude * energy,
        }
    }

    /// Radius with no audio playing (used by tests and as a sanity anchor)
    pub fn base(&self) -> f32 {
        match *self {
            RadiusResponse::Gain { base, .. } => base,
            RadiusResponse::Swell { base, .. } => base,
        }
    }
}

/// Soft shadow march settings (penumbra approximation)
#[derive(Debug, Clone, Copy)]
pub struct ShadowParams {
    /// Secondary march iteration cap
    pub steps: u32,

    /// Penumbra sharpness `k` in `min(k * d / t)`; higher = harder edge
    pub sharpness: f32,

    /// March window start (world units, skips re-hitting the surface we left)
    pub min_t: f32,

    /// March window end (world units)
    pub max_t: f32,
}

/// Every constant one scene profile feeds the evaluator.
#[derive(Debug, Clone)]
pub struct SceneParams {
    /// Whole-scene rotation scheme
    pub spin: SpinMode,

    /// Rotation speed (radians per second)
    /// classic: 0.5, orbit: 0.3
    pub spin_speed: f32,

    /// Sphere center displacement is `sin(energy * displacement_rate)`
    /// along each axis
    /// classic: 10.0, orbit: 8.0
    pub displacement_rate: f32,

    /// Sphere radius response to audio
    pub radius: RadiusResponse,

    /// Box frame half extent (world units)
    pub frame_extent: f32,

    /// Box frame edge thickness (world units)
    pub frame_thickness: f32,

    /// Surface id reported for the frame (spheres are 0..=5)
    /// classic: 7 (6 is unused there), orbit: 6
    pub frame_id: i32,

    /// Ambient term strength (dimensionless)
    pub ambient_strength: f32,

    /// Occlusion factor multiplied into the summed lighting
    pub occlusion: f32,

    /// Ambient base color (linear RGB, components may exceed 1.0)
    pub ambient_color: Vec3,

    /// Diffuse base color (linear RGB)
    pub diffuse_color: Vec3,

    /// Diffuse override when the hit surface is the frame
    /// (None = profile has no per-surface branch)
    pub frame_tint: Option<Vec3>,

    /// Specular base color (linear RGB)
    pub specular_color: Vec3,

    /// Phong specular exponent
    /// classic: 64.0, orbit: 32.0
    pub shininess: f32,

    /// Soft shadow pass (None = profile has no shadows)
    pub shadow: Option<ShadowParams>,

    /// Background color at energy 0 (linear RGB)
    pub background_base: Vec3,

    /// Background color slope per unit energy (linear RGB)
    pub background_gain: Vec3,
}

impl SceneParams {
    /// Auto-rotating profile: hard purple lighting, no shadows, no pointer
    /// control. Spheres sit nearly at a point until the music moves them.
    pub fn classic() -> Self {
        Self {
            spin: SpinMode::Tumble,
            spin_speed: 0.5,
            displacement_rate: 10.0,
            radius: RadiusResponse::Gain {
                base: 0.05,
                gain: 1.5,
            },
            frame_extent: 0.6,
            frame_thickness: 0.03,
            frame_id: 7,
            ambient_strength: 0.4,
            occlusion: 0.4,
            ambient_color: Vec3::new(10.0, 1.0, 25.0),
            diffuse_color: Vec3::new(10.0, 1.0, 25.0),
            frame_tint: None,
            specular_color: Vec3::ONE,
            shininess: 64.0,
            shadow: None,
            background_base: Vec3::new(0.1, 0.0, 0.1),
            background_gain: Vec3::new(0.8, 0.2, 0.4),
        }
    }

    /// Drag-to-orbit profile: warm spheres in a cool cage, soft shadows,
    /// pointer rotation on top of a slow automatic spin.
    pub fn orbit() -> Self {
        Self {
            spin: SpinMode::Orbit,
            spin_speed: 0.3,
            displacement_rate: 8.0,
            radius: RadiusResponse::Swell {
                base: 0.3,
                amplitude: 0.15,
                rate: 3.0,
            },
            frame_extent: 0.7,
            frame_thickness: 0.02,
            frame_id: 6,
            ambient_strength: 0.15,
            occlusion: 1.0,
            ambient_color: Vec3::new(0.5, 0.6, 0.9),
            diffuse_color: Vec3::new(1.0, 0.65, 0.3),
            frame_tint: Some(Vec3::new(0.35, 0.65, 1.0)),
            specular_color: Vec3::ONE,
            shininess: 32.0,
            shadow: Some(ShadowParams {
                steps: 40,
                sharpness: 8.0,
                min_t: 0.02,
                max_t: 10.0,
            }),
            background_base: Vec3::new(0.02, 0.03, 0.06),
            background_gain: Vec3::new(0.25, 0.35, 0.6),
        }
    }
}
