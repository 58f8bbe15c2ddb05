//! Sphere-tracing raymarcher and normal estimation.

use glam::Vec3;

use super::field::map;
use super::SceneInputs;
use crate::params::SceneParams;

/// March iteration cap
pub const MAX_STEPS: u32 = 100;

/// Surface hit threshold (world units)
pub const HIT_EPSILON: f32 = 0.001;

/// Give-up travel distance (world units)
pub const FAR_PLANE: f32 = 100.0;

/// Central-difference offset for normal estimation (world units)
const NORMAL_EPSILON: f32 = 0.001;

/// Fixed eye position, shared by both profiles
pub const EYE: Vec3 = Vec3::new(0.0, 0.0, -3.0);

/// A converged raymarch
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Distance traveled along the ray (world units)
    pub distance: f32,

    /// Where the ray stopped
    pub point: Vec3,

    /// Surface id reported by the distance field
    pub id: i32,
}

/// Sphere-trace from `origin` along unit `direction`.
///
/// Each iteration steps by the sampled field distance, which never
/// overshoots because the field is a distance lower bound. Returns None
/// when the ray leaves the far plane or the step cap runs out without
/// converging; both count as background.
pub fn march(
    origin: Vec3,
    direction: Vec3,
    inputs: &SceneInputs,
    params: &SceneParams,
) -> Option<Hit> {
    let mut t = 0.0;
    for _ in 0..MAX_STEPS {
        let sample = map(origin + direction * t, inputs, params);
        t += sample.distance;
        if sample.distance < HIT_EPSILON {
            return Some(Hit {
                distance: t,
                point: origin + direction * t,
                id: sample.id,
            });
        }
        if t > FAR_PLANE {
            return None;
        }
    }
    None
}

/// Surface normal via central differences of the field along each axis.
pub fn surface_normal(point: Vec3, inputs: &SceneInputs, params: &SceneParams) -> Vec3 {
    let e = NORMAL_EPSILON;
    let dx = map(point + Vec3::new(e, 0.0, 0.0), inputs, params).distance
        - map(point - Vec3::new(e, 0.0, 0.0), inputs, params).distance;
    let dy = map(point + Vec3::new(0.0, e, 0.0), inputs, params).distance
        - map(point - Vec3::new(0.0, e, 0.0), inputs, params).distance;
    let dz = map(point + Vec3::new(0.0, 0.0, e), inputs, params).distance
        - map(point - Vec3::new(0.0, 0.0, e), inputs, params).distance;
    Vec3::new(dx, dy, dz).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_shot_converges_to_analytic_intersection() {
        // Eye to sphere surface along +z: 3.0 minus the resting radius.
        let inputs = SceneInputs::default();

        let params = SceneParams::classic();
        let hit = march(EYE, Vec3::Z, &inputs, &params).expect("ray aimed at sphere");
        assert!((hit.distance - 2.95).abs() < 1e-3);
        assert_eq!(hit.id, 0);

        let params = SceneParams::orbit();
        let hit = march(EYE, Vec3::Z, &inputs, &params).expect("ray aimed at sphere");
        assert!((hit.distance - 2.7).abs() < 1e-3);
        assert_eq!(hit.id, 0);
    }

    #[test]
    fn test_ray_away_from_scene_misses() {
        let inputs = SceneInputs::default();
        let params = SceneParams::classic();
        assert!(march(EYE, Vec3::Y, &inputs, &params).is_none());
        assert!(march(EYE, Vec3::NEG_Z, &inputs, &params).is_none());
    }

    #[test]
    fn test_march_from_inside_hits_immediately() {
        // A negative field sample terminates on the first step.
        let inputs = SceneInputs::default();
        let params = SceneParams::orbit();
        let hit = march(Vec3::ZERO, Vec3::Z, &inputs, &params).expect("started inside");
        assert!(hit.distance < 0.0);
        assert_eq!(hit.id, 0);
    }

    #[test]
    fn test_surface_normal_points_outward() {
        let inputs = SceneInputs::default();
        let params = SceneParams::classic();
        // On the eye-facing pole of the resting sphere.
        let n = surface_normal(Vec3::new(0.0, 0.0, -0.05), &inputs, &params);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!(n.dot(Vec3::NEG_Z) > 0.999);
    }
}
