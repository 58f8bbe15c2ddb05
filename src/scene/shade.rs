//! Phong-style lighting with optional soft shadows.

use glam::Vec3;

use super::field::map;
use super::march::{surface_normal, Hit, HIT_EPSILON};
use super::SceneInputs;
use crate::params::{SceneParams, ShadowParams};

/// Fixed directional light, toward the upper-left of the eye.
pub fn light_dir() -> Vec3 {
    Vec3::new(-1.0, 1.0, -1.0).normalize()
}

/// Penumbra factor in [0, 1] for a secondary ray from `point` toward the
/// light.
///
/// Sphere-traces toward the light tracking `min(sharpness * d / t)`; a
/// sample below the hit epsilon means the ray is fully occluded and the
/// factor is exactly 0.
pub fn soft_shadow(
    point: Vec3,
    light: Vec3,
    shadow: &ShadowParams,
    inputs: &SceneInputs,
    params: &SceneParams,
) -> f32 {
    let mut factor: f32 = 1.0;
    let mut t = shadow.min_t;
    for _ in 0..shadow.steps {
        if t > shadow.max_t {
            break;
        }
        let d = map(point + light * t, inputs, params).distance;
        if d < HIT_EPSILON {
            return 0.0;
        }
        factor = factor.min(shadow.sharpness * d / t);
        t += d;
    }
    factor.clamp(0.0, 1.0)
}

/// Background for rays that never converge.
pub fn background(inputs: &SceneInputs, params: &SceneParams) -> Vec3 {
    params.background_base + inputs.energy * params.background_gain
}

/// Light a converged hit. `ray_dir` is the unit primary ray direction.
pub fn shade(ray_dir: Vec3, hit: &Hit, inputs: &SceneInputs, params: &SceneParams) -> Vec3 {
    let normal = surface_normal(hit.point, inputs, params);
    let light = light_dir();

    let diffuse = light.dot(normal).max(0.0);

    // The half vector takes the ray direction as the view term without
    // negating it; the highlight placement depends on this.
    let half = (ray_dir + light).normalize();
    let specular = half.dot(normal).clamp(0.0, 1.0).powf(params.shininess);

    let diffuse_color = match params.frame_tint {
        Some(tint) if hit.id == params.frame_id => tint,
        _ => params.diffuse_color,
    };

    let mut color = (params.ambient_strength * params.ambient_color
        + diffuse * diffuse_color
        + specular * params.specular_color)
        * params.occlusion;

    if let Some(shadow) = &params.shadow {
        color *= soft_shadow(hit.point, light, shadow, inputs, params);
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_rest() -> SceneInputs {
        SceneInputs::default()
    }

    #[test]
    fn test_background_follows_energy() {
        let params = SceneParams::classic();
        assert_eq!(background(&at_rest(), &params), Vec3::new(0.1, 0.0, 0.1));

        let loud = SceneInputs {
            energy: 1.0,
            ..SceneInputs::default()
        };
        assert_eq!(background(&loud, &params), Vec3::new(0.9, 0.2, 0.5));
    }

    #[test]
    fn test_shadow_ray_through_sphere_is_fully_occluded() {
        // From behind the resting sphere straight through its center.
        let params = SceneParams::orbit();
        let shadow = params.shadow.unwrap();
        let start = -light_dir();
        let factor = soft_shadow(start, light_dir(), &shadow, &at_rest(), &params);
        assert_eq!(factor, 0.0);
    }

    #[test]
    fn test_grazing_shadow_ray_lands_in_penumbra() {
        // Offset the ray sideways so it clears the resting sphere
        // (radius 0.3) by 0.03 at closest approach.
        let params = SceneParams::orbit();
        let shadow = params.shadow.unwrap();
        let sideways = Vec3::new(1.0, 1.0, 0.0).normalize();
        let start = -light_dir() + sideways * 0.33;
        let factor = soft_shadow(start, light_dir(), &shadow, &at_rest(), &params);
        assert!(factor > 0.0, "grazing ray must not be fully occluded");
        assert!(factor < 1.0, "grazing ray must be attenuated");
    }

    #[test]
    fn test_diffuse_clamps_on_the_dark_side() {
        // A surface point facing away from the light gets ambient only;
        // the diffuse term clamps to zero instead of going negative.
        let params = SceneParams::classic();
        let point = -light_dir() * 0.05;
        let hit = Hit {
            distance: 3.0,
            point,
            id: 0,
        };
        let color = shade(Vec3::Z, &hit, &at_rest(), &params);
        let ambient_only =
            params.ambient_strength * params.ambient_color * params.occlusion;
        assert!((color - ambient_only).length() < 1e-4);
    }

    #[test]
    fn test_frame_hits_take_the_cool_tint() {
        // Same point, same lighting; only the reported surface id differs.
        // The point sits off the cage's corner diagonal so its shadow ray
        // reaches the light.
        let params = SceneParams::orbit();
        let sideways = Vec3::new(1.0, 1.0, 0.0).normalize();
        let point = light_dir() * 0.3 + sideways * 0.25;
        let as_sphere = Hit {
            distance: 1.0,
            point,
            id: 0,
        };
        let as_frame = Hit {
            distance: 1.0,
            point,
            id: params.frame_id,
        };
        let warm = shade(Vec3::Z, &as_sphere, &at_rest(), &params);
        let cool = shade(Vec3::Z, &as_frame, &at_rest(), &params);
        assert!(warm != cool);
    }
}
