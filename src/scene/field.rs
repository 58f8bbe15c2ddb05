//! Signed distance field for the sphere cage.

use glam::{Mat2, Vec2, Vec3};

use super::SceneInputs;
use crate::params::{SceneParams, SpinMode};

/// Distance to the nearest scene surface, plus which surface it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSample {
    /// Signed distance (negative inside a surface)
    pub distance: f32,

    /// `0..=5` for the spheres, `params.frame_id` for the box frame,
    /// `-1` when nothing was closer than the initial bound
    pub id: i32,
}

fn sd_sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

/// Box frame SDF (Inigo Quilez's exact formulation): the wireframe edges of
/// a cube with half extent `b`, with edge thickness `e`.
fn sd_box_frame(p: Vec3, b: f32, e: f32) -> f32 {
    fn edge(d: Vec3) -> f32 {
        d.max(Vec3::ZERO).length() + d.x.max(d.y.max(d.z)).min(0.0)
    }

    let p = p.abs() - Vec3::splat(b);
    let q = (p + Vec3::splat(e)).abs() - Vec3::splat(e);
    edge(Vec3::new(p.x, q.y, q.z))
        .min(edge(Vec3::new(q.x, p.y, q.z)))
        .min(edge(Vec3::new(q.x, q.y, p.z)))
}

/// Rigid whole-scene rotation, applied to the sample point per profile.
fn rotate_scene(point: Vec3, inputs: &SceneInputs, params: &SceneParams) -> Vec3 {
    let mut p = point;
    match params.spin {
        SpinMode::Tumble => {
            let spin = Mat2::from_angle(inputs.time_s * params.spin_speed);
            let yz = spin * Vec2::new(p.y, p.z);
            p.y = yz.x;
            p.z = yz.y;
            let xz = spin * Vec2::new(p.x, p.z);
            p.x = xz.x;
            p.z = xz.y;
        }
        SpinMode::Orbit => {
            let swing =
                Mat2::from_angle(inputs.time_s * params.spin_speed + inputs.orbit.x);
            let xz = swing * Vec2::new(p.x, p.z);
            p.x = xz.x;
            p.z = xz.y;
            let tilt = Mat2::from_angle(inputs.orbit.y);
            let yz = tilt * Vec2::new(p.y, p.z);
            p.y = yz.x;
            p.z = yz.y;
        }
    }
    p
}

/// Signed distance from `point` to the nearest scene surface.
///
/// The result is a true lower bound on the distance to every primitive
/// (each SDF is exact and `min` preserves the bound), which is what lets
/// the raymarcher step by the full returned distance. Ties go to the
/// earliest candidate: spheres in index order, then the frame.
pub fn map(point: Vec3, inputs: &SceneInputs, params: &SceneParams) -> DistanceSample {
    let p = rotate_scene(point, inputs, params);

    let offset = (inputs.energy * params.displacement_rate).sin();
    let centers = [
        Vec3::new(offset, 0.0, 0.0),
        Vec3::new(0.0, offset, 0.0),
        Vec3::new(0.0, -offset, 0.0),
        Vec3::new(-offset, 0.0, 0.0),
        Vec3::new(0.0, 0.0, offset),
        Vec3::new(0.0, 0.0, -offset),
    ];
    let radius = params.radius.radius(inputs.time_s, inputs.energy);

    let mut best = DistanceSample {
        distance: 1e3,
        id: -1,
    };
    for (i, center) in centers.iter().enumerate() {
        let d = sd_sphere(p - *center, radius);
        if d < best.distance {
            best = DistanceSample {
                distance: d,
                id: i as i32,
            };
        }
    }

    let frame = sd_box_frame(p, params.frame_extent, params.frame_thickness);
    if frame < best.distance {
        best = DistanceSample {
            distance: frame,
            id: params.frame_id,
        };
    }

    best
}
