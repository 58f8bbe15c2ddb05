//! CPU reference renderer.
//!
//! Runs the exact scene functions the GPU shader ports, one ray per pixel,
//! parallel across pixels. Used by the offline exporter and by tests that
//! want whole-frame behavior without a device.

use glam::{Vec2, Vec3};
use rayon::prelude::*;

use super::march::{march, EYE};
use super::shade::{background, shade};
use super::SceneInputs;
use crate::params::SceneParams;

/// Primary ray direction for the center of pixel (x, y), with y = 0 the top
/// image row. Matches the shader's mapping: uv spans the viewport with y up
/// and is scaled by the viewport height.
pub fn pixel_ray(x: u32, y: u32, width: u32, height: u32) -> Vec3 {
    let frag = Vec2::new(x as f32 + 0.5, (height - 1 - y) as f32 + 0.5);
    let resolution = Vec2::new(width as f32, height as f32);
    let uv = (frag * 2.0 - resolution) / resolution.y;
    Vec3::new(uv.x, uv.y, 1.0).normalize()
}

fn shade_pixel(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    inputs: &SceneInputs,
    params: &SceneParams,
) -> Vec3 {
    let direction = pixel_ray(x, y, width, height);
    match march(EYE, direction, inputs, params) {
        Some(hit) => shade(direction, &hit, inputs, params),
        None => background(inputs, params),
    }
}

/// Render one frame to tightly packed 8-bit RGB, top row first.
pub fn render_frame(
    width: u32,
    height: u32,
    inputs: &SceneInputs,
    params: &SceneParams,
) -> Vec<u8> {
    let mut data = vec![0u8; (width * height * 3) as usize];
    data.par_chunks_mut(3).enumerate().for_each(|(i, pixel)| {
        let x = i as u32 % width;
        let y = i as u32 / width;
        let color = shade_pixel(x, y, width, height, inputs, params);
        pixel[0] = (color.x.clamp(0.0, 1.0) * 255.0) as u8;
        pixel[1] = (color.y.clamp(0.0, 1.0) * 255.0) as u8;
        pixel[2] = (color.z.clamp(0.0, 1.0) * 255.0) as u8;
    });
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_looks_straight_ahead() {
        // Odd dimensions put a pixel center exactly on the optical axis.
        let ray = pixel_ray(1, 1, 3, 3);
        assert!((ray - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_top_left_pixel_looks_up_and_left() {
        let ray = pixel_ray(0, 0, 64, 64);
        assert!(ray.x < 0.0);
        assert!(ray.y > 0.0);
        assert!(ray.z > 0.0);
    }

    #[test]
    fn test_corner_pixels_see_the_background() {
        // Corner rays clear the cage entirely at rest, so the corners must
        // be the exact quantized background color.
        let params = SceneParams::classic();
        let inputs = SceneInputs::default();
        let frame = render_frame(63, 63, &inputs, &params);
        let expected = [
            (0.1f32 * 255.0) as u8,
            0,
            (0.1f32 * 255.0) as u8,
        ];
        assert_eq!(&frame[0..3], &expected);
        let last = frame.len() - 3;
        assert_eq!(&frame[last..], &expected);
    }

    #[test]
    fn test_center_pixel_hits_geometry() {
        // Odd dimensions put the middle pixel dead on the resting sphere.
        let params = SceneParams::classic();
        let inputs = SceneInputs::default();
        let frame = render_frame(63, 63, &inputs, &params);
        let center = ((31 * 63 + 31) * 3) as usize;
        let background = [(0.1f32 * 255.0) as u8, 0, (0.1f32 * 255.0) as u8];
        assert_ne!(&frame[center..center + 3], &background);
    }
}
