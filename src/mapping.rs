//! Affine mapping from pixel coordinates into the graph frame.
//!
//! The transform is a pure affine function with an exact closed-form
//! inverse: optional centering moves the origin to the image centre,
//! the optional vertical flip makes Y grow upward (pixel rows grow
//! downward), and a single uniform scale converts pixels to graph units.
//! Uniform scaling keeps the aspect ratio of the input.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Knobs describing the pixel-to-graph transform.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MapParams {
    /// Place the graph origin at the image centre instead of the top-left.
    pub center: bool,
    /// Flip the vertical axis so Y grows upward.
    pub flip_y: bool,
    /// Graph units per pixel.
    pub scale: f64,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            center: true,
            flip_y: true,
            scale: 1.0,
        }
    }
}

/// Affine pixel→graph transform for one image size.
#[derive(Clone, Debug)]
pub struct CoordMap {
    forward: Matrix3<f64>,
    inverse: Matrix3<f64>,
}

impl CoordMap {
    /// Build the transform for an image of `width × height` pixels.
    ///
    /// A non-positive scale degenerates the map, so it is clamped to a tiny
    /// positive value rather than producing NaNs downstream.
    pub fn new(params: MapParams, width: usize, height: usize) -> Self {
        let s = params.scale.max(f64::MIN_POSITIVE);
        let sy = if params.flip_y { -s } else { s };
        let (cx, cy) = if params.center {
            (width as f64 / 2.0, height as f64 / 2.0)
        } else {
            (0.0, 0.0)
        };

        let forward = Matrix3::new(
            s, 0.0, -s * cx, //
            0.0, sy, -sy * cy, //
            0.0, 0.0, 1.0,
        );
        let inverse = Matrix3::new(
            1.0 / s,
            0.0,
            cx,
            0.0,
            1.0 / sy,
            cy,
            0.0,
            0.0,
            1.0,
        );

        Self { forward, inverse }
    }

    /// Map a pixel point into graph coordinates.
    #[inline]
    pub fn map(&self, p: [f64; 2]) -> [f64; 2] {
        apply_affine(&self.forward, p)
    }

    /// Map a graph point back to pixel coordinates.
    #[inline]
    pub fn unmap(&self, p: [f64; 2]) -> [f64; 2] {
        apply_affine(&self.inverse, p)
    }
}

#[inline]
fn apply_affine(m: &Matrix3<f64>, p: [f64; 2]) -> [f64; 2] {
    let v = m * Vector3::new(p[0], p[1], 1.0);
    [v[0], v[1]]
}
