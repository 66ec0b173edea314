//! Edge detection: image gradients, non-maximum suppression, hysteresis.
//!
//! The three stages compose into a Canny-class detector:
//!
//! - Gradient computation (Sobel/Scharr) returning `gx`, `gy` and magnitude.
//! - Non-maximum suppression along the quantized gradient direction,
//!   thinning responses to single-pixel ridges.
//! - Double-threshold hysteresis linking weak responses to strong seeds,
//!   producing the binary [`EdgeMap`].
//!
//! Thresholds are plain constants on the gradient-magnitude scale of `[0, 1]`
//! input intensities; nothing here adapts to image statistics.

pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use grad::{image_gradients, Grad, GradientKernel};
pub use hysteresis::{link_edges, EdgeMap};
pub use nms::run_nms;

use crate::image::ImageF32;

/// Run the full detector: gradients, NMS thinning, hysteresis linking.
pub fn detect_edges(l: &ImageF32, low_thresh: f32, high_thresh: f32) -> EdgeMap {
    let grad = image_gradients(l, GradientKernel::Scharr);
    let thinned = run_nms(&grad);
    link_edges(&thinned, low_thresh, high_thresh)
}
