//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! Canny-style thinning: for each pixel the two comparison neighbours are
//! chosen from the quantized gradient direction (4 bins) and the response is
//! suppressed unless it is at least as large as both. Border handling uses
//! clamping in gradient computation and ignores the outermost 1-pixel frame
//! here to avoid out-of-bounds checks in neighbour lookup.
use crate::edges::grad::Grad;
use crate::image::{ImageF32, ImageView, ImageViewMut};

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Thin the gradient magnitude to single-pixel ridges.
///
/// Returns an image holding the magnitude at directional maxima and zero
/// everywhere else. Thresholding is left to the hysteresis stage.
pub fn run_nms(grad: &Grad) -> ImageF32 {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let out_row = out.row_mut(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag <= 0.0 {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            // Strict against the earlier neighbour, non-strict against the
            // later one, so a two-pixel plateau keeps exactly one ridge pixel.
            if mag > neighbor1 && mag >= neighbor2 {
                out_row[x] = mag;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::grad::{image_gradients, GradientKernel};

    #[test]
    fn step_edge_thins_to_a_single_ridge() {
        let mut img = ImageF32::new(16, 16);
        for y in 0..16 {
            for x in 8..16 {
                img.set(x, y, 1.0);
            }
        }
        let grad = image_gradients(&img, GradientKernel::Scharr);
        let nms = run_nms(&grad);

        // interior rows keep a single directional maximum at the step
        for y in 2..14 {
            let survivors: Vec<usize> = (1..15).filter(|&x| nms.get(x, y) > 0.0).collect();
            assert_eq!(
                survivors.len(),
                1,
                "row {y}: expected a single ridge pixel, got {survivors:?}"
            );
            assert!(
                (7..=8).contains(&survivors[0]),
                "ridge strayed from the step: x={}",
                survivors[0]
            );
        }
    }
}
