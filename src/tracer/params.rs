//! Parameter types configuring the conversion pipeline.
//!
//! Every knob the pipeline reads lives here, with serde defaults so a
//! config file only needs to name the fields it changes. Defaults favour
//! moderately busy photographs; for line art, raise the thresholds and
//! lower the accuracy factor.

use crate::filters::BlurKernel;
use crate::mapping::MapParams;
use serde::{Deserialize, Serialize};

/// Pipeline-wide parameters controlling the conversion stages.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerParams {
    /// Simplification aggressiveness: tolerance is
    /// `accuracy_factor × arc_length / max(width, height)` pixels.
    /// Lower keeps more points and emits more equations.
    pub accuracy_factor: f64,
    /// Floor for the simplification tolerance in pixels.
    pub min_tolerance_px: f64,
    /// Pixel-to-graph transform (centering, vertical flip, scale).
    pub map: MapParams,
    /// Maximum number of contours converted, in traversal order.
    /// `0` disables the cap.
    pub max_contours: usize,
    /// Minimum segment length in mapped units; shorter candidates are
    /// silently dropped.
    pub min_segment_len: f64,
    /// Decimal digits in the formatted equations.
    pub precision: usize,
    /// Pre-detection blur kernel, by size (0, 3, 5 or 7).
    pub blur_kernel: BlurKernel,
    /// Hysteresis low threshold on the gradient-magnitude scale of
    /// `[0, 1]` intensities.
    pub edge_threshold_low: f32,
    /// Hysteresis high threshold; seeds must reach this magnitude.
    pub edge_threshold_high: f32,
}

impl Default for TracerParams {
    fn default() -> Self {
        Self {
            accuracy_factor: 0.004,
            min_tolerance_px: 1.0,
            map: MapParams::default(),
            max_contours: 200,
            min_segment_len: 0.01,
            precision: 4,
            blur_kernel: BlurKernel::default(),
            edge_threshold_low: 0.1,
            edge_threshold_high: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let params: TracerParams = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(params.max_contours, 200);
        assert_eq!(params.precision, 4);
        assert_eq!(usize::from(params.blur_kernel), 5);
        assert!(params.map.center && params.map.flip_y);
    }

    #[test]
    fn numeric_blur_kernel_is_accepted() {
        let params: TracerParams =
            serde_json::from_str(r#"{"blur_kernel": 3}"#).expect("kernel size parses");
        assert_eq!(params.blur_kernel, BlurKernel::Binomial3);
    }

    #[test]
    fn invalid_blur_kernel_is_rejected() {
        let result: Result<TracerParams, _> = serde_json::from_str(r#"{"blur_kernel": 4}"#);
        assert!(result.is_err());
    }
}
