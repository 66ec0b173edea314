//! Per-run diagnostics: stage timings and pipeline counters.

use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one conversion run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Counters and timings collected while converting one image.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceDiagnostics {
    /// Input width in pixels.
    pub width: usize,
    /// Input height in pixels.
    pub height: usize,
    /// Edge pixels surviving hysteresis.
    pub edge_pixels: usize,
    /// Contours returned by the tracer before the cap.
    pub contours_traced: usize,
    /// Contours processed after applying the `max_contours` cap.
    pub contours_kept: usize,
    /// Polylines surviving simplification (≥ 2 points each).
    pub polylines: usize,
    /// Contour points entering simplification.
    pub points_before: usize,
    /// Polyline points after simplification.
    pub points_after: usize,
    /// Consecutive point pairs considered by segmentation.
    pub candidate_segments: usize,
    /// Candidates discarded as shorter than the minimum mapped length.
    pub dropped_segments: usize,
    /// Equations emitted.
    pub equations: usize,
    pub timing: TimingBreakdown,
}
