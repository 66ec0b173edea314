//! Conversion pipeline orchestrating the stages end-to-end.
//!
//! [`CurveTracer`] exposes a simple API: feed a grayscale image and get the
//! ordered equation list with per-stage diagnostics. Internally it runs
//! preprocessing (float conversion + optional blur), edge detection,
//! contour extraction, simplification, and segmentation/formatting, timing
//! each stage.
//!
//! Typical usage:
//! ```no_run
//! use curve_tracer::{CurveTracer, TracerParams};
//! use curve_tracer::image::ImageU8;
//!
//! # fn example(gray: ImageU8) {
//! let tracer = CurveTracer::new(TracerParams::default());
//! let report = tracer.process(gray);
//! println!("{} equations", report.equations.len());
//! # }
//! ```

mod params;

pub use params::TracerParams;

use crate::contours::trace_contours;
use crate::diagnostics::TraceDiagnostics;
use crate::edges::detect_edges;
use crate::equations::{format_segment, segment_polyline, Equation};
use crate::filters;
use crate::image::io::load_grayscale_image;
use crate::image::ImageU8;
use crate::mapping::CoordMap;
use crate::simplify::simplify_contours;
use log::debug;
use std::path::Path;
use std::time::Instant;

/// Result of one conversion run: the ordered equations plus diagnostics.
#[derive(Clone, Debug)]
pub struct TraceReport {
    pub equations: Vec<Equation>,
    pub diagnostics: TraceDiagnostics,
}

/// Pipeline runner owning the configured parameters.
pub struct CurveTracer {
    params: TracerParams,
}

impl CurveTracer {
    /// Create a tracer with the supplied parameters.
    pub fn new(params: TracerParams) -> Self {
        Self { params }
    }

    /// The parameters this tracer was built with.
    pub fn params(&self) -> &TracerParams {
        &self.params
    }

    /// Run the full pipeline on a grayscale image.
    pub fn process(&self, gray: ImageU8<'_>) -> TraceReport {
        let total_start = Instant::now();
        let (width, height) = (gray.w, gray.h);
        let mut diagnostics = TraceDiagnostics {
            width,
            height,
            ..TraceDiagnostics::default()
        };

        let stage_start = Instant::now();
        let mut level = filters::to_f32(gray);
        if let Some(filter) = self.params.blur_kernel.filter() {
            level = filters::apply(filter, &level);
        }
        diagnostics
            .timing
            .push("preprocess", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let edge_map = detect_edges(
            &level,
            self.params.edge_threshold_low,
            self.params.edge_threshold_high,
        );
        diagnostics.edge_pixels = edge_map.edge_count();
        diagnostics.timing.push("edges", elapsed_ms(stage_start));
        debug!(
            "detect_edges: {} edge pixels on {width}x{height}",
            diagnostics.edge_pixels
        );

        let stage_start = Instant::now();
        let mut contours = trace_contours(&edge_map);
        diagnostics.contours_traced = contours.len();
        if self.params.max_contours > 0 && contours.len() > self.params.max_contours {
            contours.truncate(self.params.max_contours);
        }
        diagnostics.contours_kept = contours.len();
        diagnostics.timing.push("contours", elapsed_ms(stage_start));
        debug!(
            "trace_contours: {} traced, {} kept",
            diagnostics.contours_traced, diagnostics.contours_kept
        );

        let stage_start = Instant::now();
        diagnostics.points_before = contours.iter().map(|c| c.len()).sum();
        let polylines = simplify_contours(
            &contours,
            self.params.accuracy_factor,
            self.params.min_tolerance_px,
            width.max(height),
        );
        diagnostics.polylines = polylines.len();
        diagnostics.points_after = polylines.iter().map(|p| p.len()).sum();
        diagnostics.timing.push("simplify", elapsed_ms(stage_start));
        debug!(
            "simplify: {} -> {} points across {} polylines",
            diagnostics.points_before, diagnostics.points_after, diagnostics.polylines
        );

        let stage_start = Instant::now();
        let map = CoordMap::new(self.params.map, width, height);
        let mut equations = Vec::new();
        for polyline in &polylines {
            let batch = segment_polyline(polyline, &map, self.params.min_segment_len);
            diagnostics.candidate_segments += batch.candidates;
            diagnostics.dropped_segments += batch.dropped;
            for segment in &batch.segments {
                equations.push(format_segment(segment, self.params.precision));
            }
        }
        diagnostics.equations = equations.len();
        diagnostics
            .timing
            .push("equations", elapsed_ms(stage_start));
        debug!(
            "equations: {} emitted, {} dropped of {} candidates",
            diagnostics.equations, diagnostics.dropped_segments, diagnostics.candidate_segments
        );

        diagnostics.timing.total_ms = elapsed_ms(total_start);
        TraceReport {
            equations,
            diagnostics,
        }
    }
}

/// Load an image from disk and convert it with the given parameters.
pub fn trace_file(path: &Path, params: &TracerParams) -> Result<TraceReport, String> {
    let gray = load_grayscale_image(path)?;
    let tracer = CurveTracer::new(params.clone());
    Ok(tracer.process(gray.as_view()))
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
