mod common;

use common::synthetic_image::{filled_square_u8, two_squares_u8, uniform_u8};
use curve_tracer::image::ImageU8;
use curve_tracer::mapping::MapParams;
use curve_tracer::{CurveTracer, TracerParams};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn view(width: usize, height: usize, data: &[u8]) -> ImageU8<'_> {
    ImageU8 {
        w: width,
        h: height,
        stride: width,
        data,
    }
}

/// Parse `(x0 + dx t, y0 + dy t)` back into `(x0, dx, y0, dy)`.
fn parse_equation(eq: &str) -> (f64, f64, f64, f64) {
    let inner = eq
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or_else(|| panic!("unexpected equation shape: {eq}"));
    let mut halves = inner.split(", ");
    let mut parse_half = || {
        let half = halves.next().expect("two comma-separated components");
        let mut terms = half.split(" + ");
        let offset: f64 = terms
            .next()
            .expect("offset term")
            .parse()
            .expect("offset parses");
        let slope: f64 = terms
            .next()
            .expect("slope term")
            .strip_suffix(" t")
            .expect("slope carries the parameter")
            .parse()
            .expect("slope parses");
        (offset, slope)
    };
    let (x0, dx) = parse_half();
    let (y0, dy) = parse_half();
    (x0, dx, y0, dy)
}

#[test]
fn uniform_image_produces_no_equations() {
    init_logging();
    let (w, h) = (128usize, 96usize);
    let data = uniform_u8(w, h, 127);

    let tracer = CurveTracer::new(TracerParams::default());
    let report = tracer.process(view(w, h, &data));

    assert!(report.equations.is_empty());
    assert_eq!(report.diagnostics.edge_pixels, 0);
    assert_eq!(report.diagnostics.contours_traced, 0);
}

#[test]
fn square_outline_yields_four_axis_aligned_segments() {
    init_logging();
    let (w, h) = (100usize, 100usize);
    let data = filled_square_u8(w, h, 10, 10, 90, 90);

    let params = TracerParams {
        min_tolerance_px: 3.0,
        min_segment_len: 0.5,
        map: MapParams {
            center: true,
            flip_y: true,
            scale: 0.1,
        },
        ..TracerParams::default()
    };
    let tracer = CurveTracer::new(params);
    let report = tracer.process(view(w, h, &data));

    assert_eq!(
        report.equations.len(),
        4,
        "expected one segment per square side: {:?}",
        report.equations
    );

    let mut horizontal = 0;
    let mut vertical = 0;
    for eq in &report.equations {
        let (x0, dx, y0, dy) = parse_equation(eq.as_str());
        let len = (dx * dx + dy * dy).sqrt();
        assert!(
            (7.0..=9.0).contains(&len),
            "side length should be about 8.0 graph units, got {len} in {eq}"
        );
        // centered map keeps everything within the half-extents
        for v in [x0, y0, x0 + dx, y0 + dy] {
            assert!(v.abs() <= 5.0, "point left the mapped frame: {v} in {eq}");
        }
        if dy.abs() < dx.abs() / 10.0 {
            horizontal += 1;
        } else if dx.abs() < dy.abs() / 10.0 {
            vertical += 1;
        }
    }
    assert_eq!(horizontal, 2, "two horizontal sides");
    assert_eq!(vertical, 2, "two vertical sides");
}

#[test]
fn emitted_equations_never_exceed_candidates() {
    init_logging();
    let (w, h) = (100usize, 100usize);
    let data = filled_square_u8(w, h, 10, 10, 90, 90);

    let tracer = CurveTracer::new(TracerParams::default());
    let report = tracer.process(view(w, h, &data));
    let diag = &report.diagnostics;

    assert_eq!(diag.equations, report.equations.len());
    assert_eq!(diag.equations + diag.dropped_segments, diag.candidate_segments);
    assert!(diag.equations <= diag.candidate_segments);
    assert!(diag.points_after <= diag.points_before);
}

#[test]
fn every_emitted_segment_respects_the_minimum_length() {
    init_logging();
    let (w, h) = (120usize, 90usize);
    let data = two_squares_u8(w, h);

    let params = TracerParams {
        min_segment_len: 0.25,
        map: MapParams {
            center: true,
            flip_y: true,
            scale: 0.05,
        },
        ..TracerParams::default()
    };
    let tracer = CurveTracer::new(params.clone());
    let report = tracer.process(view(w, h, &data));

    assert!(!report.equations.is_empty());
    for eq in &report.equations {
        let (_, dx, _, dy) = parse_equation(eq.as_str());
        let len = (dx * dx + dy * dy).sqrt();
        // allow for the fixed-precision rounding of the printed deltas
        assert!(
            len >= params.min_segment_len - 1e-3,
            "segment below the configured minimum: {len} in {eq}"
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    init_logging();
    let (w, h) = (120usize, 90usize);
    let data = two_squares_u8(w, h);

    let tracer = CurveTracer::new(TracerParams::default());
    let first = tracer.process(view(w, h, &data));
    let second = tracer.process(view(w, h, &data));

    let a: Vec<&str> = first.equations.iter().map(|e| e.as_str()).collect();
    let b: Vec<&str> = second.equations.iter().map(|e| e.as_str()).collect();
    assert_eq!(a, b, "the pipeline must be deterministic");
}

#[test]
fn contour_cap_limits_the_output() {
    init_logging();
    let (w, h) = (120usize, 90usize);
    let data = two_squares_u8(w, h);

    let uncapped = CurveTracer::new(TracerParams::default()).process(view(w, h, &data));
    let capped = CurveTracer::new(TracerParams {
        max_contours: 1,
        ..TracerParams::default()
    })
    .process(view(w, h, &data));

    assert!(uncapped.diagnostics.contours_traced >= 2);
    assert_eq!(capped.diagnostics.contours_kept, 1);
    assert!(
        capped.equations.len() < uncapped.equations.len(),
        "capping contours must shrink the output ({} vs {})",
        capped.equations.len(),
        uncapped.equations.len()
    );
}
