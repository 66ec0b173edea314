use curve_tracer::config::{load_config, RuntimeConfig};
use curve_tracer::equations::write_equations;
use curve_tracer::image::io::{
    load_grayscale_image, save_binary_mask, save_grayscale_f32, write_json_file, GrayImageU8,
};
use curve_tracer::tracer::TracerParams;
use curve_tracer::{CurveTracer, TraceReport};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let tracer = CurveTracer::new(config.tracer.clone());
    let report = tracer.process(gray.as_view());

    write_equations(&config.output.equations, &report.equations)?;
    print_text_summary(&config, &report);

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report.diagnostics)?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &gray, &config.tracer, &report)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: curve_tracer <config.json>".to_string()
}

fn print_text_summary(config: &RuntimeConfig, report: &TraceReport) {
    let diag = &report.diagnostics;
    println!("Conversion summary");
    println!("  input: {} ({}x{})", config.input.display(), diag.width, diag.height);
    println!("  edge pixels: {}", diag.edge_pixels);
    println!(
        "  contours: {} traced, {} kept",
        diag.contours_traced, diag.contours_kept
    );
    println!(
        "  simplification: {} -> {} points across {} polylines",
        diag.points_before, diag.points_after, diag.polylines
    );
    println!(
        "  segments: {} candidates, {} dropped",
        diag.candidate_segments, diag.dropped_segments
    );
    println!(
        "  equations: {} written to {}",
        diag.equations,
        config.output.equations.display()
    );

    let timing = &diag.timing;
    let mut line = String::from("  timings (ms):");
    for stage in &timing.stages {
        line.push_str(&format!(" {}={:.3}", stage.label, stage.elapsed_ms));
    }
    line.push_str(&format!(" total={:.3}", timing.total_ms));
    println!("{line}");
}

/// Re-run the raster stages to save the intermediates the report does not
/// carry.
fn save_debug_artifacts(
    dir: &Path,
    gray: &GrayImageU8,
    params: &TracerParams,
    report: &TraceReport,
) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create debug dir {}: {e}", dir.display()))?;

    write_json_file(&dir.join("diagnostics.json"), &report.diagnostics)?;

    let mut level = curve_tracer::filters::to_f32(gray.as_view());
    if let Some(filter) = params.blur_kernel.filter() {
        level = curve_tracer::filters::apply(filter, &level);
    }
    save_grayscale_f32(&level, &dir.join("blurred.png"))?;

    let edge_map = curve_tracer::edges::detect_edges(
        &level,
        params.edge_threshold_low,
        params.edge_threshold_high,
    );
    save_binary_mask(
        &edge_map.mask,
        edge_map.w,
        edge_map.h,
        &dir.join("edges.png"),
    )?;

    Ok(())
}
