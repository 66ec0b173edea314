use curve_tracer::edges::detect_edges;
use curve_tracer::filters::{self, BlurKernel};
use curve_tracer::image::io::{
    load_grayscale_image, save_binary_mask, save_grayscale_f32, write_json_file,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub blur_kernel: BlurKernel,
    #[serde(default)]
    pub edge: EdgeDetectorConfig,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EdgeDetectorConfig {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for EdgeDetectorConfig {
    fn default() -> Self {
        Self {
            low_threshold: 0.1,
            high_threshold: 0.3,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    #[serde(default)]
    pub blurred_image: Option<PathBuf>,
    pub edges_image: PathBuf,
    pub summary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

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
    let mut level = filters::to_f32(gray.as_view());
    if let Some(filter) = config.blur_kernel.filter() {
        level = filters::apply(filter, &level);
    }

    if let Some(path) = &config.output.blurred_image {
        save_grayscale_f32(&level, path)?;
    }

    let edge_map = detect_edges(
        &level,
        config.edge.low_threshold,
        config.edge.high_threshold,
    );
    let summary = EdgeDetectionSummary {
        width: edge_map.w,
        height: edge_map.h,
        blur_kernel: config.blur_kernel.into(),
        low_threshold: config.edge.low_threshold,
        high_threshold: config.edge.high_threshold,
        edge_count: edge_map.edge_count(),
    };

    save_binary_mask(
        &edge_map.mask,
        edge_map.w,
        edge_map.h,
        &config.output.edges_image,
    )?;
    write_json_file(&config.output.summary_json, &summary)?;

    println!(
        "Saved edge map ({} pixels) to {}",
        summary.edge_count,
        config.output.edges_image.display()
    );
    println!("Summary written to {}", config.output.summary_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: edge_map <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeDetectionSummary {
    width: usize,
    height: usize,
    blur_kernel: usize,
    low_threshold: f32,
    high_threshold: f32,
    edge_count: usize,
}
