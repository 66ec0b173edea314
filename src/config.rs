//! Runtime configuration loaded from a JSON file.

use crate::tracer::TracerParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Output locations for one conversion run.
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Destination of the equation list (overwritten).
    pub equations: PathBuf,
    /// Optional JSON diagnostics report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    /// Optional directory for intermediate-stage images.
    #[serde(default)]
    pub debug_dir: Option<PathBuf>,
}

/// Full configuration for the `curve_tracer` binary.
#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    /// Input image path.
    pub input: PathBuf,
    pub output: OutputConfig,
    /// Pipeline parameters; every field is optional.
    #[serde(default)]
    pub tracer: TracerParams,
}

/// Read and parse a config file.
pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses() {
        let json = r#"{
            "input": "in.png",
            "output": { "equations": "out.txt" }
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).expect("minimal config");
        assert_eq!(config.input, PathBuf::from("in.png"));
        assert!(config.output.report_json.is_none());
        assert_eq!(config.tracer.max_contours, 200);
    }

    #[test]
    fn tracer_overrides_apply() {
        let json = r#"{
            "input": "in.png",
            "output": { "equations": "out.txt", "report_json": "report.json" },
            "tracer": {
                "accuracy_factor": 0.001,
                "map": { "scale": 0.02, "center": false },
                "edge_threshold_high": 0.5
            }
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).expect("config with overrides");
        assert!((config.tracer.accuracy_factor - 0.001).abs() < 1e-12);
        assert!(!config.tracer.map.center);
        assert!(config.tracer.map.flip_y, "unset fields keep their defaults");
        assert!((config.tracer.edge_threshold_high - 0.5).abs() < 1e-6);
    }
}
