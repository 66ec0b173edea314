//! Segmentation, equation formatting and the output writer.
//!
//! A simplified polyline is mapped into graph space, cut into consecutive
//! segments (wrapping when the contour is closed), filtered against the
//! minimum mapped length, and rendered into one fixed-precision parametric
//! string per segment. The writer emits one equation per line, UTF-8,
//! overwriting any existing file.

pub mod format;
pub mod segment;

pub use format::{format_segment, Equation};
pub use segment::{segment_polyline, Segment, SegmentBatch};

use crate::image::io::ensure_parent_dir;
use std::fs;
use std::path::Path;

/// Write equations one per line, overwriting `path`.
///
/// An empty list produces an empty file. Errors carry the target path.
pub fn write_equations(path: &Path, equations: &[Equation]) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut contents = String::new();
    for eq in equations {
        contents.push_str(eq.as_str());
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_equation_per_line() {
        let dir = std::env::temp_dir().join("curve_tracer_eq_test");
        let path = dir.join("equations.txt");
        let eqs = vec![
            format_segment(
                &Segment {
                    p0: [0.0, 0.0],
                    p1: [1.0, 1.0],
                },
                4,
            ),
            format_segment(
                &Segment {
                    p0: [1.0, 1.0],
                    p1: [0.0, 2.0],
                },
                4,
            ),
        ];
        write_equations(&path, &eqs).expect("write");
        let contents = std::fs::read_to_string(&path).expect("read back");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], eqs[0].as_str());
        assert!(contents.ends_with('\n'));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn empty_list_truncates_existing_file() {
        let dir = std::env::temp_dir().join("curve_tracer_eq_empty");
        let path = dir.join("equations.txt");
        std::fs::create_dir_all(&dir).expect("mkdir");
        std::fs::write(&path, "stale\n").expect("seed");
        write_equations(&path, &[]).expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "");
        std::fs::remove_dir_all(&dir).ok();
    }
}
