#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod tracer;

// “Expert” modules – still public, but considered unstable internals.
pub mod contours;
pub mod edges;
pub mod equations;
pub mod filters;
pub mod mapping;
pub mod simplify;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracer + results.
pub use crate::tracer::{trace_file, CurveTracer, TraceReport, TracerParams};

// Diagnostics returned alongside the equations.
pub use crate::diagnostics::TraceDiagnostics;

// The formatted output unit and its writer.
pub use crate::equations::{write_equations, Equation};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use curve_tracer::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let report = trace_file("photo.png".as_ref(), &TracerParams::default())?;
/// write_equations("equations.txt".as_ref(), &report.equations)?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::equations::write_equations;
    pub use crate::image::ImageU8;
    pub use crate::{trace_file, CurveTracer, TraceReport, TracerParams};
}
