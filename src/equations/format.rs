use super::segment::Segment;
use serde::Serialize;
use std::fmt;

/// Formatted parametric equation `(x0 + dx t, y0 + dy t)` for `t ∈ [0, 1]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Equation(String);

impl Equation {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render one segment at the given number of decimal digits.
pub fn format_segment(segment: &Segment, precision: usize) -> Equation {
    let [x0, y0] = segment.p0;
    let [dx, dy] = segment.delta();
    Equation(format!(
        "({x0:.precision$} + {dx:.precision$} t, {y0:.precision$} + {dy:.precision$} t)"
    ))
}
