//! Polyline simplification via recursive point elimination (Ramer–Douglas–
//! Peucker), with the tolerance derived from the contour's arc length.
//!
//! Closed chains are rotated so the recursion anchors at the point farthest
//! from the centroid (an extreme point is always kept by RDP, so anchoring
//! there avoids pinning an arbitrary mid-side pixel), then simplified with
//! the first point duplicated at the end so the closing span participates in
//! the elimination.

use crate::contours::Contour;
use nalgebra::{Point2, Vector2};
use rayon::prelude::*;

/// Simplified point sequence approximating a contour within a tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<[f64; 2]>,
    pub closed: bool,
}

impl Polyline {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Simplification tolerance in pixels for one contour.
///
/// `accuracy_factor × arc_length / max(width, height)`, floored at
/// `min_tolerance_px`. A lower accuracy factor retains more points.
pub fn tolerance_for(
    contour: &Contour,
    accuracy_factor: f64,
    min_tolerance_px: f64,
    max_dim: usize,
) -> f64 {
    let normalized = accuracy_factor * contour.arc_length() / (max_dim.max(1) as f64);
    normalized.max(min_tolerance_px)
}

/// Simplify one contour. Returns `None` when fewer than 2 points survive.
pub fn simplify_contour(contour: &Contour, tolerance: f64) -> Option<Polyline> {
    if contour.points.len() < 2 {
        return None;
    }

    let mut points: Vec<[f64; 2]> = contour
        .points
        .iter()
        .map(|p| [p[0] as f64, p[1] as f64])
        .collect();

    let kept = if contour.closed {
        rotate_to_extreme(&mut points);
        points.push(points[0]);
        let mut kept = rdp(&points, tolerance);
        kept.pop();
        kept
    } else {
        rdp(&points, tolerance)
    };

    if kept.len() < 2 {
        return None;
    }
    let closed = contour.closed && kept.len() >= 3;
    Some(Polyline {
        points: kept,
        closed,
    })
}

/// Simplify every contour, dropping those reduced below 2 points.
///
/// Per-contour work is independent; the parallel map preserves input order,
/// so the output is deterministic.
pub fn simplify_contours(
    contours: &[Contour],
    accuracy_factor: f64,
    min_tolerance_px: f64,
    max_dim: usize,
) -> Vec<Polyline> {
    contours
        .par_iter()
        .filter_map(|contour| {
            let tolerance = tolerance_for(contour, accuracy_factor, min_tolerance_px, max_dim);
            simplify_contour(contour, tolerance)
        })
        .collect()
}

/// Rotate a closed chain so it starts at the point farthest from the
/// centroid. Ties break toward the lowest index, keeping the result
/// deterministic.
fn rotate_to_extreme(points: &mut Vec<[f64; 2]>) {
    let n = points.len();
    if n < 2 {
        return;
    }
    let inv = 1.0 / n as f64;
    let cx = points.iter().map(|p| p[0]).sum::<f64>() * inv;
    let cy = points.iter().map(|p| p[1]).sum::<f64>() * inv;

    let mut best = 0usize;
    let mut best_d2 = f64::NEG_INFINITY;
    for (i, p) in points.iter().enumerate() {
        let dx = p[0] - cx;
        let dy = p[1] - cy;
        let d2 = dx * dx + dy * dy;
        if d2 > best_d2 {
            best_d2 = d2;
            best = i;
        }
    }
    points.rotate_left(best);
}

/// Recursive point elimination with an explicit stack.
fn rdp(points: &[[f64; 2]], tolerance: f64) -> Vec<[f64; 2]> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0usize, n - 1)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }
        let mut max_dist = 0.0f64;
        let mut max_idx = start;
        for i in start + 1..end {
            let d = chord_distance(points[i], points[start], points[end]);
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }
        if max_dist > tolerance {
            keep[max_idx] = true;
            stack.push((start, max_idx));
            stack.push((max_idx, end));
        }
    }

    points
        .iter()
        .zip(&keep)
        .filter_map(|(p, &k)| k.then_some(*p))
        .collect()
}

/// Perpendicular distance from `p` to the chord `a..b`, falling back to the
/// point distance when the chord is degenerate.
fn chord_distance(p: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    let p = Point2::new(p[0], p[1]);
    let a = Point2::new(a[0], a[1]);
    let b = Point2::new(b[0], b[1]);
    let chord: Vector2<f64> = b - a;
    let len = chord.norm();
    if len <= f64::EPSILON {
        return (p - a).norm();
    }
    let offset: Vector2<f64> = p - a;
    (chord.x * offset.y - chord.y * offset.x).abs() / len
}
