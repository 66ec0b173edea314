//! Grayscale conversion and separable blur.
//!
//! Level conversion maps 8-bit input to `ImageF32` in `[0, 1]`. The blur is
//! a separable normalized binomial filter applied horizontally then
//! vertically with clamped borders, selected by odd kernel size (0 disables
//! the blur entirely).

use crate::image::{ImageF32, ImageU8, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to
    /// be symmetric around its centre, but the implementation does not rely
    /// on it.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 3-tap binomial filter `[1, 2, 1] / 4`.
pub const BINOMIAL_3TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.25, 0.5, 0.25]);

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Normalised 7-tap Gaussian filter `[1, 6, 15, 20, 15, 6, 1] / 64`.
pub const GAUSSIAN_7TAP: StaticSeparableFilter = StaticSeparableFilter::new(&[
    0.015625, 0.09375, 0.234375, 0.3125, 0.234375, 0.09375, 0.015625,
]);

/// Blur kernel selection, configured by its odd size (0 disables the blur).
///
/// Deserializing from the numeric size means a config typo fails loudly
/// instead of silently selecting a neighbour kernel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum BlurKernel {
    None,
    Binomial3,
    #[default]
    Gaussian5,
    Gaussian7,
}

impl BlurKernel {
    /// The static filter backing this kernel, or `None` when blur is off.
    pub fn filter(&self) -> Option<&'static StaticSeparableFilter> {
        match self {
            BlurKernel::None => None,
            BlurKernel::Binomial3 => Some(&BINOMIAL_3TAP),
            BlurKernel::Gaussian5 => Some(&GAUSSIAN_5TAP),
            BlurKernel::Gaussian7 => Some(&GAUSSIAN_7TAP),
        }
    }
}

impl TryFrom<usize> for BlurKernel {
    type Error = String;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match size {
            0 => Ok(BlurKernel::None),
            3 => Ok(BlurKernel::Binomial3),
            5 => Ok(BlurKernel::Gaussian5),
            7 => Ok(BlurKernel::Gaussian7),
            other => Err(format!(
                "Unsupported blur kernel size {other} (expected 0, 3, 5 or 7)"
            )),
        }
    }
}

impl From<BlurKernel> for usize {
    fn from(kernel: BlurKernel) -> Self {
        match kernel {
            BlurKernel::None => 0,
            BlurKernel::Binomial3 => 3,
            BlurKernel::Gaussian5 => 5,
            BlurKernel::Gaussian7 => 7,
        }
    }
}

/// Convert an 8-bit grayscale view to a float image in `[0, 1]`.
pub fn to_f32(gray: ImageU8<'_>) -> ImageF32 {
    let mut out = ImageF32::new(gray.w, gray.h);
    for y in 0..gray.h {
        let src = gray.row(y);
        let dst = out.row_mut(y);
        for x in 0..gray.w {
            dst[x] = src[x] as f32 / 255.0;
        }
    }
    out
}

/// Apply a separable filter horizontally then vertically, clamping borders.
pub fn apply(filter: &dyn SeparableFilter, src: &ImageF32) -> ImageF32 {
    let taps = filter.taps();
    let radius = taps.len() / 2;
    let w = src.w;
    let h = src.h;
    if w == 0 || h == 0 || taps.is_empty() {
        return src.clone();
    }

    let mut horizontal = ImageF32::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horizontal.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = (x + k).saturating_sub(radius).min(w - 1);
                acc += src_row[sx] * tap;
            }
            *dst_px = acc;
        }
    }

    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sy = (y + k).saturating_sub(radius).min(h - 1);
                acc += horizontal.get(x, sy) * tap;
            }
            *dst_px = acc;
        }
    }
    out
}
