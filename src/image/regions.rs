//! Cut cell regions out of a grayscale image for recognition.
//!
//! A cell box is sliced like an array: rows `top..bottom`, columns
//! `left..right`, end-exclusive, after reordering the corners and clamping
//! them to the image. Small regions are then enlarged by an integer factor
//! with a cubic filter, which tends to help downstream OCR on thin digits.

use super::io::GrayImageU8;
use super::traits::ImageView;
use super::u8::ImageU8;
use crate::error::{GridError, Result};
use crate::types::CellBox;
use image::imageops::{self, FilterType};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Options for [`extract_regions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionOptions {
    /// Integer enlargement factor; `1` keeps the crop as is.
    pub upscale: u32,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self { upscale: 6 }
    }
}

/// Copy the pixels covered by `cell` into an owned buffer.
pub fn crop_cell(image: &ImageU8<'_>, cell: &CellBox) -> Result<GrayImageU8> {
    let b = cell.normalized();
    let clamp = |v: i32| v.max(0) as usize;
    let window = image
        .window(
            clamp(b.top_left.x),
            clamp(b.top_left.y),
            clamp(b.bottom_right.x),
            clamp(b.bottom_right.y),
        )
        .ok_or_else(|| {
            GridError::InvalidInput(format!(
                "cell {:?}-{:?} covers no pixels of the {}x{} image",
                cell.top_left,
                cell.bottom_right,
                image.width(),
                image.height()
            ))
        })?;

    let mut data = Vec::with_capacity(window.width() * window.height());
    for row in window.rows() {
        data.extend_from_slice(row);
    }
    GrayImageU8::new(window.width(), window.height(), data)
        .ok_or_else(|| GridError::InvalidInput("cropped buffer size mismatch".to_string()))
}

/// Enlarge by an integer `factor` with a Catmull-Rom (cubic) filter.
pub fn upscale(region: &GrayImageU8, factor: u32) -> Result<GrayImageU8> {
    if factor == 0 {
        return Err(GridError::InvalidInput("upscale factor must be >= 1".to_string()));
    }
    if factor == 1 {
        return Ok(region.clone());
    }
    let src = region
        .to_gray_image()
        .ok_or_else(|| GridError::InvalidInput("region buffer size mismatch".to_string()))?;
    let (w, h) = (src.width(), src.height());
    let (nw, nh) = w
        .checked_mul(factor)
        .zip(h.checked_mul(factor))
        .ok_or_else(|| GridError::InvalidInput(format!("upscaled size of {w}x{h} overflows")))?;
    let resized = imageops::resize(&src, nw, nh, FilterType::CatmullRom);
    Ok(GrayImageU8::from_gray_image(resized))
}

/// Crop and enlarge every cell, preserving the order of `cells`.
pub fn extract_regions(
    image: &ImageU8<'_>,
    cells: &[CellBox],
    options: RegionOptions,
) -> Result<Vec<GrayImageU8>> {
    cells
        .par_iter()
        .map(|cell| crop_cell(image, cell).and_then(|roi| upscale(&roi, options.upscale)))
        .collect()
}
