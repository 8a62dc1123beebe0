//! Turning cell images into numbers.
//!
//! Character recognition itself is an external service behind
//! [`CellRecognizer`]. This module only parses its text output: a cell is a
//! whole number after trimming whitespace, anything else is a recognition
//! error recorded as `f64::INFINITY` so the matrix keeps its shape.

use crate::error::Result;
use crate::image::GrayImageU8;
use log::debug;
use serde::Serialize;

/// External classifier converting a pre-processed cell image to text.
pub trait CellRecognizer {
    fn recognize(&self, region: &GrayImageU8) -> Result<String>;
}

impl<F> CellRecognizer for F
where
    F: Fn(&GrayImageU8) -> Result<String>,
{
    fn recognize(&self, region: &GrayImageU8) -> Result<String> {
        self(region)
    }
}

/// Parse recognizer output; `None` when it is not a whole number.
pub fn parse_cell_value(text: &str) -> Option<f64> {
    text.trim().parse::<i64>().ok().map(|v| v as f64)
}

/// Values of all cells plus the number of unreadable ones.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionSummary {
    pub values: Vec<f64>,
    pub errors: usize,
}

/// Run `recognizer` over `regions` in order.
///
/// Unparseable text becomes `f64::INFINITY`; a failing recognizer call aborts.
pub fn recognize_cells<R: CellRecognizer + ?Sized>(
    recognizer: &R,
    regions: &[GrayImageU8],
) -> Result<RecognitionSummary> {
    let mut summary = RecognitionSummary {
        values: Vec::with_capacity(regions.len()),
        errors: 0,
    };
    for (i, region) in regions.iter().enumerate() {
        let text = recognizer.recognize(region)?;
        let value = parse_cell_value(&text).unwrap_or_else(|| {
            summary.errors += 1;
            f64::INFINITY
        });
        summary.values.push(value);
        debug!("recognized {}/{}: {:?} -> {}", i + 1, regions.len(), text, value);
    }
    Ok(summary)
}
