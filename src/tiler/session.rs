//! Iterative pitch adjustment.
//!
//! The caller (a person or an automated search) proposes offsets until the
//! previewed grid covers every cell. Each proposal is a plain tiling call;
//! the session only remembers the last preview and decides when the loop is
//! over: a proposal whose offsets both truncate to zero ends the session once
//! at least one preview exists, and the result is that last preview. The very
//! first proposal always produces a preview, even with zero offsets.

use super::params::{AnchorMode, TilerParams};
use super::region::{validate_anchor, GridTiler};
use crate::error::Result;
use crate::lines::validate_dims;
use crate::types::{CellBox, GridCells};
use log::debug;

/// Outcome of one proposal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStep {
    /// Grid tiled with the proposed offsets; propose again to adjust.
    Preview(GridCells),
    /// Session is over; holds the last previewed grid.
    Finished(GridCells),
}

#[derive(Clone, Debug)]
pub struct PitchSession {
    anchor: CellBox,
    width: usize,
    height: usize,
    anchor_mode: AnchorMode,
    attempts: usize,
    offsets: [f32; 2],
    last: Option<GridCells>,
    finished: bool,
}

impl PitchSession {
    /// Start a session; image size and anchor are validated up front.
    pub fn new(
        anchor: CellBox,
        width: usize,
        height: usize,
        anchor_mode: AnchorMode,
    ) -> Result<Self> {
        validate_dims(width, height)?;
        validate_anchor(&anchor, width, height)?;
        Ok(Self {
            anchor,
            width,
            height,
            anchor_mode,
            attempts: 0,
            offsets: [0.0, 0.0],
            last: None,
            finished: false,
        })
    }

    /// Number of previews produced so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Offsets of the last preview.
    pub fn offsets(&self) -> [f32; 2] {
        self.offsets
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn last_preview(&self) -> Option<&GridCells> {
        self.last.as_ref()
    }

    /// Propose offsets. A failed preview leaves the session unchanged.
    pub fn propose(&mut self, x_offset: f32, y_offset: f32) -> Result<SessionStep> {
        if let (true, Some(last)) = (self.finished, &self.last) {
            return Ok(SessionStep::Finished(last.clone()));
        }
        let confirm = x_offset.trunc() == 0.0 && y_offset.trunc() == 0.0;
        if confirm && self.attempts > 0 {
            if let Some(last) = &self.last {
                self.finished = true;
                debug!(
                    "PitchSession finished after {} previews, offsets={:?}, cells={}",
                    self.attempts,
                    self.offsets,
                    last.len()
                );
                return Ok(SessionStep::Finished(last.clone()));
            }
        }

        let params = TilerParams {
            x_offset,
            y_offset,
            anchor_mode: self.anchor_mode,
        };
        let cells = GridTiler::new(params).tile(self.anchor, self.width, self.height)?;
        self.attempts += 1;
        self.offsets = [x_offset, y_offset];
        self.last = Some(cells.clone());
        debug!(
            "PitchSession preview #{} offsets=({x_offset}, {y_offset}) cells={} shape={}x{}",
            self.attempts,
            cells.len(),
            cells.shape.rows,
            cells.shape.cols
        );
        Ok(SessionStep::Preview(cells))
    }

    /// Consume the session, returning the last preview if it was confirmed.
    pub fn into_result(self) -> Option<GridCells> {
        if self.finished {
            self.last
        } else {
            None
        }
    }
}
