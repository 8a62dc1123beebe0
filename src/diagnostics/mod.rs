//! Serializable diagnostics for the grid stages.
//!
//! [`GridReport`] is what the demo binary writes out: the produced cells plus
//! the per-stage trace of whichever stage produced them.

pub mod lines;
pub mod report;
pub mod tiling;
pub mod timing;

pub use lines::LineStage;
pub use report::{GridReport, InputDescriptor, StageTrace};
pub use tiling::TilingStage;
pub use timing::{StageTiming, TimingBreakdown};
