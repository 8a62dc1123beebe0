//! Anchor-based region tiling.
//!
//! A user draws one rectangle around a single cell ([`RectangleSelection`]).
//! The tiler then repeats that rectangle to the right and downward with a
//! constant pitch (anchor size plus a user offset per axis) until the image
//! border is reached:
//!
//! - a box is kept only when its center lies strictly inside the image;
//! - when the next box's center crosses the right border the tiler wraps to
//!   a new row at the anchor's x;
//! - when a row's center crosses the bottom border tiling stops.
//!
//! All rows have the same length by construction; the result shape is
//! `(rows, first_row_length)`. Offsets are usually tuned over several
//! previews, see [`PitchSession`].

mod params;
mod region;
mod selection;
mod session;

pub use params::{AnchorMode, TilerParams};
pub use region::{region_creator, GridTiler};
pub use selection::{PointerEvent, RectangleSelection};
pub use session::{PitchSession, SessionStep};
