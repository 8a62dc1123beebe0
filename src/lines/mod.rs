//! Automatic grid detection from raw line segments.
//!
//! The external line detector hands over segments in pixel coordinates. This
//! module turns them into cell boxes in four steps:
//!
//! - Classification: a segment is vertical when its x extent is small
//!   relative to the image width (checked first), horizontal when its y
//!   extent is small relative to the height, and discarded otherwise. Each
//!   kept segment is reduced to the floor of its midpoint along the relevant
//!   axis.
//! - Dedup: near-duplicate coordinates collapse to the smallest member of
//!   their group ([`dedupe`]).
//! - Lattice: every horizontal line is intersected with every vertical line
//!   ([`intersect`], [`Lattice`]).
//! - Cells: boxes are read off the lattice with the diagonal pairing rule,
//!   row-major, together with the `(rows, cols)` cell counts.
//!
//! A lattice with fewer than two lines on an axis has no cells; that is a
//! valid, empty result rather than an error.

mod aggregator;
mod dedup;
mod intersect;
mod lattice;
mod params;
mod segment;

pub use aggregator::{detect_grid, ClassifiedLines, LineAggregator};
pub use dedup::dedupe;
pub use intersect::{intersect, PARALLEL_EPS};
pub use lattice::Lattice;
pub use params::LineAggregatorParams;
pub use segment::{LineSegment, Orientation};

pub(crate) use aggregator::validate_dims;
