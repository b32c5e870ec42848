//! Regular, strictly convex polygons and bounded sequences of them.
//!
//! Overview
//! - `Polygon`: value type parameterized by edge count and circumradius, with
//!   memoized derived properties (interior angle, edge length, apothem, area,
//!   perimeter) that are invalidated whenever either parameter changes.
//! - `PolygonSequence`: read-only, indexable, sliceable and restartable
//!   sequence of polygons with edge counts `3..=max_edge_count`, all sharing
//!   one circumradius. Elements are synthesized on demand.
//!
//! Errors are reported through `PolygonError`; nothing panics on bad input.

pub mod cfg;
pub mod error;
pub mod polygon;
pub mod scalar;
pub mod sequence;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{PolygonError, Result};
pub use polygon::Polygon;
pub use scalar::Scalar;
pub use sequence::{PolygonIter, PolygonSequence, SliceIndices, SliceSpec};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{PolygonError, Result};
    pub use crate::polygon::Polygon;
    pub use crate::scalar::Scalar;
    pub use crate::sequence::{PolygonIter, PolygonSequence, SliceSpec};
    pub use nalgebra::Vector2 as Vec2;
}
