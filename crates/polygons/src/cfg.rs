//! Crate-wide constants.
//!
//! Policy
//! - Fixed constants rather than a runtime config; the geometry has no tunable
//!   tolerances (equality is exact).

/// Smallest edge count of a regular polygon (triangle).
pub const MIN_EDGE_COUNT: u32 = 3;

/// Edge count of the polygon at logical index 0 of a `PolygonSequence`.
pub const FIRST_EDGE_COUNT: u32 = MIN_EDGE_COUNT;

/// Number of fractional digits used when reports format derived values.
pub const DEFAULT_REPORT_PRECISION: usize = 6;
