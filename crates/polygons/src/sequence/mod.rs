//! Finite sequence of regular polygons with a shared circumradius.
//!
//! Purpose
//! - Present `Polygon(3, R), Polygon(4, R), ..., Polygon(max, R)` as an
//!   indexable, sliceable, iterable collection without storing any of them.
//! - Each access synthesizes fresh `Polygon` values (fresh caches).
//!
//! Index conventions
//! - Logical index `i` maps to edge count `i + 3`.
//! - Negative indices and slice bounds count from the end (see `index`).

mod index;
mod iter;

use std::fmt;

use crate::cfg::FIRST_EDGE_COUNT;
use crate::error::Result;
use crate::polygon::{validate_circumradius, validate_edge_count, Polygon};
use crate::scalar::Scalar;

pub use index::{SliceIndices, SliceSpec};
pub use iter::PolygonIter;

/// Read-only sequence of polygons with edge counts `3..=max_edge_count`.
///
/// Invariants:
/// - `max_edge_count >= 3`, so the sequence is never empty.
/// - `circumradius` is finite and `> 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonSequence {
    max_edge_count: u32,
    circumradius: f64,
}

impl PolygonSequence {
    pub fn new(max_edge_count: u32, circumradius: f64) -> Result<Self> {
        let max_edge_count = validate_edge_count(max_edge_count, "max_edge_count")?;
        let circumradius = validate_circumradius(circumradius)?;
        tracing::debug!(max_edge_count, circumradius, "polygon sequence created");
        Ok(Self {
            max_edge_count,
            circumradius,
        })
    }

    /// Build from loosely typed inputs; same kind/range rules as `Polygon::from_scalars`.
    pub fn from_scalars(
        max_edge_count: impl Into<Scalar>,
        circumradius: impl Into<Scalar>,
    ) -> Result<Self> {
        let max_edge_count = max_edge_count.into().to_edge_count("max_edge_count")?;
        let circumradius = circumradius.into().to_circumradius()?;
        Self::new(max_edge_count, circumradius)
    }

    #[inline]
    pub fn max_edge_count(&self) -> u32 {
        self.max_edge_count
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Number of polygons: `max_edge_count - 2`.
    #[inline]
    pub fn len(&self) -> usize {
        (self.max_edge_count - FIRST_EDGE_COUNT + 1) as usize
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn at(&self, position: usize) -> Polygon {
        Polygon::from_validated(FIRST_EDGE_COUNT + position as u32, self.circumradius)
    }

    /// Polygon at logical `index`; negative values count from the end.
    pub fn get(&self, index: isize) -> Result<Polygon> {
        let position = index::resolve_index(index, self.len())?;
        Ok(self.at(position))
    }

    /// Polygons selected by `spec`, in slice order.
    ///
    /// ```
    /// use polygons::{Polygon, PolygonSequence};
    /// let seq = PolygonSequence::new(20, 1.0).unwrap();
    /// let head = seq.slice(0..2).unwrap();
    /// assert_eq!(head, vec![Polygon::new(3, 1.0).unwrap(), Polygon::new(4, 1.0).unwrap()]);
    /// ```
    pub fn slice(&self, spec: impl Into<SliceSpec>) -> Result<Vec<Polygon>> {
        let indices = spec.into().indices(self.len())?;
        Ok(indices.iter().map(|i| self.at(i)).collect())
    }

    /// Polygon with the largest area-to-perimeter ratio.
    ///
    /// Scans in ascending edge count; the first maximum found wins ties.
    pub fn max_efficiency_polygon(&self) -> Polygon {
        let mut polys = self.iter();
        let mut best = self.at(0);
        let mut best_ratio = best.efficiency();
        polys.next();
        for p in polys {
            let ratio = p.efficiency();
            if ratio > best_ratio {
                best = p;
                best_ratio = ratio;
            }
        }
        tracing::debug!(
            edge_count = best.edge_count(),
            ratio = best_ratio,
            "max efficiency polygon"
        );
        best
    }

    /// Fresh iterator over all polygons in ascending edge count.
    pub fn iter(&self) -> PolygonIter {
        PolygonIter::new(FIRST_EDGE_COUNT, self.max_edge_count, self.circumradius)
    }
}

impl fmt::Display for PolygonSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolygonSequence(max_edge_count={}, circumradius={})",
            self.max_edge_count, self.circumradius
        )
    }
}

impl IntoIterator for &PolygonSequence {
    type Item = Polygon;
    type IntoIter = PolygonIter;

    fn into_iter(self) -> PolygonIter {
        self.iter()
    }
}

impl IntoIterator for PolygonSequence {
    type Item = Polygon;
    type IntoIter = PolygonIter;

    fn into_iter(self) -> PolygonIter {
        self.iter()
    }
}
