//! Regular strictly convex polygon with memoized derived properties.
//!
//! Model
//! - Essential parameters: edge count `n >= 3` and circumradius `R > 0`.
//! - Derived values (interior angle, edge length, apothem, area, perimeter) are
//!   computed on first access and cached until either parameter is reassigned.
//! - Equality compares `(n, R)` exactly; ordering compares `n` only.
//!
//! Formulas
//! - interior angle `(n − 2)·180/n` degrees
//! - edge length `s = 2R sin(π/n)`, apothem `a = R cos(π/n)`
//! - area `n·s·a / 2`, perimeter `n·s`

mod cache;

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;

use crate::cfg::MIN_EDGE_COUNT;
use crate::error::{PolygonError, Result};
use crate::scalar::Scalar;
use cache::PolygonCache;

/// Regular strictly convex polygon centered at the origin.
///
/// Invariants:
/// - `edge_count >= 3`.
/// - `circumradius` is finite and `> 0`.
/// - Cached values always belong to the current `(edge_count, circumradius)`.
#[derive(Clone, Debug)]
pub struct Polygon {
    edge_count: u32,
    circumradius: f64,
    cache: PolygonCache,
}

pub(crate) fn validate_edge_count(n: u32, name: &str) -> Result<u32> {
    if n < MIN_EDGE_COUNT {
        return Err(PolygonError::validation(format!(
            "{name} must be >= {MIN_EDGE_COUNT}, got {n}"
        )));
    }
    Ok(n)
}

pub(crate) fn validate_circumradius(r: f64) -> Result<f64> {
    if !r.is_finite() || r <= 0.0 {
        return Err(PolygonError::validation(format!(
            "circumradius must be finite and > 0, got {r}"
        )));
    }
    Ok(r)
}

impl Polygon {
    pub fn new(edge_count: u32, circumradius: f64) -> Result<Self> {
        let edge_count = validate_edge_count(edge_count, "edge_count")?;
        let circumradius = validate_circumradius(circumradius)?;
        Ok(Self::from_validated(edge_count, circumradius))
    }

    /// Build from loosely typed inputs.
    ///
    /// Complex or textual values fail with `PolygonError::Type`; numeric values
    /// out of range (or a fractional edge count) fail with
    /// `PolygonError::Validation`.
    pub fn from_scalars(
        edge_count: impl Into<Scalar>,
        circumradius: impl Into<Scalar>,
    ) -> Result<Self> {
        let edge_count = edge_count.into().to_edge_count("edge_count")?;
        let circumradius = circumradius.into().to_circumradius()?;
        Ok(Self::from_validated(edge_count, circumradius))
    }

    /// Caller guarantees both parameters already passed validation.
    pub(crate) fn from_validated(edge_count: u32, circumradius: f64) -> Self {
        debug_assert!(edge_count >= MIN_EDGE_COUNT);
        debug_assert!(circumradius.is_finite() && circumradius > 0.0);
        Self {
            edge_count,
            circumradius,
            cache: PolygonCache::default(),
        }
    }

    #[inline]
    pub fn edge_count(&self) -> u32 {
        self.edge_count
    }

    /// Number of vertices; always equal to the edge count.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.edge_count
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Reassign the edge count. On error the polygon is left untouched.
    pub fn set_edge_count(&mut self, edge_count: u32) -> Result<()> {
        self.edge_count = validate_edge_count(edge_count, "edge_count")?;
        self.invalidate();
        Ok(())
    }

    pub fn set_vertex_count(&mut self, vertex_count: u32) -> Result<()> {
        self.edge_count = validate_edge_count(vertex_count, "vertex_count")?;
        self.invalidate();
        Ok(())
    }

    /// Reassign the circumradius. On error the polygon is left untouched.
    pub fn set_circumradius(&mut self, circumradius: f64) -> Result<()> {
        self.circumradius = validate_circumradius(circumradius)?;
        self.invalidate();
        Ok(())
    }

    fn invalidate(&mut self) {
        tracing::trace!(
            n = self.edge_count,
            r = self.circumradius,
            "polygon cache invalidated"
        );
        self.cache.clear();
    }

    /// Interior angle in degrees.
    pub fn interior_angle(&self) -> f64 {
        PolygonCache::get_or_compute(&self.cache.interior_angle, || {
            f64::from(self.edge_count - 2) * 180.0 / f64::from(self.edge_count)
        })
    }

    pub fn edge_length(&self) -> f64 {
        PolygonCache::get_or_compute(&self.cache.edge_length, || {
            2.0 * self.circumradius * (PI / f64::from(self.edge_count)).sin()
        })
    }

    /// Distance from the center to the midpoint of an edge.
    pub fn apothem(&self) -> f64 {
        PolygonCache::get_or_compute(&self.cache.apothem, || {
            self.circumradius * (PI / f64::from(self.edge_count)).cos()
        })
    }

    pub fn area(&self) -> f64 {
        PolygonCache::get_or_compute(&self.cache.area, || {
            f64::from(self.edge_count) * self.edge_length() * self.apothem() / 2.0
        })
    }

    pub fn perimeter(&self) -> f64 {
        PolygonCache::get_or_compute(&self.cache.perimeter, || {
            f64::from(self.edge_count) * self.edge_length()
        })
    }

    /// Area-to-perimeter ratio (equals `apothem / 2` up to rounding).
    pub fn efficiency(&self) -> f64 {
        self.area() / self.perimeter()
    }

    /// Vertex positions in CCW order, first vertex on the positive x-axis.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        let step = 2.0 * PI / f64::from(self.edge_count);
        (0..self.edge_count)
            .map(|k| {
                let theta = step * f64::from(k);
                let (sin, cos) = theta.sin_cos();
                Vector2::new(self.circumradius * cos, self.circumradius * sin)
            })
            .collect()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon(n={}, circumradius={})",
            self.edge_count, self.circumradius
        )
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count && self.circumradius == other.circumradius
    }
}

/// Ordered by edge count only. Equal edge counts with different radii are
/// incomparable, so `<`/`>` are both false there and `==` stays consistent.
impl PartialOrd for Polygon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.edge_count.cmp(&other.edge_count) {
            Ordering::Equal if self == other => Some(Ordering::Equal),
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

#[cfg(test)]
mod tests;
