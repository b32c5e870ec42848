//! Dynamically typed numeric input.
//!
//! `Polygon::new` and `PolygonSequence::new` take `u32`/`f64` directly. Callers
//! whose inputs arrive untyped (parsed text, scripting bridges) go through
//! `Scalar`, which separates kind errors (`PolygonError::Type`) from range
//! errors (`PolygonError::Validation`).

use crate::error::{PolygonError, Result};
use crate::polygon::{validate_circumradius, validate_edge_count};
use std::fmt;

/// A loosely typed number as handed over by an untyped caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Int(i64),
    Real(f64),
    Complex { re: f64, im: f64 },
    Text(String),
}

impl Scalar {
    pub fn complex(re: f64, im: f64) -> Self {
        Self::Complex { re, im }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Real(_) => "real",
            Self::Complex { .. } => "complex",
            Self::Text(_) => "text",
        }
    }

    /// Coerce to an edge count: integers as is, integer-valued reals truncated
    /// losslessly, then range-checked.
    pub(crate) fn to_edge_count(&self, name: &str) -> Result<u32> {
        let n = match *self {
            Self::Int(v) => {
                if v < 0 {
                    return Err(PolygonError::validation(format!(
                        "{name} must be >= 3, got {v}"
                    )));
                }
                u32::try_from(v).map_err(|_| {
                    PolygonError::validation(format!("{name} is too large, got {v}"))
                })?
            }
            Self::Real(x) => {
                if !x.is_finite() || x.fract() != 0.0 {
                    return Err(PolygonError::validation(format!(
                        "{name} must be an integer value, got {x}"
                    )));
                }
                if x < 0.0 {
                    return Err(PolygonError::validation(format!(
                        "{name} must be >= 3, got {x}"
                    )));
                }
                if x > u32::MAX as f64 {
                    return Err(PolygonError::validation(format!(
                        "{name} is too large, got {x}"
                    )));
                }
                x as u32
            }
            Self::Complex { .. } | Self::Text(_) => {
                return Err(PolygonError::type_mismatch(format!(
                    "{name} must be an integer, got {}",
                    self.kind()
                )))
            }
        };
        validate_edge_count(n, name)
    }

    /// Coerce to a circumradius: any real kind, then range-checked.
    pub(crate) fn to_circumradius(&self) -> Result<f64> {
        let r = match *self {
            Self::Int(v) => v as f64,
            Self::Real(x) => x,
            Self::Complex { .. } | Self::Text(_) => {
                return Err(PolygonError::type_mismatch(format!(
                    "circumradius must be a real number, got {}",
                    self.kind()
                )))
            }
        };
        validate_circumradius(r)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Real(x) => write!(f, "{x}"),
            Self::Complex { re, im } => write!(f, "({re}{im:+}j)"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}
impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}
impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}
impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::Real(v.into())
    }
}
impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}
impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}
impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}
