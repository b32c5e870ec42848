//! Index and slice normalization over a logical range `[0, len)`.
//!
//! Negative positions count from the end. Slices follow Python's
//! `slice.indices` rules: default bounds depend on the step sign, and
//! out-of-range bounds are clamped rather than rejected.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::error::{PolygonError, Result};

#[inline]
fn len_isize(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

/// Map a possibly negative `index` to a position in `[0, len)`.
pub(crate) fn resolve_index(index: isize, len: usize) -> Result<usize> {
    let n = len_isize(len);
    let effective = if index < 0 { n + index } else { index };
    if effective < 0 || effective >= n {
        return Err(PolygonError::Index { index, len });
    }
    Ok(effective as usize)
}

/// Unresolved slice bounds; `None` means "use the default for this step".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    /// Full slice `[::]`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: isize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn stop(mut self, stop: isize) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolve against a sequence of length `len`.
    ///
    /// Fails with `PolygonError::Validation` when the step is zero.
    pub fn indices(&self, len: usize) -> Result<SliceIndices> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(PolygonError::validation("slice step cannot be zero"));
        }
        let n = len_isize(len);
        let (lower, upper) = if step < 0 { (-1, n - 1) } else { (0, n) };
        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(b) if b < 0 => b.saturating_add(n).max(lower),
            Some(b) => b.min(upper),
        };
        let (start_default, stop_default) = if step < 0 { (upper, lower) } else { (lower, upper) };
        Ok(SliceIndices {
            start: clamp(self.start, start_default),
            stop: clamp(self.stop, stop_default),
            step,
        })
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::new()
    }
}
impl From<Range<isize>> for SliceSpec {
    fn from(r: Range<isize>) -> Self {
        Self::new().start(r.start).stop(r.end)
    }
}
impl From<RangeFrom<isize>> for SliceSpec {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::new().start(r.start)
    }
}
impl From<RangeTo<isize>> for SliceSpec {
    fn from(r: RangeTo<isize>) -> Self {
        Self::new().stop(r.end)
    }
}
impl From<RangeInclusive<isize>> for SliceSpec {
    fn from(r: RangeInclusive<isize>) -> Self {
        let (start, end) = r.into_inner();
        Self {
            start: Some(start),
            stop: inclusive_stop(end),
            step: None,
        }
    }
}
impl From<RangeToInclusive<isize>> for SliceSpec {
    fn from(r: RangeToInclusive<isize>) -> Self {
        Self {
            stop: inclusive_stop(r.end),
            ..Self::new()
        }
    }
}

/// `..=-1` must reach the last element, which an exclusive `0` would not.
fn inclusive_stop(end: isize) -> Option<isize> {
    if end == -1 {
        None
    } else {
        end.checked_add(1)
    }
}

/// Concrete, bounds-checked slice: `start, start+step, ...` while before `stop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceIndices {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
}

impl SliceIndices {
    /// Number of selected positions.
    pub fn len(&self) -> usize {
        let span = if self.step > 0 {
            self.stop - self.start
        } else {
            self.start - self.stop
        };
        if span <= 0 {
            0
        } else {
            (span as usize - 1) / self.step.unsigned_abs() + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Selected positions in slice order; all lie in `[0, len)`.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let SliceIndices { start, step, .. } = *self;
        (0..self.len()).map(move |k| (start + k as isize * step) as usize)
    }
}
