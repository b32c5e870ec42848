use std::iter::FusedIterator;

use crate::polygon::Polygon;

/// Cursor over a contiguous run of edge counts sharing one circumradius.
///
/// Holds no reference to the sequence it came from, so every call to
/// `PolygonSequence::iter` starts over independently.
#[derive(Clone, Debug)]
pub struct PolygonIter {
    // Half-open `[front, back)`; u64 so `back` can sit one past `u32::MAX`.
    front: u64,
    back: u64,
    circumradius: f64,
}

impl PolygonIter {
    /// Edge counts `first..=last`; the caller has validated both ends and the radius.
    pub(crate) fn new(first: u32, last: u32, circumradius: f64) -> Self {
        Self {
            front: u64::from(first),
            back: u64::from(last) + 1,
            circumradius,
        }
    }

    fn make(&self, edge_count: u64) -> Polygon {
        // front/back never leave the validated u32 range.
        Polygon::from_validated(edge_count as u32, self.circumradius)
    }
}

impl Iterator for PolygonIter {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        if self.front >= self.back {
            return None;
        }
        let p = self.make(self.front);
        self.front += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back.saturating_sub(self.front) as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for PolygonIter {
    fn next_back(&mut self) -> Option<Polygon> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.make(self.back))
    }
}

impl ExactSizeIterator for PolygonIter {}

impl FusedIterator for PolygonIter {}
