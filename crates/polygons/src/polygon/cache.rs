//! Memo slots for the derived values of a `Polygon`.

use std::cell::Cell;

/// One lazily filled slot per derived value.
///
/// Slots are `Cell`s so the derived getters can fill them through `&self`.
#[derive(Clone, Debug, Default)]
pub(crate) struct PolygonCache {
    pub(crate) interior_angle: Cell<Option<f64>>,
    pub(crate) edge_length: Cell<Option<f64>>,
    pub(crate) apothem: Cell<Option<f64>>,
    pub(crate) area: Cell<Option<f64>>,
    pub(crate) perimeter: Cell<Option<f64>>,
}

impl PolygonCache {
    /// Return the memoized value in `slot`, computing and storing it on a miss.
    #[inline]
    pub(crate) fn get_or_compute(slot: &Cell<Option<f64>>, f: impl FnOnce() -> f64) -> f64 {
        match slot.get() {
            Some(v) => v,
            None => {
                let v = f();
                slot.set(Some(v));
                v
            }
        }
    }

    pub(crate) fn clear(&self) {
        self.interior_angle.set(None);
        self.edge_length.set(None);
        self.apothem.set(None);
        self.area.set(None);
        self.perimeter.set(None);
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.slots().iter().all(Option::is_none)
    }

    #[cfg(test)]
    pub(crate) fn is_full(&self) -> bool {
        self.slots().iter().all(Option::is_some)
    }

    #[cfg(test)]
    fn slots(&self) -> [Option<f64>; 5] {
        [
            self.interior_angle.get(),
            self.edge_length.get(),
            self.apothem.get(),
            self.area.get(),
            self.perimeter.get(),
        ]
    }
}
