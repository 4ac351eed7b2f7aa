//! Limits for configuration values.

use core::cmp;

//------------ DefMinMax -----------------------------------------------------

/// The default, minimum, and maximum values for a config variable.
///
/// Config setters pass values supplied by the user through
/// [`limit`][Self::limit] so that out-of-range values are clamped rather
/// than rejected.
#[derive(Clone, Copy, Debug)]
pub struct DefMinMax<T> {
    /// The default value.
    def: T,

    /// The minimum value.
    min: T,

    /// The maximum value.
    max: T,
}

impl<T> DefMinMax<T> {
    /// Creates a new value.
    pub const fn new(def: T, min: T, max: T) -> Self {
        Self { def, min, max }
    }

    /// Returns the default value.
    pub fn default(self) -> T {
        self.def
    }

    /// Trims the given value to fit into the minimum/maximum range.
    pub fn limit(self, value: T) -> T
    where
        T: Ord,
    {
        cmp::max(self.min, cmp::min(self.max, value))
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn limit() {
        const LIMITS: DefMinMax<usize> = DefMinMax::new(9000, 12, 65535);
        assert_eq!(LIMITS.default(), 9000);
        assert_eq!(LIMITS.limit(1500), 1500);
        assert_eq!(LIMITS.limit(0), 12);
        assert_eq!(LIMITS.limit(100_000), 65535);
    }
}
