use serde::Serialize;

use crate::error::Error;
use crate::types::Keyed;

/// Closed interval `[low, high]`.
///
/// Construction rejects `high < low`, so `high` is always the larger bound.
/// Interval trees order by `low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Interval<T> {
    low: T,
    high: T,
}

impl<T: PartialOrd> Interval<T> {
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] when `high < low` or when the bounds
    /// are not comparable.
    ///
    /// ```
    /// use aug_forest::Interval;
    ///
    /// assert!(Interval::new(3, 5).is_ok());
    /// assert!(Interval::new(4, 4).is_ok());
    /// assert!(Interval::new(5, 3).is_err());
    /// ```
    pub fn new(low: T, high: T) -> Result<Self, Error> {
        if low <= high {
            Ok(Self { low, high })
        } else {
            Err(Error::InvalidInterval)
        }
    }

    /// `true` iff `self.low <= other.high && other.low <= self.high`.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

impl<T> Interval<T> {
    pub fn low(&self) -> &T {
        &self.low
    }

    pub fn high(&self) -> &T {
        &self.high
    }

    pub fn into_bounds(self) -> (T, T) {
        (self.low, self.high)
    }
}

impl<T: PartialOrd> TryFrom<(T, T)> for Interval<T> {
    type Error = Error;

    fn try_from((low, high): (T, T)) -> Result<Self, Error> {
        Interval::new(low, high)
    }
}

impl<T: PartialOrd> Keyed for Interval<T> {
    type Key = T;

    #[inline]
    fn key(&self) -> &T {
        &self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(low: i32, high: i32) -> Interval<i32> {
        Interval::new(low, high).unwrap()
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(matches!(Interval::new(10, 9), Err(Error::InvalidInterval)));
    }

    #[test]
    fn test_rejects_nan() {
        assert!(Interval::new(f64::NAN, 1.0).is_err());
        assert!(Interval::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_overlap_is_closed() {
        assert!(iv(1, 5).overlaps(&iv(5, 9)));
        assert!(iv(5, 9).overlaps(&iv(1, 5)));
        assert!(!iv(1, 4).overlaps(&iv(5, 9)));
    }

    #[test]
    fn test_overlap_containment() {
        assert!(iv(0, 100).overlaps(&iv(40, 41)));
        assert!(iv(40, 41).overlaps(&iv(0, 100)));
    }

    #[test]
    fn test_point_interval() {
        assert!(iv(3, 3).overlaps(&iv(3, 3)));
        assert!(!iv(3, 3).overlaps(&iv(4, 4)));
    }

    #[test]
    fn test_keyed_by_low() {
        assert_eq!(*iv(12, 15).key(), 12);
    }

    #[test]
    fn test_try_from_tuple() {
        let ok: Interval<i32> = (1, 2).try_into().unwrap();
        assert_eq!(ok.into_bounds(), (1, 2));
        assert!(Interval::try_from((2, 1)).is_err());
    }
}
