// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::PrimInt;
use smallvec::SmallVec;
use std::{
    cmp::{max, min},
    ops::{Bound, RangeBounds},
};

/// Why a candidate range fails to decompose into two finite bounds.
///
/// Produced by [`Interval::try_from_bounds`] when the candidate has the
/// wrong shape: a missing bound, or a bound whose half-open adjustment
/// does not fit the integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedRangeError {
    /// The candidate has no finite start bound.
    UnboundedStart,
    /// The candidate has no finite end bound.
    UnboundedEnd,
    /// The exclusive start bound has no representable successor.
    StartOverflow,
    /// The inclusive end bound has no representable successor.
    EndOverflow,
}

impl std::fmt::Display for MalformedRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundedStart => write!(f, "range has no finite start bound"),
            Self::UnboundedEnd => write!(f, "range has no finite end bound"),
            Self::StartOverflow => {
                write!(f, "exclusive start bound has no representable successor")
            }
            Self::EndOverflow => {
                write!(f, "inclusive end bound has no representable successor")
            }
        }
    }
}

impl std::error::Error for MalformedRangeError {}

/// Details about a candidate range whose bounds are out of order.
///
/// The fields hold the bounds after decomposition to half-open form, so a
/// candidate like `5..=2` is reported as `start == 5`, `end == 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvertedRangeError<T> {
    /// The decomposed inclusive start bound.
    pub start: T,
    /// The decomposed exclusive end bound.
    pub end: T,
}

impl<T> std::fmt::Display for InvertedRangeError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "start {} is greater than end {}", self.start, self.end)
    }
}

impl<T> std::error::Error for InvertedRangeError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// The error type for candidate range validation.
///
/// A candidate is valid iff it decomposes into exactly two finite integer
/// bounds `(start, end)` with `start <= end`. `start == end` is valid and
/// denotes the empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError<T> {
    /// The candidate does not decompose into two finite bounds.
    Malformed(MalformedRangeError),
    /// The candidate decomposes into `start > end`.
    Inverted(InvertedRangeError<T>),
}

impl<T> std::fmt::Display for ValidationError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "Malformed range: {e}"),
            Self::Inverted(e) => write!(f, "Inverted range: {e}"),
        }
    }
}

impl<T> std::error::Error for ValidationError<T> where T: std::fmt::Debug + std::fmt::Display {}

impl<T> From<MalformedRangeError> for ValidationError<T> {
    fn from(e: MalformedRangeError) -> Self {
        Self::Malformed(e)
    }
}

impl<T> From<InvertedRangeError<T>> for ValidationError<T> {
    fn from(e: InvertedRangeError<T>) -> Self {
        Self::Inverted(e)
    }
}

/// A half-open interval `[start, end)` defined by a start (inclusive) and
/// end (exclusive).
///
/// This struct represents a contiguous run of integers. It provides the
/// checked construction, overlap and adjacency predicates, and set
/// difference that canonical interval-set maintenance is built on.
///
/// # Invariants
/// `start` must always be less than or equal to `end`. `start == end`
/// denotes the empty run.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.len(), 10);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `Interval` if the bounds are in order.
    ///
    /// Returns an [`InvertedRangeError`] carrying the offending bounds if
    /// `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_core::math::interval::Interval;
    ///
    /// assert!(Interval::try_new(0, 10).is_ok());
    /// assert!(Interval::try_new(5, 5).is_ok());
    /// assert!(Interval::try_new(10, 0).is_err());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Result<Self, InvertedRangeError<T>> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(InvertedRangeError { start, end })
        }
    }

    /// Creates a new `Interval` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `start <= end`. This function contains a
    /// `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Validates an arbitrary range candidate into an `Interval`.
    ///
    /// This is the single validation gate for user-supplied ranges: the
    /// candidate must decompose into exactly two finite integer bounds
    /// `(start, end)` with `start <= end`. Inclusive ends and exclusive
    /// starts are adjusted to half-open form with overflow checking;
    /// unbounded sides are rejected as malformed. `start == end` is valid
    /// and yields the empty interval.
    ///
    /// The resulting `Interval` is an owned copy; the candidate is not
    /// retained or aliased.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_core::math::interval::Interval;
    ///
    /// let iv = Interval::try_from_bounds(1..5).unwrap();
    /// assert_eq!((iv.start(), iv.end()), (1, 5));
    ///
    /// // Inclusive ends are adjusted to half-open form.
    /// assert_eq!(Interval::try_from_bounds(1..=4), Ok(iv));
    ///
    /// // Unbounded candidates have no finite decomposition.
    /// assert!(Interval::<i32>::try_from_bounds(..5).is_err());
    /// assert!(Interval::<i32>::try_from_bounds(1..).is_err());
    ///
    /// // Out-of-order bounds are rejected.
    /// assert!(Interval::try_from_bounds(5..3).is_err());
    /// ```
    pub fn try_from_bounds<R>(range: R) -> Result<Self, ValidationError<T>>
    where
        R: RangeBounds<T>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s
                .checked_add(&T::one())
                .ok_or(MalformedRangeError::StartOverflow)?,
            Bound::Unbounded => return Err(MalformedRangeError::UnboundedStart.into()),
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e
                .checked_add(&T::one())
                .ok_or(MalformedRangeError::EndOverflow)?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => return Err(MalformedRangeError::UnboundedEnd.into()),
        };
        Self::try_new(start, end).map_err(ValidationError::from)
    }

    /// Returns the inclusive start bound of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(5, 10);
    /// assert_eq!(iv.start(), 5);
    /// ```
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive end bound of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(5, 10);
    /// assert_eq!(iv.end(), 10);
    /// ```
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the length of the interval (`end - start`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(10, 20).len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> T {
        self.end - self.start
    }

    /// Returns `true` if the interval is empty (`start == end`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_core::math::interval::Interval;
    ///
    /// assert!(Interval::new(10, 10).is_empty());
    /// assert!(!Interval::new(10, 11).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this interval shares at least one integer with
    /// `other`.
    ///
    /// Empty intervals intersect nothing, and intervals that merely share
    /// a boundary do not intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.intersects(Interval::new(5, 15)));
    /// assert!(!a.intersects(Interval::new(10, 20))); // touching
    /// assert!(!a.intersects(Interval::new(5, 5)));   // empty
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        max(self.start, other.start) < min(self.end, other.end)
    }

    /// Returns `true` if the intervals share a boundary but do not overlap.
    ///
    /// Touching is what distinguishes ranges that coalesce into one
    /// contiguous run from ranges separated by a gap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.touches(Interval::new(10, 20)));
    /// assert!(a.touches(Interval::new(-5, 0)));
    /// assert!(!a.touches(Interval::new(9, 11)));
    /// assert!(!a.touches(Interval::new(12, 20)));
    /// ```
    #[inline]
    pub fn touches(&self, other: Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Calculates the set difference `self - other`.
    ///
    /// This removes the portion of `self` that overlaps with `other`.
    /// Zero-length pieces are never emitted, so the result contains only
    /// non-empty intervals.
    ///
    /// # Returns
    ///
    /// A vector containing:
    /// * 0 intervals: if `other` fully covers `self`.
    /// * 1 interval: if `other` clips one side of `self` or does not
    ///   intersect it.
    /// * 2 intervals: if `other` is strictly inside `self`, splitting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_core::math::interval::Interval;
    ///
    /// let base = Interval::new(0, 10);
    ///
    /// let split = base.difference(Interval::new(4, 6));
    /// assert_eq!(split.as_slice(), &[Interval::new(0, 4), Interval::new(6, 10)]);
    ///
    /// let gone = base.difference(Interval::new(-5, 15));
    /// assert!(gone.is_empty());
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<Self, 2> {
        if !self.intersects(other) {
            return smallvec::smallvec![*self];
        }

        let mut result = SmallVec::new();
        if self.start < other.start {
            result.push(Self::new_unchecked(self.start, other.start));
        }
        if other.end < self.end {
            result.push(Self::new_unchecked(other.end, self.end));
        }
        result
    }
}

impl<T> Default for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
        }
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for Interval<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Excluded(&self.end)
    }
}

impl<T> From<std::ops::Range<T>> for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = Interval::new(10, 20);
        assert_eq!(iv.start(), 10);
        assert_eq!(iv.end(), 20);
        assert_eq!(iv.len(), 10);
        assert!(!iv.is_empty());
    }

    #[test]
    fn test_construction_empty() {
        let iv = Interval::new(10, 10);
        assert_eq!(iv.len(), 0);
        assert!(iv.is_empty());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        Interval::new(10, 5);
    }

    #[test]
    fn test_try_new() {
        assert!(Interval::try_new(5, 10).is_ok());
        assert!(Interval::try_new(5, 5).is_ok());
        assert_eq!(
            Interval::try_new(10, 5),
            Err(InvertedRangeError { start: 10, end: 5 })
        );
    }

    #[test]
    fn test_default() {
        let iv: Interval<i32> = Default::default();
        assert!(iv.is_empty());
        assert_eq!(iv.start(), 0);
        assert_eq!(iv.end(), 0);
    }

    #[test]
    fn test_try_from_bounds_half_open() {
        let iv = Interval::try_from_bounds(1..5).unwrap();
        assert_eq!(iv, Interval::new(1, 5));
    }

    #[test]
    fn test_try_from_bounds_inclusive_end() {
        let iv = Interval::try_from_bounds(1..=4).unwrap();
        assert_eq!(iv, Interval::new(1, 5));
    }

    #[test]
    fn test_try_from_bounds_excluded_start() {
        let iv = Interval::try_from_bounds((Bound::Excluded(0), Bound::Excluded(5))).unwrap();
        assert_eq!(iv, Interval::new(1, 5));
    }

    #[test]
    fn test_try_from_bounds_empty_is_valid() {
        let iv = Interval::try_from_bounds(5..5).unwrap();
        assert!(iv.is_empty());
    }

    #[test]
    fn test_try_from_bounds_unbounded_rejected() {
        assert_eq!(
            Interval::<i32>::try_from_bounds(..),
            Err(ValidationError::Malformed(
                MalformedRangeError::UnboundedStart
            ))
        );
        assert_eq!(
            Interval::<i32>::try_from_bounds(..10),
            Err(ValidationError::Malformed(
                MalformedRangeError::UnboundedStart
            ))
        );
        assert_eq!(
            Interval::<i32>::try_from_bounds(10..),
            Err(ValidationError::Malformed(MalformedRangeError::UnboundedEnd))
        );
    }

    #[test]
    fn test_try_from_bounds_overflow_rejected() {
        // Adjusting the inclusive end to half-open form would need u8::MAX + 1.
        assert_eq!(
            Interval::try_from_bounds(0u8..=u8::MAX),
            Err(ValidationError::Malformed(MalformedRangeError::EndOverflow))
        );
        // The exclusive start has no successor; it is checked first.
        assert_eq!(
            Interval::try_from_bounds((Bound::Excluded(u8::MAX), Bound::Included(u8::MAX))),
            Err(ValidationError::Malformed(
                MalformedRangeError::StartOverflow
            ))
        );
    }

    #[test]
    fn test_try_from_bounds_inverted() {
        assert_eq!(
            Interval::try_from_bounds(5..3),
            Err(ValidationError::Inverted(InvertedRangeError {
                start: 5,
                end: 3
            }))
        );
        // Inclusive candidates are reported in decomposed half-open form.
        assert_eq!(
            Interval::try_from_bounds(5..=2),
            Err(ValidationError::Inverted(InvertedRangeError {
                start: 5,
                end: 3
            }))
        );
    }

    #[test]
    fn test_intersects() {
        let a = Interval::new(0, 10);

        // Disjoint left
        assert!(!a.intersects(Interval::new(-5, -1)));
        // Adjacent left (touching) - strictly NO intersection
        assert!(!a.intersects(Interval::new(-5, 0)));
        // Overlap left
        assert!(a.intersects(Interval::new(-5, 5)));
        // Contained
        assert!(a.intersects(Interval::new(2, 8)));
        // Identity
        assert!(a.intersects(a));
        // Overlap right
        assert!(a.intersects(Interval::new(5, 15)));
        // Adjacent right
        assert!(!a.intersects(Interval::new(10, 15)));
        // Disjoint right
        assert!(!a.intersects(Interval::new(11, 15)));
    }

    #[test]
    fn test_intersects_empty_operands() {
        let a = Interval::new(0, 10);
        // An empty interval shares no integer with anything, even when its
        // point lies strictly inside the other interval.
        assert!(!a.intersects(Interval::new(5, 5)));
        assert!(!Interval::new(5, 5).intersects(a));
        assert!(!Interval::new(5, 5).intersects(Interval::new(5, 5)));
    }

    #[test]
    fn test_touches() {
        let a = Interval::new(0, 10);

        assert!(a.touches(Interval::new(-5, 0)));
        assert!(a.touches(Interval::new(10, 15)));
        assert!(!a.touches(Interval::new(9, 11)));
        assert!(!a.touches(Interval::new(12, 15)));
    }

    #[test]
    fn test_difference() {
        let base = Interval::new(0, 10);

        // 1. Disjoint (No effect)
        let diff = base.difference(Interval::new(12, 15));
        assert_eq!(diff.as_slice(), &[base]);

        // 2. Full cover (Empty result)
        let diff = base.difference(Interval::new(-5, 15));
        assert!(diff.is_empty());

        // 3. Clip right
        let diff = base.difference(Interval::new(8, 15));
        assert_eq!(diff.as_slice(), &[Interval::new(0, 8)]);

        // 4. Clip left
        let diff = base.difference(Interval::new(-5, 2));
        assert_eq!(diff.as_slice(), &[Interval::new(2, 10)]);

        // 5. Split (the "hole" case)
        let diff = base.difference(Interval::new(4, 6));
        assert_eq!(diff.as_slice(), &[Interval::new(0, 4), Interval::new(6, 10)]);
    }

    #[test]
    fn test_difference_exact_cover_leaves_nothing() {
        let base = Interval::new(3, 7);
        assert!(base.difference(base).is_empty());
    }

    #[test]
    fn test_difference_empty_operand_is_identity() {
        let base = Interval::new(0, 10);
        let diff = base.difference(Interval::new(5, 5));
        assert_eq!(diff.as_slice(), &[base]);
    }

    #[test]
    fn test_difference_never_emits_empty_pieces() {
        let base = Interval::new(0, 10);
        // Clipping flush against a bound must not leave a zero-length stub.
        let diff = base.difference(Interval::new(0, 4));
        assert_eq!(diff.as_slice(), &[Interval::new(4, 10)]);
        let diff = base.difference(Interval::new(6, 10));
        assert_eq!(diff.as_slice(), &[Interval::new(0, 6)]);
    }

    #[test]
    fn test_display_debug() {
        let a = Interval::new(10, 20);
        assert_eq!(format!("{}", a), "[10, 20)");
        assert_eq!(format!("{:?}", a), "Interval { start: 10, end: 20 }");
    }

    #[test]
    fn test_from_range() {
        let iv = Interval::from(0..10);
        assert_eq!(iv.start(), 0);
        assert_eq!(iv.end(), 10);
    }

    #[test]
    fn test_range_bounds() {
        let iv = Interval::new(5, 10);

        match RangeBounds::start_bound(&iv) {
            Bound::Included(&x) => assert_eq!(x, 5),
            _ => panic!("Wrong start bound"),
        }

        match RangeBounds::end_bound(&iv) {
            Bound::Excluded(&x) => assert_eq!(x, 10),
            _ => panic!("Wrong end bound"),
        }

        // An interval is itself a valid candidate for re-validation.
        assert_eq!(Interval::try_from_bounds(iv), Ok(iv));
    }

    #[test]
    fn test_error_display() {
        let e = ValidationError::<i32>::Malformed(MalformedRangeError::UnboundedEnd);
        assert_eq!(format!("{}", e), "Malformed range: range has no finite end bound");

        let e = ValidationError::Inverted(InvertedRangeError { start: 9, end: 4 });
        assert_eq!(format!("{}", e), "Inverted range: start 9 is greater than end 4");
    }
}
