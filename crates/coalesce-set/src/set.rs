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

//! Canonical integer interval sets over a generic primitive integer type.
//! The `IntervalSet<T>` structure stores sorted, disjoint, non-touching
//! half-open intervals and keeps that representation minimal across
//! mutations. Adding a range coalesces it with every stored interval it
//! overlaps or touches; removing a range clips, splits, or deletes the
//! stored intervals it strictly overlaps. Both operations validate their
//! input up front and leave the set untouched on failure. Serialization
//! to the canonical text form is provided by `to_text` and the `Display`
//! implementation, and `intervals` exposes the stored sequence for
//! inspection.

use coalesce_core::math::interval::{Interval, ValidationError};
use num_traits::PrimInt;
use std::{
    cmp::{max, min},
    ops::RangeBounds,
};

/// Details about a removal range that overlaps nothing stored in the set.
///
/// The fields hold the range after decomposition to half-open form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotFoundError<T> {
    /// The decomposed inclusive start bound of the removal range.
    pub start: T,
    /// The decomposed exclusive end bound of the removal range.
    pub end: T,
}

impl<T> std::fmt::Display for NotFoundError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Removal range [{}, {}) overlaps no stored interval",
            self.start, self.end
        )
    }
}

impl<T> std::error::Error for NotFoundError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// Errors that can occur when removing a range from an [`IntervalSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoveError<T> {
    /// The removal range failed validation.
    Validation(ValidationError<T>),
    /// The removal range is well-formed but overlaps nothing in the set.
    NotFound(NotFoundError<T>),
}

impl<T> std::fmt::Display for RemoveError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::NotFound(e) => write!(f, "Not found: {e}"),
        }
    }
}

impl<T> std::error::Error for RemoveError<T> where T: std::fmt::Debug + std::fmt::Display {}

impl<T> From<ValidationError<T>> for RemoveError<T> {
    fn from(e: ValidationError<T>) -> Self {
        Self::Validation(e)
    }
}

impl<T> From<NotFoundError<T>> for RemoveError<T> {
    fn from(e: NotFoundError<T>) -> Self {
        Self::NotFound(e)
    }
}

/// Checks whether the given intervals are in canonical form: sorted by
/// start, strictly disjoint with a gap between neighbors, and free of
/// empty members.
///
/// Returns `true` if the intervals are canonical, `false` otherwise.
#[inline(always)]
fn is_canonical<T>(intervals: &[Interval<T>]) -> bool
where
    T: PrimInt,
{
    intervals.iter().all(|iv| !iv.is_empty())
        && intervals.windows(2).all(|w| w[0].end() < w[1].start())
}

/// An ordered, self-coalescing set of integers stored as a minimal list
/// of disjoint half-open intervals.
///
/// Ranges added to the set are merged with every stored interval they
/// overlap or touch; ranges removed from the set clip, split, or delete
/// the stored intervals they strictly overlap. The stored sequence is
/// always canonical, so two sets covering the same integers compare
/// equal and serialize to the same text.
///
/// # Invariants
///
/// After every successful call the stored intervals are sorted by start,
/// adjacent intervals satisfy `left.end() < right.start()`, and no
/// interval is empty.
///
/// # Examples
///
/// ```rust
/// # use coalesce_set::set::IntervalSet;
///
/// let mut set = IntervalSet::new();
/// set.add(1..5).unwrap().add(10..20).unwrap();
/// set.add(20..21).unwrap(); // touches [10, 20), so the two merge
/// assert_eq!(set.to_text(), "[1, 5) [10, 21)");
///
/// set.remove(12..15).unwrap(); // splits [10, 21)
/// assert_eq!(set.to_text(), "[1, 5) [10, 12) [15, 21)");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntervalSet<T>
where
    T: PrimInt,
{
    intervals: Vec<Interval<T>>, // sorted by start, non-overlapping, non-touching, no empty members
}

impl<T> IntervalSet<T>
where
    T: PrimInt,
{
    /// Creates a new empty `IntervalSet`.
    #[inline]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Creates a new empty `IntervalSet` with preallocated capacity for
    /// `capacity` intervals.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of stored intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set contains no integers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the stored intervals.
    ///
    /// The returned slice is always canonical: sorted by start, strictly
    /// disjoint with a gap between neighbors, and free of empty members.
    #[inline]
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// Adds a range of integers to the set.
    ///
    /// The range is decomposed through [`Interval::try_from_bounds`];
    /// every stored interval it overlaps *or touches* is coalesced with
    /// it into a single interval. Adding an empty range, or a range
    /// already covered by a stored interval, succeeds without changing
    /// the set. On validation failure the set is left untouched.
    ///
    /// Returns `&mut Self` on success so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_set::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(5..8).unwrap();
    /// set.add(1..3).unwrap();
    /// assert_eq!(set.to_text(), "[1, 3) [5, 8)");
    ///
    /// // Bridges the gap and swallows both stored intervals.
    /// set.add(2..6).unwrap();
    /// assert_eq!(set.to_text(), "[1, 8)");
    ///
    /// // Inverted bounds are rejected and nothing changes.
    /// assert!(set.add(9..4).is_err());
    /// assert_eq!(set.to_text(), "[1, 8)");
    /// ```
    pub fn add<R>(&mut self, range: R) -> Result<&mut Self, ValidationError<T>>
    where
        R: RangeBounds<T>,
    {
        let incoming = Interval::try_from_bounds(range)?;
        if incoming.is_empty() {
            return Ok(self);
        }

        let start = incoming.start();
        let end = incoming.end();

        // First stored interval that overlaps or touches the incoming
        // range, and one past the last such interval.
        let merge_from = self.intervals.partition_point(|iv| iv.end() < start);
        let merge_to = self.intervals.partition_point(|iv| iv.start() <= end);

        if merge_from == merge_to {
            self.intervals.insert(merge_from, incoming);
        } else {
            let merged = Interval::new_unchecked(
                min(start, self.intervals[merge_from].start()),
                max(end, self.intervals[merge_to - 1].end()),
            );
            self.intervals.splice(merge_from..merge_to, [merged]);
        }

        debug_assert!(
            is_canonical(&self.intervals),
            "`IntervalSet::add` output is not canonical"
        );
        Ok(self)
    }

    /// Removes a range of integers from the set.
    ///
    /// Every stored interval the range strictly overlaps is clipped,
    /// split in two, or deleted outright. Intervals the range merely
    /// touches are left alone; removing an empty range succeeds without
    /// changing the set.
    ///
    /// Fails with [`RemoveError::Validation`] if the range is malformed
    /// or inverted, and with [`RemoveError::NotFound`] if the non-empty
    /// range overlaps no stored interval. A failing call never mutates
    /// the set.
    ///
    /// Returns `&mut Self` on success so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_set::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.add(1..21).unwrap();
    ///
    /// // Removing from the middle splits the surrounding interval.
    /// set.remove(15..17).unwrap();
    /// assert_eq!(set.to_text(), "[1, 15) [17, 21)");
    ///
    /// // A range that overlaps nothing fails and changes nothing.
    /// assert!(set.remove(30..40).is_err());
    /// assert_eq!(set.to_text(), "[1, 15) [17, 21)");
    /// ```
    pub fn remove<R>(&mut self, range: R) -> Result<&mut Self, RemoveError<T>>
    where
        R: RangeBounds<T>,
    {
        let incoming = Interval::try_from_bounds(range)?;
        if incoming.is_empty() {
            return Ok(self);
        }

        // Touching is not overlap: a range that only meets stored
        // boundaries removes nothing.
        if !self.intervals.iter().any(|iv| iv.intersects(incoming)) {
            return Err(NotFoundError {
                start: incoming.start(),
                end: incoming.end(),
            }
            .into());
        }

        // At most one interval is split, so the survivor count is bounded
        // by the current length plus one.
        let mut survivors = Vec::with_capacity(self.intervals.len() + 1);
        for &stored in &self.intervals {
            if stored.intersects(incoming) {
                survivors.extend(stored.difference(incoming));
            } else {
                survivors.push(stored);
            }
        }
        self.intervals = survivors;

        debug_assert!(
            is_canonical(&self.intervals),
            "`IntervalSet::remove` output is not canonical"
        );
        Ok(self)
    }

    /// Serializes the set to its text form.
    ///
    /// Produces one `[start, end)` token per stored interval in ascending
    /// order, separated by single spaces. The empty set yields the empty
    /// string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use coalesce_set::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// assert_eq!(set.to_text(), "");
    ///
    /// set.add(10..20).unwrap();
    /// set.add(1..5).unwrap();
    /// assert_eq!(set.to_text(), "[1, 5) [10, 20)");
    /// ```
    pub fn to_text(&self) -> String
    where
        T: std::fmt::Display,
    {
        self.to_string()
    }
}

impl<T> std::fmt::Display for IntervalSet<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, interval) in self.intervals.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{interval}")?;
        }
        Ok(())
    }
}
