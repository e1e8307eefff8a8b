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

use crate::{
    error::IntervalError,
    math::domain::{DisplayBound, Domain},
};
use num_traits::{Num, PrimInt};
use smallvec::{SmallVec, smallvec};
use std::{
    cmp::Ordering,
    iter::FusedIterator,
    ops::{Add, BitAnd, BitOr, Bound, RangeBounds, RangeInclusive, Sub},
};

/// The pieces left over by a set difference: zero, one or two intervals,
/// ordered left to right.
pub type Pieces<T> = SmallVec<[ClosedInterval<T>; 2]>;

/// A closed interval `[start, end]` over an ordered [`Domain`].
///
/// Both bounds belong to the interval. An interval whose bounds are equal
/// contains exactly one point; there is no empty interval, operations that can
/// produce "nothing" return `Option` or an empty [`Pieces`] instead.
///
/// # Invariants
/// `start` is always less than or equal to `end`, and the two are comparable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawInterval<T>",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: Domain + serde::Deserialize<'de>"
        )
    )
)]
pub struct ClosedInterval<T> {
    start: T,
    end: T,
}

/// Unvalidated wire form; deserialization goes through [`ClosedInterval::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInterval<T> {
    start: T,
    end: T,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawInterval<T>> for ClosedInterval<T>
where
    T: Domain,
{
    type Error = IntervalError;

    fn try_from(raw: RawInterval<T>) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// Result of the exact-set [`ClosedInterval::union`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: Domain + serde::Deserialize<'de>"
    ))
)]
pub enum Union<T> {
    /// The operands overlap or touch and collapse into one interval.
    Merged(ClosedInterval<T>),
    /// The operands are separated by a gap; ordered by start.
    Disjoint(ClosedInterval<T>, ClosedInterval<T>),
}

impl<T> Union<T>
where
    T: Domain,
{
    /// Returns `true` if the union collapsed into a single interval.
    #[inline]
    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged(_))
    }

    /// Returns the single merged interval, or `None` if the operands were disjoint.
    #[inline]
    pub fn merged(self) -> Option<ClosedInterval<T>> {
        match self {
            Self::Merged(iv) => Some(iv),
            Self::Disjoint(..) => None,
        }
    }

    /// Returns the intervals making up the union, ordered by start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 4).unwrap();
    /// let b = ClosedInterval::new(7, 12).unwrap();
    /// let pieces = b.union(a).into_pieces();
    /// assert_eq!(pieces.as_slice(), &[a, b]);
    /// ```
    #[inline]
    pub fn into_pieces(self) -> Pieces<T> {
        match self {
            Self::Merged(iv) => smallvec![iv],
            Self::Disjoint(first, second) => smallvec![first, second],
        }
    }
}

impl<T> IntoIterator for Union<T>
where
    T: Domain,
{
    type Item = ClosedInterval<T>;
    type IntoIter = smallvec::IntoIter<[ClosedInterval<T>; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_pieces().into_iter()
    }
}

#[inline(always)]
fn lesser<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline(always)]
fn greater<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl<T> ClosedInterval<T>
where
    T: Domain,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvalidOrder`] if `start > end`, and
    /// [`IntervalError::Unordered`] if the bounds cannot be compared (a NaN
    /// float bound).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::new(3, 3).is_ok());
    /// assert!(ClosedInterval::new(5, 3).is_err());
    /// ```
    pub fn new(start: T, end: T) -> Result<Self, IntervalError> {
        match start.partial_cmp(&end) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { start, end }),
            Some(Ordering::Greater) => {
                tracing::debug!(?start, ?end, "rejected interval: start is greater than end");
                Err(IntervalError::InvalidOrder {
                    start: DisplayBound(&start).to_string(),
                    end: DisplayBound(&end).to_string(),
                })
            }
            None => {
                tracing::debug!(?start, ?end, "rejected interval: bounds are not comparable");
                Err(IntervalError::Unordered {
                    start: DisplayBound(&start).to_string(),
                    end: DisplayBound(&end).to_string(),
                })
            }
        }
    }

    /// Creates a point interval `[value, value]`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Unordered`] if `value` is not comparable to
    /// itself (NaN).
    #[inline]
    pub fn point(value: T) -> Result<Self, IntervalError> {
        Self::new(value, value)
    }

    /// Builds an interval from bounds the caller has already proven ordered.
    #[inline]
    pub(crate) fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Returns the start bound of the interval.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the end bound of the interval.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns both bounds as `(start, end)`.
    #[inline]
    pub fn bounds(&self) -> (T, T) {
        (self.start, self.end)
    }

    /// Returns `true` if the interval holds a single point (`start == end`).
    #[inline]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies within `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10).unwrap();
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(10));
    /// assert!(!iv.contains(11));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if every point of `other` lies within `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the intervals share at least one point.
    ///
    /// Bounds are inclusive, so intervals that touch at a single point
    /// intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 4).unwrap();
    /// assert!(a.intersects(ClosedInterval::new(4, 7).unwrap()));
    /// assert!(!a.intersects(ClosedInterval::new(5, 7).unwrap()));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns `true` if the intervals share no point.
    #[inline]
    pub fn is_disjoint(&self, other: Self) -> bool {
        !self.intersects(other)
    }

    /// Returns `true` if the intervals share no point but no value of the
    /// domain lies between them.
    ///
    /// Only discrete domains can be adjacent; for continuous domains this is
    /// always `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 3).unwrap();
    /// assert!(a.is_adjacent(ClosedInterval::new(4, 6).unwrap()));
    ///
    /// let b = ClosedInterval::new(1.0, 3.0).unwrap();
    /// assert!(!b.is_adjacent(ClosedInterval::new(3.5, 6.0).unwrap()));
    /// ```
    #[inline]
    pub fn is_adjacent(&self, other: Self) -> bool {
        T::SUPPORTS_ADJACENCY
            && (self.end.successor() == Some(other.start)
                || other.end.successor() == Some(self.start))
    }

    /// Calculates the exact-set union of two intervals.
    ///
    /// Returns [`Union::Merged`] if the intervals overlap or touch, and
    /// [`Union::Disjoint`] holding both operands ordered by start otherwise,
    /// so no gap is ever silently filled. Use
    /// [`ClosedInterval::bounding_envelope`] when a single covering interval
    /// is wanted regardless of gaps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::{ClosedInterval, Union};
    ///
    /// let a = ClosedInterval::new(1, 7).unwrap();
    /// let b = ClosedInterval::new(4, 12).unwrap();
    /// assert_eq!(a.union(b), Union::Merged(ClosedInterval::new(1, 12).unwrap()));
    ///
    /// let c = ClosedInterval::new(1, 4).unwrap();
    /// let d = ClosedInterval::new(7, 12).unwrap();
    /// assert_eq!(c.union(d), Union::Disjoint(c, d));
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Union<T> {
        if self.intersects(other) {
            Union::Merged(self.bounding_envelope(other))
        } else if self.start < other.start {
            Union::Disjoint(*self, other)
        } else {
            Union::Disjoint(other, *self)
        }
    }

    /// Returns the smallest interval covering both operands,
    /// `[min(starts), max(ends)]`.
    ///
    /// Any gap between disjoint operands is included in the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 4).unwrap();
    /// let b = ClosedInterval::new(7, 12).unwrap();
    /// assert_eq!(a.bounding_envelope(b), ClosedInterval::new(1, 12).unwrap());
    /// ```
    #[inline]
    pub fn bounding_envelope(&self, other: Self) -> Self {
        Self::new_unchecked(
            lesser(self.start, other.start),
            greater(self.end, other.end),
        )
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals share no point. Touching intervals
    /// intersect in a single point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 7).unwrap();
    /// let b = ClosedInterval::new(4, 12).unwrap();
    /// assert_eq!(a.intersection(b), Some(ClosedInterval::new(4, 7).unwrap()));
    ///
    /// let c = ClosedInterval::new(1, 4).unwrap();
    /// let d = ClosedInterval::new(7, 12).unwrap();
    /// assert_eq!(c.intersection(d), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let new_start = greater(self.start, other.start);
        let new_end = lesser(self.end, other.end);

        if new_start <= new_end {
            Some(Self::new_unchecked(new_start, new_end))
        } else {
            None
        }
    }

    /// Calculates the set difference `self \ other`.
    ///
    /// The remainders never share a point with `other` in discrete domains:
    /// the left piece ends at the predecessor of `other.start` and the right
    /// piece starts at the successor of `other.end`, so `other` and the pieces
    /// together cover `self` without overlap or gap. Continuous domains have
    /// no such neighbour and their pieces touch `other` at the shared bound;
    /// see [`ClosedInterval::difference_by`] to leave an explicit margin.
    ///
    /// # Returns
    ///
    /// A [`Pieces`] containing:
    /// * 0 intervals: if `other` covers `self`.
    /// * 1 interval: if `other` clips one side of `self` or is disjoint.
    /// * 2 intervals: if `other` lies strictly inside `self`, splitting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 12).unwrap();
    /// let hole = ClosedInterval::new(4, 7).unwrap();
    ///
    /// let diff = a.difference(hole);
    /// assert_eq!(diff.len(), 2);
    /// assert_eq!(diff[0], ClosedInterval::new(1, 3).unwrap());
    /// assert_eq!(diff[1], ClosedInterval::new(8, 12).unwrap());
    ///
    /// let r = ClosedInterval::new(1.0, 12.0).unwrap();
    /// let diff = r.difference(ClosedInterval::new(4.0, 7.0).unwrap());
    /// assert_eq!(diff[0], ClosedInterval::new(1.0, 4.0).unwrap());
    /// assert_eq!(diff[1], ClosedInterval::new(7.0, 12.0).unwrap());
    /// ```
    pub fn difference(&self, other: Self) -> Pieces<T> {
        if self.is_disjoint(other) {
            return smallvec![*self];
        }

        let mut pieces = Pieces::new();
        if self.start < other.start {
            // other.start is above the domain minimum here, so a discrete
            // predecessor always exists and is >= self.start.
            let end = other.start.predecessor().unwrap_or(other.start);
            pieces.push(Self::new_unchecked(self.start, end));
        }
        if other.end < self.end {
            let start = other.end.successor().unwrap_or(other.end);
            pieces.push(Self::new_unchecked(start, self.end));
        }

        tracing::trace!(
            lhs = %self,
            rhs = %other,
            pieces = pieces.len(),
            "computed interval difference"
        );
        pieces
    }

    /// Calculates the set difference `self \ other`, keeping a margin of
    /// `step` between each remainder and `other`.
    ///
    /// The left piece ends at `other.start - step` and the right piece starts
    /// at `other.end + step`. A piece whose bounds would cross is dropped.
    /// This is how continuous domains express an exclusive boundary, e.g. a
    /// float epsilon or a `chrono::TimeDelta` for instants. `step`
    /// must be non-negative.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `step` is negative or not comparable (a NaN
    /// float), since the pieces would then overlap `other` or vanish. Also
    /// panics if `T`'s own addition or subtraction panics (integer overflow
    /// in debug builds, out-of-range instants).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0.0, 10.0).unwrap();
    /// let b = ClosedInterval::new(4.0, 6.0).unwrap();
    /// let diff = a.difference_by(b, 0.5);
    /// assert_eq!(diff[0], ClosedInterval::new(0.0, 3.5).unwrap());
    /// assert_eq!(diff[1], ClosedInterval::new(6.5, 10.0).unwrap());
    /// ```
    pub fn difference_by<S>(&self, other: Self, step: S) -> Pieces<T>
    where
        S: Copy,
        T: Add<S, Output = T> + Sub<S, Output = T>,
    {
        if self.is_disjoint(other) {
            return smallvec![*self];
        }

        let mut pieces = Pieces::new();
        if self.start < other.start {
            let end = other.start - step;
            debug_assert!(
                end <= other.start,
                "difference_by: step must be non-negative and comparable"
            );
            if self.start <= end {
                pieces.push(Self::new_unchecked(self.start, end));
            }
        }
        if other.end < self.end {
            let start = other.end + step;
            debug_assert!(
                start >= other.end,
                "difference_by: step must be non-negative and comparable"
            );
            if start <= self.end {
                pieces.push(Self::new_unchecked(start, self.end));
            }
        }
        pieces
    }

    /// Returns the interval separating two disjoint intervals.
    ///
    /// In discrete domains this is the set of values strictly between them,
    /// `[successor(left.end), predecessor(right.start)]`. Continuous domains
    /// have no neighbouring values, so the gap is reported with its closure
    /// bounds `[left.end, right.start]`, which touch both operands. Returns
    /// `None` if the intervals intersect or are adjacent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 4).unwrap();
    /// let b = ClosedInterval::new(10, 15).unwrap();
    /// assert_eq!(a.gap(b), Some(ClosedInterval::new(5, 9).unwrap()));
    /// assert_eq!(b.gap(a), Some(ClosedInterval::new(5, 9).unwrap()));
    /// ```
    pub fn gap(&self, other: Self) -> Option<Self> {
        if self.intersects(other) {
            return None;
        }

        let (left, right) = if self.end < other.start {
            (self, &other)
        } else {
            (&other, self)
        };
        let start = left.end.successor().unwrap_or(left.end);
        let end = right.start.predecessor().unwrap_or(right.start);

        if start <= end {
            Some(Self::new_unchecked(start, end))
        } else {
            None
        }
    }
}

impl<T> ClosedInterval<T>
where
    T: Domain + Num,
{
    /// Returns the length of the interval (`end - start`).
    ///
    /// A point interval has length zero. For signed integers spanning more
    /// than the type's maximum this overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(10, 20).unwrap().length(), 10);
    /// assert_eq!(ClosedInterval::new(0.5, 2.0).unwrap().length(), 1.5);
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        self.end - self.start
    }
}

impl<T> ClosedInterval<T>
where
    T: Domain + PrimInt,
{
    /// Calculates the midpoint of the interval, rounding toward negative infinity.
    ///
    /// The calculation is robust against integer overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(0, 10).unwrap().midpoint(), 5);
    /// assert_eq!(ClosedInterval::new(i32::MIN, i32::MAX).unwrap().midpoint(), -1);
    /// ```
    #[inline]
    pub fn midpoint(&self) -> T {
        (self.start >> 1) + (self.end >> 1) + (self.start & self.end & T::one())
    }

    /// Creates an iterator over the integer points in the interval, both
    /// bounds included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(1, 4).unwrap();
    /// let points: Vec<_> = iv.iter().collect();
    /// assert_eq!(points, vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> ClosedIntervalIter<T> {
        ClosedIntervalIter {
            front: self.start,
            back: self.end,
            exhausted: false,
        }
    }
}

/// An iterator over the integer points contained within a `ClosedInterval`.
///
/// Both bounds are yielded, including `T::MAX` as an end bound.
#[derive(Debug, Clone)]
pub struct ClosedIntervalIter<T> {
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for ClosedIntervalIter<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self
            .back
            .checked_sub(&self.front)
            .and_then(|dist| dist.to_usize())
            .and_then(|dist| dist.checked_add(1))
        {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for ClosedIntervalIter<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(result)
    }
}

impl<T> FusedIterator for ClosedIntervalIter<T> where T: PrimInt {}

impl<T> IntoIterator for ClosedInterval<T>
where
    T: Domain + PrimInt,
{
    type Item = T;
    type IntoIter = ClosedIntervalIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &ClosedInterval<T>
where
    T: Domain + PrimInt,
{
    type Item = T;
    type IntoIter = ClosedIntervalIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> BitAnd for ClosedInterval<T>
where
    T: Domain,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for ClosedInterval<T>
where
    T: Domain,
{
    type Output = Union<T>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: Domain,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}]",
            DisplayBound(&self.start),
            DisplayBound(&self.end)
        )
    }
}

impl<T> RangeBounds<T> for ClosedInterval<T> {
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.end)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for ClosedInterval<T>
where
    T: Domain,
{
    type Error = IntervalError;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<ClosedInterval<T>> for RangeInclusive<T> {
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.start..=iv.end
    }
}
