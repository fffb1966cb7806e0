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

//! # Ranges
//!
//! A single contiguous interval over a totally ordered universe,
//! represented by at most two cut points. A range can be bounded on either
//! side, on both, or on neither, so "everything greater than 5" costs one
//! stored bound no matter how large the universe is.
//!
//! ## Inverted ranges
//!
//! When the lower cut exceeds the upper cut, the range is *inverted*: it
//! denotes everything *except* the interval between the two cuts, two
//! unbounded rays joined through infinity. This lets one `Range` value
//! describe the complement of a bounded interval without promoting to a
//! multi-range region. All case analyses dispatch on [`RangeKind`], which
//! classifies a range once instead of re-deriving the shape from loose
//! boolean checks.
//!
//! ## Construction
//!
//! Ranges are built through factories only. The combinations of absent cut
//! values and inclusion flags are not orthogonal to meaning; in particular,
//! equal cuts with exactly one inclusive side contradict themselves and
//! canonicalize to the universe (see [`Range::double_bounded`]).

use std::cmp::Ordering;
use std::fmt;
use std::ops::Not;

use num_traits::{CheckedAdd, CheckedSub, PrimInt};
use smallvec::SmallVec;

use crate::bound::Bound;

/// The shape of a range, derived from its cut points.
///
/// Every case analysis in the algebra pattern-matches on this
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// Contains no values.
    Empty,
    /// Contains every value; no cut points.
    Universe,
    /// Both cuts present, lower not exceeding upper.
    Bounded,
    /// Lower cut only; extends to positive infinity.
    LowerOnly,
    /// Upper cut only; extends to negative infinity.
    UpperOnly,
    /// Both cuts present with the lower exceeding the upper: everything
    /// outside the interval between them.
    Inverted,
}

/// A single interval over a totally ordered universe.
///
/// Ordering of values comes from `T: Ord`. The range is a plain value type:
/// copied freely, no interior resources.
///
/// Equality compares the cut points through the role-aware bound
/// comparators, so `[5, 10]` and `(5, 10]` differ. **Empty ranges never
/// compare equal**, not even to themselves; use [`Range::is_empty`] to test
/// for emptiness. (Region equality treats two empty regions as equal.)
///
/// # Examples
///
/// ```rust
/// # use fairway::range::Range;
///
/// let range = Range::at_least(1);
/// assert!(range.contains(&1));
/// assert!(range.contains(&1_000_000));
/// assert!(!range.contains(&0));
///
/// let hole = Range::double_bounded(1, -1, true, true);
/// assert!(hole.is_unbounded());
/// assert!(hole.contains(&-1));
/// assert!(!hole.contains(&0));
/// assert!(hole.contains(&1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Range<T> {
    lower: Bound<T>,
    upper: Bound<T>,
    empty: bool,
}

impl<T> Range<T> {
    /// Creates the empty range, which contains no values.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            lower: Bound::unbounded(),
            upper: Bound::unbounded(),
            empty: true,
        }
    }

    /// Creates the range containing every value.
    #[inline]
    pub const fn universe() -> Self {
        Self {
            lower: Bound::unbounded(),
            upper: Bound::unbounded(),
            empty: false,
        }
    }

    /// Creates a range bounded from below.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::range::Range;
    ///
    /// let range = Range::lower_bounded(5, false);
    /// assert!(!range.contains(&5));
    /// assert!(range.contains(&6));
    /// ```
    #[inline]
    pub fn lower_bounded(value: T, inclusive: bool) -> Self {
        Self {
            lower: Bound::new(value, inclusive),
            upper: Bound::unbounded(),
            empty: false,
        }
    }

    /// Creates a range bounded from above.
    #[inline]
    pub fn upper_bounded(value: T, inclusive: bool) -> Self {
        Self {
            lower: Bound::unbounded(),
            upper: Bound::new(value, inclusive),
            empty: false,
        }
    }

    /// Creates a range from an existing lower bound. An unbounded bound
    /// yields the empty range.
    #[inline]
    pub fn from_lower(bound: Bound<T>) -> Self {
        if bound.is_unbounded() {
            return Self::empty();
        }
        Self {
            lower: bound,
            upper: Bound::unbounded(),
            empty: false,
        }
    }

    /// Creates a range from an existing upper bound. An unbounded bound
    /// yields the empty range.
    #[inline]
    pub fn from_upper(bound: Bound<T>) -> Self {
        if bound.is_unbounded() {
            return Self::empty();
        }
        Self {
            lower: Bound::unbounded(),
            upper: bound,
            empty: false,
        }
    }

    /// The range of all values greater than or equal to `value`.
    #[inline]
    pub fn at_least(value: T) -> Self {
        Self::lower_bounded(value, true)
    }

    /// The range of all values strictly greater than `value`.
    #[inline]
    pub fn greater_than(value: T) -> Self {
        Self::lower_bounded(value, false)
    }

    /// The range of all values less than or equal to `value`.
    #[inline]
    pub fn at_most(value: T) -> Self {
        Self::upper_bounded(value, true)
    }

    /// The range of all values strictly less than `value`.
    #[inline]
    pub fn less_than(value: T) -> Self {
        Self::upper_bounded(value, false)
    }

    /// Returns the lower bound. Unbounded when the range has none.
    #[inline]
    pub fn lower(&self) -> &Bound<T> {
        &self.lower
    }

    /// Returns the upper bound. Unbounded when the range has none.
    #[inline]
    pub fn upper(&self) -> &Bound<T> {
        &self.upper
    }

    /// Returns true if the range has a lower cut point.
    #[inline]
    pub fn has_lower_bound(&self) -> bool {
        !self.lower.is_unbounded()
    }

    /// Returns true if the range has an upper cut point.
    #[inline]
    pub fn has_upper_bound(&self) -> bool {
        !self.upper.is_unbounded()
    }

    /// Replaces the lower bound. The range becomes non-empty.
    #[inline]
    pub fn set_lower(&mut self, bound: Bound<T>) {
        self.lower = bound;
        self.empty = false;
    }

    /// Replaces the upper bound. The range becomes non-empty.
    #[inline]
    pub fn set_upper(&mut self, bound: Bound<T>) {
        self.upper = bound;
        self.empty = false;
    }

    /// Clears the lower bound. A non-empty range with both bounds cleared is
    /// the universe.
    #[inline]
    pub fn clear_lower(&mut self) {
        self.lower.clear();
    }

    /// Clears the upper bound. A non-empty range with both bounds cleared is
    /// the universe.
    #[inline]
    pub fn clear_upper(&mut self) {
        self.upper.clear();
    }

    /// Clears both bounds and makes the range empty.
    #[inline]
    pub fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
        self.empty = true;
    }

    /// Returns true if the range contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Returns true if the range contains every value.
    #[inline]
    pub fn is_universe(&self) -> bool {
        !self.empty && !self.has_lower_bound() && !self.has_upper_bound()
    }

    /// Sets this range to its complement.
    ///
    /// Universe and empty swap; otherwise the two bounds swap roles and each
    /// inclusion flag flips (a value excluded from one side of a cut is
    /// included from the other side).
    pub fn complement(&mut self) -> &mut Self {
        if self.empty {
            *self = Self::universe();
        } else if self.is_universe() {
            *self = Self::empty();
        } else {
            std::mem::swap(&mut self.lower, &mut self.upper);
            self.lower.invert();
            self.upper.invert();
        }
        self
    }

    /// Returns the complement of this range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::range::Range;
    ///
    /// let range = Range::at_least(5);
    /// let complement = range.complemented();
    /// assert!(complement.contains(&4));
    /// assert!(!complement.contains(&5));
    /// assert_eq!(complement.complemented(), range);
    /// ```
    #[inline]
    pub fn complemented(&self) -> Self
    where
        T: Clone,
    {
        let mut range = self.clone();
        range.complement();
        range
    }
}

impl<T: Ord> Range<T> {
    /// Creates a range bounded on both sides.
    ///
    /// If the lower cut exceeds the upper cut the range is inverted: it
    /// contains everything outside the interval between the cuts.
    ///
    /// **Canonicalization**: equal cuts with exactly one inclusive side are
    /// contradictory (the single point is included from one side and
    /// excluded from the other) and collapse to the universe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::range::Range;
    ///
    /// let point = Range::double_bounded(0, 0, true, true);
    /// assert!(point.contains(&0));
    /// assert!(!point.contains(&1));
    ///
    /// let contradiction = Range::double_bounded(0, 0, true, false);
    /// assert!(contradiction.is_universe());
    /// ```
    pub fn double_bounded(lower: T, upper: T, lower_inclusive: bool, upper_inclusive: bool) -> Self {
        if lower == upper && (lower_inclusive ^ upper_inclusive) {
            return Self::universe();
        }
        Self {
            lower: Bound::new(lower, lower_inclusive),
            upper: Bound::new(upper, upper_inclusive),
            empty: false,
        }
    }

    /// The range `[lower, upper]`, both endpoints included.
    #[inline]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::double_bounded(lower, upper, true, true)
    }

    /// The range `(lower, upper)`, both endpoints excluded.
    #[inline]
    pub fn open(lower: T, upper: T) -> Self {
        Self::double_bounded(lower, upper, false, false)
    }

    /// Classifies the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::range::{Range, RangeKind};
    ///
    /// assert_eq!(Range::closed(0, 5).kind(), RangeKind::Bounded);
    /// assert_eq!(Range::at_least(0).kind(), RangeKind::LowerOnly);
    /// assert_eq!(Range::double_bounded(5, 0, true, true).kind(), RangeKind::Inverted);
    /// assert_eq!(Range::<i32>::universe().kind(), RangeKind::Universe);
    /// ```
    pub fn kind(&self) -> RangeKind {
        if self.empty {
            return RangeKind::Empty;
        }
        match (self.has_lower_bound(), self.has_upper_bound()) {
            (false, false) => RangeKind::Universe,
            (true, false) => RangeKind::LowerOnly,
            (false, true) => RangeKind::UpperOnly,
            (true, true) => {
                if Bound::cmp_lower_to_upper(&self.lower, &self.upper) == Ordering::Greater {
                    RangeKind::Inverted
                } else {
                    RangeKind::Bounded
                }
            }
        }
    }

    /// Returns true if the range reaches neither infinity: it is empty, or
    /// both cuts are present in order.
    ///
    /// Not the opposite of [`Range::is_unbounded`]; single-cut ranges are
    /// neither.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        matches!(self.kind(), RangeKind::Empty | RangeKind::Bounded)
    }

    /// Returns true if the range reaches both infinities: the universe, or
    /// an inverted range.
    ///
    /// Not the opposite of [`Range::is_bounded`].
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self.kind(), RangeKind::Universe | RangeKind::Inverted)
    }

    /// Returns true if the range is non-empty and has no upper cut.
    #[inline]
    pub fn is_unbounded_positive(&self) -> bool {
        matches!(self.kind(), RangeKind::Universe | RangeKind::LowerOnly)
    }

    /// Returns true if the range is non-empty and has no lower cut.
    #[inline]
    pub fn is_unbounded_negative(&self) -> bool {
        matches!(self.kind(), RangeKind::Universe | RangeKind::UpperOnly)
    }

    /// Returns true if the range contains `value`.
    ///
    /// Satisfaction of the two cuts is evaluated independently (a missing
    /// cut is always satisfied). An inverted range combines them with OR,
    /// every other shape with AND.
    pub fn contains(&self, value: &T) -> bool {
        let kind = self.kind();
        match kind {
            RangeKind::Empty => false,
            RangeKind::Universe => true,
            _ => {
                let satisfies_lower = match self.lower.get() {
                    None => true,
                    Some(cut) => match cut.cmp(value) {
                        Ordering::Less => true,
                        Ordering::Equal => self.lower.is_inclusive(),
                        Ordering::Greater => false,
                    },
                };
                let satisfies_upper = match self.upper.get() {
                    None => true,
                    Some(cut) => match value.cmp(cut) {
                        Ordering::Less => true,
                        Ordering::Equal => self.upper.is_inclusive(),
                        Ordering::Greater => false,
                    },
                };
                if kind == RangeKind::Inverted {
                    satisfies_lower || satisfies_upper
                } else {
                    satisfies_lower && satisfies_upper
                }
            }
        }
    }

    /// Returns true if `self` is a subset of `other`.
    ///
    /// The answer depends on the shapes of both operands; the full table
    /// over the kind cross-product is spelled out here rather than derived
    /// from a single comparison, because the unbounded and inverted shapes
    /// do not reduce to one.
    pub fn is_subset(&self, other: &Self) -> bool {
        use RangeKind::*;

        let lower_ge = || Bound::cmp_lower(&self.lower, &other.lower) != Ordering::Less;
        let upper_le = || Bound::cmp_upper(&self.upper, &other.upper) != Ordering::Greater;

        match (self.kind(), other.kind()) {
            (_, Universe) => true,
            (Empty, _) => true,
            (Universe, _) => false,
            (_, Empty) => false,

            // An inverted superset admits anything that stays on its rays.
            (Inverted, Inverted) => lower_ge() && upper_le(),
            (Bounded, Inverted) => lower_ge() || upper_le(),
            (LowerOnly, Inverted) => lower_ge(),
            (UpperOnly, Inverted) => upper_le(),

            (Bounded | LowerOnly, LowerOnly) => lower_ge(),
            (UpperOnly | Inverted, LowerOnly) => false,

            (Bounded | UpperOnly, UpperOnly) => upper_le(),
            (LowerOnly | Inverted, UpperOnly) => false,

            (Bounded, Bounded) => lower_ge() && upper_le(),
            (LowerOnly | UpperOnly | Inverted, Bounded) => false,
        }
    }

    /// Returns true if `self` is a superset of `other`.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns true if the two ranges share at least one value.
    ///
    /// The empty range intersects nothing; the universe intersects every
    /// non-empty range. The bounded-versus-unbounded case swaps the
    /// operands and recurses exactly once; the swapped call lands in an arm
    /// whose first operand is not bounded, so the recursion is terminal.
    pub fn intersects(&self, other: &Self) -> bool {
        use RangeKind::*;

        let lower_cmp = || Bound::cmp_lower(&self.lower, &other.lower);
        let upper_cmp = || Bound::cmp_upper(&self.upper, &other.upper);
        let my_lower_their_upper = || Bound::cmp_lower_to_upper(&self.lower, &other.upper);
        let their_lower_my_upper = || Bound::cmp_lower_to_upper(&other.lower, &self.upper);

        match (self.kind(), other.kind()) {
            (Empty, _) | (_, Empty) => false,
            (Universe, _) | (_, Universe) => true,

            (LowerOnly, LowerOnly) => true,
            (LowerOnly, UpperOnly) => my_lower_their_upper() != Ordering::Greater,
            (LowerOnly, Bounded | Inverted) => {
                lower_cmp() != Ordering::Greater || my_lower_their_upper() != Ordering::Greater
            }

            (UpperOnly, UpperOnly) => true,
            (UpperOnly, LowerOnly) => their_lower_my_upper() != Ordering::Greater,
            (UpperOnly, Bounded | Inverted) => {
                upper_cmp() != Ordering::Less || their_lower_my_upper() != Ordering::Greater
            }

            (Inverted, LowerOnly | UpperOnly | Inverted) => true,
            (Inverted, Bounded) => {
                lower_cmp() != Ordering::Greater
                    || my_lower_their_upper() != Ordering::Greater
                    || upper_cmp() != Ordering::Less
                    || their_lower_my_upper() != Ordering::Greater
            }

            (Bounded, Bounded) => {
                // Other's lower inside self, other's upper inside self, or
                // other encompasses self.
                (lower_cmp() != Ordering::Greater && their_lower_my_upper() != Ordering::Greater)
                    || (upper_cmp() != Ordering::Less
                        && my_lower_their_upper() != Ordering::Greater)
                    || (lower_cmp() != Ordering::Less && upper_cmp() != Ordering::Greater)
            }

            (Bounded, LowerOnly | UpperOnly | Inverted) => other.intersects(self),
        }
    }

    /// Returns true if the ranges touch without intersecting.
    ///
    /// True exactly when one range's upper cut equals the other's lower cut
    /// and exactly one of the two flags is inclusive: there is no gap and no
    /// overlap, so a union of the two fits in a single range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::range::Range;
    ///
    /// let below = Range::at_most(0);
    /// let above = Range::greater_than(0);
    /// assert!(below.is_adjacent(&above));
    /// assert!(!below.intersects(&above));
    ///
    /// // Both sides inclusive: the ranges overlap at 0 instead.
    /// assert!(!below.is_adjacent(&Range::at_least(0)));
    /// ```
    pub fn is_adjacent(&self, other: &Self) -> bool {
        let touches = |upper: &Bound<T>, lower: &Bound<T>| match (upper.get(), lower.get()) {
            (Some(u), Some(l)) => u == l && (upper.is_inclusive() ^ lower.is_inclusive()),
            _ => false,
        };
        touches(&self.upper, &other.lower) || touches(&other.upper, &self.lower)
    }

    /// Splits the range into its canonical non-inverted parts.
    ///
    /// The empty range has no parts. An inverted range splits into its
    /// upper-bounded ray followed by its lower-bounded ray. Any other range
    /// is its own single part. Region construction applies this before
    /// storing a range.
    pub fn disjoint_parts(&self) -> SmallVec<[Self; 2]>
    where
        T: Clone,
    {
        let mut parts = SmallVec::new();
        match self.kind() {
            RangeKind::Empty => {}
            RangeKind::Inverted => {
                parts.push(Self::from_upper(self.upper.clone()));
                parts.push(Self::from_lower(self.lower.clone()));
            }
            _ => parts.push(self.clone()),
        }
        parts
    }
}

impl<T: PrimInt + CheckedAdd + CheckedSub> Range<T> {
    /// Returns an iterator over the integer points of the range, or `None`
    /// when the point set is infinite (any shape other than empty or
    /// bounded).
    ///
    /// Exclusive endpoints are stepped over without overflowing at the
    /// numeric limits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::range::Range;
    ///
    /// let range = Range::double_bounded(0, 4, false, true);
    /// let points: Vec<i32> = range.points().unwrap().collect();
    /// assert_eq!(points, vec![1, 2, 3, 4]);
    ///
    /// assert!(Range::at_least(0).points().is_none());
    /// ```
    pub fn points(&self) -> Option<Points<T>> {
        match self.kind() {
            RangeKind::Empty => Some(Points::none()),
            RangeKind::Bounded => {
                let first = if self.lower.is_inclusive() {
                    *self.lower.value()
                } else {
                    match self.lower.value().checked_add(&T::one()) {
                        Some(first) => first,
                        None => return Some(Points::none()),
                    }
                };
                let last = if self.upper.is_inclusive() {
                    *self.upper.value()
                } else {
                    match self.upper.value().checked_sub(&T::one()) {
                        Some(last) => last,
                        None => return Some(Points::none()),
                    }
                };
                if first > last {
                    Some(Points::none())
                } else {
                    Some(Points {
                        next: Some(first),
                        last,
                    })
                }
            }
            _ => None,
        }
    }
}

/// An iterator over the integer points of a bounded range.
///
/// Created by [`Range::points`].
#[derive(Debug, Clone)]
pub struct Points<T> {
    next: Option<T>,
    last: T,
}

impl<T: PrimInt> Points<T> {
    #[inline]
    fn none() -> Self {
        Self {
            next: None,
            last: T::zero(),
        }
    }
}

impl<T: PrimInt + CheckedAdd + CheckedSub> Iterator for Points<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        self.next = if current == self.last {
            None
        } else {
            current.checked_add(&T::one())
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(front) => {
                // The span can overflow T (or usize) for wide ranges; fall
                // back to an unknown size rather than a wrong one.
                let count = self
                    .last
                    .checked_sub(&front)
                    .and_then(|span| span.to_usize())
                    .and_then(|span| span.checked_add(1));
                match count {
                    Some(count) => (count, Some(count)),
                    None => (0, None),
                }
            }
        }
    }
}

impl<T: PrimInt + CheckedAdd + CheckedSub> DoubleEndedIterator for Points<T> {
    fn next_back(&mut self) -> Option<T> {
        let front = self.next?;
        let current = self.last;
        if current == front {
            self.next = None;
        } else {
            // current > front, so the predecessor exists
            self.last = current - T::one();
        }
        Some(current)
    }
}

impl<T: PrimInt + CheckedAdd + CheckedSub> std::iter::FusedIterator for Points<T> {}

impl<T: Ord> PartialEq for Range<T> {
    /// Bound-by-bound equality through the role-aware comparators.
    ///
    /// Empty ranges never compare equal, mirroring the rule that emptiness
    /// is a state rather than a pair of cuts. This makes the relation
    /// non-reflexive, which is why `Range` does not implement `Eq`.
    fn eq(&self, other: &Self) -> bool {
        if self.empty || other.empty {
            return false;
        }
        let lower_eq = match (self.has_lower_bound(), other.has_lower_bound()) {
            (true, true) => Bound::cmp_lower(&self.lower, &other.lower) == Ordering::Equal,
            (false, false) => true,
            _ => false,
        };
        let upper_eq = match (self.has_upper_bound(), other.has_upper_bound()) {
            (true, true) => Bound::cmp_upper(&self.upper, &other.upper) == Ordering::Equal,
            (false, false) => true,
            _ => false,
        };
        lower_eq && upper_eq
    }
}

impl<T> Not for Range<T> {
    type Output = Range<T>;

    #[inline]
    fn not(mut self) -> Range<T> {
        self.complement();
        self
    }
}

impl<T: Ord> From<std::ops::Range<T>> for Range<T> {
    /// `start..end` maps to `[start, end)`. A std range whose start is not
    /// below its end is empty and maps to the empty range (it never hits
    /// the equal-cuts canonicalization).
    fn from(range: std::ops::Range<T>) -> Self {
        if range.start >= range.end {
            return Self::empty();
        }
        Self::double_bounded(range.start, range.end, true, false)
    }
}

impl<T: Ord> From<std::ops::RangeInclusive<T>> for Range<T> {
    /// `start..=end` maps to `[start, end]`; an exhausted std range maps to
    /// the empty range.
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        if start > end {
            return Self::empty();
        }
        Self::double_bounded(start, end, true, true)
    }
}

impl<T: Ord> From<std::ops::RangeFrom<T>> for Range<T> {
    fn from(range: std::ops::RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T: Ord> From<std::ops::RangeTo<T>> for Range<T> {
    fn from(range: std::ops::RangeTo<T>) -> Self {
        Self::less_than(range.end)
    }
}

impl<T: Ord> From<std::ops::RangeToInclusive<T>> for Range<T> {
    fn from(range: std::ops::RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T: Ord> From<std::ops::RangeFull> for Range<T> {
    fn from(_: std::ops::RangeFull) -> Self {
        Self::universe()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn lower_part<T: fmt::Display>(f: &mut fmt::Formatter<'_>, bound: &Bound<T>) -> fmt::Result {
            match bound.get() {
                Some(value) if bound.is_inclusive() => write!(f, "[{}", value),
                Some(value) => write!(f, "({}", value),
                None => write!(f, "(-∞"),
            }
        }
        fn upper_part<T: fmt::Display>(f: &mut fmt::Formatter<'_>, bound: &Bound<T>) -> fmt::Result {
            match bound.get() {
                Some(value) if bound.is_inclusive() => write!(f, "{}]", value),
                Some(value) => write!(f, "{})", value),
                None => write!(f, "∞)"),
            }
        }

        match self.kind() {
            RangeKind::Empty => write!(f, "∅"),
            RangeKind::Universe => write!(f, "(-∞, ∞)"),
            RangeKind::Inverted => {
                write!(f, "(-∞, ")?;
                upper_part(f, &self.upper)?;
                write!(f, " ∪ ")?;
                lower_part(f, &self.lower)?;
                write!(f, ", ∞)")
            }
            _ => {
                lower_part(f, &self.lower)?;
                write!(f, ", ")?;
                upper_part(f, &self.upper)
            }
        }
    }
}
