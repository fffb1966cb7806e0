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

//! # Interval Bounds
//!
//! One endpoint of an interval: an optional cut value plus a flag recording
//! whether the cut value itself belongs to the interval. An absent value
//! means the interval extends to infinity on that side.
//!
//! ## Comparators
//!
//! Two bounds with equal cut values do not compare equal in every context:
//! the outcome depends on the inclusion flags and on the roles the bounds
//! play. `[5` starts earlier than `(5` when both act as lower bounds, `5]`
//! ends later than `5)` when both act as upper bounds, and a lower `(5`
//! never touches an upper `5)` at all. The three comparators in this module
//! encode exactly those tie-break tables; every ordering decision in the
//! range and region algebra goes through them.

use std::cmp::Ordering;

/// The role a pair of bounds plays in a comparison. The tie-break rule for
/// equal cut values differs per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CmpRole {
    /// Both operands act as lower bounds.
    Lower,
    /// Both operands act as upper bounds.
    Upper,
    /// The left operand acts as a lower bound, the right as an upper bound.
    LowerToUpper,
}

/// One endpoint of an interval.
///
/// A bound either holds a cut value together with an inclusion flag, or it
/// is unbounded (the interval extends to infinity on that side). An
/// unbounded bound always stores `inclusive == true`; the flag carries no
/// meaning without a value and the constructors normalize it.
///
/// Equality compares the cut value and the inclusion flag. Ordering-aware
/// comparisons must go through [`Bound::cmp_lower`], [`Bound::cmp_upper`] or
/// [`Bound::cmp_lower_to_upper`], which resolve equal values by role.
///
/// # Examples
///
/// ```rust
/// # use fairway::bound::Bound;
///
/// let closed = Bound::inclusive(5);
/// let open = Bound::exclusive(5);
/// assert_ne!(closed, open);
/// assert_eq!(closed.value(), &5);
/// assert!(closed.is_inclusive());
/// assert!(!open.is_inclusive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bound<T> {
    value: Option<T>,
    inclusive: bool,
}

impl<T> Bound<T> {
    /// Creates an unbounded bound (no cut value).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::bound::Bound;
    ///
    /// let b: Bound<i32> = Bound::unbounded();
    /// assert!(b.is_unbounded());
    /// ```
    #[inline]
    pub const fn unbounded() -> Self {
        Self {
            value: None,
            inclusive: true,
        }
    }

    /// Creates a bound at `value`, included in the interval when `inclusive`
    /// is true.
    #[inline]
    pub fn new(value: T, inclusive: bool) -> Self {
        Self {
            value: Some(value),
            inclusive,
        }
    }

    /// Creates an inclusive bound at `value`.
    #[inline]
    pub fn inclusive(value: T) -> Self {
        Self::new(value, true)
    }

    /// Creates an exclusive bound at `value`.
    #[inline]
    pub fn exclusive(value: T) -> Self {
        Self::new(value, false)
    }

    /// Returns the cut value.
    ///
    /// # Panics
    ///
    /// Panics if the bound is unbounded. Check [`Bound::is_unbounded`] first
    /// or use [`Bound::get`].
    #[inline]
    pub fn value(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => panic!("called `Bound::value` on an unbounded bound"),
        }
    }

    /// Returns the cut value, or `None` for an unbounded bound.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns true if the bound has no cut value.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.value.is_none()
    }

    /// Returns true if the cut value itself belongs to the interval.
    ///
    /// For an unbounded bound this is always true but carries no meaning.
    #[inline]
    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    /// Replaces the cut value and inclusion flag.
    #[inline]
    pub fn set(&mut self, value: T, inclusive: bool) {
        self.value = Some(value);
        self.inclusive = inclusive;
    }

    /// Clears the bound back to unbounded. The inclusion flag resets to
    /// true.
    #[inline]
    pub fn clear(&mut self) {
        self.value = None;
        self.inclusive = true;
    }

    /// Flips the inclusion flag in place. No-op for an unbounded bound.
    ///
    /// A value excluded from one side of a cut is included when the same cut
    /// is viewed from the complementary side, and vice versa.
    #[inline]
    pub fn invert(&mut self) {
        if self.value.is_some() {
            self.inclusive = !self.inclusive;
        }
    }

    /// Returns the same cut seen from the other side: the value is kept and
    /// the inclusion flag is flipped. An unbounded bound stays unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::bound::Bound;
    ///
    /// assert_eq!(Bound::inclusive(5).complemented(), Bound::exclusive(5));
    /// assert_eq!(Bound::<i32>::unbounded().complemented(), Bound::unbounded());
    /// ```
    #[inline]
    pub fn complemented(&self) -> Self
    where
        T: Clone,
    {
        let mut bound = self.clone();
        bound.invert();
        bound
    }
}

impl<T: Ord> Bound<T> {
    /// Compares two bounds that both act as lower bounds.
    ///
    /// On equal cut values the inclusive bound sorts as the smaller one: it
    /// admits the shared value, so the interval it starts reaches further
    /// down.
    ///
    /// # Panics
    ///
    /// Panics if either bound is unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::cmp::Ordering;
    /// # use fairway::bound::Bound;
    ///
    /// let closed = Bound::inclusive(5);
    /// let open = Bound::exclusive(5);
    /// assert_eq!(Bound::cmp_lower(&closed, &open), Ordering::Less);
    /// assert_eq!(Bound::cmp_lower(&open, &closed), Ordering::Greater);
    /// assert_eq!(Bound::cmp_lower(&open, &open), Ordering::Equal);
    /// ```
    #[inline]
    pub fn cmp_lower(lhs: &Self, rhs: &Self) -> Ordering {
        Self::cmp_at(lhs, rhs, CmpRole::Lower)
    }

    /// Compares two bounds that both act as upper bounds.
    ///
    /// On equal cut values the inclusive bound sorts as the larger one.
    ///
    /// # Panics
    ///
    /// Panics if either bound is unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::cmp::Ordering;
    /// # use fairway::bound::Bound;
    ///
    /// let closed = Bound::inclusive(5);
    /// let open = Bound::exclusive(5);
    /// assert_eq!(Bound::cmp_upper(&closed, &open), Ordering::Greater);
    /// assert_eq!(Bound::cmp_upper(&open, &closed), Ordering::Less);
    /// ```
    #[inline]
    pub fn cmp_upper(lhs: &Self, rhs: &Self) -> Ordering {
        Self::cmp_at(lhs, rhs, CmpRole::Upper)
    }

    /// Compares a lower bound against an upper bound.
    ///
    /// On equal cut values the result is `Equal` only when both bounds are
    /// inclusive; with any exclusivity the two cuts do not touch at that
    /// value and the lower bound sorts as the larger one.
    ///
    /// # Panics
    ///
    /// Panics if either bound is unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::cmp::Ordering;
    /// # use fairway::bound::Bound;
    ///
    /// // [5, ...) meets (..., 5] at exactly 5.
    /// let lower = Bound::inclusive(5);
    /// let upper = Bound::inclusive(5);
    /// assert_eq!(Bound::cmp_lower_to_upper(&lower, &upper), Ordering::Equal);
    ///
    /// // (5, ...) misses (..., 5]: there is no shared value.
    /// let lower = Bound::exclusive(5);
    /// assert_eq!(Bound::cmp_lower_to_upper(&lower, &upper), Ordering::Greater);
    /// ```
    #[inline]
    pub fn cmp_lower_to_upper(lower: &Self, upper: &Self) -> Ordering {
        Self::cmp_at(lower, upper, CmpRole::LowerToUpper)
    }

    fn cmp_at(lhs: &Self, rhs: &Self, role: CmpRole) -> Ordering {
        let ord = lhs.value().cmp(rhs.value());
        if ord != Ordering::Equal {
            return ord;
        }

        // Equal cut values: resolve by the inclusion flags and the roles.
        match role {
            CmpRole::Lower => match (lhs.inclusive, rhs.inclusive) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            },
            CmpRole::Upper => match (lhs.inclusive, rhs.inclusive) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            },
            CmpRole::LowerToUpper => {
                if lhs.inclusive && rhs.inclusive {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
        }
    }
}

impl<T> From<std::ops::Bound<T>> for Bound<T> {
    fn from(bound: std::ops::Bound<T>) -> Self {
        match bound {
            std::ops::Bound::Included(value) => Self::inclusive(value),
            std::ops::Bound::Excluded(value) => Self::exclusive(value),
            std::ops::Bound::Unbounded => Self::unbounded(),
        }
    }
}

impl<T> From<Bound<T>> for std::ops::Bound<T> {
    fn from(bound: Bound<T>) -> Self {
        match bound.value {
            Some(value) if bound.inclusive => std::ops::Bound::Included(value),
            Some(value) => std::ops::Bound::Excluded(value),
            None => std::ops::Bound::Unbounded,
        }
    }
}
