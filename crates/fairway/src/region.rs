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

//! # Regions
//!
//! An arbitrary union of intervals over a totally ordered universe. A
//! region stores an ascending list of disjoint, non-adjacent canonical
//! ranges (never empty, never the universe, never inverted); the universe
//! itself is a flag rather than a stored range. The invariants hold after
//! every operation, not eventually.
//!
//! ## Two primitives
//!
//! Only union and complement have real implementations. Union is a sorted
//! merge of two canonical range lists that coalesces intersecting or
//! adjacent neighbors through a threaded accumulator; complement flips
//! every stored range and re-stitches the gaps in a single reverse walk.
//! Every other operation (intersection, difference, symmetric difference,
//! equality, the subset relations) is a chain of those two, so their
//! invariant-preserving behavior is inherited rather than re-proved:
//! `A & B == !(!A | !B)`.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::ops::Not;

use num_traits::{CheckedAdd, CheckedSub, PrimInt};

use crate::bound::Bound;
use crate::range::Range;

/// An arbitrary set of values over a totally ordered universe, stored as a
/// union of disjoint ranges.
///
/// Ranges fed in through construction or union are normalized immediately:
/// inverted ranges split into their two rays, intersecting or adjacent
/// ranges coalesce, and a union that covers everything collapses to the
/// universe flag.
///
/// Equality is set equality, derived from the union/complement algebra
/// (see [`Region::is_subset`]); two empty regions are equal even though two
/// empty `Range` values are not.
///
/// # Examples
///
/// ```rust
/// # use fairway::range::Range;
/// # use fairway::region::Region;
///
/// let region: Region<i32> = Range::closed(0, 10) | Range::closed(15, 20);
/// assert_eq!(region.range_count(), 2);
/// assert!(region.contains(&5));
/// assert!(!region.contains(&12));
///
/// // Overlapping ranges merge into one.
/// let merged: Region<i32> = Range::closed(0, 10) | Range::closed(5, 15);
/// assert_eq!(merged.range_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Region<T> {
    ranges: VecDeque<Range<T>>,
    universe: bool,
}

impl<T> Region<T> {
    /// Creates the empty region.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            ranges: VecDeque::new(),
            universe: false,
        }
    }

    /// Creates the region covering every value.
    #[inline]
    pub const fn universe() -> Self {
        Self {
            ranges: VecDeque::new(),
            universe: true,
        }
    }

    /// Returns true if the region contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.universe && self.ranges.is_empty()
    }

    /// Returns true if the region covers every value.
    #[inline]
    pub fn is_universe(&self) -> bool {
        self.universe
    }

    /// Clears the region back to empty.
    #[inline]
    pub fn clear(&mut self) {
        self.ranges.clear();
        self.universe = false;
    }

    /// Iterates the stored ranges in ascending order.
    ///
    /// The ranges are pairwise disjoint and non-adjacent; the universe
    /// region stores none.
    #[inline]
    pub fn ranges(&self) -> impl Iterator<Item = &Range<T>> {
        self.ranges.iter()
    }

    /// Returns the number of stored ranges.
    #[inline]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Removes and returns the range at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_range_at(&mut self, index: usize) -> Range<T> {
        match self.ranges.remove(index) {
            Some(range) => range,
            None => panic!(
                "called `Region::remove_range_at` with index {} but the region holds {} ranges",
                index,
                self.ranges.len()
            ),
        }
    }
}

impl<T: Ord> Region<T> {
    /// Returns the stored range containing `item`, if any.
    ///
    /// The scan stops early once a range's lower cut exceeds the probe,
    /// since the stored ranges ascend.
    pub fn range_containing(&self, item: &T) -> Option<&Range<T>> {
        for range in &self.ranges {
            if range.contains(item) {
                return Some(range);
            }
            if let Some(cut) = range.lower().get() {
                if *cut > *item {
                    return None;
                }
            }
        }
        None
    }

    /// Returns true if the region contains `item`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::range::Range;
    /// # use fairway::region::Region;
    ///
    /// let region = Region::from(Range::at_least(10));
    /// assert!(region.contains(&10));
    /// assert!(!region.contains(&9));
    /// assert!(Region::<i32>::universe().contains(&-1_000_000));
    /// ```
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.universe || self.range_containing(item).is_some()
    }
}

impl<T: Ord + Clone> Region<T> {
    /// Sets this region to the union of itself with `other`.
    ///
    /// The general case merges the two ascending canonical lists, taking
    /// the earlier-starting head each step and coalescing it into the
    /// accumulated output range whenever the two intersect or are adjacent.
    /// A coalesced range that grows into the universe collapses the whole
    /// region immediately.
    pub fn union_with(&mut self, other: &Self) {
        if self.is_universe() || other.is_empty() {
            return;
        }
        if other.is_universe() || self.is_empty() {
            *self = other.clone();
            return;
        }

        let mut ours = std::mem::take(&mut self.ranges);
        let mut theirs = other.ranges.clone();
        let mut merged = VecDeque::with_capacity(ours.len() + theirs.len());
        let mut accumulator: Option<Range<T>> = None;

        while let Some(next) = Self::pop_earlier(&mut ours, &mut theirs) {
            match accumulator.as_mut() {
                None => accumulator = Some(next),
                Some(last) if last.intersects(&next) || last.is_adjacent(&next) => {
                    Self::merge_ranges(last, &next);
                    if last.is_universe() {
                        *self = Self::universe();
                        return;
                    }
                }
                Some(last) => merged.push_back(std::mem::replace(last, next)),
            }
        }
        if let Some(last) = accumulator {
            merged.push_back(last);
        }
        self.ranges = merged;
    }

    /// Returns the union of this region with `other`.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Sets this region to its complement.
    ///
    /// Every stored range is complemented in place (turning bounded ranges
    /// inverted and rays into their opposite rays), then a reverse walk
    /// stitches neighboring entries back into canonical gap ranges through
    /// a single carried upper bound. N stored ranges produce at most N+1
    /// output ranges.
    pub fn complement(&mut self) {
        if self.universe {
            self.universe = false;
            return;
        }
        if self.ranges.is_empty() {
            self.universe = true;
            return;
        }

        for range in &mut self.ranges {
            range.complement();
        }

        let mut pending_upper: Bound<T> = Bound::unbounded();
        let mut index = self.ranges.len();
        while index > 0 {
            index -= 1;
            debug_assert!(!self.ranges[index].is_empty());
            debug_assert!(!self.ranges[index].is_universe());

            if self.ranges[index].has_lower_bound() {
                if pending_upper.is_unbounded() {
                    if self.ranges[index].has_upper_bound() {
                        // Inverted entry with nothing carried yet: keep its
                        // lower ray here and carry the upper cut downward.
                        pending_upper = self.ranges[index].upper().clone();
                        self.ranges[index].clear_upper();
                    }
                } else if self.ranges[index].has_upper_bound() {
                    // Inverted entry with a carry: this entry becomes the
                    // gap up to the carried cut, and its own upper cut
                    // becomes the new carry.
                    let carried =
                        std::mem::replace(&mut pending_upper, self.ranges[index].upper().clone());
                    self.ranges[index].set_upper(carried);
                } else {
                    // Lower-only entry absorbs the carry and closes.
                    let carried = std::mem::replace(&mut pending_upper, Bound::unbounded());
                    self.ranges[index].set_upper(carried);
                }
            } else {
                // Upper-only entry: the complement of a stored lower-only
                // range, which sorted last, so no carry exists yet.
                debug_assert!(self.ranges[index].has_upper_bound());
                debug_assert!(pending_upper.is_unbounded());
                if index != 0 {
                    pending_upper = self.ranges[index].upper().clone();
                    let _ = self.ranges.remove(index);
                }
            }
        }

        if !pending_upper.is_unbounded() {
            self.ranges.push_front(Range::from_upper(pending_upper));
        }
    }

    /// Returns the complement of this region.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::range::Range;
    /// # use fairway::region::Region;
    ///
    /// let region: Region<i32> = Range::closed(0, 5) | Range::at_least(10);
    /// let complement = region.complemented();
    /// assert_eq!(complement.range_count(), 2);
    /// assert!(complement.contains(&-1));
    /// assert!(complement.contains(&7));
    /// assert!(!complement.contains(&0));
    /// assert!(!complement.contains(&10));
    /// ```
    #[inline]
    pub fn complemented(&self) -> Self {
        let mut result = self.clone();
        result.complement();
        result
    }

    /// Sets this region to its intersection with `other`, as
    /// `!(!self | !other)`.
    pub fn intersect_with(&mut self, other: &Self) {
        self.complement();
        self.union_with(&other.complemented());
        self.complement();
    }

    /// Returns the intersection of this region with `other`.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Sets this region to the values in it but not in `other`.
    #[inline]
    pub fn difference_with(&mut self, other: &Self) {
        self.intersect_with(&other.complemented());
    }

    /// Returns the values in this region but not in `other`.
    #[inline]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.difference_with(other);
        result
    }

    /// Sets this region to the values in exactly one of it and `other`.
    pub fn symmetric_difference_with(&mut self, other: &Self) {
        let intersection = self.intersection(other);
        self.union_with(other);
        self.difference_with(&intersection);
    }

    /// Returns the values in exactly one of this region and `other`.
    #[inline]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.symmetric_difference_with(other);
        result
    }

    /// Returns true if this region is a subset of `other`, derived as
    /// `self == (self & other)`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        *self == self.intersection(other)
    }

    /// Returns true if this region is a superset of `other`.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Pops the earlier-starting head of the two lists.
    ///
    /// Heads that intersect or touch may come off in either order; the
    /// accumulator in `union_with` coalesces them regardless.
    fn pop_earlier(
        ours: &mut VecDeque<Range<T>>,
        theirs: &mut VecDeque<Range<T>>,
    ) -> Option<Range<T>> {
        let take_ours = match (ours.front(), theirs.front()) {
            (None, None) => return None,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(a), Some(b)) => Self::starts_no_later(a, b),
        };
        if take_ours {
            ours.pop_front()
        } else {
            theirs.pop_front()
        }
    }

    /// Orders canonical ranges by their lower cut; a missing lower cut
    /// starts at negative infinity.
    fn starts_no_later(a: &Range<T>, b: &Range<T>) -> bool {
        match (a.has_lower_bound(), b.has_lower_bound()) {
            (false, _) => true,
            (true, false) => false,
            (true, true) => Bound::cmp_lower(a.lower(), b.lower()) != Ordering::Greater,
        }
    }

    /// Merges `other` into `into`. Both must be canonical, non-empty,
    /// non-universe ranges that intersect or are adjacent, so the result is
    /// guaranteed to fit in a single range: the lesser lower cut and the
    /// greater upper cut, where a missing cut always wins as more extreme.
    fn merge_ranges(into: &mut Range<T>, other: &Range<T>) {
        debug_assert!(!into.is_empty() && !other.is_empty());
        debug_assert!(!into.is_universe() && !other.is_universe());
        debug_assert!(!into.is_unbounded() && !other.is_unbounded());
        debug_assert!(into.intersects(other) || into.is_adjacent(other));

        if into.has_lower_bound() {
            if !other.has_lower_bound() {
                into.clear_lower();
            } else if Bound::cmp_lower(into.lower(), other.lower()) == Ordering::Greater {
                into.set_lower(other.lower().clone());
            }
        }
        if into.has_upper_bound() {
            if !other.has_upper_bound() {
                into.clear_upper();
            } else if Bound::cmp_upper(into.upper(), other.upper()) == Ordering::Less {
                into.set_upper(other.upper().clone());
            }
        }
    }
}

impl<T: PrimInt + CheckedAdd + CheckedSub> Region<T> {
    /// Returns an iterator over the integer points of the region, or `None`
    /// when the point set is infinite (the universe, or any stored range
    /// reaching an infinity).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway::range::Range;
    /// # use fairway::region::Region;
    ///
    /// let region: Region<i32> = Range::closed(0, 2) | Range::closed(7, 8);
    /// let points: Vec<i32> = region.points().unwrap().collect();
    /// assert_eq!(points, vec![0, 1, 2, 7, 8]);
    ///
    /// assert!(Region::from(Range::at_least(0)).points().is_none());
    /// ```
    pub fn points(&self) -> Option<impl Iterator<Item = T>> {
        if self.universe {
            return None;
        }
        let mut parts = Vec::with_capacity(self.ranges.len());
        for range in &self.ranges {
            parts.push(range.points()?);
        }
        Some(parts.into_iter().flatten())
    }
}

impl<T> Default for Region<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + Clone> From<Range<T>> for Region<T> {
    /// Wraps a single range. An inverted range is split into its two
    /// canonical rays before storage; the universe becomes the flag.
    fn from(range: Range<T>) -> Self {
        let mut region = Self::empty();
        if range.is_universe() {
            region.universe = true;
        } else {
            for part in range.disjoint_parts() {
                region.ranges.push_back(part);
            }
        }
        region
    }
}

impl<T: Ord + Clone> FromIterator<Range<T>> for Region<T> {
    /// Folds the ranges together with union.
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        let mut region = Self::empty();
        for range in iter {
            region.union_with(&Region::from(range));
        }
        region
    }
}

impl<T: Ord + Clone> PartialEq for Region<T> {
    /// Set equality, derived from the two primitives: two empties are
    /// equal, otherwise both differences must be empty.
    ///
    /// This walks the algebra (allocating temporaries) rather than the
    /// representation.
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.difference(other).is_empty() && other.difference(self).is_empty()
    }
}

impl<T: Ord + Clone> Eq for Region<T> {}

impl<T: Ord + Clone> Not for Region<T> {
    type Output = Region<T>;

    #[inline]
    fn not(mut self) -> Region<T> {
        self.complement();
        self
    }
}

impl<T: Ord + fmt::Display> fmt::Display for Region<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.universe {
            return write!(f, "(-∞, ∞)");
        }
        if self.ranges.is_empty() {
            return write!(f, "∅");
        }
        for (index, range) in self.ranges.iter().enumerate() {
            if index > 0 {
                write!(f, " ∪ ")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeKind;
    use proptest::prelude::*;

    /// Large sentinel standing in for "a value far past every cut".
    const INFINITY: i32 = 999_999;

    /// Checks that a region's stored ranges satisfy the representation
    /// invariants: canonical shapes, ascending, pairwise disjoint and
    /// non-adjacent.
    fn assert_canonical(region: &Region<i32>) {
        if region.is_universe() {
            assert_eq!(region.range_count(), 0);
            return;
        }
        let ranges: Vec<&Range<i32>> = region.ranges().collect();
        for (index, range) in ranges.iter().enumerate() {
            assert!(
                matches!(
                    range.kind(),
                    RangeKind::Bounded | RangeKind::LowerOnly | RangeKind::UpperOnly
                ),
                "stored range {range} is not canonical"
            );
            if index > 0 {
                assert!(range.has_lower_bound(), "only the first range may reach -∞");
            }
            if index + 1 < ranges.len() {
                assert!(range.has_upper_bound(), "only the last range may reach +∞");
            }
        }
        for pair in ranges.windows(2) {
            assert!(!pair[0].intersects(pair[1]), "{} intersects {}", pair[0], pair[1]);
            assert!(!pair[0].is_adjacent(pair[1]), "{} touches {}", pair[0], pair[1]);
            assert_eq!(
                Bound::cmp_lower_to_upper(pair[1].lower(), pair[0].upper()),
                Ordering::Greater,
                "{} is not ordered before {}",
                pair[0],
                pair[1]
            );
        }
    }

    fn assert_contains_exactly(region: &Region<i32>, contained: &[i32], excluded: &[i32]) {
        for value in contained {
            assert!(region.contains(value), "expected {region} to contain {value}");
        }
        for value in excluded {
            assert!(!region.contains(value), "expected {region} to exclude {value}");
        }
    }

    #[test]
    fn test_empty_and_universe() {
        let empty = Region::<i32>::empty();
        assert!(empty.is_empty());
        assert!(!empty.is_universe());
        assert_eq!(empty.range_count(), 0);
        assert!(!empty.contains(&0));

        let universe = Region::<i32>::universe();
        assert!(!universe.is_empty());
        assert!(universe.is_universe());
        assert_eq!(universe.range_count(), 0);
        assert!(universe.contains(&0));
        assert!(universe.contains(&INFINITY));
        assert!(universe.contains(&-INFINITY));

        let mut cleared = universe;
        cleared.clear();
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_from_range_splits_inverted() {
        let region = Region::from(Range::double_bounded(5, 0, true, true));
        assert_eq!(region.range_count(), 2);
        assert!(!region.is_universe());
        let ranges: Vec<&Range<i32>> = region.ranges().collect();
        assert_eq!(*ranges[0], Range::at_most(0));
        assert_eq!(*ranges[1], Range::at_least(5));
        assert_canonical(&region);

        assert!(Region::from(Range::<i32>::universe()).is_universe());
        assert!(Region::from(Range::<i32>::empty()).is_empty());
    }

    #[test]
    fn test_union_disjoint_bounded() {
        let a = Range::closed(0, 10);
        let b = Range::closed(15, 20);
        for region in [a | b, b | a] {
            assert_eq!(region.range_count(), 2);
            assert_contains_exactly(
                &region,
                &[0, 5, 10, 15, 18, 20],
                &[-1, 11, 12, 14, 21, INFINITY, -INFINITY],
            );
            assert_canonical(&region);
        }
    }

    #[test]
    fn test_union_keeps_excluded_boundary() {
        let a = Range::double_bounded(0, 10, true, false);
        let b = Range::double_bounded(10, 20, false, true);
        for region in [a | b, b | a] {
            // The value 10 belongs to neither side, so the ranges stay apart.
            assert_eq!(region.range_count(), 2);
            assert_contains_exactly(&region, &[0, 9, 11, 20], &[10, -1, 21]);
            assert_canonical(&region);
        }
    }

    #[test]
    fn test_union_merges_overlap() {
        let a = Range::closed(0, 10);
        let b = Range::closed(5, 15);
        for region in [a | b, b | a] {
            assert_eq!(region.range_count(), 1);
            assert_contains_exactly(&region, &[0, 5, 10, 15], &[-1, 16]);
        }
    }

    #[test]
    fn test_union_merges_adjacent() {
        let a = Range::closed(0, 5);
        let b = Range::double_bounded(5, 10, false, true);
        for region in [a | b, b | a] {
            assert_eq!(region.range_count(), 1);
            assert_contains_exactly(&region, &[0, 5, 6, 10], &[-1, 11]);
        }
    }

    #[test]
    fn test_union_absorbs_contained() {
        let a = Range::closed(0, 10);
        let b = Range::closed(2, 8);
        for region in [a | b, b | a] {
            assert_eq!(region.range_count(), 1);
            assert_contains_exactly(&region, &[0, 5, 10], &[-1, 11]);
        }
    }

    #[test]
    fn test_union_ray_with_bounded() {
        // Overlapping: one piece.
        let region = Range::at_least(0) | Range::closed(5, 10);
        assert_eq!(region.range_count(), 1);
        assert_contains_exactly(&region, &[0, 5, 100, INFINITY], &[-1, -INFINITY]);

        // Disjoint: the bounded range sorts first.
        for region in [
            Range::at_least(10) | Range::closed(0, 5),
            Range::closed(0, 5) | Range::at_least(10),
        ] {
            assert_eq!(region.range_count(), 2);
            assert_contains_exactly(&region, &[0, 5, 10, 100, INFINITY], &[-1, 6, 9, -INFINITY]);
            assert_canonical(&region);
        }

        // The ray swallows a range it overlaps.
        let region = Range::at_least(5) | Range::closed(0, 10);
        assert_eq!(region.range_count(), 1);
        assert_contains_exactly(&region, &[0, 5, 10, INFINITY], &[-1, -INFINITY]);

        // Same cases on the negative side.
        let region = Range::at_most(0) | Range::closed(-10, -5);
        assert_eq!(region.range_count(), 1);
        assert_contains_exactly(&region, &[-20, -10, 0, -INFINITY], &[1, INFINITY]);

        for region in [
            Range::at_most(0) | Range::closed(5, 10),
            Range::closed(5, 10) | Range::at_most(0),
        ] {
            assert_eq!(region.range_count(), 2);
            assert_contains_exactly(&region, &[-20, 0, 5, 10, -INFINITY], &[1, 4, 11, INFINITY]);
            assert_canonical(&region);
        }

        let region = Range::at_most(5) | Range::closed(0, 10);
        assert_eq!(region.range_count(), 1);
        assert_contains_exactly(&region, &[-20, 0, 10, -INFINITY], &[11, INFINITY]);
    }

    #[test]
    fn test_union_of_overlapping_rays_is_universe() {
        for region in [
            Range::at_least(0) | Range::at_most(5),
            Range::at_most(5) | Range::at_least(0),
        ] {
            assert!(region.is_universe());
            assert_eq!(region.range_count(), 0);
            assert!(region.contains(&INFINITY));
            assert!(region.contains(&-INFINITY));
        }

        // Touching at a single shared value also covers everything.
        let region = Range::at_most(0) | Range::greater_than(0);
        assert!(region.is_universe());
    }

    #[test]
    fn test_union_of_disjoint_rays_matches_inverted_range() {
        let from_rays = Range::at_least(5) | Range::at_most(0);
        let from_inverted = Region::from(Range::double_bounded(5, 0, true, true));
        for region in [&from_rays, &from_inverted] {
            assert_eq!(region.range_count(), 2);
            assert!(!region.is_universe());
            assert_contains_exactly(region, &[-20, 0, 5, 20, INFINITY, -INFINITY], &[1, 4]);
        }
        assert_eq!(from_rays, from_inverted);
    }

    #[test]
    fn test_union_inverted_with_covering_range_is_universe() {
        let pairs = [
            (Range::double_bounded(8, 2, true, true), Range::closed(0, 10)),
            (
                Range::double_bounded(10, 0, true, true),
                Range::double_bounded(0, 10, false, false),
            ),
            (
                Range::double_bounded(10, 0, false, false),
                Range::closed(0, 10),
            ),
        ];
        for (hole, cover) in pairs {
            for region in [hole | cover, cover | hole] {
                assert!(region.is_universe(), "{hole} | {cover}");
                assert_eq!(region.range_count(), 0);
            }
        }
    }

    #[test]
    fn test_union_inverted_with_inner_range() {
        let hole = Range::double_bounded(10, 0, true, true);
        let island = Range::closed(4, 6);
        for region in [hole | island, island | hole] {
            assert_eq!(region.range_count(), 3);
            let ranges: Vec<&Range<i32>> = region.ranges().collect();
            assert_eq!(*ranges[0], Range::at_most(0));
            assert_eq!(*ranges[1], Range::closed(4, 6));
            assert_eq!(*ranges[2], Range::at_least(10));
            assert_canonical(&region);
        }
    }

    #[test]
    fn test_union_of_multi_range_regions() {
        let a: Region<i32> =
            Range::closed(0, 5) | Range::closed(30, 40) | Range::at_least(100);
        let b: Region<i32> =
            Range::closed(10, 20) | Range::closed(35, 100) | Range::closed(150, 175);
        for region in [a.union(&b), b.union(&a)] {
            assert_eq!(region.range_count(), 3);
            assert_contains_exactly(
                &region,
                &[0, 5, 10, 20, 30, 40, 99, 100, 160, 200, INFINITY],
                &[-1, 6, 9, 21, 29, -INFINITY],
            );
            assert_canonical(&region);
        }

        let a: Region<i32> =
            Range::closed(0, 5) | Range::closed(30, 40) | Range::closed(80, 90);
        let b: Region<i32> =
            Range::closed(5, 30) | Range::closed(50, 60) | Range::closed(65, 70);
        for region in [a.union(&b), b.union(&a)] {
            assert_eq!(region.range_count(), 4);
            assert_contains_exactly(
                &region,
                &[0, 20, 40, 50, 60, 65, 70, 80, 90],
                &[-1, 41, 49, 61, 64, 71, 79, 91, INFINITY, -INFINITY],
            );
            assert_canonical(&region);
        }
    }

    #[test]
    fn test_complement_of_rays() {
        let region = Region::from(Range::at_least(0));
        let complement = region.complemented();
        assert_eq!(complement.range_count(), 1);
        assert_contains_exactly(&complement, &[-10, -1, -INFINITY], &[0, 10, INFINITY]);

        let region = Region::from(Range::at_most(0));
        let complement = region.complemented();
        assert_eq!(complement.range_count(), 1);
        assert_contains_exactly(&complement, &[1, 10, INFINITY], &[-10, 0, -INFINITY]);
    }

    #[test]
    fn test_complement_of_bounded_range() {
        let region = Region::from(Range::closed(-5, 5));
        let complement = complemented_and_checked(&region);
        assert_eq!(complement.range_count(), 2);
        assert_contains_exactly(
            &complement,
            &[-10, -6, 6, 10, INFINITY, -INFINITY],
            &[-5, 0, 5],
        );
    }

    #[test]
    fn test_complement_special_cases() {
        assert!(Region::<i32>::universe().complemented().is_empty());
        assert!(Region::<i32>::empty().complemented().is_universe());
        assert!(Region::from(Range::<i32>::universe()).complemented().is_empty());
        assert!(Region::from(Range::<i32>::empty()).complemented().is_universe());
    }

    fn complemented_and_checked(region: &Region<i32>) -> Region<i32> {
        let complement = region.complemented();
        assert_canonical(&complement);
        complement
    }

    #[test]
    fn test_complement_stitches_gaps() {
        // [0, 5] ∪ [10, ∞) becomes (-∞, 0) ∪ (5, 10).
        let region: Region<i32> = Range::closed(0, 5) | Range::at_least(10);
        let complement = complemented_and_checked(&region);
        assert_eq!(complement.range_count(), 2);
        let ranges: Vec<&Range<i32>> = complement.ranges().collect();
        assert_eq!(*ranges[0], Range::less_than(0));
        assert_eq!(*ranges[1], Range::open(5, 10));

        for value in -20..=30 {
            assert_ne!(region.contains(&value), complement.contains(&value), "{value}");
        }
        assert_eq!(complement.complemented(), region);
    }

    #[test]
    fn test_complement_of_two_bounded_ranges() {
        // Two islands complement into three pieces reaching both infinities.
        let region: Region<i32> = Range::closed(0, 5) | Range::closed(10, 15);
        let complement = complemented_and_checked(&region);
        assert_eq!(region.range_count(), 2);
        assert_eq!(complement.range_count(), 3);
        assert_contains_exactly(
            &complement,
            &[-20, -1, 6, 9, 16, 30, INFINITY, -INFINITY],
            &[0, 5, 10, 15],
        );

        let round_trip = complemented_and_checked(&complement);
        assert_eq!(round_trip.range_count(), 2);
        assert_eq!(round_trip, region);
    }

    #[test]
    fn test_complement_with_both_rays_stored() {
        // (-∞, 0] ∪ [5, 10] ∪ [20, ∞) flips to (0, 5) ∪ (10, 20).
        let region: Region<i32> = Range::at_most(0) | Range::closed(5, 10) | Range::at_least(20);
        let complement = complemented_and_checked(&region);
        assert_eq!(complement.range_count(), 2);
        let ranges: Vec<&Range<i32>> = complement.ranges().collect();
        assert_eq!(*ranges[0], Range::open(0, 5));
        assert_eq!(*ranges[1], Range::open(10, 20));
    }

    #[test]
    fn test_intersect_universe_and_empty() {
        let region = Region::<i32>::universe() & Range::closed(0, 5);
        assert!(!region.is_empty());
        assert_eq!(region.range_count(), 1);
        assert_contains_exactly(&region, &[0, 5], &[-1, 6]);

        assert!((Region::<i32>::empty() & Range::closed(0, 5)).is_empty());
        assert!((Region::<i32>::empty() & Region::<i32>::universe()).is_empty());
    }

    #[test]
    fn test_intersect_ranges() {
        // Disjoint.
        assert!((Range::closed(0, 5) & Range::closed(10, 15)).is_empty());

        // Overlapping.
        let region = Range::closed(0, 5) & Range::closed(3, 10);
        assert_contains_exactly(&region, &[3, 4, 5], &[2, 6]);

        // Touching at one shared inclusive value.
        let region = Range::closed(0, 5) & Range::closed(5, 10);
        assert!(!region.is_empty());
        assert_contains_exactly(&region, &[5], &[4, 6]);

        // Touching at a value only one side includes.
        let a = Range::double_bounded(0, 5, true, false);
        let b = Range::double_bounded(5, 10, false, true);
        assert!((a & b).is_empty());

        // Opposing rays overlap in a window.
        let region = Range::at_least(0) & Range::at_most(5);
        assert_eq!(region.range_count(), 1);
        assert_contains_exactly(&region, &[0, 5], &[-1, 6, INFINITY, -INFINITY]);

        // Opposing rays that never meet.
        assert!((Range::at_least(5) & Range::at_most(-5)).is_empty());
    }

    #[test]
    fn test_intersect_with_multi_range_region() {
        let region = Range::closed(5, 15) & (Range::closed(0, 8) | Range::closed(12, 20));
        assert_eq!(region.range_count(), 2);
        assert_contains_exactly(&region, &[5, 8, 12, 15], &[4, 9, 11, 16]);
        assert_canonical(&region);

        // The open window misses both islands.
        let region = Range::open(5, 15) & (Range::closed(0, 5) | Range::closed(15, 20));
        assert!(region.is_empty());
    }

    #[test]
    fn test_difference() {
        let region = Range::at_least(0) - Range::at_least(10);
        assert_eq!(region.range_count(), 1);
        assert_contains_exactly(&region, &[0, 9], &[-1, 10, 20]);

        let region = Range::closed(0, 10) - Range::at_least(5);
        assert_eq!(region.range_count(), 1);
        assert_contains_exactly(&region, &[0, 4], &[-1, 5, 20]);

        // Subtracting the middle splits the range.
        let region = Range::closed(0, 10) - Range::closed(3, 7);
        assert_eq!(region.range_count(), 2);
        assert_contains_exactly(&region, &[0, 2, 8, 10], &[-1, 3, 7, 11]);
        assert_canonical(&region);

        let region = (Range::closed(0, 10) | Range::closed(20, 30)) - Range::closed(6, 24);
        assert_eq!(region.range_count(), 2);
        assert_contains_exactly(&region, &[0, 5, 25, 30], &[-1, 6, 24, 31]);

        // Subtracting a superset leaves nothing.
        assert!((Range::closed(2, 8) - Range::closed(0, 10)).is_empty());

        let region = (Range::closed(5, 10) | Range::closed(20, 30) | Range::at_least(40))
            - (Range::double_bounded(0, 25, true, false) | Range::open(45, 50));
        assert_eq!(region.range_count(), 3);
        assert_contains_exactly(
            &region,
            &[25, 30, 40, 45, 50, 60, INFINITY],
            &[-10, 0, 10, 24, 31, 39, 46, 49, -INFINITY],
        );
        assert_canonical(&region);
    }

    #[test]
    fn test_symmetric_difference() {
        let region = Range::closed(0, 10) ^ Range::closed(5, 15);
        assert_eq!(region.range_count(), 2);
        assert_contains_exactly(&region, &[0, 4, 11, 15], &[-1, 5, 10, 16]);
        assert_canonical(&region);

        let region = (Range::closed(0, 10) | Range::closed(20, 30)) ^ Range::closed(5, 25);
        assert_eq!(region.range_count(), 3);
        assert_contains_exactly(
            &region,
            &[0, 4, 11, 19, 26, 30],
            &[-1, 5, 10, 20, 25, 31],
        );
        assert_canonical(&region);
    }

    #[test]
    fn test_equality_and_subsets() {
        let a: Region<i32> = Range::closed(0, 5) | Range::closed(10, 15);
        let b: Region<i32> = Range::closed(10, 15) | Range::closed(0, 5);
        assert_eq!(a, b);
        assert_ne!(a, Region::from(Range::closed(0, 15)));
        assert_eq!(Region::<i32>::empty(), Region::<i32>::empty());
        assert_ne!(Region::<i32>::empty(), a);
        assert_eq!(Region::<i32>::universe(), Region::<i32>::universe());

        assert!(a.is_subset(&a));
        let sub = Region::from(Range::closed(1, 4));
        assert!(sub.is_subset(&a));
        assert!(!a.is_subset(&sub));
        assert!(a.is_superset(&sub));
        assert!(Region::<i32>::empty().is_subset(&sub));
        assert!(sub.is_subset(&Region::universe()));
    }

    #[test]
    fn test_range_containing() {
        let region: Region<i32> = Range::closed(0, 5) | Range::closed(10, 15);
        assert_eq!(region.range_containing(&3), Some(&Range::closed(0, 5)));
        assert_eq!(region.range_containing(&10), Some(&Range::closed(10, 15)));
        assert_eq!(region.range_containing(&7), None);
        assert_eq!(region.range_containing(&-1), None);
        assert_eq!(region.range_containing(&16), None);

        // A leading ray has no lower cut but still answers membership.
        let region: Region<i32> = Range::at_most(0) | Range::closed(5, 10);
        assert_eq!(region.range_containing(&-100), Some(&Range::at_most(0)));
        assert_eq!(region.range_containing(&3), None);
    }

    #[test]
    fn test_remove_range_at() {
        let mut region: Region<i32> = Range::closed(0, 5) | Range::closed(10, 15);
        let removed = region.remove_range_at(0);
        assert_eq!(removed, Range::closed(0, 5));
        assert_eq!(region.range_count(), 1);
        assert!(!region.contains(&3));
        assert!(region.contains(&12));
    }

    #[test]
    #[should_panic(expected = "remove_range_at")]
    fn test_remove_range_at_out_of_bounds() {
        let mut region = Region::from(Range::closed(0, 5));
        let _ = region.remove_range_at(1);
    }

    #[test]
    fn test_points() {
        let region: Region<i32> = Range::closed(0, 2) | Range::open(5, 8);
        let points: Vec<i32> = region.points().unwrap().collect();
        assert_eq!(points, vec![0, 1, 2, 6, 7]);

        assert!(Region::<i32>::empty().points().unwrap().next().is_none());
        assert!(Region::<i32>::universe().points().is_none());
        assert!(Region::from(Range::at_least(0)).points().is_none());
    }

    #[test]
    fn test_from_iterator() {
        let region: Region<i32> = [Range::closed(0, 5), Range::closed(4, 10), Range::closed(20, 25)]
            .into_iter()
            .collect();
        assert_eq!(region.range_count(), 2);
        assert_contains_exactly(&region, &[0, 10, 20], &[11, 19, 26]);

        let empty: Region<i32> = std::iter::empty().collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Region::<i32>::empty().to_string(), "∅");
        assert_eq!(Region::<i32>::universe().to_string(), "(-∞, ∞)");
        let region: Region<i32> = Range::closed(0, 5) | Range::at_least(10);
        assert_eq!(region.to_string(), "[0, 5] ∪ [10, ∞)");
    }

    fn arb_range() -> impl Strategy<Value = Range<i32>> {
        prop_oneof![
            Just(Range::empty()),
            Just(Range::universe()),
            (-50..50i32, any::<bool>()).prop_map(|(v, inc)| Range::lower_bounded(v, inc)),
            (-50..50i32, any::<bool>()).prop_map(|(v, inc)| Range::upper_bounded(v, inc)),
            (-50..50i32, -50..50i32, any::<bool>(), any::<bool>())
                .prop_map(|(lo, hi, inc_lo, inc_hi)| Range::double_bounded(lo, hi, inc_lo, inc_hi)),
        ]
    }

    fn arb_region() -> impl Strategy<Value = Region<i32>> {
        prop::collection::vec(arb_range(), 0..4).prop_map(|ranges| ranges.into_iter().collect())
    }

    proptest::proptest! {
        #[test]
        fn prop_regions_stay_canonical(a in arb_region(), b in arb_region()) {
            assert_canonical(&a);
            assert_canonical(&a.union(&b));
            assert_canonical(&a.complemented());
            assert_canonical(&a.intersection(&b));
            assert_canonical(&a.difference(&b));
            assert_canonical(&a.symmetric_difference(&b));
        }

        #[test]
        fn prop_membership_oracles(a in arb_region(), b in arb_region(), value in -60..60i32) {
            prop_assert_eq!(
                a.union(&b).contains(&value),
                a.contains(&value) || b.contains(&value)
            );
            prop_assert_eq!(
                a.intersection(&b).contains(&value),
                a.contains(&value) && b.contains(&value)
            );
            prop_assert_eq!(
                a.difference(&b).contains(&value),
                a.contains(&value) && !b.contains(&value)
            );
            prop_assert_eq!(
                a.symmetric_difference(&b).contains(&value),
                a.contains(&value) ^ b.contains(&value)
            );
            prop_assert_eq!(a.complemented().contains(&value), !a.contains(&value));
        }

        #[test]
        fn prop_double_complement_is_identity(a in arb_region()) {
            prop_assert_eq!(a.complemented().complemented(), a);
        }

        #[test]
        fn prop_union_commutes_and_associates(
            a in arb_region(),
            b in arb_region(),
            c in arb_region(),
        ) {
            prop_assert_eq!(a.union(&b), b.union(&a));
            prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
        }

        #[test]
        fn prop_intersection_commutes(a in arb_region(), b in arb_region()) {
            prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        }

        #[test]
        fn prop_de_morgan(a in arb_region(), b in arb_region()) {
            prop_assert_eq!(
                a.union(&b).complemented(),
                a.complemented().intersection(&b.complemented())
            );
        }

        #[test]
        fn prop_subset_laws(a in arb_region(), b in arb_region()) {
            prop_assert!(a.is_subset(&a));
            if a.is_subset(&b) && b.is_subset(&a) {
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn prop_round_trip_single_range(lo in -50..50i32, hi in -50..50i32) {
            prop_assume!(lo <= hi);
            let range = Range::closed(lo, hi);
            let region = Region::from(range);
            prop_assert_eq!(region.range_count(), 1);
            prop_assert_eq!(region.ranges().next().unwrap(), &range);
        }
    }
}
