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

//! # Set Operators
//!
//! The operator surface of the algebra: `|` for union, `&` for
//! intersection, `-` for difference and `^` for symmetric difference, with
//! the assign forms on `Region`, across every `Region`/`Range` operand mix.
//! Operations between two ranges promote to a `Region`, since their result
//! is generally not a single contiguous range.
//!
//! Complement is `!` and is implemented next to each type, since it stays
//! within the type.
//!
//! ## Usage
//!
//! ```rust
//! use fairway::range::Range;
//! use fairway::region::Region;
//!
//! let busy: Region<i32> = Range::closed(9, 12) | Range::closed(13, 17);
//! let lunch = Range::open(12, 13);
//! let free = !(busy.clone() | lunch);
//! assert!(free.contains(&8));
//! assert!(!free.contains(&10));
//!
//! let overlap = busy & Region::from(Range::closed(11, 14));
//! assert!(overlap.contains(&12));
//! assert!(!overlap.contains(&9));
//! ```

use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign,
};

use crate::range::Range;
use crate::region::Region;

macro_rules! set_operators {
    ($op_trait:ident, $op_method:ident, $assign_trait:ident, $assign_method:ident, $with:ident) => {
        impl<T: Ord + Clone> $op_trait for Region<T> {
            type Output = Region<T>;

            #[inline]
            fn $op_method(mut self, rhs: Region<T>) -> Region<T> {
                self.$with(&rhs);
                self
            }
        }

        impl<T: Ord + Clone> $op_trait<Range<T>> for Region<T> {
            type Output = Region<T>;

            #[inline]
            fn $op_method(mut self, rhs: Range<T>) -> Region<T> {
                self.$with(&Region::from(rhs));
                self
            }
        }

        impl<T: Ord + Clone> $op_trait<Region<T>> for Range<T> {
            type Output = Region<T>;

            #[inline]
            fn $op_method(self, rhs: Region<T>) -> Region<T> {
                let mut lhs = Region::from(self);
                lhs.$with(&rhs);
                lhs
            }
        }

        impl<T: Ord + Clone> $op_trait for Range<T> {
            type Output = Region<T>;

            #[inline]
            fn $op_method(self, rhs: Range<T>) -> Region<T> {
                let mut lhs = Region::from(self);
                lhs.$with(&Region::from(rhs));
                lhs
            }
        }

        impl<T: Ord + Clone> $assign_trait for Region<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: Region<T>) {
                self.$with(&rhs);
            }
        }

        impl<T: Ord + Clone> $assign_trait<Range<T>> for Region<T> {
            #[inline]
            fn $assign_method(&mut self, rhs: Range<T>) {
                self.$with(&Region::from(rhs));
            }
        }
    };
}

set_operators!(BitOr, bitor, BitOrAssign, bitor_assign, union_with);
set_operators!(BitAnd, bitand, BitAndAssign, bitand_assign, intersect_with);
set_operators!(Sub, sub, SubAssign, sub_assign, difference_with);
set_operators!(BitXor, bitxor, BitXorAssign, bitxor_assign, symmetric_difference_with);
