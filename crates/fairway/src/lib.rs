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

//! # Fairway
//!
//! Set algebra over a totally ordered 1-dimensional universe, such as a
//! timeline or a numberline. Instead of enumerating members, a set is
//! described by its cut points alone, so "every value greater than 5" costs
//! one stored bound no matter how large (or infinite) the universe is.
//!
//! ## Modules
//!
//! - `bound`: A single endpoint of an interval (`Bound<T>`): an optional cut
//!   value plus an inclusive/exclusive flag, together with the role-aware
//!   comparators (`cmp_lower`, `cmp_upper`, `cmp_lower_to_upper`) whose
//!   tie-break rules the rest of the algebra is built on.
//! - `range`: A single contiguous interval (`Range<T>`): bounded on either
//!   side, on both, or on neither, including the inverted form where the
//!   lower cut exceeds the upper cut and the range denotes two rays joined
//!   through infinity. Classification (`RangeKind`), containment,
//!   complement, subset/intersection/adjacency predicates, integer point
//!   iteration, and conversions to/from the std range types.
//! - `region`: An arbitrary union of intervals (`Region<T>`), stored as an
//!   ordered list of disjoint, non-adjacent ranges. Union and complement
//!   are the two primitive operations; intersection, difference, symmetric
//!   difference, equality and the subset relations are derived from them
//!   algebraically.
//! - `ops`: The operator surface: `|`, `&`, `-`, `^` and their assign forms
//!   across `Region`/`Range` operand mixes, plus `!` for complement.
//!
//! ## Example
//!
//! ```rust
//! use fairway::range::Range;
//! use fairway::region::Region;
//!
//! let weekdays = Range::closed(1, 5);
//! let weekend = Range::closed(6, 7);
//! let week: Region<i32> = weekdays | weekend;
//! assert!(week.contains(&3));
//! assert!(week.contains(&6));
//! assert!(!week.contains(&0));
//!
//! let gaps = !week;
//! assert!(gaps.contains(&0));
//! assert!(!gaps.contains(&3));
//! ```

pub mod bound;
pub mod ops;
pub mod range;
pub mod region;
