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

//! # Math Primitives
//!
//! Closed-interval math over ordered domains. Intervals are immutable values;
//! every operation returns new intervals, and "nothing left" is an explicit
//! `None` or an empty collection rather than a reversed interval.
//!
//! ## Submodules
//!
//! - `domain`: The `Domain` trait for bound types, the `DomainKind` families
//!   (discrete, continuous, temporal), and the adjacency capability that
//!   discrete domains provide.
//! - `interval`: A generic `[start, end]` interval type with validation,
//!   predicates (intersection, containment, adjacency), set operations
//!   (exact-set union, bounding envelope, intersection, difference, gap),
//!   measurements, and point iteration for integer bounds.
//! - `dynamic`: Runtime-typed bounds and intervals for callers that only learn
//!   the bound kind at runtime.
//!
//! ## Boundary convention
//!
//! Difference never lets a remainder overlap the removed interval in a
//! discrete domain: `[1, 12] \ [4, 7]` is `[1, 3]` and `[8, 12]`. Continuous
//! domains have no adjacent value, so remainders touch the removed interval:
//! `[1.0, 12.0] \ [4.0, 7.0]` is `[1.0, 4.0]` and `[7.0, 12.0]`.

pub mod domain;
pub mod dynamic;
pub mod interval;
