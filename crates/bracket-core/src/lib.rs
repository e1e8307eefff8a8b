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

//! # Bracket Core
//!
//! Closed-interval algebra over integers, reals, instants and dates. The crate
//! provides a single value type, `ClosedInterval<T>`, with validated
//! construction and three set operations between pairs of intervals: union,
//! intersection and difference.
//!
//! ## Modules
//!
//! - `math`: The interval type, the `Domain` trait that bound types implement,
//!   and a runtime-typed interval for bounds whose kind is only known at
//!   runtime.
//! - `error`: `IntervalError`, raised when construction is rejected.
//!
//! ## Features
//!
//! - `chrono` (default): `Domain` support for `chrono::DateTime<Tz>` and
//!   `chrono::NaiveDate`.
//! - `serde`: `Serialize`/`Deserialize` for the public value types.
//!   Deserialized intervals are validated like freshly constructed ones.
//!
//! ## Example
//!
//! ```rust
//! use bracket_core::math::interval::{ClosedInterval, Union};
//!
//! let a = ClosedInterval::new(1, 7)?;
//! let b = ClosedInterval::new(4, 12)?;
//!
//! assert_eq!(a.union(b), Union::Merged(ClosedInterval::new(1, 12)?));
//! assert_eq!(a.intersection(b), Some(ClosedInterval::new(4, 7)?));
//! assert_eq!(a.difference(b).as_slice(), &[ClosedInterval::new(1, 3)?]);
//! # Ok::<(), bracket_core::error::IntervalError>(())
//! ```

pub mod error;
pub mod math;

#[cfg(test)]
pub(crate) mod test_support;
