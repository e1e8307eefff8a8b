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

//! Validation errors raised when building intervals.
//!
//! The interval algebra itself is total: union, intersection and difference
//! never fail on valid operands. Errors only surface at construction time, or
//! when two runtime-typed intervals of different domain kinds are combined.

use crate::math::domain::DomainKind;
use thiserror::Error;

/// The error type for interval construction.
///
/// Bounds are carried in their rendered form so the error stays independent
/// of the bound type and can be compared directly in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The start bound lies after the end bound.
    #[error("invalid interval: start {start} is greater than end {end}")]
    InvalidOrder {
        /// The rendered start bound.
        start: String,
        /// The rendered end bound.
        end: String,
    },
    /// The two values belong to different domain kinds.
    #[error("mixed domains: {left} cannot be combined with {right}")]
    MixedDomain {
        /// The kind of the first (start or left-hand) value.
        left: DomainKind,
        /// The kind of the second (end or right-hand) value.
        right: DomainKind,
    },
    /// The two bounds have no ordering relative to each other (e.g. NaN).
    #[error("invalid interval: bounds {start} and {end} cannot be compared")]
    Unordered {
        /// The rendered start bound.
        start: String,
        /// The rendered end bound.
        end: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_order() {
        let err = IntervalError::InvalidOrder {
            start: "5".to_string(),
            end: "3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid interval: start 5 is greater than end 3"
        );
    }

    #[test]
    fn test_display_mixed_domain() {
        let err = IntervalError::MixedDomain {
            left: DomainKind::Discrete,
            right: DomainKind::Temporal,
        };
        assert_eq!(
            err.to_string(),
            "mixed domains: discrete cannot be combined with temporal"
        );
    }

    #[test]
    fn test_display_unordered() {
        let err = IntervalError::Unordered {
            start: "NaN".to_string(),
            end: "1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid interval: bounds NaN and 1 cannot be compared"
        );
    }
}
