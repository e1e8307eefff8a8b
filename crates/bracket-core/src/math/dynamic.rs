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

//! Runtime-typed intervals.
//!
//! [`ClosedInterval`] rules out mixed bound kinds at compile time. Callers
//! that receive bounds from outside (parsed input, a scripting layer, a
//! config file) only learn the kind at runtime; [`Value`] and [`AnyInterval`]
//! carry that kind along and reject mixtures with
//! [`IntervalError::MixedDomain`].

use crate::{
    error::IntervalError,
    math::{
        domain::{Domain, DomainKind},
        interval::ClosedInterval,
    },
};
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

/// A bound whose domain is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Value {
    /// A discrete integer.
    Integer(i64),
    /// A real number.
    Real(f64),
    /// An instant in UTC.
    #[cfg(feature = "chrono")]
    Instant(DateTime<Utc>),
}

impl Value {
    /// Returns the domain kind of this value.
    #[inline]
    pub fn kind(&self) -> DomainKind {
        match self {
            Self::Integer(_) => DomainKind::Discrete,
            Self::Real(_) => DomainKind::Continuous,
            #[cfg(feature = "chrono")]
            Self::Instant(_) => DomainKind::Temporal,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

#[cfg(feature = "chrono")]
impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Instant(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => v.fmt_bound(f),
            Self::Real(v) => v.fmt_bound(f),
            #[cfg(feature = "chrono")]
            Self::Instant(v) => v.fmt_bound(f),
        }
    }
}

/// An interval whose bound domain is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnyInterval {
    /// Integer bounds.
    Integer(ClosedInterval<i64>),
    /// Real bounds.
    Real(ClosedInterval<f64>),
    /// UTC instant bounds.
    #[cfg(feature = "chrono")]
    Instant(ClosedInterval<DateTime<Utc>>),
}

/// Pieces produced by runtime-typed union and difference.
pub type AnyPieces = SmallVec<[AnyInterval; 2]>;

impl From<ClosedInterval<i64>> for AnyInterval {
    fn from(iv: ClosedInterval<i64>) -> Self {
        Self::Integer(iv)
    }
}

impl From<ClosedInterval<f64>> for AnyInterval {
    fn from(iv: ClosedInterval<f64>) -> Self {
        Self::Real(iv)
    }
}

#[cfg(feature = "chrono")]
impl From<ClosedInterval<DateTime<Utc>>> for AnyInterval {
    fn from(iv: ClosedInterval<DateTime<Utc>>) -> Self {
        Self::Instant(iv)
    }
}

// Applies `$body` to two operands of the same kind, or reports the mismatch.
macro_rules! same_kind {
    ($lhs:expr, $rhs:expr, |$a:ident, $b:ident| $body:expr) => {
        match ($lhs, $rhs) {
            (AnyInterval::Integer($a), AnyInterval::Integer($b)) => Ok($body),
            (AnyInterval::Real($a), AnyInterval::Real($b)) => Ok($body),
            #[cfg(feature = "chrono")]
            (AnyInterval::Instant($a), AnyInterval::Instant($b)) => Ok($body),
            (lhs, rhs) => Err(mixed(lhs.kind(), rhs.kind())),
        }
    };
}

fn mixed(left: DomainKind, right: DomainKind) -> IntervalError {
    tracing::debug!(%left, %right, "rejected mixed domain kinds");
    IntervalError::MixedDomain { left, right }
}

impl AnyInterval {
    /// Creates a new interval from two runtime values.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::MixedDomain`] if `start` and `end` are of
    /// different kinds, otherwise any error of [`ClosedInterval::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bracket_core::{error::IntervalError, math::dynamic::{AnyInterval, Value}};
    ///
    /// let iv = AnyInterval::new(Value::Integer(1), Value::Integer(7)).unwrap();
    /// assert_eq!(iv.to_string(), "[1, 7]");
    ///
    /// let err = AnyInterval::new(Value::Integer(1), Value::Real(7.0)).unwrap_err();
    /// assert!(matches!(err, IntervalError::MixedDomain { .. }));
    /// ```
    pub fn new(start: Value, end: Value) -> Result<Self, IntervalError> {
        match (start, end) {
            (Value::Integer(s), Value::Integer(e)) => ClosedInterval::new(s, e).map(Self::Integer),
            (Value::Real(s), Value::Real(e)) => ClosedInterval::new(s, e).map(Self::Real),
            #[cfg(feature = "chrono")]
            (Value::Instant(s), Value::Instant(e)) => {
                ClosedInterval::new(s, e).map(Self::Instant)
            }
            (s, e) => Err(mixed(s.kind(), e.kind())),
        }
    }

    /// Returns the domain kind of the bounds.
    #[inline]
    pub fn kind(&self) -> DomainKind {
        match self {
            Self::Integer(_) => DomainKind::Discrete,
            Self::Real(_) => DomainKind::Continuous,
            #[cfg(feature = "chrono")]
            Self::Instant(_) => DomainKind::Temporal,
        }
    }

    /// Returns the start bound.
    #[inline]
    pub fn start(&self) -> Value {
        match self {
            Self::Integer(iv) => Value::Integer(iv.start()),
            Self::Real(iv) => Value::Real(iv.start()),
            #[cfg(feature = "chrono")]
            Self::Instant(iv) => Value::Instant(iv.start()),
        }
    }

    /// Returns the end bound.
    #[inline]
    pub fn end(&self) -> Value {
        match self {
            Self::Integer(iv) => Value::Integer(iv.end()),
            Self::Real(iv) => Value::Real(iv.end()),
            #[cfg(feature = "chrono")]
            Self::Instant(iv) => Value::Instant(iv.end()),
        }
    }

    /// Exact-set union, see [`ClosedInterval::union`].
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::MixedDomain`] if the operands differ in kind.
    pub fn union(&self, other: &Self) -> Result<AnyPieces, IntervalError> {
        same_kind!(self, other, |a, b| a
            .union(*b)
            .into_iter()
            .map(AnyInterval::from)
            .collect())
    }

    /// Smallest covering interval, see [`ClosedInterval::bounding_envelope`].
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::MixedDomain`] if the operands differ in kind.
    pub fn bounding_envelope(&self, other: &Self) -> Result<AnyInterval, IntervalError> {
        same_kind!(self, other, |a, b| AnyInterval::from(a.bounding_envelope(*b)))
    }

    /// Intersection, see [`ClosedInterval::intersection`].
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::MixedDomain`] if the operands differ in kind.
    pub fn intersection(&self, other: &Self) -> Result<Option<AnyInterval>, IntervalError> {
        same_kind!(self, other, |a, b| a.intersection(*b).map(AnyInterval::from))
    }

    /// Set difference `self \ other`, see [`ClosedInterval::difference`].
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::MixedDomain`] if the operands differ in kind.
    pub fn difference(&self, other: &Self) -> Result<AnyPieces, IntervalError> {
        same_kind!(self, other, |a, b| a
            .difference(*b)
            .into_iter()
            .map(AnyInterval::from)
            .collect())
    }
}

impl fmt::Display for AnyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(iv) => fmt::Display::fmt(iv, f),
            Self::Real(iv) => fmt::Display::fmt(iv, f),
            #[cfg(feature = "chrono")]
            Self::Instant(iv) => fmt::Display::fmt(iv, f),
        }
    }
}
