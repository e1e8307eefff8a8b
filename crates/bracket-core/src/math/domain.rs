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

//! Bound domains for closed intervals.
//!
//! A [`Domain`] is any totally ordered, copyable value type that can serve as
//! an interval bound. Domains differ in one respect that matters to the
//! algebra: whether consecutive values exist. Discrete domains (integers,
//! calendar dates) can name the value right before or after a bound, so set
//! difference can produce remainders that exclude the removed interval.
//! Continuous domains (floats, instants) cannot, and their remainders touch the
//! removed interval at the shared bound instead.

use std::fmt;

/// The broad family a bound type belongs to.
///
/// Two bounds of different kinds never form an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DomainKind {
    /// Integral numbers.
    Discrete,
    /// Real numbers.
    Continuous,
    /// Instants and dates on a time line.
    Temporal,
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discrete => write!(f, "discrete"),
            Self::Continuous => write!(f, "continuous"),
            Self::Temporal => write!(f, "temporal"),
        }
    }
}

/// An ordered value type usable as an interval bound.
///
/// # Adjacency
///
/// Implementations that set `SUPPORTS_ADJACENCY` must return `Some` from
/// [`Domain::predecessor`] for every value except the domain minimum, and
/// from [`Domain::successor`] for every value except the domain maximum.
/// Continuous domains keep the defaults, which always return `None`.
///
/// # Examples
///
/// ```rust
/// # use bracket_core::math::domain::{Domain, DomainKind};
///
/// assert_eq!(<i32 as Domain>::KIND, DomainKind::Discrete);
/// assert_eq!(7i32.predecessor(), Some(6));
/// assert_eq!(i32::MAX.successor(), None);
///
/// assert!(!<f64 as Domain>::SUPPORTS_ADJACENCY);
/// assert_eq!(1.5f64.predecessor(), None);
/// ```
pub trait Domain: Copy + PartialOrd + fmt::Debug {
    /// The family this type belongs to.
    const KIND: DomainKind;

    /// Whether consecutive values of this type can be named.
    const SUPPORTS_ADJACENCY: bool = false;

    /// Returns the value immediately before `self`, if one exists.
    #[inline]
    fn predecessor(self) -> Option<Self> {
        None
    }

    /// Returns the value immediately after `self`, if one exists.
    #[inline]
    fn successor(self) -> Option<Self> {
        None
    }

    /// Writes the textual form of a bound.
    fn fmt_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapter rendering a bound through [`Domain::fmt_bound`].
pub(crate) struct DisplayBound<'a, T>(pub(crate) &'a T);

impl<T> fmt::Display for DisplayBound<'_, T>
where
    T: Domain,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_bound(f)
    }
}

macro_rules! impl_discrete_domain_for {
    ($t:ty) => {
        impl Domain for $t {
            const KIND: DomainKind = DomainKind::Discrete;
            const SUPPORTS_ADJACENCY: bool = true;

            #[inline(always)]
            fn predecessor(self) -> Option<Self> {
                <$t>::checked_sub(self, 1)
            }

            #[inline(always)]
            fn successor(self) -> Option<Self> {
                <$t>::checked_add(self, 1)
            }

            #[inline]
            fn fmt_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    };
}

macro_rules! impl_continuous_domain_for {
    ($t:ty) => {
        impl Domain for $t {
            const KIND: DomainKind = DomainKind::Continuous;

            #[inline]
            fn fmt_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    };
}

impl_discrete_domain_for!(i8);
impl_discrete_domain_for!(u8);
impl_discrete_domain_for!(i16);
impl_discrete_domain_for!(u16);
impl_discrete_domain_for!(i32);
impl_discrete_domain_for!(u32);
impl_discrete_domain_for!(i64);
impl_discrete_domain_for!(u64);
impl_discrete_domain_for!(i128);
impl_discrete_domain_for!(u128);
impl_discrete_domain_for!(isize);
impl_discrete_domain_for!(usize);

impl_continuous_domain_for!(f32);
impl_continuous_domain_for!(f64);

/// Instants render as RFC 3339 timestamps, e.g. `2024-01-01T00:00:00+00:00`.
#[cfg(feature = "chrono")]
impl<Tz> Domain for chrono::DateTime<Tz>
where
    Tz: chrono::TimeZone,
    Tz::Offset: Copy + fmt::Display,
{
    const KIND: DomainKind = DomainKind::Temporal;

    #[inline]
    fn fmt_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Calendar dates step one day at a time and render in ISO 8601.
#[cfg(feature = "chrono")]
impl Domain for chrono::NaiveDate {
    const KIND: DomainKind = DomainKind::Temporal;
    const SUPPORTS_ADJACENCY: bool = true;

    #[inline]
    fn predecessor(self) -> Option<Self> {
        self.pred_opt()
    }

    #[inline]
    fn successor(self) -> Option<Self> {
        self.succ_opt()
    }

    #[inline]
    fn fmt_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: Domain>(value: T) -> String {
        DisplayBound(&value).to_string()
    }

    #[test]
    fn test_integer_kinds() {
        assert_eq!(<i8 as Domain>::KIND, DomainKind::Discrete);
        assert_eq!(<u64 as Domain>::KIND, DomainKind::Discrete);
        assert!(<usize as Domain>::SUPPORTS_ADJACENCY);
    }

    #[test]
    fn test_integer_steps() {
        assert_eq!(10i64.predecessor(), Some(9));
        assert_eq!(10i64.successor(), Some(11));
        assert_eq!((-3i32).predecessor(), Some(-4));
    }

    #[test]
    fn test_integer_steps_saturate_at_limits() {
        assert_eq!(u8::MIN.predecessor(), None);
        assert_eq!(u8::MAX.successor(), None);
        assert_eq!(i128::MIN.predecessor(), None);
        assert_eq!(i128::MAX.successor(), None);
    }

    #[test]
    fn test_float_has_no_adjacency() {
        assert_eq!(<f32 as Domain>::KIND, DomainKind::Continuous);
        assert!(!<f32 as Domain>::SUPPORTS_ADJACENCY);
        assert_eq!(2.0f32.successor(), None);
        assert_eq!(2.0f64.predecessor(), None);
    }

    #[test]
    fn test_render_numbers() {
        assert_eq!(render(42u16), "42");
        assert_eq!(render(-7i32), "-7");
        assert_eq!(render(2.5f64), "2.5");
        assert_eq!(render(3.0f64), "3");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_instant_domain() {
        use chrono::{TimeZone, Utc};

        let t = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        assert_eq!(<chrono::DateTime<Utc> as Domain>::KIND, DomainKind::Temporal);
        assert_eq!(t.successor(), None);
        assert_eq!(render(t), "2024-01-01T12:30:00+00:00");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_instant_with_fixed_offset() {
        use chrono::{FixedOffset, TimeZone};

        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let t = tz.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        assert_eq!(render(t), "2024-06-01T08:00:00+02:00");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_date_domain() {
        use chrono::NaiveDate;

        let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(<NaiveDate as Domain>::SUPPORTS_ADJACENCY);
        assert_eq!(d.predecessor(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(d.successor(), NaiveDate::from_ymd_opt(2024, 3, 2));
        assert_eq!(render(d), "2024-03-01");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DomainKind::Discrete.to_string(), "discrete");
        assert_eq!(DomainKind::Continuous.to_string(), "continuous");
        assert_eq!(DomainKind::Temporal.to_string(), "temporal");
    }
}
