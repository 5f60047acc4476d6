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

//! # Calendar Rate Periods
//!
//! This module provides the period types the overlap logic operates on.
//!
//! A `RatePeriod` is a **closed** calendar interval `[start, end]`: both the
//! start and the end date belong to the period. The end may be open
//! (`PeriodEnd::Unbounded`), in which case the period extends indefinitely
//! into the future. `PeriodEnd` is totally ordered with `Unbounded` greater
//! than every concrete date, so the overlap test needs no special casing of
//! open ends at the comparison sites.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// The end of a rate validity period.
///
/// Either a concrete calendar date (inclusive) or `Unbounded`, meaning the
/// period has no end. The ordering treats `Unbounded` as strictly greater
/// than every `Bounded` date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use supplier_rates_core::period::PeriodEnd;
///
/// let d = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
/// assert!(PeriodEnd::Unbounded > PeriodEnd::Bounded(d));
/// assert!(PeriodEnd::Bounded(d) >= d);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodEnd {
    Bounded(NaiveDate),
    Unbounded,
}

impl PeriodEnd {
    #[inline]
    pub const fn bounded(date: NaiveDate) -> Self {
        PeriodEnd::Bounded(date)
    }

    #[inline]
    pub const fn unbounded() -> Self {
        PeriodEnd::Unbounded
    }

    /// Returns `true` if the end is open.
    #[inline]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, PeriodEnd::Unbounded)
    }

    /// Returns the concrete end date, or `None` for an open end.
    #[inline]
    pub const fn date(self) -> Option<NaiveDate> {
        match self {
            PeriodEnd::Bounded(date) => Some(date),
            PeriodEnd::Unbounded => None,
        }
    }
}

impl Ord for PeriodEnd {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PeriodEnd::Unbounded, PeriodEnd::Unbounded) => Ordering::Equal,
            (PeriodEnd::Unbounded, PeriodEnd::Bounded(_)) => Ordering::Greater,
            (PeriodEnd::Bounded(_), PeriodEnd::Unbounded) => Ordering::Less,
            (PeriodEnd::Bounded(a), PeriodEnd::Bounded(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for PeriodEnd {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<NaiveDate> for PeriodEnd {
    #[inline]
    fn eq(&self, other: &NaiveDate) -> bool {
        matches!(self, PeriodEnd::Bounded(date) if date == other)
    }
}

impl PartialOrd<NaiveDate> for PeriodEnd {
    #[inline]
    fn partial_cmp(&self, other: &NaiveDate) -> Option<Ordering> {
        match self {
            PeriodEnd::Unbounded => Some(Ordering::Greater),
            PeriodEnd::Bounded(date) => date.partial_cmp(other),
        }
    }
}

impl From<NaiveDate> for PeriodEnd {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        PeriodEnd::Bounded(date)
    }
}

impl From<Option<NaiveDate>> for PeriodEnd {
    #[inline]
    fn from(date: Option<NaiveDate>) -> Self {
        match date {
            Some(date) => PeriodEnd::Bounded(date),
            None => PeriodEnd::Unbounded,
        }
    }
}

impl fmt::Display for PeriodEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodEnd::Bounded(date) => write!(f, "{}", date),
            PeriodEnd::Unbounded => write!(f, "open"),
        }
    }
}

/// A rate validity period `[start, end]` with inclusive bounds.
///
/// The start date is always concrete; the end may be open. Two periods that
/// touch on a shared date (one ends on day N, the other starts on day N) are
/// considered overlapping.
///
/// The constructors do **not** validate `end >= start`; a reversed period is
/// representable, and the overlap test simply computes whatever the bound
/// comparisons yield. Data layers that want to reject reversed periods can
/// check [`RatePeriod::is_well_formed`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use supplier_rates_core::period::RatePeriod;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let a = RatePeriod::closed(d(2016, 12, 1), d(2017, 1, 1));
/// let b = RatePeriod::open_ended(d(2017, 1, 2));
/// assert!(!a.overlaps(&b)); // one-day gap
///
/// let c = RatePeriod::closed(d(2016, 12, 15), d(2017, 1, 15));
/// assert!(a.overlaps(&c));
/// assert!(c.overlaps(&a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatePeriod {
    start: NaiveDate,
    end: PeriodEnd,
}

impl RatePeriod {
    /// Creates a period from a start date and an already-typed end.
    #[inline]
    pub const fn new(start: NaiveDate, end: PeriodEnd) -> Self {
        Self { start, end }
    }

    /// Creates a closed period `[start, end]`.
    #[inline]
    pub const fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: PeriodEnd::Bounded(end),
        }
    }

    /// Creates an open-ended period `[start, ∞)`.
    #[inline]
    pub const fn open_ended(start: NaiveDate) -> Self {
        Self {
            start,
            end: PeriodEnd::Unbounded,
        }
    }

    /// Creates a period from a start date and an optional end date, mapping
    /// `None` to an open end.
    #[inline]
    pub fn from_bounds(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self {
            start,
            end: end.into(),
        }
    }

    /// Returns the inclusive start date.
    #[inline]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the inclusive end.
    #[inline]
    pub const fn end(&self) -> PeriodEnd {
        self.end
    }

    /// Returns `true` if the period has no end date.
    #[inline]
    pub const fn is_open_ended(&self) -> bool {
        self.end.is_unbounded()
    }

    /// Returns `true` if the end does not precede the start.
    ///
    /// Open-ended periods are always well-formed.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.end >= self.start
    }

    /// Checks if the period contains a date (both bounds inclusive).
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use supplier_rates_core::period::RatePeriod;
    ///
    /// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    /// let p = RatePeriod::closed(d(2015, 1, 1), d(2015, 3, 31));
    /// assert!(p.contains(d(2015, 1, 1)));
    /// assert!(p.contains(d(2015, 3, 31)));
    /// assert!(!p.contains(d(2015, 4, 1)));
    /// ```
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && self.end >= date
    }

    /// Checks if this period ends strictly before another starts.
    ///
    /// Touching periods do not precede each other; with inclusive bounds a
    /// shared date is an overlap.
    #[inline]
    pub fn precedes(&self, other: &Self) -> bool {
        self.end < other.start
    }

    /// Checks if two periods share at least one calendar date.
    ///
    /// Both bounds are inclusive and an open end compares greater than every
    /// date, so the test is two comparisons with no branching on openness:
    /// `a` and `b` overlap iff `a.start <= end(b)` and `b.start <= end(a)`.
    /// The test is commutative and does not assume well-formed inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use supplier_rates_core::period::RatePeriod;
    ///
    /// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    ///
    /// // Touching on a shared boundary date counts as overlapping.
    /// let a = RatePeriod::closed(d(2020, 1, 1), d(2020, 6, 30));
    /// let b = RatePeriod::closed(d(2020, 6, 30), d(2020, 9, 30));
    /// assert!(a.overlaps(&b));
    ///
    /// // A one-day gap does not.
    /// let c = RatePeriod::open_ended(d(2020, 7, 1));
    /// assert!(!a.overlaps(&c));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.end >= other.start && other.end >= self.start
    }
}

impl fmt::Display for RatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            PeriodEnd::Bounded(end) => write!(f, "[{}, {}]", self.start, end),
            PeriodEnd::Unbounded => write!(f, "[{}, open)", self.start),
        }
    }
}
