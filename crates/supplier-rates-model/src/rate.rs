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

//! A supplier's priced validity period.

use crate::id::{RateId, SupplierId};
use chrono::NaiveDate;
use std::fmt::Display;
use supplier_rates_core::{money::Money, period::RatePeriod};

/// One rate record: an amount that a supplier charges during a validity
/// period.
///
/// The record is a read-only value to the overlap detector; its `amount` is
/// carried through untouched and never participates in overlap comparison.
/// Construction performs no validation (see
/// [`SupplierDirectory`](crate::directory::SupplierDirectory) for the data
/// layer's rules).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateRecord {
    id: RateId,
    supplier_id: SupplierId,
    amount: Money<i64>,
    period: RatePeriod,
    created_by: String,
    created_on: NaiveDate,
}

impl RateRecord {
    #[inline]
    pub fn new(
        id: RateId,
        supplier_id: SupplierId,
        amount: Money<i64>,
        period: RatePeriod,
        created_by: impl Into<String>,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            supplier_id,
            amount,
            period,
            created_by: created_by.into(),
            created_on,
        }
    }

    #[inline]
    pub fn id(&self) -> RateId {
        self.id
    }

    /// The owning supplier. Overlap detection is scoped to rates sharing
    /// this id; rates of different suppliers are never compared.
    #[inline]
    pub fn supplier_id(&self) -> SupplierId {
        self.supplier_id
    }

    #[inline]
    pub fn amount(&self) -> Money<i64> {
        self.amount
    }

    #[inline]
    pub fn period(&self) -> &RatePeriod {
        &self.period
    }

    #[inline]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    #[inline]
    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    #[inline]
    pub(crate) fn set_amount(&mut self, amount: Money<i64>) {
        self.amount = amount;
    }

    #[inline]
    pub(crate) fn set_period(&mut self, period: RatePeriod) {
        self.period = period;
    }
}

impl Display for RateRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RateRecord(id: {}, supplier: {}, amount: {}, period: {})",
            self.id, self.supplier_id, self.amount, self.period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
    }

    #[test]
    fn test_rate_record_accessors() {
        let rate = RateRecord::new(
            RateId::new(1),
            SupplierId::new(3),
            Money::new(30_00),
            RatePeriod::closed(date(2016, 12, 1), date(2017, 1, 1)),
            "System.Admin",
            date(2021, 7, 30),
        );
        assert_eq!(rate.id(), RateId::new(1));
        assert_eq!(rate.supplier_id(), SupplierId::new(3));
        assert_eq!(rate.amount(), Money::new(30_00));
        assert_eq!(rate.period().start(), date(2016, 12, 1));
        assert_eq!(rate.created_by(), "System.Admin");
        assert_eq!(rate.created_on(), date(2021, 7, 30));
    }

    #[test]
    fn test_rate_record_display() {
        let rate = RateRecord::new(
            RateId::new(7),
            SupplierId::new(3),
            Money::new(30),
            RatePeriod::open_ended(date(2017, 1, 2)),
            "System.Admin",
            date(2021, 7, 30),
        );
        assert_eq!(
            format!("{}", rate),
            "RateRecord(id: RateId(7), supplier: SupplierId(3), amount: Money(30), \
             period: [2017-01-02, open))"
        );
    }
}
