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

//! A supplier and the rate records it owns.

use crate::{id::SupplierId, rate::RateRecord};
use chrono::NaiveDate;
use std::fmt::Display;

/// A supplier with its owned rate records.
///
/// A supplier is the grouping boundary for overlap detection: the detector
/// only ever compares rates belonging to the same supplier. The directory
/// guarantees every owned rate's `supplier_id` matches this supplier's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    address: Option<String>,
    created_by: String,
    created_on: NaiveDate,
    rates: Vec<RateRecord>,
}

impl Supplier {
    /// Creates a supplier without rates.
    #[inline]
    pub fn new(
        id: SupplierId,
        name: impl Into<String>,
        address: Option<String>,
        created_by: impl Into<String>,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address,
            created_by: created_by.into(),
            created_on,
            rates: Vec::new(),
        }
    }

    /// Creates a supplier that already owns a set of rates.
    #[inline]
    pub fn with_rates(
        id: SupplierId,
        name: impl Into<String>,
        address: Option<String>,
        created_by: impl Into<String>,
        created_on: NaiveDate,
        rates: Vec<RateRecord>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address,
            created_by: created_by.into(),
            created_on,
            rates,
        }
    }

    #[inline]
    pub fn id(&self) -> SupplierId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    #[inline]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    #[inline]
    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// The supplier's rate records, in insertion order.
    #[inline]
    pub fn rates(&self) -> &[RateRecord] {
        &self.rates
    }

    #[inline]
    pub fn rate_count(&self) -> usize {
        self.rates.len()
    }

    #[inline]
    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    #[inline]
    pub(crate) fn set_address(&mut self, address: Option<String>) {
        self.address = address;
    }

    #[inline]
    pub(crate) fn push_rate(&mut self, rate: RateRecord) {
        self.rates.push(rate);
    }

    #[inline]
    pub(crate) fn rates_mut(&mut self) -> &mut Vec<RateRecord> {
        &mut self.rates
    }
}

impl Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Supplier(id: {}, name: {}, rates: {})",
            self.id,
            self.name,
            self.rates.len()
        )?;
        for rate in &self.rates {
            writeln!(f, "  {}", rate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::RateId;
    use supplier_rates_core::{money::Money, period::RatePeriod};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
    }

    #[test]
    fn test_supplier_starts_without_rates() {
        let supplier = Supplier::new(
            SupplierId::new(1),
            "BestValue",
            Some("1, Main Street".into()),
            "System.Admin",
            date(2021, 7, 30),
        );
        assert_eq!(supplier.id(), SupplierId::new(1));
        assert_eq!(supplier.name(), "BestValue");
        assert_eq!(supplier.address(), Some("1, Main Street"));
        assert!(supplier.rates().is_empty());
    }

    #[test]
    fn test_supplier_with_rates_keeps_insertion_order() {
        let rate = |id: u64| {
            RateRecord::new(
                RateId::new(id),
                SupplierId::new(1),
                Money::new(10),
                RatePeriod::open_ended(date(2015, 10, 1)),
                "System.Admin",
                date(2021, 7, 30),
            )
        };
        let supplier = Supplier::with_rates(
            SupplierId::new(1),
            "BestValue",
            None,
            "System.Admin",
            date(2021, 7, 30),
            vec![rate(4), rate(2), rate(9)],
        );
        let ids: Vec<_> = supplier.rates().iter().map(|r| r.id().value()).collect();
        assert_eq!(ids, vec![4, 2, 9]);
        assert_eq!(supplier.rate_count(), 3);
    }

    #[test]
    fn test_supplier_display_lists_rates() {
        let supplier = Supplier::new(
            SupplierId::new(2),
            "Quality Corp",
            None,
            "System.Admin",
            date(2021, 7, 30),
        );
        let rendered = format!("{}", supplier);
        assert!(rendered.starts_with("Supplier(id: SupplierId(2), name: Quality Corp, rates: 0)"));
    }
}
