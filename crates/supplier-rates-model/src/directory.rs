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

//! # Supplier Directory
//!
//! An in-memory registry of suppliers and their rate records with the CRUD
//! surface a supplier-management service needs. All validation happens here,
//! at the data layer: the overlap detector itself accepts whatever it is
//! handed.
//!
//! Enforced on insert and update:
//!
//! - supplier ids are unique,
//! - rate ids are unique across the whole directory,
//! - a rate's `supplier_id` matches the supplier that owns it,
//! - a bounded rate period never ends before it starts.
//!
//! Suppliers are stored in an ordered map keyed by id, so iteration (and
//! everything derived from it, such as per-supplier overlap reports) is
//! deterministic without re-sorting.

use crate::{
    err::{
        DirectoryError, DuplicateRateIdError, DuplicateSupplierIdError, ReversedPeriodError,
        SupplierMismatchError, UnknownRateError, UnknownSupplierError,
    },
    id::{RateId, SupplierId},
    rate::RateRecord,
    supplier::Supplier,
};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use supplier_rates_core::{money::Money, period::RatePeriod};

/// Aggregate numbers over a directory snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectoryStats {
    supplier_count: usize,
    rate_count: usize,
    open_ended_count: usize,
    /// 50th percentile of rates per supplier.
    p50_rates_per_supplier: usize,
    /// 90th percentile of rates per supplier.
    p90_rates_per_supplier: usize,
    /// 50th percentile of rate amounts.
    p50_amount: Money<i64>,
}

impl DirectoryStats {
    #[inline]
    pub fn supplier_count(&self) -> usize {
        self.supplier_count
    }

    #[inline]
    pub fn rate_count(&self) -> usize {
        self.rate_count
    }

    #[inline]
    pub fn open_ended_count(&self) -> usize {
        self.open_ended_count
    }

    #[inline]
    pub fn p50_rates_per_supplier(&self) -> usize {
        self.p50_rates_per_supplier
    }

    #[inline]
    pub fn p90_rates_per_supplier(&self) -> usize {
        self.p90_rates_per_supplier
    }

    #[inline]
    pub fn p50_amount(&self) -> Money<i64> {
        self.p50_amount
    }
}

impl Display for DirectoryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DirectoryStats(suppliers: {}, rates: {}, open-ended: {}, \
             p50 rates/supplier: {}, p90 rates/supplier: {}, p50 amount: {})",
            self.supplier_count,
            self.rate_count,
            self.open_ended_count,
            self.p50_rates_per_supplier,
            self.p90_rates_per_supplier,
            self.p50_amount
        )
    }
}

/// In-memory registry of suppliers and rates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierDirectory {
    suppliers: BTreeMap<SupplierId, Supplier>,
    rate_owners: HashMap<RateId, SupplierId>,
}

impl SupplierDirectory {
    #[inline]
    pub fn new() -> Self {
        Self {
            suppliers: BTreeMap::new(),
            rate_owners: HashMap::new(),
        }
    }

    #[inline]
    pub fn supplier_count(&self) -> usize {
        self.suppliers.len()
    }

    #[inline]
    pub fn rate_count(&self) -> usize {
        self.rate_owners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    /// Adds a supplier together with any rates it already owns.
    ///
    /// Every owned rate must name this supplier as its owner, carry a
    /// directory-unique id and a non-reversed period.
    pub fn add_supplier(&mut self, supplier: Supplier) -> Result<(), DirectoryError> {
        let id = supplier.id();
        if self.suppliers.contains_key(&id) {
            return Err(DirectoryError::DuplicateSupplierId(
                DuplicateSupplierIdError::new(id),
            ));
        }

        for rate in supplier.rates() {
            if rate.supplier_id() != id {
                return Err(DirectoryError::SupplierMismatch(SupplierMismatchError::new(
                    rate.id(),
                    id,
                    rate.supplier_id(),
                )));
            }
            if let Some(&owner) = self.rate_owners.get(&rate.id()) {
                return Err(DirectoryError::DuplicateRateId(DuplicateRateIdError::new(
                    rate.id(),
                    owner,
                )));
            }
            Self::check_period(rate.id(), rate.period())?;
        }

        // Duplicates within the incoming rate set itself.
        for (i, rate) in supplier.rates().iter().enumerate() {
            if supplier.rates()[..i].iter().any(|r| r.id() == rate.id()) {
                return Err(DirectoryError::DuplicateRateId(DuplicateRateIdError::new(
                    rate.id(),
                    id,
                )));
            }
        }

        for rate in supplier.rates() {
            self.rate_owners.insert(rate.id(), id);
        }
        self.suppliers.insert(id, supplier);
        Ok(())
    }

    #[inline]
    pub fn supplier(&self, id: SupplierId) -> Option<&Supplier> {
        self.suppliers.get(&id)
    }

    /// Iterates suppliers in ascending id order.
    #[inline]
    pub fn iter_suppliers(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.values()
    }

    /// Replaces a supplier's name and address, leaving its rates untouched.
    pub fn update_supplier(
        &mut self,
        id: SupplierId,
        name: impl Into<String>,
        address: Option<String>,
    ) -> Result<(), DirectoryError> {
        let supplier = self
            .suppliers
            .get_mut(&id)
            .ok_or(DirectoryError::UnknownSupplier(UnknownSupplierError::new(
                id,
            )))?;
        supplier.set_name(name.into());
        supplier.set_address(address);
        Ok(())
    }

    /// Removes a supplier and every rate it owns.
    pub fn remove_supplier(&mut self, id: SupplierId) -> Result<Supplier, DirectoryError> {
        let supplier = self
            .suppliers
            .remove(&id)
            .ok_or(DirectoryError::UnknownSupplier(UnknownSupplierError::new(
                id,
            )))?;
        for rate in supplier.rates() {
            self.rate_owners.remove(&rate.id());
        }
        Ok(supplier)
    }

    /// Adds a rate to its owning supplier.
    pub fn add_rate(&mut self, rate: RateRecord) -> Result<(), DirectoryError> {
        if let Some(&owner) = self.rate_owners.get(&rate.id()) {
            return Err(DirectoryError::DuplicateRateId(DuplicateRateIdError::new(
                rate.id(),
                owner,
            )));
        }
        Self::check_period(rate.id(), rate.period())?;

        let supplier = self.suppliers.get_mut(&rate.supplier_id()).ok_or(
            DirectoryError::UnknownSupplier(UnknownSupplierError::new(rate.supplier_id())),
        )?;

        self.rate_owners.insert(rate.id(), rate.supplier_id());
        supplier.push_rate(rate);
        Ok(())
    }

    #[inline]
    pub fn rate(&self, id: RateId) -> Option<&RateRecord> {
        let owner = self.rate_owners.get(&id)?;
        self.suppliers
            .get(owner)?
            .rates()
            .iter()
            .find(|r| r.id() == id)
    }

    /// The rates owned by a supplier, in insertion order.
    #[inline]
    pub fn rates_for(&self, id: SupplierId) -> Option<&[RateRecord]> {
        self.suppliers.get(&id).map(|s| s.rates())
    }

    /// Replaces a rate's amount and period.
    pub fn update_rate(
        &mut self,
        id: RateId,
        amount: Money<i64>,
        period: RatePeriod,
    ) -> Result<(), DirectoryError> {
        Self::check_period(id, &period)?;
        let owner = *self
            .rate_owners
            .get(&id)
            .ok_or(DirectoryError::UnknownRate(UnknownRateError::new(id)))?;
        let supplier = self
            .suppliers
            .get_mut(&owner)
            .expect("rate owner is registered");
        let rate = supplier
            .rates_mut()
            .iter_mut()
            .find(|r| r.id() == id)
            .expect("owned rate is present");
        rate.set_amount(amount);
        rate.set_period(period);
        Ok(())
    }

    /// Removes a rate from its owning supplier.
    pub fn remove_rate(&mut self, id: RateId) -> Result<RateRecord, DirectoryError> {
        let owner = self
            .rate_owners
            .remove(&id)
            .ok_or(DirectoryError::UnknownRate(UnknownRateError::new(id)))?;
        let supplier = self
            .suppliers
            .get_mut(&owner)
            .expect("rate owner is registered");
        let idx = supplier
            .rates()
            .iter()
            .position(|r| r.id() == id)
            .expect("owned rate is present");
        Ok(supplier.rates_mut().remove(idx))
    }

    /// Aggregate numbers over the current contents.
    pub fn stats(&self) -> DirectoryStats {
        let per_supplier: Vec<usize> = self.suppliers.values().map(|s| s.rate_count()).collect();
        let amounts: Vec<Money<i64>> = self
            .suppliers
            .values()
            .flat_map(|s| s.rates().iter().map(|r| r.amount()))
            .collect();
        let open_ended_count = self
            .suppliers
            .values()
            .flat_map(|s| s.rates())
            .filter(|r| r.period().is_open_ended())
            .count();

        DirectoryStats {
            supplier_count: self.suppliers.len(),
            rate_count: self.rate_owners.len(),
            open_ended_count,
            p50_rates_per_supplier: stats::percentile_count(&per_supplier, 0.50),
            p90_rates_per_supplier: stats::percentile_count(&per_supplier, 0.90),
            p50_amount: stats::percentile_amount(&amounts, 0.50),
        }
    }

    #[inline]
    fn check_period(id: RateId, period: &RatePeriod) -> Result<(), DirectoryError> {
        if period.is_well_formed() {
            Ok(())
        } else {
            Err(DirectoryError::ReversedPeriod(ReversedPeriodError::new(
                id, *period,
            )))
        }
    }
}

impl Display for SupplierDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "SupplierDirectory ({} suppliers, {} rates):",
            self.supplier_count(),
            self.rate_count()
        )?;
        for supplier in self.iter_suppliers() {
            write!(f, "{}", supplier)?;
        }
        Ok(())
    }
}

mod stats {
    use statrs::statistics::{Data, OrderStatistics};
    use supplier_rates_core::money::Money;

    #[inline]
    pub fn percentile_map<T, FMap, FBack, R>(data: &[T], p: f64, to_f64: FMap, from_f64: FBack) -> R
    where
        FMap: Fn(&T) -> f64,
        FBack: Fn(f64) -> R,
    {
        let p = p.clamp(0.0, 1.0);
        let vals: Vec<f64> = data.iter().map(&to_f64).filter(|x| x.is_finite()).collect();
        if vals.is_empty() {
            return from_f64(0.0);
        }
        let mut d = Data::new(vals);
        from_f64(d.quantile(p))
    }

    #[inline]
    pub fn percentile_count(v: &[usize], p: f64) -> usize {
        percentile_map(v, p, |x| *x as f64, |q| q.round().max(0.0) as usize)
    }

    #[inline]
    pub fn percentile_amount(v: &[Money<i64>], p: f64) -> Money<i64> {
        percentile_map(
            v,
            p,
            |x| x.value() as f64,
            |q| Money::new(q.round() as i64),
        )
    }
}
