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

//! Per-supplier aggregation of overlap findings.

use crate::overlap::find_overlapping_rates;
use std::fmt::Display;
use supplier_rates_model::{directory::SupplierDirectory, id::SupplierId, rate::RateRecord};
use tracing::debug;

/// The constant explanation attached to every finding.
pub const OVERLAP_REASON: &str = "Date ranges have overlapping periods";

/// One supplier's overlap finding: the supplier, the colliding rate records
/// and a fixed human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierOverlapReport {
    supplier_id: SupplierId,
    supplier_name: String,
    rates: Vec<RateRecord>,
    reason: &'static str,
}

impl SupplierOverlapReport {
    #[inline]
    pub fn supplier_id(&self) -> SupplierId {
        self.supplier_id
    }

    #[inline]
    pub fn supplier_name(&self) -> &str {
        &self.supplier_name
    }

    /// The overlapping rate records, each at most once, in the order the
    /// finder first flagged them.
    #[inline]
    pub fn rates(&self) -> &[RateRecord] {
        &self.rates
    }

    #[inline]
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl Display for SupplierOverlapReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} ({}): {}",
            self.supplier_name, self.supplier_id, self.reason
        )?;
        for rate in &self.rates {
            writeln!(f, "  {}", rate)?;
        }
        Ok(())
    }
}

/// Runs overlap detection over every supplier in the directory, or over the
/// single supplier named by `filter`.
///
/// Each supplier's rate set is examined independently; rates of different
/// suppliers are never compared even when their date ranges coincide. Only
/// suppliers with at least one colliding pair produce a report. Suppliers
/// are visited in ascending id order, so the output is deterministic for a
/// given directory. A `filter` naming an unknown supplier yields an empty
/// result.
pub fn find_overlaps(
    directory: &SupplierDirectory,
    filter: Option<SupplierId>,
) -> Vec<SupplierOverlapReport> {
    let mut reports = Vec::new();

    for supplier in directory.iter_suppliers() {
        if let Some(wanted) = filter {
            if supplier.id() != wanted {
                continue;
            }
        }

        let flagged = find_overlapping_rates(supplier.rates());
        debug!(
            supplier = %supplier.id(),
            rates = supplier.rate_count(),
            flagged = flagged.len(),
            "checked supplier for overlapping rate periods"
        );
        if flagged.is_empty() {
            continue;
        }

        reports.push(SupplierOverlapReport {
            supplier_id: supplier.id(),
            supplier_name: supplier.name().to_owned(),
            rates: flagged.into_iter().cloned().collect(),
            reason: OVERLAP_REASON,
        });
    }

    reports
}
