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

//! The overlapping-set finder.
//!
//! Given one supplier's rate records, returns the subset whose validity
//! periods overlap at least one other record in the same set.

use std::collections::HashSet;
use supplier_rates_model::{id::RateId, rate::RateRecord};

/// Returns the rates that overlap at least one other rate in `rates`.
///
/// Every unordered pair is tested with the inclusive-boundary predicate
/// ([`RatePeriod::overlaps`](supplier_rates_core::period::RatePeriod::overlaps)).
/// A rate appears in the result at most once even when it collides with
/// several others; membership is tracked in a hash set keyed by rate id, so
/// deduplication is O(1) per check. The result preserves the input order of
/// first qualification, which makes repeated runs over the same slice yield
/// the same sequence.
///
/// Zero or one input rates trivially produce an empty result. Inputs are
/// borrowed and never mutated; malformed periods are not rejected and
/// classify however the predicate computes.
///
/// O(N²) pair comparisons; rate sets per supplier are small.
pub fn find_overlapping_rates(rates: &[RateRecord]) -> Vec<&RateRecord> {
    if rates.len() < 2 {
        return Vec::new();
    }

    let mut flagged: Vec<&RateRecord> = Vec::new();
    let mut seen: HashSet<RateId> = HashSet::with_capacity(rates.len());

    for i in 0..rates.len() {
        for j in (i + 1)..rates.len() {
            let (a, b) = (&rates[i], &rates[j]);
            if a.period().overlaps(b.period()) {
                if seen.insert(a.id()) {
                    flagged.push(a);
                }
                if seen.insert(b.id()) {
                    flagged.push(b);
                }
            }
        }
    }

    flagged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use supplier_rates_core::{money::Money, period::RatePeriod};
    use supplier_rates_model::id::SupplierId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
    }

    fn rate(id: u64, start: NaiveDate, end: Option<NaiveDate>) -> RateRecord {
        RateRecord::new(
            RateId::new(id),
            SupplierId::new(1),
            Money::new(10_00),
            RatePeriod::from_bounds(start, end),
            "System.Admin",
            date(2021, 7, 30),
        )
    }

    fn flagged_ids(rates: &[RateRecord]) -> Vec<u64> {
        find_overlapping_rates(rates)
            .iter()
            .map(|r| r.id().value())
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        assert!(find_overlapping_rates(&[]).is_empty());
    }

    #[test]
    fn test_singleton_input_yields_empty_result() {
        let rates = [rate(1, date(2015, 1, 1), None)];
        assert!(find_overlapping_rates(&rates).is_empty());
    }

    #[test]
    fn test_gap_of_one_day_is_not_an_overlap() {
        // [2016-12-01, 2017-01-01] then open from 2017-01-02.
        let rates = [
            rate(1, date(2016, 12, 1), Some(date(2017, 1, 1))),
            rate(2, date(2017, 1, 2), None),
        ];
        assert!(find_overlapping_rates(&rates).is_empty());
    }

    #[test]
    fn test_intersecting_ranges_flag_both_records() {
        // Ranges intersect Dec 15 through Jan 1.
        let rates = [
            rate(1, date(2016, 12, 1), Some(date(2017, 1, 1))),
            rate(3, date(2016, 12, 15), Some(date(2017, 1, 15))),
        ];
        assert_eq!(flagged_ids(&rates), vec![1, 3]);
    }

    #[test]
    fn test_chain_overlap_flags_all_three() {
        // 1 and 2 overlap, 2 and 3 overlap, 1 and 3 do not; each record still
        // participates in at least one collision.
        let rates = [
            rate(1, date(2020, 1, 1), Some(date(2020, 6, 30))),
            rate(2, date(2020, 3, 1), Some(date(2020, 9, 30))),
            rate(3, date(2020, 8, 1), None),
        ];
        assert_eq!(flagged_ids(&rates), vec![1, 2, 3]);
    }

    #[test]
    fn test_contiguous_and_gapped_periods_are_clean() {
        let rates = [
            rate(1, date(2015, 1, 1), Some(date(2015, 3, 31))),
            rate(2, date(2015, 4, 1), Some(date(2015, 5, 1))),
            rate(3, date(2015, 5, 30), Some(date(2015, 7, 25))),
            rate(4, date(2015, 10, 1), None),
        ];
        assert!(find_overlapping_rates(&rates).is_empty());
    }

    #[test]
    fn test_shared_boundary_date_flags_both_records() {
        let rates = [
            rate(1, date(2015, 1, 1), Some(date(2015, 3, 31))),
            rate(2, date(2015, 3, 31), Some(date(2015, 5, 1))),
        ];
        assert_eq!(flagged_ids(&rates), vec![1, 2]);
    }

    #[test]
    fn test_record_overlapping_two_others_appears_once() {
        let rates = [
            rate(1, date(2020, 1, 1), Some(date(2020, 12, 31))),
            rate(2, date(2020, 2, 1), Some(date(2020, 3, 1))),
            rate(3, date(2020, 6, 1), Some(date(2020, 7, 1))),
        ];
        assert_eq!(flagged_ids(&rates), vec![1, 2, 3]);
    }

    #[test]
    fn test_result_preserves_first_qualification_order() {
        // The pair (1, 4) qualifies before record 2's collision with 4 is
        // seen, so 1 and 4 lead the result.
        let rates = [
            rate(1, date(2020, 1, 1), Some(date(2020, 3, 1))),
            rate(2, date(2020, 5, 1), Some(date(2020, 7, 1))),
            rate(4, date(2020, 2, 1), Some(date(2020, 6, 1))),
        ];
        assert_eq!(flagged_ids(&rates), vec![1, 4, 2]);
    }

    #[test]
    fn test_detector_is_idempotent_over_unchanged_input() {
        let rates = [
            rate(1, date(2020, 1, 1), Some(date(2020, 6, 30))),
            rate(2, date(2020, 3, 1), Some(date(2020, 9, 30))),
            rate(3, date(2020, 8, 1), None),
        ];
        let first = flagged_ids(&rates);
        let second = flagged_ids(&rates);
        assert_eq!(first, second);
    }

    #[test]
    fn test_two_open_ended_periods_always_overlap() {
        let rates = [
            rate(1, date(2016, 11, 1), None),
            rate(2, date(2019, 1, 1), None),
        ];
        assert_eq!(flagged_ids(&rates), vec![1, 2]);
    }

    #[test]
    fn test_open_ended_period_misses_ranges_ending_before_its_start() {
        let rates = [
            rate(1, date(2015, 1, 1), Some(date(2015, 9, 30))),
            rate(2, date(2015, 10, 1), None),
        ];
        assert!(find_overlapping_rates(&rates).is_empty());
    }
}
