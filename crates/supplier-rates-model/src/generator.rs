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

//! Synthetic directory generation.
//!
//! Produces seeded, reproducible supplier directories for tests, benchmarks
//! and the demo binary. The `overlap_fraction` knob controls how often a
//! sampled rate period deliberately starts inside its predecessor's period;
//! with the knob at zero every generated rate set is overlap-free.

use crate::{
    directory::SupplierDirectory,
    id::{RateId, SupplierId},
    rate::RateRecord,
    supplier::Supplier,
};
use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Uniform};
use std::fmt::Display;
use supplier_rates_core::{
    money::Money,
    period::{PeriodEnd, RatePeriod},
};

/// Rejected generator configurations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorConfigError {
    EmptyRateRange { min: usize, max: usize },
    EmptyAmountRange { min: i64, max: i64 },
    EmptyDurationRange { min: i64, max: i64 },
    FractionOutOfRange { name: &'static str, value: f64 },
    NonPositiveHorizon { days: i64 },
}

impl Display for GeneratorConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorConfigError::EmptyRateRange { min, max } => {
                write!(f, "Rate count range [{min}, {max}] is empty")
            }
            GeneratorConfigError::EmptyAmountRange { min, max } => {
                write!(f, "Amount range [{min}, {max}] is empty")
            }
            GeneratorConfigError::EmptyDurationRange { min, max } => {
                write!(f, "Duration range [{min}, {max}] is empty or non-positive")
            }
            GeneratorConfigError::FractionOutOfRange { name, value } => {
                write!(f, "Fraction {name} = {value} is outside [0, 1]")
            }
            GeneratorConfigError::NonPositiveHorizon { days } => {
                write!(f, "Horizon of {days} days is not positive")
            }
        }
    }
}

impl std::error::Error for GeneratorConfigError {}

/// Configuration for generating a synthetic supplier directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryGenConfig {
    /// Number of suppliers to generate.
    supplier_count: usize,
    /// Rates per supplier are drawn uniformly from this inclusive range.
    min_rates_per_supplier: usize,
    max_rates_per_supplier: usize,
    /// Earliest possible period start; first starts are spread uniformly
    /// over `[horizon_start, horizon_start + horizon_days]`.
    horizon_start: NaiveDate,
    horizon_days: i64,
    /// Bounded period lengths in days, drawn uniformly from this range.
    min_duration_days: i64,
    max_duration_days: i64,
    /// Rate amounts in minor units, drawn uniformly from this range.
    min_amount: i64,
    max_amount: i64,
    /// Probability that a supplier's last rate is open-ended.
    open_ended_fraction: f64,
    /// Probability that a rate starts inside its predecessor's period.
    overlap_fraction: f64,
    seed: u64,
}

impl DirectoryGenConfig {
    #[inline]
    pub fn supplier_count(&self) -> usize {
        self.supplier_count
    }

    #[inline]
    pub fn min_rates_per_supplier(&self) -> usize {
        self.min_rates_per_supplier
    }

    #[inline]
    pub fn max_rates_per_supplier(&self) -> usize {
        self.max_rates_per_supplier
    }

    #[inline]
    pub fn horizon_start(&self) -> NaiveDate {
        self.horizon_start
    }

    #[inline]
    pub fn horizon_days(&self) -> i64 {
        self.horizon_days
    }

    #[inline]
    pub fn open_ended_fraction(&self) -> f64 {
        self.open_ended_fraction
    }

    #[inline]
    pub fn overlap_fraction(&self) -> f64 {
        self.overlap_fraction
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Display for DirectoryGenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DirectoryGenConfig(suppliers: {}, rates/supplier: [{}, {}], \
             horizon: {} + {}d, overlap: {:.2}, open-ended: {:.2}, seed: {})",
            self.supplier_count,
            self.min_rates_per_supplier,
            self.max_rates_per_supplier,
            self.horizon_start,
            self.horizon_days,
            self.overlap_fraction,
            self.open_ended_fraction,
            self.seed
        )
    }
}

/// Builder for [`DirectoryGenConfig`].
#[derive(Debug, Clone)]
pub struct DirectoryGenConfigBuilder {
    supplier_count: usize,
    min_rates_per_supplier: usize,
    max_rates_per_supplier: usize,
    horizon_start: NaiveDate,
    horizon_days: i64,
    min_duration_days: i64,
    max_duration_days: i64,
    min_amount: i64,
    max_amount: i64,
    open_ended_fraction: f64,
    overlap_fraction: f64,
    seed: u64,
}

impl Default for DirectoryGenConfigBuilder {
    fn default() -> Self {
        Self {
            supplier_count: 10,
            min_rates_per_supplier: 1,
            max_rates_per_supplier: 6,
            horizon_start: NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid calendar date"),
            horizon_days: 365,
            min_duration_days: 5,
            max_duration_days: 90,
            min_amount: 1_00,
            max_amount: 500_00,
            open_ended_fraction: 0.25,
            overlap_fraction: 0.2,
            seed: 42,
        }
    }
}

impl DirectoryGenConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn supplier_count(mut self, value: usize) -> Self {
        self.supplier_count = value;
        self
    }

    #[inline]
    pub fn rates_per_supplier(mut self, min: usize, max: usize) -> Self {
        self.min_rates_per_supplier = min;
        self.max_rates_per_supplier = max;
        self
    }

    #[inline]
    pub fn horizon(mut self, start: NaiveDate, days: i64) -> Self {
        self.horizon_start = start;
        self.horizon_days = days;
        self
    }

    #[inline]
    pub fn duration_days(mut self, min: i64, max: i64) -> Self {
        self.min_duration_days = min;
        self.max_duration_days = max;
        self
    }

    #[inline]
    pub fn amount_range(mut self, min: i64, max: i64) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    #[inline]
    pub fn open_ended_fraction(mut self, value: f64) -> Self {
        self.open_ended_fraction = value;
        self
    }

    #[inline]
    pub fn overlap_fraction(mut self, value: f64) -> Self {
        self.overlap_fraction = value;
        self
    }

    #[inline]
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = value;
        self
    }

    pub fn build(self) -> Result<DirectoryGenConfig, GeneratorConfigError> {
        if self.min_rates_per_supplier > self.max_rates_per_supplier {
            return Err(GeneratorConfigError::EmptyRateRange {
                min: self.min_rates_per_supplier,
                max: self.max_rates_per_supplier,
            });
        }
        if self.min_amount > self.max_amount {
            return Err(GeneratorConfigError::EmptyAmountRange {
                min: self.min_amount,
                max: self.max_amount,
            });
        }
        if self.min_duration_days < 1 || self.min_duration_days > self.max_duration_days {
            return Err(GeneratorConfigError::EmptyDurationRange {
                min: self.min_duration_days,
                max: self.max_duration_days,
            });
        }
        for (name, value) in [
            ("open_ended_fraction", self.open_ended_fraction),
            ("overlap_fraction", self.overlap_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneratorConfigError::FractionOutOfRange { name, value });
            }
        }
        if self.horizon_days < 1 {
            return Err(GeneratorConfigError::NonPositiveHorizon {
                days: self.horizon_days,
            });
        }

        Ok(DirectoryGenConfig {
            supplier_count: self.supplier_count,
            min_rates_per_supplier: self.min_rates_per_supplier,
            max_rates_per_supplier: self.max_rates_per_supplier,
            horizon_start: self.horizon_start,
            horizon_days: self.horizon_days,
            min_duration_days: self.min_duration_days,
            max_duration_days: self.max_duration_days,
            min_amount: self.min_amount,
            max_amount: self.max_amount,
            open_ended_fraction: self.open_ended_fraction,
            overlap_fraction: self.overlap_fraction,
            seed: self.seed,
        })
    }
}

/// Generates supplier directories from a validated config.
#[derive(Debug, Clone)]
pub struct DirectoryGenerator {
    config: DirectoryGenConfig,
    amount_distribution: Uniform<i64>,
    duration_distribution: Uniform<i64>,
    rng: SmallRng,
}

impl From<DirectoryGenConfig> for DirectoryGenerator {
    fn from(config: DirectoryGenConfig) -> Self {
        let amount_distribution = Uniform::new_inclusive(config.min_amount, config.max_amount)
            .expect("validated amount range");
        let duration_distribution =
            Uniform::new_inclusive(config.min_duration_days, config.max_duration_days)
                .expect("validated duration range");
        let rng = SmallRng::seed_from_u64(config.seed);
        Self {
            config,
            amount_distribution,
            duration_distribution,
            rng,
        }
    }
}

impl DirectoryGenerator {
    #[inline]
    pub fn config(&self) -> &DirectoryGenConfig {
        &self.config
    }

    /// Generates a fresh directory. Deterministic for a fixed config.
    pub fn generate(&mut self) -> SupplierDirectory {
        let mut directory = SupplierDirectory::new();
        let mut next_rate_id: u64 = 1;

        for index in 0..self.config.supplier_count {
            let supplier_id = SupplierId::new(index as u64 + 1);
            let supplier = Supplier::new(
                supplier_id,
                format!("Supplier {:03}", index + 1),
                Some(format!("{}, Harbour Road", index + 1)),
                "generator",
                self.config.horizon_start,
            );
            directory
                .add_supplier(supplier)
                .expect("generated supplier ids are unique");

            let rate_count = self
                .rng
                .random_range(self.config.min_rates_per_supplier..=self.config.max_rates_per_supplier);
            self.fill_rates(&mut directory, supplier_id, rate_count, &mut next_rate_id);
        }

        directory
    }

    fn fill_rates(
        &mut self,
        directory: &mut SupplierDirectory,
        supplier_id: SupplierId,
        rate_count: usize,
        next_rate_id: &mut u64,
    ) {
        // (start, duration) of the previous bounded period; used both to
        // chain gapped periods and to construct deliberate overlaps.
        let mut previous: Option<(NaiveDate, i64)> = None;

        for position in 0..rate_count {
            let duration = self.duration_distribution.sample(&mut self.rng);
            let start = match previous {
                None => {
                    let offset = self.rng.random_range(0..=self.config.horizon_days);
                    self.config.horizon_start + Duration::days(offset)
                }
                Some((prev_start, prev_duration)) => {
                    if self.rng.random_bool(self.config.overlap_fraction) {
                        // Start somewhere inside the previous period.
                        let inside = self.rng.random_range(0..=prev_duration);
                        prev_start + Duration::days(inside)
                    } else {
                        // Strictly after the previous period's end, leaving a
                        // gap of at least one day so the pair cannot touch.
                        let gap = self.rng.random_range(2..=30);
                        prev_start + Duration::days(prev_duration + gap)
                    }
                }
            };

            let is_last = position + 1 == rate_count;
            let end = if is_last && self.rng.random_bool(self.config.open_ended_fraction) {
                PeriodEnd::Unbounded
            } else {
                PeriodEnd::Bounded(start + Duration::days(duration))
            };

            let rate = RateRecord::new(
                RateId::new(*next_rate_id),
                supplier_id,
                Money::new(self.amount_distribution.sample(&mut self.rng)),
                RatePeriod::new(start, end),
                "generator",
                self.config.horizon_start,
            );
            *next_rate_id += 1;
            directory
                .add_rate(rate)
                .expect("generated rate is well-formed and unique");

            previous = Some((start, duration));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64, overlap_fraction: f64) -> DirectoryGenConfig {
        DirectoryGenConfigBuilder::new()
            .supplier_count(8)
            .rates_per_supplier(2, 5)
            .overlap_fraction(overlap_fraction)
            .seed(seed)
            .build()
            .expect("valid generator config")
    }

    #[test]
    fn test_builder_rejects_empty_rate_range() {
        let err = DirectoryGenConfigBuilder::new()
            .rates_per_supplier(5, 2)
            .build()
            .unwrap_err();
        assert_eq!(err, GeneratorConfigError::EmptyRateRange { min: 5, max: 2 });
    }

    #[test]
    fn test_builder_rejects_fraction_out_of_range() {
        let err = DirectoryGenConfigBuilder::new()
            .overlap_fraction(1.5)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            GeneratorConfigError::FractionOutOfRange {
                name: "overlap_fraction",
                ..
            }
        ));
    }

    #[test]
    fn test_builder_rejects_non_positive_horizon() {
        let err = DirectoryGenConfigBuilder::new()
            .horizon(NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(), 0)
            .build()
            .unwrap_err();
        assert_eq!(err, GeneratorConfigError::NonPositiveHorizon { days: 0 });
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let a = DirectoryGenerator::from(config(7, 0.3)).generate();
        let b = DirectoryGenerator::from(config(7, 0.3)).generate();
        assert_eq!(a, b);
        let c = DirectoryGenerator::from(config(8, 0.3)).generate();
        assert_ne!(a, c);
    }

    #[test]
    fn test_generated_counts_respect_config() {
        let directory = DirectoryGenerator::from(config(1, 0.2)).generate();
        assert_eq!(directory.supplier_count(), 8);
        for supplier in directory.iter_suppliers() {
            assert!((2..=5).contains(&supplier.rate_count()));
        }
    }

    #[test]
    fn test_zero_overlap_fraction_produces_disjoint_periods() {
        let directory = DirectoryGenerator::from(config(3, 0.0)).generate();
        for supplier in directory.iter_suppliers() {
            let rates = supplier.rates();
            for i in 0..rates.len() {
                for j in (i + 1)..rates.len() {
                    assert!(
                        !rates[i].period().overlaps(rates[j].period()),
                        "unexpected overlap between {} and {}",
                        rates[i],
                        rates[j]
                    );
                }
            }
        }
    }

    #[test]
    fn test_full_overlap_fraction_chains_every_consecutive_pair() {
        let directory = DirectoryGenerator::from(config(5, 1.0)).generate();
        for supplier in directory.iter_suppliers() {
            let rates = supplier.rates();
            for pair in rates.windows(2) {
                assert!(
                    pair[0].period().overlaps(pair[1].period()),
                    "expected consecutive overlap between {} and {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn test_generated_rates_are_well_formed() {
        let directory = DirectoryGenerator::from(config(11, 0.5)).generate();
        for supplier in directory.iter_suppliers() {
            for rate in supplier.rates() {
                assert!(rate.period().is_well_formed());
                assert_eq!(rate.supplier_id(), supplier.id());
            }
        }
    }
}
