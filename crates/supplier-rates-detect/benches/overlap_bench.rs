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

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use supplier_rates_detect::{overlap::find_overlapping_rates, report::find_overlaps};
use supplier_rates_model::prelude::*;

fn horizon_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid calendar date")
}

fn directory(suppliers: usize, min_rates: usize, max_rates: usize) -> SupplierDirectory {
    let config = DirectoryGenConfigBuilder::new()
        .supplier_count(suppliers)
        .rates_per_supplier(min_rates, max_rates)
        .horizon(horizon_start(), 730)
        .overlap_fraction(0.3)
        .seed(0xD0C5)
        .build()
        .expect("valid generator config");
    DirectoryGenerator::from(config).generate()
}

fn bench_find_overlapping_rates(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_overlapping_rates");
    for rates_per_supplier in [4usize, 16, 64] {
        let dir = directory(1, rates_per_supplier, rates_per_supplier);
        let rates = dir
            .rates_for(SupplierId::new(1))
            .expect("generated supplier")
            .to_vec();
        group.bench_function(format!("rates_{rates_per_supplier}"), |b| {
            b.iter(|| find_overlapping_rates(black_box(&rates)))
        });
    }
    group.finish();
}

fn bench_find_overlaps_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_overlaps");
    for suppliers in [10usize, 100] {
        let dir = directory(suppliers, 2, 8);
        group.bench_function(format!("suppliers_{suppliers}"), |b| {
            b.iter(|| find_overlaps(black_box(&dir), None))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_find_overlapping_rates,
    bench_find_overlaps_directory
);
criterion_main!(benches);
