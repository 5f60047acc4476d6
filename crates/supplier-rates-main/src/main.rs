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
use serde::Serialize;
use std::{fs::File, io::BufWriter, time::Instant};
use supplier_rates_detect::report::find_overlaps;
use supplier_rates_model::prelude::*;
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    supplier_count: usize,
    min_rates_per_supplier: usize,
    max_rates_per_supplier: usize,
    // Directory stats snapshot
    stats_rate_count: usize,
    stats_open_ended_count: usize,
    stats_p50_rates_per_supplier: usize,
    stats_p90_rates_per_supplier: usize,
    stats_p50_amount: i64,
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    instance: InstanceInfo,
    flagged_suppliers: usize,
    flagged_rates: usize,
    elapsed_us: u128,
}

#[derive(Debug, Clone, Serialize)]
struct DetectionReport {
    description: String,
    instances: Vec<RunResult>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn interpolate_u(val0: usize, val1: usize, step: usize, steps: usize) -> usize {
    if steps <= 1 {
        return val1;
    }
    let num = (val1 as isize - val0 as isize) * step as isize;
    (val0 as isize + num / (steps as isize - 1)).max(0) as usize
}

/// The canonical demo data set: four suppliers, two of them carrying
/// colliding rate periods.
fn demo_directory() -> SupplierDirectory {
    let admin = "System.Admin";
    let seeded = date(2021, 7, 30);
    let mut directory = SupplierDirectory::new();

    let suppliers = [
        (1, "BestValue", "1, Main Street, The District, City1"),
        (2, "Quality Corp", "2, High Street, Downtown, City2"),
        (3, "Premium Ltd", "3, Park Avenue, Uptown, City3"),
        (4, "Overlap Testing Corp", "4, Test Street, Test City"),
    ];
    for (id, name, address) in suppliers {
        directory
            .add_supplier(Supplier::new(
                SupplierId::new(id),
                name,
                Some(address.into()),
                admin,
                seeded,
            ))
            .expect("demo supplier ids are unique");
    }

    let rates = [
        // BestValue: contiguous and gapped, no collisions.
        (1, 1, 10_00, date(2015, 1, 1), Some(date(2015, 3, 31))),
        (2, 1, 20_00, date(2015, 4, 1), Some(date(2015, 5, 1))),
        (3, 1, 10_00, date(2015, 5, 30), Some(date(2015, 7, 25))),
        (4, 1, 25_00, date(2015, 10, 1), None),
        // Quality Corp: a single open-ended rate.
        (5, 2, 100_00, date(2016, 11, 1), None),
        // Premium Ltd: 6 and 8 intersect; 7 follows 6 after a one-day gap.
        (6, 3, 30_00, date(2016, 12, 1), Some(date(2017, 1, 1))),
        (7, 3, 30_00, date(2017, 1, 2), None),
        (8, 3, 35_00, date(2016, 12, 15), Some(date(2017, 1, 15))),
        // Overlap Testing Corp: a chain of collisions.
        (9, 4, 50_00, date(2020, 1, 1), Some(date(2020, 6, 30))),
        (10, 4, 60_00, date(2020, 3, 1), Some(date(2020, 9, 30))),
        (11, 4, 55_00, date(2020, 8, 1), None),
    ];
    for (id, supplier, amount, start, end) in rates {
        directory
            .add_rate(RateRecord::new(
                RateId::new(id),
                SupplierId::new(supplier),
                Money::new(amount),
                RatePeriod::from_bounds(start, end),
                admin,
                seeded,
            ))
            .expect("demo rates are valid");
    }

    directory
}

fn main() {
    enable_tracing();

    // Demo pass over the canonical data set.
    let demo = demo_directory();
    println!("Demo directory: {}", demo.stats());
    println!();
    let reports = find_overlaps(&demo, None);
    if reports.is_empty() {
        println!("No overlapping rate periods found.");
    }
    for report in &reports {
        print!("{}", report);
    }

    // Scaling pass: generated instances from small to big.
    let n_instances = 10usize;
    let min_suppliers = 10usize;
    let max_suppliers = 500usize;
    let min_rates_hi = 4usize;
    let max_rates_hi = 16usize;

    let mut results: Vec<RunResult> = Vec::with_capacity(n_instances);

    for i in 0..n_instances {
        let supplier_count = interpolate_u(min_suppliers, max_suppliers, i, n_instances);
        let max_rates = interpolate_u(min_rates_hi, max_rates_hi, i, n_instances);
        let seed: u64 = 42 + (i as u64);

        let config = DirectoryGenConfigBuilder::new()
            .supplier_count(supplier_count)
            .rates_per_supplier(1, max_rates)
            .horizon(date(2015, 1, 1), 1460)
            .overlap_fraction(0.25)
            .open_ended_fraction(0.2)
            .seed(seed)
            .build()
            .expect("valid instance config");
        let mut generator = DirectoryGenerator::from(config);
        let directory = generator.generate();
        let stats = directory.stats();

        let t0 = Instant::now();
        let reports = find_overlaps(&directory, None);
        let elapsed = t0.elapsed();

        let flagged_rates = reports.iter().map(|r| r.rates().len()).sum();
        results.push(RunResult {
            instance: InstanceInfo {
                idx: i,
                seed,
                supplier_count,
                min_rates_per_supplier: 1,
                max_rates_per_supplier: max_rates,
                stats_rate_count: stats.rate_count(),
                stats_open_ended_count: stats.open_ended_count(),
                stats_p50_rates_per_supplier: stats.p50_rates_per_supplier(),
                stats_p90_rates_per_supplier: stats.p90_rates_per_supplier(),
                stats_p50_amount: stats.p50_amount().value(),
            },
            flagged_suppliers: reports.len(),
            flagged_rates,
            elapsed_us: elapsed.as_micros(),
        });
    }

    let report = DetectionReport {
        description: "Overlap detection over generated directories: \
                      10 instances from small to big."
            .into(),
        instances: results,
    };

    let file = File::create("detection_results.json").expect("create detection_results.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("=================================================================");
    println!("======================== Detection Done =========================");
    println!("=================================================================");
    println!();
    println!("Wrote: detection_results.json");
}
