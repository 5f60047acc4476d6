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

//! # Supplier Rates Model (`supplier-rates-model`)
//!
//! This crate provides the domain model for supplier rate management. It
//! builds on the period and money primitives of `supplier-rates-core` to
//! represent suppliers, their priced validity periods, and the in-memory
//! directory that owns them.
//!
//! ## Key Data Structures
//!
//! - **`SupplierId` / `RateId`**: typed identifiers; rate ids are unique per
//!   directory, and overlap detection never crosses supplier boundaries.
//!
//! - **`RateRecord`**: one priced validity period. The amount is opaque to
//!   the overlap logic.
//!
//! - **`Supplier`**: a supplier and the rate records it owns.
//!
//! - **`SupplierDirectory`**: the CRUD registry. All data validation lives
//!   here (duplicate ids, ownership mismatches, reversed periods); the
//!   detector downstream accepts its contents as-is.
//!
//! - **`DirectoryGenerator`**: seeded synthetic directories for tests,
//!   benchmarks and demos.

pub mod directory;
pub mod err;
pub mod generator;
pub mod id;
pub mod rate;
pub mod supplier;

pub mod prelude {
    //! Convenience re-exports of the commonly used model types.

    pub use crate::directory::{DirectoryStats, SupplierDirectory};
    pub use crate::err::DirectoryError;
    pub use crate::generator::{
        DirectoryGenConfig, DirectoryGenConfigBuilder, DirectoryGenerator, GeneratorConfigError,
    };
    pub use crate::id::{RateId, SupplierId};
    pub use crate::rate::RateRecord;
    pub use crate::supplier::Supplier;
    pub use supplier_rates_core::money::Money;
    pub use supplier_rates_core::period::{PeriodEnd, RatePeriod};
}
