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

//! # Supplier Rates Core (`supplier-rates-core`)
//!
//! This crate provides the fundamental data types for modeling supplier rate
//! validity periods on a calendar.
//!
//! ## Key Concepts
//!
//! - **Periods**:
//!   - `PeriodEnd`: the end of a validity period, either a concrete calendar
//!     date or open-ended (valid indefinitely into the future).
//!   - `RatePeriod`: a closed calendar interval `[start, end]` with inclusive
//!     bounds, where the end may be open.
//!
//! - **Money**:
//!   - `Money<T>`: a rate amount in minor currency units.
//!
//! Open-ended periods are expressed as an explicit variant rather than a
//! maximum-date sentinel, so comparisons never depend on a platform's
//! concrete date range.

pub mod money;
pub mod period;
