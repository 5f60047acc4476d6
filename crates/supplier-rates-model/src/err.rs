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

use crate::id::{RateId, SupplierId};
use std::fmt::Display;
use supplier_rates_core::period::RatePeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateSupplierIdError {
    id: SupplierId,
}

impl DuplicateSupplierIdError {
    #[inline]
    pub fn new(id: SupplierId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> SupplierId {
        self.id
    }
}

impl Display for DuplicateSupplierIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Supplier {} already exists", self.id)
    }
}

impl std::error::Error for DuplicateSupplierIdError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownSupplierError {
    id: SupplierId,
}

impl UnknownSupplierError {
    #[inline]
    pub fn new(id: SupplierId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> SupplierId {
        self.id
    }
}

impl Display for UnknownSupplierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Supplier {} does not exist", self.id)
    }
}

impl std::error::Error for UnknownSupplierError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateRateIdError {
    id: RateId,
    owner: SupplierId,
}

impl DuplicateRateIdError {
    #[inline]
    pub fn new(id: RateId, owner: SupplierId) -> Self {
        Self { id, owner }
    }

    #[inline]
    pub fn id(&self) -> RateId {
        self.id
    }

    /// The supplier already owning the conflicting rate id.
    #[inline]
    pub fn owner(&self) -> SupplierId {
        self.owner
    }
}

impl Display for DuplicateRateIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rate {} already exists under {}", self.id, self.owner)
    }
}

impl std::error::Error for DuplicateRateIdError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownRateError {
    id: RateId,
}

impl UnknownRateError {
    #[inline]
    pub fn new(id: RateId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> RateId {
        self.id
    }
}

impl Display for UnknownRateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rate {} does not exist", self.id)
    }
}

impl std::error::Error for UnknownRateError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupplierMismatchError {
    rate: RateId,
    expected: SupplierId,
    actual: SupplierId,
}

impl SupplierMismatchError {
    #[inline]
    pub fn new(rate: RateId, expected: SupplierId, actual: SupplierId) -> Self {
        Self {
            rate,
            expected,
            actual,
        }
    }

    #[inline]
    pub fn rate(&self) -> RateId {
        self.rate
    }

    #[inline]
    pub fn expected(&self) -> SupplierId {
        self.expected
    }

    #[inline]
    pub fn actual(&self) -> SupplierId {
        self.actual
    }
}

impl Display for SupplierMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rate {} names {} as its supplier but is owned by {}",
            self.rate, self.actual, self.expected
        )
    }
}

impl std::error::Error for SupplierMismatchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReversedPeriodError {
    rate: RateId,
    period: RatePeriod,
}

impl ReversedPeriodError {
    #[inline]
    pub fn new(rate: RateId, period: RatePeriod) -> Self {
        Self { rate, period }
    }

    #[inline]
    pub fn rate(&self) -> RateId {
        self.rate
    }

    #[inline]
    pub fn period(&self) -> RatePeriod {
        self.period
    }
}

impl Display for ReversedPeriodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rate {} has period {} ending before it starts",
            self.rate, self.period
        )
    }
}

impl std::error::Error for ReversedPeriodError {}

/// Failures of the directory's CRUD surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryError {
    DuplicateSupplierId(DuplicateSupplierIdError),
    UnknownSupplier(UnknownSupplierError),
    DuplicateRateId(DuplicateRateIdError),
    UnknownRate(UnknownRateError),
    SupplierMismatch(SupplierMismatchError),
    ReversedPeriod(ReversedPeriodError),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::DuplicateSupplierId(e) => write!(f, "{e}"),
            DirectoryError::UnknownSupplier(e) => write!(f, "{e}"),
            DirectoryError::DuplicateRateId(e) => write!(f, "{e}"),
            DirectoryError::UnknownRate(e) => write!(f, "{e}"),
            DirectoryError::SupplierMismatch(e) => write!(f, "{e}"),
            DirectoryError::ReversedPeriod(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DirectoryError {}
