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

use std::fmt::Display;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SupplierId(u64);

impl SupplierId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        SupplierId(id)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Display for SupplierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SupplierId({})", self.0)
    }
}

impl From<u64> for SupplierId {
    fn from(value: u64) -> Self {
        SupplierId(value)
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateId(u64);

impl RateId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        RateId(id)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Display for RateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RateId({})", self.0)
    }
}

impl From<u64> for RateId {
    fn from(value: u64) -> Self {
        RateId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_id_roundtrip() {
        let id = SupplierId::new(3);
        assert_eq!(id.value(), 3);
        assert_eq!(SupplierId::from(3), id);
        assert_eq!(format!("{}", id), "SupplierId(3)");
    }

    #[test]
    fn test_rate_id_roundtrip() {
        let id = RateId::new(11);
        assert_eq!(id.value(), 11);
        assert_eq!(RateId::from(11), id);
        assert_eq!(format!("{}", id), "RateId(11)");
    }

    #[test]
    fn test_ids_order_by_value() {
        assert!(SupplierId::new(1) < SupplierId::new(2));
        assert!(RateId::new(9) < RateId::new(10));
    }
}
