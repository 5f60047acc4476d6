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

//! Rate amounts in minor currency units.
//!
//! The overlap logic never inspects amounts; they are carried through
//! untouched. The newtype exists so an amount cannot be confused with an id
//! or a day count, and all arithmetic is checked.

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, SaturatingAdd, SaturatingSub, Zero};
use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Mul, Sub, SubAssign},
};

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Money<T = i64>(T);

impl<T: Copy> Money<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Money(value)
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    #[inline]
    pub fn checked_add(self, other: Money<T>) -> Option<Self>
    where
        T: CheckedAdd<Output = T>,
    {
        self.0.checked_add(&other.0).map(Money)
    }

    #[inline]
    pub fn checked_sub(self, other: Money<T>) -> Option<Self>
    where
        T: CheckedSub<Output = T>,
    {
        self.0.checked_sub(&other.0).map(Money)
    }

    #[inline]
    pub fn saturating_add(self, other: Money<T>) -> Self
    where
        T: SaturatingAdd<Output = T>,
    {
        Money(self.0.saturating_add(&other.0))
    }

    #[inline]
    pub fn saturating_sub(self, other: Money<T>) -> Self
    where
        T: SaturatingSub<Output = T>,
    {
        Money(self.0.saturating_sub(&other.0))
    }
}

impl<T: Copy + Display> Display for Money<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Money({})", self.0)
    }
}

impl<T> Add for Money<T>
where
    T: Copy + CheckedAdd<Output = T>,
{
    type Output = Money<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Money(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in Money + Money"),
        )
    }
}

impl<T> AddAssign for Money<T>
where
    T: Copy + CheckedAdd<Output = T>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_add(&rhs.0)
            .expect("overflow in Money += Money");
    }
}

impl<T> Sub for Money<T>
where
    T: Copy + CheckedSub<Output = T>,
{
    type Output = Money<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Money(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in Money - Money"),
        )
    }
}

impl<T> SubAssign for Money<T>
where
    T: Copy + CheckedSub<Output = T>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_sub(&rhs.0)
            .expect("underflow in Money -= Money");
    }
}

impl<T> Mul<T> for Money<T>
where
    T: Copy + CheckedMul<Output = T>,
{
    type Output = Money<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Money(
            self.0
                .checked_mul(&rhs)
                .expect("overflow in Money * scalar"),
        )
    }
}

impl<T> Sum for Money<T>
where
    T: Copy + CheckedAdd<Output = T> + Zero,
{
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::new(T::zero()), |a, b| a + b)
    }
}

impl<'a, T> Sum<&'a Money<T>> for Money<T>
where
    T: Copy + CheckedAdd<Output = T> + Zero,
{
    #[inline]
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Money::new(T::zero()), |a, b| a + *b)
    }
}

impl<T: Copy + Zero + CheckedAdd> Zero for Money<T> {
    #[inline]
    fn zero() -> Self {
        Money(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T> From<T> for Money<T> {
    #[inline]
    fn from(value: T) -> Self {
        Money(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation_and_value() {
        let amount = Money::new(10_50);
        assert_eq!(amount.value(), 10_50);
    }

    #[test]
    fn test_money_display() {
        let amount = Money::new(100);
        assert_eq!(format!("{}", amount), "Money(100)");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(100);
        let b = Money::new(50);
        assert_eq!((a + b).value(), 150);
        assert_eq!((a - b).value(), 50);
        assert_eq!((a * 3).value(), 300);
    }

    #[test]
    fn test_money_assign_ops() {
        let mut amount = Money::new(100);
        amount += Money::new(25);
        assert_eq!(amount.value(), 125);
        amount -= Money::new(50);
        assert_eq!(amount.value(), 75);
    }

    #[test]
    fn test_money_checked_ops() {
        let a = Money::new(100_i64);
        assert_eq!(a.checked_add(Money::new(50)), Some(Money::new(150)));
        assert_eq!(Money::new(i64::MAX).checked_add(Money::new(1)), None);
        assert_eq!(Money::new(i64::MIN).checked_sub(Money::new(1)), None);
    }

    #[test]
    fn test_money_saturating_ops() {
        assert_eq!(
            Money::new(i64::MAX - 10).saturating_add(Money::new(20)),
            Money::new(i64::MAX)
        );
        assert_eq!(
            Money::new(i64::MIN + 10).saturating_sub(Money::new(20)),
            Money::new(i64::MIN)
        );
    }

    #[test]
    #[should_panic(expected = "overflow in Money + Money")]
    fn test_money_add_overflow_panics() {
        let _ = Money::new(i64::MAX) + Money::new(1);
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::new(10), Money::new(20), Money::new(30)];
        let total: Money<i64> = amounts.iter().sum();
        assert_eq!(total, Money::new(60));
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::new(10) < Money::new(20));
        assert_eq!(Money::<i64>::zero(), Money::new(0));
    }
}
