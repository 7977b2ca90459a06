use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul},
};

use serde::{Deserialize, Serialize};

/// Whole Colombian pesos. Every derived cost is rounded to this unit before
/// it is added to anything else. Arithmetic saturates at the `i64` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cop(i64);

impl From<i64> for Cop {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Cop> for f64 {
    fn from(value: Cop) -> Self {
        value.0 as f64
    }
}

impl Add for Cop {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<i64> for Cop {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl Sum for Cop {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, value| acc + value)
    }
}

impl Display for Cop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Cop {
    pub const ZERO: Self = Self(0);

    pub const fn new(pesos: i64) -> Self {
        Self(pesos)
    }

    /// Rounds a fractional amount to the nearest peso, halves away from zero.
    pub fn round(amount: f64) -> Self {
        Self(amount.round() as i64)
    }

    pub const fn as_pesos(&self) -> i64 {
        self.0
    }
}

#[test]
fn round_nearest() {
    assert_eq!(Cop::round(182_371.428), Cop::new(182_371));
    assert_eq!(Cop::round(182_371.5), Cop::new(182_372));
}

#[test]
fn sum_and_double() {
    let total: Cop = [Cop::new(7_500), Cop::new(7_500)].into_iter().sum();
    assert_eq!(total * 2, Cop::new(30_000));
}

#[test]
fn saturates_instead_of_overflowing() {
    let huge = Cop::round(1e300);
    assert_eq!(huge, Cop::new(i64::MAX));
    assert_eq!(huge + Cop::new(15_000), Cop::new(i64::MAX));
    assert_eq!(huge * 2, Cop::new(i64::MAX));
}
