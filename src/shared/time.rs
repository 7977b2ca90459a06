use std::{
    fmt::Display,
    ops::{Add, Mul},
};

use serde::{Deserialize, Serialize};

/// Travel time in minutes. Fractional minutes are allowed on input; derived
/// figures are rounded with [`Duration::rounded`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(f64);

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for Duration {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Duration {
    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes)
    }

    pub const fn as_minutes(&self) -> f64 {
        self.0
    }

    /// Nearest whole minute, halves away from zero.
    pub fn rounded(&self) -> Self {
        Self(self.0.round())
    }

    pub fn to_hm_string(&self) -> String {
        let total = self.0.round() as i64;
        let h = total / 60;
        let m = total % 60;
        format!("{}:{:02}", h, m)
    }

    pub fn from_hm(time: &str) -> Option<Self> {
        let mut split = time.split(':');
        let hours: u32 = split.next()?.trim().parse().ok()?;
        let minutes: u32 = split.next()?.trim().parse().ok()?;
        if split.next().is_some() || minutes >= 60 {
            return None;
        }
        let total = hours.checked_mul(60)?.checked_add(minutes)?;
        Some(Self(total as f64))
    }
}

#[test]
fn rounded_half_up() {
    assert_eq!(Duration::from_minutes(630.5).rounded().as_minutes(), 631.0);
}

#[test]
fn parse_unparse_1() {
    let time = "0:00";
    let stime = Duration::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_2() {
    let time = "3:00";
    let stime = Duration::from_hm(time).unwrap();
    assert_eq!(stime.as_minutes(), 180.0);
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_3() {
    let time = "10:30";
    let stime = Duration::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn invalid_time_test_1() {
    assert!(Duration::from_hm("1:0a").is_none())
}

#[test]
fn invalid_time_test_2() {
    assert!(Duration::from_hm("90").is_none())
}

#[test]
fn invalid_time_test_3() {
    assert!(Duration::from_hm("1:75").is_none())
}

#[test]
fn invalid_time_test_4() {
    assert!(Duration::from_hm("99999999:00").is_none())
}
