//! es-CO display formatting: `.` groups thousands, `,` separates decimals.

#[cfg(test)]
use crate::shared::Cop;

/// Formats a peso amount with no decimals, e.g. `$ 182.371`.
pub fn format_cop(value: impl Into<f64>) -> String {
    let value: f64 = value.into();
    let rounded = value.round();
    let digits = group_thousands(&format!("{}", rounded.abs() as u64));
    if rounded < 0.0 {
        format!("-$ {digits}")
    } else {
        format!("$ {digits}")
    }
}

/// Formats a number with at most `max_fraction_digits` decimals, dropping
/// trailing zeros, e.g. `14,029`.
pub fn format_number(value: f64, max_fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", max_fraction_digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };
    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[test]
fn cop_grouping() {
    assert_eq!(format_cop(Cop::new(182_371)), "$ 182.371");
    assert_eq!(format_cop(Cop::new(1_234_567)), "$ 1.234.567");
    assert_eq!(format_cop(Cop::new(950)), "$ 950");
    assert_eq!(format_cop(Cop::ZERO), "$ 0");
}

#[test]
fn cop_negative() {
    assert_eq!(format_cop(Cop::new(-1_000)), "-$ 1.000");
}

#[test]
fn cop_from_fraction() {
    assert_eq!(format_cop(13_000.4), "$ 13.000");
}

#[test]
fn number_fraction() {
    assert_eq!(format_number(14.028_571, 3), "14,029");
    assert_eq!(format_number(491.0, 2), "491");
    assert_eq!(format_number(245.5, 2), "245,5");
}

#[test]
fn number_grouping() {
    assert_eq!(format_number(12_345.678, 1), "12.345,7");
}

#[test]
fn number_negative_zero() {
    assert_eq!(format_number(-0.0001, 2), "0");
    assert_eq!(format_number(-2.5, 1), "-2,5");
}
