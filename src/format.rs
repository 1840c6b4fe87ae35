// src/format.rs
//
// hu-HU number formatting: U+00A0 groups thousands, comma is the decimal
// separator. The locale leaves four-digit integers ungrouped ("1234", but
// "12 345"). All functions are pure; non-numeric input comes back as text.

use crate::core::sanitize::strip_ws;

pub const GROUP_SEP: char = '\u{a0}';
pub const DECIMAL_SEP: char = ',';
pub const CURRENCY_SUFFIX: &str = " Ft";
/// Shortest integer part that gets group separators.
pub const MIN_GROUPED_DIGITS: usize = 5;

/// How many fraction digits to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fraction {
    /// Exactly n digits, zero padded.
    Exact(usize),
    /// Up to n digits, trailing zeros dropped.
    UpTo(usize),
}

/// Parse a numeric-like cell: whitespace stripped, comma read as the decimal
/// point. Only plain finite decimals are accepted, so "inf", "NaN" or
/// "12 m2" stay text.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = strip_ws(raw).replace(',', ".");
    if s.is_empty() {
        return None;
    }
    let plain = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !plain || !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn group_int(digits: &str) -> String {
    if digits.len() < MIN_GROUPED_DIGITS {
        return s!(digits);
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let n = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(GROUP_SEP);
        }
        out.push(ch);
    }
    out
}

/// Locale-format a number.
pub fn format_number(value: f64, fraction: Fraction) -> String {
    let places = match fraction {
        Fraction::Exact(n) | Fraction::UpTo(n) => n,
    };
    // Round half away from zero; `{:.N}` alone would round half to even.
    let scale = 10f64.powi(places as i32);
    let rounded = (value.abs() * scale).round() / scale;
    let fixed = format!("{:.*}", places, rounded);

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };
    let frac = match fraction {
        Fraction::Exact(_) => frac_part,
        Fraction::UpTo(_) => frac_part.trim_end_matches('0'),
    };

    let negative = value < 0.0 && (rounded != 0.0);
    let mut out = s!();
    if negative { out.push('-'); }
    out.push_str(&group_int(int_part));
    if !frac.is_empty() {
        out.push(DECIMAL_SEP);
        out.push_str(frac);
    }
    out
}

/// Fixed-point text with a `.` separator and no grouping: 45.5 -> "45.50".
/// Halves round away from zero; a negative input keeps its sign.
pub fn format_fixed(value: f64, places: usize) -> String {
    let scale = 10f64.powi(places as i32);
    let rounded = (value.abs() * scale).round() / scale;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{:.*}", places, rounded)
}

/// "12500000" -> "12 500 000 Ft", "1234" -> "1234 Ft". Empty/absent -> "", text stays text.
pub fn format_currency(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
        return s!();
    };
    match parse_number(raw) {
        Some(v) => join!(format_number(v, Fraction::UpTo(3)), CURRENCY_SUFFIX),
        None => s!(raw),
    }
}

/// "1234,5" -> "1234,50", "12345" -> "12 345,00". Empty/absent -> "", text stays text.
pub fn format_decimal2(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
        return s!();
    };
    match parse_number(raw) {
        Some(v) => format_number(v, Fraction::Exact(2)),
        None => s!(raw),
    }
}
