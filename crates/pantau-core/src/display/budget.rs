//! Compact rupiah budget formatting for program headers.

use std::fmt;

const MILIAR: i64 = 1_000_000_000;
const JUTA: i64 = 1_000_000;

/// Program budget as the dashboard shows it: `5 M` (miliar), `250 Jt`
/// (juta), or the full amount with `.` thousands separators.
///
/// Only the leading integer of the input counts, so `"1500000000.00"` is
/// read as `1500000000`. Input that does not start with one is shown
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use pantau_core::display::Budget;
///
/// assert_eq!(Budget("5000000000").to_string(), "5 M");
/// assert_eq!(Budget("2500000").to_string(), "3 Jt");
/// assert_eq!(Budget("750000").to_string(), "750.000");
/// assert_eq!(Budget("1500000000.00").to_string(), "2 M");
/// assert_eq!(Budget("TBA").to_string(), "TBA");
/// ```
pub struct Budget<'a>(pub &'a str);

impl fmt::Display for Budget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(amount) = leading_integer(self.0) else {
            return write!(f, "{}", self.0);
        };

        if amount >= MILIAR {
            write!(f, "{} M", rounded_div(amount, MILIAR))
        } else if amount >= JUTA {
            write!(f, "{} Jt", rounded_div(amount, JUTA))
        } else {
            write!(f, "{}", group_thousands(amount))
        }
    }
}

/// Optional sign and decimal digits at the start of `raw`, after any
/// leading whitespace. Parsing stops at the first other character.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    let amount = digits.parse::<i64>().ok()?;
    Some(if negative { -amount } else { amount })
}

/// Division rounding half up, for positive amounts.
fn rounded_div(amount: i64, unit: i64) -> i64 {
    amount / unit + i64::from(amount % unit >= unit / 2)
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
