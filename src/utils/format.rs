//! Display formatting for report values
//!
//! Unavailable or non-finite values render as an em dash so they show up
//! as blank cells rather than `NaN` or `inf`.

/// Placeholder for values that could not be computed
pub const NOT_AVAILABLE: &str = "—";

/// Insert thousands separators into the integer part of a formatted number
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format with a fixed number of decimals
#[must_use]
pub fn fmt_num(value: Option<f64>, decimals: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => group_thousands(&format!("{v:.decimals$}")),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format rounded to a whole number
#[must_use]
pub fn fmt_int(value: Option<f64>) -> String {
    fmt_num(value.map(f64::round), 0)
}

/// Format as a whole-currency amount, e.g. `AUD 28,000`
#[must_use]
pub fn fmt_money(value: Option<f64>, currency: &str) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{currency} {}", fmt_int(Some(v))),
        None => NOT_AVAILABLE.to_string(),
    }
}
