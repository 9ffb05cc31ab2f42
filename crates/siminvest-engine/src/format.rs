//! Indonesian-locale number formatting for dashboard display
//!
//! Display simplification only, never unit conversion: the same threshold
//! boundaries apply across every view.

/// One miliar (billion) IDR: chart series divisor and "M" threshold
pub const BILLION: f64 = 1_000_000_000.0;

/// One triliun (trillion) IDR: "T" threshold
pub const TRILLION: f64 = 1_000_000_000_000.0;

/// Group an integer's digits with the id-ID thousands separator
fn group_digits(value: u64) -> String {
    let s = value.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, '.');
        }
        result.insert(0, c);
    }
    result
}

/// Short currency string: "Rp 1.00 T" at or above a trillion, "Rp 1.00 M"
/// at or above a billion, grouped digits below
pub fn format_idr_short(value: f64) -> String {
    if value >= TRILLION {
        format!("Rp {:.2} T", value / TRILLION)
    } else if value >= BILLION {
        format!("Rp {:.2} M", value / BILLION)
    } else {
        format!("Rp {}", group_digits(value.round() as u64))
    }
}

/// Full currency string with zero fraction digits
pub fn format_idr_full(value: f64) -> String {
    format!("Rp {}", group_digits(value.round() as u64))
}

/// Grouped-digit count string
pub fn format_count(value: u64) -> String {
    group_digits(value)
}

/// Format percentage
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.prec$}%", value, prec = decimals)
}
