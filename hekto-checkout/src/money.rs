//! Cent-based money helpers.

/// Render a cent amount as a two-decimal dollar string, e.g. `20.00`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Convert a dollar amount to cents, rounding to the nearest cent.
///
/// The promotion step persists the applied discount as a dollar number
/// string, so the read side goes through floating point exactly once.
#[must_use]
pub fn dollars_to_cents(dollars: f64) -> i64 {
    if dollars.is_finite() {
        (dollars * 100.0).round() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{dollars_to_cents, format_cents};

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(2000), "20.00");
        assert_eq!(format_cents(2997), "29.97");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_cents(-150), "-1.50");
    }

    #[test]
    fn converts_dollars_rounding_to_nearest_cent() {
        assert_eq!(dollars_to_cents(5.0), 500);
        assert_eq!(dollars_to_cents(19.995), 2000);
        assert_eq!(dollars_to_cents(0.1), 10);
    }

    #[test]
    fn non_finite_dollars_become_zero() {
        assert_eq!(dollars_to_cents(f64::NAN), 0);
        assert_eq!(dollars_to_cents(f64::INFINITY), 0);
    }
}
