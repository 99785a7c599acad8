//! Date and price arithmetic for bookings
//!
//! Pure functions, no I/O. Date strings use the `YYYY-MM-DD` wire format
//! everywhere; invalid input yields `None`/zero, never a panic.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Parse a `YYYY-MM-DD` string into a calendar date
///
/// Returns `None` if any numeric component is missing or the resulting
/// calendar date does not exist (e.g. month 13).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Number of nights between two date strings, floored at zero
///
/// Zero if either date fails to parse or the range is inverted.
pub fn nights_between(start: &str, end: &str) -> i64 {
    match (parse_date(start), parse_date(end)) {
        (Some(a), Some(b)) => (b - a).num_days().max(0),
        _ => 0,
    }
}

/// Total stay price: `nights * price_per_night` when `nights > 0`, else zero
pub fn total_price(nights: i64, price_per_night: Decimal) -> Decimal {
    if nights <= 0 {
        return Decimal::ZERO;
    }
    Decimal::from(nights) * price_per_night
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(
            parse_date("2026-02-01"),
            NaiveDate::from_ymd_opt(2026, 2, 1)
        );
    }

    #[test]
    fn test_parse_invalid_dates() {
        assert!(parse_date("2026-13-01").is_none());
        assert!(parse_date("2026-02-30").is_none());
        assert!(parse_date("bad").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date("2026-02").is_none());
        assert!(parse_date("2026-02-01-extra").is_none());
    }

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between("2026-02-01", "2026-02-04"), 3);
        // Inverted ranges clamp to zero, never negative
        assert_eq!(nights_between("2026-02-04", "2026-02-01"), 0);
        assert_eq!(nights_between("2026-02-01", "2026-02-01"), 0);
        assert_eq!(nights_between("bad", "2026-02-04"), 0);
        assert_eq!(nights_between("2026-02-01", ""), 0);
    }

    #[test]
    fn test_total_price() {
        assert_eq!(total_price(3, Decimal::new(79, 0)), Decimal::new(237, 0));
        assert_eq!(total_price(0, Decimal::new(79, 0)), Decimal::ZERO);
        assert_eq!(total_price(-1, Decimal::new(79, 0)), Decimal::ZERO);
    }
}
