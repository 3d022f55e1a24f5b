//! Core quote calculation functions.
//!
//! Pure functions for quote math - no I/O. Everything here is total:
//! bad input normalizes to a usable value instead of erroring, because
//! the desk must always be able to print a quote.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Parse a price cell from the sheet, if it holds anything numeric.
///
/// Handles Brazilian real formatting: currency symbol, spaces, dot as
/// thousands separator, comma as decimal separator. A lone dot with no
/// comma is read as a decimal point ("150.0"); once a comma is present,
/// every dot is a thousands separator ("1.234,56").
pub fn try_normalize_price(raw: &str) -> Option<Decimal> {
    let stripped = raw.replace("R$", "");
    let mut cleaned: String = stripped
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    if cleaned.contains(',') {
        cleaned = cleaned.replace('.', "").replace(',', ".");
    } else if cleaned.matches('.').count() > 1 {
        cleaned = cleaned.replace('.', "");
    }

    cleaned.parse::<Decimal>().ok()
}

/// Total variant of [`try_normalize_price`]: unparseable or negative cells
/// become 0.00. The sheet is hand-edited; one bad cell must never block
/// the desk.
pub fn normalize_price(raw: &str) -> Decimal {
    try_normalize_price(raw)
        .map(|v| v.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// Billable duration of a rental
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillableStay {
    pub days: i64,
    /// Set when the sub-day overage exceeded the grace window and an
    /// extra day was billed
    pub overage_warning: Option<String>,
}

/// Whole billable days for a rental span.
///
/// Floor of 1: a same-day or negative span still bills one day and is not
/// an error. A sub-day remainder beyond `grace` bills one extra day and
/// reports the overage; a remainder within the grace window is free.
pub fn billable_days(duration: Duration, grace: Duration) -> BillableStay {
    let total_secs = duration.num_seconds();
    let (whole, remainder) = if total_secs > 0 {
        (total_secs / 86_400, total_secs % 86_400)
    } else {
        (0, 0)
    };

    let mut days = whole.max(1);
    let mut overage_warning = None;
    if remainder > grace.num_seconds() {
        days += 1;
        let hours = remainder as f64 / 3600.0;
        overage_warning = Some(format!(
            "Devolução excede o horário de retirada em {hours:.1}h. Foi cobrada 1 diária extra."
        ));
    }

    BillableStay {
        days,
        overage_warning,
    }
}

/// Whether the month of `date` selects the peak price tier.
///
/// Tier selection looks at the pickup month only; a reservation spanning
/// a tier boundary is not prorated. That is the operator's rule, not a
/// rounding shortcut.
pub fn is_peak_month(date: NaiveDate, peak_months: &[u32]) -> bool {
    peak_months.contains(&date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(2.25), 1), dec!(2.2));
        assert_eq!(round_money(dec!(2.35), 1), dec!(2.4));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    // ==================== normalize_price tests ====================

    #[test]
    fn test_normalize_price_brazilian_format() {
        assert_eq!(normalize_price("R$ 1.234,56"), dec!(1234.56));
        assert_eq!(normalize_price("R$199,90"), dec!(199.90));
        assert_eq!(normalize_price("89,9"), dec!(89.9));
    }

    #[test]
    fn test_normalize_price_plain_numbers() {
        assert_eq!(normalize_price("150"), dec!(150));
        assert_eq!(normalize_price("150.0"), dec!(150.0));
        assert_eq!(normalize_price(" 80.00 "), dec!(80.00));
    }

    #[test]
    fn test_normalize_price_multiple_dots_are_thousands() {
        assert_eq!(normalize_price("1.234.567"), dec!(1234567));
    }

    #[test]
    fn test_normalize_price_garbage_is_zero() {
        assert_eq!(normalize_price(""), Decimal::ZERO);
        assert_eq!(normalize_price("consultar"), Decimal::ZERO);
        assert_eq!(normalize_price("R$"), Decimal::ZERO);
        assert_eq!(normalize_price("-"), Decimal::ZERO);
    }

    #[test]
    fn test_normalize_price_negative_clamps_to_zero() {
        assert_eq!(normalize_price("-50,00"), Decimal::ZERO);
        assert_eq!(try_normalize_price("-50,00"), Some(dec!(-50.00)));
    }

    #[test]
    fn test_try_normalize_price_reports_failure() {
        assert_eq!(try_normalize_price("abc"), None);
        assert_eq!(try_normalize_price("12,3,4"), None);
    }

    // ==================== billable_days tests ====================

    fn grace() -> Duration {
        Duration::hours(2)
    }

    #[test]
    fn test_billable_days_whole_days() {
        let stay = billable_days(Duration::days(3), grace());
        assert_eq!(stay.days, 3);
        assert!(stay.overage_warning.is_none());
    }

    #[test]
    fn test_billable_days_floor_of_one() {
        // Return before or at pickup still bills one day
        assert_eq!(billable_days(Duration::hours(-5), grace()).days, 1);
        assert_eq!(billable_days(Duration::zero(), grace()).days, 1);
        assert!(billable_days(Duration::hours(-5), grace())
            .overage_warning
            .is_none());
    }

    #[test]
    fn test_billable_days_same_day_within_grace() {
        let stay = billable_days(Duration::hours(1), grace());
        assert_eq!(stay.days, 1);
        assert!(stay.overage_warning.is_none());
    }

    #[test]
    fn test_billable_days_grace_boundary_exact() {
        // Exactly 3 days + 2h: the overage equals the grace window, free
        let stay = billable_days(Duration::days(3) + Duration::hours(2), grace());
        assert_eq!(stay.days, 3);
        assert!(stay.overage_warning.is_none());
    }

    #[test]
    fn test_billable_days_grace_boundary_exceeded() {
        let stay = billable_days(
            Duration::days(3) + Duration::hours(2) + Duration::seconds(1),
            grace(),
        );
        assert_eq!(stay.days, 4);
        let warning = stay.overage_warning.unwrap();
        assert!(warning.contains("2.0h"));
        assert!(warning.contains("diária extra"));
    }

    #[test]
    fn test_billable_days_same_day_beyond_grace() {
        // A same-day span longer than the grace window bills the floor
        // day plus the overage day
        let stay = billable_days(Duration::hours(5), grace());
        assert_eq!(stay.days, 2);
        assert!(stay.overage_warning.unwrap().contains("5.0h"));
    }

    #[test]
    fn test_billable_days_overage_hours_one_decimal() {
        let stay = billable_days(
            Duration::days(1) + Duration::hours(3) + Duration::minutes(30),
            grace(),
        );
        assert_eq!(stay.days, 2);
        assert!(stay.overage_warning.unwrap().contains("3.5h"));
    }

    // ==================== is_peak_month tests ====================

    #[test]
    fn test_is_peak_month() {
        let peak = [1, 2, 7, 12];
        assert!(is_peak_month(date(2026, 12, 15), &peak));
        assert!(is_peak_month(date(2026, 1, 3), &peak));
        assert!(is_peak_month(date(2026, 7, 20), &peak));
        assert!(!is_peak_month(date(2026, 3, 15), &peak));
        assert!(!is_peak_month(date(2026, 10, 1), &peak));
    }
}
