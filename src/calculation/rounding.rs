//! Minute-ceiling and display rounding rules.
//!
//! The calendar always rounds hour components *up* to the nearest whole
//! minute (in the worker's favor), while the final per-day total uses an
//! ordinary 2-decimal rounding for display. Both rules are kept distinct on
//! purpose; see [`ceil_to_minute`] and [`round_display`].

use rust_decimal::Decimal;

/// Rounds an hour quantity up to the nearest 1/60 of an hour.
///
/// This applies to every per-code contribution, the per-day shift-hour sum,
/// stored supplemental hours, and converted overtime hours. Zero maps to
/// zero; the function is total over non-negative inputs.
///
/// # Examples
///
/// ```
/// use shift_calendar_engine::calculation::ceil_to_minute;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 7h30m05s of raw duration rounds up to 7h31m, never down.
/// let rounded = ceil_to_minute(Decimal::from_str("7.5014").unwrap());
/// assert_eq!(rounded, Decimal::from(451) / Decimal::from(60));
/// ```
pub fn ceil_to_minute(hours: Decimal) -> Decimal {
    let minutes = Decimal::from(60);
    // Hour values built from minute counts not divisible by 3 are 28-digit
    // rounded repeating quotients (e.g. 487/60); multiplying back by 60 can
    // land a hair above the whole minute. Re-round below minute resolution
    // before ceiling so an already-whole-minute quantity stays put.
    (hours * minutes).round_dp(20).ceil() / minutes
}

/// Rounds a final hour total to 2 decimal places for display.
///
/// Distinct from [`ceil_to_minute`]: components are ceiled per minute, the
/// presented total is rounded normally.
pub fn round_display(hours: Decimal) -> Decimal {
    hours.round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_rounds_to_zero() {
        assert_eq!(ceil_to_minute(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_whole_minutes_are_unchanged() {
        assert_eq!(ceil_to_minute(dec("8.0")), dec("8.0"));
        assert_eq!(ceil_to_minute(dec("2.3")), dec("2.3")); // 138 whole minutes
    }

    #[test]
    fn test_fraction_of_a_minute_rounds_up() {
        // 7.5014 h = 450.084 min -> 451 min = 7h31m
        assert_eq!(ceil_to_minute(dec("7.5014")), Decimal::from(451) / Decimal::from(60));
    }

    #[test]
    fn test_repeating_minute_quotients_are_unchanged() {
        // 487/60 has no finite decimal form; the stored quotient times 60
        // overshoots 487 by ~2e-26 and must not ceil into a 488th minute.
        for minutes in [1i64, 7, 487, 451] {
            let hours = Decimal::from(minutes) / Decimal::from(60);
            assert_eq!(ceil_to_minute(hours), hours, "minutes = {}", minutes);
        }
    }

    #[test]
    fn test_sum_of_repeating_quotients_is_unchanged() {
        // 487 + 7 minutes entered as separate quotients still make 494.
        let sum = Decimal::from(487) / Decimal::from(60) + Decimal::from(7) / Decimal::from(60);
        assert_eq!(ceil_to_minute(sum), Decimal::from(494) / Decimal::from(60));
    }

    #[test]
    fn test_just_over_a_minute_boundary() {
        // 8 hours plus one second of raw duration becomes 8h01m.
        let value = dec("8") + Decimal::ONE / Decimal::from(3600);
        assert_eq!(ceil_to_minute(value), Decimal::from(481) / Decimal::from(60));
    }

    #[test]
    fn test_round_display_two_decimals() {
        let third = Decimal::from(1) / Decimal::from(3);
        assert_eq!(round_display(dec("8") + third), dec("8.33"));
        assert_eq!(round_display(dec("9.005")), dec("9.00")); // banker's rounding at midpoint
    }
}
