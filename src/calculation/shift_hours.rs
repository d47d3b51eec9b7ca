//! Per-code and per-day shift-hour computation.

use rust_decimal::Decimal;

use crate::registry::ShiftRegistry;

use super::rounding::ceil_to_minute;

/// Computes the hour contribution of a single normalized code token.
///
/// Unknown codes, non-timed codes, and timed codes with a missing start or
/// end all contribute zero. Timed codes contribute their net worked span
/// (midnight-spanning, break subtracted, floored at zero) rounded up to the
/// whole minute.
pub fn code_hours(code: &str, registry: &ShiftRegistry) -> Decimal {
    match registry.lookup(code) {
        Some(definition) => {
            let minutes = definition.kind.net_minutes();
            ceil_to_minute(Decimal::from(minutes) / Decimal::from(60))
        }
        None => Decimal::ZERO,
    }
}

/// Computes a day's shift hours: the minute-ceiled sum of the contributions
/// of its normalized code tokens.
pub fn day_shift_hours(codes: &[String], registry: &ShiftRegistry) -> Decimal {
    let sum: Decimal = codes.iter().map(|code| code_hours(code, registry)).sum();
    ceil_to_minute(sum)
}
