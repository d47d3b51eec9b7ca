//! Shift-code string normalization and splitting.
//!
//! Raw code strings arrive as free-form user input ("D + bijs", "v,n10").
//! Normalization produces a canonical `+`-separated lowercase form that the
//! rest of the engine (and the registry) can rely on.

/// Normalizes a raw codes string into its canonical form.
///
/// Lowercases, strips all whitespace, treats commas as the `+` separator,
/// collapses repeated separators, and trims leading/trailing separators.
/// Idempotent: normalizing an already-normalized string returns it unchanged.
///
/// # Examples
///
/// ```
/// use shift_calendar_engine::calculation::normalize_codes;
///
/// assert_eq!(normalize_codes(" D + bijs,, n10 "), "d+bijs+n10");
/// assert_eq!(normalize_codes(""), "");
/// ```
pub fn normalize_codes(raw: &str) -> String {
    let mut normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '+' } else { c })
        .flat_map(char::to_lowercase)
        .collect();

    while normalized.contains("++") {
        normalized = normalized.replace("++", "+");
    }

    normalized.trim_matches('+').to_string()
}

/// Splits a raw codes string into its ordered normalized tokens.
///
/// Empty input yields an empty sequence.
pub fn split_codes(raw: &str) -> Vec<String> {
    normalize_codes(raw)
        .split('+')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
