//! Size-expression parsing with binary unit suffixes.

use crate::error::{Error, Result};

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;
const TB: u64 = GB * 1024;

/// Parses a size expression with an optional binary unit suffix.
///
/// An expression matches `<number>[ ]?<unit>` where the unit is one of `B`,
/// `KB`, `MB`, `GB` or `TB` (case-insensitive, the trailing `B` may be
/// omitted, bytes when absent) using binary multiples (1 KB = 1024 B). The
/// numeric part may be fractional; the parsed byte count is the floor of
/// `number * multiplier`, computed exactly in integer arithmetic.
///
/// # Parameters
///
/// * `input` - The size expression to parse (e.g. "500", "64KB", "1.5 GB")
///
/// # Returns
///
/// The size in bytes as a [`u64`].
///
/// # Errors
///
/// Returns an error in the following cases:
///
/// - [`Error::InvalidSizeFormat`] when the expression is empty, the numeric
///   part is malformed, the unit is not recognized, or the result would
///   overflow [`u64`]
/// - [`Error::InvalidSize`] when the numeric part is negative
pub fn parse_size(input: &str) -> Result<u64> {
    let invalid = || Error::InvalidSizeFormat {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let unit_start = trimmed
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let (number_part, unit_part) = trimmed.split_at(unit_start);
    let number_part = number_part.trim_end();

    let multiplier = match unit_part.to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "K" | "KB" => KB,
        "M" | "MB" => MB,
        "G" | "GB" => GB,
        "T" | "TB" => TB,
        _ => return Err(invalid()),
    };

    // A well-formed but negative number is a distinct failure from garbage.
    if let Some(rest) = number_part.strip_prefix('-') {
        scaled_floor(rest, multiplier).map_err(|_| invalid())?;
        return Err(Error::InvalidSize {
            input: input.to_string(),
        });
    }

    scaled_floor(number_part, multiplier).map_err(|_| invalid())
}

/// Computes `floor(number * multiplier)` for a non-negative decimal literal.
///
/// The integer and fractional digits are scaled separately so the floor is
/// exact; no floating point is involved.
fn scaled_floor(number: &str, multiplier: u64) -> std::result::Result<u64, ()> {
    let (int_part, frac_part) = match number.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (number, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(());
    }

    let int_value: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| ())?
    };
    let mut total = int_value.checked_mul(u128::from(multiplier)).ok_or(())?;

    if !frac_part.is_empty() {
        let frac_value: u128 = frac_part.parse().map_err(|_| ())?;
        let denominator = 10u128
            .checked_pow(u32::try_from(frac_part.len()).map_err(|_| ())?)
            .ok_or(())?;
        let scaled = frac_value
            .checked_mul(u128::from(multiplier))
            .ok_or(())?
            / denominator;
        total = total.checked_add(scaled).ok_or(())?;
    }

    u64::try_from(total).map_err(|_| ())
}
