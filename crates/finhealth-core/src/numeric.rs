//! Numeric helpers shared by every assessment stage.
//!
//! - [`safe_divide`]: division where a zero denominator counts as 1
//! - [`clamp_score`]: restrict a score to `[0, 100]`
//! - [`round_dp`]: half-even rounding of the exact binary value of an `f64`
//! - [`format_number`] / [`format_thousands`]: number rendering for report prose

use rust_decimal::{Decimal, RoundingStrategy};

/// Lower bound of every component score.
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every component score.
pub const SCORE_MAX: f64 = 100.0;

/// Decimal places used for every number in an assessment report.
pub const REPORT_DECIMALS: u32 = 2;

/// Divides `numerator` by `denominator`, treating a zero denominator as 1.
///
/// The result for a zero denominator is therefore the numerator itself, never
/// zero and never an infinite or undefined value.
///
/// # Example
///
/// ```rust
/// use finhealth_core::numeric::safe_divide;
///
/// assert_eq!(safe_divide(45_000.0, 15_000.0), 3.0);
/// assert_eq!(safe_divide(45_000.0, 0.0), 45_000.0);
/// ```
#[inline]
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        numerator
    } else {
        numerator / denominator
    }
}

/// Clamps a raw score into `[0, 100]`.
///
/// NaN and every non-positive value (including `-0.0`) map to exactly `0.0`.
#[inline]
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() || value <= SCORE_MIN {
        SCORE_MIN
    } else {
        value.min(SCORE_MAX)
    }
}

/// Rounds `value` to `decimal_places` using round-half-even on its exact binary value.
///
/// `2.675` is stored as `2.67499999...` and therefore rounds down to `2.67`,
/// while an exactly representable tie such as `0.125` rounds to the even `0.12`.
/// The rounded decimal is converted back through its text form, which yields
/// the nearest `f64` at any magnitude. A result of zero keeps the sign of
/// `value`, so `-0.001` rounds to `-0.0`.
/// Values outside the `Decimal` range (or non-finite values) are returned unchanged.
pub fn round_dp(value: f64, decimal_places: u32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    let rounded = exact.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);

    match rounded.to_string().parse::<f64>() {
        Ok(r) if r == 0.0 => 0.0_f64.copysign(value),
        Ok(r) => r,
        Err(_) => value,
    }
}

/// Rounds to the report precision (2 decimal places).
#[inline]
pub fn round2(value: f64) -> f64 {
    round_dp(value, REPORT_DECIMALS)
}

/// Renders a float the way report prose shows it: the shortest representation
/// that round-trips, with a trailing `.0` for integral values.
///
/// Magnitudes of `1e16` and above, or below `1e-4`, switch to exponent notation
/// (`1e+16`, `5e-05`).
///
/// # Example
///
/// ```rust
/// use finhealth_core::numeric::format_number;
///
/// assert_eq!(format_number(60.0), "60.0");
/// assert_eq!(format_number(11.11), "11.11");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value.is_sign_negative() {
            "-inf".to_string()
        } else {
            "inf".to_string()
        };
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(value);
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn format_exponent(value: f64) -> String {
    let repr = format!("{value:e}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => repr,
    }
}

/// Renders a float with no decimal places and `,` thousands separators.
///
/// Rounding is half-even on the exact binary value, so `2500.5` renders as
/// `2,500` and `2501.5` as `2,502`.
///
/// # Example
///
/// ```rust
/// use finhealth_core::numeric::format_thousands;
///
/// assert_eq!(format_thousands(1_250_000.0), "1,250,000");
/// ```
pub fn format_thousands(value: f64) -> String {
    let rounded = Decimal::from_f64_retain(value)
        .map(|d| {
            d.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
                .to_string()
        })
        .unwrap_or_else(|| format!("{value:.0}"));

    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return rounded;
    }

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
