//! General-notation number formatting.
//!
//! Areas are printed the way a default-configured console stream prints a
//! float: [`DEFAULT_PRECISION`] significant digits, trailing zeros dropped,
//! and scientific notation once the decimal exponent falls below -4 or
//! reaches the precision.

/// Significant digits used by [`format_general`].
pub const DEFAULT_PRECISION: usize = 6;

/// Format `value` with [`DEFAULT_PRECISION`] significant digits.
///
/// # Examples
///
/// ```
/// use lifespan_shape::format_general;
///
/// assert_eq!(format_general(12.0), "12");
/// assert_eq!(format_general(78.53975), "78.5397");
/// assert_eq!(format_general(1.0e7), "1e+07");
/// ```
pub fn format_general(value: f32) -> String {
    format_general_with(value, DEFAULT_PRECISION)
}

/// Format `value` with `precision` significant digits (minimum 1).
pub fn format_general_with(value: f32, precision: usize) -> String {
    let precision = precision.max(1);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to `precision` significant digits first; the exponent of the
    // rounded value picks the notation.
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Drop trailing fractional zeros and a dangling decimal point.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
