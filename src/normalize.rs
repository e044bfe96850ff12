//! Platform-independent text encoding of floating-point numbers.
//!
//! ## Encoding
//!
//! ```text
//! normalize(x) = <sign><exponent>:<mantissa bits>
//! ```
//!
//! Where:
//! - `sign`: `+` or `-`
//! - `exponent`: signed decimal count of halvings (positive) or doublings
//!   (negative) needed to bring `|x|` into `(0.5, 1]`
//! - `mantissa bits`: binary digits produced by repeatedly testing for `>= 1`,
//!   subtracting 1 and doubling, until the remainder is exactly zero
//!
//! Zero of either sign encodes as `+0:`. Examples: `1.0 -> "+0:1"`,
//! `0.5 -> "+-1:1"`, `-2.0 -> "-1:1"`, `3.0 -> "+2:011"`.
//!
//! Halving, doubling and subtracting one are exact in IEEE-754 binary64, so
//! the encoding only depends on the value, never on the platform.

use crate::canonical::HashError;

/// Upper bound on the encoded length, sign and exponent included.
pub const MAX_ENCODED_LEN: usize = 1000;

/// Encode a float in the canonical text form.
///
/// # Errors
///
/// [`HashError::NumericEncoding`] for NaN and infinities, or if the mantissa
/// does not terminate within [`MAX_ENCODED_LEN`] characters.
///
/// # Example
///
/// ```rust
/// use object_hash::normalize_float;
///
/// assert_eq!(normalize_float(1.0).unwrap(), "+0:1");
/// assert_eq!(normalize_float(-0.0).unwrap(), "+0:");
/// assert_eq!(normalize_float(0.75).unwrap(), "+0:011");
/// ```
pub fn normalize_float(value: f64) -> Result<String, HashError> {
    normalize_with_limit(value, MAX_ENCODED_LEN)
}

pub(crate) fn normalize_with_limit(value: f64, limit: usize) -> Result<String, HashError> {
    if value == 0.0 {
        return Ok("+0:".to_string());
    }
    // Halving infinity never reaches (0.5, 1] and NaN never reaches zero.
    if !value.is_finite() {
        return Err(HashError::numeric(value, "value is not finite"));
    }

    let mut out = String::with_capacity(64);
    let mut magnitude = value;
    if magnitude < 0.0 {
        out.push('-');
        magnitude = -magnitude;
    } else {
        out.push('+');
    }

    let mut exponent: i32 = 0;
    while magnitude > 1.0 {
        magnitude /= 2.0;
        exponent += 1;
    }
    while magnitude <= 0.5 {
        magnitude *= 2.0;
        exponent -= 1;
    }
    out.push_str(&exponent.to_string());
    out.push(':');

    while magnitude != 0.0 {
        if magnitude >= 1.0 {
            out.push('1');
            magnitude -= 1.0;
        } else {
            out.push('0');
        }

        if out.len() >= limit || magnitude >= 1.0 {
            return Err(HashError::numeric(
                value,
                format!("mantissa did not terminate within {limit} characters"),
            ));
        }

        magnitude *= 2.0;
    }

    Ok(out)
}
