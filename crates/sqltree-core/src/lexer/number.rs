//! Numeric literal coercion.
//!
//! The tokenizer decides where a numeric literal starts and ends; this module
//! turns the matched text into a typed value:
//!
//! - `0x1A` is a hexadecimal integer (26).
//! - A mantissa containing `.` is a float, otherwise an integer. A literal
//!   starting with `.` reads as if prefixed with `0`.
//! - A non-zero exponent (`e`/`E`) scales the mantissa by
//!   `base ^ exponent` and always yields a float. The base is chosen by
//!   [`ExponentBase`].
//! - A leading `+`/`-` applies to the whole value.

use crate::config::ExponentBase;

use super::TokenKind;

/// Coerces the text of a numeric literal into an integer or float token.
///
/// Returns `None` when the value does not fit the target type (an integer
/// outside `i64`, an exponent outside `i32`, or a non-finite float).
#[must_use]
pub fn coerce(text: &str, base: ExponentBase) -> Option<TokenKind> {
    let (negative, body) = split_sign(text);

    if let Some(digits) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        let magnitude = u64::from_str_radix(digits, 16).ok()?;
        let value = if negative {
            0i64.checked_sub_unsigned(magnitude)?
        } else {
            i64::try_from(magnitude).ok()?
        };
        return Some(TokenKind::Integer(value));
    }

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], body[at + 1..].parse::<i32>().ok()?),
        None => (body, 0),
    };

    let mantissa = if mantissa.starts_with('.') {
        format!("0{mantissa}")
    } else {
        mantissa.to_string()
    };
    let sign = if negative { "-" } else { "" };

    if exponent == 0 && !mantissa.contains('.') {
        return format!("{sign}{mantissa}")
            .parse::<i64>()
            .ok()
            .map(TokenKind::Integer);
    }

    let value = match (base, exponent) {
        (_, 0) => format!("{sign}{mantissa}").parse::<f64>().ok()?,
        (ExponentBase::Decimal, _) => format!("{sign}{mantissa}e{exponent}")
            .parse::<f64>()
            .ok()?,
        (ExponentBase::Natural, _) => {
            let m = format!("{sign}{mantissa}").parse::<f64>().ok()?;
            m * core::f64::consts::E.powi(exponent)
        }
    };

    value.is_finite().then_some(TokenKind::Float(value))
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}
