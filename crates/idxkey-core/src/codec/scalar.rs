//! Module: codec::scalar
//! Responsibility: orderable text for one key component.
//! Does not own: compound joins (see `codec::join`).
//! Boundary: the tag prefix fixes cross-type order; the payload fixes
//! in-type order.

use crate::{codec::KeyEncodeError, config::NonFinitePolicy, key::KeyComponent, value::Value};
use std::fmt::Write as _;

// ── Type tags (do not reorder) ─────────────────────
pub(crate) const TAG_NUMBER: char = 'A';
pub(crate) const TAG_TIMESTAMP: char = 'B';
pub(crate) const TAG_TEXT: char = 'C';

/// First character above every type tag; used for open range bounds.
pub(crate) const TAG_CEILING: char = 'D';

// ── Number layout ──────────────────────────────────
const EXPONENT_BIAS: i32 = 1024;
const NEGATIVE_SIGN: char = '-';
const DECIMAL_POINT: char = '.';

/// Encode one structured value as an orderable scalar.
///
/// Fails with `UnsupportedKeyType` for anything but a number, timestamp, or
/// string.
pub fn encode_scalar(value: &Value) -> Result<String, KeyEncodeError> {
    let component = KeyComponent::try_from_value(value)?;

    Ok(component.encode())
}

impl KeyComponent {
    /// Orderable text for this component under the default number policy.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        push_component(&mut out, self, NonFinitePolicy::default());

        out
    }
}

pub(crate) fn push_component(out: &mut String, component: &KeyComponent, policy: NonFinitePolicy) {
    match component {
        KeyComponent::Number(v) => {
            out.push(TAG_NUMBER);
            push_number(out, *v, policy);
        }
        KeyComponent::Timestamp(v) => {
            out.push(TAG_TIMESTAMP);
            push_number(out, v.as_f64(), policy);
        }
        KeyComponent::Text(v) => {
            out.push(TAG_TEXT);
            out.push_str(v);
        }
    }
}

/// Sign + biased exponent + mantissa.
///
/// The exponent and mantissa digits come from the shortest round-trip
/// scientific form of `|value|`, so distinct values never share digits.
/// Negative values invert the exponent bias and write the exact decimal
/// `10 - mantissa`, so larger magnitudes sort first.
fn push_number(out: &mut String, value: f64, policy: NonFinitePolicy) {
    if value == 0.0 || !value.is_finite() {
        push_non_ordered_number(out, value, policy);
        return;
    }

    let (exponent, digits) = decimal_parts(value.abs());

    if value.is_sign_negative() {
        out.push(NEGATIVE_SIGN);
        let _ = write!(out, "{:04}", EXPONENT_BIAS - exponent);
        push_complement(out, &digits);
    } else {
        let _ = write!(out, "{:04}{digits}", EXPONENT_BIAS + exponent);
    }
}

fn push_non_ordered_number(out: &mut String, value: f64, policy: NonFinitePolicy) {
    let text = if value.is_nan() {
        "NaN"
    } else if value == f64::INFINITY {
        "Infinity"
    } else if value == f64::NEG_INFINITY {
        match policy {
            NonFinitePolicy::Text => "-Infinity",
            NonFinitePolicy::Ordered => "--Infinity",
        }
    } else {
        // both zeros
        "0"
    };

    out.push_str(text);
}

// Decimal exponent and mantissa text (`d` or `d.ddd`, no trailing zeros)
// of a finite, positive value. `LowerExp` always writes `<mantissa>e<exp>`.
fn decimal_parts(abs: f64) -> (i32, String) {
    let scientific = format!("{abs:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));

    (exponent.parse().unwrap_or_default(), mantissa.to_string())
}

// Exact `10 - m` for mantissa text `m` in [1, 10): nines' complement of
// every digit but the last, ten's complement of the last. The last digit
// is never zero, so the result never ends in zero either.
fn push_complement(out: &mut String, mantissa: &str) {
    let digits: Vec<u32> = mantissa.chars().filter_map(|ch| ch.to_digit(10)).collect();
    let Some((last, rest)) = digits.split_last() else {
        return;
    };

    for (i, digit) in rest.iter().enumerate() {
        if i == 1 {
            out.push(DECIMAL_POINT);
        }
        push_digit(out, 9 - digit);
    }
    if rest.len() == 1 {
        out.push(DECIMAL_POINT);
    }
    push_digit(out, 10 - last);
}

fn push_digit(out: &mut String, digit: u32) {
    if let Some(ch) = char::from_digit(digit, 10) {
        out.push(ch);
    }
}

///
/// TESTS
///
