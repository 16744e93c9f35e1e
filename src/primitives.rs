//! Primitive validators
//!
//! Type and format assertions for base values. Each function returns `Ok(())`
//! or fails with a diagnostic built by [`crate::build_error_msg`]. Functions
//! taking `impl Into<Value>` perform a type check first and raise
//! [`ValidationError::Type`](crate::ValidationError::Type) on mismatch.

use crate::message::FieldContext;
use crate::value::Value;
use crate::Result;

/// Characters permitted in hex strings (lowercase only)
pub const HEX_DIGITS: &str = "0123456789abcdef";

/// Checks that `value` is text
pub fn validate_string<'v>(value: impl Into<Value<'v>>, ctx: &FieldContext<'_>) -> Result<()> {
    expect_text(value.into(), ctx, "string").map(|_| ())
}

/// Checks that `value` is exactly a boolean
pub fn validate_boolean<'v>(value: impl Into<Value<'v>>, ctx: &FieldContext<'_>) -> Result<()> {
    let value = value.into();
    match value {
        Value::Boolean(_) => Ok(()),
        other => ctx.type_error(
            &format!("which has type '{}', not 'bool'.", other.type_name()),
            other,
            Some("boolean"),
        ),
    }
}

/// Checks that `value` is exactly an integer (a float or boolean is not)
pub fn validate_integer<'v>(value: impl Into<Value<'v>>, ctx: &FieldContext<'_>) -> Result<()> {
    expect_integer(value.into(), ctx, "integer").map(|_| ())
}

/// Checks that `value` is an integer no smaller than zero
///
/// ```
/// use article_grammar::{validate_whole_number, FieldContext};
///
/// let ctx = FieldContext::new();
/// assert!(validate_whole_number(0i64, &ctx).is_ok());
/// assert!(validate_whole_number(-1i64, &ctx).is_err());
/// assert!(validate_whole_number(0.0, &ctx).is_err());
/// ```
pub fn validate_whole_number<'v>(
    value: impl Into<Value<'v>>,
    ctx: &FieldContext<'_>,
) -> Result<()> {
    check_non_negative(value.into(), ctx, "whole_number")
}

/// Checks that `value` is an integer and rejects negatives
///
/// Zero is accepted here as well; the two checks differ only in their
/// default kind label.
pub fn validate_positive_integer<'v>(
    value: impl Into<Value<'v>>,
    ctx: &FieldContext<'_>,
) -> Result<()> {
    check_non_negative(value.into(), ctx, "positive_integer")
}

fn check_non_negative(value: Value<'_>, ctx: &FieldContext<'_>, kind: &str) -> Result<()> {
    let n = expect_integer(value, ctx, kind)?;
    if n < 0 {
        return ctx.format_error("which is less than 0.", n, Some(kind));
    }
    Ok(())
}

/// Checks that `value` is text made only of lowercase hex digits
///
/// Every offending index is reported, not just the first.
///
/// ```
/// use article_grammar::{validate_hex, FieldContext};
///
/// let err = validate_hex("xyz", &FieldContext::new()).unwrap_err();
/// assert!(err.message().contains("indices [0, 1, 2]"));
/// ```
pub fn validate_hex<'v>(value: impl Into<Value<'v>>, ctx: &FieldContext<'_>) -> Result<()> {
    check_hex(value.into(), ctx, "hex").map(|_| ())
}

fn check_hex<'v>(value: Value<'v>, ctx: &FieldContext<'_>, kind: &str) -> Result<&'v str> {
    let s = expect_text(value, ctx, kind)?;
    let (indices, chars) = offending_chars(s, |c| HEX_DIGITS.contains(c));
    if !indices.is_empty() {
        return ctx.format_error(
            &format!(
                "where the chars at indices {:?} (with values {}) are not hex chars.",
                indices, chars
            ),
            s,
            Some(kind),
        );
    }
    Ok(s)
}

/// Checks that `value` is a hex string encoding exactly `byte_count` bytes
///
/// One byte is two hex characters.
pub fn validate_hex_length<'v>(
    value: impl Into<Value<'v>>,
    byte_count: usize,
    ctx: &FieldContext<'_>,
) -> Result<()> {
    let kind = format!("hex_length_{}_bytes", byte_count);
    let s = check_hex(value.into(), ctx, &kind)?;
    let length = s.chars().count();
    let expected = match byte_count.checked_mul(2) {
        Some(expected) if expected == length => return Ok(()),
        Some(expected) => expected.to_string(),
        None => format!("2x{}", byte_count),
    };
    ctx.format_error(
        &format!("whose length is {} chars, not {} chars.", length, expected),
        s,
        Some(kind.as_str()),
    )
}

/// Checks that `value` is text of the form `digits . exactly-dp-digits`
///
/// The integer part may be empty (`".50"` passes for two decimal places).
pub fn validate_string_is_decimal<'v>(
    value: impl Into<Value<'v>>,
    decimal_places: usize,
    ctx: &FieldContext<'_>,
) -> Result<()> {
    let kind = "string_is_decimal";
    let s = expect_text(value.into(), ctx, kind)?;
    let valid = match s.split_once('.') {
        Some((whole, fraction)) => {
            whole.chars().all(|c| c.is_ascii_digit())
                && fraction.chars().all(|c| c.is_ascii_digit())
                && fraction.len() == decimal_places
        }
        None => false,
    };
    if !valid {
        return ctx.format_error(
            &format!(
                "which is not a valid {}-decimal-place decimal value.",
                decimal_places
            ),
            s,
            Some(kind),
        );
    }
    Ok(())
}

/// Checks that `value` is `"0"` or a string-encoded positive integer
pub fn validate_string_is_whole_number<'v>(
    value: impl Into<Value<'v>>,
    ctx: &FieldContext<'_>,
) -> Result<()> {
    let kind = "string_is_whole_number";
    let s = expect_text(value.into(), ctx, kind)?;
    if s == "0" {
        return Ok(());
    }
    check_positive_integer_text(s, ctx, kind)
}

/// Checks that `value` is non-empty, not `"0"`, and all ASCII digits
///
/// Every offending index is reported.
pub fn validate_string_is_positive_integer<'v>(
    value: impl Into<Value<'v>>,
    ctx: &FieldContext<'_>,
) -> Result<()> {
    let kind = "string_is_positive_integer";
    let s = expect_text(value.into(), ctx, kind)?;
    check_positive_integer_text(s, ctx, kind)
}

fn check_positive_integer_text(s: &str, ctx: &FieldContext<'_>, kind: &str) -> Result<()> {
    if s.is_empty() {
        return ctx.format_error("which is empty.", s, Some(kind));
    }
    if s == "0" {
        return ctx.format_error("0 is not a positive number.", s, Some(kind));
    }
    let (indices, chars) = offending_chars(s, |c| c.is_ascii_digit());
    if !indices.is_empty() {
        return ctx.format_error(
            &format!(
                "where the chars at indices {:?} (with values {}) are not digits.",
                indices, chars
            ),
            s,
            Some(kind),
        );
    }
    Ok(())
}

/// Checks that `value` is text of the exact shape `DDDD-DD-DD`
///
/// Only the shape is checked: `"2021-13-99"` passes.
pub fn validate_string_is_date<'v>(
    value: impl Into<Value<'v>>,
    ctx: &FieldContext<'_>,
) -> Result<()> {
    let kind = "string_is_date";
    let s = expect_text(value.into(), ctx, kind)?;
    let bytes = s.as_bytes();
    let valid = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !valid {
        return ctx.format_error("which is not a valid YYYY-MM-DD date string.", s, Some(kind));
    }
    Ok(())
}

fn expect_text<'v>(value: Value<'v>, ctx: &FieldContext<'_>, kind: &str) -> Result<&'v str> {
    match value {
        Value::Text(s) => Ok(s),
        other => ctx.type_error(
            &format!("which has type '{}', not 'str'.", other.type_name()),
            other,
            Some(kind),
        ),
    }
}

fn expect_integer(value: Value<'_>, ctx: &FieldContext<'_>, kind: &str) -> Result<i64> {
    match value {
        Value::Integer(n) => Ok(n),
        other => ctx.type_error(
            &format!("which has type '{}', not 'int'.", other.type_name()),
            other,
            Some(kind),
        ),
    }
}

/// Indices (in chars) and comma-joined values of chars failing `permitted`
fn offending_chars(s: &str, permitted: impl Fn(char) -> bool) -> (Vec<usize>, String) {
    let mut indices = Vec::new();
    let mut chars = Vec::new();
    for (i, c) in s.chars().enumerate() {
        if !permitted(c) {
            indices.push(i);
            chars.push(c.to_string());
        }
    }
    (indices, chars.join(","))
}
