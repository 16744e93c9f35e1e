//! Diagnostic message construction
//!
//! Every validator renders its failure through [`build_error_msg`] so that
//! messages share one shape:
//!
//! ```text
//! In location 'L', for variable 'name' description, expected a 'kind', but
//! received value 'v', detail
//! ```
//!
//! Each clause before "received value" is optional.

use crate::value::{repr_str, Value};
use crate::{Result, ValidationError};

/// Where a value came from and what it was expected to be
///
/// Validators take a context instead of three separate optional arguments.
/// When `kind` is unset the validator's own default label is used.
///
/// # Examples
///
/// ```
/// use article_grammar::FieldContext;
///
/// let ctx = FieldContext::named("date (in file name)").location("file_name::article");
/// assert_eq!(ctx.name, Some("date (in file name)"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldContext<'a> {
    /// Field name; only the first space-delimited word is quoted
    pub name: Option<&'a str>,
    /// Source location the check ran in
    pub location: Option<&'a str>,
    /// Expected-kind label
    pub kind: Option<&'a str>,
}

impl<'a> FieldContext<'a> {
    /// Context with no name, location or kind
    pub const fn new() -> Self {
        Self {
            name: None,
            location: None,
            kind: None,
        }
    }

    /// Context for a named field
    pub const fn named(name: &'a str) -> Self {
        Self {
            name: Some(name),
            location: None,
            kind: None,
        }
    }

    /// Sets the field name
    pub const fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the location
    pub const fn location(mut self, location: &'a str) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the expected-kind label
    pub const fn kind(mut self, kind: &'a str) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Renders `detail` about `value` with this context
    ///
    /// `default_kind` is used when the context has no kind of its own.
    pub fn render<'v>(
        &self,
        detail: &str,
        value: impl Into<Value<'v>>,
        default_kind: Option<&str>,
    ) -> String {
        build_error_msg(
            detail,
            value,
            self.name,
            self.location,
            self.kind.or(default_kind),
        )
    }

    /// A format violation rendered with this context
    pub(crate) fn format_error<'v, T>(
        &self,
        detail: &str,
        value: impl Into<Value<'v>>,
        default_kind: Option<&str>,
    ) -> Result<T> {
        Err(ValidationError::Format(self.render(detail, value, default_kind)))
    }

    /// A type violation rendered with this context
    pub(crate) fn type_error<'v, T>(
        &self,
        detail: &str,
        value: impl Into<Value<'v>>,
        default_kind: Option<&str>,
    ) -> Result<T> {
        Err(ValidationError::Type(self.render(detail, value, default_kind)))
    }
}

/// Builds an expanded, human-readable diagnostic
///
/// Clauses are emitted in a fixed order: location, field name, expected kind,
/// the received value, then `detail` after a comma when it is non-empty. The
/// first character of the result is upper-cased.
///
/// Only the first space-delimited word of `name` is quoted, so callers can
/// append a free description after the identifier.
///
/// # Examples
///
/// ```
/// use article_grammar::build_error_msg;
///
/// let msg = build_error_msg(
///     "which is less than 0.",
///     -1i64,
///     Some("n (the count)"),
///     None,
///     Some("whole_number"),
/// );
/// assert_eq!(
///     msg,
///     "For variable 'n' (the count), expected a 'whole_number', \
///      but received value -1, which is less than 0."
/// );
/// ```
pub fn build_error_msg<'v>(
    detail: &str,
    value: impl Into<Value<'v>>,
    name: Option<&str>,
    location: Option<&str>,
    kind: Option<&str>,
) -> String {
    let mut m = String::new();

    if let Some(location) = location {
        m.push_str(&format!("in location {}, ", repr_str(location)));
    }

    if let Some(name) = name {
        let (first, rest) = match name.split_once(' ') {
            Some((first, rest)) => (first, Some(rest)),
            None => (name, None),
        };
        m.push_str(&format!("for variable '{}'", first));
        if let Some(rest) = rest {
            m.push(' ');
            m.push_str(rest);
        }
        m.push_str(", ");
    }

    if let Some(kind) = kind {
        m.push_str(&format!("expected a {}, but ", repr_str(kind)));
    }

    m.push_str(&format!("received value {}", value.into().repr()));

    if !detail.is_empty() {
        m.push_str(", ");
        m.push_str(detail);
    }

    capitalize_first(&m)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_only() {
        let msg = build_error_msg("", "abc", None, None, None);
        assert_eq!(msg, "Received value 'abc'");
    }

    #[test]
    fn test_detail_appended_after_comma() {
        let msg = build_error_msg("which is wrong.", "abc", None, None, None);
        assert_eq!(msg, "Received value 'abc', which is wrong.");
    }

    #[test]
    fn test_all_clauses_in_order() {
        let msg = build_error_msg(
            "which is 9 chars, but must be 10 chars.",
            "2021-04-1",
            Some("date"),
            Some("grammar::article"),
            Some("date"),
        );
        assert_eq!(
            msg,
            "In location 'grammar::article', for variable 'date', expected a 'date', but \
             received value '2021-04-1', which is 9 chars, but must be 10 chars."
        );
    }

    #[test]
    fn test_name_with_description() {
        let msg = build_error_msg(
            "",
            3i64,
            Some("dp (i.e. the number of decimal places)"),
            None,
            None,
        );
        assert_eq!(
            msg,
            "For variable 'dp' (i.e. the number of decimal places), received value 3"
        );
    }

    #[test]
    fn test_kind_clause_capitalized() {
        let msg = build_error_msg("", true, None, None, Some("integer"));
        assert_eq!(msg, "Expected a 'integer', but received value True");
    }

    #[test]
    fn test_context_default_kind() {
        let ctx = FieldContext::new();
        assert_eq!(
            ctx.render("", "x", Some("hex")),
            "Expected a 'hex', but received value 'x'"
        );

        let ctx = FieldContext::new().kind("hex_length_4_bytes");
        assert_eq!(
            ctx.render("", "x", Some("hex")),
            "Expected a 'hex_length_4_bytes', but received value 'x'"
        );
    }

    #[test]
    fn test_context_errors_carry_kind() {
        let ctx = FieldContext::named("n");
        let err = ctx.type_error::<()>("", 1.5, None).unwrap_err();
        assert!(err.is_type());
        let err = ctx.format_error::<()>("", 1.5, None).unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.message(), "For variable 'n', received value 1.5");
    }
}
