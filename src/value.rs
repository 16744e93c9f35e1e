//! Dynamic values handed to the primitive validators
//!
//! Field values arrive from an upstream parser before they are known to have
//! the right type. `Value` is the borrowed form the type checks run against,
//! and its [`Value::repr`] is how a value is quoted inside diagnostics.

use std::fmt;

/// A borrowed value of not-yet-checked type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text
    Text(&'a str),
    /// Integral number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Boolean flag
    Boolean(bool),
    /// Absent value
    Null,
}

impl<'a> Value<'a> {
    /// Short type label used in type-violation diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "str",
            Value::Integer(_) => "int",
            Value::Float(_) => "float",
            Value::Boolean(_) => "bool",
            Value::Null => "NoneType",
        }
    }

    /// Returns the text if this is a `Text` value
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is an `Integer` value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Renders the value the way it is quoted in diagnostics
    ///
    /// Text is wrapped in single quotes (double quotes when it contains a
    /// single quote and no double quote) with backslash escapes for the quote
    /// character and control characters.
    ///
    /// ```
    /// use article_grammar::Value;
    ///
    /// assert_eq!(Value::from("abc").repr(), "'abc'");
    /// assert_eq!(Value::from("it's").repr(), "\"it's\"");
    /// assert_eq!(Value::from(42i64).repr(), "42");
    /// ```
    pub fn repr(&self) -> String {
        match self {
            Value::Text(s) => repr_str(s),
            Value::Integer(n) => n.to_string(),
            Value::Float(f) => format!("{:?}", f),
            Value::Boolean(true) => "True".to_string(),
            Value::Boolean(false) => "False".to_string(),
            Value::Null => "None".to_string(),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s.as_str())
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value<'_> {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<u32> for Value<'_> {
    fn from(n: u32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<f64> for Value<'_> {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Quotes a string for display inside a diagnostic
pub(crate) fn repr_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
