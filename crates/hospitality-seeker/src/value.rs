//! Field values as the matchers see them.
//!
//! The [`Value`] enum represents the runtime value of a field extracted from a
//! record. Records are flat: every field is a string (including enumerated and
//! date/time strings), a boolean, or absent.

use std::borrow::Cow;

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use hospitality_seeker::Value;
///
/// struct Guest {
///     name: String,
///     paid: bool,
/// }
///
/// fn accessor<'a>(guest: &'a Guest, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&guest.name),
///         "paid" => Value::Bool(guest.paid),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// Text borrowed from the record.
    String(&'a str),
    /// Boolean value.
    Bool(bool),
    /// Missing, null, or a field the record does not expose.
    None,
}

impl<'a> Value<'a> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Textual form used for equality matching and facet lists.
    ///
    /// Booleans render as `"true"` / `"false"`; `None` has no text.
    pub fn to_text(&self) -> Option<Cow<'a, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::None => None,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a, T> From<&'a Option<T>> for Value<'a>
where
    T: AsRef<str>,
{
    fn from(opt: &'a Option<T>) -> Self {
        match opt {
            Some(s) => Value::String(s.as_ref()),
            None => Value::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_extractors() {
        assert_eq!(Value::String("hello").as_str(), Some("hello"));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));

        assert_eq!(Value::String("test").as_bool(), None);
        assert_eq!(Value::Bool(false).as_str(), None);
        assert!(Value::None.is_none());
    }

    #[test]
    fn text_form() {
        assert_eq!(Value::String("B").to_text().as_deref(), Some("B"));
        assert_eq!(Value::Bool(true).to_text().as_deref(), Some("true"));
        assert_eq!(Value::Bool(false).to_text().as_deref(), Some("false"));
        assert_eq!(Value::None.to_text(), None);
    }

    #[test]
    fn optional_strings_convert() {
        let present = Some("Map".to_string());
        let absent: Option<String> = None;
        assert_eq!(Value::from(&present), Value::String("Map"));
        assert_eq!(Value::from(&absent), Value::None);
    }
}
