//! The [`Record`] trait: how the engine sees a flat record.

use std::borrow::Cow;

use crate::value::Value;

/// A flat record that can be searched, filtered, faceted and paged.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use hospitality_seeker::{Record, Value};
///
/// struct Guest {
///     id: String,
///     name: String,
///     paid: bool,
/// }
///
/// impl Record for Guest {
///     const FIELDS: &'static [&'static str] = &["id", "name", "paid"];
///
///     fn record_id(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.id)
///     }
///
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "id" => Value::String(&self.id),
///             "name" => Value::String(&self.name),
///             "paid" => Value::Bool(self.paid),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Field names this record type exposes through [`field_value`](Self::field_value).
    ///
    /// Schemas are validated against this list when a view is constructed.
    const FIELDS: &'static [&'static str];

    /// Stable unique identifier of this record.
    fn record_id(&self) -> Cow<'_, str>;

    /// Returns the value of a field, or [`Value::None`] for an absent or
    /// unknown field.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Short type name used in configuration errors.
    fn type_name() -> &'static str
    where
        Self: Sized,
    {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

impl<T: Record> Record for &T {
    const FIELDS: &'static [&'static str] = T::FIELDS;

    fn record_id(&self) -> Cow<'_, str> {
        (**self).record_id()
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        (**self).field_value(field)
    }

    fn type_name() -> &'static str {
        T::type_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bed {
        id: String,
        hostel: String,
    }

    impl Record for Bed {
        const FIELDS: &'static [&'static str] = &["id", "hostel"];

        fn record_id(&self) -> Cow<'_, str> {
            Cow::Borrowed(&self.id)
        }

        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "id" => Value::String(&self.id),
                "hostel" => Value::String(&self.hostel),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn manual_impl() {
        let bed = Bed {
            id: "b-1".into(),
            hostel: "A".into(),
        };
        assert_eq!(bed.record_id(), "b-1");
        assert_eq!(bed.field_value("hostel"), Value::String("A"));
        assert_eq!(bed.field_value("unknown"), Value::None);
    }

    #[test]
    fn references_are_records() {
        let bed = Bed {
            id: "b-2".into(),
            hostel: "C".into(),
        };
        let by_ref = &bed;
        assert_eq!(by_ref.field_value("hostel"), Value::String("C"));
        assert_eq!(<&Bed as Record>::FIELDS, Bed::FIELDS);
        assert_eq!(<&Bed as Record>::type_name(), "Bed");
    }
}
