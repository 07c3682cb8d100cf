use std::borrow::Cow;

use hospitality_seeker::{Record, Value};
use serde::{Deserialize, Serialize};

/// A bed allotted to a student who has not claimed it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAllotment {
    pub id: String,
    pub student_name: String,
    pub hostel_name: String,
    pub student_email: String,
    pub phone_number: String,
}

impl Record for PendingAllotment {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "student_name",
        "hostel_name",
        "student_email",
        "phone_number",
    ];

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "student_name" => Value::String(&self.student_name),
            "hostel_name" => Value::String(&self.hostel_name),
            "student_email" => Value::String(&self.student_email),
            "phone_number" => Value::String(&self.phone_number),
            _ => Value::None,
        }
    }
}
