use std::borrow::Cow;

use hospitality_seeker::{Record, Value};
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Which way a student crossed the gate.
    pub enum Direction {
        In => "IN",
        Out => "OUT",
    }
}

/// A campus gate crossing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateLog {
    pub student_name: String,
    pub student_email: String,
    pub college_name: String,
    pub direction: Direction,
    /// ISO-8601 timestamp.
    pub logged_at: String,
    pub personell_name: String,
}

/// A hostel check-in scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostelLog {
    pub student_name: String,
    pub student_email: String,
    pub college_name: String,
    pub hostel_name: String,
    /// ISO-8601 timestamp.
    pub logged_at: String,
    pub personell_name: String,
}

// Logs carry no id of their own; one student cannot be scanned twice at the
// same instant.
fn log_id<'a>(logged_at: &str, email: &str) -> Cow<'a, str> {
    Cow::Owned(format!("{logged_at}|{email}"))
}

impl Record for GateLog {
    const FIELDS: &'static [&'static str] = &[
        "student_name",
        "student_email",
        "college_name",
        "direction",
        "logged_at",
        "personell_name",
    ];

    fn record_id(&self) -> Cow<'_, str> {
        log_id(&self.logged_at, &self.student_email)
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "student_name" => Value::String(&self.student_name),
            "student_email" => Value::String(&self.student_email),
            "college_name" => Value::String(&self.college_name),
            "direction" => Value::String(self.direction.as_str()),
            "logged_at" => Value::String(&self.logged_at),
            "personell_name" => Value::String(&self.personell_name),
            _ => Value::None,
        }
    }
}

impl Record for HostelLog {
    const FIELDS: &'static [&'static str] = &[
        "student_name",
        "student_email",
        "college_name",
        "hostel_name",
        "logged_at",
        "personell_name",
    ];

    fn record_id(&self) -> Cow<'_, str> {
        log_id(&self.logged_at, &self.student_email)
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "student_name" => Value::String(&self.student_name),
            "student_email" => Value::String(&self.student_email),
            "college_name" => Value::String(&self.college_name),
            "hostel_name" => Value::String(&self.hostel_name),
            "logged_at" => Value::String(&self.logged_at),
            "personell_name" => Value::String(&self.personell_name),
            _ => Value::None,
        }
    }
}
