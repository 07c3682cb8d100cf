use std::borrow::Cow;

use hospitality_seeker::{Record, Value};
use serde::{Deserialize, Serialize};

labelled_enum! {
    pub enum Gender {
        Male => "Male",
        Female => "Female",
        Other => "Other",
    }
}

labelled_enum! {
    pub enum CheckInStatus {
        Reserved => "Reserved",
        CheckedIn => "Checked In",
        CheckedOut => "Checked Out",
    }
}

labelled_enum! {
    /// Hostel block a registrant is placed in.
    pub enum HostelCode {
        A => "A",
        B => "B",
        C => "C",
        D => "D",
        NotAssigned => "Not Assigned",
    }
}

labelled_enum! {
    pub enum PaymentStatus {
        Paid => "Paid",
        Pending => "Pending",
    }
}

/// One accommodation registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registrant {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub roll_number: String,
    pub gender: Gender,
    pub check_in_status: CheckInStatus,
    pub accommodation_type: String,
    pub hostel: HostelCode,
    pub payment_status: PaymentStatus,
    pub days_staying: u32,
    pub check_in_date: String,
    pub check_in_time: String,
    pub check_out_date: String,
    pub check_out_time: String,
}

impl Record for Registrant {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "fullName",
        "email",
        "phone",
        "college",
        "rollNumber",
        "gender",
        "checkInStatus",
        "accommodationType",
        "hostel",
        "paymentStatus",
        "checkInDate",
        "checkInTime",
        "checkOutDate",
        "checkOutTime",
    ];

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::String(&self.id),
            "fullName" => Value::String(&self.full_name),
            "email" => Value::String(&self.email),
            "phone" => Value::String(&self.phone),
            "college" => Value::String(&self.college),
            "rollNumber" => Value::String(&self.roll_number),
            "gender" => Value::String(self.gender.as_str()),
            "checkInStatus" => Value::String(self.check_in_status.as_str()),
            "accommodationType" => Value::String(&self.accommodation_type),
            "hostel" => Value::String(self.hostel.as_str()),
            "paymentStatus" => Value::String(self.payment_status.as_str()),
            "checkInDate" => Value::String(&self.check_in_date),
            "checkInTime" => Value::String(&self.check_in_time),
            "checkOutDate" => Value::String(&self.check_out_date),
            "checkOutTime" => Value::String(&self.check_out_time),
            _ => Value::None,
        }
    }
}
