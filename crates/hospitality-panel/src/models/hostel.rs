use std::borrow::Cow;

use hospitality_seeker::{Record, Value};
use serde::{Deserialize, Serialize};

/// A hostel in the accommodation inventory.
///
/// Field names follow the API, including its `longtitude` spelling.
/// Counts are signed so that out-of-range input reaches validation instead of
/// failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hostel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel_id: Option<String>,
    pub hostel_name: String,
    pub is_male: bool,
    pub room_count: i64,
    #[serde(default)]
    pub room_filled: i64,
    pub warden_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longtitude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    pub day_scholar_price: f64,
    pub outsider_price: f64,
}

impl Hostel {
    /// "Male" or "Female", as the gender filter labels it.
    pub fn gender_label(&self) -> &'static str {
        if self.is_male {
            "Male"
        } else {
            "Female"
        }
    }

    /// Beds still free.
    pub fn rooms_available(&self) -> i64 {
        (self.room_count - self.room_filled).max(0)
    }
}

impl Record for Hostel {
    const FIELDS: &'static [&'static str] = &[
        "hostel_id",
        "hostel_name",
        "is_male",
        "warden_email",
        "latitude",
        "longtitude",
        "map_url",
    ];

    fn record_id(&self) -> Cow<'_, str> {
        match &self.hostel_id {
            Some(id) => Cow::Borrowed(id),
            None => Cow::Borrowed(&self.hostel_name),
        }
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "hostel_id" => Value::from(&self.hostel_id),
            "hostel_name" => Value::String(&self.hostel_name),
            "is_male" => Value::Bool(self.is_male),
            "warden_email" => Value::String(&self.warden_email),
            "latitude" => Value::from(&self.latitude),
            "longtitude" => Value::from(&self.longtitude),
            "map_url" => Value::from(&self.map_url),
            _ => Value::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let hostel: Hostel = serde_json::from_str(
            r#"{
                "hostel_name": "AMRITA BHAVANAM - DORM",
                "is_male": false,
                "room_count": 40,
                "warden_email": "warden@example.com",
                "day_scholar_price": 250,
                "outsider_price": 400.5
            }"#,
        )
        .unwrap();
        assert_eq!(hostel.room_filled, 0);
        assert!(hostel.hostel_id.is_none());
        assert_eq!(hostel.record_id(), "AMRITA BHAVANAM - DORM");
        assert_eq!(hostel.gender_label(), "Female");
        assert_eq!(hostel.field_value("map_url"), Value::None);
        assert_eq!(hostel.rooms_available(), 40);
    }

    #[test]
    fn serialization_omits_missing_optionals() {
        let hostel = Hostel {
            hostel_id: None,
            hostel_name: "X BHAVANAM - SINGLE".into(),
            is_male: true,
            room_count: 1,
            room_filled: 0,
            warden_email: "w@example.com".into(),
            latitude: None,
            longtitude: None,
            map_url: None,
            day_scholar_price: 0.0,
            outsider_price: 0.0,
        };
        let json = serde_json::to_string(&hostel).unwrap();
        assert!(!json.contains("hostel_id"));
        assert!(!json.contains("longtitude"));
    }
}
