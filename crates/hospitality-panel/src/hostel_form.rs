//! Hostel create/edit form: name composition and client-side validation.
//!
//! Hostel names carry their room type as a suffix, e.g.
//! `"AMRITA BHAVANAM - 4 SHARING"`. The form takes the base name and the room
//! type separately and composes the stored name.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::Hostel;
use crate::views::ValidationError;

/// Separator between the base name and the room type.
pub const NAME_INFIX: &str = " BHAVANAM - ";

/// Room configuration encoded in a hostel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomType {
    #[default]
    Single,
    Dorm,
    FourSharing,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Single, RoomType::Dorm, RoomType::FourSharing];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "SINGLE",
            RoomType::Dorm => "DORM",
            RoomType::FourSharing => "4 SHARING",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = String;

    /// Accepts the stored label in any case, with `-` or `_` for the space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], " ");
        RoomType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| format!("unknown room type `{s}` (expected SINGLE, DORM or 4 SHARING)"))
    }
}

/// A hostel name split into its base and room type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostelName {
    pub base: String,
    pub room_type: RoomType,
}

impl HostelName {
    /// Composes `"<BASE> BHAVANAM - <TYPE>"`, upper-casing the base.
    pub fn compose(base: &str, room_type: RoomType) -> String {
        format!("{}{NAME_INFIX}{}", base.trim().to_uppercase(), room_type.as_str())
    }

    /// Splits a stored name. Returns `None` when the name does not follow the
    /// convention.
    pub fn parse(name: &str) -> Option<HostelName> {
        let (base, suffix) = name.rsplit_once(NAME_INFIX)?;
        let room_type = RoomType::ALL.into_iter().find(|t| t.as_str() == suffix)?;
        Some(HostelName {
            base: base.to_string(),
            room_type,
        })
    }

    pub fn to_name(&self) -> String {
        Self::compose(&self.base, self.room_type)
    }
}

/// Form input for creating a hostel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostelDraft {
    pub base_name: String,
    pub room_type: RoomType,
    pub is_male: bool,
    pub room_count: i64,
    pub room_filled: i64,
    pub warden_email: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub map_url: Option<String>,
    pub day_scholar_price: f64,
    pub outsider_price: f64,
}

impl HostelDraft {
    /// Builds the API record. Blank optional fields are dropped.
    pub fn into_hostel(self, hostel_id: Option<String>) -> Hostel {
        Hostel {
            hostel_id,
            hostel_name: HostelName::compose(&self.base_name, self.room_type),
            is_male: self.is_male,
            room_count: self.room_count,
            room_filled: self.room_filled,
            warden_email: self.warden_email.trim().to_string(),
            latitude: non_blank(self.latitude),
            longtitude: non_blank(self.longitude),
            map_url: non_blank(self.map_url),
            day_scholar_price: self.day_scholar_price,
            outsider_price: self.outsider_price,
        }
    }
}

/// Changes applied to an existing hostel by `hostels update`.
///
/// `None` keeps the current value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostelPatch {
    pub base_name: Option<String>,
    pub room_type: Option<RoomType>,
    pub is_male: Option<bool>,
    pub room_count: Option<i64>,
    pub room_filled: Option<i64>,
    pub warden_email: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub map_url: Option<String>,
    pub day_scholar_price: Option<f64>,
    pub outsider_price: Option<f64>,
}

impl HostelPatch {
    /// Applies the patch. The name is always re-composed upper-case; a stored
    /// name that does not parse is replaced only when both base and room type
    /// are given.
    pub fn apply(self, mut hostel: Hostel) -> Hostel {
        let current = HostelName::parse(&hostel.hostel_name.trim().to_uppercase());
        let base = self
            .base_name
            .or_else(|| current.as_ref().map(|n| n.base.clone()));
        let room_type = self
            .room_type
            .or_else(|| current.as_ref().map(|n| n.room_type));
        if let (Some(base), Some(room_type)) = (base, room_type) {
            hostel.hostel_name = HostelName::compose(&base, room_type);
        }
        if let Some(v) = self.is_male {
            hostel.is_male = v;
        }
        if let Some(v) = self.room_count {
            hostel.room_count = v;
        }
        if let Some(v) = self.room_filled {
            hostel.room_filled = v;
        }
        if let Some(v) = self.warden_email {
            hostel.warden_email = v.trim().to_string();
        }
        if let Some(v) = self.latitude {
            hostel.latitude = non_blank(Some(v));
        }
        if let Some(v) = self.longitude {
            hostel.longtitude = non_blank(Some(v));
        }
        if let Some(v) = self.map_url {
            hostel.map_url = non_blank(Some(v));
        }
        if let Some(v) = self.day_scholar_price {
            hostel.day_scholar_price = v;
        }
        if let Some(v) = self.outsider_price {
            hostel.outsider_price = v;
        }
        hostel
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").ok()
        })
        .as_ref()
}

fn url_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^https?://[^\s/?#]+\.[^\s/?#]+([/?#]\S*)?$").ok())
        .as_ref()
}

/// Returns `true` for a plausible email address.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(email))
}

/// Returns `true` for an absolute http(s) URL.
pub fn is_valid_url(url: &str) -> bool {
    url_pattern().is_some_and(|re| re.is_match(url))
}

fn check_coordinate(
    errors: &mut Vec<ValidationError>,
    field: &str,
    value: Option<&str>,
    limit: f64,
) {
    let Some(raw) = value else { return };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= limit => {}
        Ok(_) => errors.push(ValidationError::new(
            field,
            format!("must be between -{limit} and {limit}"),
        )),
        Err(_) => errors.push(ValidationError::new(field, "must be a number")),
    }
}

fn check_price(errors: &mut Vec<ValidationError>, field: &str, value: f64) {
    if !value.is_finite() {
        errors.push(ValidationError::new(field, "must be a number"));
    } else if value < 0.0 {
        errors.push(ValidationError::new(field, "cannot be negative"));
    }
}

/// Validates a hostel before it is sent. Every failing field is reported.
pub fn validate(hostel: &Hostel) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = hostel.hostel_name.trim();
    if name.is_empty() {
        errors.push(ValidationError::new("hostel_name", "Hostel name cannot be empty"));
    } else if HostelName::parse(&name.to_uppercase()).is_none() {
        errors.push(ValidationError::new(
            "hostel_name",
            "Hostel name must end with 'BHAVANAM - SINGLE', 'BHAVANAM - DORM', or 'BHAVANAM - 4 SHARING'",
        ));
    } else if HostelName::parse(&name.to_uppercase()).is_some_and(|n| n.base.trim().is_empty()) {
        errors.push(ValidationError::new("hostel_name", "Hostel base name cannot be empty"));
    }

    if hostel.room_count < 1 {
        errors.push(ValidationError::new(
            "room_count",
            "Available rooms must be at least 1",
        ));
    }
    if hostel.room_filled < 0 {
        errors.push(ValidationError::new(
            "room_filled",
            "Filled rooms cannot be negative",
        ));
    } else if hostel.room_count >= 1 && hostel.room_filled > hostel.room_count {
        errors.push(ValidationError::new(
            "room_filled",
            "Filled rooms cannot exceed available rooms",
        ));
    }

    if !is_valid_email(hostel.warden_email.trim()) {
        errors.push(ValidationError::new("warden_email", "Invalid email address"));
    }
    if let Some(url) = &hostel.map_url {
        if !is_valid_url(url.trim()) {
            errors.push(ValidationError::new("map_url", "Invalid URL format"));
        }
    }

    check_coordinate(&mut errors, "latitude", hostel.latitude.as_deref(), 90.0);
    check_coordinate(&mut errors, "longtitude", hostel.longtitude.as_deref(), 180.0);
    check_price(&mut errors, "day_scholar_price", hostel.day_scholar_price);
    check_price(&mut errors, "outsider_price", hostel.outsider_price);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
