//! Accommodation API collaborators.
//!
//! Paths are relative to the configured base URL.

mod client;
pub mod envelope;

pub use client::ApiClient;

pub const LOGIN: &str = "accommodation/panel/login";
pub const LOGOUT: &str = "accommodation/panel/logout";
pub const SESSION: &str = "accommodation/panel/session";
pub const REGISTRANTS: &str = "accommodation/panel";
pub const HOSTELS: &str = "accommodation/panel/hostel";
pub const UNCLAIMED_BEDS: &str = "accommodation/panel/beds/unclaimed";
pub const GATE_LOGS: &str = "accommodation/panel/gate/logs";
pub const HOSTEL_LOGS: &str = "accommodation/panel/hostel/logs";
pub const INSIDE_CAMPUS: &str = "analytics/hospitality/inside";
pub const LIVE_BEDS: &str = "analytics/hospitality/beds";

pub fn hostel(id: &str) -> String {
    format!("{HOSTELS}/{id}")
}

pub fn unclaimed_bed(id: &str) -> String {
    format!("{UNCLAIMED_BEDS}/{id}")
}
