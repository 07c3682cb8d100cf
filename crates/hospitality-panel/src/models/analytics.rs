use serde::{Deserialize, Serialize};

/// Gate counters for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusCounts {
    #[serde(rename = "IN", default)]
    pub entered: u64,
    #[serde(rename = "OUT", default)]
    pub exited: u64,
    #[serde(rename = "CURRENTLY_INSIDE", default)]
    pub currently_inside: u64,
}

/// Inside-campus analytics row, one per day in ascending date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsideCampusSummary {
    pub date: String,
    #[serde(default)]
    pub counts: CampusCounts,
}

/// Live occupancy of one hostel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostelStats {
    pub id: String,
    pub hostel_name: String,
    pub room_count: u64,
    pub room_filled: u64,
}

impl HostelStats {
    /// Filled share in percent, rounded down. An empty hostel reports 0.
    pub fn occupancy_percent(&self) -> u64 {
        if self.room_count == 0 {
            0
        } else {
            self.room_filled.saturating_mul(100) / self.room_count
        }
    }
}

/// Live bed occupancy across all hostels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveBedsSummary {
    #[serde(default)]
    pub hostels: Vec<HostelStats>,
    #[serde(default)]
    pub total_beds_filled: u64,
}

impl LiveBedsSummary {
    /// Total bed capacity across hostels.
    pub fn total_beds(&self) -> u64 {
        self.hostels.iter().map(|h| h.room_count).sum()
    }
}
