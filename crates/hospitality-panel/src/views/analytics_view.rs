//! Analytics dashboard result type.

use serde::Serialize;

use super::Message;
use crate::models::{HostelStats, InsideCampusSummary, LiveBedsSummary};
use crate::render::{Column, TableRow};

/// Days shown in the activity history.
pub const HISTORY_DAYS: usize = 7;

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsView {
    /// The most recent day, if any data exists.
    pub latest: Option<InsideCampusSummary>,

    /// Up to [`HISTORY_DAYS`] most recent days, newest first.
    pub history: Vec<InsideCampusSummary>,

    pub beds: LiveBedsSummary,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

impl AnalyticsView {
    /// `summaries` arrive in ascending date order.
    pub fn new(summaries: Vec<InsideCampusSummary>, beds: LiveBedsSummary) -> Self {
        let latest = summaries.last().cloned();
        let history = summaries.iter().rev().take(HISTORY_DAYS).cloned().collect();
        let mut messages = Vec::new();
        if beds.hostels.is_empty() {
            messages.push(Message::warning("No hostels are reporting bed occupancy"));
        }
        AnalyticsView {
            latest,
            history,
            beds,
            messages,
        }
    }
}

impl TableRow for InsideCampusSummary {
    const COLUMNS: &'static [Column] = &[
        Column::fill("Date"),
        Column::fixed("Check-Ins", 10).right(),
        Column::fixed("Check-Outs", 10).right(),
        Column::fixed("Net Inside", 10).right(),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.counts.entered.to_string(),
            self.counts.exited.to_string(),
            self.counts.currently_inside.to_string(),
        ]
    }
}

impl TableRow for HostelStats {
    const COLUMNS: &'static [Column] = &[
        Column::fill("Hostel"),
        Column::fixed("Filled", 8).right(),
        Column::fixed("Beds", 8).right(),
        Column::fixed("Occupancy", 9).right(),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.hostel_name.clone(),
            self.room_filled.to_string(),
            self.room_count.to_string(),
            format!("{}%", self.occupancy_percent()),
        ]
    }
}
