//! Hostel inventory.

use std::num::NonZeroUsize;

use hospitality_seeker::{Schema, ViewCoordinator};

use super::{page_size, ALL};
use crate::error::Result;
use crate::models::Hostel;
use crate::render::{Column, TableRow};

pub const TITLE: &str = "Hostels";
pub const PAGE_SIZE: NonZeroUsize = page_size(25);

pub fn schema() -> Result<Schema> {
    Ok(Schema::builder()
        .searchable("hostel_name")
        .searchable("warden_email")
        .bool_label("gender", "is_male", ALL, [("Male", true), ("Female", false)])
        .build()?)
}

pub fn coordinator(page_size: Option<NonZeroUsize>) -> Result<ViewCoordinator<Hostel>> {
    Ok(ViewCoordinator::new(schema()?, page_size.unwrap_or(PAGE_SIZE))?)
}

impl TableRow for Hostel {
    const COLUMNS: &'static [Column] = &[
        Column::fixed("ID", 10),
        Column::fill("Name"),
        Column::fixed("Gender", 6),
        Column::fixed("Rooms", 9).right(),
        Column::fill("Warden"),
        Column::fixed("Day scholar", 11).right(),
        Column::fixed("Outsider", 8).right(),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.hostel_id.clone().unwrap_or_default(),
            self.hostel_name.clone(),
            self.gender_label().to_string(),
            format!("{}/{}", self.room_filled, self.room_count),
            self.warden_email.clone(),
            format!("{:.2}", self.day_scholar_price),
            format!("{:.2}", self.outsider_price),
        ]
    }
}
