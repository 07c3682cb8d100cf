//! Beds allotted but not yet claimed.

use std::num::NonZeroUsize;

use hospitality_seeker::{Schema, ViewCoordinator};

use super::{page_size, ALL_HOSTELS};
use crate::error::Result;
use crate::models::PendingAllotment;
use crate::render::{Column, TableRow};

pub const TITLE: &str = "Pending allotments";
pub const PAGE_SIZE: NonZeroUsize = page_size(25);

pub fn schema() -> Result<Schema> {
    Ok(Schema::builder()
        .searchable("student_name")
        .searchable("student_email")
        .searchable("phone_number")
        .equality("hostel", "hostel_name", ALL_HOSTELS)
        .build()?)
}

pub fn coordinator(page_size: Option<NonZeroUsize>) -> Result<ViewCoordinator<PendingAllotment>> {
    Ok(ViewCoordinator::new(schema()?, page_size.unwrap_or(PAGE_SIZE))?)
}

impl TableRow for PendingAllotment {
    const COLUMNS: &'static [Column] = &[
        Column::fixed("ID", 10),
        Column::fill("Student"),
        Column::fill("Email"),
        Column::fixed("Phone", 13),
        Column::fill("Hostel"),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.student_name.clone(),
            self.student_email.clone(),
            self.phone_number.clone(),
            self.hostel_name.clone(),
        ]
    }
}
